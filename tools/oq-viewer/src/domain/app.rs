//! Application state management.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use oq_01_request_client::{AppState, ClientError, Completion, RequestTicket};
use oq_02_tree_renderer::{TreeRenderer, TreeRendererApi};
use shared_types::AnswerPayload;

use crate::ui::tree_canvas::TreeCache;

/// Which panel fills the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Answer text, query and notices.
    #[default]
    Answer,
    /// Syntax tree of the current answer.
    Tree,
    /// Quitting.
    Quit,
}

/// Main application model.
pub struct App {
    /// Current body panel.
    pub screen: Screen,
    /// Help overlay shown on top of the screen.
    pub show_help: bool,
    /// Question being typed.
    pub input: String,
    /// Answer slot and notices.
    pub answers: AppState,
    /// Layout and drawing settings.
    pub renderer: TreeRenderer,
    /// Where questions go, for the header.
    pub endpoint: String,
    /// When the current answer arrived.
    pub last_answer_at: Option<DateTime<Local>>,
    /// Drawing of the current tree, reused across frames.
    pub tree_cache: TreeCache,
}

impl App {
    /// Create a new application instance.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            screen: Screen::Answer,
            show_help: false,
            input: String::new(),
            answers: AppState::new(),
            renderer: TreeRenderer::default(),
            endpoint: endpoint.into(),
            last_answer_at: None,
            tree_cache: TreeCache::default(),
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns a ticket when the key submitted a question; the caller runs
    /// the request and hands the result to [`App::on_completion`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<RequestTicket> {
        if self.show_help {
            // Any key closes help
            self.show_help = false;
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.screen = Screen::Quit,
                KeyCode::Char('u') => self.input.clear(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => self.screen = Screen::Quit,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Tab => self.toggle_tree(),
            KeyCode::Enter => return Some(self.submit()),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
        None
    }

    /// Start a request for the current input, sent as typed.
    ///
    /// Notices about earlier questions are dropped.
    pub fn submit(&mut self) -> RequestTicket {
        self.answers.clear_notices();
        self.answers.begin_request(self.input.clone())
    }

    /// Switch between the answer and the tree panel.
    ///
    /// Showing the tree is refused with a notice while the current answer
    /// has none.
    pub fn toggle_tree(&mut self) {
        match self.screen {
            Screen::Tree => self.screen = Screen::Answer,
            Screen::Answer => match self.renderer.layout(self.answers.tree()) {
                Ok(_) => self.screen = Screen::Tree,
                Err(e) => self.answers.report(&e),
            },
            Screen::Quit => {}
        }
    }

    /// Apply a finished request.
    pub fn on_completion(
        &mut self,
        ticket: RequestTicket,
        result: Result<AnswerPayload, ClientError>,
    ) {
        if self.answers.complete(ticket, result) == Completion::Applied {
            self.last_answer_at = Some(Local::now());
            self.tree_cache.invalidate();
            if self.screen == Screen::Tree && !self.answers.can_visualize() {
                self.screen = Screen::Answer;
            }
        }
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.screen == Screen::Quit
    }
}
