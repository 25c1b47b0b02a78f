//! OQ-Viewer: OntoQA question console.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive, against localhost:8080 (or $OQ_ENDPOINT)
//! oq-viewer
//!
//! # Interactive with canned answers, no server needed
//! oq-viewer --demo
//!
//! # One-shot, saving the syntax tree
//! oq-viewer --endpoint http://qa.example.org ask "Who wrote Dune?" --svg dune.svg
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::info;

use oq_01_request_client::{
    CannedTransport, ClientConfig, ClientError, HttpTransport, QuestionApi, QuestionService,
    RequestTicket,
};
use oq_viewer::ask::{self, AskOptions};
use oq_viewer::telemetry::{self, LogTarget};
use oq_viewer::{ui, App};
use shared_types::AnswerPayload;

/// Simulated latency of demo answers.
const DEMO_DELAY: Duration = Duration::from_millis(400);

/// OntoQA Viewer
#[derive(Parser, Debug)]
#[command(name = "oq-viewer")]
#[command(author, version, about = "Ask the OntoQA service questions and browse the syntax tree of the answer", long_about = None)]
struct Args {
    /// Base URL of the QA service (overrides OQ_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path of the question endpoint (overrides OQ_QA_PATH)
    #[arg(long)]
    path: Option<String>,

    /// Request timeout in seconds (overrides OQ_TIMEOUT_SECS)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Answer with a built-in sample instead of calling the service
    #[arg(long)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask one question, print the answer and exit
    Ask {
        /// The question, sent as is
        question: String,

        /// Write the syntax tree as SVG to this file
        #[arg(long)]
        svg: Option<PathBuf>,

        /// SVG width in pixels
        #[arg(long, default_value_t = 660.0)]
        width: f64,

        /// SVG height in pixels
        #[arg(long, default_value_t = 500.0)]
        height: f64,
    },
}

type Outcome = (RequestTicket, Result<AnswerPayload, ClientError>);

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match &args.command {
        Some(Command::Ask {
            question,
            svg,
            width,
            height,
        }) => {
            telemetry::init(&LogTarget::Stderr)?;
            let (api, _) = build_api(&args)?;
            let options = AskOptions {
                question: question.clone(),
                svg: svg.clone(),
                width: *width,
                height: *height,
            };
            ask::run(api.as_ref(), &options, &mut io::stdout()).await
        }
        None => {
            telemetry::init(&LogTarget::file_from_env())?;
            let (api, endpoint) = build_api(&args)?;
            run_tui(api, endpoint).await
        }
    }
}

/// Client configuration from env, then CLI flags on top.
fn client_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env();
    if let Some(endpoint) = &args.endpoint {
        config.base_url = endpoint.clone();
    }
    if let Some(path) = &args.path {
        config.path = path.clone();
    }
    if let Some(secs) = args.timeout {
        config.request_timeout = Some(Duration::from_secs(secs));
    }
    config.validate().context("invalid client configuration")?;
    Ok(config)
}

/// The question API to use and a label for where it points.
fn build_api(args: &Args) -> Result<(Arc<dyn QuestionApi>, String)> {
    if args.demo {
        let transport = CannedTransport::demo().with_delay(DEMO_DELAY);
        return Ok((
            Arc::new(QuestionService::new(transport)),
            "demo mode".to_string(),
        ));
    }

    let config = client_config(args)?;
    let transport = HttpTransport::new(&config).context("cannot create HTTP client")?;
    let endpoint = transport.endpoint_url().to_string();
    info!(%endpoint, timeout = ?config.request_timeout, "Using QA service");
    Ok((Arc::new(QuestionService::new(transport)), endpoint))
}

async fn run_tui(api: Arc<dyn QuestionApi>, endpoint: String) -> Result<()> {
    // Setup terminal with panic hook for cleanup
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(endpoint);
    let (tx, rx) = mpsc::unbounded_channel();

    let result = run_app(&mut terminal, &mut app, api, tx, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main application loop.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: Arc<dyn QuestionApi>,
    tx: mpsc::UnboundedSender<Outcome>,
    mut rx: mpsc::UnboundedReceiver<Outcome>,
) -> Result<()> {
    let poll_timeout = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Finished requests (non-blocking)
        while let Ok((ticket, result)) = rx.try_recv() {
            app.on_completion(ticket, result);
        }

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    if let Some(ticket) = app.handle_key(key) {
                        spawn_request(api.clone(), ticket, tx.clone());
                    }
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Run one request on its own task; the outcome comes back over `tx`.
fn spawn_request(api: Arc<dyn QuestionApi>, ticket: RequestTicket, tx: mpsc::UnboundedSender<Outcome>) {
    tokio::spawn(async move {
        let result = api.submit_question(ticket.question()).await;
        // The receiver is gone only when the UI has exited.
        let _ = tx.send((ticket, result));
    });
}
