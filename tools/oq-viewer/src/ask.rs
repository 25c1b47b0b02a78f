//! One-shot `ask` command: print the answer, optionally save the tree as SVG.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use oq_01_request_client::QuestionApi;
use oq_02_tree_renderer::{Bounds, RenderConfig, SvgSurface, TreeRenderer, TreeRendererApi};
use shared_types::AnswerPayload;

/// Options of the `ask` command.
#[derive(Debug, Clone)]
pub struct AskOptions {
    pub question: String,
    /// Where to write the SVG rendering, if wanted.
    pub svg: Option<PathBuf>,
    pub width: f64,
    pub height: f64,
}

/// Ask one question and report to `out`.
pub async fn run(api: &dyn QuestionApi, options: &AskOptions, out: &mut impl Write) -> Result<()> {
    let payload = api
        .submit_question(&options.question)
        .await
        .context("question failed")?;
    print_answer(&payload, out)?;

    if let Some(path) = &options.svg {
        let svg = render_svg(&payload, options.width, options.height)?;
        std::fs::write(path, svg)
            .with_context(|| format!("cannot write {}", path.display()))?;
        writeln!(out, "Tree:     written to {}", path.display())?;
    }
    Ok(())
}

/// Plain-text report of an answer.
pub fn print_answer(payload: &AnswerPayload, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Question: {}", payload.question)?;
    writeln!(out, "Answer:   {}", payload.answer)?;
    writeln!(out, "Query:    {}", payload.query)?;
    if let Some(ms) = payload.response_time_ms {
        writeln!(out, "Time:     {ms} ms")?;
    }
    match &payload.tree {
        Some(tree) => writeln!(out, "Syntax:   {tree}")?,
        None => writeln!(out, "Syntax:   (none)")?,
    }
    Ok(())
}

/// SVG document for the answer's tree.
pub fn render_svg(payload: &AnswerPayload, width: f64, height: f64) -> Result<String> {
    let config = RenderConfig::default().with_bounds(Bounds::new(width, height));
    config.validate().context("invalid drawing area")?;

    let renderer = TreeRenderer::new(config);
    let mut surface = SvgSurface::new(config.bounds);
    renderer
        .visualize(payload, &mut surface)
        .context("cannot draw syntax tree")?;
    Ok(surface.to_document())
}
