use anyhow::Context;
use idea_ai::GeminiClient;
use idea_core::errors::CoreError;
use idea_core::responses::AnalyzeResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::{output, views};
use crate::progress::Progress;
use crate::ui;

/// Handle `ideaflow analyze`.
///
/// The idea is only written when a complete analysis came back; any failure
/// leaves the file untouched.
pub async fn handle(
    args: &AnalyzeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let idea = ctx
        .service
        .find_by_title(&args.title)
        .cloned()
        .ok_or_else(|| CoreError::idea_not_found(&args.title))?;

    let client = GeminiClient::new(ctx.config.require_gemini()?)?;

    let progress = Progress::spinner(&format!(
        "Analyzing \"{}\" with {}",
        idea.title,
        client.model()
    ));
    let analysis = match client.analyze(&idea).await {
        Ok(analysis) => {
            progress.finish_clear();
            analysis
        }
        Err(error) => {
            progress.finish_err("AI analysis failed");
            return Err(error).with_context(|| format!("AI analysis of \"{}\" failed", idea.title));
        }
    };

    let attached = ctx.service.attach_analysis(&idea.title, analysis.clone())?;
    anyhow::ensure!(
        attached,
        "idea \"{}\" is no longer in the archive; analysis discarded",
        idea.title
    );

    let response = AnalyzeResponse {
        title: idea.title.clone(),
        analysis,
        replaced: idea.is_analyzed(),
    };
    let prefs = ui::prefs();
    output(&response, flags.format, |resp| views::analysis(resp, prefs))
}
