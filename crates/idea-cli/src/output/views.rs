//! Human-readable views for `--format table`.

use std::fmt::Write;

use idea_core::entities::{AiAnalysis, Idea};
use idea_core::responses::{AnalyzeResponse, DashboardResponse, IdeaSummary};

use super::chart::score_chart;
use super::table::{TableOptions, bold, render_table};
use crate::ui::UiPrefs;

fn heading(text: &str, prefs: UiPrefs) -> String {
    if prefs.color { bold(text) } else { text.to_string() }
}

#[must_use]
pub fn dashboard(resp: &DashboardResponse, prefs: UiPrefs) -> String {
    let stats = &resp.stats;
    let (Some(top), Some(best)) = (stats.top_score, stats.best_idea.as_deref()) else {
        return String::from("No ideas yet. Add one with `ideaflow add`.");
    };

    let mut out = String::new();
    let _ = writeln!(out, "Ideas:      {}", stats.total_ideas);
    let _ = writeln!(out, "Top score:  {top:.1}");
    let _ = writeln!(out, "Best idea:  {best}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading("ICE scores", prefs));
    out.push_str(&score_chart(&stats.scores, prefs.term_width));
    out
}

#[must_use]
pub fn idea_list(ideas: &[IdeaSummary], total: usize, prefs: UiPrefs) -> String {
    if ideas.is_empty() {
        return String::from("The archive is empty.");
    }
    let rows = ideas
        .iter()
        .map(|idea| {
            vec![
                idea.id.to_string(),
                idea.title.clone(),
                format!("{:.1}", idea.score),
                idea.date.clone(),
                String::from(if idea.analyzed { "yes" } else { "no" }),
            ]
        })
        .collect::<Vec<_>>();

    let mut out = render_table(
        &["id", "title", "score", "date", "analyzed"],
        &rows,
        TableOptions {
            max_width: prefs.term_width,
            color: prefs.color,
        },
    );
    if ideas.len() < total {
        let _ = write!(out, "\n({} of {total} shown)", ideas.len());
    }
    out
}

#[must_use]
pub fn idea_detail(idea: &Idea, prefs: UiPrefs) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(&format!("#{} {}", idea.id, idea.title), prefs));
    let _ = writeln!(out, "Created {}", idea.date);
    if let Some(description) = idea.description.as_deref() {
        let _ = writeln!(out, "{description}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading("Project details", prefs));
    let _ = writeln!(out, "  Problem:    {}", idea.problem);
    let _ = writeln!(out, "  Solution:   {}", idea.solution);
    let _ = writeln!(
        out,
        "  ICE:        impact {} / confidence {} / ease {}",
        idea.impact, idea.confidence, idea.ease
    );
    let _ = writeln!(out, "  Score:      {:.1}", idea.score);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading("AI analysis", prefs));
    match &idea.ai_analysis {
        Some(analysis) => out.push_str(&analysis_body(analysis)),
        None => {
            let _ = write!(
                out,
                "  Not analyzed yet. Run: ideaflow analyze \"{}\"",
                idea.title
            );
        }
    }
    out
}

#[must_use]
pub fn created(idea: &Idea) -> String {
    format!(
        "Created idea #{} \"{}\" (score {:.1})",
        idea.id, idea.title, idea.score
    )
}

#[must_use]
pub fn analysis(resp: &AnalyzeResponse, prefs: UiPrefs) -> String {
    let verb = if resp.replaced { "Re-analyzed" } else { "Analyzed" };
    format!(
        "{}\n{}",
        heading(&format!("{verb} \"{}\"", resp.title), prefs),
        analysis_body(&resp.analysis)
    )
}

fn analysis_body(analysis: &AiAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Market trends: {}", analysis.market_trends);
    let _ = writeln!(out, "  Risks:");
    for risk in &analysis.risks {
        let _ = writeln!(out, "    - {risk}");
    }
    let _ = writeln!(out, "  First steps:");
    for (n, step) in analysis.steps.iter().enumerate() {
        let _ = writeln!(out, "    {}. {step}", n + 1);
    }
    let _ = write!(out, "  Name ideas:    {}", analysis.naming.join(", "));
    out
}
