use idea_core::dashboard::DashboardStats;
use idea_core::responses::DashboardResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, views};
use crate::ui;

/// Handle `ideaflow dashboard`.
///
/// Totals cover the whole collection; only the chart is cut to the limit.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
    let mut stats = DashboardStats::from_ideas(ctx.service.ideas());
    stats.scores.truncate(limit);

    let prefs = ui::prefs();
    output(&DashboardResponse { stats }, flags.format, |resp| {
        views::dashboard(resp, prefs)
    })
}
