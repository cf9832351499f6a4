use idea_core::errors::CoreError;
use idea_core::responses::IdeaDetailResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, views};
use crate::ui;

pub fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idea = ctx
        .service
        .find_by_title(title)
        .cloned()
        .ok_or_else(|| CoreError::idea_not_found(title))?;

    let prefs = ui::prefs();
    output(&IdeaDetailResponse { idea }, flags.format, |resp| {
        views::idea_detail(&resp.idea, prefs)
    })
}
