use idea_core::ice::IceScores;
use idea_core::input::NewIdea;
use idea_core::responses::IdeaCreateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::context::AppContext;
use crate::output::{output, views};

/// Handle `ideaflow add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = NewIdea {
        title: args.title.clone(),
        problem: args.problem.clone(),
        solution: args.solution.clone(),
        ice: IceScores::new(args.impact, args.confidence, args.ease)?,
    };

    let idea = ctx.service.create_idea(input)?.clone();
    output(&IdeaCreateResponse { idea }, flags.format, |resp| {
        views::created(&resp.idea)
    })
}
