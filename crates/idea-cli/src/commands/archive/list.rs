use idea_core::entities::Idea;
use idea_core::responses::IdeaSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, views};
use crate::ui;

#[derive(Debug, Serialize)]
struct IdeaListResponse {
    ideas: Vec<IdeaSummary>,
    total: usize,
}

pub fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let response = summarize(ctx.service.ideas(), limit);

    let prefs = ui::prefs();
    output(&response, flags.format, |resp| {
        views::idea_list(&resp.ideas, resp.total, prefs)
    })
}

fn summarize(ideas: &[Idea], limit: usize) -> IdeaListResponse {
    IdeaListResponse {
        ideas: ideas.iter().take(limit).map(IdeaSummary::from).collect(),
        total: ideas.len(),
    }
}

#[cfg(test)]
mod tests {
    use idea_core::entities::Idea;

    use super::summarize;

    fn mk(id: u64) -> Idea {
        Idea {
            id,
            title: format!("idea {id}"),
            problem: String::from("p"),
            solution: String::from("s"),
            impact: 1,
            confidence: 1,
            ease: 1,
            score: 0.1,
            date: String::from("01/01/2025 00:00"),
            ai_analysis: None,
            description: None,
        }
    }

    #[test]
    fn keeps_storage_order_and_total() {
        let ideas: Vec<Idea> = (1..=5).map(mk).collect();
        let response = summarize(&ideas, 3);
        let ids: Vec<u64> = response.ideas.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(response.total, 5);
    }
}
