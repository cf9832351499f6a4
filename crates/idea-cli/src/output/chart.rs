//! Horizontal bar chart of ICE scores.

use idea_core::dashboard::ScoreBar;

use super::table::truncate;

const BLOCK: char = '█';
const MAX_LABEL: usize = 28;
const DEFAULT_BAR_WIDTH: usize = 40;

/// One line per idea: title, a bar scaled to the highest score, the score.
///
/// `max_width` bounds the whole line when the terminal width is known.
#[must_use]
pub fn score_chart(bars: &[ScoreBar], max_width: Option<usize>) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let label_width = bars
        .iter()
        .map(|bar| bar.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL);
    let top = bars.iter().map(|bar| bar.score).fold(0.0_f64, f64::max);

    // label + space + bar + space + "1000.0"
    let bar_width = max_width
        .map_or(DEFAULT_BAR_WIDTH, |width| width.saturating_sub(label_width + 8))
        .clamp(10, DEFAULT_BAR_WIDTH);

    bars.iter()
        .map(|bar| {
            let label = truncate(&bar.title, label_width);
            let fill = " ".repeat(label_width.saturating_sub(label.chars().count()));
            let blocks = bar_len(bar.score, top, bar_width);
            format!(
                "{label}{fill} {}{} {:>6.1}",
                BLOCK.to_string().repeat(blocks),
                " ".repeat(bar_width - blocks),
                bar.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Blocks for `score` on a `width`-wide axis topping out at `top`. Any positive
/// score gets at least one block.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar_len(score: f64, top: f64, width: usize) -> usize {
    if top <= 0.0 || score <= 0.0 {
        return 0;
    }
    let scaled = (score / top * width as f64).round() as usize;
    scaled.clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar(title: &str, score: f64) -> ScoreBar {
        ScoreBar {
            title: title.into(),
            score,
        }
    }

    #[test]
    fn top_score_fills_the_axis() {
        assert_eq!(bar_len(100.0, 100.0, 40), 40);
        assert_eq!(bar_len(50.0, 100.0, 40), 20);
    }

    #[test]
    fn tiny_scores_still_show() {
        assert_eq!(bar_len(0.1, 1000.0, 40), 1);
    }

    #[test]
    fn empty_chart_is_empty() {
        assert_eq!(score_chart(&[], None), "");
    }

    #[test]
    fn lines_are_aligned() {
        let chart = score_chart(&[bar("Onboarding", 43.2), bar("CRM", 8.0)], None);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Onboarding "));
        assert!(lines[1].starts_with("CRM        "));
        assert!(lines[0].ends_with("  43.2"));
        assert!(lines[1].ends_with("   8.0"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[0].matches(BLOCK).count(), DEFAULT_BAR_WIDTH);
    }

    #[test]
    fn long_titles_are_truncated() {
        let chart = score_chart(&[bar(&"t".repeat(60), 10.0)], None);
        assert!(chart.starts_with(&format!("{}…", "t".repeat(MAX_LABEL - 1))));
    }

    #[test]
    fn narrow_terminal_shrinks_bars() {
        let chart = score_chart(&[bar("A", 10.0)], Some(40));
        assert_eq!(chart.matches(BLOCK).count(), 31);
    }
}
