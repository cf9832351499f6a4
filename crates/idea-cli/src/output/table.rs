#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table of string rows. Numeric cells are right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let text = truncate(header, *width);
            let text = if options.color { bold(&text) } else { text };
            pad(&text, header.chars().count().min(*width), *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push("-".repeat(divider_len));
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let len = text.chars().count();
                pad(&text, len, *width, looks_numeric(&text))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shave the widest shrinkable column one char at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

pub(crate) fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
}

/// Pad `value`, whose visible length is `len`, to `width`.
fn pad(value: &str, len: usize, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(len));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

pub(crate) fn bold(value: &str) -> String {
    format!("\u{1b}[1m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_columns_and_right_aligns_numbers() {
        let rows = vec![
            vec!["1".to_string(), "Short".to_string(), "43.2".to_string()],
            vec!["12".to_string(), "A longer title".to_string(), "0.1".to_string()],
        ];
        let table = render_table(&["id", "title", "score"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "id  title           score");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], " 1  Short            43.2");
        assert_eq!(lines[3], "12  A longer title    0.1");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["a", "b"], &[vec!["x".to_string()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }

    #[test]
    fn shrinks_widest_column_to_max_width() {
        let rows = vec![vec!["1".to_string(), "x".repeat(50)]];
        let table = render_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap_or_default();
        assert_eq!(row.chars().count(), 20);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("àèìòù", 5), "àèìòù");
        assert_eq!(truncate("àèìòù", 3), "àè…");
    }
}
