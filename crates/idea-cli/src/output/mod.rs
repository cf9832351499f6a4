use serde::Serialize;

use crate::cli::OutputFormat;

pub mod chart;
pub mod table;
pub mod views;

/// Render a response in the requested format. `table` produces the
/// human-readable view used for [`OutputFormat::Table`].
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}
