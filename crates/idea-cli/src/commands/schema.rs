use idea_core::entities::{AiAnalysis, Idea};
use schemars::{Schema, schema_for};

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `ideaflow schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_of(args.type_name);
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

fn schema_of(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Idea => schema_for!(Idea),
        SchemaType::Analysis => schema_for!(AiAnalysis),
        SchemaType::Store => schema_for!(Vec<Idea>),
    }
}
