//! groupbal check - Validate input without partitioning

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::render_summary;
use crate::cli::output::{self, OutputFormat};
use crate::core::{InputSummary, validate};
use crate::error::Result;
use crate::input::{self, InputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input table or document (`-` reads stdin)
    pub input: PathBuf,

    /// Number of groups to validate against (default from config)
    #[arg(short = 'k', long)]
    pub groups: Option<usize>,

    /// Input format (guessed from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}

pub fn run(ctx: &AppContext, args: &CheckArgs) -> Result<()> {
    let groups = args.groups.unwrap_or(ctx.config.partition.groups);
    let table_options = ctx.config.input.table_options()?;
    let categories = input::load_categories(&args.input, args.format, table_options)?;
    validate(&categories, groups)?;

    let summary = InputSummary::new(&categories, groups);
    match ctx.output_format {
        OutputFormat::Json => output::emit_json(&output::robot_ok(&summary)),
        OutputFormat::Jsonl => output::emit_jsonl(&summary.categories),
        OutputFormat::Tsv => {
            output::emit_tsv(&["category", "items", "total"], &summary.categories, |c| {
                vec![c.name.clone(), c.items.to_string(), c.total.to_string()]
            });
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            println!("{}", render_summary(&summary, &ctx.config.output.group_unit));
            Ok(())
        }
    }
}
