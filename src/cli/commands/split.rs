//! groupbal split - Partition input into balanced groups

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::app::AppContext;
use crate::cli::formatters::GroupListing;
use crate::cli::output::{self, OutputFormat};
use crate::core::{BalanceMode, PartitionOptions, PartitionReport, partition_with};
use crate::error::Result;
use crate::input::{self, InputFormat};

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input table or document (`-` reads stdin)
    pub input: PathBuf,

    /// Number of groups (default from config, 4 if unset)
    #[arg(short = 'k', long)]
    pub groups: Option<usize>,

    /// Input format (guessed from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Stop after the initial allocation
    #[arg(long)]
    pub no_balance: bool,

    /// Repeat balancing passes until one performs no swap
    #[arg(long, conflicts_with = "no_balance")]
    pub until_stable: bool,

    /// Include the balancer's swap log in the output
    #[arg(long)]
    pub show_swaps: bool,
}

pub fn run(ctx: &AppContext, args: &SplitArgs) -> Result<()> {
    let groups = args.groups.unwrap_or(ctx.config.partition.groups);
    let mode = if args.until_stable || ctx.config.partition.until_stable {
        BalanceMode::UntilStable
    } else {
        BalanceMode::SinglePass
    };
    let options = PartitionOptions {
        balance: ctx.config.partition.balance && !args.no_balance,
        mode,
    };
    let show_swaps = args.show_swaps || ctx.config.output.show_swaps;

    let table_options = ctx.config.input.table_options()?;
    let categories = input::load_categories(&args.input, args.format, table_options)?;
    let partition = partition_with(&categories, groups, options)?;
    let report = PartitionReport::new(&partition, show_swaps);
    info!(
        groups = report.group_count,
        spread = report.spread,
        swaps = report.swaps,
        "split complete"
    );

    emit_report(ctx, &report, show_swaps)
}

fn emit_report(ctx: &AppContext, report: &PartitionReport, show_swaps: bool) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => output::emit_json(&output::robot_ok(report)),
        OutputFormat::Jsonl => output::emit_jsonl(&report.groups),
        OutputFormat::Tsv => {
            let rows: Vec<[String; 5]> = report
                .groups
                .iter()
                .flat_map(|group| {
                    group.items().iter().map(move |item| {
                        [
                            group.id().to_string(),
                            group.sum().to_string(),
                            item.name().to_string(),
                            item.category().to_string(),
                            item.weight().to_string(),
                        ]
                    })
                })
                .collect();
            output::emit_tsv(
                &["group", "sum", "item", "category", "weight"],
                &rows,
                |row| row.to_vec(),
            );
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Plain => {
            let listing = GroupListing::new(
                report,
                &ctx.config.output.group_unit,
                &ctx.config.output.item_unit,
            )
            .with_swaps(show_swaps);
            println!("{}", listing.render(ctx.output_format.use_colors()));
            Ok(())
        }
    }
}
