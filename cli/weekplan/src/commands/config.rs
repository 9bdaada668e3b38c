//! Config commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use weekplan_placement::StrategyKind;

use crate::config::Config;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Inspect the effective configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective configuration after environment overrides.
    Show,

    /// Print the config file path.
    Path,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    days_per_week: usize,
    blocks_per_day: usize,
    default_strategy: StrategyKind,
}

impl ConfigCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(CommandContext::load(format)?),
            ConfigSubcommand::Path => {
                println!("{}", Config::path()?.display());
                Ok(())
            }
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: Config::path()?.display().to_string(),
        days_per_week: ctx.config.days_per_week,
        blocks_per_day: ctx.config.blocks_per_day,
        default_strategy: ctx.config.default_strategy,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("days_per_week: {}", view.days_per_week);
            println!("blocks_per_day: {}", view.blocks_per_day);
            println!("default_strategy: {}", view.default_strategy);
        }
    }

    Ok(())
}
