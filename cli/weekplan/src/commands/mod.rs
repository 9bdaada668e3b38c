//! CLI commands.

mod compare;
mod config;
mod plan;
mod validate;

use std::path::Path;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, info};
use weekplan_events::Event;
use weekplan_grid::{GridShape, TimeGrid};
use weekplan_placement::{place, Placement, PlacementStrategy, StrategyKind};

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;
use crate::plan_file::PlanFile;

/// weekplan - place events into a weekly time grid.
#[derive(Debug, Parser)]
#[command(name = "weekplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Place every event in a plan file and show the resulting week.
    Plan(plan::PlanArgs),

    /// Run every strategy over the same plan file and compare start blocks.
    Compare(compare::CompareArgs),

    /// Validate a plan file without placing anything.
    Validate(validate::ValidateArgs),

    /// Inspect configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    ///
    /// Configuration is only loaded for commands that read it, so a broken
    /// config file or environment never blocks `version` or `config path`.
    pub fn run(self) -> Result<()> {
        crate::logging::init(self.verbose, self.log_json);
        self.execute()
    }

    fn execute(self) -> Result<()> {
        let format = OutputFormat::parse(&self.format);

        match self.command {
            Commands::Plan(args) => plan::run(CommandContext::load(format)?, args),
            Commands::Compare(args) => compare::run(CommandContext::load(format)?, args),
            Commands::Validate(args) => validate::run(CommandContext::load(format)?, args),
            Commands::Config(cmd) => cmd.run(format),
            Commands::Version => {
                println!("weekplan {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load configuration from disk and environment.
    pub fn load(format: OutputFormat) -> Result<Self> {
        let config = Config::load()?;
        debug!(config = ?config, "Configuration loaded");
        Ok(Self { config, format })
    }

    /// Resolve the strategy, preferring the flag over config.
    pub fn resolve_strategy(&self, flag: Option<&str>) -> Result<StrategyKind, CliError> {
        match flag {
            Some(name) => Ok(name.parse()?),
            None => Ok(self.config.default_strategy),
        }
    }

    /// Load a plan file, resolve its shape and reject invalid events.
    pub fn load_plan(&self, path: &Path) -> Result<(PlanFile, GridShape)> {
        let plan = PlanFile::load(path)?;
        let shape = plan.shape(&self.config)?;
        plan.validate(shape)?;
        info!(
            path = %path.display(),
            shape = %shape,
            busy = plan.busy.len(),
            events = plan.events.len(),
            "Plan loaded"
        );
        Ok((plan, shape))
    }
}

/// Place `events` one at a time, in order, committing each slot.
pub fn place_all(
    grid: &mut TimeGrid,
    events: &[Event],
    strategy: &dyn PlacementStrategy,
) -> Vec<Option<Placement>> {
    let placements: Vec<_> = events
        .iter()
        .map(|event| place(grid, event, strategy))
        .collect();

    let placed = placements.iter().flatten().count();
    info!(
        strategy = strategy.name(),
        placed,
        unplaced = placements.len() - placed,
        free_blocks = grid.free_count(),
        "Placement pass complete"
    );

    placements
}

fn display_option(opt: &Option<usize>) -> String {
    opt.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
