//! Plan command: place every event and show the week.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use weekplan_events::Event;
use weekplan_grid::{GridShape, TimeGrid};
use weekplan_placement::{Placement, StrategyKind};

use crate::output::{print_info, print_output, print_single, print_warning, OutputFormat};
use crate::render::{block_label, day_label, render_grid};

use super::{display_option, place_all, CommandContext};

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Plan file (TOML).
    file: PathBuf,

    /// Placement strategy (first-fit or earliest-day). Defaults to config.
    #[arg(long)]
    strategy: Option<String>,

    /// Skip the rendered grid in table output.
    #[arg(long)]
    no_grid: bool,
}

/// One row per event.
#[derive(Debug, Clone, Serialize, Tabled)]
struct PlacementRow {
    #[tabled(rename = "Event")]
    event: String,

    #[tabled(rename = "Blocks")]
    duration_blocks: usize,

    #[tabled(rename = "Deadline")]
    deadline: String,

    #[tabled(rename = "Start", display = "display_option")]
    start: Option<usize>,

    #[tabled(rename = "End", display = "display_option")]
    end: Option<usize>,

    #[tabled(rename = "Slot")]
    slot: String,

    #[tabled(rename = "Status")]
    status: String,
}

impl PlacementRow {
    fn new(shape: GridShape, event: &Event, placement: Option<Placement>) -> Self {
        Self {
            event: event.name.clone(),
            duration_blocks: event.duration_blocks,
            deadline: day_label(event.deadline_day),
            start: placement.map(|p| p.start),
            end: placement.map(|p| p.end()),
            slot: placement
                .map(|p| block_label(shape, p.start))
                .unwrap_or_else(|| "-".to_string()),
            status: if placement.is_some() {
                "placed".to_string()
            } else {
                "unplaced".to_string()
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct PlanReport {
    strategy: StrategyKind,
    days_per_week: usize,
    blocks_per_day: usize,
    placements: Vec<PlacementRow>,
    occupied: Vec<usize>,
    grid: Vec<String>,
}

pub fn run(ctx: CommandContext, args: PlanArgs) -> Result<()> {
    let kind = ctx.resolve_strategy(args.strategy.as_deref())?;
    let (plan, shape) = ctx.load_plan(&args.file)?;

    let mut grid = plan.initial_grid(shape);
    let placements = place_all(&mut grid, &plan.events, kind.strategy());

    let rows: Vec<_> = plan
        .events
        .iter()
        .zip(placements)
        .map(|(event, placement)| PlacementRow::new(shape, event, placement))
        .collect();

    match ctx.format {
        OutputFormat::Json => print_single(&report(kind, &grid, rows)),
        OutputFormat::Table => {
            print_output(&rows, ctx.format);
            if !args.no_grid {
                println!();
                print!("{}", render_grid(&grid));
                println!();
            }
            print_summary(kind, &grid, &rows);
        }
    }

    Ok(())
}

fn report(kind: StrategyKind, grid: &TimeGrid, placements: Vec<PlacementRow>) -> PlanReport {
    let shape = grid.shape();
    PlanReport {
        strategy: kind,
        days_per_week: shape.days_per_week(),
        blocks_per_day: shape.blocks_per_day(),
        placements,
        occupied: grid.occupied_indices(),
        grid: render_grid(grid).lines().map(str::to_string).collect(),
    }
}

fn print_summary(kind: StrategyKind, grid: &TimeGrid, rows: &[PlacementRow]) {
    let unplaced: Vec<_> = rows
        .iter()
        .filter(|r| r.start.is_none())
        .map(|r| r.event.as_str())
        .collect();

    print_info(&format!(
        "{}: {} of {} events placed, {} of {} blocks free",
        kind,
        rows.len() - unplaced.len(),
        rows.len(),
        grid.free_count(),
        grid.len()
    ));
    if !unplaced.is_empty() {
        print_warning(&format!("No slot before deadline: {}", unplaced.join(", ")));
    }
}
