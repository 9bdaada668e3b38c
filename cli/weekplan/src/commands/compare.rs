//! Compare command: run both strategies over the same starting week.
//!
//! Each strategy gets its own copy of the initial grid and places the events
//! in file order, so a row shows where an event lands under each strategy
//! given everything placed before it by that same strategy.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use weekplan_placement::StrategyKind;

use crate::output::{print_output, OutputFormat};

use super::{display_option, place_all, CommandContext};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Plan file (TOML).
    file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct CompareRow {
    #[tabled(rename = "Event")]
    event: String,

    #[tabled(rename = "first-fit", display = "display_option")]
    first_fit: Option<usize>,

    #[tabled(rename = "earliest-day", display = "display_option")]
    earliest_day: Option<usize>,

    #[tabled(rename = "Differs")]
    differs: bool,
}

pub fn run(ctx: CommandContext, args: CompareArgs) -> Result<()> {
    let (plan, shape) = ctx.load_plan(&args.file)?;

    let starts = |kind: StrategyKind| -> Vec<Option<usize>> {
        let mut grid = plan.initial_grid(shape);
        place_all(&mut grid, &plan.events, kind.strategy())
            .into_iter()
            .map(|p| p.map(|p| p.start))
            .collect()
    };

    let [first_fit, earliest_day] = StrategyKind::ALL.map(starts);
    let rows = rows(
        plan.events.iter().map(|e| e.name.clone()),
        first_fit,
        earliest_day,
    );

    print_output(&rows, ctx.format);
    if ctx.format == OutputFormat::Table {
        let differing = rows.iter().filter(|r| r.differs).count();
        println!("{differing} of {} events land differently", rows.len());
    }

    Ok(())
}

fn rows(
    names: impl Iterator<Item = String>,
    first_fit: Vec<Option<usize>>,
    earliest_day: Vec<Option<usize>>,
) -> Vec<CompareRow> {
    names
        .zip(first_fit)
        .zip(earliest_day)
        .map(|((event, first_fit), earliest_day)| CompareRow {
            event,
            differs: first_fit != earliest_day,
            first_fit,
            earliest_day,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_flag_differences() {
        let rows = rows(
            ["a".to_string(), "b".to_string()].into_iter(),
            vec![Some(6), Some(0)],
            vec![None, Some(0)],
        );
        assert_eq!(
            rows,
            vec![
                CompareRow {
                    event: "a".to_string(),
                    first_fit: Some(6),
                    earliest_day: None,
                    differs: true,
                },
                CompareRow {
                    event: "b".to_string(),
                    first_fit: Some(0),
                    earliest_day: Some(0),
                    differs: false,
                },
            ]
        );
    }

    #[test]
    fn test_rows_render_as_table() {
        let rows = rows(
            ["Gym".to_string(), "Essay".to_string()].into_iter(),
            vec![Some(6), None],
            vec![Some(8), None],
        );

        let table = tabled::Table::new(&rows).to_string();
        let lines: Vec<_> = table.lines().collect();
        for header in ["Event", "first-fit", "earliest-day", "Differs"] {
            assert!(lines[1].contains(header), "missing {header} in {table}");
        }
        let gym = lines.iter().find(|l| l.contains("Gym")).unwrap();
        assert!(gym.contains("| 6 ") && gym.contains("| 8 ") && gym.contains("true"));
        let essay = lines.iter().find(|l| l.contains("Essay")).unwrap();
        assert_eq!(essay.matches("| - ").count(), 2);
        assert!(essay.contains("false"));
    }
}
