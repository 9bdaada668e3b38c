//! Validate command. Operates purely on the local plan file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::output::{print_info, print_single, print_success, OutputFormat};
use crate::plan_file::PlanFile;

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Plan file (TOML).
    file: PathBuf,
}

pub fn run(ctx: CommandContext, args: ValidateArgs) -> Result<()> {
    let plan = PlanFile::load(&args.file)?;
    let shape = plan.shape(&ctx.config)?;

    let errors = plan.errors(shape);
    let demand: usize = plan.events.iter().map(|e| e.duration_blocks).sum();

    match ctx.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "valid": errors.is_empty(),
                "days_per_week": shape.days_per_week(),
                "blocks_per_day": shape.blocks_per_day(),
                "busy_ranges": plan.busy.len(),
                "events": plan.events.len(),
                "requested_blocks": demand,
                "errors": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            });
            print_single(&out);
        }
        OutputFormat::Table => {
            for err in &errors {
                println!("invalid: {err}");
            }
            if errors.is_empty() {
                print_success(&format!("Plan is valid: {}", args.file.display()));
                print_info(&format!(
                    "grid {shape}, {} busy range(s), {} event(s) requesting {demand} block(s)",
                    plan.busy.len(),
                    plan.events.len(),
                ));
            }
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("Plan validation failed ({} error(s))", errors.len());
    }

    Ok(())
}
