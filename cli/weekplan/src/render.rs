//! Text rendering of a grid.

use chrono::Weekday;
use weekplan_grid::{GridShape, TimeGrid};

const OCCUPIED: char = 'X';
const FREE: char = '.';

/// `Mon`..`Sun` for the first seven days, `D7`, `D8`, ... after that.
pub fn day_label(day: usize) -> String {
    u8::try_from(day)
        .ok()
        .and_then(|d| Weekday::try_from(d).ok())
        .map(|weekday| weekday.to_string())
        .unwrap_or_else(|| format!("D{day}"))
}

/// `Tue #3` style label for a global block index.
pub fn block_label(shape: GridShape, index: usize) -> String {
    let (day, block) = shape.to_day_block(index);
    format!("{} #{}", day_label(day), block)
}

/// One row per day, `X` for occupied blocks and `.` for free ones.
pub fn render_grid(grid: &TimeGrid) -> String {
    let shape = grid.shape();
    let mut out = String::with_capacity(shape.days_per_week() * (shape.blocks_per_day() + 6));

    for day in 0..shape.days_per_week() {
        out.push_str(&format!("{:>4}: ", day_label(day)));
        for block in 0..shape.blocks_per_day() {
            let occupied = grid
                .cell(grid.to_index(day, block))
                .is_some_and(|c| c.is_occupied());
            out.push(if occupied { OCCUPIED } else { FREE });
        }
        out.push('\n');
    }

    out
}
