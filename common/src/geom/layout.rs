use super::PREALLOC_LIMIT;
use super::coord::GridCoord;
use crate::error::{GridResult, non_negative};

const LARGE_GRID_CELLS: usize = 50_000_000;

/// Enumerates every cell of a `cols` x `rows` rectangle in row-major order.
pub fn generate_grid(cols: i32, rows: i32) -> GridResult<Vec<GridCoord>> {
    let n_cols = non_negative("cols", cols)?;
    let n_rows = non_negative("rows", rows)?;

    let size = n_cols.saturating_mul(n_rows);
    if size > LARGE_GRID_CELLS {
        log::warn!(
            "Allocating large grid: {} cells ({}x{}). Ensure sufficient RAM.",
            size,
            cols,
            rows
        );
    }

    let mut grid = Vec::with_capacity(size.min(PREALLOC_LIMIT));
    for row in 0..rows {
        for col in 0..cols {
            grid.push(GridCoord::new(row, col));
        }
    }

    log::debug!("Generated {}x{} grid ({} cells)", cols, rows, grid.len());
    Ok(grid)
}

/// Element `i` is `1 + i / 2`: ring sizes under progressive doubling.
pub fn neighbor_counts(n: i32) -> GridResult<Vec<u32>> {
    let len = non_negative("n", n)?;
    Ok((0..len as u32).map(|i| 1 + i / 2).collect())
}
