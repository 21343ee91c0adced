//! Axial hexagon helpers: neighbors, distances, rings, spirals and pixel layout.
//!
//! Rings start at `center + radius * direction(0)` and walk the six edges in
//! direction order `2, 3, 4, 5, 0, 1`, which keeps every step on the ring.
//! Cube math runs in `i64`; results are narrowed back to `i32` axial form.

use super::PREALLOC_LIMIT;
use super::coord::{AxialCoord, CubeCoord};
use crate::error::{GridError, GridResult, non_negative};

const DIRECTIONS: [CubeCoord; 6] = [
    CubeCoord { q: 1, r: 0, s: -1 },
    CubeCoord { q: 1, r: -1, s: 0 },
    CubeCoord { q: 0, r: -1, s: 1 },
    CubeCoord { q: -1, r: 0, s: 1 },
    CubeCoord { q: -1, r: 1, s: 0 },
    CubeCoord { q: 0, r: 1, s: -1 },
];

const RING_START_DIRECTION: usize = 0;

/// Unit offset for direction `dir`, taken modulo 6.
pub fn direction(dir: usize) -> CubeCoord {
    DIRECTIONS[dir % 6]
}

/// Fails when the neighbor falls outside the `i32` coordinate range.
pub fn neighbor(coord: AxialCoord, dir: usize) -> GridResult<AxialCoord> {
    AxialCoord::try_from(coord.as_cube() + direction(dir))
}

pub fn neighbors(coord: AxialCoord) -> GridResult<[AxialCoord; 6]> {
    check_bounds(coord, 1)?;
    let mut out = [coord; 6];
    for (dir, slot) in out.iter_mut().enumerate() {
        *slot = neighbor(coord, dir)?;
    }
    Ok(out)
}

pub fn distance(a: AxialCoord, b: AxialCoord) -> i64 {
    (a.as_cube() - b.as_cube()).length()
}

/// Number of cells in a hex disk of `radius`, center included.
pub fn disk_size(radius: usize) -> usize {
    1 + 3 * radius * (radius + 1)
}

/// Center of the pointy-top hexagon at `coord`, for hexagons of circumradius `size`.
pub fn axial_to_pixel(coord: AxialCoord, size: f64) -> (f64, f64) {
    let q = f64::from(coord.q);
    let r = f64::from(coord.r);
    let x = size * 3f64.sqrt() * (q + r / 2.0);
    let y = size * 1.5 * r;
    (x, y)
}

/// Ensures every cell within `radius` of `center` is addressable in `i32`.
pub(crate) fn check_bounds(center: AxialCoord, radius: i32) -> GridResult<()> {
    let fits = |v: i32| v.checked_add(radius).is_some() && v.checked_sub(radius).is_some();
    if !fits(center.q) {
        return Err(GridError::out_of_range("center.q", i64::from(center.q)));
    }
    if !fits(center.r) {
        return Err(GridError::out_of_range("center.r", i64::from(center.r)));
    }
    Ok(())
}

/// Cells at exact hex distance `radius` from `center`.
///
/// `radius == 0` yields the center alone.
pub fn generate_ring(center: AxialCoord, radius: i32) -> GridResult<Vec<AxialCoord>> {
    let len = non_negative("radius", radius)?;
    if len == 0 {
        return Ok(vec![center]);
    }
    check_bounds(center, radius)?;

    let mut results = Vec::with_capacity((6 * len).min(PREALLOC_LIMIT));
    push_ring(&mut results, center.as_cube(), radius)?;
    Ok(results)
}

/// Rings `1..=radius` in increasing order, optionally preceded by `center`.
pub fn generate_spiral(
    center: AxialCoord,
    radius: i32,
    with_center: bool,
) -> GridResult<Vec<AxialCoord>> {
    let len = non_negative("radius", radius)?;
    check_bounds(center, radius)?;

    let mut results = Vec::with_capacity(disk_size(len).min(PREALLOC_LIMIT));
    if with_center {
        results.push(center);
    }

    let cube = center.as_cube();
    for k in 1..=radius {
        push_ring(&mut results, cube, k)?;
    }

    log::debug!(
        "Generated spiral around {} (radius {}, {} cells)",
        center,
        radius,
        results.len()
    );
    Ok(results)
}

/// Every cell within `radius` of `center`, center first.
pub fn generate_disk(center: AxialCoord, radius: i32) -> GridResult<Vec<AxialCoord>> {
    generate_spiral(center, radius, true)
}

// radius must be >= 1 and already bounds-checked
fn push_ring(out: &mut Vec<AxialCoord>, center: CubeCoord, radius: i32) -> GridResult<()> {
    let mut coords = center + direction(RING_START_DIRECTION) * i64::from(radius);

    for edge in 0..6 {
        let step = direction(RING_START_DIRECTION + 2 + edge);
        for _ in 0..radius {
            out.push(AxialCoord::try_from(coords)?);
            coords = coords + step;
        }
    }
    Ok(())
}
