//! Reusable grid fixtures.
//!
//! - [`heightmap`] — every cell is plain ground of the given height.
//! - [`course`] — a text layout with start, end, ground and holes.
//! - [`drain_events`] — collect everything a subscriber has received.

use crossbeam_channel::Receiver;
use orthant_grid::{Grid, GridEvent};
use orthant_puzzle::Marker;

/// Build a grid where cell `(x, y)` is ground of height `rows[y][x]`.
pub fn heightmap(rows: &[&[i32]]) -> Grid<Marker> {
    Grid::from_rows(rows.iter().map(|row| {
        row.iter()
            .map(|&height| vec![Marker::ground(height)])
            .collect::<Vec<_>>()
    }))
}

/// Build a grid from text rows, one character per cell.
///
/// `S` is the start, `E` the end, a digit is ground of that height and
/// `.` is an empty cell (a position with no objects). Any other character
/// panics: fixtures are test input.
pub fn course(rows: &[&str]) -> Grid<Marker> {
    Grid::from_rows(rows.iter().map(|row| {
        row.chars()
            .map(|ch| match ch {
                'S' => vec![Marker::Start],
                'E' => vec![Marker::End],
                '.' => vec![],
                d if d.is_ascii_digit() => vec![Marker::ground(d as i32 - '0' as i32)],
                other => panic!("unknown course cell {other:?}"),
            })
            .collect::<Vec<_>>()
    }))
}

/// Every event received so far, without blocking.
pub fn drain_events(rx: &Receiver<GridEvent>) -> Vec<GridEvent> {
    rx.try_iter().collect()
}
