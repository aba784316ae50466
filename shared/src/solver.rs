//! The automated opponent: a one-ply greedy choice of the next color.
//!
//! One traversal pass walks the origin-connected region and totals the
//! sizes of every differently-colored component touching it, answering
//! "which single move would absorb the most new territory". The selector
//! never simulates the move itself and never looks further ahead.

use crate::color::{ColorId, Palette};
use crate::grid::connected_neighbours;
use std::collections::VecDeque;

/// Picks the color the automated player plays next on `grid`.
///
/// Deterministic in its inputs, no hidden state. Ties keep the color
/// discovered first during the traversal (the comparison is strictly
/// greater-than). When the board has no frontier at all, the first
/// configured color differing from the origin color is returned.
pub fn select_next_color(grid: &[ColorId], dimension: usize, palette: &Palette) -> ColorId {
    let origin_color = &grid[0];
    let mut visited = vec![false; grid.len()];

    // Accumulated component sizes per frontier color, in the order each
    // color was first discovered.
    let mut counts: Vec<(ColorId, usize)> = Vec::new();

    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0);

    while let Some(index) = queue.pop_front() {
        for neighbour in connected_neighbours(index, dimension) {
            if visited[neighbour] {
                continue;
            }

            if grid[neighbour] == *origin_color {
                visited[neighbour] = true;
                queue.push_back(neighbour);
            } else {
                // A frontier cell: count its whole same-color component.
                // The shared visited marks guarantee no cell is counted
                // twice across the pass.
                let frontier_color = grid[neighbour].clone();
                let component = count_component(grid, dimension, neighbour, &mut visited);
                accumulate(&mut counts, frontier_color, component);
            }
        }
    }

    let fallback = palette.first_other(origin_color).unwrap_or(origin_color);

    let mut selected = fallback;
    let mut max_count = 0;
    for (color, count) in &counts {
        if *count > max_count {
            selected = color;
            max_count = *count;
        }
    }

    selected.clone()
}

/// Floods outward from `start` through cells of its color, marking them
/// visited, and returns the component size.
fn count_component(
    grid: &[ColorId],
    dimension: usize,
    start: usize,
    visited: &mut [bool],
) -> usize {
    let color = &grid[start];
    let mut count = 0;

    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        count += 1;

        for neighbour in connected_neighbours(index, dimension) {
            if !visited[neighbour] && grid[neighbour] == *color {
                visited[neighbour] = true;
                queue.push_back(neighbour);
            }
        }
    }

    count
}

fn accumulate(counts: &mut Vec<(ColorId, usize)>, color: ColorId, amount: usize) {
    if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == color) {
        entry.1 += amount;
    } else {
        counts.push((color, amount));
    }
}
