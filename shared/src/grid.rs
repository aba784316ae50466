//! Flat row-major grid topology and the flood-fill repaint.
//!
//! A board of side `dimension` is stored as `dimension²` cells; index `i`
//! sits at row `i / dimension`, column `i % dimension`. Neighbors are the
//! four orthogonally adjacent cells, fewer on edges and corners. Diagonal
//! cells are never neighbors.

use crate::color::ColorId;

/// Index of the cell above, `None` in the first row.
pub fn top(index: usize, dimension: usize) -> Option<usize> {
    if index < dimension {
        return None;
    }

    Some(index - dimension)
}

/// Index of the cell to the right, `None` in the last column.
pub fn right(index: usize, dimension: usize) -> Option<usize> {
    if (index + 1) % dimension == 0 {
        return None;
    }

    Some(index + 1)
}

/// Index of the cell below, `None` in the last row.
pub fn bottom(index: usize, dimension: usize) -> Option<usize> {
    let last_row_first_col = dimension * dimension - dimension;
    if index >= last_row_first_col {
        return None;
    }

    Some(index + dimension)
}

/// Index of the cell to the left, `None` in the first column.
pub fn left(index: usize, dimension: usize) -> Option<usize> {
    if index % dimension == 0 {
        return None;
    }

    Some(index - 1)
}

/// All orthogonal neighbors of `index`, in top, right, bottom, left order.
///
/// The order is fixed: the automated player's tie-breaking depends on the
/// sequence in which neighboring cells are first discovered.
pub fn connected_neighbours(index: usize, dimension: usize) -> Vec<usize> {
    let mut neighbours = Vec::with_capacity(4);

    if let Some(top_index) = top(index, dimension) {
        neighbours.push(top_index);
    }

    if let Some(right_index) = right(index, dimension) {
        neighbours.push(right_index);
    }

    if let Some(bottom_index) = bottom(index, dimension) {
        neighbours.push(bottom_index);
    }

    if let Some(left_index) = left(index, dimension) {
        neighbours.push(left_index);
    }

    neighbours
}

/// Repaints the 4-connected region anchored at index 0 with `new_color`.
///
/// Iterative traversal over an explicit stack; every cell is visited at
/// most once, so rings of same-colored cells terminate. Cells whose color
/// differs from the origin color stop the spread.
pub fn flood_recolor(grid: &mut [ColorId], dimension: usize, new_color: &ColorId) {
    let origin_color = grid[0].clone();
    if origin_color == *new_color {
        return;
    }

    let mut visited = vec![false; grid.len()];
    let mut stack = vec![0];

    while let Some(index) = stack.pop() {
        if visited[index] {
            continue;
        }
        visited[index] = true;

        // Only repaint cells matching the origin color, the rest bound the
        // region.
        if grid[index] != origin_color {
            continue;
        }
        grid[index] = new_color.clone();

        for neighbour in connected_neighbours(index, dimension) {
            if !visited[neighbour] {
                stack.push(neighbour);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(ids: &[&str]) -> Vec<ColorId> {
        ids.iter().map(|id| ColorId::from(*id)).collect()
    }

    #[test]
    fn test_corner_neighbours() {
        // 4x4 board, indices 0..=15.
        assert_eq!(connected_neighbours(0, 4), vec![1, 4]);
        assert_eq!(connected_neighbours(3, 4), vec![7, 2]);
        assert_eq!(connected_neighbours(12, 4), vec![8, 13]);
        assert_eq!(connected_neighbours(15, 4), vec![11, 14]);
    }

    #[test]
    fn test_interior_neighbours_order_is_top_right_bottom_left() {
        assert_eq!(connected_neighbours(6, 4), vec![2, 7, 10, 5]);
    }

    #[test]
    fn test_edge_neighbours() {
        // First-row edge cell.
        assert_eq!(connected_neighbours(1, 4), vec![2, 5, 0]);
        // First-column edge cell.
        assert_eq!(connected_neighbours(4, 4), vec![0, 5, 8]);
        // Last-column edge cell.
        assert_eq!(connected_neighbours(7, 4), vec![3, 11, 6]);
    }

    #[test]
    fn test_direction_boundaries() {
        assert_eq!(top(2, 4), None);
        assert_eq!(top(6, 4), Some(2));
        assert_eq!(right(7, 4), None);
        assert_eq!(right(6, 4), Some(7));
        assert_eq!(bottom(13, 4), None);
        assert_eq!(bottom(6, 4), Some(10));
        assert_eq!(left(8, 4), None);
        assert_eq!(left(6, 4), Some(5));
    }

    #[test]
    fn test_flood_recolor_repaints_origin_region_only() {
        let mut grid = grid_of(&["r", "r", "g", "g", "r", "b", "g", "b", "b"]);
        flood_recolor(&mut grid, 3, &ColorId::from("b"));

        let expected = grid_of(&["b", "b", "g", "g", "b", "b", "g", "b", "b"]);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_flood_recolor_same_color_is_noop() {
        let mut grid = grid_of(&["r", "g", "g", "r"]);
        flood_recolor(&mut grid, 2, &ColorId::from("r"));

        assert_eq!(grid, grid_of(&["r", "g", "g", "r"]));
    }

    #[test]
    fn test_flood_recolor_terminates_on_ring_of_same_color() {
        // The whole board is one region, every cell has several same-color
        // neighbours forming cycles.
        let mut grid = grid_of(&["r"; 16]);
        flood_recolor(&mut grid, 4, &ColorId::from("g"));

        assert_eq!(grid, grid_of(&["g"; 16]));
    }
}
