//! The game engine: one grid, its move history, and completion tracking.

use crate::color::{ColorId, Palette};
use crate::grid::flood_recolor;
use thiserror::Error;

pub const MIN_DIMENSION: usize = 2;
pub const MAX_DIMENSION: usize = 10;

/// Errors raised while constructing a [`Game`].
///
/// Construction either fails here or yields a fully initialized game;
/// there is no partially constructed state, and [`Game::apply_move`] itself
/// never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "the game dimension must be an integer between {min} and {max}, got {0}",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidDimension(usize),
    #[error("the grid length must be {expected} but was {actual}")]
    GridLength { expected: usize, actual: usize },
    #[error("invalid color value {0}, not one of the configured colors")]
    UnknownColor(ColorId),
}

/// A single flood game.
///
/// Owns its grid exclusively; the accessors hand out defensive copies so
/// callers can never mutate engine state from the outside. Every move
/// repaints the region anchored at the top-left cell (index 0), and the
/// game is over once the whole board shows one color. The `game_over` flag
/// never reverts to `false`.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Vec<ColorId>,
    dimension: usize,
    moves: Vec<ColorId>,
    game_over: bool,
}

impl Game {
    /// Creates a game whose cells are drawn independently and uniformly at
    /// random from the palette.
    pub fn with_dimension(dimension: usize, palette: &Palette) -> Result<Self, GameError> {
        validate_dimension(dimension)?;

        let mut rng = rand::thread_rng();
        let grid = (0..dimension * dimension)
            .map(|_| palette.random_color(&mut rng))
            .collect();

        Ok(Self::from_parts(grid, dimension))
    }

    /// Creates a game from an existing grid, e.g. a snapshot of another
    /// game's board.
    ///
    /// The grid must hold exactly `dimension²` cells and every cell must be
    /// a configured color. A grid that is already uniform yields a
    /// completed game with zero moves.
    pub fn with_grid(
        grid: Vec<ColorId>,
        dimension: usize,
        palette: &Palette,
    ) -> Result<Self, GameError> {
        validate_dimension(dimension)?;

        let expected = dimension * dimension;
        if grid.len() != expected {
            return Err(GameError::GridLength {
                expected,
                actual: grid.len(),
            });
        }

        if let Some(unknown) = grid.iter().find(|color| !palette.contains(color)) {
            return Err(GameError::UnknownColor(unknown.clone()));
        }

        Ok(Self::from_parts(grid, dimension))
    }

    fn from_parts(grid: Vec<ColorId>, dimension: usize) -> Self {
        let game_over = is_uniform(&grid);
        Self {
            grid,
            dimension,
            moves: Vec::new(),
            game_over,
        }
    }

    /// A copy of the current board, row-major.
    pub fn grid_snapshot(&self) -> Vec<ColorId> {
        self.grid.clone()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// A copy of the moves applied so far, in chronological order.
    pub fn move_history(&self) -> Vec<ColorId> {
        self.moves.clone()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Applies one move: repaint the origin region with `new_color`.
    ///
    /// Ignored entirely when the game is already over. Picking the color
    /// the origin cell already has changes nothing and is not recorded as
    /// a move. Otherwise the move is appended to the history, the region
    /// anchored at index 0 is repainted, and completion is re-checked.
    pub fn apply_move(&mut self, new_color: ColorId) {
        if self.game_over {
            return;
        }

        // No change in color, ignore.
        if new_color == self.grid[0] {
            return;
        }

        self.moves.push(new_color.clone());
        flood_recolor(&mut self.grid, self.dimension, &new_color);
        self.game_over = is_uniform(&self.grid);
    }
}

fn is_uniform(grid: &[ColorId]) -> bool {
    grid.iter().all(|color| *color == grid[0])
}

fn validate_dimension(dimension: usize) -> Result<(), GameError> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        return Err(GameError::InvalidDimension(dimension));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::rgb()
    }

    fn color(id: &str) -> ColorId {
        ColorId::from(id)
    }

    fn grid_of(ids: &[&str]) -> Vec<ColorId> {
        ids.iter().map(|id| ColorId::from(*id)).collect()
    }

    #[test]
    fn test_with_dimension_fills_the_board_from_the_palette() {
        let palette = palette();
        let game = Game::with_dimension(4, &palette).unwrap();

        let grid = game.grid_snapshot();
        assert_eq!(grid.len(), 16);
        assert!(grid.iter().all(|c| palette.contains(c)));
        assert_eq!(game.dimension(), 4);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_with_dimension_rejects_out_of_bounds_dimensions() {
        let palette = palette();

        assert_eq!(
            Game::with_dimension(1, &palette).unwrap_err(),
            GameError::InvalidDimension(1)
        );
        assert_eq!(
            Game::with_dimension(11, &palette).unwrap_err(),
            GameError::InvalidDimension(11)
        );
    }

    #[test]
    fn test_with_grid_rejects_wrong_length() {
        let result = Game::with_grid(grid_of(&["r", "g", "b"]), 2, &palette());

        assert_eq!(
            result.unwrap_err(),
            GameError::GridLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_with_grid_rejects_unknown_colors() {
        let result = Game::with_grid(grid_of(&["r", "g", "x", "b"]), 2, &palette());

        assert_eq!(result.unwrap_err(), GameError::UnknownColor(color("x")));
    }

    #[test]
    fn test_with_grid_on_uniform_grid_is_a_completed_game() {
        let game = Game::with_grid(grid_of(&["g", "g", "g", "g"]), 2, &palette()).unwrap();

        assert!(game.is_game_over());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_origin_color_move_is_ignored() {
        let mut game =
            Game::with_grid(grid_of(&["r", "g", "g", "b"]), 2, &palette()).unwrap();
        let before = game.grid_snapshot();

        game.apply_move(color("r"));

        assert_eq!(game.grid_snapshot(), before);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_moves_are_recorded_in_order() {
        let mut game =
            Game::with_grid(grid_of(&["r", "g", "g", "b"]), 2, &palette()).unwrap();

        game.apply_move(color("g"));
        game.apply_move(color("b"));

        assert_eq!(game.move_history(), vec![color("g"), color("b")]);
    }

    #[test]
    fn test_flood_stops_at_regions_not_reachable_orthogonally() {
        let grid = grid_of(&[
            "r", "g", "g", "b", //
            "r", "r", "r", "g", //
            "r", "b", "g", "r", //
            "r", "r", "g", "g",
        ]);
        let mut game = Game::with_grid(grid, 4, &palette()).unwrap();

        game.apply_move(color("b"));

        let expected = grid_of(&[
            "b", "g", "g", "b", //
            "b", "b", "b", "g", //
            "b", "b", "g", "r", //
            "b", "b", "g", "g",
        ]);
        assert_eq!(game.grid_snapshot(), expected);
    }

    #[test]
    fn test_flood_does_not_spread_diagonally() {
        let grid = grid_of(&[
            "r", "r", "g", "g", //
            "r", "r", "g", "g", //
            "g", "r", "g", "g", //
            "r", "g", "r", "g",
        ]);
        let mut game = Game::with_grid(grid, 4, &palette()).unwrap();

        game.apply_move(color("b"));

        // The bottom-row reds touch the region only diagonally and stay red.
        let expected = grid_of(&[
            "b", "b", "g", "g", //
            "b", "b", "g", "g", //
            "g", "b", "g", "g", //
            "r", "g", "r", "g",
        ]);
        assert_eq!(game.grid_snapshot(), expected);
    }

    #[test]
    fn test_winning_move_ends_the_game() {
        let mut game =
            Game::with_grid(grid_of(&["r", "g", "b", "r"]), 2, &palette()).unwrap();
        assert!(!game.is_game_over());

        // r,g,b,r -> g,g,b,r -> b,b,b,r -> r,r,r,r
        game.apply_move(color("g"));
        assert!(!game.is_game_over());

        game.apply_move(color("b"));
        assert!(!game.is_game_over());

        game.apply_move(color("r"));
        assert!(game.is_game_over());
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut game =
            Game::with_grid(grid_of(&["r", "g", "g", "g"]), 2, &palette()).unwrap();

        game.apply_move(color("g"));
        assert!(game.is_game_over());

        let grid_before = game.grid_snapshot();
        let moves_before = game.move_count();

        game.apply_move(color("b"));
        game.apply_move(color("r"));

        assert!(game.is_game_over());
        assert_eq!(game.grid_snapshot(), grid_before);
        assert_eq!(game.move_count(), moves_before);
    }

    #[test]
    fn test_grid_snapshot_is_a_defensive_copy() {
        let game = Game::with_grid(grid_of(&["r", "g", "g", "b"]), 2, &palette()).unwrap();

        let mut snapshot = game.grid_snapshot();
        snapshot[0] = color("b");

        assert_eq!(game.grid_snapshot()[0], color("r"));
    }
}
