//! Random initial grids, tile values and spawn positions.

use super::super::direction::Direction;
use super::super::error::{GridError, RuleError};
use super::super::grid::Grid;
use super::super::source::TileSource;
use super::super::types::TilePosition;
use tracing::{debug, instrument};

/// Number of equally likely outcomes behind [`next_tile_value`].
pub const TILE_VALUE_OUTCOMES: usize = 10;

/// Values a new tile can take.
pub const SPAWN_VALUES: [u32; 4] = [1, 2, 3, 6];

/// Creates a `size` x `size` grid holding a 1 and a 2 on two distinct cells.
///
/// Cells are numbered row by row. The 1 goes to a uniformly chosen cell;
/// the 2 goes to a uniformly chosen cell among the remaining ones, so
/// every unordered pair is equally likely.
///
/// # Errors
///
/// Returns [`GridError::InvalidSize`] when the grid has fewer than two cells.
#[instrument(skip(source))]
pub fn initialize_grid<S>(size: usize, source: &mut S) -> Result<Grid, RuleError>
where
    S: TileSource + ?Sized,
{
    let mut grid = Grid::new(size)?;
    let cell_count = size * size;
    if cell_count < 2 {
        return Err(GridError::InvalidSize(size).into());
    }

    let first = source.next_below(cell_count);
    let mut second = source.next_below(cell_count - 1);
    if second >= first {
        second += 1;
    }

    grid.set(first / size, first % size, 1)?;
    grid.set(second / size, second % size, 2)?;
    debug!(first, second, "Initial tiles placed");
    Ok(grid)
}

/// Draws the value of the next tile.
///
/// 1 and 2 each come up 40% of the time, 3 and 6 each 10%.
#[instrument(skip(source))]
pub fn next_tile_value<S>(source: &mut S) -> u32
where
    S: TileSource + ?Sized,
{
    match source.next_below(TILE_VALUE_OUTCOMES) {
        0..=3 => 1,
        4..=7 => 2,
        8 => 3,
        _ => 6,
    }
}

/// Chooses where the next tile appears after shifting in `last_direction`.
///
/// Tiles appear on the edge opposite the shift: the rightmost column after
/// a left shift, the bottom row after an up shift, and so on. One of the
/// empty cells on that edge is chosen uniformly. The returned position
/// carries value 0. Returns `Ok(None)` when no shift direction is given.
///
/// # Errors
///
/// Returns [`RuleError::NoEmptyEdgeCell`] when every cell on the edge is
/// occupied.
#[instrument(skip(grid, source), fields(size = grid.size()))]
pub fn next_tile_position<S>(
    grid: &Grid,
    source: &mut S,
    last_direction: Option<Direction>,
) -> Result<Option<TilePosition>, RuleError>
where
    S: TileSource + ?Sized,
{
    let Some(direction) = last_direction else {
        return Ok(None);
    };

    let empty: Vec<_> = grid
        .spawn_edge(direction)
        .into_iter()
        .filter(|&cell| grid.is_empty_at(cell))
        .collect();
    if empty.is_empty() {
        return Err(RuleError::NoEmptyEdgeCell(direction));
    }

    let cell = empty[source.next_below(empty.len())];
    debug!(row = cell.row, col = cell.col, candidates = empty.len(), "Spawn cell chosen");
    Ok(Some(TilePosition::new(cell.row, cell.col, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    #[test]
    fn test_initialize_places_one_and_two() {
        let mut source = ScriptedSource::new([0, 0]);
        let grid = initialize_grid(4, &mut source).unwrap();
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(0, 1), Some(2));
        assert_eq!(grid.occupied(), 2);
    }

    #[test]
    fn test_initialize_remaps_second_cell() {
        // first = 5 -> (1, 1); second = 4 stays below first -> (1, 0)
        let mut source = ScriptedSource::new([5, 4]);
        let grid = initialize_grid(4, &mut source).unwrap();
        assert_eq!(grid.get(1, 1), Some(1));
        assert_eq!(grid.get(1, 0), Some(2));

        // second = 14 is at or past first -> 15 -> (3, 3)
        let mut source = ScriptedSource::new([5, 14]);
        let grid = initialize_grid(4, &mut source).unwrap();
        assert_eq!(grid.get(3, 3), Some(2));
    }

    #[test]
    fn test_initialize_rejects_single_cell() {
        let mut source = ScriptedSource::default();
        assert_eq!(
            initialize_grid(1, &mut source),
            Err(RuleError::Grid(GridError::InvalidSize(1)))
        );
    }

    #[test]
    fn test_tile_value_distribution() {
        let mut source = ScriptedSource::new(0..TILE_VALUE_OUTCOMES);
        let values: Vec<_> = (0..TILE_VALUE_OUTCOMES)
            .map(|_| next_tile_value(&mut source))
            .collect();
        assert_eq!(values, vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 6]);
    }

    #[test]
    fn test_position_without_direction() {
        let grid = Grid::new(4).unwrap();
        let mut source = ScriptedSource::default();
        assert_eq!(next_tile_position(&grid, &mut source, None), Ok(None));
        assert_eq!(source.drawn(), 0);
    }

    #[test]
    fn test_position_skips_occupied_edge_cells() {
        let grid = Grid::from_rows(vec![
            vec![0, 0, 0, 3],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        // Empty right-edge cells are rows 1 and 3; draw 1 picks row 3.
        let mut source = ScriptedSource::new([1]);
        let pos = next_tile_position(&grid, &mut source, Some(Direction::Left)).unwrap();
        assert_eq!(pos, Some(TilePosition::new(3, 3, 0)));
    }

    #[test]
    fn test_position_on_each_edge() {
        let grid = Grid::new(3).unwrap();
        let cases = [
            (Direction::Left, TilePosition::new(0, 2, 0)),
            (Direction::Right, TilePosition::new(0, 0, 0)),
            (Direction::Up, TilePosition::new(2, 0, 0)),
            (Direction::Down, TilePosition::new(0, 0, 0)),
        ];
        for (direction, expected) in cases {
            let mut source = ScriptedSource::new([0]);
            let pos = next_tile_position(&grid, &mut source, Some(direction)).unwrap();
            assert_eq!(pos, Some(expected), "{direction}");
        }
    }

    #[test]
    fn test_position_full_edge_is_error() {
        let grid = Grid::from_rows(vec![vec![0, 1], vec![0, 2]]).unwrap();
        let mut source = ScriptedSource::default();
        assert_eq!(
            next_tile_position(&grid, &mut source, Some(Direction::Left)),
            Err(RuleError::NoEmptyEdgeCell(Direction::Left))
        );
    }
}
