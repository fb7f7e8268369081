use crate::Point;
use crate::error::GoError;
use crate::goban::{Goban, Placement};
use crate::ko;
use crate::stone::Stone;

/// Validate and resolve a play against `goban`.
///
/// Checks run in a fixed order and the first failure wins: bounds,
/// occupancy, ko against `previous`, then suicide. Turn order is the
/// caller's concern.
pub fn try_play(
    goban: &Goban,
    previous: Option<&Goban>,
    point: Point,
    stone: Stone,
) -> Result<Placement, GoError> {
    let placement = goban.place_stone(point, stone)?;

    if ko::repeats_previous(&placement.goban, previous) {
        return Err(GoError::KoViolation);
    }

    if placement.is_suicide(point) {
        return Err(GoError::Suicide);
    }

    Ok(placement)
}
