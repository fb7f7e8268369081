use crate::goban::Goban;

/// Single-step ko check.
///
/// `previous` is the position that stood before the opponent's last move. A
/// candidate equal to it would undo that move's effect and is rejected. Older
/// positions are deliberately not consulted.
pub fn repeats_previous(candidate: &Goban, previous: Option<&Goban>) -> bool {
    previous.is_some_and(|p| p == candidate)
}
