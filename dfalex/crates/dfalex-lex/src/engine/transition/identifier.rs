//! Identifiers, keywords and word literals.

use super::Transition;
use crate::classify::is_ident_continue;
use crate::engine::state::EngineState;

/// Grow the word while it stays an identifier; classify it on the first
/// character that does not belong
pub(super) fn identifier_part(c: char) -> Transition {
    if is_ident_continue(c) {
        Transition::stay(EngineState::IdentifierPart)
    } else {
        Transition::word_before()
    }
}
