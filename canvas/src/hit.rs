#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Point;
use crate::token::{Roster, TokenId};

/// Which token (if any) covers `pt`.
///
/// Tokens are `token_size` squares anchored at their top-left corner. When
/// tokens overlap, the one drawn last (latest in roster order) wins.
#[must_use]
pub fn token_at(pt: Point, roster: &Roster, token_size: f64) -> Option<TokenId> {
    roster
        .iter()
        .rev()
        .find(|t| pt.x >= t.left && pt.x <= t.left + token_size && pt.y >= t.top && pt.y <= t.top + token_size)
        .map(|t| t.id)
}
