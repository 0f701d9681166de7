//! Player tokens: the six fixed on-field roles and the roster that owns them.
//!
//! Tokens are created once with the roster and never added or removed.
//! Position is first-class state here; the host only mirrors it into the DOM.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use serde::{Deserialize, Serialize};

use crate::geom::Size;

/// Identity of a player token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenId {
    Center,
    Qb,
    Wr1,
    Wr2,
    Wr3,
    Wr4,
}

impl TokenId {
    /// Every token in roster order (also the DOM stacking order).
    pub const ALL: [TokenId; 6] = [Self::Center, Self::Qb, Self::Wr1, Self::Wr2, Self::Wr3, Self::Wr4];

    /// The four receivers affected by mirroring.
    pub const RECEIVERS: [TokenId; 4] = [Self::Wr1, Self::Wr2, Self::Wr3, Self::Wr4];

    /// Text shown on the token.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "C",
            Self::Qb => "QB",
            Self::Wr1 => "WR1",
            Self::Wr2 => "WR2",
            Self::Wr3 => "WR3",
            Self::Wr4 => "WR4",
        }
    }

    /// Stable string key, also used as the DOM id.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Qb => "qb",
            Self::Wr1 => "wr1",
            Self::Wr2 => "wr2",
            Self::Wr3 => "wr3",
            Self::Wr4 => "wr4",
        }
    }

    /// Style class shared by tokens of the same role.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Qb => "qb",
            Self::Wr1 | Self::Wr2 | Self::Wr3 | Self::Wr4 => "wr",
        }
    }

    #[must_use]
    pub fn is_receiver(self) -> bool {
        Self::RECEIVERS.contains(&self)
    }

    /// The center anchors the line of scrimmage and cannot be dragged.
    #[must_use]
    pub fn is_draggable(self) -> bool {
        self != Self::Center
    }
}

/// A placed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    /// Left edge in canvas-local pixels.
    pub left: f64,
    /// Top edge in canvas-local pixels.
    pub top: f64,
    /// CSS color chosen from the palette, if any.
    pub color: Option<String>,
}

/// The six tokens keyed by identity.
#[derive(Debug, Clone)]
pub struct Roster {
    tokens: [Token; 6],
}

impl Roster {
    /// Create all six tokens horizontally centered at the top edge.
    #[must_use]
    pub fn new(size: Size, token_size: f64) -> Self {
        let left = size.center_x() - token_size / 2.0;
        Self {
            tokens: TokenId::ALL.map(|id| Token { id, left, top: 0.0, color: None }),
        }
    }

    fn index(id: TokenId) -> usize {
        match id {
            TokenId::Center => 0,
            TokenId::Qb => 1,
            TokenId::Wr1 => 2,
            TokenId::Wr2 => 3,
            TokenId::Wr3 => 4,
            TokenId::Wr4 => 5,
        }
    }

    #[must_use]
    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[Self::index(id)]
    }

    pub fn get_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[Self::index(id)]
    }

    /// Move a token's top-left corner.
    pub fn set_position(&mut self, id: TokenId, left: f64, top: f64) {
        let token = self.get_mut(id);
        token.left = left;
        token.top = top;
    }

    pub fn set_color(&mut self, id: TokenId, color: &str) {
        self.get_mut(id).color = Some(color.to_owned());
    }

    /// Tokens in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Rescale every token about its center, used when the canvas changes
    /// size. The center and quarterback are re-pinned to the new centerline.
    pub fn scale(&mut self, sx: f64, sy: f64, size: Size, token_size: f64) {
        let half = token_size / 2.0;
        let centered = size.center_x() - half;
        for token in &mut self.tokens {
            token.left = if token.id.is_receiver() {
                (token.left + half) * sx - half
            } else {
                centered
            };
            token.top = (token.top + half) * sy - half;
        }
    }
}
