//! Formation presets, the formation selection, and mirroring.
//!
//! Presets are tables of fractions of the canvas size, resolved to pixels
//! against the current canvas whenever they are applied. Any manual change to
//! token positions (a drag or a mirror) moves the selection to
//! [`Formation::Custom`].

#[cfg(test)]
#[path = "formation_test.rs"]
mod formation_test;

use std::fmt;
use std::str::FromStr;

use crate::geom::Size;
use crate::token::{Roster, TokenId};

/// A named, read-only formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    GunEmptyBunch,
    GunEmptyAce,
}

/// Fractional position of one token inside a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Left edge as a fraction of canvas width. `None` means centered.
    pub left: Option<f64>,
    /// Top edge as a fraction of canvas height.
    pub top: f64,
}

const fn centered(top: f64) -> Spot {
    Spot { left: None, top }
}

const fn at(left: f64, top: f64) -> Spot {
    Spot { left: Some(left), top }
}

impl Preset {
    pub const ALL: [Preset; 2] = [Self::GunEmptyBunch, Self::GunEmptyAce];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::GunEmptyBunch => "gunEmptyBunch",
            Self::GunEmptyAce => "gunEmptyAce",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GunEmptyBunch => "Gun - Empty - Bunch",
            Self::GunEmptyAce => "Gun - Empty - Ace",
        }
    }

    /// Fractional spots in [`TokenId::ALL`] order.
    #[must_use]
    pub fn spots(self) -> [Spot; 6] {
        match self {
            Self::GunEmptyBunch => [
                centered(0.64),
                centered(0.81),
                at(0.70, 0.69),
                at(0.75, 0.64),
                at(0.80, 0.69),
                at(0.21, 0.64),
            ],
            Self::GunEmptyAce => [
                centered(0.64),
                centered(0.81),
                at(0.14, 0.64),
                at(0.31, 0.64),
                at(0.66, 0.64),
                at(0.83, 0.64),
            ],
        }
    }

    /// Pixel positions `(id, left, top)` for this preset on a canvas of `size`.
    #[must_use]
    pub fn positions(self, size: Size, token_size: f64) -> [(TokenId, f64, f64); 6] {
        let centered_left = size.center_x() - token_size / 2.0;
        let spots = self.spots();
        let mut out = [(TokenId::Center, 0.0, 0.0); 6];
        for (slot, (id, spot)) in out.iter_mut().zip(TokenId::ALL.into_iter().zip(spots)) {
            let left = spot.left.map_or(centered_left, |f| size.width * f);
            *slot = (id, left, size.height * spot.top);
        }
        out
    }
}

/// The active formation: a named preset or a custom arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    Preset(Preset),
    Custom,
}

impl Default for Formation {
    fn default() -> Self {
        Self::Preset(Preset::GunEmptyBunch)
    }
}

impl Formation {
    /// Every selectable option, presets first.
    pub const OPTIONS: [Formation; 3] = [
        Self::Preset(Preset::GunEmptyBunch),
        Self::Preset(Preset::GunEmptyAce),
        Self::Custom,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Preset(p) => p.key(),
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Preset(p) => p.label(),
            Self::Custom => "Custom",
        }
    }

    #[must_use]
    pub fn preset(self) -> Option<Preset> {
        match self {
            Self::Preset(p) => Some(p),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognized formation key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown formation: {0}")]
pub struct UnknownFormation(pub String);

impl FromStr for Formation {
    type Err = UnknownFormation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| UnknownFormation(s.to_owned()))
    }
}

/// Overwrite all six token positions with `preset` on a canvas of `size`.
pub fn apply_preset(roster: &mut Roster, preset: Preset, size: Size, token_size: f64) {
    for (id, left, top) in preset.positions(size, token_size) {
        roster.set_position(id, left, top);
    }
}

/// Reflect a token's left edge so that its center mirrors about the canvas centerline.
#[must_use]
pub fn mirror_left(left: f64, canvas_width: f64, token_size: f64) -> f64 {
    let center_x = canvas_width / 2.0;
    let token_center = left + token_size / 2.0;
    let mirrored_center = center_x - (token_center - center_x);
    mirrored_center - token_size / 2.0
}

/// Mirror the four receivers horizontally. Vertical positions, the center,
/// and the quarterback are untouched.
pub fn mirror_receivers(roster: &mut Roster, canvas_width: f64, token_size: f64) {
    for id in TokenId::RECEIVERS {
        let token = roster.get_mut(id);
        token.left = mirror_left(token.left, canvas_width, token_size);
    }
}
