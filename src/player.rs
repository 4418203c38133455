//! Player identities and per-marker round wins.

use crate::common::Marker;
use crate::config::DEFAULT_PLAYER_NAMES;
use alloc::string::{String, ToString};
use core::ops::Index;

/// One of the two participants of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Build the player for `marker`'s seat, substituting the seat's default
    /// name when `name` is blank.
    pub fn seated(name: &str, marker: Marker) -> Self {
        let name = name.trim();
        if name.is_empty() {
            Self::new(DEFAULT_PLAYER_NAMES[marker.seat()], marker)
        } else {
            Self::new(name.to_string(), marker)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// Rounds won per marker within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    #[cfg_attr(feature = "std", serde(rename = "X"))]
    x: u32,
    #[cfg_attr(feature = "std", serde(rename = "O"))]
    o: u32,
}

impl Scores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, marker: Marker) -> u32 {
        match marker {
            Marker::X => self.x,
            Marker::O => self.o,
        }
    }

    /// Credit one round win to `marker`.
    pub fn record_win(&mut self, marker: Marker) {
        match marker {
            Marker::X => self.x = self.x.saturating_add(1),
            Marker::O => self.o = self.o.saturating_add(1),
        }
    }

    /// `(marker, wins)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, u32)> + '_ {
        Marker::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o)
    }
}

impl Index<Marker> for Scores {
    type Output = u32;

    fn index(&self, marker: Marker) -> &u32 {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}
