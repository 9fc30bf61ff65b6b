use serde::{Deserialize, Serialize};

use crate::sentence::Decode;

/// A decoded position in signed decimal degrees (south/west negative).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub lat: f64,
    pub lon: f64,
}

/// Latest decoded coordinates plus fix and freshness flags.
///
/// Mutated only through [`PositionState::apply`]. Consumers read through
/// [`PositionState::take_fix`], which consumes the freshness flag so each
/// decoded fix is observed at most once.
#[derive(Debug, Clone, Copy)]
pub struct PositionState {
    lat: f64,
    lon: f64,
    has_fix: bool,
    fresh: bool,
}

impl Default for PositionState {
    fn default() -> Self {
        Self {
            lat: 0.0,
            lon: 0.0,
            has_fix: false,
            fresh: false,
        }
    }
}

impl PositionState {
    /// Fold one decode outcome into the record.
    ///
    /// A fix overwrites the coordinates and marks the record fresh; a
    /// no-fix report clears `has_fix` but leaves the coordinates (and
    /// any unconsumed freshness) alone.
    pub fn apply(&mut self, outcome: Decode) {
        match outcome {
            Decode::Fix(fix) => {
                self.lat = fix.lat;
                self.lon = fix.lon;
                self.has_fix = true;
                self.fresh = true;
            }
            Decode::NoFix => self.has_fix = false,
        }
    }

    /// True once a sentence has reported an active fix and no later
    /// sentence has withdrawn it.
    pub fn has_fix(&self) -> bool {
        self.has_fix
    }

    /// The coordinates, if a decode landed since the last call.
    ///
    /// One-shot: the freshness flag is consumed, so a second call with
    /// no decode in between returns `None`. A legitimate 0.0/0.0 fix is
    /// representable and distinct from "nothing new".
    pub fn take_fix(&mut self) -> Option<Fix> {
        if self.fresh {
            self.fresh = false;
            Some(Fix {
                lat: self.lat,
                lon: self.lon,
            })
        } else {
            None
        }
    }
}
