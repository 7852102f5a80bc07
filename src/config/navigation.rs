//! Slide sequence and transition timing

use std::time::Duration;

/// Number of slides in the presentation. Fixed.
pub const TOTAL_SLIDES: usize = 7;

/// Length of the transition window. Navigation requests are ignored until it elapses.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(600);

/// Background music volume applied when the experience begins
pub const BG_MUSIC_VOLUME: f64 = 0.35;
