//! Saltarello, a terminal side-scrolling runner.
//!
//! The player sprints along the ground line, jumping over or shooting the
//! obstacles scrolling in from the right; past score 10 a bird joins in that
//! can only be avoided by ducking.
//!
//! Module map:
//! - `entities`: pure data records, no logic
//! - `compute`: pure simulation step (seedable RNG, injected clock/input)
//! - `constants`: all tuning values, in the 800×600 play-field space
//! - `display`: crossterm rendering, play field scaled to the terminal
//! - `audio`: rodio-synthesized sound effects and background music

pub mod audio;
pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
