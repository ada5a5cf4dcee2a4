//! Time-in-words watch face for the PineTime.
//!
//! Turns a clock reading into an English phrase ("twenty-five to five",
//! "nothing past noon") plus a conventional `H:MM AM` readout. The firmware
//! samples its RTC once a second and hands the result to a [`ui::WatchFace`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod clock;
pub mod system;
pub mod ui;

pub use clock::{to_full_time, to_phrase, ClockReading, Error, FullTime, Joiner, MinuteWord, Phrase};
