//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use core::fmt;

use chrono::NaiveDateTime;

use crate::{clock, system::config::FaceConfig};

mod word_watchface;

pub use word_watchface::{Label, WordWatchface};

pub trait WatchFace {
    /// Create new watchface
    fn new(config: FaceConfig) -> Self;

    /// Update watchface with state and return the lines to draw
    fn update(&mut self, state: &WatchFaceState) -> Result<FaceText<'_>, Error>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    /// UTC time from the RTC
    pub time: NaiveDateTime,
}

/// Text lines of one frame, top to bottom as the host draws them
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceText<'a> {
    pub minute: &'a str,
    pub joiner: &'a str,
    pub hour: &'a str,
    /// `None` when the digital readout is switched off
    pub full_time: Option<&'a str>,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Clock(clock::Error),
    /// Text does not fit into a label buffer
    BufferOverflow,
    /// Applying the UTC offset left chrono's representable range
    InvalidTime,
}

impl From<clock::Error> for Error {
    fn from(err: clock::Error) -> Self {
        Error::Clock(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Clock(err) => write!(f, "{}", err),
            Error::BufferOverflow => f.write_str("label buffer overflow"),
            Error::InvalidTime => f.write_str("time out of range"),
        }
    }
}
