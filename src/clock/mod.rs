//! Clock readings and the phrase clock
//!
//! A [`ClockReading`] is the 12-hour decomposition of a wall-clock sample.
//! [`to_phrase`] names it in words, [`to_full_time`] renders the digital
//! fallback. Both are pure and may be called from any task.

use core::fmt;

use chrono::Timelike;

mod full_time;
mod phrase;

pub use full_time::{to_full_time, FullTime};
pub use phrase::{to_phrase, Joiner, MinuteWord, Phrase};

/// Hour-of-half-day, 0 standing for twelve o'clock.
const MAX_HOUR12: u8 = 11;
const MAX_MINUTE: u8 = 59;

/// A 12-hour clock reading.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockReading {
    hour12: u8,
    minute: u8,
    is_pm: bool,
}

impl ClockReading {
    /// Create a reading, rejecting an hour outside 0–11 or a minute outside 0–59.
    pub fn new(hour12: u8, minute: u8, is_pm: bool) -> Result<Self, Error> {
        match (hour12, minute) {
            (0..=MAX_HOUR12, 0..=MAX_MINUTE) => Ok(Self {
                hour12,
                minute,
                is_pm,
            }),
            _ => {
                warn!("Rejected clock reading {}:{}", hour12, minute);
                Err(Error::OutOfRangeInput)
            }
        }
    }

    /// Decompose a chrono time into a 12-hour reading.
    pub fn from_time<T: Timelike>(time: &T) -> Result<Self, Error> {
        let (is_pm, hour) = time.hour12();
        let hour12 = u8::try_from(hour % 12).map_err(|_| Error::OutOfRangeInput)?;
        let minute = u8::try_from(time.minute()).map_err(|_| Error::OutOfRangeInput)?;
        Self::new(hour12, minute, is_pm)
    }

    /// Hour of the half-day (0–11).
    pub fn hour12(&self) -> u8 {
        self.hour12
    }

    /// Minute of the hour (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_pm(&self) -> bool {
        self.is_pm
    }

    /// Shorthand for [`to_phrase`].
    pub fn phrase(&self) -> Result<Phrase, Error> {
        to_phrase(self)
    }

    /// Shorthand for [`to_full_time`].
    pub fn full_time(&self) -> FullTime {
        to_full_time(self)
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An hour, minute or table index fell outside its domain.
    OutOfRangeInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRangeInput => f.write_str("clock reading out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn accepts_the_full_domain() {
        for hour in 0..=11 {
            for minute in 0..=59 {
                for pm in [false, true] {
                    let reading = ClockReading::new(hour, minute, pm).unwrap();
                    assert_eq!(reading.hour12(), hour);
                    assert_eq!(reading.minute(), minute);
                    assert_eq!(reading.is_pm(), pm);
                }
            }
        }
    }

    #[test]
    fn rejects_hour_twelve_and_beyond() {
        assert_eq!(ClockReading::new(12, 0, false), Err(Error::OutOfRangeInput));
        assert_eq!(ClockReading::new(255, 0, true), Err(Error::OutOfRangeInput));
    }

    #[test]
    fn rejects_minute_sixty() {
        assert_eq!(ClockReading::new(3, 60, false), Err(Error::OutOfRangeInput));
    }

    #[test]
    fn from_time_maps_twelve_to_zero() {
        let midnight = NaiveTime::from_hms_opt(0, 5, 0).unwrap();
        let reading = ClockReading::from_time(&midnight).unwrap();
        assert_eq!((reading.hour12(), reading.minute(), reading.is_pm()), (0, 5, false));

        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let reading = ClockReading::from_time(&noon).unwrap();
        assert_eq!((reading.hour12(), reading.minute(), reading.is_pm()), (0, 0, true));
    }

    #[test]
    fn from_time_keeps_afternoon_hours() {
        let time = NaiveTime::from_hms_opt(22, 45, 59).unwrap();
        let reading = ClockReading::from_time(&time).unwrap();
        assert_eq!((reading.hour12(), reading.minute(), reading.is_pm()), (10, 45, true));
    }

    #[test]
    fn error_message() {
        assert_eq!(Error::OutOfRangeInput.to_string(), "clock reading out of range");
    }
}
