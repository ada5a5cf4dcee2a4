//! Digital fallback readout

use core::fmt;

use super::ClockReading;

/// `H:MM AM` rendering of a reading, without the to/past rollover.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FullTime {
    /// 1–12
    hour: u8,
    minute: u8,
    is_pm: bool,
}

impl FullTime {
    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> &'static str {
        if self.is_pm {
            "PM"
        } else {
            "AM"
        }
    }
}

impl fmt::Display for FullTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem())
    }
}

/// Digital readout for a reading. Hour 0 shows as 12.
pub fn to_full_time(reading: &ClockReading) -> FullTime {
    FullTime {
        hour: match reading.hour12() {
            0 => 12,
            hour => hour,
        },
        minute: reading.minute(),
        is_pm: reading.is_pm(),
    }
}
