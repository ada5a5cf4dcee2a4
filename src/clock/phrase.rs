//! Time in words

use core::fmt;

use super::{ClockReading, Error};

const HOURS: [&str; 12] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
];
const ONES: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];
// Indexed by `minute - 10`, so entry 0 repeats "ten".
const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];
const TENS: [&str; 6] = ["zero", "one", "twenty", "thirty", "forty", "fifty"];

/// Past this minute the phrase counts down to the next hour.
const HALF_HOUR: u8 = 30;

/// Direction of the minute offset relative to the named hour.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joiner {
    Past,
    To,
}

impl Joiner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Joiner::Past => "past",
            Joiner::To => "to",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spoken minute offset.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteWord {
    /// On the hour.
    Nothing,
    /// A single table word, e.g. "five" or "thirty".
    Word(&'static str),
    /// Tens and ones joined by a hyphen, e.g. "twenty-three".
    Compound {
        tens: &'static str,
        ones: &'static str,
    },
}

impl fmt::Display for MinuteWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinuteWord::Nothing => f.write_str("nothing"),
            MinuteWord::Word(word) => f.write_str(word),
            MinuteWord::Compound { tens, ones } => write!(f, "{}-{}", tens, ones),
        }
    }
}

/// Hour word, joiner and minute word for one reading.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phrase {
    hour: &'static str,
    joiner: Joiner,
    minute: MinuteWord,
}

impl Phrase {
    /// Spoken hour, or "midnight"/"noon" for twelve o'clock.
    pub fn hour(&self) -> &'static str {
        self.hour
    }

    pub fn joiner(&self) -> Joiner {
        self.joiner
    }

    pub fn minute(&self) -> MinuteWord {
        self.minute
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.minute, self.joiner, self.hour)
    }
}

/// Name a clock reading in words.
///
/// Minutes after the half hour are phrased against the next hour, so 4:35
/// reads "twenty-five to five". Half past stays on the "past" side and uses
/// the plain tens word ("thirty past four").
pub fn to_phrase(reading: &ClockReading) -> Result<Phrase, Error> {
    let (joiner, hour, minute) = if reading.minute() > HALF_HOUR {
        (
            Joiner::To,
            (reading.hour12() + 1) % 12,
            60 - reading.minute(),
        )
    } else {
        (Joiner::Past, reading.hour12(), reading.minute())
    };

    // The half-day flag is not rolled, so 11:45 PM reads "fifteen to noon".
    let hour = match (hour, reading.is_pm()) {
        (0, false) => "midnight",
        (0, true) => "noon",
        (hour, _) => lookup(&HOURS, hour)?,
    };
    let minute = minute_word(minute)?;

    let phrase = Phrase {
        hour,
        joiner,
        minute,
    };
    trace!("Phrase for {}:{}: {}", reading.hour12(), reading.minute(), phrase);
    Ok(phrase)
}

fn minute_word(minute: u8) -> Result<MinuteWord, Error> {
    match minute {
        0 => Ok(MinuteWord::Nothing),
        1..=10 => lookup(&ONES, minute).map(MinuteWord::Word),
        11..=19 => lookup(&TEENS, minute - 10).map(MinuteWord::Word),
        _ => {
            let tens = lookup(&TENS, minute / 10)?;
            match minute % 10 {
                0 => Ok(MinuteWord::Word(tens)),
                ones => Ok(MinuteWord::Compound {
                    tens,
                    ones: lookup(&ONES, ones)?,
                }),
            }
        }
    }
}

fn lookup(table: &[&'static str], index: u8) -> Result<&'static str, Error> {
    table
        .get(usize::from(index))
        .copied()
        .ok_or(Error::OutOfRangeInput)
}
