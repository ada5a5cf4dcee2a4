//! Time-in-words watchface
//!
//! Three stacked lines spell out the time ("twenty-five" / "to" / "five"),
//! with the digital readout underneath.

use core::fmt;

use chrono::Duration;

use super::{Error, FaceConfig, FaceText, WatchFace, WatchFaceState};
use crate::clock::ClockReading;

const BUF_LEN: usize = 16;

/// Fixed-size text buffer for one line of the face
pub struct Label {
    str_buf: [u8; BUF_LEN],
    len: usize,
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Label {
    /// Create new, empty label
    pub fn new() -> Self {
        Self {
            str_buf: [0; BUF_LEN],
            len: 0,
        }
    }

    /// Replace the label text. On overflow the label is left empty.
    pub fn set(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        self.len = 0;
        let len = format_no_std::show(&mut self.str_buf, args)
            .map_err(|_| Error::BufferOverflow)?
            .len();
        self.len = len;
        Ok(())
    }

    /// Current label text
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// Watchface spelling out the time in words
pub struct WordWatchface {
    config: FaceConfig,
    /// Minute word, top line
    pub minute_label: Label,
    /// "past" or "to"
    pub joiner_label: Label,
    /// Hour word
    pub hour_label: Label,
    /// `H:MM AM` readout, bottom line
    pub full_time_label: Label,
}

impl WordWatchface {
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Wall-clock reading for a UTC timestamp under the configured offset.
    fn reading(&self, state: &WatchFaceState) -> Result<ClockReading, Error> {
        let local = state
            .time
            .checked_add_signed(Duration::seconds(i64::from(self.config.utc_offset_secs)))
            .ok_or(Error::InvalidTime)?;
        ClockReading::from_time(&local).map_err(Error::from)
    }
}

impl WatchFace for WordWatchface {
    fn new(config: FaceConfig) -> Self {
        debug!(
            "Word watchface: offset {}s, full time {}",
            config.utc_offset_secs,
            config.show_full_time
        );

        Self {
            config,
            minute_label: Label::new(),
            joiner_label: Label::new(),
            hour_label: Label::new(),
            full_time_label: Label::new(),
        }
    }

    fn update(&mut self, state: &WatchFaceState) -> Result<FaceText<'_>, Error> {
        let reading = self.reading(state)?;
        let phrase = reading.phrase()?;

        self.minute_label.set(format_args!("{}", phrase.minute()))?;
        self.joiner_label.set(format_args!("{}", phrase.joiner()))?;
        self.hour_label.set(format_args!("{}", phrase.hour()))?;

        if self.config.show_full_time {
            self.full_time_label
                .set(format_args!("{}", reading.full_time()))?;
        } else {
            self.full_time_label.clear();
        }

        Ok(FaceText {
            minute: self.minute_label.text(),
            joiner: self.joiner_label.text(),
            hour: self.hour_label.text(),
            full_time: self
                .config
                .show_full_time
                .then(|| self.full_time_label.text()),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn state(hour: u32, minute: u32) -> WatchFaceState {
        WatchFaceState {
            time: NaiveDate::from_ymd_opt(2024, 3, 3)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        }
    }

    #[test]
    fn spells_out_utc_time() {
        let mut face = WordWatchface::new(FaceConfig::new());
        let text = face.update(&state(16, 35)).unwrap();
        assert_eq!(
            text,
            FaceText {
                minute: "twenty-five",
                joiner: "to",
                hour: "five",
                full_time: Some("4:35 PM"),
            }
        );
    }

    #[test]
    fn applies_utc_offset() {
        let mut face = WordWatchface::new(FaceConfig::new().with_utc_offset(3_600));
        let text = face.update(&state(23, 0)).unwrap();
        assert_eq!(text.hour, "midnight");
        assert_eq!(text.minute, "nothing");
        assert_eq!(text.full_time, Some("12:00 AM"));

        let mut face = WordWatchface::new(FaceConfig::new().with_utc_offset(-30 * 60));
        let text = face.update(&state(13, 15)).unwrap();
        assert_eq!((text.minute, text.joiner, text.hour), ("fifteen", "to", "one"));
        assert_eq!(text.full_time, Some("12:45 PM"));
    }

    #[test]
    fn readout_can_be_hidden() {
        let mut face = WordWatchface::new(FaceConfig::new().with_full_time(false));
        let text = face.update(&state(6, 11)).unwrap();
        assert_eq!((text.minute, text.joiner, text.hour), ("eleven", "past", "six"));
        assert_eq!(text.full_time, None);
        assert_eq!(face.full_time_label.text(), "");
    }

    #[test]
    fn labels_follow_consecutive_updates() {
        let mut face = WordWatchface::new(FaceConfig::new());
        face.update(&state(10, 45)).unwrap();
        face.update(&state(4, 20)).unwrap();
        assert_eq!(face.minute_label.text(), "twenty");
        assert_eq!(face.joiner_label.text(), "past");
        assert_eq!(face.hour_label.text(), "four");
        assert_eq!(face.full_time_label.text(), "4:20 AM");
    }

    #[test]
    fn offset_past_the_calendar_end_is_rejected() {
        let mut face = WordWatchface::new(FaceConfig::new().with_utc_offset(3_600));
        let state = WatchFaceState {
            time: chrono::NaiveDateTime::MAX,
        };
        assert_eq!(face.update(&state), Err(Error::InvalidTime));
    }

    #[test]
    fn label_overflow_leaves_it_empty() {
        let mut label = Label::new();
        label.set(format_args!("{}", "noon")).unwrap();
        assert_eq!(
            label.set(format_args!("{}", "x".repeat(BUF_LEN + 1))),
            Err(Error::BufferOverflow)
        );
        assert_eq!(label.text(), "");
    }
}
