//! Watch face configuration

/// Seconds in a day, bounding the UTC offset.
const DAY_SECS: i32 = 86_400;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceConfig {
    /// Fixed offset added to the RTC's UTC time, in seconds
    pub utc_offset_secs: i32,
    /// Draw the `H:MM AM` line under the phrase
    pub show_full_time: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            utc_offset_secs: 0,
            show_full_time: true,
        }
    }
}

impl FaceConfig {
    /// Create new face configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the UTC offset, clamped to less than a day either way.
    pub fn with_utc_offset(mut self, secs: i32) -> Self {
        self.utc_offset_secs = secs.clamp(-(DAY_SECS - 1), DAY_SECS - 1);
        self
    }

    pub fn with_full_time(mut self, show: bool) -> Self {
        self.show_full_time = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utc_with_readout() {
        let config = FaceConfig::new();
        assert_eq!(config.utc_offset_secs, 0);
        assert!(config.show_full_time);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(FaceConfig::new().with_utc_offset(3_600).utc_offset_secs, 3_600);
        assert_eq!(
            FaceConfig::new().with_utc_offset(i32::MAX).utc_offset_secs,
            DAY_SECS - 1
        );
        assert_eq!(
            FaceConfig::new().with_utc_offset(i32::MIN).utc_offset_secs,
            -(DAY_SECS - 1)
        );
    }
}
