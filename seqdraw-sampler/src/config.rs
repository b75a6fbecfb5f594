use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::SamplerError;

/// Which slice of the feature records positive sampling may draw from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SamplingMode {
    /// Every record.
    All,
    /// Records whose chromosome is not in the holdout set.
    Train,
    /// Records whose chromosome is in the holdout set.
    Test,
}

impl FromStr for SamplingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SamplingMode::All),
            "train" => Ok(SamplingMode::Train),
            "test" => Ok(SamplingMode::Test),
            _ => Err(format!("Mode must be one of all/train/test. Input was '{}'", s)),
        }
    }
}

impl Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingMode::All => write!(f, "all"),
            SamplingMode::Train => write!(f, "train"),
            SamplingMode::Test => write!(f, "test"),
        }
    }
}

/// Construction-time configuration for a [`Sampler`](crate::Sampler).
///
/// `radius` is the label-window half-width, so the label window spans
/// `2 * radius + 1` positions. `window_size` is the total sequence
/// window length; the leftover context beyond the label window is split
/// evenly into padding on both sides.
#[derive(Debug, Clone)]
pub struct SamplerConfig {
    pub radius: u32,
    pub window_size: u32,
    pub holdout_chromosomes: HashSet<String>,
    pub mode: SamplingMode,
    /// Overlap fraction above which a background candidate is rejected
    /// as a mislabeled negative.
    pub overlap_threshold: f64,
    /// Seed for the sampler's RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            radius: 100,
            window_size: 1001,
            holdout_chromosomes: HashSet::new(),
            mode: SamplingMode::All,
            overlap_threshold: 0.5,
            seed: None,
        }
    }
}

impl SamplerConfig {
    pub(crate) fn validate(&self) -> Result<(), SamplerError> {
        if self.radius == 0 {
            return Err(SamplerError::InvalidConfig(
                "radius must be positive".to_string(),
            ));
        }
        if self.window_size < 2 * self.radius + 1 {
            return Err(SamplerError::InvalidConfig(format!(
                "window_size must be at least {} for radius {}, got {}",
                2 * self.radius + 1,
                self.radius,
                self.window_size
            )));
        }
        if !(0.0..=1.0).contains(&self.overlap_threshold) {
            return Err(SamplerError::InvalidConfig(format!(
                "overlap_threshold must be in [0, 1], got {}",
                self.overlap_threshold
            )));
        }
        Ok(())
    }

    /// Context added on each side of the label window. When the leftover
    /// space is odd it truncates toward zero, shrinking the effective
    /// sequence window by one position rather than padding unevenly.
    pub(crate) fn padding(&self) -> u32 {
        (self.window_size - (2 * self.radius + 1)) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[test]
    fn test_default_matches_reference_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.radius, 100);
        assert_eq!(config.window_size, 1001);
        assert_eq!(config.overlap_threshold, 0.5);
        assert_eq!(config.mode, SamplingMode::All);
        // 400 bases of context on either side of a 201-position bin
        assert_eq!(config.padding(), 400);
    }

    #[rstest]
    #[case(5, 11, 0)]
    #[case(5, 12, 0)] // odd leftover truncates
    #[case(5, 13, 1)]
    #[case(100, 1001, 400)]
    fn test_padding_truncation(#[case] radius: u32, #[case] window_size: u32, #[case] padding: u32) {
        let config = SamplerConfig {
            radius,
            window_size,
            ..Default::default()
        };
        config.validate().unwrap();
        assert_eq!(config.padding(), padding);
    }

    #[rstest]
    #[case(0, 11, 0.5)] // zero radius
    #[case(5, 10, 0.5)] // window smaller than the label window
    #[case(5, 11, 1.5)] // threshold out of range
    fn test_invalid_configs_rejected(
        #[case] radius: u32,
        #[case] window_size: u32,
        #[case] overlap_threshold: f64,
    ) {
        let config = SamplerConfig {
            radius,
            window_size,
            overlap_threshold,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SamplerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("train".parse::<SamplingMode>().unwrap(), SamplingMode::Train);
        assert_eq!("TEST".parse::<SamplingMode>().unwrap(), SamplingMode::Test);
        assert!("validation".parse::<SamplingMode>().is_err());
    }
}
