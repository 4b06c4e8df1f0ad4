//! Skin score pair produced by the estimator.

use serde::{Deserialize, Serialize};

/// Lower bound of the hydration score.
pub const HYDRATION_MIN: u8 = 10;
/// Upper bound of the hydration score.
pub const HYDRATION_MAX: u8 = 95;
/// Lower bound of the acne severity score.
pub const ACNE_MIN: u8 = 0;
/// Upper bound of the acne severity score.
pub const ACNE_MAX: u8 = 10;

/// Heuristic hydration and acne severity scores for a single photo.
///
/// Either both scores are present or neither is: a failed analysis is
/// reported as the unavailable pair, never as a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkinScores {
    hydration: Option<u8>,
    acne_severity: Option<u8>,
}

impl SkinScores {
    /// Creates a score pair, clamping each score into its range.
    #[must_use]
    pub fn new(hydration: u8, acne_severity: u8) -> Self {
        Self {
            hydration: Some(hydration.clamp(HYDRATION_MIN, HYDRATION_MAX)),
            acne_severity: Some(acne_severity.clamp(ACNE_MIN, ACNE_MAX)),
        }
    }

    /// The null pair: analysis was not possible.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            hydration: None,
            acne_severity: None,
        }
    }

    /// Hydration score in `10..=95`, if available.
    #[must_use]
    pub const fn hydration(&self) -> Option<u8> {
        self.hydration
    }

    /// Acne severity score in `0..=10`, if available.
    #[must_use]
    pub const fn acne_severity(&self) -> Option<u8> {
        self.acne_severity
    }

    /// Returns true when both scores were computed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.hydration.is_some() && self.acne_severity.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_into_range() {
        let scores = SkinScores::new(200, 42);
        assert_eq!(scores.hydration(), Some(HYDRATION_MAX));
        assert_eq!(scores.acne_severity(), Some(ACNE_MAX));

        let scores = SkinScores::new(0, 0);
        assert_eq!(scores.hydration(), Some(HYDRATION_MIN));
        assert_eq!(scores.acne_severity(), Some(0));
    }

    #[test]
    fn test_unavailable_is_null_pair() {
        let scores = SkinScores::unavailable();
        assert!(!scores.is_available());
        assert_eq!(scores.hydration(), None);
        assert_eq!(scores.acne_severity(), None);
        assert_eq!(scores, SkinScores::default());
    }

    #[test]
    fn test_serializes_nulls() {
        let json = serde_json::to_string(&SkinScores::unavailable()).unwrap();
        assert_eq!(json, r#"{"hydration":null,"acne_severity":null}"#);

        let json = serde_json::to_string(&SkinScores::new(55, 5)).unwrap();
        assert_eq!(json, r#"{"hydration":55,"acne_severity":5}"#);
    }
}
