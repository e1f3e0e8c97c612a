//! Shot classification: camera-to-subject distance → named framing.
//!
//! This is the only place the framing thresholds live. The subject
//! billboard, the camera-monitor badge and the status readout all call
//! [`classify`], so the three displays cannot drift apart.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the close-up band, in meters.
pub const CLOSE_UP_MAX: f64 = 1.5;
/// Upper bound (exclusive) of the medium close-up band, in meters.
pub const MEDIUM_CLOSE_UP_MAX: f64 = 2.5;
/// Upper bound (exclusive) of the medium shot band, in meters.
pub const MEDIUM_MAX: f64 = 5.0;

/// Named framing derived from camera distance, ordered tightest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// `d < 1.5`
    CloseUp,
    /// `1.5 ≤ d < 2.5`
    MediumCloseUp,
    /// `2.5 ≤ d < 5`
    Medium,
    /// `d ≥ 5`
    Wide,
}

impl ShotType {
    /// All shot types, tightest first.
    pub const ALL: [ShotType; 4] = [
        ShotType::CloseUp,
        ShotType::MediumCloseUp,
        ShotType::Medium,
        ShotType::Wide,
    ];

    /// English display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CloseUp => "Close-up",
            Self::MediumCloseUp => "Medium Close-up",
            Self::Medium => "Medium Shot",
            Self::Wide => "Wide Shot",
        }
    }

    /// Chinese display name, as used on the lab's bilingual labels.
    #[must_use]
    pub const fn label_zh(self) -> &'static str {
        match self {
            Self::CloseUp => "特写",
            Self::MediumCloseUp => "中近景",
            Self::Medium => "中景",
            Self::Wide => "全景",
        }
    }

    /// Display color as `#rrggbb`.
    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::CloseUp => "#f87171",
            Self::MediumCloseUp => "#fbbf24",
            Self::Medium => "#34d399",
            Self::Wide => "#60a5fa",
        }
    }
}

impl std::fmt::Display for ShotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a camera distance (meters) into a shot type.
///
/// Bands are half-open on their lower bound: exactly 1.5 is a medium
/// close-up, exactly 2.5 a medium shot, exactly 5.0 a wide shot. Total over
/// every `f64`: negatives fall in the close-up band and NaN is wide.
#[must_use]
pub fn classify(distance: f64) -> ShotType {
    if distance < CLOSE_UP_MAX {
        ShotType::CloseUp
    } else if distance < MEDIUM_CLOSE_UP_MAX {
        ShotType::MediumCloseUp
    } else if distance < MEDIUM_MAX {
        ShotType::Medium
    } else {
        ShotType::Wide
    }
}

/// A classified shot ready for display: type, text and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotLabel {
    /// The classified framing.
    pub shot: ShotType,
    /// Display text (English, or "中文 (English)" when bilingual).
    pub text: String,
    /// Display color as `#rrggbb`.
    pub color: &'static str,
}

impl ShotLabel {
    /// Classify `distance` and build its display label.
    #[must_use]
    pub fn for_distance(distance: f64, bilingual: bool) -> Self {
        let shot = classify(distance);
        let text = if bilingual {
            format!("{} ({})", shot.label_zh(), shot.label())
        } else {
            shot.label().to_owned()
        };
        Self {
            shot,
            text,
            color: shot.color_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_line() {
        assert_eq!(classify(0.5), ShotType::CloseUp);
        assert_eq!(classify(1.49), ShotType::CloseUp);
        assert_eq!(classify(2.0), ShotType::MediumCloseUp);
        assert_eq!(classify(4.99), ShotType::Medium);
        assert_eq!(classify(6.0), ShotType::Wide);
        assert_eq!(classify(1000.0), ShotType::Wide);
    }

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(classify(1.5), ShotType::MediumCloseUp);
        assert_eq!(classify(2.5), ShotType::Medium);
        assert_eq!(classify(5.0), ShotType::Wide);
    }

    #[test]
    fn total_over_odd_inputs() {
        assert_eq!(classify(-3.0), ShotType::CloseUp);
        assert_eq!(classify(0.0), ShotType::CloseUp);
        assert_eq!(classify(f64::INFINITY), ShotType::Wide);
        assert_eq!(classify(f64::NAN), ShotType::Wide);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut prev = classify(0.0);
        for step in 0..=1200 {
            let shot = classify(f64::from(step) * 0.01);
            assert!(shot >= prev, "shot regressed at step {step}");
            prev = shot;
        }
    }

    #[test]
    fn labels_and_colors_are_distinct() {
        for (i, a) in ShotType::ALL.iter().enumerate() {
            for b in &ShotType::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
                assert_ne!(a.color_hex(), b.color_hex());
            }
        }
    }

    #[test]
    fn label_text_modes() {
        let plain = ShotLabel::for_distance(6.0, false);
        assert_eq!(plain.text, "Wide Shot");
        assert_eq!(plain.color, "#60a5fa");

        let bilingual = ShotLabel::for_distance(1.0, true);
        assert_eq!(bilingual.shot, ShotType::CloseUp);
        assert_eq!(bilingual.text, "特写 (Close-up)");
    }
}
