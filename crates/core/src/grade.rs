// crates/core/src/grade.rs
//! Qualitative grade derived from a comment rate.
//!
//! Thresholds are inclusive lower bounds evaluated from the highest tier
//! down. Presentation attributes (label, emoji, color, suggestion) come from
//! a single lookup table indexed by tier so every consumer agrees on the
//! boundaries.

use core::fmt;
use serde::{Deserialize, Serialize};

/// コメント率の評価
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Low,
    Fair,
    Good,
    Excellent,
}

/// Inclusive lower bound of [`Grade::Excellent`], in percent.
pub const EXCELLENT_THRESHOLD: f64 = 40.0;
/// Inclusive lower bound of [`Grade::Good`], in percent.
pub const GOOD_THRESHOLD: f64 = 25.0;
/// Inclusive lower bound of [`Grade::Fair`], in percent.
pub const FAIR_THRESHOLD: f64 = 15.0;

/// Display attributes for one grade tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStyle {
    pub label: &'static str,
    pub emoji: &'static str,
    /// RGB triple.
    pub color: (u8, u8, u8),
    pub suggestion: &'static str,
}

const GREEN: (u8, u8, u8) = (0, 128, 0);
const ORANGE: (u8, u8, u8) = (255, 140, 0);
const CRIMSON: (u8, u8, u8) = (220, 20, 60);

// Indexed by `Grade as usize`.
static STYLES: [GradeStyle; 4] = [
    GradeStyle {
        label: "Low",
        emoji: "❌",
        color: CRIMSON,
        suggestion: "Comment rate is low. Adding the necessary comments is strongly recommended.",
    },
    GradeStyle {
        label: "Fair",
        emoji: "⚠️",
        color: ORANGE,
        suggestion: "Consider documenting more methods and classes to improve readability.",
    },
    GradeStyle {
        label: "Good",
        emoji: "✅",
        color: GREEN,
        suggestion: "Good comment rate. Consider adding comments to complex logic.",
    },
    GradeStyle {
        label: "Excellent",
        emoji: "✅",
        color: GREEN,
        suggestion: "Great comment rate! Keep up the good habits.",
    },
];

impl Grade {
    /// Map a percentage to its tier. `NaN` maps to [`Grade::Low`].
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate >= EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if rate >= GOOD_THRESHOLD {
            Self::Good
        } else if rate >= FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn style(self) -> &'static GradeStyle {
        &STYLES[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.style().label
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        self.style().emoji
    }

    #[must_use]
    pub fn color(self) -> (u8, u8, u8) {
        self.style().color
    }

    #[must_use]
    pub fn suggestion(self) -> &'static str {
        self.style().suggestion
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
