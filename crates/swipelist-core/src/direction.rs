#![forbid(unsafe_code)]

//! Swipe direction policy and layout direction.
//!
//! Direction validity is a pure function of the configured
//! [`SwipeDirection`], the list's [`LayoutDirection`], and the signed
//! horizontal delta (or velocity) of the gesture.
//!
//! | Configured | LTR valid when | RTL valid when |
//! |------------|----------------|----------------|
//! | `Both`     | always         | always         |
//! | `Start`    | `delta < 0`    | `delta > 0`    |
//! | `End`      | `delta > 0`    | `delta < 0`    |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directions in which a row may be swiped out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SwipeDirection {
    /// Rows can be swiped towards either edge.
    #[default]
    Both,
    /// Rows can only be swiped towards the start edge (left in LTR, right in RTL).
    Start,
    /// Rows can only be swiped towards the end edge (right in LTR, left in RTL).
    End,
}

/// Reading direction of the list's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl LayoutDirection {
    /// Sign applied to horizontal deltas before comparing against the
    /// configured edge.
    #[inline]
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Ltr => 1.0,
            Self::Rtl => -1.0,
        }
    }
}

impl SwipeDirection {
    /// Whether a signed horizontal `delta` points in an allowed direction.
    ///
    /// `delta` may be a displacement or a velocity; only its sign matters.
    /// A zero delta is valid only for [`SwipeDirection::Both`].
    #[must_use]
    pub fn is_valid(self, delta: f32, layout: LayoutDirection) -> bool {
        let signed = layout.sign() * delta;
        match self {
            Self::Both => true,
            Self::Start => signed < 0.0,
            Self::End => signed > 0.0,
        }
    }
}
