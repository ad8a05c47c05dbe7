#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`SwipeListConfig`] gathers every host-tunable knob. Defaults match the
//! behavior of a freshly constructed list: single-level undo, swipes in both
//! directions, a 5 second auto-hide that waits for a touch, and 200 ms
//! animations.
//!
//! # Loading
//!
//! With the `config` feature enabled the configuration can be read from TOML
//! or JSON. Every field is optional; durations are in milliseconds.
//!
//! ```toml
//! undo_style = "collapsed_popup"
//! swipe_direction = "end"
//! undo_hide_delay = 3000
//! require_touch_before_dismiss = false
//!
//! [gesture]
//! slop = 24.0
//!
//! [labels]
//! n_items_deleted = "{n} messages archived"
//! ```
//!
//! ```rust,ignore
//! let config = SwipeListConfig::from_toml_file("swipelist.toml")?;
//! ```
//!
//! Loaders validate what they parse; hand-built configurations can be checked
//! with [`SwipeListConfig::validate`].

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};
use swipelist_core::animation::DEFAULT_ANIMATION_TIME;
use swipelist_core::direction::SwipeDirection;
use swipelist_core::gesture::GestureConfig;
use thiserror::Error;
use web_time::Duration;

use crate::auto_hide::DEFAULT_UNDO_HIDE_DELAY;
use crate::host::SwipeTargetId;
use crate::undo::{UndoLabels, UndoStyle, stack::COUNT_PLACEHOLDER};

/// Configuration for a [`SwipeList`](crate::SwipeList).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SwipeListConfig {
    /// Undo policy (default: `SinglePopup`).
    pub undo_style: UndoStyle,
    /// Allowed swipe direction (default: `Both`).
    pub swipe_direction: SwipeDirection,
    /// Delay before the undo popup hides itself (default: 5000ms).
    #[cfg_attr(feature = "config", serde(with = "millis"))]
    pub undo_hide_delay: Duration,
    /// Start the auto-hide countdown only after the next touch (default: true).
    pub require_touch_before_dismiss: bool,
    /// Duration of slide, collapse and spring-back animations (default: 200ms).
    #[cfg_attr(feature = "config", serde(with = "millis"))]
    pub animation_time: Duration,
    /// Gesture thresholds.
    pub gesture: GestureConfig,
    /// Undo popup strings.
    pub labels: UndoLabels,
    /// Sub-view of each row that moves during a swipe (default: whole row).
    pub swipe_target: Option<SwipeTargetId>,
}

impl Default for SwipeListConfig {
    fn default() -> Self {
        Self {
            undo_style: UndoStyle::default(),
            swipe_direction: SwipeDirection::default(),
            undo_hide_delay: DEFAULT_UNDO_HIDE_DELAY,
            require_touch_before_dismiss: true,
            animation_time: DEFAULT_ANIMATION_TIME,
            gesture: GestureConfig::default(),
            labels: UndoLabels::default(),
            swipe_target: None,
        }
    }
}

impl SwipeListConfig {
    /// Set the undo policy.
    #[must_use]
    pub fn with_undo_style(mut self, style: UndoStyle) -> Self {
        self.undo_style = style;
        self
    }

    /// Set the allowed swipe direction.
    #[must_use]
    pub fn with_swipe_direction(mut self, direction: SwipeDirection) -> Self {
        self.swipe_direction = direction;
        self
    }

    /// Set the auto-hide delay.
    #[must_use]
    pub fn with_undo_hide_delay(mut self, delay: Duration) -> Self {
        self.undo_hide_delay = delay;
        self
    }

    /// Set whether the auto-hide countdown waits for a touch.
    #[must_use]
    pub fn with_require_touch_before_dismiss(mut self, require: bool) -> Self {
        self.require_touch_before_dismiss = require;
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub fn with_animation_time(mut self, duration: Duration) -> Self {
        self.animation_time = duration;
        self
    }

    /// Set the gesture thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Set the popup strings.
    #[must_use]
    pub fn with_labels(mut self, labels: UndoLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the swipe target sub-view.
    #[must_use]
    pub fn with_swipe_target(mut self, target: Option<SwipeTargetId>) -> Self {
        self.swipe_target = target;
        self
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        let g = &self.gesture;
        if g.slop.is_nan() || g.slop <= 0.0 {
            problems.push(format!("gesture.slop must be positive, got {}", g.slop));
        }
        if g.min_fling_velocity.is_nan() || g.min_fling_velocity < 0.0 {
            problems.push(format!(
                "gesture.min_fling_velocity must be non-negative, got {}",
                g.min_fling_velocity
            ));
        }
        if g.min_fling_velocity > g.max_fling_velocity {
            problems.push(format!(
                "gesture.min_fling_velocity ({}) exceeds max_fling_velocity ({})",
                g.min_fling_velocity, g.max_fling_velocity
            ));
        }
        if g.velocity_horizon.is_zero() {
            problems.push("gesture.velocity_horizon must be non-zero".to_owned());
        }
        if self.undo_hide_delay.is_zero() {
            problems.push("undo_hide_delay must be non-zero".to_owned());
        }
        if !self.labels.n_items_deleted.contains(COUNT_PLACEHOLDER) {
            problems.push(format!(
                "labels.n_items_deleted must contain {COUNT_PLACEHOLDER}, got {:?}",
                self.labels.n_items_deleted
            ));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            tracing::warn!(message = "config.invalid", problems = problems.len());
            Err(ConfigError::Invalid { problems })
        }
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "config")]
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use web_time::Duration;

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

/// Errors from loading or validating a [`SwipeListConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML document did not match the configuration schema.
    #[cfg(feature = "config")]
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document did not match the configuration schema.
    #[cfg(feature = "config")]
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but holds unusable values.
    #[error("invalid swipe list configuration: {}", problems.join("; "))]
    Invalid {
        /// One message per rejected field.
        problems: Vec<String>,
    },
}
