use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use swipelist::{Result, SwipeDirection, SwipeListConfig, UndoStyle};
use web_time::Duration;

/// Undo style as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// One undo popup per dismissal; older deletions become permanent.
    Single,
    /// Undo deletions one at a time, newest first.
    Multilevel,
    /// One button undoes every pending deletion.
    Collapsed,
}

impl From<StyleArg> for UndoStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Single => Self::SinglePopup,
            StyleArg::Multilevel => Self::MultilevelPopup,
            StyleArg::Collapsed => Self::CollapsedPopup,
        }
    }
}

/// Swipe direction as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Both,
    Start,
    End,
}

impl From<DirectionArg> for SwipeDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Both => Self::Both,
            DirectionArg::Start => Self::Start,
            DirectionArg::End => Self::End,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "swipelist-demo",
    about = "Walk through swipe-to-dismiss with undo on a simulated list",
    version
)]
pub struct Cli {
    /// Load settings from a TOML file before applying flags.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Undo style.
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Directions rows may be swiped in.
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,

    /// Swipe only the row's content part instead of the whole row.
    #[arg(long)]
    pub swiping_layout: bool,

    /// Lay rows out with the recycling adapter.
    #[arg(long, conflicts_with = "headers")]
    pub recycler: bool,

    /// Header rows above the items (plain list only).
    #[arg(long, default_value_t = 0)]
    pub headers: usize,

    /// Number of items.
    #[arg(long, default_value_t = 12)]
    pub items: usize,

    /// Right-to-left layout.
    #[arg(long)]
    pub rtl: bool,

    /// Start the popup auto-hide right after a dismissal.
    #[arg(long)]
    pub no_require_touch: bool,

    /// Popup auto-hide delay.
    #[arg(long, value_name = "MS")]
    pub hide_delay: Option<u64>,
}

impl Cli {
    /// Engine configuration: the file (if any) with flags layered on top.
    pub fn swipe_config(&self) -> Result<SwipeListConfig> {
        let mut config = match &self.config {
            Some(path) => SwipeListConfig::from_toml_file(path)?,
            None => SwipeListConfig::default(),
        };
        if let Some(style) = self.style {
            config.undo_style = style.into();
        }
        if let Some(direction) = self.direction {
            config.swipe_direction = direction.into();
        }
        if self.no_require_touch {
            config.require_touch_before_dismiss = false;
        }
        if let Some(ms) = self.hide_delay {
            config.undo_hide_delay = Duration::from_millis(ms);
        }
        config.validate()?;
        Ok(config)
    }
}
