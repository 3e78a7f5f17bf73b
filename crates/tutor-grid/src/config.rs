//! Display configuration: the daily window, slot width and default selection.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::slots::SlotWindow;
use crate::time::{text_to_minutes, MINUTES_PER_DAY};

fn default_window_start() -> String {
    "08:00".to_string()
}

fn default_window_end() -> String {
    "20:00".to_string()
}

fn default_slot_minutes() -> i32 {
    30
}

fn default_selection() -> usize {
    3
}

/// Grid display settings. Every field has a default, so `{}` is a valid
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_window_start")]
    pub window_start: String,
    #[serde(default = "default_window_end")]
    pub window_end: String,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i32,
    /// How many tutors (from the top of the list) are selected on startup
    /// and after a reset.
    #[serde(default = "default_selection")]
    pub default_selection: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            window_start: default_window_start(),
            window_end: default_window_end(),
            slot_minutes: default_slot_minutes(),
            default_selection: default_selection(),
        }
    }
}

impl GridConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Decode and check the window.
    ///
    /// # Errors
    /// `MalformedTime` if either bound is not `HH:MM`; `InvalidConfig` if the
    /// width is not positive, the window is empty, or it leaves the day.
    pub fn window(&self) -> Result<SlotWindow> {
        let start = text_to_minutes(&self.window_start)?;
        let end = text_to_minutes(&self.window_end)?;

        if self.slot_minutes <= 0 {
            return Err(GridError::InvalidConfig(format!(
                "slot_minutes must be positive, got {}",
                self.slot_minutes
            )));
        }
        if start >= end {
            return Err(GridError::InvalidConfig(format!(
                "window start {} must be before window end {}",
                self.window_start, self.window_end
            )));
        }
        if end > MINUTES_PER_DAY {
            return Err(GridError::InvalidConfig(format!(
                "window end {} is past midnight",
                self.window_end
            )));
        }

        Ok(SlotWindow {
            start,
            end,
            slot_minutes: self.slot_minutes,
        })
    }
}
