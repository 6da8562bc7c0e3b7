#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEPTH: u32 = 15;
pub const LOW_DEPTH: u32 = 12;
pub const HIGH_DEPTH: u32 = 18;
pub const MAX_DEPTH: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalysisMode {
    Low,
    High,
    Custom,
}

impl AnalysisMode {
    /// Preset depth, or `None` for a custom depth.
    #[must_use]
    pub fn preset_depth(self) -> Option<u32> {
        match self {
            AnalysisMode::Low => Some(LOW_DEPTH),
            AnalysisMode::High => Some(HIGH_DEPTH),
            AnalysisMode::Custom => None,
        }
    }
}

/// User-adjustable analysis settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisOptions {
    pub depth: u32,
    pub mode: AnalysisMode,
    /// Request a fresh evaluation after every position change
    pub auto_analyse: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            depth: DEFAULT_DEPTH,
            mode: AnalysisMode::Custom,
            auto_analyse: true,
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch mode, adopting the preset depth when the mode has one.
    pub fn set_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
        if let Some(depth) = mode.preset_depth() {
            self.depth = depth;
        }
    }

    /// Apply a named option from text, as a settings dialog or config line
    /// would supply it. Unknown names and unparsable values are ignored.
    /// Returns whether anything changed.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let before = self.clone();
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "depth" => {
                if let Some(v) = value.and_then(|v| v.trim().parse::<u32>().ok()) {
                    self.depth = v.clamp(1, MAX_DEPTH);
                    self.mode = AnalysisMode::Custom;
                }
            }
            "mode" => match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
                Some("low") => self.set_mode(AnalysisMode::Low),
                Some("high") => self.set_mode(AnalysisMode::High),
                Some("custom") => self.set_mode(AnalysisMode::Custom),
                _ => {}
            },
            "auto analyse" | "auto analyze" | "autoanalyse" | "autoanalyze" => {
                if let Some(v) = value {
                    self.auto_analyse =
                        matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on");
                }
            }
            _ => {}
        }
        *self != before
    }
}
