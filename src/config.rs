use crate::hit_test::DEFAULT_DEBOUNCE;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Args, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[command(flatten)]
    pub canvas: CanvasParams,
    #[command(flatten)]
    pub debounce: DebounceParams,
}

/// Target framebuffer size in pixels.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasParams {
    #[arg(long, default_value_t = 1080)]
    pub canvas_width: u32,
    #[arg(long, default_value_t = 1440)]
    pub canvas_height: u32,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            canvas_height: 1440,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebounceParams {
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64)]
    pub debounce_ms: u64,
}

impl Default for DebounceParams {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl DebounceParams {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
