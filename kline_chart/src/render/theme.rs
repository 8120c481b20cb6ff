use serde::{Deserialize, Serialize};

/// Colors and initial zoom shared by both charts.
///
/// Up/down follow the red-rises, green-falls convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartTheme {
    pub up_color: String,
    pub down_color: String,
    /// Left edge of the initial zoom window, in percent of the series.
    pub zoom_start_percent: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            up_color: "#ff0000".into(),
            down_color: "#00ff00".into(),
            zoom_start_percent: 50.0,
        }
    }
}

impl ChartTheme {
    pub fn color_for(&self, is_up: bool) -> &str {
        if is_up { &self.up_color } else { &self.down_color }
    }
}
