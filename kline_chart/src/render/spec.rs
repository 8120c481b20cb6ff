//! Serializable chart option tree.
//!
//! Field names serialize in camelCase so the JSON can be handed to a
//! browser charting library unchanged.

use serde::Serialize;

use crate::indicators::MaPoint;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub tooltip: Tooltip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub grid: Grid,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub data_zoom: Vec<DataZoom>,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn series_named(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: Trigger,
    pub axis_pointer: AxisPointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: PointerKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Cross,
    Shadow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub bottom: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub data: Vec<String>,
    pub scale: bool,
    pub boundary_gap: bool,
    pub axis_line: AxisLine,
    pub split_line: SplitLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub on_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitLine {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitArea {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    pub scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_area: Option<SplitArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum DataZoom {
    Inside {
        x_axis_index: Vec<usize>,
        start: f64,
        end: f64,
    },
    Slider {
        show: bool,
        x_axis_index: Vec<usize>,
        bottom: String,
        start: f64,
        end: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum SeriesSpec {
    Candlestick {
        name: String,
        data: Vec<[f64; 4]>,
        item_style: CandleStyle,
    },
    Line {
        name: String,
        data: Vec<MaPoint>,
        smooth: bool,
        line_style: LineStyle,
    },
    Bar {
        name: String,
        data: Vec<VolumeBar>,
    },
}

impl SeriesSpec {
    pub fn name(&self) -> &str {
        match self {
            SeriesSpec::Candlestick { name, .. }
            | SeriesSpec::Line { name, .. }
            | SeriesSpec::Bar { name, .. } => name,
        }
    }
}

/// `color`/`borderColor` apply to up candles, the `0` variants to down candles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleStyle {
    pub color: String,
    pub color0: String,
    pub border_color: String,
    pub border_color0: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: String,
}

/// One volume bar with its own color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeBar {
    pub value: u64,
    pub item_style: ItemStyle,
}
