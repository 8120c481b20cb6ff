//! Declarative chart specs for the price and volume charts.
//!
//! Renderers are pure: they read a [`FormattedSeries`](crate::format::FormattedSeries)
//! and a [`ChartTheme`] and return a [`ChartSpec`] that a chart canvas can
//! apply as a whole, replacing whatever it showed before.

pub mod price;
pub mod spec;
pub mod theme;
pub mod volume;

pub use price::render_price;
pub use spec::ChartSpec;
pub use theme::ChartTheme;
pub use volume::render_volume;

use spec::{AxisKind, AxisLine, CategoryAxis, DataZoom, Grid, SplitLine};

use crate::format::FormattedSeries;

/// Both charts zoom the first x axis only.
const ZOOMED_AXES: [usize; 1] = [0];

fn standard_grid() -> Grid {
    Grid {
        left: "10%".into(),
        right: "10%".into(),
        bottom: "15%".into(),
    }
}

fn category_axis(data: &FormattedSeries, split_number: Option<u32>) -> CategoryAxis {
    CategoryAxis {
        kind: AxisKind::Category,
        data: data.category_labels(),
        scale: true,
        boundary_gap: false,
        axis_line: AxisLine { on_zero: false },
        split_line: SplitLine { show: false },
        split_number,
    }
}

/// Wheel/drag zoom plus a slider, both initially showing the most recent
/// `100 - zoom_start_percent` percent of the series.
fn zoom_controls(theme: &ChartTheme) -> Vec<DataZoom> {
    vec![
        DataZoom::Inside {
            x_axis_index: ZOOMED_AXES.to_vec(),
            start: theme.zoom_start_percent,
            end: 100.0,
        },
        DataZoom::Slider {
            show: true,
            x_axis_index: ZOOMED_AXES.to_vec(),
            bottom: "5%".into(),
            start: theme.zoom_start_percent,
            end: 100.0,
        },
    ]
}
