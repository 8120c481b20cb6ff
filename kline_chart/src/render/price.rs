use crate::{
    format::FormattedSeries,
    render::{
        ChartTheme, category_axis,
        spec::{
            AxisKind, AxisPointer, CandleStyle, ChartSpec, Legend, LineStyle, PointerKind,
            SeriesSpec, SplitArea, Tooltip, Trigger, ValueAxis,
        },
        standard_grid, zoom_controls,
    },
};

pub const CANDLESTICK_SERIES: &str = "K线";

const MA_LINE_OPACITY: f64 = 0.5;
const PRICE_AXIS_SPLITS: u32 = 20;

/// Candlestick chart with MA5/MA10/MA20 overlays, in that series order.
pub fn render_price(data: &FormattedSeries, theme: &ChartTheme) -> ChartSpec {
    let mut series = vec![SeriesSpec::Candlestick {
        name: CANDLESTICK_SERIES.into(),
        data: data.values.clone(),
        item_style: CandleStyle {
            color: theme.up_color.clone(),
            color0: theme.down_color.clone(),
            border_color: theme.up_color.clone(),
            border_color0: theme.down_color.clone(),
        },
    }];
    series.extend(data.moving_averages().into_iter().map(|(name, points)| {
        SeriesSpec::Line {
            name: name.into(),
            data: points.to_vec(),
            smooth: true,
            line_style: LineStyle {
                opacity: MA_LINE_OPACITY,
            },
        }
    }));

    ChartSpec {
        tooltip: Tooltip {
            trigger: Trigger::Axis,
            axis_pointer: AxisPointer {
                kind: PointerKind::Cross,
            },
        },
        legend: Some(Legend {
            data: series.iter().map(|s| s.name().to_string()).collect(),
        }),
        grid: standard_grid(),
        x_axis: category_axis(data, Some(PRICE_AXIS_SPLITS)),
        y_axis: ValueAxis {
            kind: AxisKind::Value,
            scale: true,
            split_area: Some(SplitArea { show: true }),
        },
        data_zoom: zoom_controls(theme),
        series,
    }
}
