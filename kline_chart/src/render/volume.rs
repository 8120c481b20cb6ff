use crate::{
    format::FormattedSeries,
    render::{
        ChartTheme, category_axis,
        spec::{
            AxisKind, AxisPointer, ChartSpec, ItemStyle, PointerKind, SeriesSpec, Tooltip,
            Trigger, ValueAxis, VolumeBar,
        },
        standard_grid, zoom_controls,
    },
};

pub const VOLUME_SERIES: &str = "成交量";

/// Volume bar chart; each bar takes the up color when its candle closed
/// above its open and the down color otherwise, flat candles included.
pub fn render_volume(data: &FormattedSeries, theme: &ChartTheme) -> ChartSpec {
    let bars = data
        .volumes
        .iter()
        .enumerate()
        .map(|(i, &value)| VolumeBar {
            value,
            item_style: ItemStyle {
                color: theme.color_for(data.is_up(i)).to_string(),
            },
        })
        .collect();

    ChartSpec {
        tooltip: Tooltip {
            trigger: Trigger::Axis,
            axis_pointer: AxisPointer {
                kind: PointerKind::Shadow,
            },
        },
        legend: None,
        grid: standard_grid(),
        x_axis: category_axis(data, None),
        y_axis: ValueAxis {
            kind: AxisKind::Value,
            scale: true,
            split_area: None,
        },
        data_zoom: zoom_controls(theme),
        series: vec![SeriesSpec::Bar {
            name: VOLUME_SERIES.into(),
            data: bars,
        }],
    }
}
