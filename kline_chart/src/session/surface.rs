//! Display capabilities the session drives, and an in-memory recorder.
//!
//! The session never talks to a concrete UI. It pushes chart specs into
//! [`ChartCanvas`] slots and text/visibility into [`DisplayRegions`]; a real
//! front end implements both, tests and the CLI use [`RecordingSurface`].

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{render::ChartSpec, summary::Trend};

/// The chart instances of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Price,
    Volume,
    /// Reserved for the selected indicator; nothing is drawn into it yet.
    Technical,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Price, ChartSlot::Volume, ChartSlot::Technical];
}

/// Text or visibility targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    StockName,
    CurrentPrice,
    PriceChange,
    Volume,
    Turnover,
    Loading,
    ErrorMessage,
    Results,
}

impl Region {
    pub const ALL: [Region; 8] = [
        Region::StockName,
        Region::CurrentPrice,
        Region::PriceChange,
        Region::Volume,
        Region::Turnover,
        Region::Loading,
        Region::ErrorMessage,
        Region::Results,
    ];
}

pub trait ChartCanvas {
    /// Replaces everything the chart in `slot` shows with `spec`.
    fn set_option(&mut self, slot: ChartSlot, spec: &ChartSpec);
    fn resize(&mut self, slot: ChartSlot);
    fn dispose(&mut self, slot: ChartSlot);
}

pub trait DisplayRegions {
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_text(&mut self, region: Region, text: &str);
    /// Styles the price change region; `None` clears the styling.
    fn set_trend(&mut self, trend: Option<Trend>);
}

/// Everything a session needs to show its results.
pub trait Surface: ChartCanvas + DisplayRegions {}

impl<T: ChartCanvas + DisplayRegions> Surface for T {}

/// One call made against a [`RecordingSurface`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Visible { region: Region, visible: bool },
    Text { region: Region, text: String },
    Trend(Option<Trend>),
    ChartOption(ChartSlot),
    Resize(ChartSlot),
    Dispose(ChartSlot),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct RegionState {
    visible: bool,
    text: String,
}

/// A surface that keeps the latest state of every region and chart plus a
/// log of every call.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    regions: IndexMap<Region, RegionState>,
    charts: HashMap<ChartSlot, ChartSpec>,
    resizes: HashMap<ChartSlot, usize>,
    disposed: Vec<ChartSlot>,
    trend: Option<Trend>,
    events: Vec<SurfaceEvent>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// All regions start hidden and empty.
    pub fn new() -> Self {
        Self {
            regions: Region::ALL
                .into_iter()
                .map(|r| (r, RegionState::default()))
                .collect(),
            charts: HashMap::new(),
            resizes: HashMap::new(),
            disposed: Vec::new(),
            trend: None,
            events: Vec::new(),
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.regions.get(&region).is_some_and(|s| s.visible)
    }

    pub fn text(&self, region: Region) -> &str {
        self.regions.get(&region).map_or("", |s| s.text.as_str())
    }

    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartSpec> {
        self.charts.get(&slot)
    }

    pub fn resize_count(&self, slot: ChartSlot) -> usize {
        self.resizes.get(&slot).copied().unwrap_or(0)
    }

    pub fn is_disposed(&self, slot: ChartSlot) -> bool {
        self.disposed.contains(&slot)
    }

    pub fn trend(&self) -> Option<Trend> {
        self.trend
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Number of times `region` was switched to `visible`.
    pub fn visibility_changes(&self, region: Region, visible: bool) -> usize {
        self.events
            .iter()
            .filter(|e| **e == SurfaceEvent::Visible { region, visible })
            .count()
    }

    /// Region texts in display order, visible or not.
    pub fn texts(&self) -> impl Iterator<Item = (Region, &str)> {
        self.regions.iter().map(|(r, s)| (*r, s.text.as_str()))
    }
}

impl ChartCanvas for RecordingSurface {
    fn set_option(&mut self, slot: ChartSlot, spec: &ChartSpec) {
        self.charts.insert(slot, spec.clone());
        self.events.push(SurfaceEvent::ChartOption(slot));
    }

    fn resize(&mut self, slot: ChartSlot) {
        *self.resizes.entry(slot).or_default() += 1;
        self.events.push(SurfaceEvent::Resize(slot));
    }

    fn dispose(&mut self, slot: ChartSlot) {
        self.charts.remove(&slot);
        if !self.disposed.contains(&slot) {
            self.disposed.push(slot);
        }
        self.events.push(SurfaceEvent::Dispose(slot));
    }
}

impl DisplayRegions for RecordingSurface {
    fn set_visible(&mut self, region: Region, visible: bool) {
        self.regions.entry(region).or_default().visible = visible;
        self.events.push(SurfaceEvent::Visible { region, visible });
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.regions.entry(region).or_default().text = text.to_string();
        self.events.push(SurfaceEvent::Text {
            region,
            text: text.to_string(),
        });
    }

    fn set_trend(&mut self, trend: Option<Trend>) {
        self.trend = trend;
        self.events.push(SurfaceEvent::Trend(trend));
    }
}
