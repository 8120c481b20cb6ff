//! One chart page's worth of state and behaviour.
//!
//! A [`ChartSession`] owns the [`InteractionController`], the
//! [`FetchOrchestrator`] and the display [`Surface`]. Events go in through
//! [`ChartSession::handle`]; the controller turns them into intents and the
//! session carries those out.
//!
//! [`ChartSession::dispatch`] and [`ChartSession::complete`] split a fetch in
//! two, so other events (a resize, a second submit, teardown) can be handled
//! while a [`PendingFetch`] is in flight.

pub mod controller;
pub mod orchestrator;
pub mod state;
pub mod surface;

use std::sync::Arc;

use chrono::NaiveDate;
use market_data_client::{BarSeries, DataSource};
use tracing::{debug, info};

pub use controller::{IndicatorUpdate, Intent, InteractionController, UiEvent};
pub use orchestrator::{
    FetchIntent, FetchOrchestrator, FetchOutcome, FetchState, FetchTicket, PendingFetch,
};
pub use state::{InputField, UiState};
pub use surface::{ChartCanvas, ChartSlot, DisplayRegions, RecordingSurface, Region, Surface};

use crate::{error::FetchFailure, indicators::Indicator, render::ChartTheme};

/// What [`ChartSession::handle`] did with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Handled {
    Fetched(FetchOutcome),
    Resized,
    /// The indicator selection changed; the technical chart is left alone.
    IndicatorPending(Indicator),
    /// Only UI state changed.
    StateOnly,
}

/// Result of [`ChartSession::dispatch`].
#[derive(Debug)]
pub enum Dispatched {
    /// A fetch entered the loading state; run it and pass the result to
    /// [`ChartSession::complete`].
    Fetch(PendingFetch),
    Done(Handled),
}

pub struct ChartSession<S: Surface> {
    controller: InteractionController,
    orchestrator: FetchOrchestrator,
    surface: S,
}

impl<S: Surface> ChartSession<S> {
    pub fn new(source: Arc<dyn DataSource>, theme: ChartTheme, surface: S) -> Self {
        Self {
            controller: InteractionController::new(),
            orchestrator: FetchOrchestrator::new(source, theme),
            surface,
        }
    }

    /// Sets the default date range ending `today` and hides the loading,
    /// error and data views.
    pub fn init(&mut self, today: NaiveDate) {
        self.controller.init(today);
        for region in [Region::Loading, Region::ErrorMessage, Region::Results] {
            self.surface.set_visible(region, false);
        }
        info!(%today, "chart session initialized");
    }

    /// Applies `event` without waiting on the network.
    pub fn dispatch(&mut self, event: UiEvent) -> Dispatched {
        match self.controller.dispatch(event) {
            Intent::Fetch(intent) => {
                Dispatched::Fetch(self.orchestrator.start(&intent, &mut self.surface))
            }
            Intent::Resize => {
                for slot in ChartSlot::ALL {
                    self.surface.resize(slot);
                }
                Dispatched::Done(Handled::Resized)
            }
            Intent::Indicator(IndicatorUpdate::NotYetSupported(indicator)) => {
                debug!(%indicator, "indicator selected; technical chart not drawn");
                Dispatched::Done(Handled::IndicatorPending(indicator))
            }
            Intent::None => Dispatched::Done(Handled::StateOnly),
        }
    }

    /// Applies the result of a fetch started by [`ChartSession::dispatch`].
    /// Superseded tickets come back as [`FetchOutcome::Stale`].
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<BarSeries, FetchFailure>,
    ) -> FetchOutcome {
        self.orchestrator.complete(ticket, result, &mut self.surface)
    }

    /// Dispatches `event` and, if it starts a fetch, runs it to completion.
    pub async fn handle(&mut self, event: UiEvent) -> Handled {
        match self.dispatch(event) {
            Dispatched::Done(handled) => handled,
            Dispatched::Fetch(pending) => {
                let (ticket, result) = pending.run().await;
                Handled::Fetched(self.complete(ticket, result))
            }
        }
    }

    /// Disposes every chart and drops any fetch still in flight.
    pub fn teardown(&mut self) {
        for slot in ChartSlot::ALL {
            self.surface.dispose(slot);
        }
        self.orchestrator.reset();
        info!("chart session torn down");
    }

    pub fn state(&self) -> &UiState {
        self.controller.state()
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.orchestrator.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
