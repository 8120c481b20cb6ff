//! Fetch lifecycle: loading, success and error states, and stale-response
//! suppression.

use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use market_data_client::{
    BarSeries, DataSource, Period, StockDataRequest, models::request_params::DATE_FORMAT,
};
use tracing::{debug, info, warn};

use crate::{
    error::{ChartError, FetchFailure},
    format::format_series,
    render::{ChartTheme, render_price, render_volume},
    session::surface::{ChartCanvas, ChartSlot, DisplayRegions, Region, Surface},
    summary::{SummaryDisplay, summarize},
};

/// What the user asked to load, still in form (string) shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchIntent {
    pub code: String,
    pub start_date: String,
    pub end_date: String,
    pub period: Period,
}

impl FetchIntent {
    /// Trims and parses the form values into a request, rejecting anything
    /// that should not be sent.
    pub fn to_request(&self) -> Result<StockDataRequest, String> {
        let parse = |label: &str, raw: &str| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_err(|e| format!("Invalid {label} {:?}: {e}", raw.trim()))
        };
        let request = StockDataRequest {
            code: self.code.trim().to_string(),
            start_date: parse("start date", &self.start_date)?,
            end_date: parse("end date", &self.end_date)?,
            period: self.period,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Where the most recent fetch stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Identifies one issued fetch. Only the latest ticket may touch the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// How a completed fetch was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Charts and summary were rendered. `degraded` is set when the series
    /// was too short to summarize and placeholders were shown instead.
    Success { bars: usize, degraded: bool },
    /// The error region shows `message`.
    Error { message: String },
    /// A newer fetch was issued in the meantime; nothing was changed.
    Stale,
}

/// A fetch that has entered the loading state but not yet run.
pub struct PendingFetch {
    ticket: FetchTicket,
    request: Result<StockDataRequest, String>,
    source: Arc<dyn DataSource>,
}

impl fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFetch")
            .field("ticket", &self.ticket)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl PendingFetch {
    pub fn ticket(&self) -> FetchTicket {
        self.ticket
    }

    /// The validated request, or `None` when the form input was rejected.
    pub fn request(&self) -> Option<&StockDataRequest> {
        self.request.as_ref().ok()
    }

    /// Talks to the source. Owns everything it needs, so the session stays
    /// free to handle other events meanwhile.
    pub async fn run(self) -> (FetchTicket, Result<BarSeries, FetchFailure>) {
        let result = match self.request {
            Ok(request) => self
                .source
                .fetch_series(&request)
                .await
                .map_err(FetchFailure::from),
            Err(message) => Err(FetchFailure::InvalidRequest(message)),
        };
        (self.ticket, result)
    }
}

/// Runs fetches against a [`DataSource`] and reflects them on a [`Surface`].
pub struct FetchOrchestrator {
    source: Arc<dyn DataSource>,
    theme: ChartTheme,
    state: FetchState,
    latest: u64,
}

impl FetchOrchestrator {
    pub fn new(source: Arc<dyn DataSource>, theme: ChartTheme) -> Self {
        Self {
            source,
            theme,
            state: FetchState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Enters the loading state and issues a ticket that supersedes every
    /// earlier one.
    pub fn begin(&mut self, surface: &mut dyn Surface) -> FetchTicket {
        self.latest += 1;
        self.state = FetchState::Loading;
        surface.set_visible(Region::Loading, true);
        surface.set_visible(Region::ErrorMessage, false);
        surface.set_visible(Region::Results, false);
        debug!(ticket = self.latest, "fetch started");
        FetchTicket(self.latest)
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// Results for superseded tickets are dropped without touching the
    /// surface or the state, so the loading indicator keeps reflecting the
    /// newest fetch.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<BarSeries, FetchFailure>,
        surface: &mut dyn Surface,
    ) -> FetchOutcome {
        if ticket.0 != self.latest {
            debug!(ticket = ticket.0, latest = self.latest, "dropping stale fetch result");
            return FetchOutcome::Stale;
        }

        let outcome = match result.and_then(|series| self.present(&series, surface)) {
            Ok(outcome) => {
                self.state = FetchState::Success;
                outcome
            }
            Err(failure) => {
                let message = failure.to_string();
                warn!(kind = ?failure.kind(), %message, "fetch failed");
                surface.set_text(Region::ErrorMessage, &message);
                surface.set_visible(Region::ErrorMessage, true);
                self.state = FetchState::Error(message.clone());
                FetchOutcome::Error { message }
            }
        };
        surface.set_visible(Region::Loading, false);
        outcome
    }

    /// Enters the loading state for `intent` and hands back the request to
    /// run. The orchestrator is not borrowed while it runs; feed the result
    /// to [`FetchOrchestrator::complete`].
    ///
    /// An invalid intent still goes through the loading state so the error
    /// replaces whatever was shown before; its pending fetch never calls the
    /// source.
    pub fn start(&mut self, intent: &FetchIntent, surface: &mut dyn Surface) -> PendingFetch {
        let ticket = self.begin(surface);
        let request = intent.to_request();
        if let Ok(request) = &request {
            info!(
                ticket = ticket.0,
                code = %request.code,
                start = %request.start_date,
                end = %request.end_date,
                period = %request.period,
                "fetching series"
            );
        }
        PendingFetch {
            ticket,
            request,
            source: Arc::clone(&self.source),
        }
    }

    /// Forgets any fetch in flight; late results become stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = FetchState::Idle;
    }

    fn present(
        &self,
        series: &BarSeries,
        surface: &mut dyn Surface,
    ) -> Result<FetchOutcome, FetchFailure> {
        let formatted = format_series(&series.bars)?;
        let (display, degraded) = match summarize(&series.bars) {
            Ok(stats) => (stats.display(), false),
            Err(ChartError::InsufficientData { len }) => {
                warn!(code = %series.symbol, len, "too few bars to summarize");
                (SummaryDisplay::placeholder(), true)
            }
            Err(other) => return Err(other.into()),
        };

        surface.set_option(ChartSlot::Price, &render_price(&formatted, &self.theme));
        surface.set_option(ChartSlot::Volume, &render_volume(&formatted, &self.theme));
        surface.set_text(Region::StockName, &series.stock_name);
        surface.set_text(Region::CurrentPrice, &display.price);
        surface.set_text(Region::PriceChange, &display.change);
        surface.set_trend(display.trend);
        surface.set_text(Region::Volume, &display.volume);
        surface.set_text(Region::Turnover, &display.turnover);
        surface.set_visible(Region::Results, true);

        info!(code = %series.symbol, bars = series.len(), degraded, "series rendered");
        Ok(FetchOutcome::Success {
            bars: series.len(),
            degraded,
        })
    }
}
