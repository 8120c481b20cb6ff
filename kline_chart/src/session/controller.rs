//! Turns UI events into intents.
//!
//! The controller is the only owner of [`UiState`]. It never performs I/O:
//! [`InteractionController::dispatch`] updates state and returns an
//! [`Intent`] for the session to carry out.

use chrono::{Months, NaiveDate};
use market_data_client::{Period, models::request_params::DATE_FORMAT};

use crate::{
    indicators::Indicator,
    session::{
        orchestrator::FetchIntent,
        state::{InputField, UiState},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The query form was submitted.
    Submit,
    SelectPeriod(Period),
    SelectIndicator(Indicator),
    Resize,
    Edit { field: InputField, value: String },
}

/// What the technical chart should do after an indicator switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorUpdate {
    /// The selection was recorded but the indicator is not drawn yet.
    NotYetSupported(Indicator),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Fetch(FetchIntent),
    Resize,
    Indicator(IndicatorUpdate),
    None,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: UiState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Fills the date range with the year ending `today`, both ends inclusive.
    pub fn init(&mut self, today: NaiveDate) {
        let (start, end) = default_range(today);
        self.state
            .set_input(InputField::StartDate, start.format(DATE_FORMAT).to_string());
        self.state
            .set_input(InputField::EndDate, end.format(DATE_FORMAT).to_string());
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Intent {
        match event {
            UiEvent::Submit => Intent::Fetch(self.fetch_intent()),
            UiEvent::SelectPeriod(period) => {
                self.state.select_period(period);
                if self.state.inputs().is_complete() {
                    Intent::Fetch(self.fetch_intent())
                } else {
                    Intent::None
                }
            }
            UiEvent::SelectIndicator(indicator) => {
                self.state.select_indicator(indicator);
                Intent::Indicator(IndicatorUpdate::NotYetSupported(self.state.indicator()))
            }
            UiEvent::Resize => Intent::Resize,
            UiEvent::Edit { field, value } => {
                self.state.set_input(field, value);
                Intent::None
            }
        }
    }

    fn fetch_intent(&self) -> FetchIntent {
        let inputs = self.state.inputs();
        FetchIntent {
            code: inputs.stock_code.clone(),
            start_date: inputs.start_date.clone(),
            end_date: inputs.end_date.clone(),
            period: self.state.period(),
        }
    }
}

/// One calendar year back from `today`. Feb 29 maps to Feb 28 of the
/// previous year.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(12)).unwrap_or(today);
    (start, today)
}
