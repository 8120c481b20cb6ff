//! Form and toggle state of a chart session.

use market_data_client::Period;

use crate::indicators::Indicator;

/// A set of mutually exclusive toggle buttons. Exactly one is active.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGroup<T> {
    options: Vec<T>,
    active: usize,
}

impl<T: Copy + PartialEq> ButtonGroup<T> {
    /// Builds a group with `initial` active, or the first option when
    /// `initial` is not among `options`.
    ///
    /// `options` must not be empty.
    pub fn new(options: impl Into<Vec<T>>, initial: T) -> Self {
        let options = options.into();
        let active = options.iter().position(|o| *o == initial).unwrap_or(0);
        Self { options, active }
    }

    pub fn active(&self) -> T {
        self.options[self.active]
    }

    /// Activates `value`, deactivating the rest. Unknown values leave the
    /// group unchanged and return `false`.
    pub fn select(&mut self, value: T) -> bool {
        match self.options.iter().position(|o| *o == value) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Every option with its active flag, in display order.
    pub fn states(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(|(i, o)| (*o, i == self.active))
    }
}

/// Raw contents of the query form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInputs {
    pub stock_code: String,
    pub start_date: String,
    pub end_date: String,
}

impl QueryInputs {
    /// All three fields hold something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.stock_code, &self.start_date, &self.end_date]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Which form field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    StockCode,
    StartDate,
    EndDate,
}

/// Session-scoped UI state: form contents plus the two toggle groups.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    inputs: QueryInputs,
    periods: ButtonGroup<Period>,
    indicators: ButtonGroup<Indicator>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            inputs: QueryInputs::default(),
            periods: ButtonGroup::new(Period::ALL, Period::default()),
            indicators: ButtonGroup::new(Indicator::ALL, Indicator::default()),
        }
    }
}

impl UiState {
    pub fn inputs(&self) -> &QueryInputs {
        &self.inputs
    }

    pub fn period(&self) -> Period {
        self.periods.active()
    }

    pub fn indicator(&self) -> Indicator {
        self.indicators.active()
    }

    pub fn period_buttons(&self) -> &ButtonGroup<Period> {
        &self.periods
    }

    pub fn indicator_buttons(&self) -> &ButtonGroup<Indicator> {
        &self.indicators
    }

    pub(crate) fn set_input(&mut self, field: InputField, value: String) {
        let slot = match field {
            InputField::StockCode => &mut self.inputs.stock_code,
            InputField::StartDate => &mut self.inputs.start_date,
            InputField::EndDate => &mut self.inputs.end_date,
        };
        *slot = value;
    }

    pub(crate) fn select_period(&mut self, period: Period) -> bool {
        self.periods.select(period)
    }

    pub(crate) fn select_indicator(&mut self, indicator: Indicator) -> bool {
        self.indicators.select(indicator)
    }
}
