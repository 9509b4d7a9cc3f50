//! UI state and transitions.
//!
//! `update` takes the current state and one event and returns the next state
//! plus the effects the driver must run. It reads no clock and draws no ids:
//! the driver stamps each finished conversion before feeding it back. The
//! only suspension points are the two network effects, `FetchCurrencies` and
//! `Convert`.

use fx_history::push_bounded;
use fx_types::{
    ConversionRecord, ConversionRequest, ConversionResult, Currency, CurrencyCode, CurrencyNames,
};

const DEFAULT_FROM: &str = "USD";
const DEFAULT_TO: &str = "EUR";

/// Everything the converter screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub currencies: Vec<Currency>,
    pub from: Option<CurrencyCode>,
    pub to: Option<CurrencyCode>,
    /// Raw amount text as typed.
    pub amount_text: String,
    pub result: Option<ConversionResult>,
    pub currencies_loading: bool,
    pub converting: bool,
    /// In-memory mirror of the persisted history, newest first.
    pub history: Vec<ConversionRecord>,
    /// Inline message for the last failed request or rejected input.
    pub notice: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            currencies: Vec::new(),
            from: None,
            to: None,
            amount_text: "1".to_string(),
            result: None,
            currencies_loading: true,
            converting: false,
            history: Vec::new(),
            notice: None,
        }
    }
}

impl UiState {
    /// Whether the convert action is enabled.
    pub fn can_convert(&self) -> bool {
        !self.converting
            && !self.currencies_loading
            && self.from.is_some()
            && self.to.is_some()
            && !self.amount_text.trim().is_empty()
    }

    /// The amount text as a positive finite number, if it is one.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }

    pub fn currency_name(&self, code: &CurrencyCode) -> Option<&str> {
        self.currencies
            .iter()
            .find(|c| &c.code == code)
            .map(|c| c.name.as_str())
    }

    fn lookup(&self, raw: &str) -> Option<CurrencyCode> {
        let code = CurrencyCode::parse(raw)?;
        self.currencies
            .iter()
            .any(|c| c.code == code)
            .then_some(code)
    }
}

/// A successful conversion and the history entry stamped for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub conversion: ConversionResult,
    pub record: ConversionRecord,
}

impl Completed {
    /// Stamps `conversion` with a fresh id and the current time.
    pub fn now(conversion: ConversionResult) -> Self {
        let record = ConversionRecord::from_result(&conversion);
        Self { conversion, record }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Mounted,
    CurrenciesLoaded(Result<CurrencyNames, String>),
    HistoryLoaded(Vec<ConversionRecord>),
    FromSelected(String),
    ToSelected(String),
    AmountChanged(String),
    SwapPressed,
    ConvertPressed,
    ConversionFinished(Result<Completed, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchCurrencies,
    LoadHistory,
    Convert(ConversionRequest),
    AppendHistory(ConversionRecord),
}

pub fn update(mut state: UiState, event: Event) -> (UiState, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        Event::Mounted => {
            state.currencies_loading = true;
            effects.push(Effect::FetchCurrencies);
            effects.push(Effect::LoadHistory);
        }

        Event::CurrenciesLoaded(Ok(names)) => {
            state.currencies = Currency::list_from(&names);
            state.currencies_loading = false;
            state.from = state.lookup(DEFAULT_FROM);
            state.to = state.lookup(DEFAULT_TO);
        }

        Event::CurrenciesLoaded(Err(error)) => {
            tracing::error!(error = %error, "Error fetching currencies");
            state.currencies_loading = false;
            state.notice = Some("Could not load currencies".to_string());
        }

        Event::HistoryLoaded(records) => {
            state.history = records;
        }

        Event::FromSelected(raw) | Event::ToSelected(raw) if state.currencies_loading => {
            tracing::debug!(code = %raw, "Ignoring selection while currencies load");
        }

        Event::FromSelected(raw) => match state.lookup(&raw) {
            Some(code) => {
                state.from = Some(code);
                state.notice = None;
            }
            None => state.notice = Some(format!("Unknown currency: {}", raw.trim())),
        },

        Event::ToSelected(raw) => match state.lookup(&raw) {
            Some(code) => {
                state.to = Some(code);
                state.notice = None;
            }
            None => state.notice = Some(format!("Unknown currency: {}", raw.trim())),
        },

        Event::AmountChanged(text) => {
            state.amount_text = text;
        }

        Event::SwapPressed => {
            if !state.currencies_loading {
                std::mem::swap(&mut state.from, &mut state.to);
                state.result = None;
            }
        }

        Event::ConvertPressed => {
            if state.can_convert() {
                if let (Some(from), Some(to), Some(amount)) =
                    (&state.from, &state.to, state.parsed_amount())
                {
                    let req = ConversionRequest::new(from.as_str(), to.as_str(), amount);
                    state.converting = true;
                    state.notice = None;
                    effects.push(Effect::Convert(req));
                }
            }
        }

        Event::ConversionFinished(Ok(Completed { conversion, record })) => {
            state.converting = false;
            push_bounded(&mut state.history, record.clone());
            state.result = Some(conversion);
            effects.push(Effect::AppendHistory(record));
        }

        Event::ConversionFinished(Err(error)) => {
            tracing::error!(error = %error, "Error converting currency");
            state.converting = false;
            state.notice = Some("Conversion failed".to_string());
        }
    }

    (state, effects)
}
