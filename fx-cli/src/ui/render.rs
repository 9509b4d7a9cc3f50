//! Text rendering of the converter screen.

use std::fmt::{Display, Write as _};

use chrono::{DateTime, Local, TimeZone, Utc};
use fx_types::{ConversionRecord, ConversionResult, Currency, CurrencyCode};

use super::state::UiState;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats with thousands separators and between 2 and 6 fraction digits.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.6}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };
    format!("{sign}{}.{frac}", group_thousands(int))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_money(value: f64, code: &CurrencyCode) -> String {
    format!("{} {}", format_amount(value), code)
}

/// `"<amount> <FROM> = <result to 6 decimals> <TO>"`.
pub fn detail_line(res: &ConversionResult) -> String {
    format!("{} {} = {:.6} {}", res.amount, res.from, res.result, res.to)
}

pub fn format_timestamp<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

fn history_line_in<Tz>(rec: &ConversionRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} → {}  {} = {}  {}",
        rec.from_currency,
        rec.to_currency,
        format_money(rec.amount, &rec.from_currency),
        format_money(rec.result, &rec.to_currency),
        format_timestamp(&rec.timestamp, tz)
    )
}

/// One history entry with its timestamp in local time.
pub fn history_line(rec: &ConversionRecord) -> String {
    history_line_in(rec, &Local)
}

pub fn history_view(records: &[ConversionRecord]) -> String {
    let mut out = String::from("Recent Conversions\n");
    if records.is_empty() {
        out.push_str("  No conversions yet. Make your first conversion above!\n");
    }
    for rec in records {
        let _ = writeln!(out, "  {}", history_line(rec));
    }
    out
}

pub fn currency_list(currencies: &[Currency]) -> String {
    let mut out = String::new();
    for currency in currencies {
        let _ = writeln!(out, "  {}  {}", currency.code, currency.name);
    }
    out
}

fn selection(state: &UiState, code: Option<&CurrencyCode>) -> String {
    match code {
        Some(code) => match state.currency_name(code) {
            Some(name) => format!("{code} ({name})"),
            None => code.to_string(),
        },
        None => "-".to_string(),
    }
}

/// Renders the converter panel.
pub fn view(state: &UiState) -> String {
    let mut out = String::from("== Currency Converter ==\n");
    let _ = writeln!(out, "  Amount: {}", state.amount_text);
    let _ = writeln!(out, "  From:   {}", selection(state, state.from.as_ref()));
    let _ = writeln!(out, "  To:     {}", selection(state, state.to.as_ref()));

    if state.currencies_loading {
        out.push_str("  Loading currencies...\n");
    } else if state.converting {
        out.push_str("  Converting...\n");
    }

    if let Some(res) = &state.result {
        let _ = writeln!(out, "  Result: {}", format_money(res.result, &res.to));
        let _ = writeln!(out, "          {}", detail_line(res));
    }

    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "  ! {notice}");
    }

    let _ = writeln!(out, "  History: {} conversion(s)", state.history.len());
    out
}
