//! Interactive driver.
//!
//! Feeds stdin commands and completed effects through [`ui::update`] on a
//! single task. Network effects run as spawned tasks and report back over an
//! unbounded channel; history effects run inline.

use std::io::Write as _;

use anyhow::Result;
use fx_client::ConverterClient;
use fx_history::HistoryStore;
use fx_types::KeyValueStorage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::ui::{self, Command, Completed, Effect, Event, UiState, command, render};

pub struct App<S: KeyValueStorage> {
    client: ConverterClient,
    history: HistoryStore<S>,
    events: mpsc::UnboundedSender<Event>,
}

impl<S: KeyValueStorage> App<S> {
    pub fn new(
        client: ConverterClient,
        history: HistoryStore<S>,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                client,
                history,
                events,
            },
            rx,
        )
    }

    /// Applies one event and starts the effects it produces.
    pub fn dispatch(&self, state: UiState, event: Event) -> UiState {
        let (next, effects) = ui::update(state, event);
        for effect in effects {
            self.run_effect(effect);
        }
        next
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::FetchCurrencies => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let loaded = client.currencies().await.map_err(|e| e.to_string());
                    let _ = events.send(Event::CurrenciesLoaded(loaded));
                });
            }
            Effect::LoadHistory => {
                let records = self.history.load();
                let _ = self.events.send(Event::HistoryLoaded(records));
            }
            Effect::Convert(req) => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let finished = client
                        .convert(&req)
                        .await
                        .map(Completed::now)
                        .map_err(|e| e.to_string());
                    let _ = events.send(Event::ConversionFinished(finished));
                });
            }
            Effect::AppendHistory(record) => {
                let stored = self.history.append(record);
                tracing::debug!(entries = stored.len(), "Conversion history saved");
                let _ = self.events.send(Event::HistoryLoaded(stored));
            }
        }
    }
}

fn show(state: &UiState, shown: &mut String) -> Result<()> {
    let text = render::view(state);
    if text != *shown {
        let mut out = std::io::stdout().lock();
        writeln!(out)?;
        write!(out, "{text}")?;
        out.flush()?;
        *shown = text;
    }
    Ok(())
}

/// Runs the converter until `quit` or end of input.
pub async fn run<S: KeyValueStorage>(
    client: ConverterClient,
    history: HistoryStore<S>,
) -> Result<()> {
    let (app, mut rx) = App::new(client, history);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut shown = String::new();

    println!("{}", command::HELP);
    let mut state = app.dispatch(UiState::default(), Event::Mounted);
    show(&state, &mut shown)?;

    loop {
        tokio::select! {
            Some(event) = rx.recv() => {
                state = app.dispatch(state, event);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Ui(event))) => state = app.dispatch(state, event),
                    Ok(Some(Command::List)) => print!("{}", render::currency_list(&state.currencies)),
                    Ok(Some(Command::History)) => print!("{}", render::history_view(&state.history)),
                    Ok(Some(Command::Help)) => println!("{}", command::HELP),
                    Ok(Some(Command::Quit)) => break,
                    Err(message) => println!("{message}"),
                }
            }
        }
        show(&state, &mut shown)?;
    }

    Ok(())
}
