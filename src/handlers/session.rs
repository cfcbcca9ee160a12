use anyhow::Result;
use chrono::NaiveDate;

use crate::cli::input::{self, SessionAction};
use crate::config::{Config, SortOrder};
use crate::domain::{Clock, CooldownEngine, CooldownStatus, HotelRecord, Ledger, LedgerError};
use crate::handlers::render::{format_status_line, print_status_list};
use crate::infrastructure::resolve_clock;

/// State owned by one interactive session. Nothing here outlives the process.
pub struct SessionState {
    pub ledger: Ledger,
    pub query: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
            query: String::new(),
        }
    }

    /// Records currently on screen: non-expired, matching the search, in the
    /// configured order.
    pub fn displayed(&self, today: NaiveDate, order: SortOrder) -> Vec<&HotelRecord> {
        let mut records = CooldownEngine::visible_records(self.ledger.records(), &self.query, today);
        if order == SortOrder::Remaining {
            CooldownEngine::sort_by_remaining(&mut records, today);
        }
        records
    }

    pub fn displayed_statuses(&self, today: NaiveDate, order: SortOrder) -> Vec<CooldownStatus> {
        self.displayed(today, order)
            .into_iter()
            .map(|record| CooldownEngine::status(record, today))
            .collect()
    }

    pub fn all_statuses(&self, today: NaiveDate) -> Vec<CooldownStatus> {
        self.ledger
            .iter()
            .map(|record| CooldownEngine::status(record, today))
            .collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn handle_session(today: Option<NaiveDate>, config: &Config) -> Result<()> {
    let clock = resolve_clock(today);
    let mut state = SessionState::new();

    println!("Stays are kept in memory and discarded when the session ends.");
    tracing::info!("session started");

    loop {
        // Re-read every iteration so remaining days follow the passage of time.
        let today = clock.today();

        match input::prompt_session_action(&state.query)? {
            SessionAction::List => {
                print_status_list(
                    &state.displayed_statuses(today, config.sort_order),
                    &config.date_format,
                );
            }
            SessionAction::Add => add_stay(&mut state, today)?,
            SessionAction::Edit => edit_stay(&mut state, today, config)?,
            SessionAction::Remove => remove_stay(&mut state, today, config)?,
            SessionAction::Search => {
                state.query = input::prompt_search_query(&state.query)?;
                print_status_list(
                    &state.displayed_statuses(today, config.sort_order),
                    &config.date_format,
                );
            }
            SessionAction::ShowAll => {
                print_status_list(&state.all_statuses(today), &config.date_format);
            }
            SessionAction::Quit => break,
        }
    }

    tracing::info!(stays = state.ledger.len(), "session ended");
    Ok(())
}

fn add_stay(state: &mut SessionState, today: NaiveDate) -> Result<()> {
    let mut draft = None;

    loop {
        let fields = input::prompt_record_fields(draft.as_ref(), today)?;
        let name = fields.name.clone();

        match state.ledger.add(HotelRecord::new(fields.clone())) {
            Ok(ledger) => {
                state.ledger = ledger;
                println!("✓ Stay '{}' added", name);
                return Ok(());
            }
            Err(e) => {
                report_rejection(&e);
                draft = Some(fields);
                if !input::prompt_retry()? {
                    return Ok(());
                }
            }
        }
    }
}

fn edit_stay(state: &mut SessionState, today: NaiveDate, config: &Config) -> Result<()> {
    let Some(record) = select_displayed(state, today, config, "Select stay to edit")? else {
        return Ok(());
    };
    let id = record.id();
    let mut draft = record.fields();

    loop {
        let fields = input::prompt_record_fields(Some(&draft), today)?;
        let name = fields.name.clone();

        match state.ledger.update(id, fields.clone()) {
            Ok(ledger) => {
                state.ledger = ledger;
                println!("✓ Stay '{}' updated", name);
                return Ok(());
            }
            Err(e) => {
                report_rejection(&e);
                draft = fields;
                if !input::prompt_retry()? {
                    return Ok(());
                }
            }
        }
    }
}

fn remove_stay(state: &mut SessionState, today: NaiveDate, config: &Config) -> Result<()> {
    let Some(record) = select_displayed(state, today, config, "Select stay to remove")? else {
        return Ok(());
    };
    let (id, name) = (record.id(), record.name.clone());

    if input::prompt_confirm_remove(&name)? {
        state.ledger = state.ledger.remove(id);
        println!("✓ Stay '{}' removed", name);
    }

    Ok(())
}

fn select_displayed(
    state: &SessionState,
    today: NaiveDate,
    config: &Config,
    prompt: &str,
) -> Result<Option<HotelRecord>> {
    let displayed = state.displayed(today, config.sort_order);
    if displayed.is_empty() {
        println!("No stays found.");
        return Ok(None);
    }

    let items: Vec<String> = displayed
        .iter()
        .map(|record| {
            format_status_line(&CooldownEngine::status(record, today), &config.date_format)
        })
        .collect();

    let selection = input::prompt_select_stay(prompt, &items)?;
    Ok(selection.map(|index| displayed[index].clone()))
}

fn report_rejection(error: &LedgerError) {
    tracing::warn!(%error, "stay rejected");
    eprintln!("⚠ {}", error);
}
