use anyhow::{Context, Result};
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use super::commands::{parse_date, DATE_INPUT_FORMAT};
use crate::domain::RecordFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    List,
    Add,
    Edit,
    Remove,
    Search,
    ShowAll,
    Quit,
}

const SESSION_ACTIONS: [(SessionAction, &str); 7] = [
    (SessionAction::List, "List stays"),
    (SessionAction::Add, "Add stay"),
    (SessionAction::Edit, "Edit stay"),
    (SessionAction::Remove, "Remove stay"),
    (SessionAction::Search, "Search"),
    (SessionAction::ShowAll, "Show all (including expired)"),
    (SessionAction::Quit, "Quit"),
];

pub fn prompt_session_action(query: &str) -> Result<SessionAction> {
    let prompt = if query.is_empty() {
        "Select action".to_string()
    } else {
        format!("Select action (search: '{}')", query)
    };
    let labels: Vec<&str> = SESSION_ACTIONS.iter().map(|(_, label)| *label).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("Failed to read menu selection")?;

    Ok(selection
        .map(|index| SESSION_ACTIONS[index].0)
        .unwrap_or(SessionAction::Quit))
}

/// Prompts for every editable field. `initial` pre-fills the form, so a
/// rejected entry can be corrected without retyping it.
pub fn prompt_record_fields(
    initial: Option<&RecordFields>,
    today: NaiveDate,
) -> Result<RecordFields> {
    let theme = ColorfulTheme::default();

    let mut name_input = Input::<String>::with_theme(&theme)
        .with_prompt("Hotel name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("Hotel name cannot be empty")
            } else {
                Ok(())
            }
        });
    if let Some(fields) = initial {
        name_input = name_input.with_initial_text(fields.name.clone());
    }
    let name = name_input
        .interact_text()
        .context("Failed to read hotel name")?;

    let check_in_default = initial.map(|f| f.check_in).unwrap_or(today);
    let check_in: String = Input::with_theme(&theme)
        .with_prompt("Check-in date (YYYY-MM-DD)")
        .with_initial_text(check_in_default.format(DATE_INPUT_FORMAT).to_string())
        .validate_with(|input: &String| -> Result<(), String> { parse_date(input).map(|_| ()) })
        .interact_text()
        .context("Failed to read check-in date")?;

    let cooldown_initial = initial
        .and_then(|f| f.custom_cooldown_days)
        .map(|days| days.to_string())
        .unwrap_or_default();
    let cooldown: String = Input::with_theme(&theme)
        .with_prompt("Cooldown days (empty for default 30)")
        .with_initial_text(cooldown_initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_cooldown(input).map(|_| ())
        })
        .interact_text()
        .context("Failed to read cooldown")?;

    record_fields_from_input(name, &check_in, &cooldown).map_err(|e| anyhow::anyhow!(e))
}

/// Builds the edit set from raw form input. The name is kept exactly as
/// typed, since uniqueness is an exact match.
pub fn record_fields_from_input(
    name: String,
    check_in: &str,
    cooldown: &str,
) -> Result<RecordFields, String> {
    let check_in = parse_date(check_in)?;
    let custom_cooldown_days = parse_cooldown(cooldown)?;
    Ok(RecordFields::new(name, check_in, custom_cooldown_days))
}

pub fn prompt_search_query(current: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Search (empty to clear)")
        .with_initial_text(current.to_string())
        .allow_empty(true)
        .interact_text()
        .context("Failed to read search query")
}

pub fn prompt_select_stay(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .context("Failed to read stay selection")
}

pub fn prompt_confirm_remove(name: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Remove '{}'?", name))
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

pub fn prompt_retry() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Try again?")
        .default(true)
        .interact()
        .context("Failed to read confirmation")
}

/// Empty input means "use the default cooldown".
pub fn parse_cooldown(input: &str) -> Result<Option<u32>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) | Err(_) => Err(format!(
            "Invalid cooldown: '{}'. Expected a positive number of days",
            trimmed
        )),
        Ok(days) => Ok(Some(days)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cooldown() {
        assert_eq!(parse_cooldown(""), Ok(None));
        assert_eq!(parse_cooldown("   "), Ok(None));
        assert_eq!(parse_cooldown("14"), Ok(Some(14)));
        assert_eq!(parse_cooldown(" 7 "), Ok(Some(7)));
        assert!(parse_cooldown("0").is_err());
        assert!(parse_cooldown("-3").is_err());
        assert!(parse_cooldown("two").is_err());
    }

    #[test]
    fn test_record_fields_from_input_keeps_name_as_typed() {
        let fields = record_fields_from_input("Plaza ".to_string(), "2025-01-01", "").unwrap();
        assert_eq!(fields.name, "Plaza ");
        assert_eq!(fields.check_in, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(fields.custom_cooldown_days, None);

        let fields = record_fields_from_input("Ritz".to_string(), "2025-03-04", "14").unwrap();
        assert_eq!(fields.custom_cooldown_days, Some(14));
    }

    #[test]
    fn test_record_fields_from_input_rejects_bad_values() {
        assert!(record_fields_from_input("Ritz".to_string(), "2025-13-01", "").is_err());
        assert!(record_fields_from_input("Ritz".to_string(), "2025-01-01", "0").is_err());
    }

    #[test]
    fn test_session_actions_cover_quit() {
        assert!(SESSION_ACTIONS
            .iter()
            .any(|(action, _)| *action == SessionAction::Quit));
    }
}
