use chrono::Weekday;
use chrono::format::{
  Item,
  StrftimeItems
};
use chrono_tz::Tz;
use serde::Deserialize;

use super::calendar::CalendarViewMode;

const UI_CONFIG_TOML: &str =
  include_str!("../../assets/taskbook.toml");

pub(crate) const DEFAULT_TIMEZONE: &str =
  "UTC";

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
pub(crate) struct UiConfig {
  #[serde(default)]
  pub version:  u32,
  pub timezone: Option<String>,
  #[serde(default)]
  pub calendar: CalendarSection,
  #[serde(default)]
  pub display:  DisplaySection,
  #[serde(default)]
  pub messages: Messages
}

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
pub(crate) struct CalendarSection {
  #[serde(
    default = "default_initial_view"
  )]
  pub initial_view:   String,
  #[serde(
    default = "default_week_start"
  )]
  pub week_start:     String,
  #[serde(default)]
  pub day_hour_start: u32,
  #[serde(
    default = "default_day_hour_end"
  )]
  pub day_hour_end:   u32
}

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
pub(crate) struct DisplaySection {
  #[serde(
    default = "default_timestamp_format"
  )]
  pub timestamp_format: String
}

#[derive(
  Clone, Debug, PartialEq, Deserialize,
)]
#[serde(default)]
pub(crate) struct Messages {
  pub loading:                String,
  pub empty:                  String,
  pub no_subtasks:            String,
  pub load_error:             String,
  pub delete_error:           String,
  pub confirm_delete_task:    String,
  pub confirm_delete_subtask: String
}

fn default_initial_view() -> String {
  "month".to_string()
}

fn default_week_start() -> String {
  "sunday".to_string()
}

fn default_day_hour_end() -> u32 {
  23
}

fn default_timestamp_format() -> String {
  "%-m/%-d/%Y, %-I:%M:%S %p".to_string()
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      version:  1,
      timezone: Some(
        DEFAULT_TIMEZONE.to_string()
      ),
      calendar: CalendarSection::default(),
      display:  DisplaySection::default(),
      messages: Messages::default()
    }
  }
}

impl Default for CalendarSection {
  fn default() -> Self {
    Self {
      initial_view:   default_initial_view(),
      week_start:     default_week_start(),
      day_hour_start: 0,
      day_hour_end:   default_day_hour_end()
    }
  }
}

impl Default for DisplaySection {
  fn default() -> Self {
    Self {
      timestamp_format:
        default_timestamp_format()
    }
  }
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      loading:                "Loading tasks..."
        .to_string(),
      empty:
        "No completed tasks for this period."
          .to_string(),
      no_subtasks:
        "No subtasks for this task."
          .to_string(),
      load_error:
        "Error loading tasks. Please try again."
          .to_string(),
      delete_error:
        "The item could not be deleted. Please try again."
          .to_string(),
      confirm_delete_task:
        "Are you sure you want to delete this task?"
          .to_string(),
      confirm_delete_subtask:
        "Are you sure you want to delete this subtask?"
          .to_string()
    }
  }
}

impl UiConfig {
  pub fn initial_view(
    &self
  ) -> CalendarViewMode {
    CalendarViewMode::from_key(
      &self.calendar.initial_view
    )
    .unwrap_or(CalendarViewMode::Month)
  }

  pub fn week_start(&self) -> Weekday {
    week_start_day(
      &self.calendar.week_start
    )
  }

  pub fn timezone(&self) -> Tz {
    self
      .timezone
      .as_deref()
      .and_then(parse_timezone)
      .unwrap_or(chrono_tz::UTC)
  }
}

pub(crate) fn load_ui_config() -> UiConfig
{
  match parse_ui_config(UI_CONFIG_TOML) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        timezone = ?config.timezone,
        initial_view = %config.calendar.initial_view,
        week_start = %config.calendar.week_start,
        "loaded ui config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing ui config; using defaults");
      UiConfig::default()
    }
  }
}

pub(crate) fn parse_ui_config(
  raw: &str
) -> Result<UiConfig, toml::de::Error> {
  let mut config =
    toml::from_str::<UiConfig>(raw)?;
  sanitize_ui_config(&mut config);
  Ok(config)
}

fn sanitize_ui_config(
  config: &mut UiConfig
) {
  if CalendarViewMode::from_key(
    &config.calendar.initial_view
  )
  .is_none()
  {
    tracing::warn!(
      initial_view = %config.calendar.initial_view,
      "unknown initial calendar view"
    );
    config.calendar.initial_view =
      default_initial_view();
  }

  if config
    .calendar
    .week_start
    .trim()
    .is_empty()
  {
    config.calendar.week_start =
      default_week_start();
  }

  if config.calendar.day_hour_start > 23
  {
    config.calendar.day_hour_start = 23;
  }
  if config.calendar.day_hour_end > 23 {
    config.calendar.day_hour_end = 23;
  }
  if config.calendar.day_hour_end
    < config.calendar.day_hour_start
  {
    config.calendar.day_hour_end =
      config.calendar.day_hour_start;
  }

  if !timestamp_format_is_valid(
    &config.display.timestamp_format
  ) {
    tracing::warn!(
      format = %config.display.timestamp_format,
      "invalid timestamp format"
    );
    config.display.timestamp_format =
      default_timestamp_format();
  }

  if let Some(raw) =
    config.timezone.as_deref()
    && parse_timezone(raw).is_none()
  {
    config.timezone =
      Some(DEFAULT_TIMEZONE.to_string());
  }

  let defaults = Messages::default();
  let messages = &mut config.messages;
  for (value, fallback) in [
    (&mut messages.loading, defaults.loading),
    (&mut messages.empty, defaults.empty),
    (
      &mut messages.no_subtasks,
      defaults.no_subtasks
    ),
    (
      &mut messages.load_error,
      defaults.load_error
    ),
    (
      &mut messages.delete_error,
      defaults.delete_error
    ),
    (
      &mut messages.confirm_delete_task,
      defaults.confirm_delete_task
    ),
    (
      &mut messages.confirm_delete_subtask,
      defaults.confirm_delete_subtask
    )
  ] {
    if value.trim().is_empty() {
      *value = fallback;
    }
  }
}

fn timestamp_format_is_valid(
  format: &str
) -> bool {
  !format.trim().is_empty()
    && !StrftimeItems::new(format)
      .any(|item| {
        matches!(item, Item::Error)
      })
}

fn parse_timezone(raw: &str) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => Some(tz),
    | Err(error) => {
      tracing::error!(
        timezone = %trimmed,
        error = %error,
        "invalid timezone id"
      );
      None
    }
  }
}

fn week_start_day(raw: &str) -> Weekday {
  if raw
    .trim()
    .eq_ignore_ascii_case("monday")
  {
    Weekday::Mon
  } else {
    Weekday::Sun
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_parses() {
    let config =
      parse_ui_config(UI_CONFIG_TOML)
        .expect("embedded config parses");

    assert_eq!(
      config.initial_view(),
      CalendarViewMode::Month
    );
    assert_eq!(
      config.week_start(),
      Weekday::Sun
    );
    assert_eq!(
      config.timezone(),
      chrono_tz::UTC
    );
    assert_eq!(
      config.messages.empty,
      "No completed tasks for this period."
    );
  }

  #[test]
  fn sanitize_repairs_bad_values() {
    let config = parse_ui_config(
      r#"
      timezone = "Mars/Olympus"
      [calendar]
      initial_view = "year"
      week_start = "  "
      day_hour_start = 30
      day_hour_end = 5
      [display]
      timestamp_format = "%Q nonsense"
      [messages]
      loading = ""
      "#
    )
    .expect("config parses");

    assert_eq!(
      config.initial_view(),
      CalendarViewMode::Month
    );
    assert_eq!(
      config.calendar.week_start,
      "sunday"
    );
    assert_eq!(
      config.calendar.day_hour_start,
      23
    );
    assert_eq!(
      config.calendar.day_hour_end,
      23
    );
    assert_eq!(
      config.display.timestamp_format,
      default_timestamp_format()
    );
    assert_eq!(
      config.timezone.as_deref(),
      Some(DEFAULT_TIMEZONE)
    );
    assert_eq!(
      config.messages.loading,
      "Loading tasks..."
    );
    assert_eq!(
      config.messages.load_error,
      "Error loading tasks. Please try again."
    );
  }

  #[test]
  fn monday_week_start_and_named_timezone()
  {
    let config = parse_ui_config(
      r#"
      timezone = "Europe/Berlin"
      [calendar]
      week_start = "Monday"
      "#
    )
    .expect("config parses");

    assert_eq!(
      config.week_start(),
      Weekday::Mon
    );
    assert_eq!(
      config.timezone(),
      chrono_tz::Europe::Berlin
    );
  }
}
