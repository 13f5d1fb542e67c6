use taskbook_shared::TaskStats;
use wasm_bindgen::JsValue;

use super::dom;

const TASK_STATS_GLOBAL: &str = "taskStats";
const TASK_STATS_SCRIPT_ID: &str =
  "task-stats";
/// Evaluated in global scope, so it also
/// sees script-level `const`/`let`
/// bindings that never become `window`
/// properties.
const TASK_STATS_BINDING_LOOKUP: &str =
  "return typeof taskStats === 'undefined' \
   ? undefined : taskStats;";

/// Where the page may have put the
/// per-day counts, in lookup order.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
enum StatsSource {
  Binding,
  Window,
  Script
}

impl StatsSource {
  const ORDER: [Self; 3] =
    [Self::Binding, Self::Window, Self::Script];

  fn as_str(self) -> &'static str {
    match self {
      | Self::Binding => "binding",
      | Self::Window => "window",
      | Self::Script => "script"
    }
  }
}

/// Reads the per-day counts the page
/// injected: the global `taskStats`
/// binding, then `window.taskStats`, then
/// a `<script type="application/json" id="task-stats">`
/// block. Missing or malformed data
/// yields an empty map.
pub(crate) fn read_task_stats() -> TaskStats
{
  let Some((source, stats)) =
    first_available(load_from)
  else {
    tracing::info!(
      "no taskStats on page; calendar \
       cells will not be annotated"
    );
    return TaskStats::default();
  };

  tracing::info!(
    days = stats.len(),
    source = source.as_str(),
    "loaded taskStats"
  );
  if !stats.skipped_days().is_empty() {
    tracing::warn!(
      skipped = ?stats.skipped_days(),
      "ignored malformed taskStats entries"
    );
  }
  if stats.is_empty() {
    tracing::debug!(
      "taskStats has no usable days"
    );
  }
  stats
}

fn first_available(
  mut load: impl FnMut(StatsSource) -> Option<TaskStats>
) -> Option<(StatsSource, TaskStats)> {
  StatsSource::ORDER
    .into_iter()
    .find_map(|source| {
      load(source).map(|stats| (source, stats))
    })
}

fn load_from(
  source: StatsSource
) -> Option<TaskStats> {
  match source {
    | StatsSource::Binding => {
      read_binding_stats()
    }
    | StatsSource::Window => {
      read_window_stats()
    }
    | StatsSource::Script => {
      read_script_stats()
    }
  }
}

fn read_binding_stats() -> Option<TaskStats>
{
  let lookup = js_sys::Function::new_no_args(
    TASK_STATS_BINDING_LOOKUP
  );
  match lookup.call0(&JsValue::UNDEFINED) {
    | Ok(value) => decode_js_stats(
      value,
      StatsSource::Binding
    ),
    | Err(error) => {
      tracing::warn!(error = ?error, "failed resolving taskStats binding");
      None
    }
  }
}

fn read_window_stats() -> Option<TaskStats>
{
  let window = web_sys::window()?;
  match js_sys::Reflect::get(
    window.as_ref(),
    &JsValue::from_str(TASK_STATS_GLOBAL)
  ) {
    | Ok(value) => decode_js_stats(
      value,
      StatsSource::Window
    ),
    | Err(error) => {
      tracing::warn!(error = ?error, "failed reading window.taskStats");
      None
    }
  }
}

fn decode_js_stats(
  value: JsValue,
  source: StatsSource
) -> Option<TaskStats> {
  if value.is_undefined() || value.is_null()
  {
    return None;
  }

  serde_wasm_bindgen::from_value::<TaskStats>(
    value
  )
  .inspect_err(|error| {
    tracing::warn!(
      %error,
      source = source.as_str(),
      "malformed taskStats"
    );
  })
  .ok()
}

fn read_script_stats() -> Option<TaskStats>
{
  let script =
    dom::element_by_id(TASK_STATS_SCRIPT_ID)?;
  let raw = script.text_content()?;
  parse_stats_json(&raw)
}

fn parse_stats_json(
  raw: &str
) -> Option<TaskStats> {
  if raw.trim().is_empty() {
    return None;
  }

  match serde_json::from_str::<TaskStats>(
    raw
  ) {
    | Ok(stats) => Some(stats),
    | Err(error) => {
      tracing::warn!(%error, "malformed task-stats script");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn script_json_is_parsed() {
    let stats = parse_stats_json(
      r#"{"2024-01-05": {"created": 2, "completed": 1}}"#
    )
    .expect("stats parse");

    assert_eq!(stats.len(), 1);
    assert_eq!(
      stats
        .get("2024-01-05")
        .map(|day| day.created),
      Some(2)
    );
  }

  #[test]
  fn global_binding_wins_over_later_sources()
  {
    let mut tried = vec![];
    let found = first_available(|source| {
      tried.push(source);
      parse_stats_json(
        r#"{"2024-01-05": {"created": 1}}"#
      )
    });

    assert_eq!(
      found.map(|(source, _)| source),
      Some(StatsSource::Binding)
    );
    assert_eq!(tried, vec![StatsSource::Binding]);
  }

  #[test]
  fn missing_sources_fall_through_in_order()
  {
    let mut tried = vec![];
    let found = first_available(|source| {
      tried.push(source);
      match source {
        | StatsSource::Script => parse_stats_json(
          r#"{"2024-01-05": {"completed": 4}}"#
        ),
        | _ => None
      }
    });

    let (source, stats) =
      found.expect("script stats");
    assert_eq!(source, StatsSource::Script);
    assert_eq!(
      stats
        .get("2024-01-05")
        .map(|day| day.completed),
      Some(4)
    );
    assert_eq!(tried, StatsSource::ORDER);
  }

  #[test]
  fn no_source_yields_nothing() {
    assert!(first_available(|_| None).is_none());
  }

  #[test]
  fn one_bad_day_keeps_the_rest() {
    let stats = parse_stats_json(
      r#"{
        "2024-01-05": {"created": 2},
        "2024-01-06": {"created": null}
      }"#
    )
    .expect("stats parse");

    assert_eq!(stats.len(), 1);
    assert_eq!(
      stats.skipped_days(),
      ["2024-01-06"]
    );
  }

  #[test]
  fn blank_or_malformed_script_is_ignored()
  {
    assert!(parse_stats_json("  ").is_none());
    assert!(
      parse_stats_json("[1, 2]").is_none()
    );
  }
}
