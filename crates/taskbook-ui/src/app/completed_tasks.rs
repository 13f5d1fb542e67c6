use std::fmt::Write as _;
use std::rc::Rc;

use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime
};
use chrono_tz::Tz;
use taskbook_shared::{
  SubtaskDto,
  TaskDto
};
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::config::UiConfig;
use super::visibility::SubtaskVisibility;
use crate::api::ApiError;

const INVALID_DATE: &str = "Invalid Date";
const NOT_COMPLETED: &str = "Not completed";

/// What the completed-task container
/// currently shows.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LoadState {
  Loading,
  Empty,
  Loaded(Vec<TaskDto>),
  Failed
}

impl LoadState {
  pub fn from_result(
    result: Result<Vec<TaskDto>, ApiError>
  ) -> Self {
    match result {
      | Ok(tasks) if tasks.is_empty() => {
        Self::Empty
      }
      | Ok(tasks) => Self::Loaded(tasks),
      | Err(error) => {
        tracing::error!(%error, "error loading completed tasks");
        Self::Failed
      }
    }
  }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CompletedTasksPanelProps {
  pub state:  LoadState,
  pub config: Rc<UiConfig>
}

#[function_component(CompletedTasksPanel)]
pub(crate) fn completed_tasks_panel(
  props: &CompletedTasksPanelProps
) -> Html {
  let messages = &props.config.messages;
  match &props.state {
    | LoadState::Loading => html! {
        <p class="text-center">
            <i class="fas fa-spinner fa-spin"></i>
            { format!(" {}", messages.loading) }
        </p>
    },
    | LoadState::Empty => html! {
        <p class="text-muted">{ messages.empty.clone() }</p>
    },
    | LoadState::Failed => html! {
        <p class="text-danger">{ messages.load_error.clone() }</p>
    },
    | LoadState::Loaded(tasks) => html! {
        <ul class="list-group">
            {
                for tasks.iter().enumerate().map(|(index, task)| html! {
                    <CompletedTaskEntry
                        key={entry_key(index, task)}
                        task={task.clone()}
                        config={props.config.clone()}
                    />
                })
            }
        </ul>
    }
  }
}

fn entry_key(
  index: usize,
  task: &TaskDto
) -> String {
  match task.id {
    | Some(id) => format!("task-{id}"),
    | None => format!("entry-{index}")
  }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CompletedTaskEntryProps {
  pub task:   TaskDto,
  pub config: Rc<UiConfig>
}

#[function_component(CompletedTaskEntry)]
fn completed_task_entry(
  props: &CompletedTaskEntryProps
) -> Html {
  let visibility = use_state(|| {
    SubtaskVisibility::Hidden
  });
  let on_toggle = {
    let visibility = visibility.clone();
    Callback::from(move |_: MouseEvent| {
      visibility.set(visibility.toggled())
    })
  };

  let task = &props.task;
  let timezone = props.config.timezone();
  let format =
    props.config.display.timestamp_format.as_str();
  let timeline =
    task_timeline_label(task, timezone, format);

  html! {
      <li class="list-group-item completed-task">
          <div class="d-flex w-100 justify-content-between align-items-center">
              <h6 class="mb-1">{ &task.title }</h6>
              <button
                  type="button"
                  class="btn btn-sm btn-outline-primary toggle-completed-subtasks-btn"
                  onclick={on_toggle}
              >
                  <i class={classes!("fas", visibility.icon_class())}></i>
              </button>
          </div>
          <p class="mb-1">{ timeline }</p>
          {
              if let Some(description) = task.description_text() {
                  html! { <p class="mb-1">{ description }</p> }
              } else {
                  html! {}
              }
          }
          {
              if let Some(src) = task.image_src() {
                  html! {
                      <div class="task-image mb-2">
                          <img src={src.to_string()} alt="Task image" class="img-thumbnail" />
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="completed-subtasks-container mt-3" style={visibility.inline_style()}>
              <h6>{ "Subtasks:" }</h6>
              {
                  if task.subtasks.is_empty() {
                      html! { <p class="text-muted">{ props.config.messages.no_subtasks.clone() }</p> }
                  } else {
                      html! {
                          <ul class="list-group mb-3">
                              {
                                  for task.subtasks.iter().map(|subtask| {
                                      render_subtask_row(subtask, timezone, format)
                                  })
                              }
                          </ul>
                      }
                  }
              }
          </div>
      </li>
  }
}

fn render_subtask_row(
  subtask: &SubtaskDto,
  timezone: Tz,
  format: &str
) -> Html {
  let done = subtask.completed;
  html! {
      <li class={classes!("list-group-item", done.then_some("completed-subtask"))}>
          <div class="d-flex w-100 justify-content-between">
              <h6 class={classes!("mb-1", done.then_some("text-decoration-line-through"))}>
                  { &subtask.title }
              </h6>
          </div>
          <p class="mb-0">{ subtask_timeline_label(subtask, timezone, format) }</p>
      </li>
  }
}

fn task_timeline_label(
  task: &TaskDto,
  timezone: Tz,
  format: &str
) -> String {
  let created = optional_timestamp(
    task.created_at.as_deref(),
    timezone,
    format
  );
  let completed = task
    .completed_at
    .as_deref()
    .map(|raw| {
      format_timestamp(raw, timezone, format)
    })
    .unwrap_or_else(|| {
      NOT_COMPLETED.to_string()
    });
  format!(
    "Created: {created} → Completed: {completed}"
  )
}

fn subtask_timeline_label(
  subtask: &SubtaskDto,
  timezone: Tz,
  format: &str
) -> String {
  let created = optional_timestamp(
    subtask.created_at.as_deref(),
    timezone,
    format
  );
  let status = if subtask.completed {
    let completed = subtask
      .completed_at
      .as_deref()
      .map(|raw| {
        format_timestamp(
          raw, timezone, format
        )
      })
      .unwrap_or_else(|| {
        NOT_COMPLETED.to_string()
      });
    format!("Completed: {completed}")
  } else {
    NOT_COMPLETED.to_string()
  };
  format!("Created: {created} → {status}")
}

fn optional_timestamp(
  raw: Option<&str>,
  timezone: Tz,
  format: &str
) -> String {
  raw
    .map(|raw| {
      format_timestamp(raw, timezone, format)
    })
    .unwrap_or_else(|| {
      INVALID_DATE.to_string()
    })
}

/// Renders a server timestamp. Values with
/// an offset are shifted into `timezone`;
/// naive values are wall-clock times and
/// are shown unchanged.
pub(crate) fn format_timestamp(
  raw: &str,
  timezone: Tz,
  format: &str
) -> String {
  let Some(local) =
    parse_timestamp(raw, timezone)
  else {
    return INVALID_DATE.to_string();
  };

  let mut rendered = String::new();
  match write!(
    rendered,
    "{}",
    local.format(format)
  ) {
    | Ok(()) => rendered,
    | Err(_) => INVALID_DATE.to_string()
  }
}

fn parse_timestamp(
  raw: &str,
  timezone: Tz
) -> Option<NaiveDateTime> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  if let Ok(with_offset) =
    DateTime::parse_from_rfc3339(trimmed)
  {
    return Some(
      with_offset
        .with_timezone(&timezone)
        .naive_local()
    );
  }

  for pattern in [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M"
  ] {
    if let Ok(naive) =
      NaiveDateTime::parse_from_str(
        trimmed, pattern
      )
    {
      return Some(naive);
    }
  }

  NaiveDate::parse_from_str(
    trimmed, "%Y-%m-%d"
  )
  .ok()
  .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
  use super::*;

  const FORMAT: &str =
    "%-m/%-d/%Y, %-I:%M:%S %p";

  fn subtask(
    title: &str,
    completed: bool,
    completed_at: Option<&str>
  ) -> SubtaskDto {
    SubtaskDto {
      id: None,
      task_id: Some(1),
      title: title.to_string(),
      completed,
      created_at: Some(
        "2024-01-05T09:00:00".to_string()
      ),
      completed_at: completed_at
        .map(str::to_string)
    }
  }

  #[test]
  fn naive_timestamps_keep_wall_clock_time()
  {
    assert_eq!(
      format_timestamp(
        "2024-01-05T17:40:00.123456",
        chrono_tz::Europe::Berlin,
        FORMAT
      ),
      "1/5/2024, 5:40:00 PM"
    );
    assert_eq!(
      format_timestamp(
        "2024-01-05 09:05:03",
        chrono_tz::UTC,
        FORMAT
      ),
      "1/5/2024, 9:05:03 AM"
    );
  }

  #[test]
  fn offset_timestamps_shift_into_timezone()
  {
    assert_eq!(
      format_timestamp(
        "2024-01-05T17:40:00+00:00",
        chrono_tz::Europe::Berlin,
        FORMAT
      ),
      "1/5/2024, 6:40:00 PM"
    );
  }

  #[test]
  fn garbage_timestamp_is_invalid_date() {
    assert_eq!(
      format_timestamp(
        "yesterday",
        chrono_tz::UTC,
        FORMAT
      ),
      INVALID_DATE
    );
  }

  #[test]
  fn empty_result_is_empty_state() {
    assert_eq!(
      LoadState::from_result(Ok(vec![])),
      LoadState::Empty
    );
    assert_eq!(
      LoadState::from_result(Err(
        ApiError::Transport(
          "offline".to_string()
        )
      )),
      LoadState::Failed
    );
    assert_eq!(
      LoadState::from_result(Err(
        ApiError::Decode(
          "expected array".to_string()
        )
      )),
      LoadState::Failed
    );
  }

  #[test]
  fn one_task_with_two_subtasks_is_one_entry()
  {
    let task = TaskDto {
      id: Some(9),
      title: "Ship release".to_string(),
      description: None,
      image_path: None,
      created_at: Some(
        "2024-01-05T08:00:00".to_string()
      ),
      completed_at: Some(
        "2024-01-05T18:00:00".to_string()
      ),
      completed: true,
      subtasks: vec![
        subtask(
          "Tag",
          true,
          Some("2024-01-05T10:00:00")
        ),
        subtask("Announce", false, None),
      ]
    };

    let state =
      LoadState::from_result(Ok(vec![
        task.clone(),
      ]));
    let LoadState::Loaded(tasks) = state
    else {
      panic!("expected loaded state");
    };
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].subtasks.len(), 2);
    assert_eq!(
      entry_key(0, &tasks[0]),
      "task-9"
    );
    assert_eq!(
      task_timeline_label(
        &task,
        chrono_tz::UTC,
        FORMAT
      ),
      "Created: 1/5/2024, 8:00:00 AM → Completed: 1/5/2024, 6:00:00 PM"
    );
  }

  #[test]
  fn subtask_labels_reflect_completion() {
    assert_eq!(
      subtask_timeline_label(
        &subtask(
          "Tag",
          true,
          Some("2024-01-05T10:00:00")
        ),
        chrono_tz::UTC,
        FORMAT
      ),
      "Created: 1/5/2024, 9:00:00 AM → Completed: 1/5/2024, 10:00:00 AM"
    );
    assert_eq!(
      subtask_timeline_label(
        &subtask("Announce", false, None),
        chrono_tz::UTC,
        FORMAT
      ),
      "Created: 1/5/2024, 9:00:00 AM → Not completed"
    );
  }

  #[test]
  fn entries_without_ids_fall_back_to_position()
  {
    let task: TaskDto =
      serde_json::from_str(
        r#"{"title":"anonymous"}"#
      )
      .expect("decode task");

    assert_eq!(
      entry_key(3, &task),
      "entry-3"
    );
  }
}
