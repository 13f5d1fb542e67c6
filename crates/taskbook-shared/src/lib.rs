use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  Serializer
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SubtaskDto {
  #[serde(default)]
  pub id:           Option<u64>,
  #[serde(default)]
  pub task_id:      Option<u64>,
  #[serde(default)]
  pub title:        String,
  #[serde(default)]
  pub completed:    bool,
  #[serde(default)]
  pub created_at:   Option<String>,
  #[serde(default)]
  pub completed_at: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  #[serde(default)]
  pub id:           Option<u64>,
  #[serde(default)]
  pub title:        String,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(default)]
  pub image_path:   Option<String>,
  #[serde(default)]
  pub created_at:   Option<String>,
  #[serde(default)]
  pub completed_at: Option<String>,
  #[serde(default)]
  pub completed:    bool,
  #[serde(default)]
  pub subtasks:     Vec<SubtaskDto>
}

impl TaskDto {
  /// Description with blank strings
  /// treated as missing.
  pub fn description_text(
    &self
  ) -> Option<&str> {
    non_blank(self.description.as_deref())
  }

  pub fn image_src(
    &self
  ) -> Option<&str> {
    non_blank(self.image_path.as_deref())
  }
}

fn non_blank(
  value: Option<&str>
) -> Option<&str> {
  value.filter(|raw| {
    !raw.trim().is_empty()
  })
}

/// Per-day creation/completion counts
/// injected by the page as
/// `taskStats`.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DayStats {
  #[serde(default)]
  pub created:   u32,
  #[serde(default)]
  pub completed: u32
}

/// A day entry as it arrives on the wire.
/// Entries that do not fit `DayStats`
/// are kept apart instead of failing the
/// whole map.
#[derive(Deserialize)]
#[serde(untagged)]
enum DayEntry {
  Valid(DayStats),
  Malformed(IgnoredAny)
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskStats {
  days:    BTreeMap<String, DayStats>,
  skipped: Vec<String>
}

impl<'de> Deserialize<'de> for TaskStats {
  fn deserialize<D>(
    deserializer: D
  ) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw = BTreeMap::<String, DayEntry>::deserialize(
      deserializer
    )?;

    let mut stats = Self::default();
    for (date_key, entry) in raw {
      match entry {
        | DayEntry::Valid(day) => {
          stats.days.insert(date_key, day);
        }
        | DayEntry::Malformed(_) => {
          stats.skipped.push(date_key);
        }
      }
    }
    Ok(stats)
  }
}

impl Serialize for TaskStats {
  fn serialize<S>(
    &self,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    self.days.serialize(serializer)
  }
}

impl TaskStats {
  pub fn get(
    &self,
    date_key: &str
  ) -> Option<DayStats> {
    self.days.get(date_key).copied()
  }

  pub fn len(&self) -> usize {
    self.days.len()
  }

  pub fn is_empty(&self) -> bool {
    self.days.is_empty()
  }

  /// Date keys whose entries could not be
  /// read as counts and were left out.
  pub fn skipped_days(&self) -> &[String] {
    &self.skipped
  }

  /// Markers for one calendar cell,
  /// created before completed. Dates
  /// absent from the map yield none.
  pub fn markers_for(
    &self,
    date_key: &str
  ) -> Vec<DayMarker> {
    let Some(stats) = self.get(date_key)
    else {
      return Vec::new();
    };

    let mut markers = Vec::with_capacity(2);
    if stats.created > 0 {
      markers.push(DayMarker {
        kind:  MarkerKind::Created,
        count: stats.created
      });
    }
    if stats.completed > 0 {
      markers.push(DayMarker {
        kind:  MarkerKind::Completed,
        count: stats.completed
      });
    }
    markers
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum MarkerKind {
  Created,
  Completed
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DayMarker {
  pub kind:  MarkerKind,
  pub count: u32
}

impl DayMarker {
  pub fn css_class(
    &self
  ) -> &'static str {
    match self.kind {
      | MarkerKind::Created => {
        "calendar-dot created-dot"
      }
      | MarkerKind::Completed => {
        "calendar-dot completed-dot"
      }
    }
  }

  pub fn tooltip(&self) -> String {
    match self.kind {
      | MarkerKind::Created => {
        format!(
          "{} tasks created",
          self.count
        )
      }
      | MarkerKind::Completed => {
        format!(
          "{} tasks completed",
          self.count
        )
      }
    }
  }
}

/// Scope of the completed-task query.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
  #[default]
  Day,
  Week,
  Month
}

impl ViewType {
  pub fn all() -> [Self; 3] {
    [Self::Day, Self::Week, Self::Month]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Week => "week",
      | Self::Month => "month"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key.trim() {
      | "day" => Some(Self::Day),
      | "week" => Some(Self::Week),
      | "month" => Some(Self::Month),
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct DeleteResponse {
  #[serde(default)]
  pub success: bool
}

/// The two kinds of deletable,
/// completable rows on the page.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ResourceKind {
  Task,
  Subtask
}

impl ResourceKind {
  pub fn all() -> [Self; 2] {
    [Self::Task, Self::Subtask]
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Task => "task",
      | Self::Subtask => "subtask"
    }
  }

  pub fn checkbox_selector(
    self
  ) -> &'static str {
    match self {
      | Self::Task => ".task-checkbox",
      | Self::Subtask => {
        ".subtask-checkbox"
      }
    }
  }

  pub fn delete_button_selector(
    self
  ) -> &'static str {
    match self {
      | Self::Task => ".delete-task-btn",
      | Self::Subtask => {
        ".delete-subtask-btn"
      }
    }
  }

  pub fn id_attribute(
    self
  ) -> &'static str {
    match self {
      | Self::Task => "data-task-id",
      | Self::Subtask => {
        "data-subtask-id"
      }
    }
  }

  /// Selector of the row removed after
  /// a successful delete.
  pub fn item_selector(
    self
  ) -> &'static str {
    match self {
      | Self::Task => ".task-item",
      | Self::Subtask => ".subtask-item"
    }
  }

  fn collection(self) -> &'static str {
    match self {
      | Self::Task => "tasks",
      | Self::Subtask => "subtasks"
    }
  }

  pub fn resource_path(
    self,
    id: &ResourceId
  ) -> String {
    format!(
      "/{}/{}",
      self.collection(),
      id.as_str()
    )
  }

  pub fn complete_path(
    self,
    id: &ResourceId
  ) -> String {
    format!(
      "/{}/{}/complete",
      self.collection(),
      id.as_str()
    )
  }
}

/// Identifier read from a `data-*-id`
/// attribute. Only ASCII alphanumerics,
/// `-` and `_` are accepted so the id
/// can be spliced into a path.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash,
)]
pub struct ResourceId(String);

impl ResourceId {
  pub fn parse(
    raw: &str
  ) -> Option<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return None;
    }
    if !trimmed.chars().all(|ch| {
      ch.is_ascii_alphanumeric()
        || ch == '-'
        || ch == '_'
    }) {
      return None;
    }
    Some(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for ResourceId {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

pub const CALENDAR_TASKS_PATH: &str =
  "/calendar/tasks";

/// `date` must already be an ISO
/// `YYYY-MM-DD` string.
pub fn calendar_tasks_path(
  date: &str,
  view: ViewType
) -> String {
  format!(
    "{CALENDAR_TASKS_PATH}?date={date}&view={}",
    view.as_key()
  )
}
