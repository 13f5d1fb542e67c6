/// Expanded/collapsed state of a subtask
/// list, shared by the server-rendered
/// task rows and the calendar entries.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub(crate) enum SubtaskVisibility {
  Hidden,
  Shown
}

impl SubtaskVisibility {
  /// Only an explicit inline `none`
  /// counts as hidden; an empty inline
  /// style is treated as shown.
  pub fn from_inline_display(
    display: &str
  ) -> Self {
    if display.trim() == "none" {
      Self::Hidden
    } else {
      Self::Shown
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Hidden => Self::Shown,
      | Self::Shown => Self::Hidden
    }
  }

  pub fn display_value(
    self
  ) -> &'static str {
    match self {
      | Self::Hidden => "none",
      | Self::Shown => "block"
    }
  }

  pub fn inline_style(
    self
  ) -> &'static str {
    match self {
      | Self::Hidden => "display: none;",
      | Self::Shown => "display: block;"
    }
  }

  pub fn icon_class(
    self
  ) -> &'static str {
    match self {
      | Self::Hidden => "fa-chevron-down",
      | Self::Shown => "fa-chevron-up"
    }
  }
}
