use std::rc::Rc;

use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use gloo::events::EventListener;
use taskbook_shared::{
  DayMarker,
  TaskStats,
  ViewType
};
use web_sys::{
  Element,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  UseReducerDispatcher,
  classes,
  create_portal,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer,
  use_state
};

use super::completed_tasks::{
  CompletedTasksPanel,
  LoadState
};
use super::config::UiConfig;
use super::dom;
use crate::api;

const VIEW_BUTTON_SELECTOR: &str =
  ".calendar-view-btn";
const ACTIVE_VIEW_BUTTON_SELECTOR: &str =
  ".calendar-view-btn.active";
const COMPLETED_TASKS_CONTAINER_ID: &str =
  "completed-tasks-container";

/// Display granularity of the calendar
/// grid itself.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub(crate) enum CalendarViewMode {
  Month,
  Week,
  Day
}

impl CalendarViewMode {
  fn all() -> [Self; 3] {
    [Self::Month, Self::Week, Self::Day]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Month => "month",
      | Self::Week => "week",
      | Self::Day => "day"
    }
  }

  fn label(self) -> &'static str {
    match self {
      | Self::Month => "Month",
      | Self::Week => "Week",
      | Self::Day => "Day"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key.trim() {
      | "month" => Some(Self::Month),
      | "week" => Some(Self::Week),
      | "day" => Some(Self::Day),
      | _ => None
    }
  }

  fn for_view_type(view: ViewType) -> Self {
    match view {
      | ViewType::Day => Self::Day,
      | ViewType::Week => Self::Week,
      | ViewType::Month => Self::Month
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub(crate) struct DateSelection {
  pub start: NaiveDate,
  pub end:   NaiveDate
}

impl DateSelection {
  fn between(
    a: NaiveDate,
    b: NaiveDate
  ) -> Self {
    Self {
      start: a.min(b),
      end:   a.max(b)
    }
  }

  fn contains(
    &self,
    day: NaiveDate
  ) -> bool {
    day >= self.start && day <= self.end
  }
}

/// One completed-task request. Only the
/// response for the highest ticket may
/// update the list.
#[derive(
  Clone, Copy, Debug, PartialEq, Eq,
)]
pub(crate) struct TaskQuery {
  pub date:   NaiveDate,
  pub view:   ViewType,
  pub ticket: u64
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CalendarState {
  pub today:      NaiveDate,
  pub focus:      NaiveDate,
  pub display:    CalendarViewMode,
  pub week_start: Weekday,
  pub selection:  Option<DateSelection>,
  pub pressed:    Option<NaiveDate>,
  pub query:      Option<TaskQuery>,
  last_ticket:    u64
}

pub(crate) enum CalendarAction {
  Prev,
  Next,
  Today,
  SetDisplay(CalendarViewMode),
  PressDay(NaiveDate),
  ReleaseDay {
    day:  NaiveDate,
    view: ViewType
  },
  CancelPress,
  SwitchView(ViewType)
}

impl CalendarState {
  /// Starts on `today` and immediately
  /// queries today's tasks in day scope.
  pub fn new(
    today: NaiveDate,
    display: CalendarViewMode,
    week_start: Weekday
  ) -> Self {
    let mut state = Self {
      today,
      focus: today,
      display,
      week_start,
      selection: None,
      pressed: None,
      query: None,
      last_ticket: 0
    };
    state.issue_query(today, ViewType::Day);
    state
  }

  fn issue_query(
    &mut self,
    date: NaiveDate,
    view: ViewType
  ) {
    self.last_ticket =
      self.last_ticket.saturating_add(1);
    self.query = Some(TaskQuery {
      date,
      view,
      ticket: self.last_ticket
    });
  }

  pub fn title(&self) -> String {
    calendar_title_for_view(
      self.display,
      self.focus,
      self.week_start
    )
  }
}

impl Reducible for CalendarState {
  type Action = CalendarAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | CalendarAction::Prev => {
        next.focus = shift_calendar_focus(
          next.focus,
          next.display,
          -1
        );
      }
      | CalendarAction::Next => {
        next.focus = shift_calendar_focus(
          next.focus,
          next.display,
          1
        );
      }
      | CalendarAction::Today => {
        next.focus = next.today;
      }
      | CalendarAction::SetDisplay(mode) => {
        next.display = mode;
      }
      | CalendarAction::PressDay(day) => {
        next.pressed = Some(day);
      }
      | CalendarAction::ReleaseDay {
        day,
        view
      } => {
        let anchor =
          next.pressed.take().unwrap_or(day);
        let selection =
          DateSelection::between(anchor, day);
        next.selection = Some(selection);
        next.issue_query(selection.start, view);
      }
      | CalendarAction::CancelPress => {
        if self.pressed.is_none() {
          return self;
        }
        next.pressed = None;
      }
      | CalendarAction::SwitchView(view) => {
        next.display =
          CalendarViewMode::for_view_type(view);
        next.issue_query(next.focus, view);
      }
    }
    Rc::new(next)
  }
}

fn today_in_timezone(
  timezone: Tz
) -> NaiveDate {
  Utc::now()
    .with_timezone(&timezone)
    .date_naive()
}

fn iso_date(day: NaiveDate) -> String {
  day.format("%Y-%m-%d").to_string()
}

fn cell_markers(
  stats: &TaskStats,
  day: NaiveDate
) -> Vec<DayMarker> {
  stats.markers_for(&iso_date(day))
}

/// Query scope taken from the page's
/// view buttons; `day` unless one is
/// marked active with a known key.
fn resolve_query_view(
  active_key: Option<&str>
) -> ViewType {
  active_key
    .and_then(ViewType::from_key)
    .unwrap_or_default()
}

fn active_query_view() -> ViewType {
  let key = dom::query_first(
    ACTIVE_VIEW_BUTTON_SELECTOR
  )
  .and_then(|button| {
    button.get_attribute("data-view")
  });
  resolve_query_view(key.as_deref())
}

fn mark_active_view_button(
  active: &Element
) {
  for button in
    dom::query_all(VIEW_BUTTON_SELECTOR)
  {
    if let Err(error) =
      button.class_list().remove_1("active")
    {
      tracing::warn!(error = ?error, "failed to clear active view button");
    }
  }
  if let Err(error) =
    active.class_list().add_1("active")
  {
    tracing::warn!(error = ?error, "failed to mark active view button");
  }
}

fn bind_view_buttons(
  dispatcher: UseReducerDispatcher<
    CalendarState
  >
) -> Vec<EventListener> {
  dom::query_all(VIEW_BUTTON_SELECTOR)
    .into_iter()
    .map(|button| {
      let dispatcher = dispatcher.clone();
      let target = button.clone();
      EventListener::new(
        &button,
        "click",
        move |_| {
          let key = target
            .get_attribute("data-view")
            .unwrap_or_default();
          let Some(view) =
            ViewType::from_key(&key)
          else {
            tracing::warn!(
              data_view = %key,
              "ignoring unknown calendar view button"
            );
            return;
          };
          mark_active_view_button(&target);
          tracing::debug!(
            view = view.as_key(),
            "calendar view switched"
          );
          dispatcher.dispatch(
            CalendarAction::SwitchView(view)
          );
        }
      )
    })
    .collect()
}

/// Finds the completed-task container and
/// clears whatever the server rendered in
/// it.
fn take_list_host() -> Option<Element> {
  let host = dom::element_by_id(
    COMPLETED_TASKS_CONTAINER_ID
  );
  match &host {
    | Some(element) => {
      element.set_inner_html("");
    }
    | None => {
      tracing::warn!(
        id = COMPLETED_TASKS_CONTAINER_ID,
        "completed tasks container missing; \
         task list disabled"
      );
    }
  }
  host
}

fn shift_calendar_focus(
  current: NaiveDate,
  view: CalendarViewMode,
  step: i64
) -> NaiveDate {
  match view {
    | CalendarViewMode::Month => {
      shift_months(current, step as i32)
    }
    | CalendarViewMode::Week => {
      add_days(current, step * 7)
    }
    | CalendarViewMode::Day => {
      add_days(current, step)
    }
  }
}

fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(year, month, day)
    .unwrap_or(date)
}

fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, 1)
    .unwrap_or(NaiveDate::MIN)
}

fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(days))
    .unwrap_or(date)
}

fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

/// The 6x7 block of days shown for the
/// month containing `focus`.
fn month_grid_days(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let grid_start = start_of_week(
    first_day_of_month(
      focus.year(),
      focus.month()
    ),
    week_start
  );
  (0_i64..42_i64)
    .map(|offset| {
      add_days(grid_start, offset)
    })
    .collect()
}

fn week_days(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let start =
    start_of_week(focus, week_start);
  (0_i64..7_i64)
    .map(|offset| add_days(start, offset))
    .collect()
}

fn calendar_title_for_view(
  view: CalendarViewMode,
  focus: NaiveDate,
  week_start: Weekday
) -> String {
  match view {
    | CalendarViewMode::Month => {
      focus.format("%B %Y").to_string()
    }
    | CalendarViewMode::Week => {
      let start =
        start_of_week(focus, week_start);
      let end = add_days(start, 6);
      if start.year() != end.year() {
        format!(
          "{} - {}",
          start.format("%b %-d, %Y"),
          end.format("%b %-d, %Y")
        )
      } else if start.month() != end.month()
      {
        format!(
          "{} - {}",
          start.format("%b %-d"),
          end.format("%b %-d, %Y")
        )
      } else {
        format!(
          "{} - {}",
          start.format("%b %-d"),
          end.format("%-d, %Y")
        )
      }
    }
    | CalendarViewMode::Day => {
      focus.format("%B %-d, %Y").to_string()
    }
  }
}

fn format_hour_label(hour: u32) -> String {
  match hour {
    | 0 => "12am".to_string(),
    | 1..=11 => format!("{hour}am"),
    | 12 => "12pm".to_string(),
    | _ => format!("{}pm", hour - 12)
  }
}

/// Everything a view renderer needs for
/// one frame.
struct CalendarRenderContext<'a> {
  focus:      NaiveDate,
  today:      NaiveDate,
  week_start: Weekday,
  selection:  Option<DateSelection>,
  stats:      &'a TaskStats,
  hour_start: u32,
  hour_end:   u32,
  on_press:   Callback<NaiveDate>,
  on_release: Callback<NaiveDate>
}

#[derive(Properties, PartialEq)]
pub(crate) struct CalendarAppProps {
  pub config:     Rc<UiConfig>,
  pub task_stats: Rc<TaskStats>
}

pub(crate) fn mount_calendar(
  root: Element,
  config: Rc<UiConfig>,
  task_stats: TaskStats
) {
  tracing::info!(
    stats_days = task_stats.len(),
    "mounting calendar"
  );
  yew::Renderer::<CalendarApp>::with_root_and_props(
    root,
    CalendarAppProps {
      config,
      task_stats: Rc::new(task_stats)
    }
  )
  .render();
}

#[function_component(CalendarApp)]
pub(crate) fn calendar_app(
  props: &CalendarAppProps
) -> Html {
  let state = {
    let config = props.config.clone();
    use_reducer(move || {
      CalendarState::new(
        today_in_timezone(config.timezone()),
        config.initial_view(),
        config.week_start()
      )
    })
  };
  let load_state =
    use_state(|| LoadState::Loading);
  let latest_ticket = use_mut_ref(|| 0_u64);
  let list_host = use_state(take_list_host);

  {
    let load_state = load_state.clone();
    let latest_ticket = latest_ticket.clone();
    let has_host = list_host.is_some();
    use_effect_with(
      state.query,
      move |query| {
        if let Some(query) = *query
          && has_host
        {
          *latest_ticket.borrow_mut() =
            query.ticket;
          load_state.set(LoadState::Loading);
          wasm_bindgen_futures::spawn_local(
            async move {
              let result =
                api::fetch_completed_tasks(
                  query.date,
                  query.view
                )
                .await;
              if *latest_ticket.borrow()
                != query.ticket
              {
                tracing::debug!(
                  ticket = query.ticket,
                  "dropping stale completed tasks response"
                );
                return;
              }
              load_state.set(
                LoadState::from_result(result)
              );
            }
          );
        }
        || ()
      }
    );
  }

  {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |_| {
      let listeners =
        bind_view_buttons(dispatcher);
      tracing::debug!(
        bound = listeners.len(),
        "bound calendar view buttons"
      );
      move || drop(listeners)
    });
  }

  let dispatcher = state.dispatcher();
  let on_prev = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(CalendarAction::Prev)
    })
  };
  let on_next = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(CalendarAction::Next)
    })
  };
  let on_today = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(CalendarAction::Today)
    })
  };
  let on_set_display = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |mode: CalendarViewMode| {
        dispatcher.dispatch(
          CalendarAction::SetDisplay(mode)
        )
      }
    )
  };
  let on_press = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |day: NaiveDate| {
      dispatcher.dispatch(
        CalendarAction::PressDay(day)
      )
    })
  };
  let on_release = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |day: NaiveDate| {
      dispatcher.dispatch(
        CalendarAction::ReleaseDay {
          day,
          view: active_query_view()
        }
      )
    })
  };
  let on_leave = Callback::from(
    move |_: MouseEvent| {
      dispatcher
        .dispatch(CalendarAction::CancelPress)
    }
  );

  let render_ctx = CalendarRenderContext {
    focus: state.focus,
    today: state.today,
    week_start: state.week_start,
    selection: state.selection,
    stats: &props.task_stats,
    hour_start: props
      .config
      .calendar
      .day_hour_start,
    hour_end: props.config.calendar.day_hour_end,
    on_press,
    on_release
  };

  let task_list = match (*list_host).clone()
  {
    | Some(host) => create_portal(
      html! {
          <CompletedTasksPanel
              state={(*load_state).clone()}
              config={props.config.clone()}
          />
      },
      host
    ),
    | None => html! {}
  };

  html! {
      <>
          <div class="calendar" onmouseleave={on_leave}>
              <div class="calendar-toolbar">
                  <CalendarNavActions on_prev={on_prev} on_today={on_today} on_next={on_next} />
                  <h2 class="calendar-title">{ state.title() }</h2>
                  <CalendarModeSwitch current_view={state.display} on_set_view={on_set_display} />
              </div>
              <div class={classes!("calendar-body", format!("calendar-{}-view", state.display.as_key()))}>
                  { render_calendar_view(state.display, &render_ctx) }
              </div>
          </div>
          { task_list }
      </>
  }
}

include!("calendar_views/calendar_nav_actions.rs");
include!("calendar_views/calendar_mode_switch.rs");
include!("calendar_views/render_calendar_view.rs");
include!("calendar_views/render_calendar_month_view.rs");
include!("calendar_views/render_calendar_week_view.rs");
include!("calendar_views/render_calendar_day_view.rs");
include!("calendar_views/render_calendar_day_cell.rs");
include!("calendar_views/render_calendar_markers.rs");
include!("calendar_views/weekday_labels.rs");

#[cfg(test)]
mod tests {
  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
      .expect("valid date")
  }

  fn reduce(
    state: CalendarState,
    action: CalendarAction
  ) -> CalendarState {
    (*Rc::new(state).reduce(action)).clone()
  }

  fn initial_state() -> CalendarState {
    CalendarState::new(
      date(2024, 1, 5),
      CalendarViewMode::Month,
      Weekday::Sun
    )
  }

  #[test]
  fn initial_render_loads_today_as_day() {
    let state = initial_state();

    assert_eq!(
      state.query,
      Some(TaskQuery {
        date:   date(2024, 1, 5),
        view:   ViewType::Day,
        ticket: 1
      })
    );
    assert_eq!(
      state.display,
      CalendarViewMode::Month
    );
  }

  #[test]
  fn switching_view_reloads_focused_date()
  {
    let state = reduce(
      initial_state(),
      CalendarAction::Next
    );
    assert_eq!(state.focus, date(2024, 2, 5));
    assert_eq!(
      state.query.map(|query| query.ticket),
      Some(1)
    );

    let state = reduce(
      state,
      CalendarAction::SwitchView(
        ViewType::Week
      )
    );

    assert_eq!(
      state.display,
      CalendarViewMode::Week
    );
    assert_eq!(
      state.query,
      Some(TaskQuery {
        date:   date(2024, 2, 5),
        view:   ViewType::Week,
        ticket: 2
      })
    );
  }

  #[test]
  fn toolbar_display_switch_does_not_reload()
  {
    let state = reduce(
      initial_state(),
      CalendarAction::SetDisplay(
        CalendarViewMode::Day
      )
    );

    assert_eq!(
      state.display,
      CalendarViewMode::Day
    );
    assert_eq!(
      state.query.map(|query| query.ticket),
      Some(1)
    );
  }

  #[test]
  fn drag_selection_loads_range_start() {
    let state = reduce(
      initial_state(),
      CalendarAction::PressDay(date(
        2024, 1, 20
      ))
    );
    let state = reduce(
      state,
      CalendarAction::ReleaseDay {
        day:  date(2024, 1, 17),
        view: ViewType::Month
      }
    );

    assert_eq!(
      state.selection,
      Some(DateSelection {
        start: date(2024, 1, 17),
        end:   date(2024, 1, 20)
      })
    );
    assert_eq!(state.pressed, None);
    assert_eq!(
      state.query,
      Some(TaskQuery {
        date:   date(2024, 1, 17),
        view:   ViewType::Month,
        ticket: 2
      })
    );
  }

  #[test]
  fn plain_click_selects_single_day() {
    let state = reduce(
      initial_state(),
      CalendarAction::ReleaseDay {
        day:  date(2024, 1, 9),
        view: ViewType::Day
      }
    );

    let selection =
      state.selection.expect("selection");
    assert!(selection.contains(date(2024, 1, 9)));
    assert!(
      !selection.contains(date(2024, 1, 10))
    );
    assert_eq!(
      state.query.map(|query| query.date),
      Some(date(2024, 1, 9))
    );
  }

  #[test]
  fn tickets_increase_with_every_query() {
    let mut state = initial_state();
    let mut tickets = vec![];
    for view in [
      ViewType::Week,
      ViewType::Month,
      ViewType::Day
    ] {
      state = reduce(
        state,
        CalendarAction::SwitchView(view)
      );
      tickets.push(
        state
          .query
          .map(|query| query.ticket)
          .expect("query issued")
      );
    }

    assert_eq!(tickets, vec![2, 3, 4]);
  }

  #[test]
  fn prev_and_today_move_focus_by_display()
  {
    let state = reduce(
      reduce(
        initial_state(),
        CalendarAction::SetDisplay(
          CalendarViewMode::Week
        )
      ),
      CalendarAction::Prev
    );
    assert_eq!(
      state.focus,
      date(2023, 12, 29)
    );

    let state =
      reduce(state, CalendarAction::Today);
    assert_eq!(state.focus, date(2024, 1, 5));
  }

  #[test]
  fn query_view_defaults_to_day() {
    assert_eq!(
      resolve_query_view(None),
      ViewType::Day
    );
    assert_eq!(
      resolve_query_view(Some("month")),
      ViewType::Month
    );
    assert_eq!(
      resolve_query_view(Some("year")),
      ViewType::Day
    );
  }

  #[test]
  fn month_grid_starts_on_week_start() {
    let days = month_grid_days(
      date(2024, 1, 15),
      Weekday::Sun
    );

    assert_eq!(days.len(), 42);
    assert_eq!(days[0], date(2023, 12, 31));
    assert_eq!(days[41], date(2024, 2, 10));
  }

  #[test]
  fn week_days_follow_monday_start() {
    let days =
      week_days(date(2024, 1, 5), Weekday::Mon);

    assert_eq!(days.first(), Some(&date(2024, 1, 1)));
    assert_eq!(days.last(), Some(&date(2024, 1, 7)));
  }

  #[test]
  fn shift_months_clamps_day() {
    assert_eq!(
      shift_months(date(2024, 1, 31), 1),
      date(2024, 2, 29)
    );
    assert_eq!(
      shift_months(date(2024, 1, 15), -1),
      date(2023, 12, 15)
    );
  }

  #[test]
  fn titles_per_display_mode() {
    let focus = date(2024, 1, 5);
    assert_eq!(
      calendar_title_for_view(
        CalendarViewMode::Month,
        focus,
        Weekday::Sun
      ),
      "January 2024"
    );
    assert_eq!(
      calendar_title_for_view(
        CalendarViewMode::Week,
        focus,
        Weekday::Sun
      ),
      "Dec 31, 2023 - Jan 6, 2024"
    );
    assert_eq!(
      calendar_title_for_view(
        CalendarViewMode::Week,
        date(2024, 1, 10),
        Weekday::Sun
      ),
      "Jan 7 - 13, 2024"
    );
    assert_eq!(
      calendar_title_for_view(
        CalendarViewMode::Day,
        focus,
        Weekday::Sun
      ),
      "January 5, 2024"
    );
  }

  #[test]
  fn cell_markers_use_iso_date_keys() {
    let stats: TaskStats =
      serde_json::from_str(
        r#"{"2024-01-05": {"created": 2, "completed": 1}}"#
      )
      .expect("decode stats");

    let markers =
      cell_markers(&stats, date(2024, 1, 5));
    let tooltips = markers
      .iter()
      .map(DayMarker::tooltip)
      .collect::<Vec<_>>();

    assert_eq!(
      tooltips,
      vec![
        "2 tasks created".to_string(),
        "1 tasks completed".to_string()
      ]
    );
    assert!(
      cell_markers(&stats, date(2024, 1, 6))
        .is_empty()
    );
  }

  #[test]
  fn hour_labels() {
    assert_eq!(format_hour_label(0), "12am");
    assert_eq!(format_hour_label(9), "9am");
    assert_eq!(format_hour_label(12), "12pm");
    assert_eq!(format_hour_label(23), "11pm");
  }

  #[test]
  fn view_modes_map_from_query_views() {
    for view in ViewType::all() {
      assert_eq!(
        CalendarViewMode::for_view_type(view)
          .as_key(),
        view.as_key()
      );
    }
    assert_eq!(
      CalendarViewMode::all().len(),
      3
    );
  }
}
