/// A selectable day. Pressing on one cell
/// and releasing on another selects the
/// whole range between them.
fn render_calendar_day_cell(
  ctx: &CalendarRenderContext<'_>,
  day: NaiveDate,
  outside: bool
) -> Html {
  let markers = cell_markers(ctx.stats, day);
  let is_today = day == ctx.today;
  let selected = ctx
    .selection
    .is_some_and(|selection| {
      selection.contains(day)
    });
  let on_press = ctx.on_press.clone();
  let on_release = ctx.on_release.clone();

  html! {
      <div
          class={classes!(
              "calendar-day-cell",
              outside.then_some("outside"),
              is_today.then_some("today"),
              selected.then_some("selected")
          )}
          data-date={iso_date(day)}
          onmousedown={Callback::from(move |event: MouseEvent| {
              event.prevent_default();
              on_press.emit(day);
          })}
          onmouseup={Callback::from(move |_: MouseEvent| on_release.emit(day))}
      >
          <div class="calendar-day-top">
              <span class="calendar-day-label">{ day.day() }</span>
              { render_calendar_markers(&markers) }
          </div>
      </div>
  }
}
