fn render_calendar_week_view(
  ctx: &CalendarRenderContext<'_>
) -> Html {
  let days =
    week_days(ctx.focus, ctx.week_start);

  html! {
      <div class="calendar-week-view">
          <div class="calendar-grid calendar-week-grid">
              {
                  for days.iter().copied().map(|day| html! {
                      <div class="calendar-week-column">
                          <div class="calendar-weekday">{ day.format("%a %-m/%-d").to_string() }</div>
                          { render_calendar_day_cell(ctx, day, false) }
                      </div>
                  })
              }
          </div>
          <div class="calendar-week-hours">
              {
                  for (ctx.hour_start..=ctx.hour_end).map(|hour| html! {
                      <div class="calendar-hour-row">
                          <span class="calendar-hour-label">{ format_hour_label(hour) }</span>
                          {
                              for days.iter().map(|_| html! {
                                  <div class="calendar-hour-slot"></div>
                              })
                          }
                      </div>
                  })
              }
          </div>
      </div>
  }
}
