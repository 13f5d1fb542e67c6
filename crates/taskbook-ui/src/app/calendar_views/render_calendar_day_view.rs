fn render_calendar_day_view(
  ctx: &CalendarRenderContext<'_>
) -> Html {
  html! {
      <div class="calendar-day-view">
          <div class="calendar-weekday">{ ctx.focus.format("%A").to_string() }</div>
          { render_calendar_day_cell(ctx, ctx.focus, false) }
          <div class="calendar-day-hours">
              {
                  for (ctx.hour_start..=ctx.hour_end).map(|hour| html! {
                      <div class="calendar-hour-row">
                          <span class="calendar-hour-label">{ format_hour_label(hour) }</span>
                          <div class="calendar-hour-slot"></div>
                      </div>
                  })
              }
          </div>
      </div>
  }
}
