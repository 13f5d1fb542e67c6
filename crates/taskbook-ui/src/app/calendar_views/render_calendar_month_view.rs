fn render_calendar_month_view(
  ctx: &CalendarRenderContext<'_>
) -> Html {
  let labels =
    weekday_labels(ctx.week_start);
  let focus_month = ctx.focus.month();

  html! {
      <>
          <div class="calendar-weekday-row">
              {
                  for labels.into_iter().map(|label| html! {
                      <div class="calendar-weekday">{ label }</div>
                  })
              }
          </div>
          <div class="calendar-grid calendar-month-grid">
              {
                  for month_grid_days(ctx.focus, ctx.week_start).into_iter().map(|day| {
                      render_calendar_day_cell(
                          ctx,
                          day,
                          day.month() != focus_month
                      )
                  })
              }
          </div>
      </>
  }
}
