fn render_calendar_view(
  view: CalendarViewMode,
  ctx: &CalendarRenderContext<'_>
) -> Html {
  match view {
    | CalendarViewMode::Month => {
      render_calendar_month_view(ctx)
    }
    | CalendarViewMode::Week => {
      render_calendar_week_view(ctx)
    }
    | CalendarViewMode::Day => {
      render_calendar_day_view(ctx)
    }
  }
}
