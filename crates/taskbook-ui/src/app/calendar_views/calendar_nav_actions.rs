#[derive(Properties, PartialEq)]
struct CalendarNavActionsProps {
  on_prev:  Callback<MouseEvent>,
  on_today: Callback<MouseEvent>,
  on_next:  Callback<MouseEvent>
}

#[function_component(CalendarNavActions)]
fn calendar_nav_actions(
  props: &CalendarNavActionsProps
) -> Html {
  html! {
      <div class="btn-group calendar-nav-actions">
          <button type="button" class="btn btn-outline-secondary calendar-prev-btn" title="Previous" onclick={props.on_prev.clone()}>
              <i class="fas fa-chevron-left"></i>
          </button>
          <button type="button" class="btn btn-outline-secondary calendar-next-btn" title="Next" onclick={props.on_next.clone()}>
              <i class="fas fa-chevron-right"></i>
          </button>
          <button type="button" class="btn btn-outline-secondary calendar-today-btn" onclick={props.on_today.clone()}>{ "Today" }</button>
      </div>
  }
}
