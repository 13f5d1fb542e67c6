#[derive(Properties, PartialEq)]
struct CalendarModeSwitchProps {
  current_view: CalendarViewMode,
  on_set_view:
    Callback<CalendarViewMode>
}

/// Toolbar buttons that change only how the
/// grid is drawn. They carry their own
/// class so the page's query-scope buttons
/// never pick them up.
#[function_component(CalendarModeSwitch)]
fn calendar_mode_switch(
  props: &CalendarModeSwitchProps
) -> Html {
  html! {
      <div class="btn-group calendar-mode-switch">
          {
              for CalendarViewMode::all().into_iter().map(|view| {
                  let on_set_view = props.on_set_view.clone();
                  let is_active = props.current_view == view;
                  html! {
                      <button
                          type="button"
                          class={classes!("btn", "btn-outline-secondary", "calendar-mode-btn", is_active.then_some("active"))}
                          data-mode={view.as_key()}
                          onclick={Callback::from(move |_: MouseEvent| on_set_view.emit(view))}
                      >
                          { view.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
