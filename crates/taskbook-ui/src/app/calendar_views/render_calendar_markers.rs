fn render_calendar_markers(
  markers: &[DayMarker]
) -> Html {
  if markers.is_empty() {
    return html! {};
  }

  html! {
      <div class="dot-container">
          {
              for markers.iter().map(|marker| html! {
                  <span class={marker.css_class()} title={marker.tooltip()}></span>
              })
          }
      </div>
  }
}
