fn weekday_labels(
  week_start: Weekday
) -> Vec<&'static str> {
  match week_start {
    | Weekday::Mon => {
      vec![
        "Mon", "Tue", "Wed", "Thu",
        "Fri", "Sat", "Sun",
      ]
    }
    | _ => {
      vec![
        "Sun", "Mon", "Tue", "Wed",
        "Thu", "Fri", "Sat",
      ]
    }
  }
}
