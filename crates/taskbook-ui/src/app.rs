mod bindings;
mod calendar;
mod completed_tasks;
mod config;
mod dom;
mod task_stats;
mod visibility;

use std::rc::Rc;

use gloo::events::EventListener;

const CALENDAR_ROOT_ID: &str = "calendar";

/// Runs page setup once the document has
/// been parsed.
pub(crate) fn start() {
  let Some(document) = dom::document() else {
    tracing::error!(
      "no document; taskbook ui not started"
    );
    return;
  };

  if document.ready_state() == "loading" {
    tracing::debug!(
      "waiting for DOMContentLoaded"
    );
    EventListener::once(
      &document,
      "DOMContentLoaded",
      |_| boot()
    )
    .forget();
  } else {
    boot();
  }
}

fn boot() {
  let config =
    Rc::new(config::load_ui_config());
  let bound =
    bindings::bind_page_controls(&config);
  tracing::info!(
    bound,
    "page controls bound"
  );

  match dom::element_by_id(CALENDAR_ROOT_ID)
  {
    | Some(root) => {
      calendar::mount_calendar(
        root,
        config,
        task_stats::read_task_stats()
      );
    }
    | None => {
      tracing::debug!(
        id = CALENDAR_ROOT_ID,
        "no calendar element on page"
      );
    }
  }
}
