//! Listeners for the server-rendered task
//! list: completion checkboxes, subtask
//! expand/collapse buttons and delete
//! buttons.

use std::rc::Rc;

use gloo::events::EventListener;
use taskbook_shared::{
  ResourceId,
  ResourceKind
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use web_sys::{
  Element,
  HtmlElement,
  HtmlFormElement
};

use super::config::UiConfig;
use super::dom;
use super::visibility::SubtaskVisibility;
use crate::api;

const TOGGLE_SUBTASKS_SELECTOR: &str =
  ".toggle-subtasks-btn";
const TASK_ITEM_SELECTOR: &str =
  ".task-item";
const SUBTASKS_CONTAINER_SELECTOR: &str =
  ".subtasks-container";

/// Attaches every page-level listener
/// and returns how many were bound.
pub(crate) fn bind_page_controls(
  config: &Rc<UiConfig>
) -> usize {
  bind_completion_toggles()
    + bind_visibility_toggles()
    + bind_delete_actions(config)
}

fn read_resource_id(
  element: &Element,
  kind: ResourceKind
) -> Option<ResourceId> {
  let raw = element
    .get_attribute(kind.id_attribute());
  let id = raw
    .as_deref()
    .and_then(ResourceId::parse);
  if id.is_none() {
    tracing::warn!(
      attribute = kind.id_attribute(),
      raw = ?raw,
      "skipping {} control without a usable id",
      kind.label()
    );
  }
  id
}

fn bind_completion_toggles() -> usize {
  let mut bound = 0_usize;
  for kind in ResourceKind::all() {
    for checkbox in
      dom::query_all(kind.checkbox_selector())
    {
      let Some(id) =
        read_resource_id(&checkbox, kind)
      else {
        continue;
      };
      let action = kind.complete_path(&id);
      EventListener::new(
        &checkbox,
        "change",
        move |_| {
          tracing::info!(%action, "submitting completion toggle");
          if let Err(error) =
            submit_post_form(&action)
          {
            tracing::error!(
              %action,
              error = ?error,
              "failed to submit completion form"
            );
          }
        }
      )
      .forget();
      bound += 1;
    }
  }
  tracing::debug!(
    bound,
    "bound completion toggles"
  );
  bound
}

/// Builds a bare `<form method="POST">`
/// and submits it, navigating the page.
fn submit_post_form(
  action: &str
) -> Result<(), JsValue> {
  let document = dom::document()
    .ok_or_else(|| {
      JsValue::from_str("no document")
    })?;
  let form = document
    .create_element("form")?
    .dyn_into::<HtmlFormElement>()
    .map_err(JsValue::from)?;
  form.set_method("POST");
  form.set_action(action);

  let body =
    document.body().ok_or_else(|| {
      JsValue::from_str("no body")
    })?;
  body.append_child(&form)?;
  form.submit()
}

fn bind_visibility_toggles() -> usize {
  let buttons =
    dom::query_all(TOGGLE_SUBTASKS_SELECTOR);
  let bound = buttons.len();
  for button in buttons {
    let target = button.clone();
    EventListener::new(
      &button,
      "click",
      move |_| toggle_subtasks(&target)
    )
    .forget();
  }
  tracing::debug!(
    bound,
    "bound subtask visibility toggles"
  );
  bound
}

fn toggle_subtasks(button: &Element) {
  let Some(container) = dom::closest(
    button,
    TASK_ITEM_SELECTOR
  )
  .and_then(|item| {
    item
      .query_selector(
        SUBTASKS_CONTAINER_SELECTOR
      )
      .ok()
      .flatten()
  })
  .and_then(|container| {
    container.dyn_into::<HtmlElement>().ok()
  }) else {
    tracing::warn!(
      "toggle button has no subtasks container"
    );
    return;
  };

  let style = container.style();
  let current =
    SubtaskVisibility::from_inline_display(
      &style
        .get_property_value("display")
        .unwrap_or_default()
    );
  let next = current.toggled();
  if let Err(error) = style.set_property(
    "display",
    next.display_value()
  ) {
    tracing::error!(error = ?error, "failed to set subtasks display");
    return;
  }

  if let Some(icon) =
    button.query_selector("i").ok().flatten()
  {
    let classes = icon.class_list();
    if let Err(error) = classes
      .remove_1(current.icon_class())
      .and_then(|()| {
        classes.add_1(next.icon_class())
      })
    {
      tracing::warn!(error = ?error, "failed to swap subtasks icon");
    }
  }
}

fn bind_delete_actions(
  config: &Rc<UiConfig>
) -> usize {
  let mut bound = 0_usize;
  for kind in ResourceKind::all() {
    for button in dom::query_all(
      kind.delete_button_selector()
    ) {
      let Some(id) =
        read_resource_id(&button, kind)
      else {
        continue;
      };
      let config = config.clone();
      let target = button.clone();
      EventListener::new(
        &button,
        "click",
        move |_| {
          request_delete(
            kind,
            id.clone(),
            target.clone(),
            &config
          );
        }
      )
      .forget();
      bound += 1;
    }
  }
  tracing::debug!(
    bound,
    "bound delete actions"
  );
  bound
}

fn confirm_prompt(
  kind: ResourceKind,
  config: &UiConfig
) -> &str {
  match kind {
    | ResourceKind::Task => {
      &config.messages.confirm_delete_task
    }
    | ResourceKind::Subtask => {
      &config
        .messages
        .confirm_delete_subtask
    }
  }
}

/// A delete the user has agreed to.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DeletePlan {
  kind: ResourceKind,
  id:   ResourceId,
  path: String
}

/// Nothing is requested unless the
/// confirmation was accepted.
fn delete_plan(
  confirmed: bool,
  kind: ResourceKind,
  id: ResourceId
) -> Option<DeletePlan> {
  if !confirmed {
    return None;
  }
  let path = kind.resource_path(&id);
  Some(DeletePlan { kind, id, path })
}

fn request_delete(
  kind: ResourceKind,
  id: ResourceId,
  button: Element,
  config: &UiConfig
) {
  let confirmed = gloo::dialogs::confirm(
    confirm_prompt(kind, config)
  );
  let Some(plan) =
    delete_plan(confirmed, kind, id.clone())
  else {
    tracing::debug!(%id, "delete of {} declined", kind.label());
    return;
  };

  let failure_message =
    config.messages.delete_error.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      let DeletePlan { kind, id, path } = plan;
      match api::delete_resource(kind, &path)
        .await
      {
        | Ok(()) => {
          match dom::closest(
            &button,
            kind.item_selector()
          ) {
            | Some(item) => {
              item.remove();
              tracing::info!(%id, "removed deleted {}", kind.label());
            }
            | None => {
              tracing::warn!(
                %id,
                selector = kind.item_selector(),
                "deleted row not found"
              );
            }
          }
        }
        | Err(error) => {
          tracing::warn!(
            %id,
            %error,
            "failed to delete {}",
            kind.label()
          );
          gloo::dialogs::alert(
            &failure_message
          );
        }
      }
    }
  );
}
