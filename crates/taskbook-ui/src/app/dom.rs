use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element
};

pub(crate) fn document() -> Option<Document>
{
  web_sys::window()
    .and_then(|window| window.document())
}

pub(crate) fn element_by_id(
  id: &str
) -> Option<Element> {
  document().and_then(|document| {
    document.get_element_by_id(id)
  })
}

/// Every element matching `selector`
/// at call time.
pub(crate) fn query_all(
  selector: &str
) -> Vec<Element> {
  let Some(document) = document() else {
    return Vec::new();
  };

  let nodes = match document
    .query_selector_all(selector)
  {
    | Ok(nodes) => nodes,
    | Err(error) => {
      tracing::error!(
        selector,
        error = ?error,
        "invalid selector"
      );
      return Vec::new();
    }
  };

  (0..nodes.length())
    .filter_map(|index| nodes.get(index))
    .filter_map(|node| {
      node.dyn_into::<Element>().ok()
    })
    .collect()
}

pub(crate) fn query_first(
  selector: &str
) -> Option<Element> {
  document().and_then(|document| {
    document
      .query_selector(selector)
      .ok()
      .flatten()
  })
}

pub(crate) fn closest(
  element: &Element,
  selector: &str
) -> Option<Element> {
  element.closest(selector).ok().flatten()
}
