use std::fmt;

use chrono::NaiveDate;
use gloo::net::http::Request;
use taskbook_shared::{
  DeleteResponse,
  ResourceKind,
  TaskDto,
  ViewType,
  calendar_tasks_path
};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
  /// The request never produced a
  /// response.
  Transport(String),
  Status(u16),
  Decode(String),
  /// The server answered but reported
  /// `success: false`.
  Rejected
}

impl fmt::Display for ApiError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | Self::Transport(detail) => {
        write!(f, "request failed: {detail}")
      }
      | Self::Status(status) => {
        write!(
          f,
          "unexpected http status {status}"
        )
      }
      | Self::Decode(detail) => {
        write!(f, "decode error: {detail}")
      }
      | Self::Rejected => {
        f.write_str(
          "server reported failure"
        )
      }
    }
  }
}

impl std::error::Error for ApiError {}

impl From<gloo::net::Error> for ApiError {
  fn from(error: gloo::net::Error) -> Self {
    match error {
      | gloo::net::Error::SerdeError(
        error
      ) => Self::Decode(error.to_string()),
      | other => {
        Self::Transport(other.to_string())
      }
    }
  }
}

pub async fn fetch_completed_tasks(
  date: NaiveDate,
  view: ViewType
) -> Result<Vec<TaskDto>, ApiError> {
  let url = calendar_tasks_path(
    &date.format("%Y-%m-%d").to_string(),
    view
  );
  tracing::debug!(%url, "loading completed tasks");

  let response =
    Request::get(&url).send().await?;
  ensure_success_status(
    response.ok(),
    response.status()
  )?;
  let tasks =
    response.json::<Vec<TaskDto>>().await?;

  tracing::debug!(
    count = tasks.len(),
    %date,
    view = view.as_key(),
    "completed tasks loaded"
  );
  Ok(tasks)
}

/// Issues the DELETE and checks the
/// `success` flag of the JSON body. The
/// http status itself is not consulted.
pub async fn delete_resource(
  kind: ResourceKind,
  path: &str
) -> Result<(), ApiError> {
  tracing::info!(%path, "deleting {}", kind.label());

  let response =
    Request::delete(path).send().await?;
  let status = response.status();
  let body = response.text().await?;

  decode_delete_body(&body).inspect_err(
    |error| {
      tracing::warn!(
        %path,
        status,
        %error,
        "delete not confirmed"
      );
    }
  )
}

fn ensure_success_status(
  ok: bool,
  status: u16
) -> Result<(), ApiError> {
  if ok {
    Ok(())
  } else {
    Err(ApiError::Status(status))
  }
}

fn decode_delete_body(
  body: &str
) -> Result<(), ApiError> {
  let parsed: DeleteResponse =
    serde_json::from_str(body).map_err(
      |error| {
        ApiError::Decode(error.to_string())
      }
    )?;

  if parsed.success {
    Ok(())
  } else {
    Err(ApiError::Rejected)
  }
}
