use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
  #[error("Not sending comment (empty input).")]
  Blank,
  #[error(
    "Message too long ({length} > {max} characters).",
    max = MAX_COMMENT_LENGTH
  )]
  TooLong { length: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the site rejected the request with status {status}")]
pub(crate) struct RemoteRejection {
  pub(crate) body: String,
  pub(crate) status: u16,
}

pub(crate) fn validate_content(content: &str) -> Result<(), ValidationError> {
  let length = content.chars().count();

  if length > MAX_COMMENT_LENGTH {
    return Err(ValidationError::TooLong { length });
  }

  if content.trim().is_empty() {
    return Err(ValidationError::Blank);
  }

  Ok(())
}

/// Posts a comment, or a reply when `thread_root_id` is given, and parses
/// the echoed comment. Content must already have passed
/// [`validate_content`].
pub(crate) async fn post_comment<R: Remote>(
  remote: &R,
  resource: &Resource,
  content: &str,
  commentee_id: Option<&str>,
  thread_root_id: Option<&str>,
) -> Result<ParsedComment> {
  validate_content(content)?;

  let comment = NewComment {
    commentee_id: commentee_id
      .filter(|id| !id.is_empty())
      .map(str::to_string),
    content: content.to_string(),
    parent_id: thread_root_id
      .filter(|id| !id.is_empty())
      .map(str::to_string),
  };

  let response = remote.add_comment(resource, &comment).await?;

  if response.status != 200 {
    warn!(
      status = response.status,
      body = %response.body,
      "comment was rejected"
    );

    return Err(
      RemoteRejection {
        body: response.body,
        status: response.status,
      }
      .into(),
    );
  }

  let posted = parser::parse_single(&response.body)
    .context("could not read the posted comment")?;

  info!(id = %posted.id, reply = thread_root_id.is_some(), "posted comment");

  Ok(posted)
}

/// Asks the site to delete a comment. Only the status is checked.
pub(crate) async fn delete_comment<R: Remote>(
  remote: &R,
  resource: &Resource,
  id: &str,
) -> Result {
  let response = remote.delete_comment(resource, id).await?;

  if !response.is_success() {
    warn!(status = response.status, id, "delete was rejected");

    return Err(
      RemoteRejection {
        body: response.body,
        status: response.status,
      }
      .into(),
    );
  }

  info!(id, "deleted comment");

  Ok(())
}
