use super::*;

/// Status and raw body of a write request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RemoteResponse {
  pub(crate) body: String,
  pub(crate) status: u16,
}

impl RemoteResponse {
  pub(crate) fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// JSON body of a comment write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct NewComment {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) commentee_id: Option<String>,
  pub(crate) content: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) parent_id: Option<String>,
}

/// Everything the browser needs from the site.
pub(crate) trait Remote {
  async fn add_comment(
    &self,
    resource: &Resource,
    comment: &NewComment,
  ) -> Result<RemoteResponse>;

  async fn delete_comment(
    &self,
    resource: &Resource,
    id: &str,
  ) -> Result<RemoteResponse>;

  /// One page of rendered comments, `page` counting from 1.
  async fn fetch_comments(&self, resource: &Resource, page: usize)
  -> Result<String>;

  async fn fetch_profile(&self, username: &str) -> Result<String>;

  async fn fetch_project(&self, id: &str) -> Result<String>;
}
