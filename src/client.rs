use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
  session: Option<Session>,
}

impl Client {
  fn comments_url(&self, resource: &Resource) -> String {
    format!(
      "{}/site-api/comments/{}/{}",
      self.base_url,
      resource.kind(),
      resource.id()
    )
  }

  pub(crate) fn new(base_url: &str, session: Option<Session>) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
      session,
    }
  }

  async fn get_text(&self, url: String) -> Result<String> {
    debug!(%url, "fetching");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();

    ensure!(
      status.is_success(),
      "request to {url} failed with status {status}"
    );

    response
      .text()
      .await
      .with_context(|| format!("could not read response from {url}"))
  }

  async fn post_json<T: Serialize>(
    &self,
    url: String,
    body: &T,
  ) -> Result<RemoteResponse> {
    let session = self
      .session
      .as_ref()
      .context("writing comments requires a signed-in session")?;

    debug!(%url, "posting");

    let response = self
      .client
      .post(&url)
      .header(reqwest::header::COOKIE, session.cookie())
      .header("X-CSRFToken", &session.csrf_token)
      .header(reqwest::header::REFERER, &self.base_url)
      .json(body)
      .send()
      .await
      .with_context(|| format!("request to {url} failed"))?;

    let status = response.status().as_u16();

    let body = response
      .text()
      .await
      .with_context(|| format!("could not read response from {url}"))?;

    Ok(RemoteResponse { body, status })
  }
}

impl Remote for Client {
  async fn add_comment(
    &self,
    resource: &Resource,
    comment: &NewComment,
  ) -> Result<RemoteResponse> {
    self
      .post_json(format!("{}/add/", self.comments_url(resource)), comment)
      .await
  }

  async fn delete_comment(
    &self,
    resource: &Resource,
    id: &str,
  ) -> Result<RemoteResponse> {
    self
      .post_json(
        format!("{}/del/", self.comments_url(resource)),
        &serde_json::json!({ "id": id }),
      )
      .await
  }

  async fn fetch_comments(
    &self,
    resource: &Resource,
    page: usize,
  ) -> Result<String> {
    self
      .get_text(format!(
        "{}/?page={page}&limit={PAGE_LENGTH}",
        self.comments_url(resource)
      ))
      .await
  }

  async fn fetch_profile(&self, username: &str) -> Result<String> {
    self
      .get_text(format!("{}/users/{username}/", self.base_url))
      .await
  }

  async fn fetch_project(&self, id: &str) -> Result<String> {
    self
      .get_text(format!("{}/projects/{id}/", self.base_url))
      .await
  }
}
