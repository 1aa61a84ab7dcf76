use super::*;

/// One fetched page of top-level comments.
#[derive(Debug)]
pub(crate) struct Page {
  /// A short page means nothing follows it. A thread whose size is an exact
  /// multiple of `PAGE_LENGTH` needs one extra, empty fetch to find its end.
  pub(crate) is_last: bool,
  pub(crate) threads: Vec<ParsedThread>,
}

pub(crate) async fn fetch_page<R: Remote>(
  remote: &R,
  resource: &Resource,
  number: usize,
) -> Result<Page> {
  let html = remote
    .fetch_comments(resource, number)
    .await
    .with_context(|| {
      format!(
        "failed to load page {number} of comments on {} {}",
        resource.kind(),
        resource.id()
      )
    })?;

  let threads = parser::parse_page(&html)
    .with_context(|| format!("failed to parse page {number} of comments"))?;

  debug!(page = number, count = threads.len(), "fetched comment page");

  Ok(Page {
    is_last: threads.len() < PAGE_LENGTH,
    threads,
  })
}
