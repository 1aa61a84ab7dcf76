use super::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct JumpOutcome {
  pub(crate) found: Option<usize>,
  /// Number of the last non-empty page now loaded.
  pub(crate) last_page: usize,
  pub(crate) pages_fetched: usize,
  /// Whether a short or empty page was seen.
  pub(crate) reached_end: bool,
}

/// Looks for `id` among the loaded comments, then keeps loading pages after
/// `start_page` into `comments` until it shows up or a page comes back empty.
pub(crate) async fn find_by_id<R: Remote>(
  remote: &R,
  comments: &mut CommentThread,
  resource: &Resource,
  id: &str,
  start_page: usize,
) -> Result<JumpOutcome> {
  let mut outcome = JumpOutcome {
    found: comments.find(id),
    last_page: start_page,
    pages_fetched: 0,
    reached_end: false,
  };

  while outcome.found.is_none() {
    let number = outcome.last_page.saturating_add(1);

    let page = page::fetch_page(remote, resource, number).await?;

    outcome.pages_fetched += 1;

    if page.threads.is_empty() {
      outcome.reached_end = true;
      break;
    }

    outcome.reached_end |= page.is_last;
    outcome.last_page = number;

    let added = comments.append_page(page.threads);

    outcome.found = added
      .iter()
      .flat_map(|&root| {
        std::iter::once(root).chain(comments.replies(root).iter().copied())
      })
      .find(|&index| {
        comments
          .get(index)
          .is_some_and(|comment| comment.id == id)
      });
  }

  debug!(
    id,
    found = outcome.found.is_some(),
    pages = outcome.pages_fetched,
    "jump search finished"
  );

  Ok(outcome)
}
