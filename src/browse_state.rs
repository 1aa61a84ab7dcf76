use super::*;

/// Fixed facts about the comment section being browsed.
#[derive(Clone, Debug)]
pub(crate) struct BrowseContext {
  pub(crate) comments_enabled: bool,
  pub(crate) resource: Resource,
  /// Username of the signed-in viewer, if any.
  pub(crate) viewer: Option<String>,
}

impl BrowseContext {
  pub(crate) fn may_delete(&self, comment: &Comment) -> bool {
    self
      .viewer
      .as_deref()
      .is_some_and(|viewer| self.resource.viewer_can_delete(viewer, &comment.author))
  }
}

/// Everything the comment browser mutates between renders.
#[derive(Debug, Default)]
pub(crate) struct BrowseState {
  pub(crate) comments: CommentThread,
  pub(crate) current: Option<usize>,
  pub(crate) no_more_comments: bool,
  /// Number of the last page loaded.
  pub(crate) page: usize,
}

impl BrowseState {
  pub(crate) fn current_comment(&self) -> Option<&Comment> {
    self.current.and_then(|index| self.comments.get(index))
  }
}
