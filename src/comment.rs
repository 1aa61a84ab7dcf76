use super::*;

/// A node in a [`CommentThread`] arena.
///
/// All links are indexes into the arena that owns the node. `parent` is set
/// only on replies, `replies` is only ever populated on top-level comments,
/// and `thread_top` points at the node itself for top-level comments.
#[derive(Clone, Debug)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) author_id: Option<String>,
  pub(crate) content: String,
  pub(crate) date: Option<DateTime<FixedOffset>>,
  pub(crate) id: String,
  pub(crate) next: Option<usize>,
  pub(crate) parent: Option<usize>,
  pub(crate) previous: Option<usize>,
  pub(crate) replies: Vec<usize>,
  pub(crate) thread_top: usize,
}

impl Comment {
  pub(crate) fn from_parsed(
    parsed: ParsedComment,
    parent: Option<usize>,
    thread_top: usize,
  ) -> Self {
    let ParsedComment {
      author,
      author_id,
      content,
      date,
      id,
    } = parsed;

    Self {
      author,
      author_id,
      content,
      date,
      id,
      next: None,
      parent,
      previous: None,
      replies: Vec::new(),
      thread_top,
    }
  }

  pub(crate) fn is_reply(&self) -> bool {
    self.parent.is_some()
  }

  pub(crate) fn timestamp(&self) -> String {
    self.date.map_or_else(
      || "unknown date".to_string(),
      |date| date.format("%a %b %d %Y %H:%M:%S").to_string(),
    )
  }
}
