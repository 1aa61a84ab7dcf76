use super::*;

/// The fields extracted from one rendered comment block.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ParsedComment {
  pub(crate) author: String,
  pub(crate) author_id: Option<String>,
  pub(crate) content: String,
  pub(crate) date: Option<DateTime<FixedOffset>>,
  pub(crate) id: String,
}

impl ParsedComment {
  pub(crate) fn is_deleted(&self) -> bool {
    self.content == DELETED_SENTINEL
  }
}

/// A top-level comment together with its replies, in page order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ParsedThread {
  pub(crate) replies: Vec<ParsedComment>,
  pub(crate) root: ParsedComment,
}
