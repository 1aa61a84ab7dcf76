use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ResourceKind {
  Gallery,
  Project,
  User,
}

/// The page whose comment section is being browsed, with what the client
/// knows about its ownership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resource {
  Gallery { id: String, viewer_is_owner: bool },
  Project { author: String, id: String },
  User { username: String },
}

impl Resource {
  pub(crate) fn id(&self) -> &str {
    match self {
      Self::Gallery { id, .. } | Self::Project { id, .. } => id,
      Self::User { username } => username,
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Gallery { .. } => "gallery",
      Self::Project { .. } => "project",
      Self::User { .. } => "user",
    }
  }

  /// Client-side mirror of the site's delete policy. The server still
  /// decides.
  pub(crate) fn viewer_can_delete(
    &self,
    viewer: &str,
    comment_author: &str,
  ) -> bool {
    match self {
      Self::Gallery {
        viewer_is_owner, ..
      } => *viewer_is_owner && comment_author == viewer,
      Self::Project { author, .. } => author == viewer,
      Self::User { username } => username == viewer,
    }
  }
}
