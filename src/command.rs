use super::*;

/// Commands of the comment browser, gated each turn by [`Command::gate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Author,
  Delete,
  Jump,
  LastReply,
  More,
  Next,
  Out,
  Previous,
  Quit,
  Replies,
  Reply,
  Write,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Gate {
  /// Accepted but left out of the prompt and help.
  Hidden,
  Offered,
  Unavailable,
}

impl Command {
  /// Prompt order.
  pub(crate) const CATALOG: [Command; 12] = [
    Command::Quit,
    Command::Write,
    Command::Next,
    Command::Previous,
    Command::Replies,
    Command::LastReply,
    Command::Out,
    Command::Author,
    Command::More,
    Command::Jump,
    Command::Delete,
    Command::Reply,
  ];

  pub(crate) fn aliases(self) -> &'static [&'static str] {
    match self {
      Self::Author => &["author", "profile"],
      Self::Delete => &["delete", "remove"],
      Self::Jump => &["jump"],
      Self::LastReply => &["last", "lastreply"],
      Self::More => &["more"],
      Self::Next => &["next"],
      Self::Out => &["out", "top"],
      Self::Previous => &["prev", "previous"],
      Self::Quit => &["quit", "back"],
      Self::Replies => &["in", "replies"],
      Self::Reply => &["reply"],
      Self::Write => &["write", "new"],
    }
  }

  pub(crate) fn choices(
    context: &BrowseContext,
    state: &BrowseState,
  ) -> Vec<Choice<Command>> {
    Self::CATALOG
      .into_iter()
      .filter_map(|command| {
        let visible = match command.gate(context, state) {
          Gate::Hidden => false,
          Gate::Offered => true,
          Gate::Unavailable => return None,
        };

        Some(Choice {
          action: command,
          aliases: command.aliases(),
          help: command.help(state),
          key: command.key(),
          visible,
        })
      })
      .collect()
  }

  pub(crate) fn gate(self, context: &BrowseContext, state: &BrowseState) -> Gate {
    let current = state.current_comment();

    let signed_in = context.viewer.is_some();

    let offered = match self {
      Self::Author => current.is_some(),
      Self::Delete => current.is_some_and(|comment| context.may_delete(comment)),
      Self::Jump | Self::Quit => true,
      Self::LastReply => current.is_some_and(|comment| comment.replies.len() > 1),
      Self::More => !state.no_more_comments,
      Self::Next => current.is_some_and(|comment| comment.next.is_some()),
      Self::Out => current.is_some_and(Comment::is_reply),
      Self::Previous => {
        current.is_some_and(|comment| comment.previous.is_some())
      }
      Self::Replies => current.is_some_and(|comment| !comment.replies.is_empty()),
      Self::Reply => signed_in && current.is_some(),
      Self::Write => signed_in && !current.is_some_and(Comment::is_reply),
    };

    match (offered, self) {
      (false, _) => Gate::Unavailable,
      (true, Self::Reply | Self::Write) if !context.comments_enabled => {
        Gate::Hidden
      }
      (true, _) => Gate::Offered,
    }
  }

  pub(crate) fn help(self, state: &BrowseState) -> String {
    match self {
      Self::Author => format!(
        "Browse the profile of this user, {}.",
        state
          .current_comment()
          .map_or("the author", |comment| comment.author.as_str())
      ),
      Self::Delete => "Delete this comment.".into(),
      Self::Jump => "Jump to a comment by its ID.".into(),
      Self::LastReply => "View the most recent reply.".into(),
      Self::More => "Load more comments.".into(),
      Self::Next => "View next comment.".into(),
      Self::Out => "Go out of this reply thread.".into(),
      Self::Previous => "View previous comment.".into(),
      Self::Quit => "Quit browsing comments.".into(),
      Self::Replies => "View replies.".into(),
      Self::Reply => "Reply to this comment.".into(),
      Self::Write => {
        "Write a new comment, to be sent to the top of this comment section."
          .into()
      }
    }
  }

  pub(crate) fn key(self) -> char {
    match self {
      Self::Author => 'a',
      Self::Delete => 'd',
      Self::Jump => 'j',
      Self::LastReply => 'I',
      Self::More => 'm',
      Self::Next => 'n',
      Self::Out => 'o',
      Self::Previous => 'p',
      Self::Quit => 'q',
      Self::Replies => 'i',
      Self::Reply => 'r',
      Self::Write => 'w',
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::testing::parsed_comment};

  fn context(viewer: Option<&str>, comments_enabled: bool) -> BrowseContext {
    BrowseContext {
      comments_enabled,
      resource: Resource::User {
        username: "owner".into(),
      },
      viewer: viewer.map(str::to_string),
    }
  }

  fn keys(context: &BrowseContext, state: &BrowseState) -> String {
    Command::choices(context, state)
      .into_iter()
      .filter(|choice| choice.visible)
      .map(|choice| choice.key)
      .collect()
  }

  fn state() -> BrowseState {
    let mut comments = CommentThread::default();

    comments.append_page(vec![
      ParsedThread {
        replies: vec![parsed_comment("1a"), parsed_comment("1b")],
        root: parsed_comment("1"),
      },
      ParsedThread {
        replies: Vec::new(),
        root: parsed_comment("2"),
      },
    ]);

    BrowseState {
      current: comments.first(),
      comments,
      no_more_comments: true,
      page: 1,
    }
  }

  #[test]
  fn anonymous_viewer_cannot_write_reply_or_delete() {
    let state = state();

    assert_eq!(keys(&context(None, true), &state), "qniIaj");
  }

  #[test]
  fn catalog_keys_are_unique() {
    let mut keys = Command::CATALOG.map(Command::key).to_vec();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Command::CATALOG.len());
  }

  #[test]
  fn disabled_commenting_hides_write_and_reply() {
    let state = state();
    let context = context(Some("someone"), false);

    assert_eq!(keys(&context, &state), "qniIaj");
    assert_eq!(Command::Write.gate(&context, &state), Gate::Hidden);
    assert_eq!(Command::Reply.gate(&context, &state), Gate::Hidden);
  }

  #[test]
  fn empty_section_offers_little() {
    let state = BrowseState::default();

    assert_eq!(keys(&context(Some("owner"), true), &state), "qwmj");
  }

  #[test]
  fn inside_a_thread_offers_out_but_not_write() {
    let mut state = state();
    state.current = state.comments.find("1a");
    state.no_more_comments = false;

    assert_eq!(keys(&context(Some("owner"), true), &state), "qnoamjdr");
  }

  #[test]
  fn profile_owner_is_offered_delete() {
    let state = state();

    assert_eq!(keys(&context(Some("owner"), true), &state), "qwniIajdr");
    assert_eq!(keys(&context(Some("someone"), true), &state), "qwniIajr");
  }
}
