use super::*;

impl<R: Remote> App<R> {
  fn announce(&mut self, context: &BrowseContext) -> Result {
    let line = match (&context.viewer, context.comments_enabled) {
      (Some(viewer), true) => format!(
        "You will leave comments as {}.",
        self.prompt.paint(viewer.as_str().blue().bold())
      ),
      (_, false) => self.prompt.paint(
        "Sending new comments has been disabled here, but you can browse \
         existing ones."
          .red(),
      ),
      (None, true) => self
        .prompt
        .paint("You are not signed in, so you can only browse comments.".dim()),
    };

    self.prompt.say(line)
  }

  /// Runs the comment browser until the viewer quits or input ends.
  pub(crate) async fn browse_comments(
    &mut self,
    resource: Resource,
    jump_to: Option<&str>,
  ) -> Result {
    let context = BrowseContext {
      comments_enabled: self.comments_enabled,
      resource,
      viewer: self.session.as_ref().map(|session| session.username.clone()),
    };

    self.announce(&context)?;

    let mut state = self.load_comments(&context, jump_to).await?;

    loop {
      self.render(&state)?;

      let choices = Command::choices(&context, &state);

      let Some(command) = self.prompt.choose(&choices).await? else {
        break;
      };

      if self.dispatch(&context, &mut state, command).await?.is_break() {
        break;
      }
    }

    Ok(())
  }

  fn current_index(state: &BrowseState) -> Result<usize> {
    state.current.context("no comment is selected")
  }

  async fn delete_current(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
  ) -> Result {
    let index = Self::current_index(state)?;

    let (content, id) = state
      .current_comment()
      .map(|comment| (truncate(&comment.content, 80), comment.id.clone()))
      .context("no comment is selected")?;

    if !self
      .prompt
      .confirm(&format!("Really delete \"{content}\"? "))
      .await?
    {
      return self.prompt.say("Okay, the comment wasn't deleted.");
    }

    if let Err(error) =
      comment_writer::delete_comment(&self.remote, &context.resource, &id).await
    {
      return self
        .prompt
        .say(format!("Could not delete the comment: {error}"));
    }

    state.current = state.comments.remove(index)?;

    self.prompt.say("Deleted the comment!")
  }

  /// Runs one command to completion.
  pub(crate) async fn dispatch(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
    command: Command,
  ) -> Result<ControlFlow<()>> {
    match command {
      Command::Quit => return Ok(ControlFlow::Break(())),
      Command::Reply | Command::Write if !context.comments_enabled => {
        let notice = self
          .prompt
          .paint("Sorry, commenting is disabled here.".red());
        self.prompt.say(notice)?;
      }
      Command::Author => {
        let author = state
          .current_comment()
          .map(|comment| comment.author.clone())
          .context("no comment is selected")?;

        if let Err(error) = Box::pin(self.browse_profile(&author)).await {
          warn!(%author, "could not open profile: {error:#}");

          self.prompt.say(format!(
            "Could not open the profile of {author}: {error:#}"
          ))?;
        }
      }
      Command::Delete => self.delete_current(context, state).await?,
      Command::Jump => {
        let id = self.prompt.ask("Comment ID: ").await?;
        let id = id.trim();

        if !id.is_empty() {
          self.jump(context, state, id).await?;
        }
      }
      Command::LastReply => {
        state.current = state
          .current_comment()
          .and_then(|comment| comment.replies.last().copied());
      }
      Command::More => self.load_more(context, state).await?,
      Command::Next => {
        state.current = state.current_comment().and_then(|comment| comment.next);
      }
      Command::Out => {
        state.current =
          state.current_comment().and_then(|comment| comment.parent);
      }
      Command::Previous => {
        state.current =
          state.current_comment().and_then(|comment| comment.previous);
      }
      Command::Replies => {
        state.current = state
          .current_comment()
          .and_then(|comment| comment.replies.first().copied());
      }
      Command::Reply => self.reply(context, state).await?,
      Command::Write => self.write(context, state).await?,
    }

    Ok(ControlFlow::Continue(()))
  }

  async fn jump(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
    id: &str,
  ) -> Result {
    if let Some(found) = state.comments.find(id) {
      state.current = Some(found);
      return Ok(());
    }

    self.prompt.say(format!("Finding comment {id}..."))?;

    let outcome = jump_search::find_by_id(
      &self.remote,
      &mut state.comments,
      &context.resource,
      id,
      state.page,
    )
    .await?;

    state.page = outcome.last_page;
    state.no_more_comments |= outcome.reached_end;

    if let Some(found) = outcome.found {
      state.current = Some(found);
      self.prompt.say("Found!")
    } else {
      if state.current.is_none() {
        state.current = state.comments.first();
      }

      self.prompt.say("Comment not found, sorry.")
    }
  }

  pub(crate) async fn load_comments(
    &mut self,
    context: &BrowseContext,
    jump_to: Option<&str>,
  ) -> Result<BrowseState> {
    let mut state = BrowseState::default();

    if let Some(id) = jump_to {
      self.jump(context, &mut state, id).await?;
    } else {
      let page = page::fetch_page(&self.remote, &context.resource, 1).await?;

      state.page = 1;
      state.no_more_comments = page.is_last;
      state.comments.append_page(page.threads);
      state.current = state.comments.first();
    }

    Ok(state)
  }

  async fn load_more(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
  ) -> Result {
    let number = state.page.saturating_add(1);

    let page =
      page::fetch_page(&self.remote, &context.resource, number).await?;

    state.page = number;

    if page.threads.is_empty() {
      state.no_more_comments = true;
      return self.prompt.say("There are no more comments.");
    }

    state.no_more_comments = page.is_last;

    let added = state.comments.append_page(page.threads);

    state.current = added.first().copied();

    Ok(())
  }

  fn render(&mut self, state: &BrowseState) -> Result {
    let Some(comment) = state.current_comment() else {
      return self.prompt.say("There are no comments here, yet.");
    };

    let header = self
      .prompt
      .paint(format!("{}  (ID: {})", comment.timestamp(), comment.id).dim());

    let author = self.prompt.paint(comment.author.as_str().blue().bold());

    self.prompt.say(header)?;
    self.prompt.say(format!("{author}: {}", comment.content))?;

    if !comment.replies.is_empty() {
      let replies = self
        .prompt
        .paint(pluralize_replies(comment.replies.len()).dim());

      self.prompt.say(replies)?;
    }

    Ok(())
  }

  async fn reply(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
  ) -> Result {
    let (commentee_id, root) = state
      .current_comment()
      .map(|comment| (comment.author_id.clone(), comment.thread_top))
      .context("no comment is selected")?;

    let root_id = state
      .comments
      .get(root)
      .map(|comment| comment.id.clone())
      .context("thread root is missing")?;

    let Some(reply) = self
      .send(
        context,
        "Reply with",
        commentee_id.as_deref(),
        Some(root_id.as_str()),
      )
      .await?
    else {
      return Ok(());
    };

    state.current = Some(state.comments.push_reply(root, reply)?);

    self.prompt.say("Sent.")
  }

  /// Reads a message and posts it. Validation failures, rejections and
  /// transport failures are reported and yield `None`.
  async fn send(
    &mut self,
    context: &BrowseContext,
    label: &str,
    commentee_id: Option<&str>,
    thread_root_id: Option<&str>,
  ) -> Result<Option<ParsedComment>> {
    let viewer = context.viewer.as_deref().unwrap_or("guest");

    let content = self.prompt.ask(&format!("{label}, as {viewer}: ")).await?;

    if let Err(error) = comment_writer::validate_content(&content) {
      self.prompt.say(error)?;
      return Ok(None);
    }

    match comment_writer::post_comment(
      &self.remote,
      &context.resource,
      &content,
      commentee_id,
      thread_root_id,
    )
    .await
    {
      Ok(posted) => Ok(Some(posted)),
      Err(error) => {
        if let Some(rejection) = error.downcast_ref::<RemoteRejection>() {
          self.prompt.say(format!(
            "Could not send the comment (status {}): {}",
            rejection.status,
            truncate(rejection.body.trim(), 200)
          ))?;
        } else {
          self
            .prompt
            .say(format!("Could not send the comment: {error:#}"))?;
        }

        Ok(None)
      }
    }
  }

  async fn write(
    &mut self,
    context: &BrowseContext,
    state: &mut BrowseState,
  ) -> Result {
    let Some(comment) = self.send(context, "Comment", None, None).await? else {
      return Ok(());
    };

    state.current = Some(state.comments.push_root_front(comment));

    self.prompt.say("Sent.")
  }
}
