use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileCommand {
  Comments,
  FeaturedProject,
  Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProjectCommand {
  Author,
  Comments,
  Notes,
  Quit,
}

pub(crate) struct App<R> {
  pub(crate) comments_enabled: bool,
  pub(crate) prompt: Prompt,
  pub(crate) remote: R,
  pub(crate) session: Option<Session>,
}

impl<R: Remote> App<R> {
  pub(crate) async fn browse_profile(&mut self, username: &str) -> Result {
    let html = self
      .remote
      .fetch_profile(username)
      .await
      .with_context(|| format!("failed to load the profile of {username}"))?;

    let profile = Profile::parse(&html)
      .with_context(|| format!("failed to read the profile of {username}"))?;

    loop {
      self.show_profile(&profile)?;

      let mut choices = vec![Choice {
        action: ProfileCommand::Quit,
        aliases: &["quit", "back"],
        help: "Quit browsing this profile.".into(),
        key: 'q',
        visible: true,
      }];

      if profile.featured_project.is_some() {
        choices.push(Choice {
          action: ProfileCommand::FeaturedProject,
          aliases: &["featured"],
          help: "Browse this user's featured project.".into(),
          key: 'f',
          visible: true,
        });
      }

      choices.push(Choice {
        action: ProfileCommand::Comments,
        aliases: &["comments"],
        help: "Browse comments.".into(),
        key: 'c',
        visible: true,
      });

      match self.prompt.choose(&choices).await? {
        None | Some(ProfileCommand::Quit) => break,
        Some(ProfileCommand::Comments) => {
          Box::pin(self.browse_comments(
            Resource::User {
              username: profile.username.clone(),
            },
            None,
          ))
          .await?;
        }
        Some(ProfileCommand::FeaturedProject) => {
          if let Some(featured) = &profile.featured_project {
            Box::pin(self.browse_project(&featured.id)).await?;
          }
        }
      }
    }

    Ok(())
  }

  pub(crate) async fn browse_project(&mut self, id: &str) -> Result {
    let project = self.load_project(id).await?;

    self.show_project(&project, true)?;

    loop {
      let mut choices = vec![Choice {
        action: ProjectCommand::Quit,
        aliases: &["quit", "back"],
        help: "Quit browsing this project.".into(),
        key: 'q',
        visible: true,
      }];

      if project.has_notes() {
        choices.push(Choice {
          action: ProjectCommand::Notes,
          aliases: &["notes"],
          help: "View instructions and notes/credits.".into(),
          key: 'N',
          visible: true,
        });
      }

      choices.extend([
        Choice {
          action: ProjectCommand::Author,
          aliases: &["author", "profile"],
          help: "Browse the profile of the author of this project.".into(),
          key: 'a',
          visible: true,
        },
        Choice {
          action: ProjectCommand::Comments,
          aliases: &["comments"],
          help: "Browse comments.".into(),
          key: 'c',
          visible: true,
        },
      ]);

      match self.prompt.choose(&choices).await? {
        None | Some(ProjectCommand::Quit) => break,
        Some(ProjectCommand::Author) => {
          Box::pin(self.browse_profile(&project.author)).await?;
        }
        Some(ProjectCommand::Comments) => {
          Box::pin(self.browse_comments(project.resource(), None)).await?;
        }
        Some(ProjectCommand::Notes) => self.show_notes(&project)?,
      }

      self.show_project(&project, false)?;
    }

    Ok(())
  }

  pub(crate) async fn load_project(&self, id: &str) -> Result<Project> {
    let html = self
      .remote
      .fetch_project(id)
      .await
      .with_context(|| format!("failed to load project {id}"))?;

    Project::parse(&html, id)
      .with_context(|| format!("failed to read project {id}"))
  }

  pub(crate) fn new(
    prompt: Prompt,
    remote: R,
    session: Option<Session>,
    comments_enabled: bool,
  ) -> Self {
    Self {
      comments_enabled,
      prompt,
      remote,
      session,
    }
  }

  /// Opens the page named on the command line.
  pub(crate) async fn run(&mut self, arguments: &Arguments) -> Result {
    let id = arguments.id.as_str();
    let jump = arguments.jump.as_deref();

    match arguments.kind {
      ResourceKind::Gallery => {
        self
          .browse_comments(
            Resource::Gallery {
              id: id.to_string(),
              viewer_is_owner: arguments.gallery_owner,
            },
            jump,
          )
          .await
      }
      ResourceKind::Project => match jump {
        Some(jump) => {
          let project = self.load_project(id).await?;
          self.browse_comments(project.resource(), Some(jump)).await
        }
        None => self.browse_project(id).await,
      },
      ResourceKind::User => match jump {
        Some(jump) => {
          self
            .browse_comments(
              Resource::User {
                username: id.to_string(),
              },
              Some(jump),
            )
            .await
        }
        None => self.browse_profile(id).await,
      },
    }
  }

  fn show_notes(&mut self, project: &Project) -> Result {
    for (label, text) in [
      ("Instructions:", &project.instructions),
      ("Notes and Credits:", &project.notes_and_credits),
    ] {
      if text.is_empty() {
        continue;
      }

      let label = self.prompt.paint(label.bold());

      self.prompt.say(label)?;
      self.prompt.say(text)?;
      self.prompt.say("")?;
    }

    Ok(())
  }

  fn show_profile(&mut self, profile: &Profile) -> Result {
    let joined = profile.join_date.map_or_else(
      || "unknown".to_string(),
      |date| date.format("%a %b %d %Y").to_string(),
    );

    let mut details = format!("{}; Joined {joined}", profile.rank);

    if !profile.location.is_empty() {
      details.push_str(&format!("; {}", profile.location));
    }

    let lines = [
      format!(
        "{}  {}",
        self.prompt.paint(profile.username.as_str().blue().bold()),
        self.prompt.paint(details.dim())
      ),
      format!(
        "{} {}",
        self.prompt.paint("About me:".bold()),
        profile.about_me
      ),
      format!(
        "{} {}",
        self.prompt.paint("What I'm working on:".bold()),
        profile.working_on
      ),
    ];

    for line in lines {
      self.prompt.say(line)?;
    }

    if let Some(featured) = &profile.featured_project {
      let line = format!(
        "{} {}",
        self.prompt.paint(format!("{}:", featured.heading).bold()),
        self.prompt.paint(featured.name.as_str().yellow())
      );

      self.prompt.say(line)?;
    }

    Ok(())
  }

  fn show_project(&mut self, project: &Project, first_time: bool) -> Result {
    let title = self.prompt.paint(project.title.as_str().yellow());

    let byline = self
      .prompt
      .paint(format!("by {}; id: {}", project.author, project.id).dim());

    self.prompt.say(title)?;
    self.prompt.say(byline)?;

    if first_time {
      self.prompt.say("")?;
      self.show_notes(project)?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::testing::*};

  fn app(input: &str) -> (App<FakeRemote>, SharedOutput) {
    let (prompt, output) = scripted(input);

    let remote = FakeRemote {
      profile: profile_html(),
      project: project_html(),
      ..FakeRemote::with_pages(vec![numbered_page(1, 2)])
    };

    (App::new(prompt, remote, None, true), output)
  }

  #[tokio::test]
  async fn gallery_opens_comments_directly() {
    let (mut app, output) = app("q\n");

    let arguments = Arguments::parse_from(["scratch-comments", "77", "gallery"]);

    app.run(&arguments).await.unwrap();

    assert_eq!(*app.remote.fetched_pages.borrow(), vec![1]);
    assert!(output.contents().contains("user1: comment 1"));
    assert!(output.contents().contains("only browse comments"));
  }

  #[tokio::test]
  async fn profile_leads_to_featured_project_and_comments() {
    let (mut app, output) = app("f\nc\nn\nq\nq\nq\n");

    app.browse_profile("maker").await.unwrap();

    let output = output.contents();

    assert!(output.contains("maker  Scratcher; Joined Thu Jan 02 2014; Moon"));
    assert!(output.contains("Featured Project: Jumper"));
    assert!(output.contains("by maker; id: 1234"));
    assert!(output.contains("Press space to jump."));
    assert!(output.contains("user2: comment 2"));
    assert!(output.contains("[qfc] "));
    assert!(output.contains("[qNac] "));
  }

  #[tokio::test]
  async fn project_jump_opens_comments_with_author_known() {
    let (mut app, output) = app("q\n");

    let arguments = Arguments::parse_from([
      "scratch-comments",
      "1234",
      "project",
      "--jump",
      "2-r",
    ]);

    app.run(&arguments).await.unwrap();

    let output = output.contents();

    assert!(output.contains("Found!"));
    assert!(output.contains("replier: reply to 2"));
  }
}
