use {
  super::*,
  std::{
    cell::{Cell, RefCell},
    rc::Rc,
  },
};

pub(crate) const COMMENT_DATE: &str = "2019-03-14T20:12:34Z";

pub(crate) fn comment_html(id: &str, author: &str, content: &str) -> String {
  format!(
    r#"<div id="comments-{id}" class="comment" data-comment-id="{id}">
  <div class="info">
    <div class="name"><a href="/users/{author}">{author}</a></div>
    <div class="content">
      {content}
    </div>
    <div>
      <span class="time" title="{COMMENT_DATE}">March 14, 2019</span>
      <a class="reply" data-comment-id="{id}" data-commentee-id="{author}-id">reply</a>
    </div>
  </div>
</div>"#
  )
}

/// A page of `count` threads numbered from `start`, each with one reply.
pub(crate) fn numbered_page(start: usize, count: usize) -> String {
  let threads = (start..start + count)
    .map(|n| {
      thread_html(
        &comment_html(&n.to_string(), &format!("user{n}"), &format!("comment {n}")),
        &[comment_html(
          &format!("{n}-r"),
          "replier",
          &format!("reply to {n}"),
        )],
      )
    })
    .collect::<Vec<_>>();

  page_html(&threads)
}

pub(crate) fn page_html(threads: &[String]) -> String {
  format!("<ul class=\"comments\">{}</ul>", threads.concat())
}

pub(crate) fn parsed_comment(id: &str) -> ParsedComment {
  ParsedComment {
    author: format!("user{id}"),
    author_id: Some(format!("user{id}-id")),
    content: format!("comment {id}"),
    date: None,
    id: id.to_string(),
  }
}

pub(crate) fn thread_html(root: &str, replies: &[String]) -> String {
  let replies = replies
    .iter()
    .map(|reply| format!("<li class=\"reply\">{reply}</li>"))
    .collect::<String>();

  format!(
    "<li class=\"top-level-reply\">{root}<ul class=\"replies\">{replies}</ul></li>"
  )
}

/// In-memory site that serves canned pages and records every request.
#[derive(Default)]
pub(crate) struct FakeRemote {
  pub(crate) add_response: RefCell<Option<RemoteResponse>>,
  pub(crate) added: RefCell<Vec<NewComment>>,
  pub(crate) delete_status: Cell<u16>,
  pub(crate) deleted: RefCell<Vec<String>>,
  /// Page whose fetch fails as if the connection dropped.
  pub(crate) failing_page: Option<usize>,
  pub(crate) fetched_pages: RefCell<Vec<usize>>,
  pub(crate) pages: Vec<String>,
  pub(crate) profile: String,
  pub(crate) project: String,
}

impl FakeRemote {
  pub(crate) fn requests(&self) -> usize {
    self.fetched_pages.borrow().len()
      + self.added.borrow().len()
      + self.deleted.borrow().len()
  }

  pub(crate) fn with_pages(pages: Vec<String>) -> Self {
    Self {
      delete_status: Cell::new(200),
      pages,
      ..Self::default()
    }
  }
}

impl Remote for FakeRemote {
  async fn add_comment(
    &self,
    _resource: &Resource,
    comment: &NewComment,
  ) -> Result<RemoteResponse> {
    self.added.borrow_mut().push(comment.clone());

    self
      .add_response
      .borrow()
      .clone()
      .context("connection refused")
  }

  async fn delete_comment(
    &self,
    _resource: &Resource,
    id: &str,
  ) -> Result<RemoteResponse> {
    self.deleted.borrow_mut().push(id.to_string());

    Ok(RemoteResponse {
      body: String::new(),
      status: self.delete_status.get(),
    })
  }

  async fn fetch_comments(
    &self,
    _resource: &Resource,
    page: usize,
  ) -> Result<String> {
    self.fetched_pages.borrow_mut().push(page);

    ensure!(
      self.failing_page != Some(page),
      "connection reset while loading page {page}"
    );

    Ok(
      page
        .checked_sub(1)
        .and_then(|index| self.pages.get(index))
        .cloned()
        .unwrap_or_else(|| page_html(&[])),
    )
  }

  async fn fetch_profile(&self, _username: &str) -> Result<String> {
    Ok(self.profile.clone())
  }

  async fn fetch_project(&self, _id: &str) -> Result<String> {
    Ok(self.project.clone())
  }
}

/// Output sink that tests can read back after handing it to a [`Prompt`].
#[derive(Clone, Default)]
pub(crate) struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
  pub(crate) fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.borrow()).into_owned()
  }
}

impl Write for SharedOutput {
  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }

  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.borrow_mut().extend_from_slice(buf);
    Ok(buf.len())
  }
}

pub(crate) fn scripted(input: &str) -> (Prompt, SharedOutput) {
  let output = SharedOutput::default();

  let prompt = Prompt::new(
    io::Cursor::new(input.as_bytes().to_vec()),
    output.clone(),
    false,
  );

  (prompt, output)
}

pub(crate) fn profile_html() -> String {
  r#"<html><body>
<div id="profile-data">
  <h2>maker</h2>
  <p class="profile-details">
    <span class="group">
      Scratcher
    </span>
    Joined <span title="2014-01-02T00:00:00Z">10 years ago</span>
    <span class="location">Moon</span>
  </p>
</div>
<div id="bio-readonly"><div class="overview">I make games.</div></div>
<div id="status-readonly"><div class="overview">A platformer.</div></div>
<div class="player">
  <div class="featured-project-heading">Featured Project</div>
  <a class="project-name" href="/projects/1234/">Jumper</a>
</div>
</body></html>"#
    .to_string()
}

pub(crate) fn project_html() -> String {
  r#"<html><body>
<div id="project" data-project-id="1234">
  <h2 id="title">Jumper</h2>
  <span id="owner">maker</span>
  <div id="instructions"><div class="overview">
    Press space to jump.
  </div></div>
  <div id="description"><div class="overview">Thanks to everyone.
  Music by a friend.</div></div>
</div>
</body></html>"#
    .to_string()
}
