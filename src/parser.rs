use super::*;

struct CommentSelectors {
  author: Selector,
  author_id: Selector,
  comment: Selector,
  content: Selector,
  date: Selector,
  reply: Selector,
  thread: Selector,
}

impl CommentSelectors {
  fn new() -> Result<Self> {
    Ok(Self {
      author: selector(".name a")?,
      author_id: selector(".reply[data-commentee-id]")?,
      comment: selector(".comment")?,
      content: selector(".content")?,
      date: selector(".time[title]")?,
      reply: selector(".reply .comment")?,
      thread: selector(".top-level-reply")?,
    })
  }

  fn parse_comment(&self, element: ElementRef) -> Result<ParsedComment> {
    let id = attribute(element, "data-comment-id")
      .filter(|id| !id.is_empty())
      .context("comment block has no data-comment-id")?;

    let date = element
      .select(&self.date)
      .next()
      .and_then(|time| time.value().attr("title"))
      .and_then(parse_date);

    Ok(ParsedComment {
      author: first_text(element, &self.author),
      author_id: element
        .select(&self.author_id)
        .next()
        .and_then(|reply| attribute(reply, "data-commentee-id")),
      content: first_text(element, &self.content),
      date,
      id,
    })
  }
}

pub(crate) fn attribute(element: ElementRef, name: &str) -> Option<String> {
  element.value().attr(name).map(str::to_string)
}

/// Text of the first match with only its ends trimmed, so line breaks
/// inside the block survive.
pub(crate) fn block_text(element: ElementRef, selector: &Selector) -> String {
  element
    .select(selector)
    .next()
    .map(|found| found.text().collect::<String>().trim().to_string())
    .unwrap_or_default()
}

pub(crate) fn first_text(element: ElementRef, selector: &Selector) -> String {
  element
    .select(selector)
    .next()
    .map(|found| normalize_whitespace(&found.text().collect::<String>()))
    .unwrap_or_default()
}

fn has_class(element: ElementRef, class: &str) -> bool {
  element.value().classes().any(|name| name == class)
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, the latter read
/// as midnight UTC.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<FixedOffset>> {
  DateTime::parse_from_rfc3339(text).ok().or_else(|| {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
      .ok()?
      .and_hms_opt(0, 0, 0)
      .map(|midnight| midnight.and_utc().fixed_offset())
  })
}

pub(crate) fn selector(css: &'static str) -> Result<Selector> {
  Selector::parse(css).map_err(|error| anyhow!("invalid selector `{css}`: {error}"))
}

/// Parses one page of rendered comment threads, dropping deleted entries.
pub(crate) fn parse_page(html: &str) -> Result<Vec<ParsedThread>> {
  let selectors = CommentSelectors::new()?;

  let document = Html::parse_fragment(html);

  let mut threads = Vec::new();

  for block in document.select(&selectors.thread) {
    let root = block
      .children()
      .filter_map(ElementRef::wrap)
      .find(|child| has_class(*child, "comment"))
      .context("comment thread has no top-level comment")?;

    let root = selectors.parse_comment(root)?;

    if root.is_deleted() {
      continue;
    }

    let mut replies = Vec::new();

    for reply in block.select(&selectors.reply) {
      let reply = selectors.parse_comment(reply)?;

      if !reply.is_deleted() {
        replies.push(reply);
      }
    }

    threads.push(ParsedThread { replies, root });
  }

  Ok(threads)
}

/// Parses the fragment echoed back after posting a comment.
pub(crate) fn parse_single(html: &str) -> Result<ParsedComment> {
  let selectors = CommentSelectors::new()?;

  let document = Html::parse_fragment(html);

  let comment = document
    .select(&selectors.comment)
    .next()
    .context("response contained no comment")?;

  selectors.parse_comment(comment)
}
