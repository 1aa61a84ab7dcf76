use super::*;

/// Arena holding every comment loaded for one comment section.
///
/// `roots` is the ordered top-level list; each root owns its ordered
/// `replies`. Removed nodes stay in the arena but are no longer reachable
/// from either list.
#[derive(Debug, Default)]
pub(crate) struct CommentThread {
  nodes: Vec<Comment>,
  roots: Vec<usize>,
}

impl CommentThread {
  fn alloc(&mut self, parsed: ParsedComment, parent: Option<usize>) -> usize {
    let index = self.nodes.len();

    let thread_top = parent.unwrap_or(index);

    self
      .nodes
      .push(Comment::from_parsed(parsed, parent, thread_top));

    index
  }

  pub(crate) fn append_page(&mut self, threads: Vec<ParsedThread>) -> Vec<usize> {
    let mut added = Vec::with_capacity(threads.len());

    for ParsedThread { replies, root } in threads {
      let root = self.alloc(root, None);

      for reply in replies {
        let reply = self.alloc(reply, Some(root));
        self.nodes[root].replies.push(reply);
      }

      self.relink_replies(root);

      self.roots.push(root);

      added.push(root);
    }

    relink(&mut self.nodes, &self.roots);

    added
  }

  pub(crate) fn find(&self, id: &str) -> Option<usize> {
    self
      .roots
      .iter()
      .flat_map(|&root| {
        std::iter::once(root).chain(self.replies(root).iter().copied())
      })
      .find(|&index| self.nodes[index].id == id)
  }

  pub(crate) fn first(&self) -> Option<usize> {
    self.roots.first().copied()
  }

  pub(crate) fn get(&self, index: usize) -> Option<&Comment> {
    self.nodes.get(index)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.roots.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.roots.len()
  }

  /// Appends a reply to the thread that `target` belongs to.
  pub(crate) fn push_reply(
    &mut self,
    target: usize,
    parsed: ParsedComment,
  ) -> Result<usize> {
    let root = self
      .nodes
      .get(target)
      .map(|comment| comment.thread_top)
      .context("reply target is not in this thread")?;

    let reply = self.alloc(parsed, Some(root));

    self.nodes[root].replies.push(reply);

    self.relink_replies(root);

    Ok(reply)
  }

  pub(crate) fn push_root_front(&mut self, parsed: ParsedComment) -> usize {
    let root = self.alloc(parsed, None);

    self.roots.insert(0, root);

    relink(&mut self.nodes, &self.roots);

    root
  }

  fn relink_replies(&mut self, root: usize) {
    let replies = std::mem::take(&mut self.nodes[root].replies);
    relink(&mut self.nodes, &replies);
    self.nodes[root].replies = replies;
  }

  /// Detaches `index` from the list holding it and returns the comment that
  /// should become current: the sibling now at the same position, else the
  /// parent for replies.
  pub(crate) fn remove(&mut self, index: usize) -> Result<Option<usize>> {
    let parent = self
      .nodes
      .get(index)
      .context("comment is not in this thread")?
      .parent;

    let fallback = if let Some(parent) = parent {
      let replies = &mut self.nodes[parent].replies;

      let position = replies
        .iter()
        .position(|&reply| reply == index)
        .context("reply is not attached to its parent")?;

      replies.remove(position);

      self.relink_replies(parent);

      Some(
        self.nodes[parent]
          .replies
          .get(position)
          .copied()
          .unwrap_or(parent),
      )
    } else {
      let position = self
        .roots
        .iter()
        .position(|&root| root == index)
        .context("comment is not a listed top-level comment")?;

      self.roots.remove(position);

      relink(&mut self.nodes, &self.roots);

      self.roots.get(position).copied()
    };

    let removed = &mut self.nodes[index];
    removed.next = None;
    removed.previous = None;

    Ok(fallback)
  }

  pub(crate) fn replies(&self, root: usize) -> &[usize] {
    self
      .nodes
      .get(root)
      .map_or(&[], |comment| comment.replies.as_slice())
  }

  pub(crate) fn roots(&self) -> &[usize] {
    &self.roots
  }
}

/// Points `previous`/`next` of every node in `list` at its positional
/// neighbours. The ends of the list get no link.
pub(crate) fn relink(nodes: &mut [Comment], list: &[usize]) {
  for (position, &index) in list.iter().enumerate() {
    let previous = position
      .checked_sub(1)
      .and_then(|before| list.get(before))
      .copied();

    let next = list.get(position.saturating_add(1)).copied();

    if let Some(node) = nodes.get_mut(index) {
      node.previous = previous;
      node.next = next;
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::testing::parsed_comment};

  fn assert_linked(thread: &CommentThread, list: &[usize]) {
    for (position, &index) in list.iter().enumerate() {
      let comment = thread.get(index).unwrap();

      let expected_previous = position.checked_sub(1).map(|p| list[p]);
      let expected_next = list.get(position + 1).copied();

      assert_eq!(comment.previous, expected_previous, "previous of {index}");
      assert_eq!(comment.next, expected_next, "next of {index}");
    }
  }

  fn thread(id: &str, replies: &[&str]) -> ParsedThread {
    ParsedThread {
      replies: replies.iter().map(|id| parsed_comment(id)).collect(),
      root: parsed_comment(id),
    }
  }

  fn sample() -> CommentThread {
    let mut comments = CommentThread::default();

    comments.append_page(vec![
      thread("1", &["1a", "1b", "1c"]),
      thread("2", &[]),
      thread("3", &["3a"]),
    ]);

    comments
  }

  #[test]
  fn append_page_links_roots_and_replies() {
    let comments = sample();

    assert_eq!(comments.len(), 3);
    assert_linked(&comments, comments.roots());

    for &root in comments.roots() {
      let comment = comments.get(root).unwrap();

      assert_eq!(comment.thread_top, root);
      assert_eq!(comment.parent, None);

      assert_linked(&comments, comments.replies(root));

      for &reply in comments.replies(root) {
        let reply = comments.get(reply).unwrap();
        assert_eq!(reply.parent, Some(root));
        assert_eq!(reply.thread_top, root);
        assert!(reply.replies.is_empty());
      }
    }
  }

  #[test]
  fn append_page_relinks_across_pages() {
    let mut comments = sample();

    let added = comments.append_page(vec![thread("4", &[]), thread("5", &[])]);

    assert_eq!(added.len(), 2);
    assert_eq!(comments.len(), 5);
    assert_linked(&comments, comments.roots());

    let third = comments.roots()[2];
    assert_eq!(comments.get(third).unwrap().next, Some(added[0]));
  }

  #[test]
  fn find_scans_roots_and_replies() {
    let comments = sample();

    let reply = comments.find("3a").unwrap();
    assert_eq!(comments.get(reply).unwrap().id, "3a");

    let root = comments.find("2").unwrap();
    assert_eq!(comments.get(root).unwrap().id, "2");

    assert_eq!(comments.find("missing"), None);
  }

  #[test]
  fn push_reply_to_reply_joins_the_thread_root() {
    let mut comments = sample();

    let target = comments.find("1b").unwrap();
    let root = comments.find("1").unwrap();

    let reply = comments.push_reply(target, parsed_comment("1d")).unwrap();

    assert_eq!(comments.replies(root).len(), 4);
    assert_eq!(comments.replies(root).last(), Some(&reply));
    assert_eq!(comments.get(reply).unwrap().parent, Some(root));
    assert_eq!(comments.get(reply).unwrap().thread_top, root);
    assert_linked(&comments, comments.replies(root));
  }

  #[test]
  fn push_root_front_becomes_head_of_list() {
    let mut comments = sample();

    let root = comments.push_root_front(parsed_comment("0"));

    assert_eq!(comments.first(), Some(root));
    assert_eq!(comments.get(root).unwrap().thread_top, root);
    assert_eq!(comments.get(root).unwrap().previous, None);
    assert_linked(&comments, comments.roots());
  }

  #[test]
  fn relink_clears_ends() {
    let mut comments = sample();

    let list = comments.roots().to_vec();

    relink(&mut comments.nodes, &list[1..]);

    assert_eq!(comments.get(list[1]).unwrap().previous, None);
    assert_eq!(comments.get(list[2]).unwrap().next, None);
    assert_eq!(comments.get(list[1]).unwrap().next, Some(list[2]));
  }

  #[test]
  fn remove_last_reply_falls_back_to_parent() {
    let mut comments = sample();

    let root = comments.find("3").unwrap();
    let reply = comments.find("3a").unwrap();

    assert_eq!(comments.remove(reply).unwrap(), Some(root));
    assert!(comments.replies(root).is_empty());
    assert_eq!(comments.find("3a"), None);
  }

  #[test]
  fn remove_reply_falls_back_to_sibling_at_same_position() {
    let mut comments = sample();

    let root = comments.find("1").unwrap();
    let middle = comments.find("1b").unwrap();
    let last = comments.find("1c").unwrap();

    assert_eq!(comments.remove(middle).unwrap(), Some(last));
    assert_eq!(comments.replies(root).len(), 2);
    assert_linked(&comments, comments.replies(root));
  }

  #[test]
  fn remove_sole_root_empties_the_list() {
    let mut comments = CommentThread::default();

    comments.append_page(vec![thread("only", &["reply"])]);

    let only = comments.find("only").unwrap();

    assert_eq!(comments.remove(only).unwrap(), None);
    assert!(comments.is_empty());
    assert_eq!(comments.first(), None);
  }

  #[test]
  fn remove_root_relinks_neighbours() {
    let mut comments = sample();

    let first = comments.find("1").unwrap();
    let second = comments.find("2").unwrap();
    let third = comments.find("3").unwrap();

    assert_eq!(comments.remove(second).unwrap(), Some(third));
    assert_eq!(comments.get(first).unwrap().next, Some(third));
    assert_eq!(comments.get(third).unwrap().previous, Some(first));
    assert_linked(&comments, comments.roots());

    assert!(comments.remove(second).is_err());
  }
}
