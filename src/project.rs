use super::*;

/// The read-only fields of a project page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Project {
  pub(crate) author: String,
  pub(crate) id: String,
  pub(crate) instructions: String,
  pub(crate) notes_and_credits: String,
  pub(crate) title: String,
}

impl Project {
  pub(crate) fn has_notes(&self) -> bool {
    !self.instructions.is_empty() || !self.notes_and_credits.is_empty()
  }

  pub(crate) fn parse(html: &str, requested_id: &str) -> Result<Self> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let author = parser::first_text(root, &parser::selector("#owner")?);

    ensure!(!author.is_empty(), "page is not a project page");

    let id = root
      .select(&parser::selector("#project[data-project-id]")?)
      .next()
      .and_then(|project| parser::attribute(project, "data-project-id"))
      .unwrap_or_else(|| requested_id.to_string());

    Ok(Self {
      author,
      id,
      instructions: parser::block_text(
        root,
        &parser::selector("#instructions .overview")?,
      ),
      notes_and_credits: parser::block_text(
        root,
        &parser::selector("#description .overview")?,
      ),
      title: parser::first_text(root, &parser::selector("#title")?),
    })
  }

  pub(crate) fn resource(&self) -> Resource {
    Resource::Project {
      author: self.author.clone(),
      id: self.id.clone(),
    }
  }
}
