use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FeaturedProject {
  pub(crate) heading: String,
  pub(crate) id: String,
  pub(crate) name: String,
}

/// The read-only fields of a user's profile page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Profile {
  pub(crate) about_me: String,
  pub(crate) featured_project: Option<FeaturedProject>,
  pub(crate) join_date: Option<DateTime<FixedOffset>>,
  pub(crate) location: String,
  pub(crate) rank: String,
  pub(crate) username: String,
  pub(crate) working_on: String,
}

impl Profile {
  pub(crate) fn parse(html: &str) -> Result<Self> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let username = parser::first_text(root, &parser::selector("#profile-data h2")?);

    ensure!(!username.is_empty(), "page is not a user profile");

    let join_date = root
      .select(&parser::selector("span[title]")?)
      .next()
      .and_then(|span| span.value().attr("title"))
      .and_then(parser::parse_date);

    let featured_project = root
      .select(&parser::selector(".player a.project-name")?)
      .next()
      .and_then(|link| {
        let name = normalize_whitespace(&link.text().collect::<String>());

        let id = link
          .value()
          .attr("href")?
          .split('/')
          .find(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
          })?
          .to_string();

        (!name.is_empty()).then_some((name, id))
      });

    let featured_project = match featured_project {
      Some((name, id)) => Some(FeaturedProject {
        heading: parser::first_text(
          root,
          &parser::selector(".featured-project-heading")?,
        ),
        id,
        name,
      }),
      None => None,
    };

    Ok(Self {
      about_me: parser::first_text(
        root,
        &parser::selector("#bio-readonly .overview")?,
      ),
      featured_project,
      join_date,
      location: parser::first_text(
        root,
        &parser::selector("#profile-data .location")?,
      ),
      rank: parser::first_text(root, &parser::selector("#profile-data .group")?),
      username,
      working_on: parser::first_text(
        root,
        &parser::selector("#status-readonly .overview")?,
      ),
    })
  }
}
