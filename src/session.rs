use super::*;

/// An already-acquired site session. Comments are written as `username`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Session {
  pub(crate) csrf_token: String,
  pub(crate) session_id: String,
  pub(crate) username: String,
}

impl Session {
  pub(crate) fn cookie(&self) -> String {
    format!(
      "scratchsessionsid={}; scratchcsrftoken={};",
      self.session_id, self.csrf_token
    )
  }

  pub(crate) fn from_arguments(arguments: &Arguments) -> Option<Self> {
    let username = arguments.username.clone().filter(|name| !name.is_empty());

    let session_id = arguments
      .session_id
      .clone()
      .filter(|session_id| !session_id.is_empty());

    match (username, session_id) {
      (Some(username), Some(session_id)) => Some(Self {
        csrf_token: arguments.csrf_token.clone(),
        session_id,
        username,
      }),
      (Some(username), None) => {
        warn!(%username, "no session id given, browsing read-only");
        None
      }
      _ => None,
    }
  }
}
