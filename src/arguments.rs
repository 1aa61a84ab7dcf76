use super::*;

/// Browse the comment sections of profiles, projects and galleries.
#[derive(Debug, Parser)]
#[command(name = "scratch-comments", version, about, long_about = None)]
pub(crate) struct Arguments {
  /// Base URL of the site.
  #[arg(
    long,
    env = "SCRATCH_BASE_URL",
    default_value = "https://scratch.mit.edu"
  )]
  pub(crate) base_url: String,

  /// Anti-forgery token sent with comment writes.
  #[arg(long, env = "SCRATCH_CSRF_TOKEN", default_value = "a")]
  pub(crate) csrf_token: String,

  /// Treat the viewer as an owner of the gallery being browsed.
  #[arg(long)]
  pub(crate) gallery_owner: bool,

  /// Username, project id or gallery id to open.
  #[arg(default_value = "_nix")]
  pub(crate) id: String,

  /// Open the comment section directly and jump to this comment.
  #[arg(long, value_name = "COMMENT_ID")]
  pub(crate) jump: Option<String>,

  /// What kind of page `id` names.
  #[arg(value_enum, default_value = "user")]
  pub(crate) kind: ResourceKind,

  /// Log filter used when `RUST_LOG` is unset.
  #[arg(long, default_value = "warn")]
  pub(crate) log_level: String,

  /// Browse without writing comments.
  #[arg(long)]
  pub(crate) read_only: bool,

  /// Session id of an already signed-in session.
  #[arg(long, env = "SCRATCH_SESSION_ID", hide_env_values = true)]
  pub(crate) session_id: Option<String>,

  /// Username the session belongs to.
  #[arg(long, env = "SCRATCH_USERNAME")]
  pub(crate) username: Option<String>,
}
