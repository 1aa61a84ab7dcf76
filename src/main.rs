use {
  anyhow::{Context, anyhow, ensure},
  app::App,
  arguments::Arguments,
  browse_state::{BrowseContext, BrowseState},
  chrono::{DateTime, FixedOffset, NaiveDate},
  clap::{Parser, ValueEnum},
  client::Client,
  command::Command,
  comment::Comment,
  comment_thread::CommentThread,
  comment_writer::RemoteRejection,
  crossterm::style::{StyledContent, Stylize},
  parsed_comment::{ParsedComment, ParsedThread},
  profile::Profile,
  project::Project,
  prompt::{Choice, Prompt},
  remote::{NewComment, Remote, RemoteResponse},
  resource::{Resource, ResourceKind},
  scraper::{ElementRef, Html, Selector},
  serde::Serialize,
  session::Session,
  std::{
    backtrace::BacktraceStatus,
    fmt::Display,
    io::{self, IsTerminal, Write},
    ops::ControlFlow,
    process,
  },
  thiserror::Error,
  tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines},
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{normalize_whitespace, pluralize_replies, truncate},
};

mod app;
mod arguments;
mod browse_state;
mod client;
mod command;
mod comment;
mod comment_browser;
mod comment_thread;
mod comment_writer;
mod jump_search;
mod page;
mod parsed_comment;
mod parser;
mod profile;
mod project;
mod prompt;
mod remote;
mod resource;
mod session;
#[cfg(test)]
mod testing;
mod utils;

/// Comments served per page.
const PAGE_LENGTH: usize = 40;

const MAX_COMMENT_LENGTH: usize = 500;

/// Content the site leaves in place of a removed comment.
const DELETED_SENTINEL: &str = "[deleted]";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(level))
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging(&arguments.log_level);

  let session = Session::from_arguments(&arguments);

  debug!(
    kind = ?arguments.kind,
    id = %arguments.id,
    signed_in = session.is_some(),
    "starting"
  );

  let client = Client::new(&arguments.base_url, session.clone());

  let mut app = App::new(Prompt::stdio(), client, session, !arguments.read_only);

  app.run(&arguments).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
