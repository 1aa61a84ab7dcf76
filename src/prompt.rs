use super::*;

/// One entry of a menu offered by [`Prompt::choose`].
#[derive(Clone, Debug)]
pub(crate) struct Choice<T> {
  pub(crate) action: T,
  pub(crate) aliases: &'static [&'static str],
  pub(crate) help: String,
  pub(crate) key: char,
  /// Hidden choices are accepted but not listed.
  pub(crate) visible: bool,
}

impl<T> Choice<T> {
  fn matches(&self, answer: &str) -> bool {
    answer.chars().eq(std::iter::once(self.key))
      || self.aliases.iter().any(|alias| *alias == answer)
  }
}

/// Line-based terminal dialogue.
pub(crate) struct Prompt {
  color: bool,
  input: Lines<Box<dyn AsyncBufRead + Unpin>>,
  output: Box<dyn Write>,
}

impl Prompt {
  /// Prints `question` and reads one line. End of input reads as empty.
  pub(crate) async fn ask(&mut self, question: &str) -> Result<String> {
    write!(self.output, "{question}")?;
    self.output.flush()?;

    Ok(self.read_line().await?.unwrap_or_default())
  }

  /// Offers `choices` until one is picked. `?` lists the visible ones.
  /// Returns `None` once input is exhausted.
  pub(crate) async fn choose<T: Clone>(
    &mut self,
    choices: &[Choice<T>],
  ) -> Result<Option<T>> {
    let keys = choices
      .iter()
      .filter(|choice| choice.visible)
      .map(|choice| choice.key)
      .collect::<String>();

    loop {
      write!(self.output, "[{keys}] ")?;
      self.output.flush()?;

      let Some(answer) = self.read_line().await? else {
        writeln!(self.output)?;
        return Ok(None);
      };

      let answer = answer.trim();

      if answer == "?" {
        for choice in choices.iter().filter(|choice| choice.visible) {
          let key = self.paint(format!("{}:", choice.key).blue().bold());
          self.say(format!("- {key} {}", choice.help))?;
        }

        continue;
      }

      if let Some(choice) = choices.iter().find(|choice| choice.matches(answer))
      {
        return Ok(Some(choice.action.clone()));
      }
    }
  }

  pub(crate) async fn confirm(&mut self, question: &str) -> Result<bool> {
    let answer = self.ask(question).await?;

    Ok(matches!(
      answer.trim().to_lowercase().as_str(),
      "y" | "yes"
    ))
  }

  pub(crate) fn new(
    input: impl AsyncBufRead + Unpin + 'static,
    output: impl Write + 'static,
    color: bool,
  ) -> Self {
    let input: Box<dyn AsyncBufRead + Unpin> = Box::new(input);

    Self {
      color,
      input: input.lines(),
      output: Box::new(output),
    }
  }

  pub(crate) fn paint<D: Display>(&self, content: StyledContent<D>) -> String {
    if self.color {
      content.to_string()
    } else {
      content.content().to_string()
    }
  }

  async fn read_line(&mut self) -> Result<Option<String>> {
    self
      .input
      .next_line()
      .await
      .context("could not read terminal input")
  }

  pub(crate) fn say(&mut self, line: impl Display) -> Result {
    writeln!(self.output, "{line}")?;
    Ok(())
  }

  pub(crate) fn stdio() -> Self {
    let color = io::stdout().is_terminal();

    Self::new(BufReader::new(tokio::io::stdin()), io::stdout(), color)
  }
}
