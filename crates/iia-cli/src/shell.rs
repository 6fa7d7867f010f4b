//! Line-oriented interactive session.
//!
//! Each input line is one command. Bad commands are reported on the output
//! and the session carries on; only I/O failures end it early.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use iia_engine::SelectionController;

use crate::summary::{describe_text, eligibility_table, selection_line, view_table};

pub const HELP: &str = "\
commands:
  toggle <code>     select or deselect a module
  reset             clear the selection
  describe <area>   show an area's description and modules
  show              print every module and area
  help              print this message
  quit              end the session";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Toggle(String),
    Reset,
    Describe(String),
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

        let command = match verb.to_ascii_lowercase().as_str() {
            "toggle" | "t" => {
                if rest.is_empty() {
                    bail!("toggle needs a module code");
                }
                if rest.contains(char::is_whitespace) {
                    bail!("toggle takes a single module code");
                }
                ShellCommand::Toggle(rest.to_ascii_uppercase())
            }
            "describe" | "d" => {
                if rest.is_empty() {
                    bail!("describe needs an area name");
                }
                ShellCommand::Describe(rest.to_string())
            }
            "reset" => ShellCommand::Reset,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Some(command))
    }
}

/// Run a session until `quit` or end of input.
pub fn run_session<R, W>(controller: &mut SelectionController<'_>, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", selection_line(&controller.snapshot()))?;
    for line in input.lines() {
        let line = line?;
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        match command {
            ShellCommand::Toggle(code) => {
                if controller.catalog().modules_with_code(&code).is_empty() {
                    writeln!(output, "unknown module '{code}'")?;
                }
                let view = controller.toggle(&code);
                writeln!(output, "{}", selection_line(&view))?;
            }
            ShellCommand::Reset => {
                let view = controller.reset();
                writeln!(output, "{}", selection_line(&view))?;
            }
            ShellCommand::Describe(name) => match controller.describe_area(&name) {
                Some(description) => writeln!(output, "{}", describe_text(&description))?,
                None => writeln!(output, "unknown area '{name}'")?,
            },
            ShellCommand::Show => {
                let view = controller.snapshot();
                writeln!(output, "{}", view_table(controller.catalog(), &view))?;
                writeln!(output, "{}", eligibility_table(&view))?;
            }
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => break,
        }
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            ShellCommand::parse("toggle 3a1").unwrap(),
            Some(ShellCommand::Toggle("3A1".to_string()))
        );
        assert_eq!(
            ShellCommand::parse("  describe  Mechanical Engineering ").unwrap(),
            Some(ShellCommand::Describe("Mechanical Engineering".to_string()))
        );
        assert_eq!(ShellCommand::parse("RESET").unwrap(), Some(ShellCommand::Reset));
        assert_eq!(ShellCommand::parse("q").unwrap(), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("").unwrap(), None);
        assert_eq!(ShellCommand::parse("# note").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(ShellCommand::parse("toggle").is_err());
        assert!(ShellCommand::parse("toggle 3A1 3A3").is_err());
        assert!(ShellCommand::parse("describe").is_err());
        let error = ShellCommand::parse("select 3A1").unwrap_err();
        assert_eq!(error.to_string(), "unknown command 'select' (try 'help')");
    }
}
