//! Prompts
//!
//! Interactive terminal prompts behind a small trait so collection can be
//! driven by a real terminal session or by scripted input in tests.
//! The terminal implementation uses the `dialoguer` crate.

use std::collections::VecDeque;
use std::io;

use colored::Colorize;
use dialoguer::{Input, Password};
use thiserror::Error;

/// Failure modes at the prompt seam. Cancellation is the sentinel the
/// collection flow treats as a distinguished outcome, not an error.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("canceled by the user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// One question put to the user.
pub struct PromptRequest<'a> {
    /// Rendered label shown to the user.
    pub label: &'a str,
    /// Mask the input while typing.
    pub hidden: bool,
    /// Accept an empty submission.
    pub allow_empty: bool,
}

/// Source of answers for a collection session.
pub trait Prompter {
    fn read(&mut self, request: &PromptRequest<'_>) -> Result<String, PromptError>;
}

/// Interactive prompter rendering questions on the terminal.
///
/// Every question is prefixed with `<name> Startup >`, name in magenta and
/// "Startup" in cyan.
pub struct TerminalPrompter {
    prefix: String,
}

impl TerminalPrompter {
    pub fn new(name: &str) -> Self {
        Self {
            prefix: format!("{} {} {}", name.magenta(), "Startup".cyan(), ">".white()),
        }
    }

    fn map_err(e: dialoguer::Error) -> PromptError {
        let dialoguer::Error::IO(io_err) = e;
        match io_err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => PromptError::Cancelled,
            _ => PromptError::Io(io_err),
        }
    }
}

impl Prompter for TerminalPrompter {
    fn read(&mut self, request: &PromptRequest<'_>) -> Result<String, PromptError> {
        let prompt = format!("{} {}", self.prefix, request.label);

        if request.hidden {
            Password::new()
                .with_prompt(prompt)
                .allow_empty_password(request.allow_empty)
                .interact()
                .map_err(Self::map_err)
        } else {
            Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(Self::map_err)
        }
    }
}

/// A prompter that replays a fixed script of answers. Intended for tests
/// and non-interactive automation.
///
/// Replies are consumed in order; an exhausted script behaves like the user
/// cancelling the session.
#[derive(Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Result<String, PromptError>>,
    issued: usize,
    hidden_labels: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies
                .iter()
                .map(|r| Ok(r.to_string()))
                .collect(),
            issued: 0,
            hidden_labels: Vec::new(),
        }
    }

    /// Queue a cancellation after any already-queued replies.
    pub fn then_cancel(mut self) -> Self {
        self.replies.push_back(Err(PromptError::Cancelled));
        self
    }

    /// Number of questions this prompter has been asked.
    pub fn prompts_issued(&self) -> usize {
        self.issued
    }

    /// Labels of the questions that requested masked input.
    pub fn hidden_labels(&self) -> &[String] {
        &self.hidden_labels
    }
}

impl Prompter for ScriptedPrompter {
    fn read(&mut self, request: &PromptRequest<'_>) -> Result<String, PromptError> {
        self.issued += 1;
        if request.hidden {
            self.hidden_labels.push(request.label.to_string());
        }
        self.replies.pop_front().unwrap_or(Err(PromptError::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(label: &str) -> PromptRequest<'_> {
        PromptRequest {
            label,
            hidden: false,
            allow_empty: false,
        }
    }

    #[test]
    fn test_scripted_replies_in_order() {
        let mut prompter = ScriptedPrompter::new(&["one", "two"]);
        assert_eq!(prompter.read(&request("a")).unwrap(), "one");
        assert_eq!(prompter.read(&request("b")).unwrap(), "two");
        assert_eq!(prompter.prompts_issued(), 2);
    }

    #[test]
    fn test_scripted_exhaustion_cancels() {
        let mut prompter = ScriptedPrompter::new(&[]);
        assert!(matches!(
            prompter.read(&request("a")),
            Err(PromptError::Cancelled)
        ));
    }

    #[test]
    fn test_scripted_explicit_cancel_after_replies() {
        let mut prompter = ScriptedPrompter::new(&["one"]).then_cancel();
        assert_eq!(prompter.read(&request("a")).unwrap(), "one");
        assert!(matches!(
            prompter.read(&request("b")),
            Err(PromptError::Cancelled)
        ));
    }

    #[test]
    fn test_scripted_records_hidden_labels() {
        let mut prompter = ScriptedPrompter::new(&["secret"]);
        let req = PromptRequest {
            label: "Token",
            hidden: true,
            allow_empty: false,
        };
        prompter.read(&req).unwrap();
        assert_eq!(prompter.hidden_labels(), &["Token".to_string()]);
    }

    #[test]
    fn test_interrupted_io_maps_to_cancelled() {
        let e = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert!(matches!(
            TerminalPrompter::map_err(e),
            PromptError::Cancelled
        ));
    }
}
