//! Cursor over the text being parsed

// internal modules
use crate::error::{Error, Result};

/// Borrowed view of the remaining input plus the running line number
///
/// The cursor is owned by the top-level caller and passed by mutable
/// reference through every nested streaming constructor, each of which
/// advances it in place by the number of cards it consumed. Sibling
/// records must therefore be read one after the other, while independent
/// buffers with independent cursors can be processed by separate callers
/// freely.
///
/// A failed constructor leaves the cursor wherever the failure was
/// detected, so retrying requires a clone taken before the call.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    /// New cursor over `text`, starting at line 1
    pub fn new(text: &'a str) -> Self {
        Self { text, line: 1 }
    }

    /// New cursor with an explicit starting line number
    pub fn with_line(text: &'a str, line: usize) -> Self {
        Self { text, line }
    }

    /// Line number of the next unread card
    pub fn position(&self) -> usize {
        self.line
    }

    /// True once every card has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Take the next card, returning it with its line number
    pub(crate) fn take_line(&mut self) -> Result<(&'a str, usize)> {
        if self.text.is_empty() {
            return Err(Error::UnexpectedEnd { line: self.line });
        }
        let (card, rest) = match self.text.split_once('\n') {
            Some((card, rest)) => (card, rest),
            None => (self.text, ""),
        };
        self.text = rest;
        let card = card.strip_suffix('\r').unwrap_or(card);
        let number = self.line;
        self.line += 1;
        Ok((card, number))
    }
}
