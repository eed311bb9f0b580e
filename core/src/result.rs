//! Outcome of a single composer operation.

use serde::{Serialize, Serializer};
use std::fmt;

/// Characters finalised by one operation, in order. Holds zero to two chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Committed {
    chars: [char; 2],
    len: u8,
}

impl Committed {
    /// Nothing committed; used for the silent cancel.
    pub const fn empty() -> Self {
        Self {
            chars: ['\0'; 2],
            len: 0,
        }
    }

    pub fn one(ch: char) -> Self {
        let mut committed = Self::empty();
        committed.push(ch);
        committed
    }

    pub fn two(first: char, second: char) -> Self {
        let mut committed = Self::one(first);
        committed.push(second);
        committed
    }

    // A NUL char is what an out-of-range lookup degrades to; it is dropped
    // rather than committed.
    fn push(&mut self, ch: char) {
        if ch == '\0' {
            tracing::warn!("dropping null character from commit");
            return;
        }
        if (self.len as usize) < self.chars.len() {
            self.chars[self.len as usize] = ch;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.as_slice().iter().copied()
    }
}

impl fmt::Display for Committed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl Serialize for Committed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result returned by every composer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompositionResult {
    /// Composition continues showing `display`.
    Composing(char),
    /// `committed` becomes final text and a new composition shows `display`.
    Commit { committed: Committed, display: char },
    /// `committed` becomes final text and no composition remains. An empty
    /// commit cancels the open composition silently.
    CommitFlush(Committed),
    /// The engine did not consume the input.
    Pass,
}

impl CompositionResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, CompositionResult::Pass)
    }

    /// Text that must be finalised, empty when nothing is committed.
    pub fn committed_text(&self) -> String {
        match self {
            CompositionResult::Commit { committed, .. } | CompositionResult::CommitFlush(committed) => {
                committed.to_string()
            }
            _ => String::new(),
        }
    }

    /// The in-progress character shown after this result, if any.
    pub fn display(&self) -> Option<char> {
        match self {
            CompositionResult::Composing(display) | CompositionResult::Commit { display, .. } => {
                Some(*display)
            }
            _ => None,
        }
    }

    /// True when no composition remains afterwards.
    pub fn ends_composition(&self) -> bool {
        matches!(self, CompositionResult::CommitFlush(_))
    }
}
