//! Turn - Transcript message types
//!
//! A turn is one message in the document chat transcript, authored by either
//! the user or the system. System turns may carry grounding evidence tying
//! the answer back to a snippet of the source document.

use serde::{Deserialize, Serialize};

/// Who authored a transcript turn.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    System,
}

/// Evidence that a system answer is traceable to the source document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Grounding {
    /// The snippet of document text the answer was derived from.
    pub source_snippet: String,
}

/// One message in the chat transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    /// Monotonically increasing id, unique within a session.
    pub id: u64,
    pub author: Author,
    pub text: String,
    /// Present only on system turns that are grounded in document content.
    /// Absent on a system turn means "answer not found in document".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grounding: Option<Grounding>,
}

impl Turn {
    /// Create a user turn.
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            author: Author::User,
            text: text.into(),
            grounding: None,
        }
    }

    /// Create an ungrounded system turn.
    pub fn system(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            author: Author::System,
            text: text.into(),
            grounding: None,
        }
    }

    /// Create a grounded system turn.
    pub fn grounded(id: u64, text: impl Into<String>, source_snippet: impl Into<String>) -> Self {
        Self {
            id,
            author: Author::System,
            text: text.into(),
            grounding: Some(Grounding {
                source_snippet: source_snippet.into(),
            }),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.author == Author::User
    }

    /// How this turn should be rendered.
    ///
    /// Every system turn is either `Grounded` or `NotFound`, never both;
    /// user turns always render as `User`.
    pub fn presentation(&self) -> TurnPresentation<'_> {
        match (self.author, &self.grounding) {
            (Author::User, _) => TurnPresentation::User,
            (Author::System, Some(grounding)) => TurnPresentation::Grounded {
                snippet: &grounding.source_snippet,
            },
            (Author::System, None) => TurnPresentation::NotFound,
        }
    }
}

/// Render dispatch over the shape of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPresentation<'a> {
    /// A message the user typed.
    User,
    /// A system answer backed by document evidence.
    Grounded { snippet: &'a str },
    /// A system answer the service could not ground in the document.
    NotFound,
}
