//! Rune token definitions - static token data.
//!
//! A `Token` holds the immutable properties of a rune: its glyph, name,
//! and the flavor strings the host renders on the rune card. None of the
//! display fields affect matching; only `TokenId` identity does.

use serde::{Deserialize, Serialize};

/// Unique identifier for a token.
///
/// Identity is the only behaviorally relevant property of a token:
/// slots accept tokens by id, never by display data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Static rune definition.
///
/// Contains the unchanging display data for one rune. The engine never
/// interprets these strings; they exist for the host's rune cards.
///
/// ## Example
///
/// ```
/// use eden_puzzle::core::{Token, TokenId};
///
/// let rune = Token::new(TokenId::new(0), "Aetheria", "Ω")
///     .with_description("The binding force of reality's illusion")
///     .with_code_snippet("function initSimulation() { return new Eden(); }");
///
/// assert_eq!(rune.name, "Aetheria");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier for this token.
    pub id: TokenId,

    /// Rune name (for display).
    pub name: String,

    /// Rune glyph rendered on the card and in a filled slot.
    pub glyph: String,

    /// Flavor description.
    pub description: String,

    /// Code fragment shown on the rune card.
    pub code_snippet: String,
}

impl Token {
    /// Create a new token with empty flavor strings.
    #[must_use]
    pub fn new(id: TokenId, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            glyph: glyph.into(),
            description: String::new(),
            code_snippet: String::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the code fragment (builder pattern).
    #[must_use]
    pub fn with_code_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.code_snippet = snippet.into();
        self
    }
}
