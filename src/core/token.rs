//! Tokens and symbol sets.
//!
//! A `Token` is the opaque symbol a tile shows. The engine only compares
//! tokens for equality; games decide what each one looks like (a sprite,
//! an emoji, a number).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Opaque symbol identifier.
///
/// Two tiles carrying the same token form a matching pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Token(pub u32);

impl Token {
    /// Create a new token.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Ordered set of distinct tokens a round can draw from.
///
/// Insertion order is kept so that subset selection is reproducible
/// for a given random source. Duplicates are ignored.
///
/// ## Example
///
/// ```
/// use rust_minigames::core::{SymbolSet, Token};
///
/// let symbols: SymbolSet = [1, 2, 2, 3].into_iter().map(Token::new).collect();
/// assert_eq!(symbols.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Token>", into = "Vec<Token>")]
pub struct SymbolSet {
    tokens: Vec<Token>,
}

impl SymbolSet {
    /// Create an empty symbol set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbol set holding tokens `0..count`.
    #[must_use]
    pub fn range(count: u32) -> Self {
        Self {
            tokens: (0..count).map(Token::new).collect(),
        }
    }

    /// Add a token. Returns `false` if it was already present.
    pub fn insert(&mut self, token: Token) -> bool {
        if self.tokens.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }

    /// Tokens in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }
}

impl FromIterator<Token> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut seen = FxHashSet::default();
        let tokens = iter.into_iter().filter(|t| seen.insert(*t)).collect();
        Self { tokens }
    }
}

impl From<Vec<Token>> for SymbolSet {
    fn from(tokens: Vec<Token>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<SymbolSet> for Vec<Token> {
    fn from(set: SymbolSet) -> Self {
        set.tokens
    }
}
