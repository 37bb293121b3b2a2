use rustc_hash::FxHashSet;

/// Characters that delimit words: space, comma, period and hyphen
pub const DEFAULT_SEPARATORS: &str = " ,.-";

/// Fixed set of separator characters, built once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: FxHashSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `chars` (repeats collapse)
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Check if a character belongs to the set
    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of distinct separator characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of characters of a single kind, borrowed from its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the word or separator run that starts at byte offset `position`.
///
/// The run extends rightward while characters keep the class of
/// `text[position]` and stops at the first character of the other class or
/// at the end of `text`.
///
/// # Panics
///
/// Panics if `position` is not a char boundary strictly inside `text`.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Token<'a> {
    assert!(
        position < text.len(),
        "position {} out of range for text of length {}",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {} is not on a char boundary",
        position
    );

    let rest = &text[position..];
    let starts_with_separator = rest
        .chars()
        .next()
        .is_some_and(|ch| separators.is_separator(ch));

    let end = rest
        .char_indices()
        .find(|&(_, ch)| separators.is_separator(ch) != starts_with_separator)
        .map(|(offset, _)| offset)
        .unwrap_or(rest.len());

    Token {
        text: &rest[..end],
        kind: if starts_with_separator {
            TokenKind::Separator
        } else {
            TokenKind::Word
        },
    }
}

/// Split a single line into alternating word and separator tokens
pub fn tokenize<'a, 's>(line: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens::new(line, separators)
}

/// Word tokens of a single line, separators discarded
pub fn words<'a, 's>(
    line: &'a str,
    separators: &'s SeparatorSet,
) -> impl Iterator<Item = &'a str> + 's
where
    'a: 's,
{
    tokenize(line, separators)
        .filter(Token::is_word)
        .map(|token| token.text)
}

/// Iterator that drives `next_token` across a line
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    pub fn new(line: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            line,
            position: 0,
            separators,
        }
    }
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }

        let token = next_token(self.line, self.position, self.separators);
        self.position += token.len();
        Some(token)
    }
}
