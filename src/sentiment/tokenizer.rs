//! Word tokenizer
//!
//! Splits text into words: every character that is not a letter is a
//! delimiter, and runs of delimiters never produce empty tokens.

/// Which characters count as letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterClass {
    /// `a-z` and `A-Z` only
    #[default]
    Ascii,
    /// Any Unicode alphabetic character
    Unicode,
}

/// Letter-run tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    letters: LetterClass,
}

impl Tokenizer {
    /// Tokenizer over ASCII letters
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer over Unicode alphabetic characters
    pub fn unicode() -> Self {
        Self::with_letters(LetterClass::Unicode)
    }

    pub fn with_letters(letters: LetterClass) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> LetterClass {
        self.letters
    }

    pub fn is_letter(&self, c: char) -> bool {
        match self.letters {
            LetterClass::Ascii => c.is_ascii_alphabetic(),
            LetterClass::Unicode => c.is_alphabetic(),
        }
    }

    /// Words of `text` in order, case preserved
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(|c: char| !self.is_letter(c))
            .filter(|token| !token.is_empty())
            .collect()
    }
}

/// Tokenize with the default ASCII tokenizer
pub fn tokenize(text: &str) -> Vec<&str> {
    Tokenizer::new().tokenize(text)
}
