use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

pub const MIN_WORDS: usize = 2;
pub const MAX_WORDS: usize = 8;
pub const DEFAULT_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Dash,
    Underscore,
    Dot,
    Space,
    None,
}

impl Separator {
    pub const ALL: [Separator; 5] = [
        Separator::Dash,
        Separator::Underscore,
        Separator::Dot,
        Separator::Space,
        Separator::None,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Separator::Dash => "-",
            Separator::Underscore => "_",
            Separator::Dot => ".",
            Separator::Space => " ",
            Separator::None => "",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Separator::Dash => "Dash (-)",
            Separator::Underscore => "Underscore (_)",
            Separator::Dot => "Dot (.)",
            Separator::Space => "Space",
            Separator::None => "No Separator",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts either the literal separator or its name.
impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "-" | "dash" => Ok(Separator::Dash),
            "_" | "underscore" => Ok(Separator::Underscore),
            "." | "dot" => Ok(Separator::Dot),
            " " | "space" => Ok(Separator::Space),
            "" | "none" => Ok(Separator::None),
            _ => Err(Error::UnknownSeparator(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capitalization {
    #[default]
    None,
    First,
    All,
    Random,
}

impl Capitalization {
    pub const ALL: [Capitalization; 4] = [
        Capitalization::None,
        Capitalization::First,
        Capitalization::All,
        Capitalization::Random,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            Capitalization::None => "lowercase",
            Capitalization::First => "First Letter",
            Capitalization::All => "ALL CAPS",
            Capitalization::Random => "Random Mix",
        }
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Capitalization {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "lower" | "lowercase" => Ok(Capitalization::None),
            "first" | "title" => Ok(Capitalization::First),
            "all" | "upper" | "uppercase" => Ok(Capitalization::All),
            "random" | "mixed" => Ok(Capitalization::Random),
            _ => Err(Error::UnknownCapitalization(s.to_string())),
        }
    }
}

/// Settings for a single generation call.
///
/// `word_count` is validated on construction, so a config that exists is
/// always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    word_count: usize,
    separator: Separator,
    capitalization: Capitalization,
    include_numbers: bool,
    include_symbols: bool,
    custom_words: String,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORDS,
            separator: Separator::Dash,
            capitalization: Capitalization::None,
            include_numbers: true,
            include_symbols: false,
            custom_words: String::new(),
        }
    }
}

impl PassphraseConfig {
    pub fn new(word_count: usize) -> Result<Self> {
        validate_word_count(word_count)?;
        Ok(Self {
            word_count,
            ..Self::default()
        })
    }

    pub fn separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = capitalization;
        self
    }

    pub fn include_numbers(mut self, yes: bool) -> Self {
        self.include_numbers = yes;
        self
    }

    pub fn include_symbols(mut self, yes: bool) -> Self {
        self.include_symbols = yes;
        self
    }

    pub fn custom_words(mut self, text: impl Into<String>) -> Self {
        self.custom_words = text.into();
        self
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn separator_kind(&self) -> Separator {
        self.separator
    }

    pub fn capitalization_kind(&self) -> Capitalization {
        self.capitalization
    }

    pub fn numbers(&self) -> bool {
        self.include_numbers
    }

    pub fn symbols(&self) -> bool {
        self.include_symbols
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_words
    }
}

pub fn validate_word_count(word_count: usize) -> Result<()> {
    if !(MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        return Err(Error::WordCount {
            requested: word_count,
            min: MIN_WORDS,
            max: MAX_WORDS,
        });
    }
    Ok(())
}
