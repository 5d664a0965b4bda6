use std::fmt;

/// Characters that count as symbols when scoring.
pub const SCORED_SYMBOLS: &str = "!@#$%^&*";

pub const MAX_SCORE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Fair,
            5..=6 => StrengthLevel::Good,
            7..=8 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    pub const fn crack_time(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Minutes to hours",
            StrengthLevel::Fair => "Days to weeks",
            StrengthLevel::Good => "Months to years",
            StrengthLevel::Strong => "Decades to centuries",
            StrengthLevel::VeryStrong => "Millennia+",
        }
    }

    /// Fill fraction of a strength meter.
    pub const fn progress(self) -> f64 {
        match self {
            StrengthLevel::Weak => 0.2,
            StrengthLevel::Fair => 0.4,
            StrengthLevel::Good => 0.6,
            StrengthLevel::Strong => 0.8,
            StrengthLevel::VeryStrong => 1.0,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassphraseAnalysis {
    pub length: usize,
    pub word_segments: usize,
    pub has_numbers: bool,
    pub has_symbols: bool,
    pub has_mixed_case: bool,
}

impl PassphraseAnalysis {
    pub fn of(passphrase: &str) -> Self {
        let word_segments = passphrase
            .split(|c: char| !c.is_alphabetic())
            .filter(|run| !run.is_empty())
            .count();

        let has_upper = passphrase.chars().any(char::is_uppercase);
        let has_lower = passphrase.chars().any(char::is_lowercase);

        Self {
            length: passphrase.chars().count(),
            word_segments,
            has_numbers: passphrase.chars().any(|c| c.is_ascii_digit()),
            has_symbols: passphrase.chars().any(|c| SCORED_SYMBOLS.contains(c)),
            has_mixed_case: has_upper && has_lower,
        }
    }

    /// Count of satisfied conditions, not an entropy estimate: word
    /// segments (3, 4, 5), length (15, 25), digits, symbols and mixed case
    /// each add one point.
    pub fn score(&self) -> u8 {
        [
            self.word_segments >= 3,
            self.word_segments >= 4,
            self.word_segments >= 5,
            self.length >= 15,
            self.length >= 25,
            self.has_numbers,
            self.has_symbols,
            self.has_mixed_case,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
    pub analysis: PassphraseAnalysis,
}

impl StrengthReport {
    pub fn crack_time(&self) -> &'static str {
        self.level.crack_time()
    }
}

pub fn calculate_strength(passphrase: &str) -> StrengthReport {
    let analysis = PassphraseAnalysis::of(passphrase);
    let score = analysis.score();
    let level = StrengthLevel::from_score(score);

    tracing::trace!(
        score,
        level = level.label(),
        segments = analysis.word_segments,
        "scored passphrase"
    );

    StrengthReport {
        score,
        level,
        analysis,
    }
}
