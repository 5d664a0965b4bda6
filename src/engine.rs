use crate::catalog::WordCatalog;
use crate::config::{Capitalization, PassphraseConfig};
use crate::random::RandomSource;
use crate::strength::{StrengthLevel, StrengthReport, calculate_strength};
use zeroize::Zeroizing;

pub const INSERTED_SYMBOLS: [char; 7] = ['!', '@', '#', '$', '%', '&', '*'];

pub const NUMBER_MIN: usize = 10;
pub const NUMBER_MAX: usize = 999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub passphrase: Zeroizing<String>,
    /// `None` when no words were available to draw from.
    pub strength: Option<StrengthReport>,
}

impl GenerationResult {
    fn empty() -> Self {
        Self {
            passphrase: Zeroizing::new(String::new()),
            strength: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.passphrase.is_empty()
    }

    pub fn level(&self) -> Option<StrengthLevel> {
        self.strength.map(|report| report.level)
    }

    pub fn crack_time(&self) -> Option<&'static str> {
        self.strength.map(|report| report.crack_time())
    }
}

pub struct PassphraseEngine<'a> {
    catalog: &'a WordCatalog,
}

impl<'a> PassphraseEngine<'a> {
    pub fn new(catalog: &'a WordCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &WordCatalog {
        self.catalog
    }

    pub fn generate<R: RandomSource>(
        &self,
        config: &PassphraseConfig,
        rng: &mut R,
    ) -> GenerationResult {
        let words = self.catalog.all_words(config.custom_text());
        if words.is_empty() {
            tracing::warn!("word catalog is empty, nothing to generate");
            return GenerationResult::empty();
        }

        tracing::debug!(
            catalog_size = words.len(),
            word_count = config.word_count(),
            "generating passphrase"
        );

        let mut tokens: Vec<Zeroizing<String>> = Vec::with_capacity(config.word_count() + 2);
        for _ in 0..config.word_count() {
            let word = &words[rng.below(words.len())];
            tokens.push(Zeroizing::new(apply_capitalization(
                word,
                config.capitalization_kind(),
                rng,
            )));
        }

        if config.numbers() {
            let number = rng.range_inclusive(NUMBER_MIN, NUMBER_MAX);
            let position = rng.below(tokens.len() + 1);
            tracing::trace!(position, "inserting number");
            tokens.insert(position, Zeroizing::new(number.to_string()));
        }

        if config.symbols() {
            let symbol = INSERTED_SYMBOLS[rng.below(INSERTED_SYMBOLS.len())];
            let position = rng.below(tokens.len() + 1);
            tracing::trace!(position, "inserting symbol");
            tokens.insert(position, Zeroizing::new(symbol.to_string()));
        }

        let passphrase = join_tokens(&tokens, config.separator_kind().as_str());
        let strength = calculate_strength(&passphrase);

        GenerationResult {
            passphrase,
            strength: Some(strength),
        }
    }

    pub fn generate_batch<R: RandomSource>(
        &self,
        config: &PassphraseConfig,
        count: usize,
        rng: &mut R,
    ) -> Vec<GenerationResult> {
        (0..count).map(|_| self.generate(config, rng)).collect()
    }
}

/// Random capitalization flips the whole word, never individual letters.
pub fn apply_capitalization<R: RandomSource>(
    word: &str,
    capitalization: Capitalization,
    rng: &mut R,
) -> String {
    match capitalization {
        Capitalization::None => word.to_lowercase(),
        Capitalization::First => capitalize_first(word),
        Capitalization::All => word.to_uppercase(),
        Capitalization::Random => {
            if rng.coin() {
                word.to_uppercase()
            } else {
                word.to_lowercase()
            }
        }
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_tokens(tokens: &[Zeroizing<String>], separator: &str) -> Zeroizing<String> {
    let capacity = tokens.iter().map(|t| t.len()).sum::<usize>()
        + separator.len() * tokens.len().saturating_sub(1);
    let mut joined = Zeroizing::new(String::with_capacity(capacity));
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(token);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Separator;
    use crate::random::{KeystreamRandom, ScriptedRandom, ThreadRandom};

    fn stub_catalog() -> WordCatalog {
        WordCatalog::from_words(&["cat", "dog", "bird"])
    }

    fn is_number_token(token: &str) -> bool {
        (2..=3).contains(&token.len())
            && token.chars().all(|c| c.is_ascii_digit())
            && (NUMBER_MIN..=NUMBER_MAX).contains(&token.parse::<usize>().unwrap())
    }

    #[test]
    fn test_example_first_letter_with_number() {
        let catalog = stub_catalog();
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::new(4)
            .unwrap()
            .separator(Separator::Dash)
            .capitalization(Capitalization::First)
            .include_numbers(true)
            .include_symbols(false);

        let mut rng = ThreadRandom;
        for _ in 0..200 {
            let result = engine.generate(&config, &mut rng);
            let segments: Vec<&str> = result.passphrase.split('-').collect();
            assert_eq!(segments.len(), 5, "{}", result.passphrase.as_str());

            let numbers = segments.iter().filter(|s| is_number_token(s)).count();
            assert_eq!(numbers, 1);

            for word in segments.iter().filter(|s| !is_number_token(s)) {
                assert!(["Cat", "Dog", "Bird"].contains(word), "{}", word);
            }
        }
    }

    #[test]
    fn test_word_segments_match_word_count() {
        let catalog = WordCatalog::standard();
        let engine = PassphraseEngine::new(catalog);
        let mut rng = KeystreamRandom::new(&[11u8; 32]);

        for count in 2..=8 {
            for separator in [Separator::Dash, Separator::Space, Separator::Dot] {
                let config = PassphraseConfig::new(count)
                    .unwrap()
                    .separator(separator)
                    .include_numbers(true)
                    .include_symbols(true);
                let result = engine.generate(&config, &mut rng);
                let report = result.strength.unwrap();
                assert_eq!(report.analysis.word_segments, count);
            }
        }
    }

    #[test]
    fn test_capitalization_all_and_none() {
        let engine = PassphraseEngine::new(WordCatalog::standard());
        let mut rng = KeystreamRandom::new(&[12u8; 32]);

        let upper = PassphraseConfig::new(8)
            .unwrap()
            .capitalization(Capitalization::All);
        let lower = PassphraseConfig::new(8)
            .unwrap()
            .capitalization(Capitalization::None);

        for _ in 0..50 {
            let result = engine.generate(&upper, &mut rng);
            assert!(
                result
                    .passphrase
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .all(|c| c.is_uppercase())
            );

            let result = engine.generate(&lower, &mut rng);
            assert!(
                result
                    .passphrase
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .all(|c| c.is_lowercase())
            );
        }
    }

    #[test]
    fn test_random_capitalization_whole_words() {
        let engine = PassphraseEngine::new(WordCatalog::standard());
        let mut rng = KeystreamRandom::new(&[13u8; 32]);
        let config = PassphraseConfig::new(8)
            .unwrap()
            .capitalization(Capitalization::Random)
            .include_numbers(false);

        let mut saw_upper = false;
        let mut saw_lower = false;
        for _ in 0..50 {
            let result = engine.generate(&config, &mut rng);
            for word in result.passphrase.split('-') {
                let upper = word.chars().all(|c| c.is_uppercase());
                let lower = word.chars().all(|c| c.is_lowercase());
                assert!(upper || lower, "mixed word {}", word);
                saw_upper |= upper;
                saw_lower |= lower;
            }
        }
        assert!(saw_upper && saw_lower);
    }

    #[test]
    fn test_capitalization_applies_to_custom_words() {
        let catalog = WordCatalog::from_words(&[]);
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::new(3)
            .unwrap()
            .capitalization(Capitalization::First)
            .include_numbers(false)
            .custom_words("mcDONALD");

        let result = engine.generate(&config, &mut ThreadRandom);
        assert_eq!(result.passphrase.as_str(), "Mcdonald-Mcdonald-Mcdonald");

        let config = config.capitalization(Capitalization::None);
        let result = engine.generate(&config, &mut ThreadRandom);
        assert_eq!(result.passphrase.as_str(), "mcdonald-mcdonald-mcdonald");
    }

    #[test]
    fn test_control_characters_never_reach_output() {
        let catalog = WordCatalog::from_words(&[]);
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::new(2)
            .unwrap()
            .include_numbers(false)
            .custom_words("ab\u{1b}[2Jcd safe");

        let mut rng = ThreadRandom;
        for _ in 0..20 {
            let result = engine.generate(&config, &mut rng);
            assert!(!result.passphrase.chars().any(char::is_control));
            assert_eq!(result.passphrase.as_str(), "safe-safe");
            assert_eq!(result.strength.unwrap().analysis.word_segments, 2);
        }

        let config = config.custom_words("\u{7}only\u{7}");
        let result = engine.generate(&config, &mut rng);
        assert!(result.is_empty());
        assert!(result.strength.is_none());
    }

    #[test]
    fn test_empty_catalog_yields_no_result() {
        let catalog = WordCatalog::from_words(&[]);
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::default().include_symbols(true);

        let result = engine.generate(&config, &mut ThreadRandom);
        assert!(result.is_empty());
        assert!(result.strength.is_none());
        assert!(result.level().is_none());
        assert!(result.crack_time().is_none());
    }

    #[test]
    fn test_scripted_insertion_positions() {
        let catalog = stub_catalog();
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::new(2)
            .unwrap()
            .separator(Separator::Underscore)
            .include_numbers(true)
            .include_symbols(true);

        // words: cat, bird; number 10 + 32 = 42 at index 0; '$' at the end.
        let mut rng = ScriptedRandom::new(vec![0, 2, 32, 0, 3, 3]);
        let result = engine.generate(&config, &mut rng);
        assert_eq!(result.passphrase.as_str(), "42_cat_bird_$");
    }

    #[test]
    fn test_number_appended_at_end() {
        let catalog = stub_catalog();
        let engine = PassphraseEngine::new(&catalog);
        let config = PassphraseConfig::new(2).unwrap().separator(Separator::None);

        // words: dog, dog; number 999 appended after both.
        let mut rng = ScriptedRandom::new(vec![1, 1, 989, 2]);
        let result = engine.generate(&config, &mut rng);
        assert_eq!(result.passphrase.as_str(), "dogdog999");
    }

    #[test]
    fn test_symbols_only_from_insertion_set() {
        let engine = PassphraseEngine::new(WordCatalog::standard());
        let config = PassphraseConfig::new(3)
            .unwrap()
            .include_numbers(false)
            .include_symbols(true);

        let mut rng = KeystreamRandom::new(&[14u8; 32]);
        for _ in 0..100 {
            let result = engine.generate(&config, &mut rng);
            let symbols: Vec<char> = result
                .passphrase
                .chars()
                .filter(|c| !c.is_alphabetic() && *c != '-')
                .collect();
            assert_eq!(symbols.len(), 1);
            assert!(INSERTED_SYMBOLS.contains(&symbols[0]));
        }
    }

    #[test]
    fn test_seeded_generation_deterministic() {
        let engine = PassphraseEngine::new(WordCatalog::standard());
        let config = PassphraseConfig::new(6)
            .unwrap()
            .capitalization(Capitalization::Random)
            .include_symbols(true);

        let first = engine.generate_batch(&config, 5, &mut KeystreamRandom::new(&[42u8; 32]));
        let second = engine.generate_batch(&config, 5, &mut KeystreamRandom::new(&[42u8; 32]));
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_strength_matches_direct_scoring() {
        let engine = PassphraseEngine::new(WordCatalog::standard());
        let config = PassphraseConfig::new(5)
            .unwrap()
            .capitalization(Capitalization::First)
            .include_symbols(true);

        let result = engine.generate(&config, &mut KeystreamRandom::new(&[15u8; 32]));
        assert_eq!(
            result.strength,
            Some(calculate_strength(&result.passphrase))
        );
    }

    #[test]
    fn test_capitalize_first_lowercases_rest() {
        assert_eq!(capitalize_first("hELLO"), "Hello");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first(""), "");
    }
}
