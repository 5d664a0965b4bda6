// This file is part of Phrasegen.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Base vocabulary grouped by theme. Duplicates across categories are kept
/// and weight the draw accordingly.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "animals",
        &[
            "cat", "dog", "bird", "fish", "lion", "tiger", "bear", "wolf", "fox", "deer", "horse",
            "cow", "pig", "sheep", "goat", "duck", "frog", "snake", "mouse", "rabbit",
        ],
    ),
    (
        "colors",
        &[
            "red", "blue", "green", "yellow", "orange", "purple", "pink", "black", "white",
            "brown", "gray", "silver", "gold", "cyan", "lime", "navy", "coral", "amber", "jade",
            "ruby",
        ],
    ),
    (
        "objects",
        &[
            "house", "car", "book", "phone", "chair", "table", "door", "window", "key", "lamp",
            "pen", "paper", "cup", "plate", "knife", "fork", "spoon", "clock", "watch", "ring",
        ],
    ),
    (
        "nature",
        &[
            "tree", "flower", "grass", "rock", "river", "lake", "ocean", "mountain", "valley",
            "beach", "cloud", "rain", "snow", "wind", "fire", "earth", "moon", "star", "planet",
            "galaxy",
        ],
    ),
    (
        "food",
        &[
            "apple", "banana", "orange", "grape", "berry", "bread", "cheese", "milk", "water",
            "coffee", "tea", "cake", "cookie", "pizza", "pasta", "rice", "fish", "meat", "egg",
            "honey",
        ],
    ),
    (
        "actions",
        &[
            "run", "walk", "jump", "swim", "fly", "dance", "sing", "laugh", "smile", "play",
            "work", "study", "read", "write", "draw", "paint", "cook", "clean", "build", "fix",
        ],
    ),
    (
        "adjectives",
        &[
            "big", "small", "tall", "short", "fast", "slow", "hot", "cold", "warm", "cool",
            "bright", "dark", "light", "heavy", "soft", "hard", "smooth", "rough", "quiet", "loud",
        ],
    ),
    (
        "technology",
        &[
            "phone", "laptop", "tablet", "camera", "screen", "button", "cable", "mouse",
            "keyboard", "printer", "robot", "drone", "satellite", "rocket", "engine", "battery",
            "circuit", "sensor", "radar", "laser",
        ],
    ),
    (
        "numbers",
        &[
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "fifty", "hundred", "thousand",
        ],
    ),
];

static STANDARD: OnceLock<WordCatalog> = OnceLock::new();

/// Read-only word table handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    base: Vec<&'static str>,
}

impl WordCatalog {
    /// The built-in vocabulary, flattened in category order.
    pub fn standard() -> &'static WordCatalog {
        STANDARD.get_or_init(|| {
            let base: Vec<&'static str> = CATEGORIES
                .iter()
                .flat_map(|(_, words)| words.iter().copied())
                .collect();
            WordCatalog { base }
        })
    }

    /// A catalog over an explicit word set. May be empty.
    pub fn from_words(words: &[&'static str]) -> Self {
        Self {
            base: words.to_vec(),
        }
    }

    pub fn base_words(&self) -> &[&'static str] {
        &self.base
    }

    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    /// Base words followed by the tokens of `custom_text`.
    pub fn all_words<'a>(&'a self, custom_text: &'a str) -> Vec<Cow<'a, str>> {
        let mut words: Vec<Cow<'a, str>> = self.base.iter().map(|w| Cow::Borrowed(*w)).collect();
        words.extend(parse_custom_words(custom_text));
        words
    }
}

/// Splits on any Unicode whitespace, drops empty tokens and tokens holding
/// control characters, and normalizes each token to NFC. Casing is left as
/// typed.
pub fn parse_custom_words(custom_text: &str) -> impl Iterator<Item = Cow<'_, str>> {
    custom_text
        .split_whitespace()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| {
            let clean = !token.chars().any(char::is_control);
            if !clean {
                tracing::debug!(
                    chars = token.chars().count(),
                    "skipping custom word containing control characters"
                );
            }
            clean
        })
        .map(|token| {
            if unicode_normalization::is_nfc(token) {
                Cow::Borrowed(token)
            } else {
                Cow::Owned(token.nfc().collect())
            }
        })
}
