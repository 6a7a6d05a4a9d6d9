//! Place name extraction from free-text travel queries
//!
//! Extraction runs an ordered list of [`PlaceMatcher`]s and takes the first
//! non-empty candidate. The default list is three regex patterns followed by a
//! positional heuristic that looks at the words after a trigger preposition.

use crate::{Result, TourismAiError};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

const PUNCTUATION_TOKENS: [&str; 4] = [",", ".", "?", "!"];

/// A place name candidate together with the text it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    pub place_name: String,
    pub raw_text: String,
}

/// Lower-cased words that end a place name
#[derive(Debug, Clone)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new([
            "what",
            "where",
            "when",
            "which",
            "who",
            "how",
            "let's",
            "let",
            "plan",
            "planning",
            "temperature",
            "temp",
            "weather",
            "places",
            "attractions",
            "visit",
            "can",
            "should",
            "will",
            "is",
            "are",
            "and",
        ])
    }

    /// Case-insensitive membership test for a single word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

/// One independent extraction strategy
pub trait PlaceMatcher: Send + Sync {
    /// Label used in logs
    fn label(&self) -> &str;

    /// Candidate place name, already cleaned and capitalized
    fn candidate(&self, raw_text: &str, stop_words: &StopWords) -> Option<String>;
}

/// Regex with one capture group holding the place phrase
pub struct PatternMatcher {
    label: String,
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            TourismAiError::validation(format!("Invalid place pattern '{pattern}': {e}"))
        })?;
        Ok(Self {
            label: label.into(),
            regex,
        })
    }
}

impl PlaceMatcher for PatternMatcher {
    fn label(&self) -> &str {
        &self.label
    }

    fn candidate(&self, raw_text: &str, stop_words: &StopWords) -> Option<String> {
        let captured = self.regex.captures(raw_text)?.get(1)?.as_str();

        let words: Vec<&str> = captured
            .split_whitespace()
            .take_while(|word| !stop_words.contains(word))
            .collect();
        if words.is_empty() {
            return None;
        }

        Some(capitalize(&words.join(" ")))
    }
}

/// Collects the words right after the first trigger word, up to a stop-word
/// or a standalone punctuation token
pub struct PositionalMatcher {
    triggers: HashSet<String>,
}

impl PositionalMatcher {
    pub fn new<I>(triggers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for PositionalMatcher {
    fn default() -> Self {
        Self::new(["to", "visit", "visiting", "in", "going"])
    }
}

impl PlaceMatcher for PositionalMatcher {
    fn label(&self) -> &str {
        "positional"
    }

    fn candidate(&self, raw_text: &str, stop_words: &StopWords) -> Option<String> {
        let words: Vec<&str> = raw_text.split_whitespace().collect();

        // Only the span after the first trigger counts, even if it is empty.
        let start = (1..words.len()).find(|&i| self.triggers.contains(&words[i - 1].to_lowercase()))?;

        let collected: Vec<&str> = words[start..]
            .iter()
            .copied()
            .take_while(|word| !stop_words.contains(word) && !is_punctuation_token(word))
            .collect();

        let joined = collected.join(" ");
        let trimmed = joined.trim_end_matches([',', '.', '!', '?']);
        if trimmed.is_empty() {
            return None;
        }

        Some(title_case(trimmed))
    }
}

/// Ordered matchers plus the stop-words they share
pub struct PlaceNameExtractor {
    matchers: Vec<Box<dyn PlaceMatcher>>,
    stop_words: StopWords,
}

impl PlaceNameExtractor {
    #[must_use]
    pub fn new(matchers: Vec<Box<dyn PlaceMatcher>>, stop_words: StopWords) -> Self {
        Self {
            matchers,
            stop_words,
        }
    }

    /// English patterns in priority order, then the positional fallback
    pub fn english() -> Result<Self> {
        let terminator = r"(?:[,.?!]|$)";
        let matchers: Vec<Box<dyn PlaceMatcher>> = vec![
            Box::new(PatternMatcher::new(
                "trip-phrase",
                &format!(
                    r"(?i)\b(?:going\s+to(?:\s+go\s+to)?|trip\s+to|travel(?:l?ing)?\s+to|heading\s+to|visiting|visit)\s+([a-zA-Z][a-zA-Z\s]*?)(?:\s+(?:what|where|when|let|plan|conditions)\b|{terminator})"
                ),
            )?),
            Box::new(PatternMatcher::new(
                "in-phrase",
                &format!(
                    r"(?i)\bin\s+([a-zA-Z][a-zA-Z\s]*?)(?:\s+(?:what|where|when|it|the|conditions)\b|{terminator})"
                ),
            )?),
            Box::new(PatternMatcher::new(
                "leading-place",
                r"(?i)^([a-zA-Z][a-zA-Z\s]+?),?\s+(?:let's|let\s+us|what|where|temperature|and)\b",
            )?),
            Box::new(PositionalMatcher::default()),
        ];
        Ok(Self::new(matchers, StopWords::english()))
    }

    /// First non-empty candidate across the matchers, in order
    #[must_use]
    pub fn extract(&self, raw_text: &str) -> Option<String> {
        self.matchers.iter().find_map(|matcher| {
            let candidate = matcher.candidate(raw_text, &self.stop_words)?;
            debug!(matcher = matcher.label(), place = %candidate, "Extracted place name");
            Some(candidate)
        })
    }

    /// Same as [`extract`](Self::extract) but keeps the raw text alongside
    #[must_use]
    pub fn parse(&self, raw_text: &str) -> Option<PlaceQuery> {
        self.extract(raw_text).map(|place_name| PlaceQuery {
            place_name,
            raw_text: raw_text.to_string(),
        })
    }
}

fn is_punctuation_token(word: &str) -> bool {
    PUNCTUATION_TOKENS.iter().any(|p| *p == word)
}

/// All-lowercase names are title-cased, otherwise only the first letter is
/// raised and the rest kept as typed
fn capitalize(name: &str) -> String {
    let has_cased = name.chars().any(char::is_alphabetic);
    if has_cased && !name.chars().any(char::is_uppercase) {
        return title_case(name);
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => first.to_uppercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}
