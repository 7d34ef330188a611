use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

/// Digits, optionally followed by a decimal point and more digits.
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*").expect("numeric pattern compiles"));

#[derive(Debug, Error, PartialEq)]
pub enum NumberSourceError {
    #[error("value out of range: {0}")]
    NonFinite(String),
    #[error("number source unavailable")]
    Unavailable,
}

/// A strategy for pulling numbers out of text, in order of appearance.
pub trait NumberSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn numbers(&self, text: &str) -> Result<Vec<f64>, NumberSourceError>;
}

/// Regex scan. Never fails; unparsable matches are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternNumberSource;

impl NumberSource for PatternNumberSource {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn numbers(&self, text: &str) -> Result<Vec<f64>, NumberSourceError> {
        Ok(NUMBER_PATTERN
            .find_iter(text)
            .filter_map(|m| m.as_str().trim_end_matches('.').parse::<f64>().ok())
            .collect())
    }
}

/// Word-level number reader: digit-led tokens plus spelled-out English numbers
/// ("twenty one", "three point five").
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalNumberSource;

fn small_number(word: &str) -> Option<f64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value as f64)
}

fn tens(word: &str) -> Option<f64> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value as f64)
}

fn digit_led(token: &str) -> Option<&str> {
    let token = token.trim_matches('.');
    if !token.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    let mut literal = &token[..end];
    // "1.2.3" reads as 1.2
    if let Some(first) = literal.find('.') {
        if let Some(second) = literal[first + 1..].find('.') {
            literal = &literal[..first + 1 + second];
        }
    }
    Some(literal.trim_end_matches('.'))
}

/// Running state while reading a run of number words.
#[derive(Default)]
struct WordNumber {
    whole: f64,
    current: f64,
    fraction: Option<String>,
    active: bool,
    after_scale: bool,
    /// "thousand" already applied; a second one starts nothing.
    thousands: bool,
}

impl WordNumber {
    fn value(&self) -> f64 {
        let whole = self.whole + self.current;
        match &self.fraction {
            Some(digits) if !digits.is_empty() => format!("{}.{}", whole, digits)
                .parse::<f64>()
                .unwrap_or(whole),
            _ => whole,
        }
    }

    fn joins(&self, n: f64) -> bool {
        if !self.active {
            return true;
        }
        if self.after_scale {
            return n < 100.0;
        }
        let rem = self.current % 100.0;
        rem >= 20.0 && rem % 10.0 == 0.0 && n < 10.0
    }

    /// Feeds one word. Returns false when the word does not continue this number.
    fn push(&mut self, word: &str) -> bool {
        if let Some(digits) = self.fraction.as_mut() {
            return match small_number(word) {
                Some(d) if d < 10.0 => {
                    digits.push_str(&format!("{}", d as u8));
                    true
                }
                _ => false,
            };
        }
        if let Some(n) = small_number(word).or_else(|| tens(word)) {
            if !self.joins(n) {
                return false;
            }
            self.current += n;
            self.active = true;
            self.after_scale = false;
            return true;
        }
        match word {
            "hundred" if self.active && !self.after_scale => {
                self.current *= 100.0;
                self.after_scale = true;
                true
            }
            // "one hundred thousand" scales the whole run so far
            "thousand" if self.active && !self.thousands => {
                self.whole = (self.whole + self.current) * 1000.0;
                self.current = 0.0;
                self.after_scale = true;
                self.thousands = true;
                true
            }
            "and" if self.after_scale => true,
            "point" if self.active => {
                self.fraction = Some(String::new());
                true
            }
            _ => false,
        }
    }
}

impl NumberSource for LexicalNumberSource {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn numbers(&self, text: &str) -> Result<Vec<f64>, NumberSourceError> {
        let mut out = Vec::new();
        let mut pending = WordNumber::default();

        let tokens = text
            .split(|c: char| !(c.is_alphanumeric() || c == '.'))
            .filter(|t| !t.is_empty());

        for token in tokens {
            if let Some(literal) = digit_led(token) {
                if pending.active {
                    out.push(pending.value());
                    pending = WordNumber::default();
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| NumberSourceError::NonFinite(literal.to_string()))?;
                if !value.is_finite() {
                    return Err(NumberSourceError::NonFinite(literal.to_string()));
                }
                out.push(value);
                continue;
            }

            let word = token.trim_matches('.');
            if pending.push(word) {
                continue;
            }
            if pending.active {
                out.push(pending.value());
                pending = WordNumber::default();
                // the breaking word may itself start a new number
                if pending.push(word) {
                    continue;
                }
            }
        }
        if pending.active {
            out.push(pending.value());
        }
        Ok(out)
    }
}

/// Ordered numeric literals in an utterance.
///
/// The toolkit strategy (when installed) runs first against the lower-cased
/// text; the regex strategy only runs when the toolkit errors or finds nothing.
/// The two results are never merged.
pub struct NumericTokenExtractor {
    toolkit: Option<Box<dyn NumberSource>>,
    fallback: PatternNumberSource,
}

impl Default for NumericTokenExtractor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl NumericTokenExtractor {
    pub fn new(toolkit_enabled: bool) -> Self {
        if toolkit_enabled {
            Self::with_toolkit(Box::new(LexicalNumberSource))
        } else {
            Self::pattern_only()
        }
    }

    pub fn with_toolkit(toolkit: Box<dyn NumberSource>) -> Self {
        Self {
            toolkit: Some(toolkit),
            fallback: PatternNumberSource,
        }
    }

    pub fn pattern_only() -> Self {
        Self {
            toolkit: None,
            fallback: PatternNumberSource,
        }
    }

    pub fn has_toolkit(&self) -> bool {
        self.toolkit.is_some()
    }

    pub fn extract(&self, text: &str) -> Vec<f64> {
        if let Some(toolkit) = &self.toolkit {
            match toolkit.numbers(&text.to_lowercase()) {
                Ok(values) if !values.is_empty() => return values,
                Ok(_) => {}
                Err(e) => warn!("Number toolkit '{}' failed: {}", toolkit.name(), e),
            }
        }
        self.fallback.numbers(text).unwrap_or_default()
    }
}
