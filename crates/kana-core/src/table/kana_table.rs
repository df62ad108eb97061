use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_table_toml, TableError};
use super::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<KanaTable> = OnceLock::new();

/// How a small kana modifies the syllable before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Small ya/yu/yo: replaces the syllable's vowel.
    Glide(String),
    /// Small a/i/u/e/o: marks the syllable as lengthened.
    Vowel(String),
    /// Small tsu, ka, ke: no clean romaji, carries a diagnostic tag.
    Mark(String),
}

impl Modifier {
    pub(crate) fn section(&self) -> &'static str {
        match self {
            Modifier::Glide(_) => "glides",
            Modifier::Vowel(_) => "vowels",
            Modifier::Mark(_) => "marks",
        }
    }
}

/// Syllable and small-marker tables, disjoint by construction.
#[derive(Debug)]
pub struct KanaTable {
    syllables: HashMap<char, String>,
    modifiers: HashMap<char, Modifier>,
}

impl KanaTable {
    pub(crate) fn new(
        syllables: HashMap<char, String>,
        modifiers: HashMap<char, Modifier>,
    ) -> Self {
        KanaTable {
            syllables,
            modifiers,
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(toml_str)
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        if INSTANCE.get().is_some() {
            return Err(TableError::AlreadyInitialized);
        }
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("kana table TOML must be valid")
        })
    }

    /// Base romaji for a full syllable.
    pub fn syllable(&self, c: char) -> Option<&str> {
        self.syllables.get(&c).map(|s| s.as_str())
    }

    pub fn modifier(&self, c: char) -> Option<&Modifier> {
        self.modifiers.get(&c)
    }

    /// Whether `c` is a small marker, i.e. only ever modifies a preceding syllable.
    pub fn is_small(&self, c: char) -> bool {
        self.modifiers.contains_key(&c)
    }

    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    pub fn modifier_count(&self) -> usize {
        self.modifiers.len()
    }
}
