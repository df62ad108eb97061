//! Kana lookup tables.
//!
//! The syllable, glide, small-vowel and mark tables are declared in an
//! embedded TOML document and loaded once into a [`KanaTable`] singleton.
//! A custom document can replace the default before first use.

mod config;
mod kana_table;

pub use config::{parse_table_toml, TableError};
pub use kana_table::{KanaTable, Modifier};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
