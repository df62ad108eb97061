//! Kana-to-romaji transliteration core.
//!
//! Hiragana and katakana are mapped to romaji through [`table::KanaTable`];
//! everything else (kanji, punctuation, Latin) is copied through unchanged.

pub mod table;
pub mod transliterate;
pub mod unicode;

pub use transliterate::{transliterate, transliterate_with};
