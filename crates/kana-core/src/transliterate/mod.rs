//! Kana-to-romaji transliteration.
//!
//! [`Transliterator`] scans code points into [`Unit`]s, and [`RomajiWriter`]
//! renders them with a single space at every kana/verbatim boundary.

mod scan;
mod unit;
mod writer;

#[cfg(test)]
mod tests;

use std::fmt;

use tracing::{debug, debug_span};

use crate::table::KanaTable;
use crate::unicode::is_kanji;

pub use scan::Transliterator;
pub use unit::{Class, KanaUnit, Unit};
pub use writer::RomajiWriter;

/// Transliterate `input` with the global table. The result always ends in a newline.
pub fn transliterate(input: &str) -> String {
    transliterate_with(KanaTable::global(), input)
}

pub fn transliterate_with(table: &KanaTable, input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    // fmt::Write for String never fails.
    let _ = write_romaji(table, input.chars(), &mut out);
    out
}

/// Drive the scan over `chars` and write the rendered romaji to `out`.
pub fn write_romaji<W, I>(table: &KanaTable, chars: I, out: W) -> fmt::Result
where
    W: fmt::Write,
    I: Iterator<Item = char>,
{
    let _span = debug_span!("write_romaji").entered();

    let mut writer = RomajiWriter::new(out);
    let (mut kana, mut verbatim, mut kanji, mut anomalies) = (0usize, 0usize, 0usize, 0usize);
    for unit in Transliterator::new(table, chars) {
        match unit {
            Unit::Kana(KanaUnit::Anomaly { .. }) => {
                kana += 1;
                anomalies += 1;
            }
            Unit::Kana(_) => kana += 1,
            Unit::Verbatim(c) => {
                verbatim += 1;
                if is_kanji(c) {
                    kanji += 1;
                }
            }
        }
        writer.push(&unit)?;
    }
    writer.finish()?;

    debug!(kana, verbatim, kanji, anomalies);
    Ok(())
}
