use std::iter::Peekable;

use super::unit::{KanaUnit, Unit};
use crate::table::{KanaTable, Modifier};

/// Single-pass scanner over code points, yielding one [`Unit`] per syllable
/// or verbatim character.
///
/// The scanner holds one code point of lookahead. A small kana that follows a
/// syllable is consumed together with it; a small kana anywhere else is
/// copied through like any other non-syllable.
pub struct Transliterator<'t, I: Iterator<Item = char>> {
    table: &'t KanaTable,
    chars: Peekable<I>,
}

impl<'t, I: Iterator<Item = char>> Transliterator<'t, I> {
    pub fn new(table: &'t KanaTable, chars: I) -> Self {
        Transliterator {
            table,
            chars: chars.peekable(),
        }
    }
}

impl<'t, I: Iterator<Item = char>> Iterator for Transliterator<'t, I> {
    type Item = Unit<'t>;

    fn next(&mut self) -> Option<Unit<'t>> {
        let table = self.table;
        let c = self.chars.next()?;
        let Some(base) = table.syllable(c) else {
            return Some(Unit::Verbatim(c));
        };

        let modifier = match self.chars.peek() {
            Some(&next) if table.is_small(next) => table.modifier(next),
            _ => None,
        };
        let unit = match modifier {
            None => KanaUnit::Plain { base },
            Some(modifier) => {
                self.chars.next();
                match modifier {
                    Modifier::Glide(g) => KanaUnit::Palatalized { base, glide: g },
                    Modifier::Vowel(v) => KanaUnit::Lengthened { base, vowel: v },
                    Modifier::Mark(t) => KanaUnit::Anomaly { base, tag: t },
                }
            }
        };
        Some(Unit::Kana(unit))
    }
}
