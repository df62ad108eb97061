use std::fmt::{self, Write};

/// Which side of a word boundary a unit falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Kana,
    Verbatim,
}

/// One emitted unit of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'t> {
    Kana(KanaUnit<'t>),
    /// Any code point that is not a syllable, copied through unchanged.
    Verbatim(char),
}

impl Unit<'_> {
    pub fn class(&self) -> Class {
        match self {
            Unit::Kana(_) => Class::Kana,
            Unit::Verbatim(_) => Class::Verbatim,
        }
    }
}

impl fmt::Display for Unit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Kana(k) => fmt::Display::fmt(k, f),
            Unit::Verbatim(c) => f.write_char(*c),
        }
    }
}

/// A syllable, possibly combined with the small kana that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaUnit<'t> {
    Plain {
        base: &'t str,
    },
    /// Syllable + small ya/yu/yo: the base loses its last letter and the glide
    /// its first, so ち + ゃ → "cha" but き + ゃ → "ka".
    Palatalized {
        base: &'t str,
        glide: &'t str,
    },
    /// Syllable + small vowel. Renders as `base-`; the vowel itself is
    /// kept here but not written.
    Lengthened {
        base: &'t str,
        vowel: &'t str,
    },
    /// Syllable + small tsu/ka/ke. Renders as `<base.tag>`.
    Anomaly {
        base: &'t str,
        tag: &'t str,
    },
}

impl fmt::Display for KanaUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KanaUnit::Plain { base } => f.write_str(base),
            KanaUnit::Palatalized { base, glide } => {
                f.write_str(drop_last(base))?;
                f.write_str(drop_first(glide))
            }
            KanaUnit::Lengthened { base, .. } => write!(f, "{base}-"),
            KanaUnit::Anomaly { base, tag } => write!(f, "<{base}.{tag}>"),
        }
    }
}

fn drop_last(s: &str) -> &str {
    s.char_indices().next_back().map_or(s, |(i, _)| &s[..i])
}

fn drop_first(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}
