use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::kana_table::{KanaTable, Modifier};
use crate::unicode::is_kana;

#[derive(Deserialize)]
struct TableConfig {
    syllables: BTreeMap<String, String>,
    #[serde(default)]
    glides: BTreeMap<String, String>,
    #[serde(default)]
    vowels: BTreeMap<String, String>,
    #[serde(default)]
    marks: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[syllables] table is empty")]
    EmptySyllables,
    #[error("[{section}] key is not a single character: {key:?}")]
    InvalidKey { section: &'static str, key: String },
    #[error("[{section}] key is not kana: {key}")]
    NotKana { section: &'static str, key: char },
    #[error("[{section}] empty value for key: {key}")]
    EmptyValue { section: &'static str, key: char },
    #[error("{key} appears in both [{first}] and [{second}]")]
    DuplicateModifier {
        key: char,
        first: &'static str,
        second: &'static str,
    },
    #[error("{key} is both a syllable and a small marker in [{section}]")]
    Overlap { key: char, section: &'static str },
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a validated [`KanaTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<KanaTable, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.syllables.is_empty() {
        return Err(TableError::EmptySyllables);
    }

    let mut syllables = HashMap::with_capacity(config.syllables.len());
    for (key, value) in config.syllables {
        let c = parse_entry("syllables", &key, &value)?;
        syllables.insert(c, value);
    }

    let mut modifiers: HashMap<char, Modifier> = HashMap::new();
    let sections: [(&'static str, BTreeMap<String, String>, fn(String) -> Modifier); 3] = [
        ("glides", config.glides, Modifier::Glide),
        ("vowels", config.vowels, Modifier::Vowel),
        ("marks", config.marks, Modifier::Mark),
    ];
    for (section, entries, make) in sections {
        for (key, value) in entries {
            let c = parse_entry(section, &key, &value)?;
            if syllables.contains_key(&c) {
                return Err(TableError::Overlap { key: c, section });
            }
            if let Some(existing) = modifiers.get(&c) {
                return Err(TableError::DuplicateModifier {
                    key: c,
                    first: existing.section(),
                    second: section,
                });
            }
            modifiers.insert(c, make(value));
        }
    }

    Ok(KanaTable::new(syllables, modifiers))
}

fn parse_entry(section: &'static str, key: &str, value: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(TableError::InvalidKey {
                section,
                key: key.to_string(),
            })
        }
    };
    if !is_kana(c) {
        return Err(TableError::NotKana { section, key: c });
    }
    if value.is_empty() {
        return Err(TableError::EmptyValue { section, key: c });
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[syllables]
"か" = "ka"
"キ" = "ki"

[glides]
"ゃ" = "ya"

[marks]
"っ" = "hold"
"#;
        let table = parse_table_toml(toml).unwrap();
        assert_eq!(table.syllable_count(), 2);
        assert_eq!(table.modifier_count(), 2);
        assert_eq!(table.syllable('か'), Some("ka"));
        assert_eq!(table.modifier('ゃ'), Some(&Modifier::Glide("ya".into())));
        assert_eq!(table.modifier('っ'), Some(&Modifier::Mark("hold".into())));
    }

    #[test]
    fn parse_default_toml() {
        let table = parse_table_toml(super::super::DEFAULT_TOML).unwrap();
        assert_eq!(table.syllable_count(), 148);
        assert_eq!(table.modifier_count(), 22);
    }

    #[test]
    fn modifier_sections_are_optional() {
        let table = parse_table_toml("[syllables]\n\"あ\" = \"a\"\n").unwrap();
        assert_eq!(table.modifier_count(), 0);
        assert!(!table.is_small('ぁ'));
    }

    #[test]
    fn error_empty_syllables() {
        let err = parse_table_toml("[syllables]\n").unwrap_err();
        assert!(matches!(err, TableError::EmptySyllables));
    }

    #[test]
    fn error_missing_syllables() {
        let err = parse_table_toml("[marks]\n\"っ\" = \"hold\"\n").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = "
[syllables]
\"きゃ\" = \"kya\"
";
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidKey { section: "syllables", .. }
        ));
    }

    #[test]
    fn error_non_kana_key() {
        let toml = r#"
[syllables]
"a" = "a"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NotKana { key: 'a', .. }));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[syllables]
"あ" = ""
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyValue { key: 'あ', .. }));
    }

    #[test]
    fn error_modifier_in_two_sections() {
        let toml = r#"
[syllables]
"か" = "ka"

[glides]
"ゃ" = "ya"

[marks]
"ゃ" = "odd"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::DuplicateModifier {
                key: 'ゃ',
                first: "glides",
                second: "marks",
            }
        ));
    }

    #[test]
    fn error_syllable_used_as_modifier() {
        let toml = r#"
[syllables]
"や" = "ya"

[glides]
"や" = "ya"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::Overlap {
                key: 'や',
                section: "glides"
            }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
