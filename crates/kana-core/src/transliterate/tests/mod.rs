
use crate::table::KanaTable;

fn t(input: &str) -> String {
    super::transliterate_with(KanaTable::global(), input)
}
