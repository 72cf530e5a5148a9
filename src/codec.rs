use std::collections::HashMap;

use anyhow::{Result, bail, ensure};
use log::{debug, warn};

use crate::huffman::CodeTable;

/// What a decode pass produced: the text recovered from the bitstream, and
/// the trailing bits that did not form a complete code, if any were left.
#[derive(Debug, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub leftover: Option<String>,
}

pub fn encode(text: &str, table: &CodeTable) -> String {
    let mut bits = String::new();
    for symbol in text.chars() {
        match table.get(&symbol) {
            Some(code) => bits.push_str(code),
            // symbols the table does not know contribute no bits
            None => debug!("symbol {:?} has no code, skipping", symbol),
        }
    }
    bits
}

pub fn decode(bits: &str, table: &CodeTable) -> Result<Decoded> {
    let inverse = invert(table)?;

    let mut text = String::new();
    let mut buf = String::new();
    for bit in bits.chars() {
        ensure!(
            bit == '0' || bit == '1',
            "invalid character {:?} in encoded input",
            bit
        );
        buf.push(bit);
        if let Some(&symbol) = inverse.get(buf.as_str()) {
            text.push(symbol);
            buf.clear();
        }
    }

    let leftover = if buf.is_empty() {
        None
    } else {
        warn!("trailing bits {:?} match no code in the table", buf);
        Some(buf)
    };

    Ok(Decoded { text, leftover })
}

// A table built by hand can carry codes no tree would produce; reject those
// up front instead of mis-decoding.
fn invert(table: &CodeTable) -> Result<HashMap<&str, char>> {
    let mut inverse = HashMap::with_capacity(table.len());
    for (&symbol, code) in table {
        ensure!(!code.is_empty(), "empty code for symbol {:?}", symbol);
        ensure!(
            code.chars().all(|bit| bit == '0' || bit == '1'),
            "code {:?} for symbol {:?} is not binary",
            code,
            symbol
        );
        if let Some(prev) = inverse.insert(code.as_str(), symbol) {
            bail!(
                "code {:?} is assigned to both {:?} and {:?}",
                code,
                prev,
                symbol
            );
        }
    }

    // Sorted lexicographically, a prefix lands right before its extensions
    let mut codes: Vec<&str> = table.values().map(String::as_str).collect();
    codes.sort_unstable();
    for pair in codes.windows(2) {
        ensure!(
            !pair[1].starts_with(pair[0]),
            "code {:?} is a prefix of code {:?}",
            pair[0],
            pair[1]
        );
    }

    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::{build_tree, code_table, sorted_frequencies};

    fn table_for(text: &str) -> CodeTable {
        code_table(build_tree(sorted_frequencies(text)).as_ref())
    }

    #[test]
    fn round_trips_sample_texts_at_known_lengths() {
        let samples = [
            ("beep boop beer!", 40),
            ("qwe5qwq", 13),
            ("Абракадабра", 27),
            ("", 0),
            ("fffff", 5),
            ("Если нет хлеба, пусть едят пирожные", 146),
        ];
        for (text, expected_bits) in samples {
            let table = table_for(text);
            let bits = encode(text, &table);
            assert_eq!(bits.len(), expected_bits, "encoded length of {:?}", text);

            let decoded = decode(&bits, &table).unwrap();
            assert_eq!(decoded.text, text);
            assert_eq!(decoded.leftover, None);
        }
    }

    #[test]
    fn encode_skips_symbols_missing_from_the_table() {
        let table = table_for("qwe5qwq");
        assert_eq!(encode("qxq", &table), "00");
    }

    #[test]
    fn encode_with_empty_table_yields_no_bits() {
        assert_eq!(encode("anything", &CodeTable::new()), "");
    }

    #[test]
    fn decode_keeps_the_undecodable_tail() {
        // q:"0", w:"11", e:"100", 5:"101"
        let table = table_for("qwe5qwq");
        let decoded = decode("0111", &table).unwrap();
        assert_eq!(decoded.text, "qw");
        assert_eq!(decoded.leftover.as_deref(), Some("1"));
    }

    #[test]
    fn empty_bitstream_decodes_to_empty_text() {
        let decoded = decode("", &table_for("abc")).unwrap();
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.leftover, None);
    }

    #[test]
    fn decode_rejects_duplicate_codes() {
        let table = CodeTable::from([('a', "01".to_string()), ('b', "01".to_string())]);
        assert!(decode("01", &table).is_err());
    }

    #[test]
    fn decode_rejects_prefix_violations() {
        let table = CodeTable::from([('a', "0".to_string()), ('b', "01".to_string())]);
        assert!(decode("0", &table).is_err());
    }

    #[test]
    fn decode_rejects_empty_codes() {
        let table = CodeTable::from([('a', String::new())]);
        assert!(decode("", &table).is_err());
    }

    #[test]
    fn decode_rejects_non_binary_codes() {
        let table = CodeTable::from([('a', "0x1".to_string())]);
        assert!(decode("", &table).is_err());
    }

    #[test]
    fn decode_rejects_non_binary_input() {
        let table = table_for("ab");
        assert!(decode("0a1", &table).is_err());
    }
}
