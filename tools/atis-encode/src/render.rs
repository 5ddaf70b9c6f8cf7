//! Array-literal rendering
//!
//! Every element becomes a comma-terminated token. Integer arrays put one
//! token per line; the byte array packs `row_width` tokens per line with no
//! spaces between them. Wrapping never changes token order or count.

use crate::config::NumberBase;
use crate::index::IndexTable;

/// Bodies of the three generated arrays (text between the braces)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub lengths: String,
    pub offsets: String,
    pub data: String,
}

pub fn render_table(
    index: &IndexTable,
    blob: &[u8],
    row_width: usize,
    base: NumberBase,
) -> RenderedTable {
    RenderedTable {
        lengths: render_integers(index.lengths()),
        offsets: render_integers(index.offsets()),
        data: render_bytes(blob, row_width, base),
    }
}

fn render_integers(values: &[usize]) -> String {
    values
        .iter()
        .map(|value| format!("{},", value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bytes(bytes: &[u8], row_width: usize, base: NumberBase) -> String {
    bytes
        .chunks(row_width.max(1))
        .map(|row| {
            row.iter()
                .map(|&byte| format_byte(byte, base))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_byte(byte: u8, base: NumberBase) -> String {
    match base {
        // 0x0, 0x1f, 0xff: lowercase, unpadded
        NumberBase::Hex => format!("{:#x},", byte),
        NumberBase::Decimal => format!("{},", byte),
    }
}

/// Parse a rendered array body back into values.
///
/// Accepts both hex (`0x..`) and decimal tokens. Returns `None` on any token
/// that isn't a number.
pub fn parse_tokens(body: &str) -> Option<Vec<u64>> {
    body.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => token.parse().ok(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arrays_one_per_line() {
        let index = IndexTable::from_lengths(vec![3, 0, 5]);
        let table = render_table(&index, &[0; 8], 32, NumberBase::Hex);

        assert_eq!(table.lengths, "3,\n0,\n5,");
        assert_eq!(table.offsets, "0,\n3,\n3,");
    }

    #[test]
    fn test_hex_bytes_are_unpadded_lowercase() {
        let index = IndexTable::from_lengths(vec![4]);
        let table = render_table(&index, &[0x00, 0x0a, 0xab, 0xff], 32, NumberBase::Hex);
        assert_eq!(table.data, "0x0,0xa,0xab,0xff,");
    }

    #[test]
    fn test_decimal_bytes() {
        let index = IndexTable::from_lengths(vec![3]);
        let table = render_table(&index, &[0, 10, 255], 32, NumberBase::Decimal);
        assert_eq!(table.data, "0,10,255,");
    }

    #[test]
    fn test_row_wrapping() {
        let bytes: Vec<u8> = (0..70).collect();
        let data = render_bytes(&bytes, 32, NumberBase::Hex);
        let rows: Vec<&str> = data.lines().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].matches(',').count(), 32);
        assert_eq!(rows[1].matches(',').count(), 32);
        assert_eq!(rows[2].matches(',').count(), 6);
        assert!(rows[2].ends_with("0x45,"));
    }

    #[test]
    fn test_row_width_does_not_change_tokens() {
        let bytes: Vec<u8> = (0..=255).rev().collect();
        let wide = render_bytes(&bytes, 32, NumberBase::Hex);
        let narrow = render_bytes(&bytes, 1, NumberBase::Hex);

        assert_ne!(wide, narrow);
        assert_eq!(narrow.lines().count(), 256);
        let expected: Vec<u64> = bytes.iter().map(|&b| b as u64).collect();
        assert_eq!(parse_tokens(&wide), Some(expected.clone()));
        assert_eq!(parse_tokens(&narrow), Some(expected));
    }

    #[test]
    fn test_token_counts_match_sources() {
        let index = IndexTable::from_lengths(vec![5, 0, 2, 9]);
        let blob = vec![7u8; index.total_len()];
        let table = render_table(&index, &blob, 4, NumberBase::Hex);

        assert_eq!(parse_tokens(&table.lengths).unwrap().len(), 4);
        assert_eq!(parse_tokens(&table.offsets).unwrap().len(), 4);
        assert_eq!(parse_tokens(&table.data).unwrap().len(), 16);
    }

    #[test]
    fn test_empty_blob_renders_empty_body() {
        let index = IndexTable::from_lengths(vec![0, 0]);
        let table = render_table(&index, &[], 32, NumberBase::Hex);
        assert_eq!(table.data, "");
        assert_eq!(parse_tokens(&table.data), Some(vec![]));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_tokens("1,2,x,"), None);
    }
}
