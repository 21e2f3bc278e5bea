use log::{debug, error, info};
use thiserror::Error;

use super::format::{Record, Variant};
use crate::constants::{
    AUTHOR_OFFSET, AUTHOR_SIZE, CHARACTER_OFFSET, COLOR_SIZE, DESCRIPTION_OFFSET,
    DESCRIPTION_SIZE, FILE_SIZE, MAGIC_HEADER, MAGIC_SIZE, NAME_OFFSET, NAME_SIZE,
    PALETTE_COLORS, PALETTE_OFFSET, PALETTE_SIZE,
};
use crate::palette::{Color, Palette};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Incorrect file size: needs to be {expected}B, is {actual}B")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Incorrect header: found {found:?}")]
    HeaderMismatch { found: [u8; MAGIC_SIZE] },
}

/// Decodes a whole container held in memory.
///
/// The size is checked before anything else, then the magic header. Only after
/// both pass are the palette and metadata read.
pub fn decode(variant: Variant, encoded_data: &[u8]) -> Result<Record, DecodeError> {
    if encoded_data.len() != FILE_SIZE {
        error!(
            "Incorrect file size: expected {} got {}",
            FILE_SIZE,
            encoded_data.len()
        );
        return Err(DecodeError::SizeMismatch {
            expected: FILE_SIZE,
            actual: encoded_data.len(),
        });
    }

    let mut found = [0u8; MAGIC_SIZE];
    found.copy_from_slice(&encoded_data[..MAGIC_SIZE]);
    if found != MAGIC_HEADER {
        error!("Invalid magic header {:?}", found);
        return Err(DecodeError::HeaderMismatch { found });
    }
    debug!("Magic header validated successfully");

    // Each group is stored back to front: bytes 3, 2, 1 are RGB and byte 0 is alpha.
    let groups = &encoded_data[PALETTE_OFFSET..PALETTE_OFFSET + PALETTE_SIZE];
    let colors: [Color; PALETTE_COLORS] = std::array::from_fn(|i| {
        let group = &groups[i * COLOR_SIZE..(i + 1) * COLOR_SIZE];
        Color::new(group[3], group[2], group[1], group[0])
    });
    let palette = Palette::from(colors);
    debug!("Read {} palette colors", palette.len());

    let name = read_text(encoded_data, NAME_OFFSET, NAME_SIZE);
    let author = read_text(encoded_data, AUTHOR_OFFSET, AUTHOR_SIZE);
    let description = read_text(encoded_data, DESCRIPTION_OFFSET, DESCRIPTION_SIZE);
    let character_id = encoded_data[CHARACTER_OFFSET];
    debug!(
        "Metadata read: name={:?} author={:?} character={}",
        name, author, character_id
    );

    info!("Decoded {} container \"{}\"", variant.extension(), name);
    Ok(Record {
        variant,
        palette,
        name,
        author,
        description,
        character_id,
        raw_bytes: encoded_data.to_vec(),
    })
}

/// Reads a fixed-size text field. A leading UTF-8 BOM is skipped and null
/// bytes are dropped wherever they appear, not only at the end.
pub(crate) fn read_text(data: &[u8], offset: usize, len: usize) -> String {
    let field = &data[offset..offset + len];
    let field = field.strip_prefix(UTF8_BOM).unwrap_or(field);
    String::from_utf8_lossy(field).replace('\0', "")
}

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_container() -> Vec<u8> {
        let mut data = vec![0u8; FILE_SIZE];
        data[..MAGIC_SIZE].copy_from_slice(&MAGIC_HEADER);
        data
    }

    #[test]
    fn test_read_text_drops_embedded_nulls() {
        let data = b"ab\0cd\0\0\0";
        assert_eq!(read_text(data, 0, data.len()), "abcd");
    }

    #[test]
    fn test_read_text_skips_leading_bom() {
        let data = b"\xef\xbb\xbfJin\0\0";
        assert_eq!(read_text(data, 0, data.len()), "Jin");
        // Only a leading mark is dropped.
        let data = b"A\xef\xbb\xbf";
        assert_eq!(read_text(data, 0, data.len()), "A\u{feff}");
    }

    #[test]
    fn test_decode_blank_container() {
        let record = decode(Variant::Cfpl, &blank_container()).unwrap();
        assert_eq!(record.palette.len(), 256);
        assert!(record.name.is_empty());
        assert!(record.author.is_empty());
        assert!(record.description.is_empty());
        assert_eq!(record.character_id, 0);
        assert_eq!(record.raw_bytes.len(), FILE_SIZE);
    }

    #[test]
    fn test_decode_size_checked_before_header() {
        let result = decode(Variant::Impl, &[0u8; 16]);
        assert_eq!(
            result,
            Err(DecodeError::SizeMismatch {
                expected: FILE_SIZE,
                actual: 16
            })
        );
    }

    #[test]
    fn test_decode_unknown_character_id() {
        let mut data = blank_container();
        data[CHARACTER_OFFSET] = 200;
        let record = decode(Variant::Impl, &data).unwrap();
        assert_eq!(record.character_id, 200);
    }
}
