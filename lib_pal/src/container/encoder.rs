use log::{debug, error, info};
use thiserror::Error;

use super::decoder::read_text;
use super::format::Record;
use crate::constants::{
    AUTHOR_OFFSET, AUTHOR_SIZE, CHARACTER_OFFSET, COLOR_SIZE, DESCRIPTION_OFFSET,
    DESCRIPTION_SIZE, FILE_SIZE, MAGIC_HEADER, MAGIC_SIZE, NAME_OFFSET, NAME_SIZE,
    PALETTE_OFFSET, PALETTE_SIZE,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Field {field} is {actual} bytes, limit is {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Renders a record back into container bytes.
///
/// Bytes outside the known fields are carried over from `raw_bytes` when it
/// holds a full container, otherwise they are zero. Missing palette entries
/// are written as zero. A text field whose value still matches what the base
/// buffer decodes to keeps its original bytes, so fields that are not valid
/// UTF-8 survive edits to other fields.
pub fn encode(record: &Record) -> Result<Vec<u8>, EncodeError> {
    info!("Starting encoding");

    let mut encoded_data = if record.raw_bytes.len() == FILE_SIZE {
        debug!("Reusing original bytes as the base buffer");
        record.raw_bytes.clone()
    } else {
        vec![0u8; FILE_SIZE]
    };

    encoded_data[..MAGIC_SIZE].copy_from_slice(&MAGIC_HEADER);
    encoded_data[CHARACTER_OFFSET] = record.character_id;

    let labels = record.variant.labels();
    write_text(
        &mut encoded_data,
        labels.name,
        &record.name,
        NAME_OFFSET,
        NAME_SIZE,
    )?;
    write_text(
        &mut encoded_data,
        labels.author,
        &record.author,
        AUTHOR_OFFSET,
        AUTHOR_SIZE,
    )?;
    write_text(
        &mut encoded_data,
        labels.description,
        &record.description,
        DESCRIPTION_OFFSET,
        DESCRIPTION_SIZE,
    )?;
    debug!("Metadata written");

    let palette_area = &mut encoded_data[PALETTE_OFFSET..PALETTE_OFFSET + PALETTE_SIZE];
    palette_area.fill(0);
    for (group, color) in palette_area
        .chunks_exact_mut(COLOR_SIZE)
        .zip(record.palette.iter())
    {
        let [c0, c1, c2, c3] = color.to_array();
        group.copy_from_slice(&[c3, c2, c1, c0]);
    }
    debug!("Palette data written with {} colors", record.palette.len());

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}

fn write_text(
    buffer: &mut [u8],
    field: &'static str,
    text: &str,
    offset: usize,
    len: usize,
) -> Result<(), EncodeError> {
    if read_text(buffer, offset, len) == text {
        debug!("Field {} unchanged, keeping original bytes", field);
        return Ok(());
    }

    let bytes = text.as_bytes();
    if bytes.len() > len {
        error!("Field {} does not fit: {} > {}", field, bytes.len(), len);
        return Err(EncodeError::FieldTooLong {
            field,
            max: len,
            actual: bytes.len(),
        });
    }
    let area = &mut buffer[offset..offset + len];
    area.fill(0);
    area[..bytes.len()].copy_from_slice(bytes);
    Ok(())
}
