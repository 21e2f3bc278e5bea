use std::fs;
use std::io;
use std::path::Path;

use lib_pal::container::{DecodeError, EncodeError};
use lib_pal::recolor::RecolorError;
use lib_pal::{decode, encode, recolor, Palette, Record, Variant};
use log::info;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileHandlingError {
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Container decode error: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Container encode error: {0}")]
    EncodeError(#[from] EncodeError),

    #[error("Recolor error: {0}")]
    RecolorError(#[from] RecolorError),
}

/// Picks the container variant from the file extension.
pub fn variant_for(path: &Path) -> Result<Variant, FileHandlingError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    Variant::from_extension(ext)
        .ok_or_else(|| FileHandlingError::UnsupportedExtension(ext.to_string()))
}

pub fn open_container(path: &Path) -> Result<Record, FileHandlingError> {
    let variant = variant_for(path)?;
    let buffer = fs::read(path)?;
    let record = decode(variant, &buffer)?;
    info!("Opened {}", path.display());
    Ok(record)
}

pub fn save_container(path: &Path, record: &Record) -> Result<(), FileHandlingError> {
    fs::write(path, encode(record)?)?;
    info!("Container saved successfully to {}", path.display());
    Ok(())
}

/// Metadata changes requested for one container. `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct MetadataEdits {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub character_id: Option<u8>,
}

/// Opens `input`, applies `edits` and writes the result to `output`.
///
/// The output extension decides the variant of the saved record.
pub fn edit_container(
    input: &Path,
    output: &Path,
    edits: MetadataEdits,
) -> Result<Record, FileHandlingError> {
    let mut record = open_container(input)?;
    record.variant = variant_for(output)?;
    if let Some(name) = edits.name {
        record.name = name;
    }
    if let Some(author) = edits.author {
        record.author = author;
    }
    if let Some(description) = edits.description {
        record.description = description;
    }
    if let Some(character_id) = edits.character_id {
        record.character_id = character_id;
    }
    record.refresh()?;
    fs::write(output, &record.raw_bytes)?;
    info!("Container saved successfully to {}", output.display());
    Ok(record)
}

pub fn recolor_file(
    palette: &Palette,
    source: &Path,
    output: &Path,
) -> Result<(), FileHandlingError> {
    let source_bytes = fs::read(source)?;
    let png = recolor(palette, &source_bytes)?;
    fs::write(output, png)?;
    info!("Image saved successfully to {}", output.display());
    Ok(())
}
