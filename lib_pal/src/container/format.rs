use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::encoder::{encode, EncodeError};
use crate::constants::{CFPL_EXT, IMPL_EXT};
use crate::palette::Palette;

/// The two container flavours. They share one layout and differ only in how
/// a decoded record labels its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Cfpl,
    Impl,
}

/// Keys used when a record is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabels {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub character: &'static str,
    pub palette: &'static str,
}

impl Variant {
    pub fn extension(self) -> &'static str {
        match self {
            Variant::Cfpl => CFPL_EXT,
            Variant::Impl => IMPL_EXT,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case(CFPL_EXT) {
            Some(Variant::Cfpl)
        } else if ext.eq_ignore_ascii_case(IMPL_EXT) {
            Some(Variant::Impl)
        } else {
            None
        }
    }

    pub fn labels(self) -> FieldLabels {
        match self {
            Variant::Cfpl => FieldLabels {
                name: "name",
                author: "auth",
                description: "desc",
                character: "char",
                palette: "pal",
            },
            Variant::Impl => FieldLabels {
                name: "name",
                author: "author",
                description: "description",
                character: "character",
                palette: "palette",
            },
        }
    }
}

/// A decoded container. `raw_bytes` holds the file exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub variant: Variant,
    pub palette: Palette,
    pub name: String,
    pub author: String,
    pub description: String,
    pub character_id: u8,
    pub raw_bytes: Vec<u8>,
}

impl Record {
    /// Builds a record from scratch and renders its container bytes.
    pub fn new(
        variant: Variant,
        palette: Palette,
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        character_id: u8,
    ) -> Result<Self, EncodeError> {
        let mut record = Self {
            variant,
            palette,
            name: name.into(),
            author: author.into(),
            description: description.into(),
            character_id,
            raw_bytes: Vec::new(),
        };
        record.raw_bytes = encode(&record)?;
        Ok(record)
    }

    /// Re-renders `raw_bytes` after the public fields were edited.
    pub fn refresh(&mut self) -> Result<(), EncodeError> {
        self.raw_bytes = encode(self)?;
        Ok(())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let labels = self.variant.labels();
        let mut state = serializer.serialize_struct("Record", 6)?;
        state.serialize_field("format", self.variant.extension())?;
        state.serialize_field(labels.name, &self.name)?;
        state.serialize_field(labels.author, &self.author)?;
        state.serialize_field(labels.description, &self.description)?;
        state.serialize_field(labels.character, &self.character_id)?;
        state.serialize_field(labels.palette, &self.palette)?;
        state.end()
    }
}
