//! Layout of the palette container shared by `.cfpl` and `.impl` files.

pub const FORMAT_NAME: &str = "Palette container";
pub const CFPL_EXT: &str = "cfpl";
pub const IMPL_EXT: &str = "impl";

/// Exact size of every container, in bytes.
pub const FILE_SIZE: usize = 0x2098;

pub const MAGIC_HEADER: [u8; MAGIC_SIZE] = *b"IMPLCF\0\0";
pub const MAGIC_SIZE: usize = 8;

pub const CHARACTER_OFFSET: usize = 0x10;

pub const NAME_OFFSET: usize = 0x14;
pub const NAME_SIZE: usize = 32;
pub const AUTHOR_OFFSET: usize = 0x34;
pub const AUTHOR_SIZE: usize = 32;
pub const DESCRIPTION_OFFSET: usize = 0x54;
pub const DESCRIPTION_SIZE: usize = 64;

pub const PALETTE_OFFSET: usize = 0x94;
pub const PALETTE_COLORS: usize = 256;
pub const COLOR_SIZE: usize = 4;
pub const PALETTE_SIZE: usize = PALETTE_COLORS * COLOR_SIZE;
