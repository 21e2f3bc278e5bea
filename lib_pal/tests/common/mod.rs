#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

pub const FILE_SIZE: usize = 8344;
pub const PALETTE_OFFSET: usize = 0x94;

/// Lays out a container by hand, following the documented offsets.
/// `groups` are written exactly as they appear on disk.
pub fn build_container(
    name: &str,
    author: &str,
    description: &str,
    character: u8,
    groups: &[[u8; 4]],
) -> Vec<u8> {
    let mut data = vec![0u8; FILE_SIZE];
    data[..8].copy_from_slice(b"IMPLCF\0\0");
    data[0x10] = character;
    data[0x14..0x14 + name.len()].copy_from_slice(name.as_bytes());
    data[0x34..0x34 + author.len()].copy_from_slice(author.as_bytes());
    data[0x54..0x54 + description.len()].copy_from_slice(description.as_bytes());
    for (i, group) in groups.iter().enumerate() {
        let offset = PALETTE_OFFSET + i * 4;
        data[offset..offset + 4].copy_from_slice(group);
    }
    data
}

/// 256 distinct on-disk groups: group i is [i, i+1, i+2, i+3] (wrapping).
pub fn distinct_groups() -> Vec<[u8; 4]> {
    (0..256u16)
        .map(|i| {
            let i = i as u8;
            [
                i,
                i.wrapping_add(1),
                i.wrapping_add(2),
                i.wrapping_add(3),
            ]
        })
        .collect()
}

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
