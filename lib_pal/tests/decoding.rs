mod common;

use common::{build_container, distinct_groups, FILE_SIZE, PALETTE_OFFSET};
use lib_pal::container::DecodeError;
use lib_pal::{decode, encode, Color, Palette, Record, Variant};

#[test]
fn test_decode_wrong_sizes() {
    for len in [0, 8, FILE_SIZE - 1, FILE_SIZE + 1, FILE_SIZE * 2] {
        let data = vec![0u8; len];
        let result = decode(Variant::Cfpl, &data);
        assert_eq!(
            result,
            Err(DecodeError::SizeMismatch {
                expected: FILE_SIZE,
                actual: len
            })
        );
    }
}

#[test]
fn test_decode_wrong_header() {
    let mut data = build_container("", "", "", 0, &[]);
    data[..8].copy_from_slice(b"IMPLCF\0X");

    let result = decode(Variant::Impl, &data);
    assert_eq!(
        result,
        Err(DecodeError::HeaderMismatch {
            found: *b"IMPLCF\0X"
        })
    );
}

#[test]
fn test_decode_byte_reversed_colors() {
    let groups = distinct_groups();
    let data = build_container("", "", "", 0, &groups);

    let record = decode(Variant::Cfpl, &data).unwrap();
    assert_eq!(record.palette.len(), 256);
    for (i, color) in record.palette.iter().enumerate() {
        let off = PALETTE_OFFSET + 4 * i;
        assert_eq!(
            color.to_array(),
            [data[off + 3], data[off + 2], data[off + 1], data[off]],
            "color #{}",
            i
        );
    }
    assert_eq!(record.palette.get(0), Some(&Color::new(3, 2, 1, 0)));
}

#[test]
fn test_decode_metadata() {
    let data = build_container(
        "Crimson Ragna",
        "palette fan",
        "A red take on the default look",
        0,
        &[],
    );

    let record = decode(Variant::Cfpl, &data).unwrap();
    assert_eq!(record.variant, Variant::Cfpl);
    assert_eq!(record.name, "Crimson Ragna");
    assert_eq!(record.author, "palette fan");
    assert_eq!(record.description, "A red take on the default look");
    assert_eq!(record.character_id, 0);
    assert_eq!(record.raw_bytes, data);
}

#[test]
fn test_decode_full_width_fields() {
    let name = "N".repeat(32);
    let author = "A".repeat(32);
    let description = "D".repeat(64);
    let data = build_container(&name, &author, &description, 35, &[]);

    let record = decode(Variant::Impl, &data).unwrap();
    assert_eq!(record.name, name);
    assert_eq!(record.author, author);
    assert_eq!(record.description, description);
    assert_eq!(record.character_id, 35);
}

#[test]
fn test_variants_share_decoding() {
    let data = build_container("Same", "Same", "Same", 7, &distinct_groups());

    let cfpl = decode(Variant::Cfpl, &data).unwrap();
    let imp = decode(Variant::Impl, &data).unwrap();
    assert_eq!(cfpl.palette, imp.palette);
    assert_eq!(cfpl.name, imp.name);
    assert_eq!(cfpl.character_id, imp.character_id);
    assert_ne!(cfpl.variant, imp.variant);
}

#[test]
fn test_encode_decode_record() {
    let colors = (0..256u16)
        .map(|i| Color::new(i as u8, 255 - i as u8, (i / 2) as u8, 255))
        .collect();
    let palette = Palette::new(colors).unwrap();
    let record = Record::new(
        Variant::Impl,
        palette.clone(),
        "Ocean",
        "tester",
        "blue everything",
        24,
    )
    .unwrap();

    let decoded = decode(Variant::Impl, &encode(&record).unwrap()).unwrap();
    assert_eq!(decoded.name, "Ocean");
    assert_eq!(decoded.author, "tester");
    assert_eq!(decoded.description, "blue everything");
    assert_eq!(decoded.character_id, 24);
    assert_eq!(decoded.palette, palette);
}
