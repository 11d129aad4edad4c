use bitstream::{BitError, BitReader, BitWriter};

#[test]
fn fixed_layout_roundtrip_bits() {
    let mut buf = [0u8; 8];
    let mut writer = BitWriter::new(&mut buf);
    writer.write_bits(0b1010, 4).unwrap();
    writer.write_bits(0xAB, 8).unwrap();
    let bytes_used = writer.finish();
    assert_eq!(bytes_used, 2);

    let mut reader = BitReader::new(&buf[..bytes_used]);
    assert_eq!(reader.read_bits(4).unwrap(), 0b1010);
    assert_eq!(reader.read_bits(8).unwrap(), 0xAB);
}

#[test]
fn known_vector_nine_bit_ids_with_padding() {
    // Seven 9-bit ids fill 63 bits; the 64th bit is padding.
    let ids = [0x1FFu64, 0, 0x155, 0x0AA, 1, 0x100, 0x0F0];
    let mut buf = [0u8; 8];
    let mut writer = BitWriter::new(&mut buf);
    for id in ids {
        writer.write_bits(id, 9).unwrap();
    }
    assert_eq!(writer.bit_position(), 63);
    writer.align_to_byte().unwrap();
    assert_eq!(writer.finish(), 8);

    let mut reader = BitReader::new(&buf);
    for id in ids {
        assert_eq!(reader.read_bits(9).unwrap(), id);
    }
    // Pad bit is untouched and still zero.
    assert!(!reader.read_bit().unwrap());
}

#[test]
fn known_vector_big_endian_word() {
    let mut buf = [0u8; 4];
    let mut writer = BitWriter::new(&mut buf);
    writer.write_bits(0x1234_5678, 32).unwrap();
    let _ = writer.finish();
    assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn writer_and_reader_agree_on_bounds() {
    let mut buf = [0u8; 2];
    let mut writer = BitWriter::at_byte(&mut buf, 1).unwrap();
    assert!(matches!(
        writer.write_bits(0, 9),
        Err(BitError::UnexpectedEof {
            requested: 9,
            available: 8
        })
    ));

    let mut reader = BitReader::at_byte(&buf, 1).unwrap();
    assert!(matches!(
        reader.read_bits(9),
        Err(BitError::UnexpectedEof {
            requested: 9,
            available: 8
        })
    ));
}
