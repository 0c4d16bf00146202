use std::fs::File;

use fb2png::convert;
use fb2png::encode::{self, RowEncoder};
use fb2png::SnapshotError;

struct TempPng(std::path::PathBuf);

impl TempPng {
    fn new(name: &str) -> TempPng {
        TempPng(std::env::temp_dir().join(format!("fb2png-{}-{}.png", name, std::process::id())))
    }
}

impl Drop for TempPng {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn decode(path: &std::path::Path) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf)
}

#[test]
fn bitmap_roundtrip_preserves_geometry_and_bits() {
    let out = TempPng::new("bitmap");
    let src = [0b1011_0000u8, 0b0000_0001, 0b1111_0000, 0b0000_1111];

    let packed = convert::pack_mono(&src, 16, 2);
    encode::write_bitmap(&out.0, 16, 2, &packed).unwrap();

    let (info, data) = decode(&out.0);
    assert_eq!(info.width, 16);
    assert_eq!(info.height, 2);
    assert_eq!(info.bit_depth, png::BitDepth::One);
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(data, src);
}

#[test]
fn gray_rows_roundtrip() {
    let out = TempPng::new("gray");
    let rows: [&[u8]; 3] = [&[0, 64, 128, 255], &[1, 2, 3, 4], &[250, 251, 252, 253]];

    let mut encoder = RowEncoder::create(&out.0, 4, 3).unwrap();
    for row in rows.iter() {
        encoder.write_row(row).unwrap();
    }
    encoder.finish().unwrap();

    let (info, data) = decode(&out.0);
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 3);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(data, rows.concat());
}

#[test]
fn rgba_frame_streams_to_expected_gray() {
    let out = TempPng::new("rgba");
    // 2x2 frame of 32-bit words; the low byte is padding and must not
    // influence the average.
    let words: [u32; 4] = [0xFF00_00AA, 0xFFFF_FFAA, 0x0000_0000, 0x00FF_FF42];
    let frame: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();

    let mut encoder = RowEncoder::create(&out.0, 2, 2).unwrap();
    let mut gray_row = [0u8; 2];
    for row in frame.chunks_exact(8) {
        convert::rgba_row_to_gray(row, &mut gray_row);
        encoder.write_row(&gray_row).unwrap();
    }
    encoder.finish().unwrap();

    let (info, data) = decode(&out.0);
    assert_eq!((info.width, info.height), (2, 2));
    assert_eq!(data, vec![85, 255, 0, 170]);
}

#[test]
fn unwritable_destination_reports_the_path() {
    let path = std::path::Path::new("/nonexistent-dir/fb.png");
    match encode::write_bitmap(path, 8, 1, &[0u8]) {
        Err(SnapshotError::Create { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected Create error, got {:?}", other.err()),
    }
    assert!(!path.exists());
}
