#![allow(clippy::unwrap_used)]
// The EXIF fixtures are mirrored in the root `tests/common/mod.rs`; change both together.
use std::fs::File;
use std::path::Path;
use std::time::SystemTime;

use chrono::{Local, TimeZone};

/// Little-endian TIFF block: IFD0 points at an Exif IFD holding only
/// `DateTimeOriginal`.
pub fn exif_tiff(taken: &str) -> Vec<u8> {
    let mut ascii = taken.as_bytes().to_vec();
    ascii.push(0);
    let count = u32::try_from(ascii.len()).unwrap();

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes());
    // IFD0 at 8: ExifIFDPointer -> 26
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    // Exif IFD at 26: DateTimeOriginal, value at 44
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&count.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(&ascii);
    tiff
}

/// SOI, an APP1 Exif segment wrapping [`exif_tiff`], then EOI.
pub fn jpeg_with_capture_time(taken: &str) -> Vec<u8> {
    let tiff = exif_tiff(taken);
    let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// CR2 is TIFF-based, so a bare TIFF block stands in for a raw file.
pub fn cr2_with_capture_time(taken: &str) -> Vec<u8> {
    exif_tiff(taken)
}

/// PNG signature, an `eXIf` chunk holding [`exif_tiff`], then IEND.
pub fn png_with_capture_time(taken: &str) -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&png_chunk(b"eXIf", &exif_tiff(taken)));
    png.extend_from_slice(&png_chunk(b"IEND", &[]));
    png
}

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn png_chunk(kind: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut chunk = u32::try_from(data.len()).unwrap().to_be_bytes().to_vec();
    chunk.extend_from_slice(kind);
    chunk.extend_from_slice(data);
    let crc = crc32(&chunk[4..]);
    chunk.extend_from_slice(&crc.to_be_bytes());
    chunk
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in bytes {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 == 1 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

/// PNG signature followed by an empty IEND chunk.
pub fn png_without_metadata() -> Vec<u8> {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&png_chunk(b"IEND", &[]));
    png
}

pub fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}

/// Sets the modification time to noon local time on the given day.
pub fn set_modified_date(path: &Path, year: i32, month: u32, day: u32) {
    let when = Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::from(when))
        .unwrap();
}
