//! PNG dimension reader
//!
//! Reads the 8-byte signature and the IHDR chunk header only; pixel data is
//! never decoded.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Signature, IHDR length + type, width, height, depth, color type,
/// compression, filter, interlace, CRC
const HEADER_LEN: usize = 33;

#[derive(Debug, thiserror::Error)]
pub enum PngHeaderError {
    #[error("png too short ({len} bytes)")]
    TooShort { len: usize },
    #[error("invalid png signature")]
    InvalidSignature,
    #[error("missing IHDR chunk")]
    MissingIhdr,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Width and height from the start of a PNG stream
pub fn parse_png_size(data: &[u8]) -> Result<(u32, u32), PngHeaderError> {
    if data.len() < HEADER_LEN {
        return Err(PngHeaderError::TooShort { len: data.len() });
    }
    if data[..8] != PNG_SIGNATURE {
        return Err(PngHeaderError::InvalidSignature);
    }
    if &data[12..16] != b"IHDR" {
        return Err(PngHeaderError::MissingIhdr);
    }
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Ok((width, height))
}

/// Width and height of a PNG file, reading at most its first 33 bytes
pub fn read_png_size(path: &Path) -> Result<(u32, u32), PngHeaderError> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    File::open(path)?
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header)?;
    parse_png_size(&header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(&13u32.to_be_bytes());
        data.extend_from_slice(b"IHDR");
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(&[8, 2, 0, 0, 0]);
        data.extend_from_slice(&[0; 4]);
        data
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_png_size(&header(640, 480)).unwrap(), (640, 480));
        assert_eq!(parse_png_size(&header(1, 70_000)).unwrap(), (1, 70_000));
    }

    #[test]
    fn test_too_short() {
        let data = header(4, 4);
        let err = parse_png_size(&data[..20]).unwrap_err();
        assert!(matches!(err, PngHeaderError::TooShort { len: 20 }));
        assert_eq!(err.to_string(), "png too short (20 bytes)");
    }

    #[test]
    fn test_bad_signature() {
        let mut data = header(4, 4);
        data[1] = b'J';
        assert!(matches!(
            parse_png_size(&data),
            Err(PngHeaderError::InvalidSignature)
        ));
    }

    #[test]
    fn test_missing_ihdr() {
        let mut data = header(4, 4);
        data[12..16].copy_from_slice(b"IDAT");
        let err = parse_png_size(&data).unwrap_err();
        assert_eq!(err.to_string(), "missing IHDR chunk");
    }

    #[test]
    fn test_read_only_needs_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header_only.png");
        std::fs::write(&path, header(256, 128)).unwrap();

        assert_eq!(read_png_size(&path).unwrap(), (256, 128));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_png_size(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, PngHeaderError::Io(_)));
    }
}
