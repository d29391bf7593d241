//! PNG export for texture buffers
//!
//! A minimal encoder for 8-bit truecolor images: signature, `IHDR`, a single
//! `IDAT` holding the zlib stream of unfiltered scanlines, and `IEND`.

use super::TextureBuffer;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The 8-byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
/// Truecolor, no alpha
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

/// Encode a TextureBuffer as PNG bytes
///
/// Each scanline is prefixed with filter type 0 and the concatenation is
/// deflated at maximum compression. Identical buffers always encode to
/// identical bytes.
pub fn encode_png(texture: &TextureBuffer) -> io::Result<Vec<u8>> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&texture.width.to_be_bytes());
    ihdr.extend_from_slice(&texture.height.to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGB, 0, 0, 0]);

    let idat = deflate_scanlines(texture)?;

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + ihdr.len() + idat.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Write a TextureBuffer to a PNG file
///
/// # Example
/// ```no_run
/// use proc_gen::texture::{TextureBuffer, write_png};
/// use std::path::Path;
///
/// let tex = TextureBuffer::filled(64, 64, [255, 0, 0]);
/// write_png(&tex, Path::new("red.png")).unwrap();
/// ```
pub fn write_png(texture: &TextureBuffer, path: &Path) -> io::Result<()> {
    let bytes = encode_png(texture)?;
    fs::write(path, bytes)
}

/// Length, type, payload, CRC32 over type + payload
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);

    let mut crc = crc32fast::Hasher::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
}

fn deflate_scanlines(texture: &TextureBuffer) -> io::Result<Vec<u8>> {
    let stride = texture.width as usize * 3;
    let mut raw = Vec::with_capacity((stride + 1) * texture.height as usize);
    for y in 0..texture.height {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(texture.row(y));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw)?;
    encoder.finish()
}
