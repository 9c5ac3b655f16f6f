//! GLB container assembly.

use crate::document::Document;
use crate::error::ExportResult;

/// Container magic, the ASCII bytes `glTF` read as a little-endian u32.
pub const GLB_MAGIC: u32 = 0x4654_6C67;

/// Container format version.
pub const GLB_VERSION: u32 = 2;

/// JSON chunk type, the ASCII bytes `JSON` read as a little-endian u32.
pub const CHUNK_TYPE_JSON: u32 = 0x4E4F_534A;

/// Binary chunk type, the ASCII bytes `BIN\0` read as a little-endian u32.
pub const CHUNK_TYPE_BIN: u32 = 0x004E_4942;

/// Fixed header size: magic, version, total length.
const HEADER_SIZE: usize = 12;

/// Per-chunk prefix size: chunk length, chunk type.
const CHUNK_HEADER_SIZE: usize = 8;

/// Assemble the final container from a document and its binary buffer.
///
/// The document serializes to minified JSON, space-padded to a 4-byte
/// boundary (the padding byte this chunk type requires); the binary buffer
/// is zero-padded to a 4-byte boundary. Both chunks are emitted after a
/// 12-byte header, all integers little-endian.
///
/// Pure function; performs no I/O.
///
/// # Errors
///
/// Returns [`ExportError::Json`](crate::ExportError::Json) if the document
/// fails to serialize. A document built by this crate always serializes.
#[allow(clippy::cast_possible_truncation)]
// Truncation: chunk and container lengths are u32 per the format, larger
// containers are unsupported
pub fn encode_glb(document: &Document, binary: &[u8]) -> ExportResult<Vec<u8>> {
    let mut json = serde_json::to_vec(document)?;
    pad_to_boundary(&mut json, b' ');

    let mut bin = binary.to_vec();
    pad_to_boundary(&mut bin, 0);

    let total = HEADER_SIZE + CHUNK_HEADER_SIZE + json.len() + CHUNK_HEADER_SIZE + bin.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());

    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_JSON.to_le_bytes());
    out.extend_from_slice(&json);

    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_BIN.to_le_bytes());
    out.extend_from_slice(&bin);

    Ok(out)
}

/// Pad to the next 4-byte boundary with the given byte.
fn pad_to_boundary(bytes: &mut Vec<u8>, pad: u8) {
    while bytes.len() % 4 != 0 {
        bytes.push(pad);
    }
}
