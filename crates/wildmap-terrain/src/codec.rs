//! Binary encode/decode for the terrain file.
//!
//! All integers are little-endian. The format is an 8-byte header followed
//! by the raw cell bytes; there is no magic, version or padding.

use std::io::Write;

use crate::error::TerrainError;

/// Length of the `width`/`height` header in bytes.
pub const HEADER_LEN: usize = 8;

/// Read a little-endian u32 at `offset`.
///
/// Returns `None` if fewer than four bytes remain.
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let raw: [u8; 4] = bytes.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(raw))
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), TerrainError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Decode a terrain file into `(width, height, cells)`.
///
/// Fails with [`TerrainError::Format`] if the stream is shorter than the
/// header or than `HEADER_LEN + width * height`, if either dimension is
/// zero, or if a dimension does not fit a signed 32-bit coordinate.
/// Trailing bytes past the last cell are ignored.
pub fn decode(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), TerrainError> {
    let (Some(width), Some(height)) = (read_u32_le(bytes, 0), read_u32_le(bytes, 4)) else {
        return Err(TerrainError::Format {
            detail: format!("{} bytes is shorter than the {HEADER_LEN}-byte header", bytes.len()),
        });
    };
    if width == 0 || height == 0 {
        return Err(TerrainError::Format {
            detail: format!("empty grid {width}x{height}"),
        });
    }
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(TerrainError::Format {
            detail: format!("grid {width}x{height} exceeds the coordinate range"),
        });
    }
    let cell_count = (width as u64) * (height as u64);
    let body = &bytes[HEADER_LEN..];
    if (body.len() as u64) < cell_count {
        return Err(TerrainError::Format {
            detail: format!(
                "expected {cell_count} cell bytes for a {width}x{height} grid, found {}",
                body.len()
            ),
        });
    }
    Ok((width, height, body[..cell_count as usize].to_vec()))
}

/// Encode a grid into the terrain file format.
pub fn encode(w: &mut dyn Write, width: u32, height: u32, cells: &[u8]) -> Result<(), TerrainError> {
    write_u32_le(w, width)?;
    write_u32_le(w, height)?;
    w.write_all(cells)?;
    Ok(())
}

/// Encode a grid into a fresh buffer.
pub fn encode_to_vec(width: u32, height: u32, cells: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + cells.len());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(cells);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(width: u32, height: u32, cells: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        encode(&mut out, width, height, cells).unwrap();
        out
    }

    #[test]
    fn header_is_little_endian() {
        let bytes = file(0x0102, 3, &[0; 0x0102 * 3]);
        assert_eq!(&bytes[..8], &[0x02, 0x01, 0, 0, 3, 0, 0, 0]);
    }

    #[test]
    fn decode_reads_dimensions_and_cells() {
        let bytes = file(2, 3, &[0, 1, 2, 3, 4, 5]);
        let (w, h, cells) = decode(&bytes).unwrap();
        assert_eq!((w, h), (2, 3));
        assert_eq!(cells, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn short_header_is_format_error() {
        for len in 0..HEADER_LEN {
            let bytes = vec![1u8; len];
            assert!(matches!(decode(&bytes), Err(TerrainError::Format { .. })));
        }
    }

    #[test]
    fn short_body_is_format_error() {
        let mut bytes = file(4, 4, &[0; 16]);
        bytes.pop();
        assert!(matches!(decode(&bytes), Err(TerrainError::Format { .. })));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = file(2, 1, &[3, 4]);
        bytes.extend_from_slice(&[9, 9, 9]);
        let (_, _, cells) = decode(&bytes).unwrap();
        assert_eq!(cells, vec![3, 4]);
    }

    #[test]
    fn zero_dimension_is_format_error() {
        assert!(matches!(
            decode(&file(0, 5, &[])),
            Err(TerrainError::Format { .. })
        ));
        assert!(matches!(
            decode(&file(5, 0, &[])),
            Err(TerrainError::Format { .. })
        ));
    }

    #[test]
    fn huge_dimension_is_format_error_without_allocating() {
        let bytes = file(u32::MAX, u32::MAX, &[]);
        assert!(matches!(decode(&bytes), Err(TerrainError::Format { .. })));
        let bytes = file(i32::MAX as u32, i32::MAX as u32, &[]);
        assert!(matches!(decode(&bytes), Err(TerrainError::Format { .. })));
    }

    #[test]
    fn encode_to_vec_matches_streamed_encode() {
        let cells = [5, 4, 3, 2, 1, 0];
        assert_eq!(encode_to_vec(3, 2, &cells), file(3, 2, &cells));
    }

    #[test]
    fn read_u32_le_bounds() {
        assert_eq!(read_u32_le(&[1, 0, 0, 0], 0), Some(1));
        assert_eq!(read_u32_le(&[1, 0, 0], 0), None);
        assert_eq!(read_u32_le(&[1, 0, 0, 0], usize::MAX), None);
    }
}
