//! Binary codec: the blob is the raw element array, nothing else.
//!
//! `dims * element_size` bytes, little-endian, no length prefix and no type
//! tag. The element type comes from the declaring column, never the blob.

use crate::constants::MAX_DIMENSIONS;
use crate::errors::CodecError;
use crate::types::{Vector, VectorType};

/// Number of elements in a blob of `len` bytes.
pub fn blob_dims(vector_type: VectorType, len: usize) -> Result<usize, CodecError> {
    let element_size = vector_type.element_size();
    if len % element_size != 0 {
        return Err(CodecError::InvalidBlobLength { len, element_size });
    }
    let dims = len / element_size;
    if dims > MAX_DIMENSIONS {
        return Err(CodecError::TooManyDimensions { max: MAX_DIMENSIONS });
    }
    Ok(dims)
}

/// Decode a blob into a freshly allocated, owned vector.
pub fn read_blob(vector_type: VectorType, blob: &[u8]) -> Result<Vector<'static>, CodecError> {
    blob_dims(vector_type, blob.len())?;
    let mut v = Vector::with_max_capacity(vector_type)?;
    v.extend_from_bytes(blob);
    Ok(v)
}

/// Write `v` into `dst`, returning the number of bytes written.
///
/// Fails without touching `dst` when it is shorter than the encoding.
pub fn write_blob(v: &Vector<'_>, dst: &mut [u8]) -> Result<usize, CodecError> {
    let src = v.as_bytes();
    if dst.len() < src.len() {
        return Err(CodecError::BufferTooSmall {
            required: src.len(),
            available: dst.len(),
        });
    }
    dst[..src.len()].copy_from_slice(src);
    Ok(src.len())
}
