//! The vector value: a typed, fixed-dimension array of elements.
//!
//! A [`Vector`] either owns its buffer or borrows it from caller storage
//! (typically a column blob). Both cases share one representation,
//! `Cow<'a, [u8]>`, holding the elements in their on-disk little-endian
//! encoding, so a borrowed view needs no copy and no alignment.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::codec::{blob, text};
use crate::constants::MAX_DIMENSIONS;
use crate::errors::CodecError;

use super::VectorType;

/// A typed vector value.
///
/// Invariant: `data.len() == vector_type.data_size(dims)` and
/// `dims <= MAX_DIMENSIONS`.
#[derive(Clone, PartialEq)]
pub struct Vector<'a> {
    vector_type: VectorType,
    dims: usize,
    data: Cow<'a, [u8]>,
}

impl Vector<'static> {
    /// Allocate an empty owned vector whose buffer already holds room for
    /// `MAX_DIMENSIONS` elements, so decoding into it never reallocates.
    pub fn with_max_capacity(vector_type: VectorType) -> Result<Self, CodecError> {
        let bytes = vector_type.data_size(MAX_DIMENSIONS);
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| CodecError::OutOfMemory { bytes })?;
        Ok(Self {
            vector_type,
            dims: 0,
            data: Cow::Owned(buf),
        })
    }

    /// Build an owned `FLOAT32` vector from values.
    pub fn from_f32s(values: &[f32]) -> Result<Self, CodecError> {
        if values.len() > MAX_DIMENSIONS {
            return Err(CodecError::TooManyDimensions { max: MAX_DIMENSIONS });
        }
        let mut v = Self::with_max_capacity(VectorType::Float32)?;
        for x in values {
            v.push_element(f64::from(*x));
        }
        Ok(v)
    }
}

impl<'a> Vector<'a> {
    /// Build a borrowed view directly over a blob; no bytes are copied.
    ///
    /// The view cannot outlive `blob`.
    pub fn from_blob(vector_type: VectorType, blob: &'a [u8]) -> Result<Self, CodecError> {
        let dims = blob::blob_dims(vector_type, blob.len())?;
        Ok(Self {
            vector_type,
            dims,
            data: Cow::Borrowed(blob),
        })
    }

    pub fn vector_type(&self) -> VectorType {
        self.vector_type
    }

    /// Number of elements.
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.dims == 0
    }

    /// True when the buffer aliases caller storage.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_))
    }

    /// Raw element bytes, exactly `vector_type.data_size(dims)` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over the elements widened to `f64`.
    pub fn elements(&self) -> impl Iterator<Item = f64> + '_ {
        match self.vector_type {
            VectorType::Float32 => self
                .data
                .chunks_exact(4)
                .map(|c| f64::from(f32::from_le_bytes([c[0], c[1], c[2], c[3]]))),
        }
    }

    /// Copy the elements out as `f32`s.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        self.elements().map(|x| x as f32).collect()
    }

    /// Encode as the canonical blob (raw little-endian elements).
    pub fn to_blob(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Encode as a `[e1,e2,...]` literal.
    pub fn to_literal(&self) -> String {
        text::format_literal(self)
    }

    /// Detach from borrowed storage, copying the buffer if needed.
    pub fn into_owned(self) -> Vector<'static> {
        Vector {
            vector_type: self.vector_type,
            dims: self.dims,
            data: Cow::Owned(self.data.into_owned()),
        }
    }

    /// Append one element, narrowed to the vector's element type.
    /// Callers bound the length; capacity-first vectors never reallocate
    /// here because decoding stops before `MAX_DIMENSIONS` is exceeded.
    pub(crate) fn push_element(&mut self, value: f64) {
        match self.vector_type {
            VectorType::Float32 => {
                let x = value as f32;
                self.data.to_mut().extend_from_slice(&x.to_le_bytes());
            }
        }
        self.dims += 1;
    }

    /// Append raw element bytes whose length is a whole number of elements.
    pub(crate) fn extend_from_bytes(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len() % self.vector_type.element_size(), 0);
        self.data.to_mut().extend_from_slice(bytes);
        self.dims += bytes.len() / self.vector_type.element_size();
    }
}

impl fmt::Debug for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("vector_type", &self.vector_type)
            .field("dims", &self.dims)
            .field("borrowed", &self.is_borrowed())
            .finish()
    }
}

/// Dumps the vector as its literal form.
impl fmt::Display for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl FromStr for Vector<'static> {
    type Err = CodecError;

    /// Parse a `FLOAT32` literal such as `[1, 2.5, -3e2]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_literal(VectorType::Float32, s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_capacity_vector_starts_empty() {
        let v = Vector::with_max_capacity(VectorType::Float32).unwrap();
        assert_eq!(v.dims(), 0);
        assert!(v.is_empty());
        assert!(!v.is_borrowed());
        assert!(v.as_bytes().is_empty());
    }

    #[test]
    fn from_f32s_keeps_len_invariant() {
        let v = Vector::from_f32s(&[1.0, -2.0, 0.5]).unwrap();
        assert_eq!(v.dims(), 3);
        assert_eq!(v.as_bytes().len(), 12);
        assert_eq!(v.to_f32_vec(), vec![1.0, -2.0, 0.5]);
    }

    #[test]
    fn from_f32s_rejects_oversized_input() {
        let values = vec![0.0f32; MAX_DIMENSIONS + 1];
        assert_eq!(
            Vector::from_f32s(&values),
            Err(CodecError::TooManyDimensions { max: MAX_DIMENSIONS })
        );
    }

    #[test]
    fn borrowed_view_detaches_into_owned() {
        let blob = Vector::from_f32s(&[4.0, 5.0]).unwrap().to_blob();
        let view = Vector::from_blob(VectorType::Float32, &blob).unwrap();
        assert!(view.is_borrowed());

        let owned = view.clone().into_owned();
        assert!(!owned.is_borrowed());
        assert_eq!(owned, view);
    }

    #[test]
    fn debug_does_not_dump_elements() {
        let v = Vector::from_f32s(&[1.0]).unwrap();
        assert_eq!(
            format!("{v:?}"),
            "Vector { vector_type: Float32, dims: 1, borrowed: false }"
        );
    }
}
