//! Element type tag for vectors.

use std::fmt;

/// The element type of a vector.
///
/// Every per-type behaviour (element size, encoding, distance kernels) is an
/// exhaustive `match` over this enum, so a new variant fails to compile until
/// each of those sites handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorType {
    /// 32-bit IEEE-754 float, stored little-endian.
    #[default]
    Float32,
}

impl VectorType {
    /// Size in bytes of a single element.
    pub const fn element_size(self) -> usize {
        match self {
            Self::Float32 => std::mem::size_of::<f32>(),
        }
    }

    /// Size in bytes of a `dims`-element buffer.
    pub const fn data_size(self, dims: usize) -> usize {
        dims * self.element_size()
    }

    /// Schema-level name used in declared column types, e.g. `FLOAT32(3)`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float32 => "FLOAT32",
        }
    }

    /// Look up a type by its schema name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case(Self::Float32.name()) {
            Some(Self::Float32)
        } else {
            None
        }
    }
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
