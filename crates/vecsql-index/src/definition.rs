//! Index definitions handed over by the host, and their validation.

use vecsql_core::constants::MAX_DIMENSIONS;
use vecsql_core::errors::IndexError;
use vecsql_core::{DistanceOp, VectorType};

/// One indexed column as declared in the table schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexColumn {
    pub name: String,
    /// Declared type text, e.g. `FLOAT32(128)`.
    pub declared_type: String,
}

/// An already-parsed `CREATE INDEX ... USING <op>` statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexDefinition {
    pub name: String,
    pub columns: Vec<IndexColumn>,
    /// Distance operator tokens from the `USING` clause.
    pub using: Vec<String>,
}

impl IndexDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an indexed column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        self.columns.push(IndexColumn {
            name: name.into(),
            declared_type: declared_type.into(),
        });
        self
    }

    /// Add a `USING` token.
    #[must_use]
    pub fn using(mut self, token: impl Into<String>) -> Self {
        self.using.push(token.into());
        self
    }
}

/// A definition that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorIndexSpec {
    pub name: String,
    pub column: String,
    pub vector_type: VectorType,
    pub dims: u32,
    pub op: DistanceOp,
}

/// Validate a definition.
///
/// Checks run in order: operator, shape, declared type. Nothing is
/// provisioned here.
pub fn validate(def: &IndexDefinition) -> Result<VectorIndexSpec, IndexError> {
    let op = match def.using.as_slice() {
        [token] => DistanceOp::from_token(token).ok_or_else(|| IndexError::UnknownIndexMethod {
            method: token.clone(),
        })?,
        [] => {
            return Err(IndexError::UnknownIndexMethod {
                method: "<none>".to_string(),
            })
        }
        tokens => {
            return Err(IndexError::UnknownIndexMethod {
                method: tokens.join(", "),
            })
        }
    };

    let [column] = def.columns.as_slice() else {
        return Err(IndexError::UnsupportedIndexShape {
            columns: def.columns.len(),
        });
    };

    let (vector_type, dims) =
        parse_vector_type(&column.declared_type).ok_or_else(|| IndexError::InvalidVectorType {
            declared: column.declared_type.clone(),
        })?;

    Ok(VectorIndexSpec {
        name: def.name.clone(),
        column: column.name.clone(),
        vector_type,
        dims,
        op,
    })
}

/// Parse a declared column type such as `FLOAT32(3)`.
///
/// The type name is case-insensitive and must be followed directly by `(`,
/// at least one digit, and `)`. Surrounding whitespace is ignored. Returns
/// `None` for anything else, including dimensions above `MAX_DIMENSIONS`.
pub fn parse_vector_type(declared: &str) -> Option<(VectorType, u32)> {
    let (name, rest) = declared.trim().split_once('(')?;
    let vector_type = VectorType::from_name(name)?;
    let digits = rest.strip_suffix(')')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let dims: u32 = digits.parse().ok()?;
    (dims as usize <= MAX_DIMENSIONS).then_some((vector_type, dims))
}
