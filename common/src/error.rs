use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid argument `{name}`: expected {expected}, got {value}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        expected: &'static str,
    },
}

impl GridError {
    pub fn negative(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument {
            name,
            value,
            expected: "a non-negative value",
        }
    }

    pub fn out_of_range(name: &'static str, value: i64) -> Self {
        Self::InvalidArgument {
            name,
            value,
            expected: "coordinates within the i32 range",
        }
    }
}

/// Validates a dimension, count or radius and returns it as a `usize`.
pub(crate) fn non_negative(name: &'static str, value: i32) -> GridResult<usize> {
    usize::try_from(value).map_err(|_| GridError::negative(name, i64::from(value)))
}
