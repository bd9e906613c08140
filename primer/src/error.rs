use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("{function}({n}) overflows u128; largest supported input is {max}")]
    Overflow {
        function: &'static str,
        n: u32,
        max: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{name} must be finite and greater than zero, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in `{}`", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
