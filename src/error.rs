use std::path::PathBuf;

use thiserror::Error;

/// Structural problems detected on a graph or on the arguments handed to an
/// algorithm together with it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    MissingVertex(String),

    #[error("self-loop on vertex {0} is not supported")]
    SelfLoop(String),

    #[error("undirected graph has {from} -> {to} without a matching {to} -> {from}")]
    Asymmetric { from: String, to: String },

    #[error("edge {from} -- {to} has weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("summed weight overflows at edge {from} -- {to}")]
    WeightOverflow { from: String, to: String },

    #[error("visiting order is not a permutation of the vertices: {reason}")]
    InvalidOrder { reason: String },

    #[error("{algorithm} requires an undirected graph")]
    Directed { algorithm: &'static str },
}

/// Failures while turning raw matrix text into a graph.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("vertex name {0:?} appears more than once")]
    DuplicateName(String),

    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("header names {names} vertices but the matrix has {rows} rows")]
    NameCount { names: usize, rows: usize },

    #[error("entry at row {row}, column {col} is not a number: {value:?}")]
    ParseWeight {
        row: usize,
        col: usize,
        value: String,
    },

    #[error("entry at row {row}, column {col} is negative")]
    NegativeWeight { row: usize, col: usize },

    #[error("entry at row {row}, column {col} differs from its mirror; the matrix is not symmetric")]
    Asymmetric { row: usize, col: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    Usage(String),

    #[error("failed to encode result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
