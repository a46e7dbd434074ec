//! Weight matrices: the tabular form graphs arrive in before an engine sees
//! them.
//!
//! CSV layout: one row per vertex, comma separated, with standard quoting.
//! When the very first cell is empty the first row is a header of vertex
//! names and every later row starts with a label cell, which is ignored.
//! Without a header vertices are named `0`, `1`, ... Blank cells mean 0 and 0
//! means "no edge".

use std::{collections::HashSet, fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};

use crate::{
    error::InputError,
    graph::{AdjacencyList, GraphKind},
};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    names: Vec<String>,
    weights: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Validates shape and entries. `names` defaults to row numbers.
    pub fn new(names: Option<Vec<String>>, weights: Vec<Vec<f64>>) -> Result<Self, InputError> {
        let n = weights.len();
        let names = names.unwrap_or_else(|| (0..n).map(|i| i.to_string()).collect());
        if names.len() != n {
            return Err(InputError::NameCount {
                names: names.len(),
                rows: n,
            });
        }
        let mut seen = HashSet::with_capacity(n);
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(InputError::DuplicateName(name.clone()));
            }
        }
        for (row, entries) in weights.iter().enumerate() {
            if entries.len() != n {
                return Err(InputError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            if let Some(col) = entries.iter().position(|w| *w < 0.0) {
                return Err(InputError::NegativeWeight { row, col });
            }
        }
        Ok(Self { names, weights })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let matrix = Self::from_csv_reader(file)?;
        tracing::debug!(path = %path.display(), vertices = matrix.len(), "matrix loaded");
        Ok(matrix)
    }

    /// Rows may differ in length here; the shape is checked once the whole
    /// table is read. Blank lines are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let has_header = rows.first().is_some_and(|row| row[0].is_empty());
        if !has_header {
            return Self::new(None, parse_rows(&rows, 0)?);
        }
        let names = rows[0][1..].to_vec();
        let body = &rows[1..];
        Self::new(Some(names), parse_rows(body, 1)?)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row][col]
    }

    pub fn is_symmetric(&self) -> bool {
        self.asymmetry().is_none()
    }

    fn asymmetry(&self) -> Option<(usize, usize)> {
        (0..self.len())
            .flat_map(|i| (i + 1..self.len()).map(move |j| (i, j)))
            .find(|&(i, j)| self.weights[i][j] != self.weights[j][i])
    }

    /// Builds the graph with an edge for every positive off-diagonal entry.
    /// Every named vertex is present, isolated or not.
    ///
    /// An undirected graph needs a symmetric matrix and takes the upper
    /// triangle; a directed graph reads each row as outgoing edges.
    pub fn to_graph(&self, kind: GraphKind) -> Result<AdjacencyList<String, f64>, InputError> {
        if kind == GraphKind::Undirected {
            if let Some((row, col)) = self.asymmetry() {
                return Err(InputError::Asymmetric { row, col });
            }
        }
        let mut graph = AdjacencyList::reserved(kind, self.len());
        for name in &self.names {
            graph.add_vertex(name.clone());
        }
        for (i, row) in self.weights.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                let wanted = match kind {
                    GraphKind::Undirected => i < j,
                    GraphKind::Directed => i != j,
                };
                if wanted && w > 0.0 {
                    graph.add_edge(self.names[i].clone(), self.names[j].clone(), w)?;
                }
            }
        }
        Ok(graph)
    }
}

/// Parses numeric rows, skipping `skip` leading label cells per row.
fn parse_rows(rows: &[Vec<String>], skip: usize) -> Result<Vec<Vec<f64>>, InputError> {
    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .skip(skip)
                .enumerate()
                .map(|(col, cell)| parse_weight(row, col, cell))
                .collect()
        })
        .collect()
}

fn parse_weight(row: usize, col: usize, cell: &str) -> Result<f64, InputError> {
    if cell.is_empty() {
        return Ok(0.0);
    }
    match cell.parse::<f64>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(InputError::ParseWeight {
            row,
            col,
            value: cell.to_string(),
        }),
    }
}
