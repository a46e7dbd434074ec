//! Bundled example graphs used by the command-line tool.

use crate::{
    error::{GraphError, InputError},
    graph::{AdjacencyList, GraphKind},
    input::WeightMatrix,
};

/// 16-vertex planar grid with diagonals, as neighbor lists.
const GRID: [(u32, &[u32]); 16] = [
    (8, &[10, 9, 0]),
    (10, &[8, 11, 3]),
    (9, &[8, 4, 11]),
    (11, &[10, 7, 9]),
    (0, &[8, 1, 3, 4]),
    (3, &[10, 2, 7, 0]),
    (4, &[9, 0, 5, 7]),
    (7, &[11, 4, 6, 3]),
    (1, &[0, 12, 2, 5]),
    (2, &[1, 3, 14, 6]),
    (5, &[1, 4, 13, 6]),
    (6, &[7, 5, 15, 2]),
    (12, &[1, 13, 14]),
    (13, &[12, 15, 5]),
    (14, &[12, 2, 15]),
    (15, &[14, 13, 6]),
];

pub fn coloring_grid() -> Result<AdjacencyList<u32>, GraphError> {
    AdjacencyList::from_neighbor_lists(
        GraphKind::Undirected,
        GRID.iter().map(|(v, ns)| (*v, ns.iter().copied())),
    )
}

pub const MAZE_START: &str = "A";
pub const MAZE_GOAL: &str = "B";

/// Cells of a 65-cell maze; `A` is the entrance and `B` the exit.
const MAZE: [(&str, &[&str]); 65] = [
    ("A", &["1", "4"]),
    ("1", &["A", "6"]),
    ("2", &["3", "7"]),
    ("3", &["2"]),
    ("4", &["A", "5", "9"]),
    ("5", &["4", "19"]),
    ("6", &["1", "7"]),
    ("7", &["2", "6", "8"]),
    ("8", &["7", "15"]),
    ("9", &["4", "10", "29"]),
    ("10", &["9", "16"]),
    ("11", &["12"]),
    ("12", &["11", "13", "17"]),
    ("13", &["12"]),
    ("14", &["15"]),
    ("15", &["8", "14", "21"]),
    ("16", &["10", "17"]),
    ("17", &["12", "16"]),
    ("18", &["19", "24"]),
    ("19", &["5", "18", "20"]),
    ("20", &["19", "27"]),
    ("21", &["15"]),
    ("22", &["23"]),
    ("23", &["22", "32"]),
    ("24", &["18", "25"]),
    ("25", &["24", "34"]),
    ("26", &["27", "40"]),
    ("27", &["20", "26", "28"]),
    ("28", &["27", "46"]),
    ("29", &["9", "30"]),
    ("30", &["29", "51"]),
    ("31", &["32", "47"]),
    ("32", &["23", "31"]),
    ("33", &["34", "38"]),
    ("34", &["25", "33"]),
    ("35", &["45"]),
    ("36", &["57"]),
    ("37", &["38", "41"]),
    ("38", &["33", "37"]),
    ("39", &["40", "43"]),
    ("40", &["26", "39"]),
    ("41", &["37", "42"]),
    ("42", &["41"]),
    ("43", &["39", "44"]),
    ("44", &["43", "49"]),
    ("45", &["35", "46"]),
    ("46", &["28", "45"]),
    ("47", &["31", "48", "52"]),
    ("48", &["47", "54"]),
    ("49", &["44", "50"]),
    ("50", &["49", "B"]),
    ("51", &["30", "52", "58"]),
    ("52", &["47", "51", "59"]),
    ("53", &["54", "60"]),
    ("54", &["48", "53"]),
    ("55", &["56", "61"]),
    ("56", &["55"]),
    ("B", &["50", "63"]),
    ("57", &["36", "58"]),
    ("58", &["51", "57"]),
    ("59", &["52"]),
    ("60", &["53", "61"]),
    ("61", &["55", "60"]),
    ("62", &["63"]),
    ("63", &["B", "62"]),
];

pub fn maze() -> Result<AdjacencyList<&'static str>, GraphError> {
    AdjacencyList::from_neighbor_lists(
        GraphKind::Undirected,
        MAZE.iter().map(|(v, ns)| (*v, ns.iter().copied())),
    )
}

pub const ROUTE_FROM: &str = "Leixões";
pub const ROUTE_TO: &str = "Tavira";

const CITIES: [&str; 19] = [
    "Caminha",
    "V. Castelo",
    "Leixões",
    "Aveiro",
    "F. da Foz",
    "Nazaré",
    "Peniche",
    "Cascais",
    "Lisboa",
    "Sesimbra",
    "Setúbal",
    "Sines",
    "Baleeira",
    "Lagos",
    "Portimão",
    "Vilamoura",
    "C. Sta. Maria",
    "Tavira",
    "VRS. António",
];

/// Road distances in km between the cities above.
#[rustfmt::skip]
const DISTANCES: [[u32; 19]; 19] = [
    [0, 12, 43, 75, 105, 138, 156, 201, 206, 221, 223, 249, 302, 315, 322, 342, 356, 373, 384],
    [12, 0, 31, 63, 93, 126, 144, 189, 194, 209, 221, 237, 290, 303, 310, 330, 344, 361, 372],
    [43, 31, 0, 32, 63, 96, 116, 160, 172, 181, 193, 209, 262, 275, 282, 302, 316, 333, 344],
    [75, 63, 32, 0, 31, 64, 85, 129, 141, 150, 162, 178, 231, 244, 251, 271, 285, 302, 313],
    [105, 93, 63, 31, 0, 34, 56, 100, 112, 121, 133, 149, 202, 215, 222, 242, 256, 273, 284],
    [138, 126, 96, 64, 34, 0, 23, 65, 79, 88, 100, 116, 169, 181, 189, 209, 223, 240, 251],
    [156, 144, 116, 85, 56, 23, 0, 45, 57, 66, 78, 94, 147, 160, 167, 187, 201, 218, 229],
    [201, 189, 160, 129, 100, 65, 45, 0, 5, 26, 35, 49, 112, 123, 133, 154, 166, 174, 191],
    [206, 194, 172, 141, 112, 79, 57, 5, 0, 23, 32, 47, 111, 122, 132, 153, 165, 173, 190],
    [221, 209, 181, 150, 121, 88, 66, 26, 23, 0, 10, 32, 92, 107, 112, 130, 142, 158, 170],
    [223, 221, 193, 162, 133, 100, 78, 35, 32, 10, 0, 33, 95, 109, 115, 133, 145, 161, 172],
    [249, 237, 209, 178, 149, 116, 94, 49, 47, 32, 33, 0, 63, 77, 83, 101, 113, 129, 141],
    [302, 290, 262, 231, 202, 169, 147, 112, 111, 92, 95, 63, 0, 14, 20, 39, 50, 66, 76],
    [315, 303, 275, 244, 215, 181, 160, 123, 122, 107, 109, 77, 14, 0, 7, 26, 40, 56, 66],
    [322, 310, 282, 251, 222, 189, 167, 133, 132, 112, 115, 83, 20, 7, 0, 20, 33, 49, 59],
    [342, 330, 302, 271, 242, 209, 187, 154, 153, 130, 133, 101, 39, 26, 20, 0, 15, 31, 41],
    [356, 344, 316, 285, 256, 223, 201, 166, 165, 142, 145, 113, 50, 40, 33, 15, 0, 16, 26],
    [373, 361, 333, 302, 273, 240, 218, 174, 173, 158, 161, 129, 66, 56, 49, 31, 16, 0, 11],
    [384, 372, 344, 313, 284, 251, 229, 191, 190, 170, 172, 141, 76, 66, 59, 41, 26, 11, 0],
];

pub fn coastal_distances() -> Result<WeightMatrix, InputError> {
    WeightMatrix::new(
        Some(CITIES.iter().map(|c| c.to_string()).collect()),
        DISTANCES
            .iter()
            .map(|row| row.iter().map(|&d| f64::from(d)).collect())
            .collect(),
    )
}

/// Directed road map of the Portuguese coast: one arc per positive entry of
/// the distance table.
pub fn coastal_road_map() -> Result<AdjacencyList<String, f64>, InputError> {
    coastal_distances()?.to_graph(GraphKind::Directed)
}
