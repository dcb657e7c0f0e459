//! The navigation mesh: an ordered cell list plus an adjacency relation.

use std::collections::HashMap;

use crate::geom::Cell;

/// A rectangular navigation mesh.
///
/// Cells keep the order in which they were added, and each neighbor list
/// keeps insertion order, so anything that walks the mesh is deterministic.
/// The adjacency relation is taken as given: it is expected to be symmetric
/// but is never validated.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "MeshRepr", into = "MeshRepr")
)]
pub struct Mesh {
    cells: Vec<Cell>,
    // Neighbor lists in first-seen key order, indexed through `index`.
    adjacency: Vec<(Cell, Vec<Cell>)>,
    index: HashMap<Cell, usize>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from a cell list and a (cell, neighbors) relation.
    pub fn from_parts<I>(cells: Vec<Cell>, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (Cell, Vec<Cell>)>,
    {
        let mut mesh = Self {
            cells,
            ..Self::default()
        };
        for (cell, neighbors) in adjacency {
            let slot = mesh.slot(cell);
            mesh.adjacency[slot].1.extend(neighbors);
        }
        mesh
    }

    /// A `cols × rows` grid of `cell_w × cell_h` cells with its origin at
    /// (0, 0), each cell connected to its four edge neighbours.
    pub fn grid(cols: usize, rows: usize, cell_w: f64, cell_h: f64) -> Self {
        let mut mesh = Self::new();
        let at = |c: usize, r: usize| {
            let x = c as f64 * cell_w;
            let y = r as f64 * cell_h;
            Cell::new(x, x + cell_w, y, y + cell_h)
        };
        for r in 0..rows {
            for c in 0..cols {
                mesh.add_cell(at(c, r));
            }
        }
        for r in 0..rows {
            for c in 0..cols {
                if c + 1 < cols {
                    mesh.connect(at(c, r), at(c + 1, r));
                }
                if r + 1 < rows {
                    mesh.connect(at(c, r), at(c, r + 1));
                }
            }
        }
        mesh
    }

    /// Append a cell to the cell list.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Record `a` and `b` as neighbours of each other. Repeated calls for the
    /// same pair are ignored.
    pub fn connect(&mut self, a: Cell, b: Cell) {
        self.connect_one_way(a, b);
        self.connect_one_way(b, a);
    }

    /// Connect every pair of cells whose boundaries share a segment of
    /// positive length.
    pub fn connect_touching(&mut self) {
        let cells = self.cells.clone();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                if a.shares_edge(b) {
                    self.connect(*a, *b);
                }
            }
        }
    }

    /// All cells in insertion order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Neighbours of `cell`, or an empty slice if it has none.
    #[inline]
    pub fn neighbors(&self, cell: &Cell) -> &[Cell] {
        match self.index.get(cell) {
            Some(&i) => &self.adjacency[i].1,
            None => &[],
        }
    }

    /// Whether `b` is listed as a neighbour of `a`.
    #[inline]
    pub fn is_adjacent(&self, a: &Cell, b: &Cell) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mesh has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rectangle of every cell, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Cell> {
        self.cells.iter().copied().reduce(Cell::union)
    }

    /// Iterate the adjacency relation in first-seen key order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&Cell, &[Cell])> {
        self.adjacency.iter().map(|(c, n)| (c, n.as_slice()))
    }

    fn slot(&mut self, cell: Cell) -> usize {
        if let Some(&i) = self.index.get(&cell) {
            return i;
        }
        let i = self.adjacency.len();
        self.adjacency.push((cell, Vec::new()));
        self.index.insert(cell, i);
        i
    }

    fn connect_one_way(&mut self, from: Cell, to: Cell) {
        let slot = self.slot(from);
        let list = &mut self.adjacency[slot].1;
        if !list.contains(&to) {
            list.push(to);
        }
    }
}

/// Wire layout of a [`Mesh`]: `{"boxes": [...], "adj": [[cell, [...]], ...]}`.
///
/// JSON object keys must be strings, so the relation is a list of pairs.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MeshRepr {
    boxes: Vec<Cell>,
    #[serde(default)]
    adj: Vec<(Cell, Vec<Cell>)>,
}

#[cfg(feature = "serde")]
impl From<MeshRepr> for Mesh {
    fn from(repr: MeshRepr) -> Self {
        Mesh::from_parts(repr.boxes, repr.adj)
    }
}

#[cfg(feature = "serde")]
impl From<Mesh> for MeshRepr {
    fn from(mesh: Mesh) -> Self {
        MeshRepr {
            boxes: mesh.cells,
            adj: mesh.adjacency,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::geom::Point;

    #[test]
    fn reads_boxes_and_adj_layout() {
        let json = r#"{
            "boxes": [[0, 10, 0, 10], [10, 20, 0, 10]],
            "adj": [
                [[0, 10, 0, 10], [[10, 20, 0, 10]]],
                [[10, 20, 0, 10], [[0, 10, 0, 10]]]
            ]
        }"#;
        let mesh: Mesh = serde_json::from_str(json).unwrap();
        let a = Cell::new(0.0, 10.0, 0.0, 10.0);
        let b = Cell::new(10.0, 20.0, 0.0, 10.0);
        assert_eq!(mesh.cells(), &[a, b]);
        assert!(mesh.is_adjacent(&a, &b));
        assert!(mesh.is_adjacent(&b, &a));
    }

    #[test]
    fn inverted_boxes_are_not_repaired() {
        let json = r#"{"boxes": [[10, 0, 0, 10]]}"#;
        let mesh: Mesh = serde_json::from_str(json).unwrap();
        let c = mesh.cells()[0];
        assert_eq!(c.x_min, 10.0);
        assert_eq!(c.x_max, 0.0);
        assert!(!c.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn mesh_round_trip() {
        let mesh = Mesh::grid(3, 3, 1.0, 1.0);
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cells(), mesh.cells());
        for c in mesh.cells() {
            assert_eq!(back.neighbors(c), mesh.neighbors(c));
        }
    }
}
