use rectnav_core::{Cell, Point};

use crate::traits::NavGraph;

/// Find the cell containing `p` by linear scan.
///
/// Returns the first cell, in the graph's enumeration order, whose
/// half-open bounds contain the point, or `None` if no cell does.
pub fn locate<G: NavGraph + ?Sized>(p: Point, graph: &G) -> Option<Cell> {
    graph.cells().iter().copied().find(|c| p.in_cell(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectnav_core::Mesh;

    #[test]
    fn finds_containing_cell() {
        let mesh = Mesh::grid(2, 1, 10.0, 10.0);
        assert_eq!(
            locate(Point::new(1.0, 1.0), &mesh),
            Some(Cell::new(0.0, 10.0, 0.0, 10.0))
        );
        assert_eq!(
            locate(Point::new(15.0, 9.0), &mesh),
            Some(Cell::new(10.0, 20.0, 0.0, 10.0))
        );
    }

    #[test]
    fn shared_edge_belongs_to_the_upper_cell() {
        let mesh = Mesh::grid(2, 1, 10.0, 10.0);
        // x = 10 is excluded from the left cell by the half-open bound.
        assert_eq!(
            locate(Point::new(10.0, 5.0), &mesh),
            Some(Cell::new(10.0, 20.0, 0.0, 10.0))
        );
    }

    #[test]
    fn outside_the_mesh() {
        let mesh = Mesh::grid(2, 1, 10.0, 10.0);
        assert_eq!(locate(Point::new(20.0, 5.0), &mesh), None);
        assert_eq!(locate(Point::new(-1.0, 5.0), &mesh), None);
        assert_eq!(locate(Point::new(5.0, 10.0), &mesh), None);
        assert_eq!(locate(Point::new(5.0, 5.0), &Mesh::new()), None);
    }
}
