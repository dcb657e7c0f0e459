use std::collections::{HashMap, VecDeque};

use rectnav_core::Cell;

use crate::traits::NavGraph;

/// Find the route with the fewest cells from `start` to `dest` using
/// breadth-first search.
///
/// Ignores geometry entirely: every portal crossing counts the same.
/// Returns the full route (including both endpoints) or `None` if no route
/// exists.
pub fn breadth_first_cells<G: NavGraph + ?Sized>(
    graph: &G,
    start: Cell,
    dest: Cell,
) -> Option<Vec<Cell>> {
    if start == dest {
        return Some(vec![start]);
    }

    // Predecessor of every reached cell; `None` marks the root.
    let mut previous: HashMap<Cell, Option<Cell>> = HashMap::new();
    previous.insert(start, None);

    let mut queue: VecDeque<Cell> = VecDeque::new();
    queue.push_back(start);

    let mut nbuf = Vec::new();

    'search: while let Some(current) = queue.pop_front() {
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);

        for &next in nbuf.iter() {
            if previous.contains_key(&next) {
                continue;
            }
            previous.insert(next, Some(current));
            if next == dest {
                break 'search;
            }
            queue.push_back(next);
        }
    }

    if !previous.contains_key(&dest) {
        return None;
    }

    let mut path = Vec::new();
    let mut cur = Some(dest);
    while let Some(c) = cur {
        path.push(c);
        cur = previous.get(&c).copied().flatten();
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectnav_core::Mesh;

    #[test]
    fn fewest_cells_on_grid() {
        let mesh = Mesh::grid(4, 4, 1.0, 1.0);
        let s = mesh.cells()[0];
        let t = mesh.cells()[15];
        let route = breadth_first_cells(&mesh, s, t).unwrap();
        assert_eq!(route.len(), 7);
        assert_eq!(route.first(), Some(&s));
        assert_eq!(route.last(), Some(&t));
        for w in route.windows(2) {
            assert!(mesh.is_adjacent(&w[0], &w[1]));
        }
    }

    #[test]
    fn ignores_cell_size() {
        // The short way round passes through one huge cell; BFS takes it
        // anyway because it crosses fewer portals.
        let a = Cell::new(0.0, 1.0, 0.0, 1.0);
        let huge = Cell::new(1.0, 100.0, 0.0, 100.0);
        let b = Cell::new(100.0, 101.0, 0.0, 1.0);
        let small: Vec<Cell> = (0..3)
            .map(|i| Cell::new(1.0 + i as f64, 2.0 + i as f64, -1.0, 0.0))
            .collect();
        let mut mesh = Mesh::new();
        mesh.connect(a, huge);
        mesh.connect(huge, b);
        mesh.connect(a, small[0]);
        mesh.connect(small[0], small[1]);
        mesh.connect(small[1], small[2]);
        mesh.connect(small[2], b);
        assert_eq!(breadth_first_cells(&mesh, a, b), Some(vec![a, huge, b]));
    }

    #[test]
    fn unreachable() {
        let a = Cell::new(0.0, 1.0, 0.0, 1.0);
        let b = Cell::new(3.0, 4.0, 0.0, 1.0);
        let mesh = Mesh::from_parts(vec![a, b], Vec::new());
        assert_eq!(breadth_first_cells(&mesh, a, b), None);
    }

    #[test]
    fn same_cell() {
        let a = Cell::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(breadth_first_cells(&Mesh::new(), a, a), Some(vec![a]));
    }
}
