use rectnav_core::{Cell, Point};

use crate::frontier::{Direction, Frontier, Node, SearchSpace};
use crate::portal::crossing_point;
use crate::traits::NavGraph;

/// Find a cell route from `start` to `dest` with a single forward A* front.
///
/// Uses the same crossing-point cost model and straight-line heuristic as
/// [`bidirectional_cells`](crate::bidirectional_cells), but only stops once
/// the destination cell itself is popped.
///
/// Returns the full route (including both endpoints) or `None` if no route
/// exists.
pub fn astar_cells<G: NavGraph + ?Sized>(
    graph: &G,
    start: Cell,
    dest: Cell,
    start_point: Point,
    dest_point: Point,
) -> Option<Vec<Cell>> {
    if start == dest {
        return Some(vec![start]);
    }

    let mut space = SearchSpace::default();
    let mut open = Frontier::default();

    let start_idx = space.id(start);
    let goal_idx = space.id(dest);
    space.set(Direction::Forward, start_idx, Node::root(start_point));
    open.push(
        start_idx,
        Direction::Forward,
        start_point.distance(dest_point),
    );

    let mut nbuf = Vec::new();

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        let Some(&node) = space.node(Direction::Forward, ci) else {
            continue;
        };
        // Skip stale entries.
        if !node.open {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        space.close(Direction::Forward, ci);
        let cell = space.cell(ci);

        nbuf.clear();
        graph.neighbors(&cell, &mut nbuf);

        for &adj in nbuf.iter() {
            let target = (adj == dest).then_some(dest_point);
            let crossing = crossing_point(&cell, Some(&adj), Some(node.crossing), target);
            let tentative_g = node.g + node.crossing.distance(crossing);

            let ni = space.id(adj);
            if let Some(n) = space.node(Direction::Forward, ni) {
                if tentative_g >= n.g {
                    continue;
                }
            }

            space.set(
                Direction::Forward,
                ni,
                Node {
                    g: tentative_g,
                    crossing,
                    parent: Some(ci),
                    open: true,
                },
            );
            open.push(
                ni,
                Direction::Forward,
                tentative_g + crossing.distance(dest_point),
            );
        }
    };

    if !found {
        return None;
    }

    let mut path = space.chain(Direction::Forward, goal_idx);
    path.reverse();
    Some(path)
}
