//! Bidirectional best-first cell search.

use rectnav_core::{Cell, Point};

use crate::frontier::{Direction, Frontier, Node, SearchSpace};
use crate::portal::crossing_point;
use crate::traits::NavGraph;

/// Find a cell route from `start` to `dest` by growing one search front
/// from each end until they meet.
///
/// Both fronts share a single priority queue, so expansion interleaves by
/// global priority: cost so far plus the straight-line distance from the
/// entry's crossing point to the opposite endpoint. Edge costs are the
/// distances between successive portal crossing points, estimated with
/// [`crossing_point`] anchored on the previous crossing. The heuristic is
/// not admissible in every geometry, so routes are good but not provably
/// shortest.
///
/// The search stops when it pops a cell the opposite front has already
/// reached. A front reaching the opposite endpoint cell is the same event,
/// since each endpoint cell is reached by its own front from the outset.
///
/// Returns the route including both endpoint cells, or `None` if the fronts
/// exhaust without meeting. Adjacent endpoints short-circuit to
/// `[start, dest]` without searching.
pub fn bidirectional_cells<G: NavGraph + ?Sized>(
    graph: &G,
    start: Cell,
    dest: Cell,
    start_point: Point,
    dest_point: Point,
) -> Option<Vec<Cell>> {
    if start == dest {
        return Some(vec![start]);
    }

    let mut nbuf = Vec::new();
    graph.neighbors(&start, &mut nbuf);
    if nbuf.contains(&dest) {
        return Some(vec![start, dest]);
    }

    let mut space = SearchSpace::default();
    let mut open = Frontier::default();

    let si = space.id(start);
    let di = space.id(dest);
    space.set(Direction::Forward, si, Node::root(start_point));
    space.set(Direction::Backward, di, Node::root(dest_point));
    open.push(si, Direction::Forward, start_point.distance(dest_point));
    open.push(di, Direction::Backward, dest_point.distance(start_point));

    let mut expansions = 0usize;

    let meet = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search None;
        };
        let (ci, dir) = (current.idx, current.dir);

        let Some(&node) = space.node(dir, ci) else {
            continue;
        };
        // Skip stale entries.
        if !node.open {
            continue;
        }
        if space.node(dir.opposite(), ci).is_some() {
            break 'search Some(ci);
        }

        space.close(dir, ci);
        expansions += 1;

        let (goal_cell, goal_point) = match dir {
            Direction::Forward => (dest, dest_point),
            Direction::Backward => (start, start_point),
        };
        let cell = space.cell(ci);

        nbuf.clear();
        graph.neighbors(&cell, &mut nbuf);

        for &adj in nbuf.iter() {
            let target = (adj == goal_cell).then_some(goal_point);
            let crossing = crossing_point(&cell, Some(&adj), Some(node.crossing), target);
            let tentative_g = node.g + node.crossing.distance(crossing);

            let ni = space.id(adj);
            if let Some(n) = space.node(dir, ni) {
                if tentative_g >= n.g {
                    continue;
                }
            }

            space.set(
                dir,
                ni,
                Node {
                    g: tentative_g,
                    crossing,
                    parent: Some(ci),
                    open: true,
                },
            );
            log::trace!("{dir:?} {cell} -> {adj}: g = {tentative_g}");
            open.push(ni, dir, tentative_g + crossing.distance(goal_point));
        }
    };

    let Some(mi) = meet else {
        log::debug!("bidirectional search exhausted after {expansions} expansions");
        return None;
    };
    log::debug!(
        "bidirectional search met at {} after {expansions} expansions",
        space.cell(mi)
    );

    let mut route = space.chain(Direction::Forward, mi);
    route.reverse();
    route.extend(space.chain(Direction::Backward, mi).into_iter().skip(1));
    Some(route)
}
