//! Turning cell routes into waypoint paths.

use rectnav_core::{Cell, Point};

use crate::portal::crossing_point;

/// Build the waypoint path for a cell route.
///
/// The path starts at `source`, crosses each portal once, and ends at
/// `dest`. Each crossing is anchored on the previously emitted point and
/// aims for `dest` only when entering the final cell; otherwise it aims
/// for the centroid of the cell being entered.
///
/// `path.len() == cells.len() + 1` for any non-empty route.
pub fn synthesize(cells: &[Cell], source: Point, dest: Point) -> Vec<Point> {
    let mut path = Vec::with_capacity(cells.len() + 1);
    path.push(source);

    if let Some(&last) = cells.last() {
        let mut anchor = source;
        for w in cells.windows(2) {
            let target = (w[1] == last).then_some(dest);
            let p = crossing_point(&w[0], Some(&w[1]), Some(anchor), target);
            path.push(p);
            anchor = p;
        }
    }

    path.push(dest);
    path
}

/// The centroid of every cell on a route, in order.
///
/// A coarse rendition of a route, handy for diagnostics.
pub fn centroid_path(cells: &[Cell]) -> Vec<Point> {
    cells.iter().map(|c| c.centroid()).collect()
}
