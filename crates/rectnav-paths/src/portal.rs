//! Portal crossing-point estimation.

use rectnav_core::{Cell, Point};

/// Estimate where a walker moving from `a` into `b` crosses their portal.
///
/// The crossing is where the straight line from `anchor` to `target` meets
/// the portal's supporting line, clamped onto the portal segment. `anchor`
/// and `target` default to the centroids of `a` and `b`.
///
/// - `b` absent: the centroid of `a`.
/// - `a == b`: `target` if given, otherwise the centroid of `a`.
///
/// A line parallel to the portal never meets it; the target's coordinate
/// along the portal is clamped instead. Cells that do not touch still get a
/// finite point.
pub fn crossing_point(
    a: &Cell,
    b: Option<&Cell>,
    anchor: Option<Point>,
    target: Option<Point>,
) -> Point {
    let Some(b) = b else {
        return a.centroid();
    };
    if a == b {
        return target.unwrap_or_else(|| a.centroid());
    }

    let portal = a.portal(b);
    if !portal.is_valid() {
        log::debug!("{a} and {b} do not touch; clamping onto their overlap anyway");
    }
    let anchor = anchor.unwrap_or_else(|| a.centroid());
    let target = target.unwrap_or_else(|| b.centroid());
    let d = target - anchor;

    if portal.is_vertical() {
        let x = portal.x_min;
        let y = if d.x == 0.0 {
            target.y
        } else {
            (anchor + d * ((x - anchor.x) / d.x)).y
        };
        Point::new(x, portal.clamp_y(y))
    } else {
        let y = portal.y_min;
        let x = if d.x == 0.0 {
            anchor.x
        } else if d.y == 0.0 {
            target.x
        } else {
            (anchor + d * ((y - anchor.y) / d.y)).x
        };
        Point::new(portal.clamp_x(x), y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left() -> Cell {
        Cell::new(0.0, 10.0, 0.0, 10.0)
    }

    fn right() -> Cell {
        Cell::new(10.0, 20.0, 0.0, 10.0)
    }

    fn above() -> Cell {
        Cell::new(2.0, 6.0, 10.0, 20.0)
    }

    #[test]
    fn missing_neighbor_gives_centroid() {
        assert_eq!(
            crossing_point(&left(), None, None, None),
            Point::new(5.0, 5.0)
        );
        assert_eq!(
            crossing_point(&left(), None, Some(Point::ZERO), Some(Point::ZERO)),
            Point::new(5.0, 5.0)
        );
    }

    #[test]
    fn same_cell_gives_target_or_centroid() {
        let t = Point::new(3.0, 4.0);
        assert_eq!(crossing_point(&left(), Some(&left()), None, Some(t)), t);
        assert_eq!(
            crossing_point(&left(), Some(&left()), None, None),
            Point::new(5.0, 5.0)
        );
    }

    #[test]
    fn vertical_portal_follows_the_line() {
        let p = crossing_point(
            &left(),
            Some(&right()),
            Some(Point::new(1.0, 1.0)),
            Some(Point::new(19.0, 9.0)),
        );
        assert_eq!(p, Point::new(10.0, 5.0));
    }

    #[test]
    fn slanted_line_lands_on_the_portal() {
        // (2, 3) -> (14, 7) crosses x = 10 at y = 3 + 4 * 8 / 12.
        let p = crossing_point(
            &left(),
            Some(&right()),
            Some(Point::new(2.0, 3.0)),
            Some(Point::new(14.0, 7.0)),
        );
        assert_eq!(p.x, 10.0);
        assert!((p.y - 17.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn defaults_are_centroids() {
        let p = crossing_point(&left(), Some(&right()), None, None);
        assert_eq!(p, Point::new(10.0, 5.0));
    }

    #[test]
    fn vertical_portal_clamps() {
        let small = Cell::new(10.0, 20.0, 4.0, 6.0);
        let p = crossing_point(
            &left(),
            Some(&small),
            Some(Point::new(0.0, 0.0)),
            Some(Point::new(20.0, 0.0)),
        );
        assert_eq!(p, Point::new(10.0, 4.0));
    }

    #[test]
    fn vertical_line_against_vertical_portal() {
        // The line never meets the portal; the target's y is clamped.
        let p = crossing_point(
            &left(),
            Some(&right()),
            Some(Point::new(5.0, 1.0)),
            Some(Point::new(5.0, 42.0)),
        );
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn horizontal_portal_follows_the_line() {
        // Line from (0, 0) to (8, 20) crosses y = 10 at x = 4.
        let p = crossing_point(
            &left(),
            Some(&above()),
            Some(Point::new(0.0, 0.0)),
            Some(Point::new(8.0, 20.0)),
        );
        assert_eq!(p, Point::new(4.0, 10.0));
    }

    #[test]
    fn vertical_line_against_horizontal_portal_is_exact() {
        let p = crossing_point(
            &left(),
            Some(&above()),
            Some(Point::new(3.0, 1.0)),
            Some(Point::new(3.0, 15.0)),
        );
        assert_eq!(p, Point::new(3.0, 10.0));

        let clamped = crossing_point(
            &left(),
            Some(&above()),
            Some(Point::new(9.0, 1.0)),
            Some(Point::new(9.0, 15.0)),
        );
        assert_eq!(clamped, Point::new(6.0, 10.0));
    }

    #[test]
    fn horizontal_line_against_horizontal_portal() {
        let p = crossing_point(
            &left(),
            Some(&above()),
            Some(Point::new(0.0, 5.0)),
            Some(Point::new(5.0, 5.0)),
        );
        assert_eq!(p, Point::new(5.0, 10.0));
    }

    #[test]
    fn corner_portal_collapses_to_the_corner() {
        let diagonal = Cell::new(10.0, 20.0, 10.0, 20.0);
        let p = crossing_point(
            &left(),
            Some(&diagonal),
            Some(Point::new(1.0, 9.0)),
            None,
        );
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn zero_width_cell() {
        let sliver = Cell::new(10.0, 10.0, 0.0, 10.0);
        let p = crossing_point(
            &left(),
            Some(&sliver),
            Some(Point::new(1.0, 1.0)),
            None,
        );
        assert_eq!(p.x, 10.0);
        assert!((0.0..=10.0).contains(&p.y));
    }

    #[test]
    fn disjoint_cells_do_not_panic() {
        let far = Cell::new(30.0, 40.0, 30.0, 40.0);
        let p = crossing_point(&left(), Some(&far), None, None);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
