//! Connector anchoring.
//!
//! Connection lines are drawn from the boundary of one element to the boundary
//! of the other rather than between centres. The boundary point is where the
//! ray from the shape's centre toward a target crosses the shape's bounding
//! rectangle.

use stockflow_core::{Bounds, Point};

use crate::model::Element;

/// Point where the ray from the centre of `bounds` toward `toward` leaves the
/// rectangle.
///
/// When the horizontal distance dominates, the ray exits through the left or
/// right edge; otherwise through the top or bottom edge. A target at the
/// centre itself yields the centre.
pub fn edge_point(bounds: &Bounds, toward: &Point) -> Point {
    let center = bounds.center();
    let (half_w, half_h) = bounds.half_extents();

    let dx = toward.x - center.x;
    let dy = toward.y - center.y;

    if dx == 0.0 && dy == 0.0 {
        return center;
    }

    if dx.abs() > dy.abs() {
        let edge_x = if dx > 0.0 { half_w } else { -half_w };
        Point::new(center.x + edge_x, center.y + dy * half_w / dx.abs())
    } else {
        let edge_y = if dy > 0.0 { half_h } else { -half_h };
        Point::new(center.x + dx * half_h / dy.abs(), center.y + edge_y)
    }
}

/// Polyline for a connection: source edge, waypoints, target edge.
///
/// Each edge point is aimed at the centre of the opposite element.
pub fn connection_route(source: &Element, target: &Element, waypoints: &[Point]) -> Vec<Point> {
    let source_edge = edge_point(&source.bounds(), &target.center());
    let target_edge = edge_point(&target.bounds(), &source.center());

    let mut route = Vec::with_capacity(waypoints.len() + 2);
    route.push(source_edge);
    route.extend_from_slice(waypoints);
    route.push(target_edge);
    route
}
