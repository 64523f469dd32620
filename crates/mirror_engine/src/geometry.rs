//! Geometry kernel
//!
//! Pure functions on the plane. Mirrors are treated as infinite lines through
//! an anchor point with a given orientation; segment bounds are only applied
//! by callers that ask for them ([`lies_on_segment`]).

use crate::foundation::math::{utils, Rotation2, Vec2};

/// Relative tolerance used to decide that an object sits on the virtual viewer image
const COINCIDENCE_EPSILON: f64 = 1e-9;

/// Reflect `point` across the line through `origin` oriented at `angle` radians
///
/// The point is rotated into the line's frame, its local y coordinate is
/// negated, and it is rotated back.
pub fn reflect_point_across_line(point: Vec2, origin: Vec2, angle: f64) -> Vec2 {
    let rotation = Rotation2::new(angle);
    let local = rotation.inverse() * (point - origin);
    origin + rotation * Vec2::new(local.x, -local.y)
}

/// Intersection of the infinite lines `AB` and `CD`
///
/// Returns `None` when the determinant is exactly zero (parallel, coincident
/// or degenerate lines) and when the solution is not finite.
pub fn intersect_lines(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a1 * a.x + b1 * a.y;

    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = a2 * c.x + b2 * c.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    let point = Vec2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);
    utils::is_finite(&point).then_some(point)
}

/// Second point of a mirror's line, `length` away from `anchor` along `angle`
pub fn mirror_end_point(anchor: Vec2, angle: f64, length: f64) -> Vec2 {
    anchor + utils::direction(angle) * length
}

/// Point on the mirror line where light from `object` reflects towards `viewer`
///
/// Intersects the line from the object to the viewer's mirror image with the
/// mirror line. When the object sits on the viewer's image the first line
/// degenerates; the object-to-viewer line is then perpendicular to the mirror
/// and is used instead.
pub fn reflection_point(
    object: Vec2,
    viewer: Vec2,
    mirror_anchor: Vec2,
    mirror_angle: f64,
    mirror_length: f64,
) -> Option<Vec2> {
    let virtual_viewer = reflect_point_across_line(viewer, mirror_anchor, mirror_angle);
    let mirror_end = mirror_end_point(mirror_anchor, mirror_angle, mirror_length);

    let target = if coincident(object, virtual_viewer) {
        viewer
    } else {
        virtual_viewer
    };
    intersect_lines(object, target, mirror_anchor, mirror_end)
}

/// Signed distance of `point`'s projection from `center` along the line at `angle`
pub fn segment_parameter(point: Vec2, center: Vec2, angle: f64) -> f64 {
    (point - center).dot(&utils::direction(angle))
}

/// Whether `point` projects within the mirror of `length` centered on `center`
pub fn lies_on_segment(point: Vec2, center: Vec2, angle: f64, length: f64, tolerance: f64) -> bool {
    segment_parameter(point, center, angle).abs() <= length * 0.5 + tolerance
}

fn coincident(a: Vec2, b: Vec2) -> bool {
    let scale = 1.0 + a.norm().max(b.norm());
    (a - b).norm() <= COINCIDENCE_EPSILON * scale
}
