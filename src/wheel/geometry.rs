//! Angle table and circle placement for wheel items.
//!
//! Angles are degrees in screen space: y grows downward and positive
//! angles turn clockwise, the same convention as CSS `rotate()`. Angle 0
//! points right and `-90` points straight up.

/// Angle that marks the top of the wheel. A selected color is rotated here.
pub const INITIAL_ANGLE: f64 = -90.0;

/// Angular spacing between adjacent items on a wheel of `count` items.
///
/// `None` for an empty wheel, which has no spacing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn angle_between(count: usize) -> Option<f64> {
    (count > 0).then(|| 360.0 / count as f64)
}

/// Angle of the item at `index` for a wheel rotated by `base_angle`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn item_angle(index: usize, base_angle: f64, angle_between: f64) -> f64 {
    base_angle + index as f64 * angle_between
}

/// Recompute the full angle table for a wheel of `count` items.
///
/// ```
/// use colorwheel::wheel::geometry::derive_angles;
///
/// assert_eq!(derive_angles(0.0, 3), vec![0.0, 120.0, 240.0]);
/// assert_eq!(derive_angles(-210.0, 3), vec![-210.0, -90.0, 30.0]);
/// ```
#[must_use]
pub fn derive_angles(base_angle: f64, count: usize) -> Vec<f64> {
    let Some(step) = angle_between(count) else {
        return Vec::new();
    };
    (0..count)
        .map(|index| item_angle(index, base_angle, step))
        .collect()
}

/// Map an angle to the range `(-180, 180]`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Smallest absolute distance between two angles, in `[0, 180]`.
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    normalize_degrees(a - b).abs()
}

/// Where one item sits relative to the wheel center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Rotation applied before translating outward, in degrees
    pub angle: f64,
    /// Distance from the center
    pub radius: f64,
    /// Horizontal offset from the center
    pub x_offset: f64,
    /// Vertical offset from the center (positive is down)
    pub y_offset: f64,
}

impl Placement {
    /// Counter-rotation applied to the item so it stays upright.
    #[must_use]
    pub fn counter_rotation(&self) -> f64 {
        // Subtract from +0.0 so an unrotated item prints "0deg", not "-0deg"
        0.0 - self.angle
    }

    /// CSS transform that places an item centered on its anchor.
    ///
    /// Rotate, translate outward, then rotate back so the item stays upright.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate(-50%, -50%) rotate({}deg) translate({}px) rotate({}deg)",
            self.angle,
            self.radius,
            self.counter_rotation()
        )
    }
}

/// Place the item at `index` on a circle of `radius`.
///
/// Equivalent to `rotate(a) translate(radius) rotate(-a)` with
/// `a = base_angle + index * angle_between`: the translation is carried out
/// along the rotated x axis, and the final counter-rotation only affects
/// the item's own orientation.
#[must_use]
pub fn project_position(index: usize, base_angle: f64, angle_between: f64, radius: f64) -> Placement {
    let angle = item_angle(index, base_angle, angle_between);
    let radians = angle.to_radians();
    Placement {
        angle,
        radius,
        x_offset: radius * radians.cos(),
        y_offset: radius * radians.sin(),
    }
}
