//! Ray–sphere intersection for spheres centred at the origin.

use zenith_math::{Direction3, Point3};

/// Result of intersecting a ray's supporting line with a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SphereHit {
    /// The line crosses the sphere at ray parameters `near <= far`.
    /// Either may be negative when the crossing lies behind the origin.
    Hit { near: f32, far: f32 },
    /// The line never touches the sphere.
    Miss,
}

impl SphereHit {
    /// `(near, far)` if the sphere was hit.
    pub fn interval(self) -> Option<(f32, f32)> {
        match self {
            SphereHit::Hit { near, far } => Some((near, far)),
            SphereHit::Miss => None,
        }
    }

    /// Forward distance to the far crossing, or zero when there is nothing
    /// ahead of the origin.
    pub fn far_or_zero(self) -> f32 {
        match self {
            SphereHit::Hit { far, .. } if far > 0.0 => far,
            _ => 0.0,
        }
    }
}

/// Intersect the ray `origin + t * direction` with a sphere of `radius`
/// centred at the coordinate origin.
///
/// Solves `a t² + b t + c = 0` in closed form. `direction` need not be
/// normalized; distances are in units of its length.
pub fn ray_sphere_intersect(origin: Point3, direction: Direction3, radius: f32) -> SphereHit {
    let o = origin.as_vec3();
    let d = direction.as_vec3();

    let a = d.dot(d);
    let b = 2.0 * d.dot(o);
    let c = o.dot(o) - radius * radius;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return SphereHit::Miss;
    }

    let sqrt_disc = disc.sqrt();
    SphereHit::Hit {
        near: (-b - sqrt_disc) / (2.0 * a),
        far: (-b + sqrt_disc) / (2.0 * a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_through_centre() {
        let hit = ray_sphere_intersect(
            Point3::new(0.0, 0.0, 10.0),
            Direction3::new(0.0, 0.0, -1.0),
            2.0,
        );
        assert_eq!(hit, SphereHit::Hit { near: 8.0, far: 12.0 });
    }

    #[test]
    fn test_origin_inside_sphere() {
        let (near, far) = ray_sphere_intersect(Point3::ZERO, Direction3::new(1.0, 0.0, 0.0), 5.0)
            .interval()
            .unwrap();
        assert_eq!(near, -5.0);
        assert_eq!(far, 5.0);
    }

    #[test]
    fn test_sphere_behind_origin() {
        let (near, far) = ray_sphere_intersect(
            Point3::new(0.0, 0.0, 10.0),
            Direction3::new(0.0, 0.0, 1.0),
            2.0,
        )
        .interval()
        .unwrap();
        assert!(near < far);
        assert!(far < 0.0);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let hit = ray_sphere_intersect(
            Point3::new(0.0, 10.0, 0.0),
            Direction3::new(1.0, 0.0, 0.0),
            1.0,
        );
        assert_eq!(hit, SphereHit::Miss);
        assert_eq!(hit.interval(), None);
        assert_eq!(hit.far_or_zero(), 0.0);
    }

    #[test]
    fn test_unnormalized_direction_scales_distances() {
        let hit = ray_sphere_intersect(
            Point3::new(0.0, 0.0, 10.0),
            Direction3::new(0.0, 0.0, -2.0),
            2.0,
        );
        assert_eq!(hit, SphereHit::Hit { near: 4.0, far: 6.0 });
    }

    #[test]
    fn test_atmosphere_visible_from_surface() {
        let planet_radius = 6_371_000.0_f32;
        let atmosphere_radius = 6_471_000.0_f32;
        let eye = Point3::new(0.0, planet_radius + 1_000.0, 0.0);

        let hit = ray_sphere_intersect(eye, Direction3::new(0.0, 1.0, 0.0), atmosphere_radius);
        let (near, far) = hit.interval().unwrap();
        assert!(near < 0.0, "shell boundary behind the observer");
        assert!((far - 99_000.0).abs() < 10.0, "far = {far}");
        assert!((hit.far_or_zero() - far).abs() < f32::EPSILON);
    }

    #[test]
    fn test_far_or_zero_behind() {
        let hit = SphereHit::Hit {
            near: -5.0,
            far: -1.0,
        };
        assert_eq!(hit.far_or_zero(), 0.0);
    }
}
