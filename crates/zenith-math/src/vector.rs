use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::Vec3;

/// Marker for positions relative to the planet centre, in meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointKind;

/// Marker for directions. The length is not constrained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DirectionKind;

/// Marker for per-channel values: radiance, scattering coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ColorKind;

/// Three `f32` components tagged with what they mean.
///
/// `K` is a zero-sized marker that exists only at compile time. [`Point3`],
/// [`Direction3`] and [`Rgb`] share one storage type and one arithmetic
/// vocabulary, but a value of one kind never converts into another implicitly.
#[derive(Debug, PartialEq, Default)]
pub struct Triple<K> {
    value: Vec3,
    _kind: PhantomData<K>,
}

// Derived Clone/Copy would require `K: Copy`; the marker is never stored.
impl<K> Clone for Triple<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Triple<K> {}

/// A position in planet-centred space.
pub type Point3 = Triple<PointKind>;

/// A direction in planet-centred space.
pub type Direction3 = Triple<DirectionKind>;

/// A per-channel red/green/blue triple.
pub type Rgb = Triple<ColorKind>;

impl<K> Triple<K> {
    /// All components zero.
    pub const ZERO: Self = Self::from_vec3(Vec3::ZERO);

    /// Create a triple from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_vec3(Vec3::new(x, y, z))
    }

    /// Tag a raw `glam` vector with this kind.
    pub const fn from_vec3(value: Vec3) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    /// Create a triple with all components set to `v`.
    pub const fn splat(v: f32) -> Self {
        Self::from_vec3(Vec3::splat(v))
    }

    /// The untagged storage.
    pub fn as_vec3(self) -> Vec3 {
        self.value
    }

    pub fn to_array(self) -> [f32; 3] {
        self.value.to_array()
    }

    pub fn x(self) -> f32 {
        self.value.x
    }

    pub fn y(self) -> f32 {
        self.value.y
    }

    pub fn z(self) -> f32 {
        self.value.z
    }

    /// Inner product x₁x₂ + y₁y₂ + z₁z₂.
    pub fn dot(self, rhs: Self) -> f32 {
        self.value.dot(rhs.value)
    }

    /// Multiply every component by `s`.
    pub fn scale(self, s: f32) -> Self {
        Self::from_vec3(self.value * s)
    }

    /// Euclidean norm.
    pub fn length(self) -> f32 {
        self.value.length()
    }

    /// `self * (1 / length)`.
    ///
    /// A zero-length input yields non-finite components. This matches the
    /// contract of the scattering code, whose callers never pass zero vectors.
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Apply `f` to every component.
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.value.x), f(self.value.y), f(self.value.z))
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }
}

impl Point3 {
    /// The point `t` units along `direction` from `self`.
    pub fn along(self, direction: Direction3, t: f32) -> Point3 {
        self + direction * t
    }
}

impl Rgb {
    pub fn r(self) -> f32 {
        self.value.x
    }

    pub fn g(self) -> f32 {
        self.value.y
    }

    pub fn b(self) -> f32 {
        self.value.z
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(value: [f32; 3]) -> Self {
        Self::from_vec3(Vec3::from(value))
    }
}

impl<K> Add for Triple<K> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec3(self.value + rhs.value)
    }
}

impl<K> AddAssign for Triple<K> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K> Mul<f32> for Triple<K> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl<K> Mul<Triple<K>> for f32 {
    type Output = Triple<K>;

    fn mul(self, rhs: Triple<K>) -> Triple<K> {
        rhs.scale(self)
    }
}

/// Componentwise product, e.g. attenuation × coefficients.
impl Mul for Rgb {
    type Output = Rgb;

    fn mul(self, rhs: Rgb) -> Rgb {
        Rgb::from_vec3(self.value * rhs.value)
    }
}

/// Offsetting a point by a direction yields a point.
impl Add<Direction3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Direction3) -> Point3 {
        Point3::from_vec3(self.value + rhs.value)
    }
}

/// The difference of two points is the direction from `rhs` to `self`.
impl Sub for Point3 {
    type Output = Direction3;

    fn sub(self, rhs: Point3) -> Direction3 {
        Direction3::from_vec3(self.value - rhs.value)
    }
}

impl Neg for Direction3 {
    type Output = Direction3;

    fn neg(self) -> Direction3 {
        Direction3::from_vec3(-self.value)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1}) m", self.value.x, self.value.y, self.value.z)
    }
}

impl fmt::Display for Direction3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.value.x, self.value.y, self.value.z)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.4}, {:.4}, {:.4})", self.value.x, self.value.y, self.value.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Direction3::new(1.0, 2.0, 3.0);
        let b = Direction3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
    }

    #[test]
    fn test_add_and_scale() {
        let a = Rgb::new(1.0, 2.0, 3.0);
        let b = Rgb::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Rgb::new(1.5, 2.5, 3.5));
        assert_eq!(a.scale(2.0), Rgb::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
    }

    #[test]
    fn test_add_assign() {
        let mut total = Rgb::ZERO;
        total += Rgb::splat(0.25);
        total += Rgb::splat(0.25);
        assert_eq!(total, Rgb::splat(0.5));
    }

    #[test]
    fn test_length() {
        assert_eq!(Direction3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Point3::new(0.0, 0.0, -2.0).length(), 2.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let d = Direction3::new(0.0, 1.0, -1.0).normalize();
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.y() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((d.z() + std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let d = Direction3::ZERO.normalize();
        assert!(!d.is_finite());
    }

    #[test]
    fn test_point_along_direction() {
        let origin = Point3::new(0.0, 6_372_000.0, 0.0);
        let p = origin.along(Direction3::new(0.0, 0.0, -1.0), 10.0);
        assert_eq!(p, Point3::new(0.0, 6_372_000.0, -10.0));
    }

    #[test]
    fn test_point_difference_is_direction() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(0.0, 1.0, 3.0);
        let d: Direction3 = a - b;
        assert_eq!(d, Direction3::new(1.0, 0.0, -2.0));
        assert_eq!(-d, Direction3::new(-1.0, 0.0, 2.0));
    }

    #[test]
    fn test_rgb_componentwise_product() {
        let attenuation = Rgb::new(0.5, 0.25, 1.0);
        let coefficients = Rgb::new(2.0, 4.0, 3.0);
        assert_eq!(attenuation * coefficients, Rgb::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_rgb_from_array() {
        let c = Rgb::from([5.5e-6, 13.0e-6, 22.4e-6]);
        assert_eq!(c.r(), 5.5e-6);
        assert_eq!(c.g(), 13.0e-6);
        assert_eq!(c.b(), 22.4e-6);
    }

    #[test]
    fn test_map() {
        let c = Rgb::new(1.0, 4.0, 9.0).map(f32::sqrt);
        assert_eq!(c.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_generic_code_can_copy() {
        fn twice<K>(v: Triple<K>) -> Triple<K> {
            let copy = v;
            copy + v
        }
        assert_eq!(twice(Rgb::splat(1.5)), Rgb::splat(3.0));
        let d = Direction3::new(0.0, 2.0, 0.0);
        assert_eq!(d.normalize(), Direction3::new(0.0, 1.0, 0.0));
        // still usable after normalize consumed a copy
        assert_eq!(d.length(), 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction3::new(0.0, 1.0, 0.0)), "(0.000, 1.000, 0.000)");
        assert!(format!("{}", Point3::ZERO).ends_with(" m"));
    }
}
