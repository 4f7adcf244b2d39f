//! Kind-tagged `f32` vectors and the exposure curve for the Zenith sky renderer.
//!
//! Positions, directions and colors all live in three `f32` components, but
//! they are different things. Each is tagged with a zero-sized marker so the
//! compiler rejects a color where a direction is expected:
//!
//! ```compile_fail
//! use zenith_math::{Direction3, Rgb};
//!
//! let color = Rgb::new(0.2, 0.4, 0.8);
//! let direction: Direction3 = color; // Error: mismatched kinds
//! ```
//!
//! Points may be offset by directions, and two points subtract to a direction:
//!
//! ```rust
//! use zenith_math::{Direction3, Point3};
//!
//! let eye = Point3::new(0.0, 6_372_000.0, 0.0);
//! let ahead = eye.along(Direction3::new(0.0, 0.0, -1.0), 100.0);
//! let back: Direction3 = eye - ahead;
//! assert_eq!(back.z(), 100.0);
//! ```

mod tonemap;
mod vector;

pub use tonemap::{MAX_EXPOSURE, exposure_tone_map, to_rgb8};
pub use vector::{ColorKind, Direction3, DirectionKind, Point3, PointKind, Rgb, Triple};
