//! Choreo core primitives
//!
//! Foundational types shared by the animation core and the stage backend:
//!
//! - **Geometry**: points, sizes, and screen bounds
//! - **Color**: RGB/HSL values with CSS-style formatting
//! - **Targets**: the boundary trait for anything an animation moves
//!
//! # Example
//!
//! ```rust
//! use choreo_core::{Bounds, Color, Point, Size};
//!
//! let screen = Bounds::of_size(Size::new(1920.0, 1080.0));
//! let clamped = screen.clamp(Point::new(2000.0, -10.0));
//! assert_eq!(clamped, Point::new(1920.0, 0.0));
//!
//! let accent = Color::hsl(210.0, 60.0, 80.0);
//! assert_eq!(accent.to_string(), "hsl(210, 60%, 80%)");
//! ```

pub mod color;
pub mod geometry;
pub mod target;

pub use color::Color;
pub use geometry::{Bounds, Point, Size};
pub use target::{close_all, Target, TargetRef};
