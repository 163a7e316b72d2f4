//! Choreo stage backend
//!
//! The collaborator side of the animation system: an in-memory window
//! backend plus the placement and palette helpers hosts use to set a
//! scene before handing it to the choreographer.
//!
//! - **Stage**: spawns [`StageWindow`]s (the `Target` implementation),
//!   enforces a window limit, and tracks every handle it handed out
//! - **Layout**: safe-area bounds, random placement, circle and grid
//!   formations
//! - **Palette**: pastel, rainbow, warm, cool, monochromatic, and
//!   gradient color sets
//!
//! # Example
//!
//! ```rust
//! use choreo_core::{Point, Size};
//! use choreo_stage::{layout, palette, Stage, WindowConfig};
//!
//! let mut stage = Stage::with_limit(Size::new(1280.0, 800.0), 8);
//! let homes = layout::circle_positions(4, Point::new(640.0, 400.0), 220.0);
//!
//! for (home, color) in homes.into_iter().zip(palette::rainbow(4)) {
//!     stage
//!         .spawn(WindowConfig {
//!             color,
//!             ..WindowConfig::at(home)
//!         })
//!         .unwrap();
//! }
//!
//! assert_eq!(stage.open_count(), 4);
//! ```

pub mod error;
pub mod layout;
pub mod palette;
pub mod stage;

pub use error::{Result, StageError};
pub use stage::{Stage, StageWindow, WindowConfig, DEFAULT_SIZE};
