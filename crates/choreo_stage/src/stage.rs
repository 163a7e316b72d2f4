//! In-memory window backend
//!
//! [`Stage`] stands in for the host windowing system: it spawns
//! [`StageWindow`]s from a [`WindowConfig`], hands out shared handles, and
//! enforces an optional cap on simultaneously open windows (the popup
//! blocker of a real browser, as a typed error instead of a null window).
//! Windows count every move and close request they receive, so tests and
//! demos can observe exactly what an animation did to them.

use crate::error::{Result, StageError};
use choreo_core::{Color, Point, Size, Target};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Default edge length for spawned windows, in pixels.
pub const DEFAULT_SIZE: f64 = 150.0;

fn default_size() -> f64 {
    DEFAULT_SIZE
}

fn default_origin() -> f64 {
    100.0
}

fn default_title() -> String {
    "Window".to_string()
}

/// How to spawn one window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    #[serde(default = "default_size")]
    pub width: f64,
    /// Window height in pixels
    #[serde(default = "default_size")]
    pub height: f64,
    /// Initial x position of the window's center
    #[serde(default = "default_origin")]
    pub x: f64,
    /// Initial y position of the window's center
    #[serde(default = "default_origin")]
    pub y: f64,
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Background color
    #[serde(default)]
    pub color: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            x: default_origin(),
            y: default_origin(),
            title: default_title(),
            color: Color::WHITE,
        }
    }
}

impl WindowConfig {
    /// Default-sized window centered at `position`.
    pub fn at(position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One spawned window.
///
/// Handles are shared: the stage keeps one and callers hold the rest, so a
/// window outlives whichever side lets go first. All mutation goes through
/// [`Target`], which is how animations move and close windows without
/// knowing they are in-memory stand-ins.
#[derive(Debug)]
pub struct StageWindow {
    id: u64,
    title: String,
    color: Color,
    size: Size,
    position: Mutex<Point>,
    closed: AtomicBool,
    moves: AtomicUsize,
    close_requests: AtomicUsize,
}

impl StageWindow {
    fn new(id: u64, config: WindowConfig) -> Self {
        Self {
            id,
            position: Mutex::new(config.position()),
            size: config.size(),
            title: config.title,
            color: config.color,
            closed: AtomicBool::new(false),
            moves: AtomicUsize::new(0),
            close_requests: AtomicUsize::new(0),
        }
    }

    /// Stage-assigned identifier, unique per stage.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Where the window currently sits.
    pub fn position(&self) -> Point {
        *self.position.lock().unwrap()
    }

    /// How many repositions have landed. Moves after closure do not count.
    pub fn move_count(&self) -> usize {
        self.moves.load(Ordering::SeqCst)
    }

    /// How many closure requests have been received. Only the first one
    /// changes anything; the rest record that a caller asked again.
    pub fn close_requests(&self) -> usize {
        self.close_requests.load(Ordering::SeqCst)
    }
}

impl Target for StageWindow {
    fn move_to(&self, position: Point) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        *self.position.lock().unwrap() = position;
        self.moves.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) {
        self.close_requests.fetch_add(1, Ordering::SeqCst);
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!("window #{} \"{}\" closed", self.id, self.title);
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// The in-memory window system.
pub struct Stage {
    screen: Size,
    limit: Option<usize>,
    next_id: u64,
    windows: Vec<Arc<StageWindow>>,
}

impl Stage {
    /// Stage with no window limit on a screen of the given size.
    pub fn new(screen: Size) -> Self {
        Self {
            screen,
            limit: None,
            next_id: 0,
            windows: Vec::new(),
        }
    }

    /// Stage that refuses to spawn past `limit` simultaneously open
    /// windows. Closed windows free their slot.
    pub fn with_limit(screen: Size, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(screen)
        }
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Spawn one window.
    ///
    /// Fails with [`StageError::InvalidConfig`] on degenerate dimensions
    /// and [`StageError::LimitExceeded`] once the open-window limit is
    /// reached.
    pub fn spawn(&mut self, config: WindowConfig) -> Result<Arc<StageWindow>> {
        if !config.width.is_finite()
            || !config.height.is_finite()
            || config.width <= 0.0
            || config.height <= 0.0
        {
            return Err(StageError::InvalidConfig(format!(
                "dimensions must be positive, got {}x{}",
                config.width, config.height
            )));
        }
        if let Some(limit) = self.limit {
            if self.open_count() >= limit {
                return Err(StageError::LimitExceeded(limit));
            }
        }
        self.next_id += 1;
        tracing::debug!(
            "window #{} \"{}\" spawned at ({}, {}), {}x{}",
            self.next_id,
            config.title,
            config.x,
            config.y,
            config.width,
            config.height
        );
        let window = Arc::new(StageWindow::new(self.next_id, config));
        self.windows.push(Arc::clone(&window));
        Ok(window)
    }

    /// Spawn a batch of windows, stopping at the first failure.
    pub fn spawn_batch(
        &mut self,
        configs: impl IntoIterator<Item = WindowConfig>,
    ) -> Result<Vec<Arc<StageWindow>>> {
        configs.into_iter().map(|config| self.spawn(config)).collect()
    }

    /// Every window ever spawned, open or closed, in spawn order.
    pub fn windows(&self) -> &[Arc<StageWindow>] {
        &self.windows
    }

    /// Windows not yet closed.
    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|w| !w.is_closed()).count()
    }

    /// Close every still-open window.
    pub fn close_all(&self) {
        for window in &self.windows {
            if !window.is_closed() {
                window.close();
            }
        }
    }
}
