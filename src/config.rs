//! Run configuration.

use std::time::Duration;

use crate::{REFERENCE_DELAY, REFERENCE_START};

/// Canvas height in rows.
pub const CANVAS_HEIGHT: usize = 9;
/// Canvas width in columns.
pub const CANVAS_WIDTH: usize = 25;

/// Settings for one animated traversal.
///
/// `Config::default()` reproduces the reference run: start at vertex 5,
/// pause three seconds per frame, draw on a 9x25 canvas.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ascii_dfs::config::Config;
///
/// let config = Config::default().with_delay(Duration::ZERO);
/// assert_eq!(config.start, 5);
/// assert_eq!((config.height, config.width), (9, 25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub start: usize,
    /// Pause after each frame.
    pub delay: Duration,
    pub height: usize,
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: REFERENCE_START,
            delay: REFERENCE_DELAY,
            height: CANVAS_HEIGHT,
            width: CANVAS_WIDTH,
        }
    }
}

impl Config {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_run() {
        let config = Config::default();
        assert_eq!(config.start, 5);
        assert_eq!(config.delay, Duration::from_millis(3000));
        assert_eq!(config.height, 9);
        assert_eq!(config.width, 25);
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_start(1)
            .with_delay(Duration::from_millis(10));
        assert_eq!(config.start, 1);
        assert_eq!(config.delay, Duration::from_millis(10));
    }
}
