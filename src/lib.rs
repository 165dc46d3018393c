//! # ascii-dfs
//!
//! Animated depth-first traversal of a small undirected graph, drawn as
//! ASCII art on a fixed-size character canvas.
//!
//! ## Pieces
//!
//! - [`graph`]: the adjacency lists, the screen layout, and the reference
//!   seven-vertex fixture
//! - [`traversal`]: iterative, stack-based DFS with a callback per visit
//! - [`render`]: the character canvas and the frame renderer
//! - [`animate`]: runs the traversal and writes a frame after each visit,
//!   pausing between frames
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_dfs::{Graph, Layout, Renderer, VisitedSet};
//!
//! let graph = Graph::reference();
//! let layout = Layout::reference();
//! let mut renderer = Renderer::new(&graph, &layout, 9, 25);
//!
//! let mut visited = VisitedSet::new();
//! for id in graph.dfs_order(5) {
//!     visited.insert(id);
//!     print!("{}", renderer.render(&visited));
//! }
//! ```
//!
//! A frame for the untouched reference graph looks like this:
//!
//! ```text
//!               [3]
//!                |
//!          [4]--[2]
//!           |    |
//!     [1]---|---[5]
//!       \   |
//!        \  |
//!          [6]--[7]
//! ```

use std::time::Duration;

pub mod animate;
pub mod config;
pub mod error;
pub mod graph;
pub mod render;
pub mod traversal;

pub use animate::{NoPause, Pacer, SleepPacer, animate};
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{Graph, Layout, Point};
pub use render::ascii::{Renderer, VisitedSet};
pub use render::canvas::Canvas;
pub use traversal::{Step, dfs_fn, try_dfs_fn};

/// Vertex the reference animation starts from.
pub const REFERENCE_START: usize = 5;

/// Pause between frames in the reference animation.
pub const REFERENCE_DELAY: Duration = Duration::from_millis(3000);
