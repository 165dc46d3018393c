//! Drives a traversal, emitting one frame per visited vertex.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::graph::{Graph, Layout};
use crate::render::ascii::Renderer;

/// Called after each frame is written.
///
/// The reference animation blocks the thread with [`SleepPacer`]; tests use
/// [`NoPause`] to run at full speed.
pub trait Pacer {
    fn pause(&mut self);
}

/// Blocks the current thread for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct SleepPacer(pub Duration);

impl Pacer for SleepPacer {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self) {}
}

/// Traverse `graph` from `config.start`, writing a frame to `out` after
/// every visit and pausing with `pacer`.
///
/// Returns the visitation order.
///
/// # Examples
///
/// ```
/// use ascii_dfs::animate::{animate, NoPause};
/// use ascii_dfs::config::Config;
/// use ascii_dfs::graph::{Graph, Layout};
///
/// let mut out = Vec::new();
/// let order = animate(
///     &Graph::reference(),
///     &Layout::reference(),
///     &Config::default(),
///     &mut out,
///     &mut NoPause,
/// )
/// .unwrap();
///
/// assert_eq!(order, vec![5, 1, 6, 4, 2, 3, 7]);
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 7 * 10);
/// ```
pub fn animate<W, P>(
    graph: &Graph,
    layout: &Layout,
    config: &Config,
    out: &mut W,
    pacer: &mut P,
) -> Result<Vec<usize>>
where
    W: Write,
    P: Pacer + ?Sized,
{
    let mut renderer = Renderer::new(graph, layout, config.height, config.width);
    info!(start = config.start, vertices = graph.len(), "starting traversal");

    let order = graph.try_dfs(config.start, |step| {
        renderer.render_to(step.visited, out)?;
        out.flush()?;
        debug!(vertex = step.vertex, "frame written");
        pacer.pause();
        Ok::<(), crate::error::Error>(())
    })?;

    info!(visited = order.len(), "traversal finished");
    Ok(order)
}
