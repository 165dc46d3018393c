//! Draws graph state onto a [`Canvas`] and emits frames.

use std::collections::BTreeSet;
use std::io;

use tracing::debug;

use crate::graph::{Graph, LABEL_WIDTH, Layout, Point};
use crate::render::canvas::Canvas;

// Connector characters
pub(crate) const H_LINE: char = '-';
pub(crate) const V_LINE: char = '|';
pub(crate) const DIAG_DOWN: char = '\\'; // row and column move the same way
pub(crate) const DIAG_UP: char = '/';

/// Label for a vertex already on the visited set.
pub const VISITED_LABEL: &str = "[*]";

/// Vertex ids processed so far.
pub type VisitedSet = BTreeSet<usize>;

/// Label for vertex `id`: `[*]` once visited, `[id]` otherwise, always
/// exactly [`LABEL_WIDTH`] characters (multi-digit ids are cut short).
///
/// # Examples
///
/// ```
/// use ascii_dfs::render::ascii::vertex_label;
///
/// assert_eq!(vertex_label(3, false), "[3]");
/// assert_eq!(vertex_label(3, true), "[*]");
/// ```
pub fn vertex_label(id: usize, visited: bool) -> String {
    if visited {
        return VISITED_LABEL.to_string();
    }
    format!("[{id}]").chars().take(LABEL_WIDTH).collect()
}

/// Renders a graph and its layout onto a reusable canvas.
///
/// The canvas is owned by the renderer and wiped at the start of every
/// frame; the graph and layout are borrowed read-only.
///
/// # Examples
///
/// ```
/// use ascii_dfs::graph::{Graph, Layout};
/// use ascii_dfs::render::ascii::{Renderer, VisitedSet};
///
/// let graph = Graph::reference();
/// let layout = Layout::reference();
/// let mut renderer = Renderer::new(&graph, &layout, 9, 25);
///
/// let visited: VisitedSet = [5].into_iter().collect();
/// let frame = renderer.render(&visited);
///
/// assert!(frame.contains("[1]---|---[*]"));
/// assert!(frame.ends_with("\n\n"));
/// ```
pub struct Renderer<'g> {
    graph: &'g Graph,
    layout: &'g Layout,
    canvas: Canvas,
}

impl<'g> Renderer<'g> {
    pub fn new(graph: &'g Graph, layout: &'g Layout, height: usize, width: usize) -> Self {
        Self {
            graph,
            layout,
            canvas: Canvas::new(height, width),
        }
    }

    /// Canvas as left by the last [`draw`](Self::draw).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Repaint the canvas for `visited`: clear, labels, then connectors.
    pub fn draw(&mut self, visited: &VisitedSet) {
        self.canvas.clear();

        for id in self.graph.vertices() {
            if let Some(point) = self.layout.position(id) {
                let label = vertex_label(id, visited.contains(&id));
                self.canvas
                    .put_str(point.row as isize, point.col as isize, &label);
            }
        }

        for (from, to) in self.graph.edges() {
            self.draw_edge(from, to);
        }

        debug!(visited = visited.len(), "frame drawn");
    }

    /// Draw the frame and return it: canvas rows, then one blank line.
    pub fn render(&mut self, visited: &VisitedSet) -> String {
        self.draw(visited);
        let mut frame = self.canvas.to_string();
        frame.push('\n');
        frame
    }

    /// Same bytes as [`render`](Self::render), written to `out`.
    pub fn render_to<W: io::Write>(&mut self, visited: &VisitedSet, out: &mut W) -> io::Result<()> {
        self.draw(visited);
        write!(out, "{}", self.canvas)?;
        writeln!(out)
    }

    fn draw_edge(&mut self, from: usize, to: usize) {
        // Unplaced endpoints have nothing to connect
        let (Some(a), Some(b)) = (self.layout.position(from), self.layout.position(to)) else {
            return;
        };

        if a.row == b.row {
            let row = a.row as isize;
            let start = a.col.min(b.col) + LABEL_WIDTH;
            for col in start..a.col.max(b.col) {
                self.canvas.put(row, col as isize, H_LINE);
            }
        } else if a.col == b.col {
            // Centre column of the label
            let col = (a.col + 1) as isize;
            for row in a.row.min(b.row) + 1..a.row.max(b.row) {
                self.canvas.put(row as isize, col, V_LINE);
            }
        } else if !self.layout.skips_diagonal(from, to) {
            self.draw_diagonal(a, b);
        }
    }

    /// Walk a 45° ray from just below and right of `a` towards `b`, stopping
    /// as soon as it reaches `b`'s row or column.
    fn draw_diagonal(&mut self, a: Point, b: Point) {
        let (y2, x2) = (b.row as isize, b.col as isize);
        let dy: isize = if b.row > a.row { 1 } else { -1 };
        let dx: isize = if b.col > a.col { 1 } else { -1 };
        let ch = if dy == dx { DIAG_DOWN } else { DIAG_UP };

        let mut y = a.row as isize + 1;
        let mut x = a.col as isize + 2;
        // y always reaches y2: rows differ and the ray heads towards b
        while y != y2 && x != x2 {
            self.canvas.put(y, x, ch);
            y += dy;
            x += dx;
        }
    }
}
