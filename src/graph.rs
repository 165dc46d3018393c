//! Undirected graph model and its fixed screen layout.
//!
//! This module holds the static data the traversal and the renderer read:
//!
//! - [`Graph`]: vertex id → ordered adjacency list (stored in both directions)
//! - [`Layout`]: vertex id → [`Point`] on the canvas, plus per-vertex
//!   rendering exceptions
//!
//! Both are built once and never mutated afterwards. Neither constructor
//! checks the data; [`Graph::validate`] is available for hand-authored
//! fixtures.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// Width of a rendered vertex label such as `[5]` or `[*]`.
pub const LABEL_WIDTH: usize = 3;

/// An undirected graph stored as symmetric adjacency lists.
///
/// Vertex ids iterate in ascending order. Each adjacency list keeps the
/// order it was authored in, which is the order the traversal visits
/// neighbors.
///
/// # Examples
///
/// ```
/// use ascii_dfs::graph::Graph;
///
/// let graph = Graph::from_adjacency(&[(1, &[2]), (2, &[1, 3]), (3, &[2])]);
///
/// assert_eq!(graph.neighbors(2), &[1, 3]);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<usize, Vec<usize>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(vertex, neighbors)` pairs.
    ///
    /// A later entry for the same vertex replaces the earlier one.
    pub fn from_adjacency(entries: &[(usize, &[usize])]) -> Self {
        let adjacency = entries
            .iter()
            .map(|&(id, neighbors)| (id, neighbors.to_vec()))
            .collect();
        Self { adjacency }
    }

    /// The seven-vertex graph the animation runs on.
    ///
    /// ```text
    /// 1: 5 6      5: 1 2 4
    /// 2: 3 4 5    6: 1 4 7
    /// 3: 2        7: 6
    /// 4: 2 5 6
    /// ```
    pub fn reference() -> Self {
        Self::from_adjacency(&[
            (1, &[5, 6]),
            (2, &[3, 4, 5]),
            (3, &[2]),
            (4, &[2, 5, 6]),
            (5, &[1, 2, 4]),
            (6, &[1, 4, 7]),
            (7, &[6]),
        ])
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// Ordered neighbors of `id`; empty for an id the graph does not know.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every undirected edge once, as `(u, v)` with `u < v`.
    ///
    /// Ordered by `u` ascending, then by `u`'s adjacency order. The renderer
    /// draws edges in exactly this order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().flat_map(|(&from, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&to| from < to)
                .map(move |to| (from, to))
        })
    }

    /// Check the fixture against the model's invariants.
    ///
    /// Reports the first problem found: an unknown neighbor, a one-sided
    /// edge, a self loop, a vertex without a position, or a label that the
    /// `height` x `width` canvas would clip.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_dfs::graph::{Graph, Layout};
    ///
    /// let graph = Graph::reference();
    /// assert!(graph.validate(&Layout::reference(), 9, 25).is_ok());
    ///
    /// let broken = Graph::from_adjacency(&[(1, &[2]), (2, &[])]);
    /// assert!(broken.validate(&Layout::reference(), 9, 25).is_err());
    /// ```
    pub fn validate(&self, layout: &Layout, height: usize, width: usize) -> Result<()> {
        for (&from, neighbors) in &self.adjacency {
            for &to in neighbors {
                if to == from {
                    return Err(Error::SelfLoop(from));
                }
                if !self.contains(to) {
                    return Err(Error::UnknownVertex { from, to });
                }
                if !self.neighbors(to).contains(&from) {
                    return Err(Error::AsymmetricEdge { from, to });
                }
            }

            let point = layout.position(from).ok_or(Error::MissingPosition(from))?;
            if point.row >= height || point.col + LABEL_WIDTH > width {
                return Err(Error::LabelOutOfBounds {
                    id: from,
                    row: point.row,
                    col: point.col,
                    height,
                    width,
                });
            }
        }
        Ok(())
    }
}

/// A canvas cell, addressed row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Where each vertex label sits on the canvas.
///
/// A position marks the left bracket of the 3-character label. The layout
/// also carries the set of vertices whose diagonal edges are not drawn: the
/// generic diagonal ray does not line up with every label placement, so a
/// layout lists the ones it gets wrong instead of the renderer guessing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    positions: BTreeMap<usize, Point>,
    diagonal_exclusions: BTreeSet<usize>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from `(vertex, (row, col))` pairs.
    pub fn from_positions(entries: &[(usize, (usize, usize))]) -> Self {
        let positions = entries
            .iter()
            .map(|&(id, (row, col))| (id, Point::new(row, col)))
            .collect();
        Self {
            positions,
            diagonal_exclusions: BTreeSet::new(),
        }
    }

    /// Placement for [`Graph::reference`] on a 9x25 canvas.
    ///
    /// Vertex 4 sits one label-width left of vertex 2 and above vertex 6;
    /// its diagonal to vertex 5 is suppressed.
    pub fn reference() -> Self {
        Self::from_positions(&[
            (1, (4, 4)),
            (2, (2, 14)),
            (3, (0, 14)),
            (4, (2, 9)),
            (5, (4, 14)),
            (6, (7, 9)),
            (7, (7, 14)),
        ])
        .with_diagonal_exclusion(4)
    }

    /// Suppress every diagonal connector touching `id`.
    pub fn with_diagonal_exclusion(mut self, id: usize) -> Self {
        self.diagonal_exclusions.insert(id);
        self
    }

    pub fn position(&self, id: usize) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Whether a diagonal between `from` and `to` should be skipped.
    pub fn skips_diagonal(&self, from: usize, to: usize) -> bool {
        self.diagonal_exclusions.contains(&from) || self.diagonal_exclusions.contains(&to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_symmetric_and_closed() {
        let graph = Graph::reference();
        assert_eq!(graph.len(), 7);

        for id in graph.vertices() {
            for &n in graph.neighbors(id) {
                assert!(graph.contains(n), "{n} missing");
                assert!(graph.neighbors(n).contains(&id), "{id}-{n} one sided");
            }
        }
    }

    #[test]
    fn test_edges_once_in_draw_order() {
        let graph = Graph::reference();
        let edges: Vec<_> = graph.edges().collect();

        assert_eq!(
            edges,
            vec![
                (1, 5),
                (1, 6),
                (2, 3),
                (2, 4),
                (2, 5),
                (4, 5),
                (4, 6),
                (6, 7)
            ]
        );
    }

    #[test]
    fn test_neighbors_of_unknown_vertex() {
        let graph = Graph::reference();
        assert!(graph.neighbors(42).is_empty());
        assert!(!graph.contains(42));
    }

    #[test]
    fn test_reference_validates() {
        let graph = Graph::reference();
        assert!(graph.validate(&Layout::reference(), 9, 25).is_ok());
    }

    #[test]
    fn test_validate_reports_problems() {
        let layout = Layout::reference();

        let self_loop = Graph::from_adjacency(&[(1, &[1])]);
        assert!(matches!(
            self_loop.validate(&layout, 9, 25),
            Err(Error::SelfLoop(1))
        ));

        let unknown = Graph::from_adjacency(&[(1, &[9])]);
        assert!(matches!(
            unknown.validate(&layout, 9, 25),
            Err(Error::UnknownVertex { from: 1, to: 9 })
        ));

        let one_sided = Graph::from_adjacency(&[(1, &[2]), (2, &[])]);
        assert!(matches!(
            one_sided.validate(&layout, 9, 25),
            Err(Error::AsymmetricEdge { from: 1, to: 2 })
        ));

        let unplaced = Graph::from_adjacency(&[(8, &[])]);
        assert!(matches!(
            unplaced.validate(&layout, 9, 25),
            Err(Error::MissingPosition(8))
        ));

        // [2] at column 14 needs 17 columns
        let graph = Graph::reference();
        assert!(matches!(
            graph.validate(&layout, 9, 16),
            Err(Error::LabelOutOfBounds { id: 2, .. })
        ));
    }

    #[test]
    fn test_diagonal_exclusion() {
        let layout = Layout::reference();
        assert!(layout.skips_diagonal(4, 5));
        assert!(layout.skips_diagonal(2, 4));
        assert!(!layout.skips_diagonal(1, 6));

        let plain = Layout::from_positions(&[(1, (0, 0))]);
        assert!(!plain.skips_diagonal(4, 5));
    }

    #[test]
    fn test_positions() {
        let layout = Layout::reference();
        assert_eq!(layout.position(3), Some(Point::new(0, 14)));
        assert_eq!(layout.position(8), None);
    }
}
