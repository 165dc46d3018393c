//! Iterative depth-first traversal with a per-visit callback.
//!
//! The traversal keeps an explicit stack instead of recursing. When a vertex
//! is visited its unvisited neighbors are pushed in reverse adjacency order,
//! so they pop in forward order and the visitation order follows the order
//! neighbors were listed.
//!
//! ```
//! use ascii_dfs::traversal::dfs_fn;
//!
//! let neighbors = |id: &u32| -> Vec<u32> {
//!     match id {
//!         1 => vec![2, 3],
//!         2 => vec![1, 4],
//!         3 => vec![1],
//!         4 => vec![2],
//!         _ => vec![],
//!     }
//! };
//!
//! let order = dfs_fn(1, neighbors, |_| {});
//! assert_eq!(order, vec![1, 2, 4, 3]);
//! ```
//!
//! Callers that render or sleep between steps do it from the callback; the
//! traversal itself never blocks.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt::Debug;

use tracing::debug;

use crate::graph::Graph;

/// One visitation, handed to the callback right after `vertex` is marked.
#[derive(Debug)]
pub struct Step<'a, Id> {
    pub vertex: Id,
    /// Zero-based position of `vertex` in the visitation order.
    pub index: usize,
    /// Every vertex visited so far, `vertex` included.
    pub visited: &'a BTreeSet<Id>,
}

/// Depth-first traversal over any graph described by a neighbor function.
///
/// Returns the visitation order. Vertices not reachable from `start` are
/// never visited.
pub fn dfs_fn<Id, N, V>(start: Id, get_neighbors: N, mut on_visit: V) -> Vec<Id>
where
    Id: Ord + Clone + Debug,
    N: Fn(&Id) -> Vec<Id>,
    V: FnMut(Step<'_, Id>),
{
    let result = try_dfs_fn(start, get_neighbors, |step| {
        on_visit(step);
        Ok::<(), Infallible>(())
    });
    match result {
        Ok(order) => order,
        Err(never) => match never {},
    }
}

/// Like [`dfs_fn`], but stops at the first error the callback returns.
///
/// # Examples
///
/// ```
/// use ascii_dfs::traversal::try_dfs_fn;
///
/// let neighbors = |id: &u32| if *id < 5 { vec![id + 1] } else { vec![] };
///
/// let result = try_dfs_fn(1, neighbors, |step| {
///     if step.vertex == 3 { Err("stop") } else { Ok(()) }
/// });
/// assert_eq!(result, Err("stop"));
/// ```
pub fn try_dfs_fn<Id, N, V, E>(start: Id, get_neighbors: N, mut on_visit: V) -> Result<Vec<Id>, E>
where
    Id: Ord + Clone + Debug,
    N: Fn(&Id) -> Vec<Id>,
    V: FnMut(Step<'_, Id>) -> Result<(), E>,
{
    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    let mut frontier = vec![start];

    while let Some(current) = frontier.pop() {
        if visited.contains(&current) {
            continue;
        }

        visited.insert(current.clone());
        order.push(current.clone());
        debug!(vertex = ?current, step = order.len() - 1, "visit");

        on_visit(Step {
            vertex: current.clone(),
            index: order.len() - 1,
            visited: &visited,
        })?;

        // Reverse push so the first-listed neighbor is popped first
        for neighbor in get_neighbors(&current).into_iter().rev() {
            if !visited.contains(&neighbor) {
                frontier.push(neighbor);
            }
        }
    }

    Ok(order)
}

impl Graph {
    /// Depth-first traversal from `start`, calling `on_visit` after each
    /// vertex is marked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_dfs::graph::Graph;
    ///
    /// let graph = Graph::reference();
    /// let mut sizes = Vec::new();
    /// let order = graph.dfs(5, |step| sizes.push(step.visited.len()));
    ///
    /// assert_eq!(order, vec![5, 1, 6, 4, 2, 3, 7]);
    /// assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn dfs<V>(&self, start: usize, on_visit: V) -> Vec<usize>
    where
        V: FnMut(Step<'_, usize>),
    {
        dfs_fn(start, |id| self.neighbors(*id).to_vec(), on_visit)
    }

    /// Fallible form of [`dfs`](Self::dfs).
    pub fn try_dfs<V, E>(&self, start: usize, on_visit: V) -> Result<Vec<usize>, E>
    where
        V: FnMut(Step<'_, usize>) -> Result<(), E>,
    {
        try_dfs_fn(start, |id| self.neighbors(*id).to_vec(), on_visit)
    }

    /// Visitation order from `start` with no callback.
    pub fn dfs_order(&self, start: usize) -> Vec<usize> {
        self.dfs(start, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_order_from_five() {
        let graph = Graph::reference();
        assert_eq!(graph.dfs_order(5), vec![5, 1, 6, 4, 2, 3, 7]);
    }

    #[test]
    fn test_reference_order_from_other_starts() {
        let graph = Graph::reference();
        // 1 -> 5 -> 2 -> 3, back to 2 -> 4 -> 6 -> 7
        assert_eq!(graph.dfs_order(1), vec![1, 5, 2, 3, 4, 6, 7]);
        assert_eq!(graph.dfs_order(7), vec![7, 6, 1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_deterministic() {
        let graph = Graph::reference();
        assert_eq!(graph.dfs_order(5), graph.dfs_order(5));
    }

    #[test]
    fn test_visited_set_grows_by_one() {
        let graph = Graph::reference();
        let mut snapshots: Vec<BTreeSet<usize>> = Vec::new();
        graph.dfs(5, |step| {
            assert_eq!(step.index, snapshots.len());
            assert!(step.visited.contains(&step.vertex));
            snapshots.push(step.visited.clone());
        });

        assert_eq!(snapshots.len(), 7);
        for pair in snapshots.windows(2) {
            assert!(pair[0].is_subset(&pair[1]));
            assert_eq!(pair[1].len(), pair[0].len() + 1);
        }
    }

    #[test]
    fn test_unreachable_vertices_skipped() {
        let graph = Graph::from_adjacency(&[(1, &[2]), (2, &[1]), (3, &[4]), (4, &[3])]);
        assert_eq!(graph.dfs_order(1), vec![1, 2]);
        assert_eq!(graph.dfs_order(4), vec![4, 3]);
    }

    #[test]
    fn test_unknown_start_visits_only_itself() {
        let graph = Graph::reference();
        assert_eq!(graph.dfs_order(9), vec![9]);
    }

    #[test]
    fn test_callback_error_stops_traversal() {
        let graph = Graph::reference();
        let mut seen = Vec::new();
        let result = graph.try_dfs(5, |step| {
            seen.push(step.vertex);
            if step.vertex == 6 { Err(step.index) } else { Ok(()) }
        });

        assert_eq!(result, Err(2));
        assert_eq!(seen, vec![5, 1, 6]);
    }

    #[test]
    fn test_generic_ids() {
        let neighbors = |id: &char| -> Vec<char> {
            match id {
                'a' => vec!['b', 'c'],
                'b' | 'c' => vec!['a'],
                _ => vec![],
            }
        };
        assert_eq!(dfs_fn('a', neighbors, |_| {}), vec!['a', 'b', 'c']);
    }
}
