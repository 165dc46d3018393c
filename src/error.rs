//! Error type shared by the graph model, renderer and animation loop.

use std::io;

/// Errors reported by fixture validation and frame output.
///
/// The reference fixture never produces the validation variants; they exist
/// for hand-authored graphs that break the model's invariants.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A neighbor id that is not a key of the adjacency map.
    #[error("vertex {from} lists unknown neighbor {to}")]
    UnknownVertex { from: usize, to: usize },

    /// `to` appears in `from`'s adjacency list but not the other way round.
    #[error("edge {from} -> {to} has no reverse entry")]
    AsymmetricEdge { from: usize, to: usize },

    #[error("vertex {0} lists itself as a neighbor")]
    SelfLoop(usize),

    #[error("vertex {0} has no layout position")]
    MissingPosition(usize),

    /// The 3-character label would be clipped by the canvas edge.
    #[error("label of vertex {id} at ({row}, {col}) does not fit a {height}x{width} canvas")]
    LabelOutOfBounds {
        id: usize,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("failed to write frame")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_vertices() {
        let err = Error::AsymmetricEdge { from: 2, to: 7 };
        assert_eq!(err.to_string(), "edge 2 -> 7 has no reverse entry");

        let err = Error::LabelOutOfBounds {
            id: 3,
            row: 0,
            col: 23,
            height: 9,
            width: 25,
        };
        assert!(err.to_string().contains("9x25"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
