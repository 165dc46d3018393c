//! ASCII rendering of graph traversal state.
//!
//! [`canvas`] is the fixed-size character grid; [`ascii`] paints vertex
//! labels and connectors onto it and turns it into text frames.

pub mod ascii;
pub mod canvas;
