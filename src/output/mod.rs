//! Output layer.
//!
//! Persists rendered text to the requested output file.

mod writer;

pub use writer::{WriteError, WriteReport, write_output};
