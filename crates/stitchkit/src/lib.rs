//! # stitchkit
//!
//! Core 2D geometry kernel and path-command interpreter for embroidery
//! design tooling.
//!
//! Everything here is pure data transformation over value types: no
//! rendering, no file I/O, no shared mutable state. Stitch-format
//! conversion is delegated to an external engine; the CLI crate invokes it.

pub mod path;
pub mod pen;
pub mod snap;
pub mod vector;

// Re-export common types at crate root for convenience.
pub use path::{path_from_command, Path, PathCommandError, PathOp};
pub use pen::{CapStyle, JoinStyle, LineStyle, Pen};
pub use snap::{closest_index, closest_vector, SnapError};
pub use vector::{ParseVectorError, Vector};
