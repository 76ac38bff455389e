//! Regroups an array of per-country language records into a JSON object
//! keyed by each record's flag code.
//!
//! The work is a single read-transform-write pass:
//!
//! - `document`: reading the input array and rendering/writing the output object
//! - `regroup`: the pure array-to-mapping transformation
//! - `pipeline`: wires the steps together for one run
//! - `config`: file names and policies, loaded from the environment
//! - `error`: the error taxonomy shared by all of the above

pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod regroup;

pub use error::{ErrorKind, TransformError};
