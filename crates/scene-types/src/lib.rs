//! Mesh record data model for scene2glb.
//!
//! This crate defines the record shape handed over by the external scene
//! traversal tool, and the validated form the converter consumes:
//!
//! - [`TraversalReport`] - The JSON document the traversal tool prints
//! - [`RawMeshRecord`] - One mesh entry as extracted, with optional fields
//! - [`MeshRecord`] - A usable record with validated topology
//!
//! # Record Shape
//!
//! The traversal tool walks the source scene graph and emits one entry per
//! mesh prim:
//!
//! ```json
//! {
//!   "success": true,
//!   "meshes": [
//!     {
//!       "name": "Cube",
//!       "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], ...],
//!       "faceVertexCounts": [4, 4, ...],
//!       "faceVertexIndices": [0, 1, 2, 3, ...],
//!       "normals": [[0.0, 0.0, 1.0], ...]
//!     }
//!   ],
//!   "meshCount": 1
//! }
//! ```
//!
//! `points` are per-point positions; `faceVertexIndices` is the flat index
//! stream consumed according to `faceVertexCounts`; `normals`, when present,
//! are per-face-vertex (one per entry of `faceVertexIndices`), not per-point.
//!
//! # Example
//!
//! ```
//! use scene_types::{ingest, RawMeshRecord};
//!
//! let raw: RawMeshRecord = serde_json::from_str(
//!     r#"{
//!         "name": "Tri",
//!         "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!         "faceVertexCounts": [3],
//!         "faceVertexIndices": [0, 1, 2]
//!     }"#,
//! )
//! .unwrap();
//!
//! let records = ingest(vec![raw]);
//! assert_eq!(records.len(), 1);
//! assert!(records[0].validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod record;
mod report;

pub use error::{RecordError, RecordResult};
pub use record::{ingest, MeshRecord, RawMeshRecord};
pub use report::TraversalReport;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
