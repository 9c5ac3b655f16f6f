//! Binary glTF (GLB) container encoding.
//!
//! This crate turns validated mesh records into a single self-contained
//! `.glb` byte sequence: polygon faces are fan-triangulated, geometry is
//! packed into a 4-byte-aligned binary arena, and a glTF 2.0 document
//! describing that arena is assembled around it.
//!
//! # Container Layout
//!
//! ```text
//! UINT32       – Magic 0x46546C67 ("glTF")
//! UINT32       – Container version (2)
//! UINT32       – Total container length in bytes
//! UINT32       – JSON chunk length (padded)
//! UINT32       – JSON chunk type 0x4E4F534A ("JSON")
//! UINT8[...]   – Minified JSON document, space-padded to 4 bytes
//! UINT32       – Binary chunk length (padded)
//! UINT32       – Binary chunk type 0x004E4942 ("BIN\0")
//! UINT8[...]   – Geometry buffer, zero-padded to 4 bytes
//! ```
//!
//! All integers are little-endian. The layout is a hard interoperability
//! contract: third-party viewers reject containers with a wrong magic,
//! chunk order, padding byte value, or alignment.
//!
//! # Example
//!
//! ```
//! use glb_export::convert;
//! use scene_types::{MeshRecord, Point3};
//!
//! let record = MeshRecord {
//!     name: "Tri".to_owned(),
//!     points: vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     face_vertex_counts: vec![3],
//!     face_vertex_indices: vec![0, 1, 2],
//!     normals: None,
//! };
//!
//! let conversion = convert(std::slice::from_ref(&record)).unwrap();
//! assert_eq!(&conversion.glb[0..4], b"glTF");
//! assert_eq!(conversion.summary.triangles, 1);
//! ```
//!
//! # Determinism
//!
//! Converting the same record sequence twice yields byte-identical output:
//! the document serializes with a fixed field order and carries no
//! timestamps or other environment-dependent state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod arena;
mod convert;
mod document;
mod error;
mod glb;
mod triangulate;

pub use arena::BinaryArena;
pub use convert::{convert, Conversion, ConversionSummary};
pub use document::{
    position_bounds, Accessor, Asset, Buffer, BufferView, Document, Mesh, Node, Primitive,
    PrimitiveAttributes, Scene, COMPONENT_FLOAT, COMPONENT_UNSIGNED_INT, TARGET_ARRAY_BUFFER,
    TARGET_ELEMENT_ARRAY_BUFFER, TYPE_SCALAR, TYPE_VEC3,
};
pub use error::{ExportError, ExportResult};
pub use glb::{encode_glb, CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, GLB_MAGIC, GLB_VERSION};
pub use triangulate::{triangulate, TriangulatedMesh};
