//! Raw and validated mesh records.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// One mesh entry exactly as the scene traversal tool extracted it.
///
/// Attributes the source prim did not author arrive as `None`. A raw record
/// is only usable when it carries both points and face vertex indices; see
/// [`RawMeshRecord::is_usable`] and [`ingest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeshRecord {
    /// Prim name from the source scene graph.
    pub name: String,

    /// Per-point positions.
    #[serde(default)]
    pub points: Option<Vec<Point3<f32>>>,

    /// Vertex count of each face, in face order.
    #[serde(default)]
    pub face_vertex_counts: Vec<u32>,

    /// Flat index stream, consumed according to `face_vertex_counts`.
    #[serde(default)]
    pub face_vertex_indices: Option<Vec<u32>>,

    /// Per-face-vertex normals (one per face vertex index), if authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normals: Option<Vec<Vector3<f32>>>,
}

impl RawMeshRecord {
    /// Check whether this record carries enough geometry to convert.
    ///
    /// A record without points or without face vertex indices describes no
    /// renderable surface and is dropped during ingestion.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.points.as_ref().is_some_and(|p| !p.is_empty())
            && self
                .face_vertex_indices
                .as_ref()
                .is_some_and(|i| !i.is_empty())
    }

    /// Convert into a [`MeshRecord`], or `None` if the record is unusable.
    #[must_use]
    pub fn into_mesh_record(self) -> Option<MeshRecord> {
        if !self.is_usable() {
            return None;
        }
        Some(MeshRecord {
            name: self.name,
            points: self.points?,
            face_vertex_counts: self.face_vertex_counts,
            face_vertex_indices: self.face_vertex_indices?,
            normals: self.normals,
        })
    }
}

/// A mesh record with all mandatory geometry present.
///
/// Construction via [`ingest`] guarantees `points` and
/// `face_vertex_indices` are non-empty; [`MeshRecord::validate`] checks the
/// topology invariants on top of that.
#[derive(Debug, Clone)]
pub struct MeshRecord {
    /// Prim name from the source scene graph.
    pub name: String,

    /// Per-point positions.
    pub points: Vec<Point3<f32>>,

    /// Vertex count of each face, in face order.
    pub face_vertex_counts: Vec<u32>,

    /// Flat index stream, consumed according to `face_vertex_counts`.
    pub face_vertex_indices: Vec<u32>,

    /// Per-face-vertex normals (one per face vertex index), if authored.
    pub normals: Option<Vec<Vector3<f32>>>,
}

impl MeshRecord {
    /// Check the record's topology invariants.
    ///
    /// # Errors
    ///
    /// - [`RecordError::IndexCountMismatch`] when the face vertex counts do
    ///   not sum to the length of the index stream.
    /// - [`RecordError::IndexOutOfBounds`] when an index points past the end
    ///   of the point array.
    pub fn validate(&self) -> RecordResult<()> {
        let expected: u64 = self.face_vertex_counts.iter().map(|&c| u64::from(c)).sum();
        if expected != self.face_vertex_indices.len() as u64 {
            return Err(RecordError::IndexCountMismatch {
                name: self.name.clone(),
                expected,
                got: self.face_vertex_indices.len(),
            });
        }

        let point_count = self.points.len();
        for &index in &self.face_vertex_indices {
            if index as usize >= point_count {
                return Err(RecordError::IndexOutOfBounds {
                    name: self.name.clone(),
                    index,
                    point_count,
                });
            }
        }

        Ok(())
    }

    /// Number of points in the mesh.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of polygon faces in the mesh.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.face_vertex_counts.len()
    }
}

/// Filter a batch of raw records down to the usable ones, preserving order.
///
/// Records without points or face vertex indices are dropped, matching the
/// traversal tool's own notion of a convertible mesh.
///
/// # Example
///
/// ```
/// use scene_types::{ingest, Point3, RawMeshRecord};
///
/// let usable = RawMeshRecord {
///     name: "Tri".to_owned(),
///     points: Some(vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ]),
///     face_vertex_counts: vec![3],
///     face_vertex_indices: Some(vec![0, 1, 2]),
///     normals: None,
/// };
/// let empty = RawMeshRecord {
///     name: "Empty".to_owned(),
///     points: None,
///     face_vertex_counts: Vec::new(),
///     face_vertex_indices: None,
///     normals: None,
/// };
///
/// let records = ingest(vec![usable, empty]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "Tri");
/// ```
#[must_use]
pub fn ingest(raw: Vec<RawMeshRecord>) -> Vec<MeshRecord> {
    raw.into_iter()
        .filter_map(RawMeshRecord::into_mesh_record)
        .collect()
}
