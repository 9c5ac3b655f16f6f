//! The mesh-records-to-container conversion pass.

use nalgebra::{Point3, Vector3};
use scene_types::MeshRecord;

use crate::arena::BinaryArena;
use crate::document::{
    position_bounds, Accessor, Buffer, BufferView, Document, Mesh, Node, Primitive,
    PrimitiveAttributes, Scene, COMPONENT_FLOAT, COMPONENT_UNSIGNED_INT, TARGET_ARRAY_BUFFER,
    TARGET_ELEMENT_ARRAY_BUFFER, TYPE_SCALAR, TYPE_VEC3,
};
use crate::error::{ExportError, ExportResult};
use crate::glb::encode_glb;
use crate::triangulate::{triangulate, TriangulatedMesh};

/// A finished conversion: the container bytes plus summary counts.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The complete GLB container.
    pub glb: Vec<u8>,

    /// Counts over all converted meshes.
    pub summary: ConversionSummary,
}

/// Counts reported alongside a successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    /// Number of meshes converted.
    pub meshes: usize,

    /// Total points across all meshes.
    pub vertices: usize,

    /// Total input polygon faces across all meshes.
    pub faces: usize,

    /// Total triangles emitted after fan triangulation.
    pub triangles: usize,
}

/// Convert an ordered sequence of mesh records into a GLB container.
///
/// Meshes are processed strictly in input order; for each record the
/// position block, index block and optional normal block are appended to
/// the arena in that fixed order, with the document's accessor and
/// buffer-view entries created in lock-step so every index stays
/// positionally consistent. Node indices equal mesh indices, and the single
/// scene lists all nodes in creation order.
///
/// Per-face-vertex normals survive only when the triangulated normal count
/// matches the mesh's point count; otherwise the mesh is emitted without a
/// `NORMAL` attribute and a warning is logged.
///
/// # Errors
///
/// - [`ExportError::NoMeshData`] when `records` is empty; nothing is built.
/// - [`ExportError::Record`] when a record fails its topology invariants;
///   raised before any triangulation.
/// - [`ExportError::Json`] if document serialization fails (not expected
///   for documents built here).
pub fn convert(records: &[MeshRecord]) -> ExportResult<Conversion> {
    if records.is_empty() {
        return Err(ExportError::NoMeshData);
    }
    for record in records {
        record.validate()?;
    }

    let mut document = Document::new();
    let mut arena = BinaryArena::new();
    let mut summary = ConversionSummary::default();

    for record in records {
        let tri = triangulate(
            &record.face_vertex_counts,
            &record.face_vertex_indices,
            record.normals.as_deref(),
        );

        add_mesh(&mut document, &mut arena, record, &tri);

        summary.meshes += 1;
        summary.vertices += record.point_count();
        summary.faces += record.face_count();
        summary.triangles += tri.triangles.len();
    }

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: document indices are u32 per the format
    let node_indices: Vec<u32> = (0..document.nodes.len() as u32).collect();
    document.scenes.push(Scene {
        nodes: node_indices,
    });
    document.scene = Some(0);

    let binary = arena.finish();
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: buffer lengths are u32 per the format
    document.buffers.push(Buffer {
        byte_length: binary.len() as u32,
    });

    let glb = encode_glb(&document, &binary)?;
    Ok(Conversion { glb, summary })
}

/// Append one mesh's geometry blocks and document entries.
#[allow(clippy::cast_possible_truncation)]
// Truncation: accessor counts and indices are u32 per the format, meshes
// with >4B vertices are unsupported
fn add_mesh(
    document: &mut Document,
    arena: &mut BinaryArena,
    record: &MeshRecord,
    tri: &TriangulatedMesh,
) {
    // Position block.
    let (byte_offset, byte_length) = arena.append(&pack_points(&record.points));
    let (min, max) = position_bounds(&record.points);
    let position = push_entries(
        document,
        BufferView {
            buffer: 0,
            byte_offset,
            byte_length,
            target: TARGET_ARRAY_BUFFER,
        },
        |buffer_view| Accessor {
            buffer_view,
            component_type: COMPONENT_FLOAT,
            count: record.points.len() as u32,
            element_type: TYPE_VEC3.to_owned(),
            min: Some(min),
            max: Some(max),
        },
    );

    // Index block.
    let (byte_offset, byte_length) = arena.append(&pack_triangles(&tri.triangles));
    let indices = push_entries(
        document,
        BufferView {
            buffer: 0,
            byte_offset,
            byte_length,
            target: TARGET_ELEMENT_ARRAY_BUFFER,
        },
        |buffer_view| Accessor {
            buffer_view,
            component_type: COMPONENT_UNSIGNED_INT,
            count: tri.index_count() as u32,
            element_type: TYPE_SCALAR.to_owned(),
            min: None,
            max: None,
        },
    );

    // Optional normal block. The triangulated normal count must equal the
    // point count for the attribute to reference the same vertex range as
    // POSITION; otherwise the mesh loses its normals.
    let normal = match &tri.normals {
        Some(normals) if normals.len() == record.points.len() => {
            let (byte_offset, byte_length) = arena.append(&pack_normals(normals));
            Some(push_entries(
                document,
                BufferView {
                    buffer: 0,
                    byte_offset,
                    byte_length,
                    target: TARGET_ARRAY_BUFFER,
                },
                |buffer_view| Accessor {
                    buffer_view,
                    component_type: COMPONENT_FLOAT,
                    count: normals.len() as u32,
                    element_type: TYPE_VEC3.to_owned(),
                    min: None,
                    max: None,
                },
            ))
        }
        Some(normals) => {
            tracing::warn!(
                "Mesh '{}' has {} triangulated normals for {} points; dropping NORMAL attribute",
                record.name,
                normals.len(),
                record.points.len()
            );
            None
        }
        None => None,
    };

    let mesh_index = document.meshes.len() as u32;
    document.meshes.push(Mesh {
        name: Some(record.name.clone()),
        primitives: vec![Primitive {
            attributes: PrimitiveAttributes { position, normal },
            indices,
        }],
    });
    document.nodes.push(Node {
        name: Some(record.name.clone()),
        mesh: mesh_index,
    });
}

/// Push a buffer view and its accessor, returning the accessor index.
#[allow(clippy::cast_possible_truncation)]
// Truncation: document indices are u32 per the format
fn push_entries(
    document: &mut Document,
    view: BufferView,
    accessor: impl FnOnce(u32) -> Accessor,
) -> u32 {
    let view_index = document.buffer_views.len() as u32;
    document.buffer_views.push(view);

    let accessor_index = document.accessors.len() as u32;
    document.accessors.push(accessor(view_index));
    accessor_index
}

/// Pack points as consecutive little-endian f32 triples.
fn pack_points(points: &[Point3<f32>]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(points.len() * 12);
    for point in points {
        bytes.extend_from_slice(&point.x.to_le_bytes());
        bytes.extend_from_slice(&point.y.to_le_bytes());
        bytes.extend_from_slice(&point.z.to_le_bytes());
    }
    bytes
}

/// Pack normals as consecutive little-endian f32 triples.
fn pack_normals(normals: &[Vector3<f32>]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(normals.len() * 12);
    for normal in normals {
        bytes.extend_from_slice(&normal.x.to_le_bytes());
        bytes.extend_from_slice(&normal.y.to_le_bytes());
        bytes.extend_from_slice(&normal.z.to_le_bytes());
    }
    bytes
}

/// Pack triangles as flattened little-endian u32 indices.
fn pack_triangles(triangles: &[[u32; 3]]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(triangles.len() * 12);
    for triangle in triangles {
        for index in triangle {
            bytes.extend_from_slice(&index.to_le_bytes());
        }
    }
    bytes
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use scene_types::RecordError;

    fn triangle_record() -> MeshRecord {
        MeshRecord {
            name: "Tri".to_owned(),
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            face_vertex_counts: vec![3],
            face_vertex_indices: vec![0, 1, 2],
            normals: None,
        }
    }

    #[test]
    fn empty_input_is_rejected_before_any_work() {
        let err = convert(&[]).unwrap_err();
        assert!(matches!(err, ExportError::NoMeshData));
    }

    #[test]
    fn invalid_topology_is_rejected() {
        let mut record = triangle_record();
        record.face_vertex_indices = vec![0, 1, 9];
        let err = convert(std::slice::from_ref(&record)).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Record(RecordError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn summary_counts_one_triangle() {
        let conversion = convert(&[triangle_record()]).unwrap();
        assert_eq!(
            conversion.summary,
            ConversionSummary {
                meshes: 1,
                vertices: 3,
                faces: 1,
                triangles: 1,
            }
        );
    }

    #[test]
    fn summary_counts_fanned_faces() {
        let record = MeshRecord {
            name: "Pent".to_owned(),
            points: (0..5_u8)
                .map(|i| Point3::new(f32::from(i), 0.0, 0.0))
                .collect(),
            face_vertex_counts: vec![5],
            face_vertex_indices: vec![0, 1, 2, 3, 4],
            normals: None,
        };
        let conversion = convert(&[record]).unwrap();
        assert_eq!(conversion.summary.faces, 1);
        assert_eq!(conversion.summary.triangles, 3);
    }

    #[test]
    fn packed_points_are_little_endian_f32() {
        let bytes = pack_points(&[Point3::new(1.0, 2.0, 3.0)]);
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..4], &1.0_f32.to_le_bytes());
        assert_eq!(&bytes[4..8], &2.0_f32.to_le_bytes());
        assert_eq!(&bytes[8..12], &3.0_f32.to_le_bytes());
    }

    #[test]
    fn packed_triangles_flatten_in_order() {
        let bytes = pack_triangles(&[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[12..16], &0_u32.to_le_bytes());
        assert_eq!(&bytes[16..20], &2_u32.to_le_bytes());
        assert_eq!(&bytes[20..24], &3_u32.to_le_bytes());
    }

    #[test]
    fn validation_failure_precedes_output() {
        // One good record then one bad one: the whole conversion fails and
        // produces no bytes.
        let mut bad = triangle_record();
        bad.face_vertex_counts = vec![2];
        let result = convert(&[triangle_record(), bad]);
        assert!(result.is_err());
    }
}
