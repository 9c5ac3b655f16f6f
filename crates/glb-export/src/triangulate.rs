//! Fan triangulation of polygon faces.

use nalgebra::Vector3;

/// Triangles produced from one mesh's polygon faces.
///
/// Derived per mesh and discarded once its geometry has been packed;
/// never persisted.
#[derive(Debug, Clone)]
pub struct TriangulatedMesh {
    /// Triangles as point indices, in face order.
    pub triangles: Vec<[u32; 3]>,

    /// One normal per emitted triangle vertex, in flattened order, when the
    /// source mesh carried per-face-vertex normals.
    pub normals: Option<Vec<Vector3<f32>>>,
}

impl TriangulatedMesh {
    /// Number of flattened scalar indices (three per triangle).
    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.triangles.len() * 3
    }
}

/// Triangulate polygon faces consumed from a flat index stream.
///
/// Walks `indices` according to `counts`: a face of 3 vertices is emitted
/// unchanged, a face of `n > 3` vertices is split into `n - 2` triangles
/// fanned from its first vertex, and a degenerate face (`n < 3`) emits
/// nothing. The consumption offset always advances by the face's full
/// vertex count, so later faces stay aligned.
///
/// When `normals` are supplied (one per face vertex), each emitted triangle
/// vertex takes the normal authored for that face-vertex slot, using the
/// same face-local fan pattern as the positions.
///
/// The inputs must satisfy the mesh record topology invariants: `counts`
/// sums to `indices.len()`, and `normals`, when present, is as long as
/// `indices`.
///
/// # Example
///
/// ```
/// use glb_export::triangulate;
///
/// // One pentagon fans into three triangles.
/// let tri = triangulate(&[5], &[0, 1, 2, 3, 4], None);
/// assert_eq!(tri.triangles, [[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
/// ```
#[must_use]
pub fn triangulate(
    counts: &[u32],
    indices: &[u32],
    normals: Option<&[Vector3<f32>]>,
) -> TriangulatedMesh {
    let triangle_estimate: usize = counts
        .iter()
        .map(|&c| (c as usize).saturating_sub(2))
        .sum();

    let mut triangles = Vec::with_capacity(triangle_estimate);
    let mut fanned = normals.map(|_| Vec::with_capacity(triangle_estimate * 3));

    let mut offset = 0_usize;
    for &count in counts {
        let count = count as usize;
        if count >= 3 {
            for i in 1..count - 1 {
                triangles.push([indices[offset], indices[offset + i], indices[offset + i + 1]]);
                if let (Some(out), Some(normals)) = (fanned.as_mut(), normals) {
                    out.push(normals[offset]);
                    out.push(normals[offset + i]);
                    out.push(normals[offset + i + 1]);
                }
            }
        }
        offset += count;
    }

    TriangulatedMesh {
        triangles,
        normals: fanned,
    }
}
