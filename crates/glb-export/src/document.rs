//! glTF 2.0 document structure.
//!
//! These types serialize to the container's JSON chunk. Field order is
//! fixed by declaration order and attribute maps are concrete structs, so
//! the encoded bytes are deterministic for a given input.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Component type code for 32-bit floats.
pub const COMPONENT_FLOAT: u32 = 5126;

/// Component type code for unsigned 32-bit integers.
pub const COMPONENT_UNSIGNED_INT: u32 = 5125;

/// Buffer view target for vertex attribute data.
pub const TARGET_ARRAY_BUFFER: u32 = 34962;

/// Buffer view target for index data.
pub const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// Accessor element type for three-component vectors.
pub const TYPE_VEC3: &str = "VEC3";

/// Accessor element type for scalars.
pub const TYPE_SCALAR: &str = "SCALAR";

/// Root of the glTF document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Asset metadata (format version, generator).
    pub asset: Asset,

    /// Index of the default scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<u32>,

    /// Scenes; this exporter always emits exactly one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<Scene>,

    /// Nodes, one per converted mesh, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,

    /// Meshes, one per converted record, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<Mesh>,

    /// Typed views into the binary buffer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<Accessor>,

    /// Byte ranges within the binary buffer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffer_views: Vec<BufferView>,

    /// Buffer descriptors; this exporter emits a single buffer holding the
    /// whole arena.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<Buffer>,
}

impl Document {
    /// Create an empty document with asset metadata filled in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            asset: Asset {
                version: "2.0".to_owned(),
                generator: Some("scene2glb".to_owned()),
            },
            scene: None,
            scenes: Vec::new(),
            nodes: Vec::new(),
            meshes: Vec::new(),
            accessors: Vec::new(),
            buffer_views: Vec::new(),
            buffers: Vec::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Asset metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// glTF format version, always `"2.0"`.
    pub version: String,

    /// Tool that produced the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

/// A scene referencing its root nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Node indices, in creation order.
    pub nodes: Vec<u32>,
}

/// A node referencing one mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Node name, carried over from the source prim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Index of the referenced mesh; equals the node's own index.
    pub mesh: u32,
}

/// A mesh holding a single primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Mesh name, carried over from the source prim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Primitives; this exporter emits exactly one per mesh.
    pub primitives: Vec<Primitive>,
}

/// A mesh primitive: attribute accessors plus an index accessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Primitive {
    /// Vertex attribute accessors.
    pub attributes: PrimitiveAttributes,

    /// Index accessor.
    pub indices: u32,
}

/// Vertex attribute accessor indices.
///
/// A fixed struct rather than a map keeps the serialized key order
/// deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrimitiveAttributes {
    /// POSITION accessor index; mandatory.
    #[serde(rename = "POSITION")]
    pub position: u32,

    /// NORMAL accessor index, when normals survived conversion.
    #[serde(rename = "NORMAL", default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<u32>,
}

/// A typed view interpreting a slice of the binary buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Index of the backing buffer view.
    pub buffer_view: u32,

    /// Component type code ([`COMPONENT_FLOAT`] or [`COMPONENT_UNSIGNED_INT`]).
    pub component_type: u32,

    /// Number of elements (not components).
    pub count: u32,

    /// Element type ([`TYPE_VEC3`] or [`TYPE_SCALAR`]).
    #[serde(rename = "type")]
    pub element_type: String,

    /// Component-wise minimum; positions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<[f32; 3]>,

    /// Component-wise maximum; positions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<[f32; 3]>,
}

/// A byte range within the binary buffer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// Buffer index; always 0, the single arena buffer.
    pub buffer: u32,

    /// Start of the range; always a multiple of 4.
    pub byte_offset: u32,

    /// Unpadded length of the range.
    pub byte_length: u32,

    /// Upload target ([`TARGET_ARRAY_BUFFER`] or
    /// [`TARGET_ELEMENT_ARRAY_BUFFER`]).
    pub target: u32,
}

/// A buffer descriptor.
///
/// The GLB binary chunk is the implied data source, so no URI is emitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    /// Total buffer length in bytes.
    pub byte_length: u32,
}

/// Component-wise minimum and maximum over a non-empty point set.
///
/// Downstream consumers derive bounding volumes from the POSITION
/// accessor's `min`/`max`, so these must be the true extrema; for a single
/// point the two are equal.
///
/// # Example
///
/// ```
/// use glb_export::position_bounds;
/// use scene_types::Point3;
///
/// let (min, max) = position_bounds(&[
///     Point3::new(1.0, -2.0, 0.5),
///     Point3::new(-1.0, 4.0, 0.5),
/// ]);
/// assert_eq!(min, [-1.0, -2.0, 0.5]);
/// assert_eq!(max, [1.0, 4.0, 0.5]);
/// ```
#[must_use]
pub fn position_bounds(points: &[Point3<f32>]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for point in points {
        for axis in 0..3 {
            min[axis] = min[axis].min(point[axis]);
            max[axis] = max[axis].max(point[axis]);
        }
    }
    (min, max)
}
