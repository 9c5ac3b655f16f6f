//! Traversal report document.

use serde::{Deserialize, Serialize};

use crate::record::RawMeshRecord;

/// The JSON document the external scene traversal tool prints.
///
/// On success the tool reports `success: true` with the extracted meshes;
/// on failure it reports `success: false` with a human-readable `error`
/// message and no meshes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalReport {
    /// Whether traversal completed and found mesh geometry.
    pub success: bool,

    /// Extracted mesh records, in traversal order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<RawMeshRecord>,

    /// Mesh count as reported by the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh_count: Option<usize>,

    /// Error message, present when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TraversalReport {
    /// Parse a report from the tool's JSON output.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error when the text is not a
    /// well-formed report document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_report() {
        let report = TraversalReport::from_json(
            r#"{
                "success": true,
                "meshes": [
                    {
                        "name": "Tri",
                        "points": [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                        "faceVertexCounts": [3],
                        "faceVertexIndices": [0, 1, 2]
                    }
                ],
                "meshCount": 1
            }"#,
        )
        .unwrap();

        assert!(report.success);
        assert_eq!(report.mesh_count, Some(1));
        assert_eq!(report.meshes.len(), 1);
        assert!(report.error.is_none());
    }

    #[test]
    fn parses_failure_report() {
        let report = TraversalReport::from_json(
            r#"{"success": false, "error": "no mesh data found in scene"}"#,
        )
        .unwrap();

        assert!(!report.success);
        assert!(report.meshes.is_empty());
        assert_eq!(report.error.as_deref(), Some("no mesh data found in scene"));
    }

    #[test]
    fn rejects_malformed_report() {
        assert!(TraversalReport::from_json("not json").is_err());
    }
}
