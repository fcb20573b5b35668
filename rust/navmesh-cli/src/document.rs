use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use navmesh_core::{NavOptions, Navmesh, Point};
use serde::{Deserialize, Serialize};

/// Mesh file layout: either a shared vertex pool with a flat index buffer,
/// or a list of standalone triangles that get welded on load.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MeshDocument {
    #[serde(default)]
    pub vertices: Vec<Point>,
    #[serde(default)]
    pub indices: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triangles: Vec<[Point; 3]>,
    #[serde(default)]
    pub options: NavOptions,
}

impl MeshDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse mesh document {:?}", path))
    }

    pub fn build(&self, options: NavOptions) -> Result<Navmesh> {
        let indexed = !self.vertices.is_empty() || !self.indices.is_empty();
        let nav = match (indexed, self.triangles.is_empty()) {
            (true, false) => bail!("mesh document has both indexed data and a triangle list"),
            (false, false) => Navmesh::from_soup(&self.triangles, options)?,
            _ => Navmesh::new(self.vertices.clone(), &self.indices, options)?,
        };
        Ok(nav)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navmesh_core::Winding;

    #[test]
    fn options_are_optional() {
        let doc: MeshDocument =
            serde_json::from_str(r#"{"vertices": [[0,0],[1,0],[0,1]], "indices": [0,1,2]}"#).unwrap();
        assert_eq!(doc.options, NavOptions::default());
        assert_eq!(doc.build(doc.options.clone()).unwrap().graph().len(), 1);
    }

    #[test]
    fn reads_partial_options() {
        let doc: MeshDocument = serde_json::from_str(
            r#"{"vertices": [], "indices": [], "options": {"winding": "y_down"}}"#,
        )
        .unwrap();
        assert_eq!(doc.options.winding, Winding::YDown);
        assert_eq!(doc.options.funnel_epsilon, NavOptions::default().funnel_epsilon);
    }

    #[test]
    fn triangle_lists_are_welded() {
        let doc: MeshDocument = serde_json::from_str(
            r#"{"triangles": [[[0,0],[2,0],[2,1]], [[0,0],[2,1],[0,1]]]}"#,
        )
        .unwrap();
        let nav = doc.build(NavOptions::default()).unwrap();
        assert_eq!(nav.graph().vertices().len(), 4);
        assert_eq!(nav.graph().stats().internal_edges, 1);
    }

    #[test]
    fn mixed_layouts_are_rejected() {
        let doc: MeshDocument = serde_json::from_str(
            r#"{"vertices": [[0,0],[1,0],[0,1]], "indices": [0,1,2], "triangles": [[[0,0],[1,0],[0,1]]]}"#,
        )
        .unwrap();
        assert!(doc.build(NavOptions::default()).is_err());
    }
}
