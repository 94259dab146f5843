use crate::mesh::MeshTopology;
use nalgebra_glm::Vec4;
use serde::{Deserialize, Serialize};

/// Mesh topology as supplied by the host, one ordered vertex-index list
/// per face.
#[derive(Serialize, Deserialize)]
pub struct MeshData {
    pub faces: Vec<Vec<u32>>,
}

impl MeshData {
    pub fn into_topology(self) -> MeshTopology {
        MeshTopology::new(self.faces)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ColorData {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorData {
    pub fn from_color(color: &Vec4) -> Self {
        Self {
            r: color.x,
            g: color.y,
            b: color.z,
            a: color.w,
        }
    }
}

/// The payload handed back to the host: the full gradient palette plus one
/// palette index per face-vertex occurrence, in traversal order.
#[derive(Serialize, Deserialize)]
pub struct ColorSetData {
    pub name: String,
    pub colors: Vec<ColorData>,
    #[serde(rename = "colorIds")]
    pub color_ids: Vec<u32>,
}
