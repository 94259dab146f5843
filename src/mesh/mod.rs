use genmesh::generators::{IndexedPolygon, SharedVertex};
use genmesh::EmitTriangles;

pub mod data;

/// Face-vertex topology of a mesh: each face is an ordered list of vertex
/// indices. Traversal order is face-then-vertex and must match the order
/// the host assigns colors in.
#[derive(Clone, Debug)]
pub struct MeshTopology {
    faces: Vec<Vec<u32>>,
}

impl MeshTopology {
    pub fn new(faces: Vec<Vec<u32>>) -> Self {
        Self { faces }
    }

    /// Builds a triangulated topology from a genmesh generator, deriving a
    /// per-vertex weight from each shared vertex on the way.
    pub fn from_shape<VS, P, S, F>(shape: S, weight_fn: F) -> (Self, Vec<f64>)
    where
        P: EmitTriangles<Vertex = usize>,
        S: SharedVertex<VS> + IndexedPolygon<P>,
        F: FnMut(VS) -> f64,
    {
        let weights = shape.shared_vertex_iter().map(weight_fn).collect::<Vec<_>>();

        let mut faces = vec![];
        shape.indexed_polygon_iter().for_each(|p| {
            p.emit_triangles(|t| {
                faces.push(vec![t.x as u32, t.y as u32, t.z as u32]);
            })
        });

        (Self { faces }, weights)
    }

    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Total number of face-vertex occurrences, counting shared vertices
    /// once per incident face.
    pub fn face_vertex_count(&self) -> usize {
        self.faces.iter().map(|face| face.len()).sum()
    }
}
