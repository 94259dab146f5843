use crate::ext::clamp;
use crate::mesh::data::{ColorData, ColorSetData};
use crate::mesh::MeshTopology;
use crate::ramp::Gradient;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("vertex index {vertex} is out of range for {weight_count} weights")]
    VertexOutOfRange { vertex: usize, weight_count: usize },
    #[error("cannot map weights onto an empty color array")]
    NoColors,
}

/// Maps per-vertex weights to color indices, one entry per face-vertex
/// occurrence in face-then-vertex traversal order.
///
/// The index is `ceil(weight * (color_count - 1))` clamped into range, so
/// only a weight of exactly zero lands on the bottom color.
pub fn create_color_ids(
    topology: &MeshTopology,
    weights: &[f64],
    color_count: usize,
) -> Result<Vec<u32>, TransferError> {
    if color_count == 0 {
        return Err(TransferError::NoColors);
    }

    let max = (color_count - 1) as i64;
    let mut color_ids = Vec::with_capacity(topology.face_vertex_count());

    for face in topology.faces() {
        for &vertex in face {
            let vertex = vertex as usize;

            let weight = weights
                .get(vertex)
                .copied()
                .ok_or(TransferError::VertexOutOfRange {
                    vertex,
                    weight_count: weights.len(),
                })?;

            let value = (weight * max as f64).ceil() as i64;

            color_ids.push(clamp(value, 0, max) as u32);
        }
    }

    Ok(color_ids)
}

/// Assembles the color-set payload the host applies to its color channel:
/// the gradient as the palette and one palette index per face-vertex.
pub fn build_color_set(
    name: &str,
    topology: &MeshTopology,
    weights: &[f64],
    gradient: &Gradient,
) -> Result<ColorSetData, TransferError> {
    let color_ids = create_color_ids(topology, weights, gradient.len())?;

    Ok(ColorSetData {
        name: name.to_string(),
        colors: gradient.colors().iter().map(ColorData::from_color).collect(),
        color_ids,
    })
}
