#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate anyhow;

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

use crate::mesh::data::MeshData;
use crate::mesh::MeshTopology;
use crate::ramp::config::RampConfig;
use crate::ramp::Gradient;
use crate::transfer::build_color_set;

use anyhow::Error;
use clap::{App, Arg, ArgMatches};
use genmesh::generators::{Cube, SphereUv};
use nalgebra_glm::{vec4, Vec4};
use std::fs::File;
use std::io::BufReader;

pub mod ext;
pub mod mesh;
pub mod ramp;
pub mod transfer;

const DEFAULT_COLOR_SET_NAME: &str = "paintWeightsColorSet1";
const DEFAULT_COLOR_RAMP: &str = "0,0,0,0,0.5,0.5,0.5,0.5,1,1,1,1";

lazy_static! {
    static ref DEFAULT_MIN_COLOR: Vec4 = vec4(0.0, 0.0, 0.0, 1.0);
    static ref DEFAULT_MAX_COLOR: Vec4 = vec4(1.0, 1.0, 1.0, 1.0);
}

fn main() -> Result<(), Error> {
    let matches = App::new("paint weights visualizer")
        .arg(
            Arg::with_name("mesh")
                .short('m')
                .long("mesh")
                .takes_value(true)
                .conflicts_with("shape"),
        )
        .arg(
            Arg::with_name("weights")
                .short('w')
                .long("weights")
                .takes_value(true)
                .requires("mesh"),
        )
        .arg(
            Arg::with_name("shape")
                .short('s')
                .long("shape")
                .takes_value(true)
                .possible_values(&["cube", "sphere"]),
        )
        .arg(
            Arg::with_name("color-set-name")
                .short('n')
                .long("color-set-name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("color-ramp")
                .short('r')
                .long("color-ramp")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ramp-min-color")
                .long("ramp-min-color")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("ramp-max-color")
                .long("ramp-max-color")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("output")
                .short('o')
                .long("output")
                .takes_value(true),
        )
        .get_matches();

    let min_color = color_flag(&matches, "ramp-min-color", *DEFAULT_MIN_COLOR)?;
    let max_color = color_flag(&matches, "ramp-max-color", *DEFAULT_MAX_COLOR)?;

    let ramp = matches.value_of("color-ramp").unwrap_or(DEFAULT_COLOR_RAMP);

    let gradient = Gradient::from_ramp(ramp, min_color, max_color, &RampConfig::default())?;

    let (topology, weights) = match matches.value_of("mesh") {
        Some(path) => {
            let mesh: MeshData = serde_json::from_reader(BufReader::new(File::open(path)?))?;

            let weights_path = matches
                .value_of("weights")
                .ok_or(anyhow!("--weights is required alongside --mesh"))?;
            let weights: Vec<f64> =
                serde_json::from_reader(BufReader::new(File::open(weights_path)?))?;

            (mesh.into_topology(), weights)
        }
        None => demo_shape(matches.value_of("shape").unwrap_or("sphere")),
    };

    let color_set_name = matches
        .value_of("color-set-name")
        .unwrap_or(DEFAULT_COLOR_SET_NAME);

    let color_set = build_color_set(color_set_name, &topology, &weights, &gradient)?;

    eprintln!(
        "color set {:?}: {} colors, {} face-vertex assignments over {} faces",
        color_set.name,
        color_set.colors.len(),
        color_set.color_ids.len(),
        topology.face_count(),
    );

    match matches.value_of("output") {
        Some(path) => serde_json::to_writer_pretty(File::create(path)?, &color_set)?,
        None => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), &color_set)?;
        }
    }

    Ok(())
}

/// Reads a multi-use color flag. The flag counts only when it is supplied
/// exactly three times (one component per use); anything else falls back to
/// the default.
fn color_flag(matches: &ArgMatches, name: &str, default: Vec4) -> Result<Vec4, Error> {
    let values = match matches.values_of(name) {
        Some(values) => values.collect::<Vec<_>>(),
        None => return Ok(default),
    };

    if values.len() != 3 {
        return Ok(default);
    }

    let r = values[0].parse::<f32>()?;
    let g = values[1].parse::<f32>()?;
    let b = values[2].parse::<f32>()?;

    Ok(vec4(r, g, b, 1.0))
}

/// Built-in demo meshes with height-derived weights, for running without
/// host-exported topology and weight files.
fn demo_shape(name: &str) -> (MeshTopology, Vec<f64>) {
    match name {
        "cube" => MeshTopology::from_shape(Cube::new(), |v| height_weight(v.pos.y, -1.0, 1.0)),
        _ => MeshTopology::from_shape(SphereUv::new(32, 16), |v| {
            height_weight(v.pos.y, -1.0, 1.0)
        }),
    }
}

fn height_weight(y: f32, min: f32, max: f32) -> f64 {
    f64::from((y - min) / (max - min))
}
