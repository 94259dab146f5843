use crate::ext::clamp;
use crate::ramp::config::RampConfig;
use crate::ramp::stop::ColorStop;
use nalgebra_glm::{lerp, vec4, Vec4};
use std::cmp::Ordering;
use thiserror::Error;

pub mod config;
pub mod stop;

/// Number of samples in a dense gradient, one per percent position.
pub const GRADIENT_RESOLUTION: usize = 101;

#[derive(Debug, Error)]
pub enum RampError {
    #[error("ramp string holds {count} values, which is not divisible by {chunk_size}")]
    MalformedRamp { count: usize, chunk_size: usize },
}

/// A color ramp densely sampled at 1% increments, built once and then
/// looked up per vertex.
#[derive(Clone, Debug)]
pub struct Gradient {
    colors: Vec<Vec4>,
}

impl Gradient {
    /// Parses a delimited ramp string into a 101-sample gradient.
    ///
    /// Values are consumed greedily until the first position where no float
    /// can be read; the surviving count must be divisible by the chunk size.
    /// Stops sharing a position keep their input order (stable sort). After
    /// interpolation the endpoint samples are replaced by `min_color` and
    /// `max_color` no matter what the ramp specified there.
    pub fn from_ramp(
        ramp: &str,
        min_color: Vec4,
        max_color: Vec4,
        config: &RampConfig,
    ) -> Result<Self, RampError> {
        let values = read_values(ramp, config.delimiter());

        let chunk_size = config.chunk_size();

        if values.len() % chunk_size != 0 {
            return Err(RampError::MalformedRamp {
                count: values.len(),
                chunk_size,
            });
        }

        let mut stops = values
            .chunks(chunk_size)
            .map(|chunk| ColorStop::new(chunk[0], chunk[1], chunk[2], chunk[3]))
            .collect::<Vec<_>>();

        stops.sort_by(|a, b| {
            a.position()
                .partial_cmp(&b.position())
                .unwrap_or(Ordering::Equal)
        });

        let mut colors = vec![vec4(0.0, 0.0, 0.0, 1.0); GRADIENT_RESOLUTION];
        let top = (GRADIENT_RESOLUTION - 1) as i64;

        for pair in stops.windows(2) {
            let start = clamp((pair[0].position() * 100.0).round() as i64, 0, top);
            let end = clamp((pair[1].position() * 100.0).round() as i64, 0, top);

            // Inclusive range; adjacent pairs share their boundary sample
            // and the later pair's fill wins.
            for j in start..=end {
                let percent = j as f32 / 100.0;

                let mut color = lerp(pair[0].color(), pair[1].color(), percent);
                color.w = 1.0;

                colors[j as usize] = color;
            }
        }

        colors[0] = min_color;
        colors[GRADIENT_RESOLUTION - 1] = max_color;

        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Nearest sample for a position in `[0, 1]`; out-of-range positions
    /// are clamped to the endpoints.
    pub fn sample(&self, position: f32) -> &Vec4 {
        let top = (self.colors.len() - 1) as i64;
        let index = clamp((position * top as f32).round() as i64, 0, top);

        &self.colors[index as usize]
    }
}

/// Reads floats with stream semantics: skip leading whitespace, take the
/// longest float prefix, then consume a single delimiter only when it
/// immediately follows the value. The first position where no float can be
/// read ends the scan.
fn read_values(ramp: &str, delimiter: char) -> Vec<f32> {
    let mut values = Vec::new();
    let mut rest = ramp;

    loop {
        rest = rest.trim_start();

        let end = float_len(rest);

        if end == 0 {
            break;
        }

        match rest[..end].parse::<f32>() {
            Ok(value) => values.push(value),
            Err(_) => break,
        }

        rest = &rest[end..];

        if rest.starts_with(delimiter) {
            rest = &rest[delimiter.len_utf8()..];
        }
    }

    values
}

fn float_len(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut digits = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;

        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }

    if digits == 0 {
        return 0;
    }

    // An exponent only counts when it is complete.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;

        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }

        let mut exponent_digits = 0;

        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
            exponent_digits += 1;
        }

        if exponent_digits > 0 {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra_glm::vec4;

    fn build(ramp: &str) -> Result<Gradient, RampError> {
        Gradient::from_ramp(
            ramp,
            vec4(0.0, 0.0, 0.0, 1.0),
            vec4(1.0, 1.0, 1.0, 1.0),
            &RampConfig::default(),
        )
    }

    #[test]
    fn chunk_aligned_ramp_yields_101_samples() {
        let gradient = build("0,0,0,0,1,1,1,1").unwrap();

        assert_eq!(gradient.len(), GRADIENT_RESOLUTION);
    }

    #[test]
    fn unaligned_ramp_is_malformed() {
        let result = build("0,0,0,0,1,1,1");

        match result {
            Err(RampError::MalformedRamp { count, chunk_size }) => {
                assert_eq!(count, 7);
                assert_eq!(chunk_size, 4);
            }
            Ok(_) => panic!("expected a malformed ramp error"),
        }
    }

    #[test]
    fn endpoints_are_always_overridden() {
        let min = vec4(0.1, 0.2, 0.3, 1.0);
        let max = vec4(0.9, 0.8, 0.7, 1.0);

        let gradient =
            Gradient::from_ramp("1,0,0,0,0,1,0,1", min, max, &RampConfig::default()).unwrap();

        assert_eq!(gradient.colors()[0], min);
        assert_eq!(gradient.colors()[100], max);
    }

    #[test]
    fn midpoint_of_black_to_white_is_half_gray() {
        let gradient = build("0,0,0,0,1,1,1,1").unwrap();
        let color = gradient.colors()[50];

        assert_approx_eq!(color.x, 0.5);
        assert_approx_eq!(color.y, 0.5);
        assert_approx_eq!(color.z, 0.5);
        assert_approx_eq!(color.w, 1.0);
    }

    #[test]
    fn interpolated_alpha_is_forced_to_one() {
        let gradient = build("0.2,0.4,0.6,0,0.8,0.6,0.4,1").unwrap();

        for color in gradient.colors() {
            assert_approx_eq!(color.w, 1.0);
        }
    }

    #[test]
    fn stops_are_sorted_by_position() {
        // White listed first at position 1, black second at position 0.
        let gradient = build("1,1,1,1,0,0,0,0").unwrap();
        let color = gradient.colors()[25];

        assert_approx_eq!(color.x, 0.25);
        assert_approx_eq!(color.y, 0.25);
        assert_approx_eq!(color.z, 0.25);
    }

    #[test]
    fn later_pair_wins_the_shared_boundary_sample() {
        // Stops at 0, 0.5 and 1; the pair starting at 0.5 refills index 50
        // with its own global-percent lerp: 0.5 + (1.0 - 0.5) * 0.5.
        let gradient = build("0,0,0,0,0.5,0.5,0.5,0.5,1,1,1,1").unwrap();
        let color = gradient.colors()[50];

        assert_approx_eq!(color.x, 0.75);
        assert_approx_eq!(color.y, 0.75);
        assert_approx_eq!(color.z, 0.75);
    }

    #[test]
    fn sampling_recovers_stop_colors_between_same_colored_stops() {
        let gradient = build("0.4,0.4,0.4,0.2,0.4,0.4,0.4,0.8").unwrap();
        let color = gradient.sample(0.2);

        assert_approx_eq!(color.x, 0.4);
        assert_approx_eq!(color.y, 0.4);
        assert_approx_eq!(color.z, 0.4);
    }

    #[test]
    fn out_of_range_positions_are_clamped_into_the_gradient() {
        let gradient = build("0,0,0,-0.5,1,1,1,2").unwrap();

        assert_eq!(gradient.len(), GRADIENT_RESOLUTION);
        assert_approx_eq!(gradient.colors()[1].x, 0.01);
    }

    #[test]
    fn whitespace_after_delimiters_is_tolerated() {
        let gradient = build(" 0, 0, 0,  0,\t1, 1, 1,\t1").unwrap();
        let color = gradient.colors()[50];

        assert_approx_eq!(color.x, 0.5);
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let config = RampConfig::new(';', 4);
        let gradient = Gradient::from_ramp(
            "0;0;0;0;1;1;1;1",
            vec4(0.0, 0.0, 0.0, 1.0),
            vec4(1.0, 1.0, 1.0, 1.0),
            &config,
        )
        .unwrap();

        assert_eq!(gradient.len(), GRADIENT_RESOLUTION);
    }

    #[test]
    fn wider_chunks_ignore_trailing_values() {
        // 5-wide chunks; the 4th value of each chunk is the position.
        let config = RampConfig::new(',', 5);
        let gradient = Gradient::from_ramp(
            "0,0,0,0,9,1,1,1,1,9",
            vec4(0.0, 0.0, 0.0, 1.0),
            vec4(1.0, 1.0, 1.0, 1.0),
            &config,
        )
        .unwrap();

        let color = gradient.colors()[50];
        assert_approx_eq!(color.x, 0.5);
    }

    #[test]
    fn scan_stops_at_first_non_numeric_value() {
        assert_eq!(read_values("1,2,junk,3", ','), vec![1.0, 2.0]);
        assert_eq!(read_values("junk", ','), Vec::<f32>::new());
    }

    #[test]
    fn trailing_junk_keeps_the_parsed_prefix() {
        assert_eq!(read_values("1.5abc,2", ','), vec![1.5]);
    }

    #[test]
    fn doubled_delimiters_truncate_the_scan() {
        assert_eq!(read_values("1,,2", ','), vec![1.0]);
    }

    #[test]
    fn whitespace_before_a_delimiter_truncates_the_scan() {
        assert_eq!(read_values("1 , 2", ','), vec![1.0]);
    }

    #[test]
    fn whitespace_alone_separates_values() {
        assert_eq!(read_values("1 2,3", ','), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn signs_exponents_and_bare_fractions_parse() {
        assert_eq!(
            read_values("-1.5,+0.25,.5,1e2", ','),
            vec![-1.5, 0.25, 0.5, 100.0]
        );
    }

    #[test]
    fn truncated_ramp_fails_the_divisibility_check() {
        let result = build("0,0,0,0,1,1,oops,1");

        assert!(matches!(
            result,
            Err(RampError::MalformedRamp { count: 6, .. })
        ));
    }
}
