/// Clamps `value` into the inclusive `[min, max]` interval.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns the arithmetic sequence `start, start + step, ...` with
/// `(end - start) / step` entries.
pub fn range(start: u32, end: u32, step: u32) -> Vec<u32> {
    let length = ((end - start) / step) as usize;

    (0..length).map(|i| start + i as u32 * step).collect()
}
