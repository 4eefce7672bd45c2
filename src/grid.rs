//! Constants describing the imagery archive's tile grid and helpers to snap
//! coordinates onto it.

/// The edge length of a single tile, in ground units.
pub const GRID_RESOLUTION: i64 = 5000;

/// Westernmost x-coordinate covered by the archive.
pub const MIN_X: i64 = 880_000;
/// Easternmost x-coordinate covered by the archive.
pub const MAX_X: i64 = 1_205_000;
/// Southernmost y-coordinate covered by the archive.
pub const MIN_Y: i64 = 1_650_000;
/// Northernmost y-coordinate covered by the archive.
pub const MAX_Y: i64 = 2_120_000;

/// Returns the largest multiple of [`GRID_RESOLUTION`] that is `<= val`.
///
/// Overflows if that multiple is below `i64::MIN`.
///
/// # Example
/// ```rust
/// # use aerial_tile_downloader::grid::round_down;
/// assert_eq!(round_down(884_999), 880_000);
/// assert_eq!(round_down(-1), -5000);
/// ```
pub fn round_down(val: i64) -> i64 {
    val - val.rem_euclid(GRID_RESOLUTION)
}

/// Returns the smallest multiple of [`GRID_RESOLUTION`] that is `>= val`.
///
/// Overflows if that multiple is above `i64::MAX`.
///
/// # Example
/// ```rust
/// # use aerial_tile_downloader::grid::round_up;
/// assert_eq!(round_up(880_001), 885_000);
/// assert_eq!(round_up(880_000), 880_000);
/// ```
pub fn round_up(val: i64) -> i64 {
    match val.rem_euclid(GRID_RESOLUTION) {
        0 => val,
        rem => val + (GRID_RESOLUTION - rem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_values() -> impl Iterator<Item = i64> {
        (-12_000..12_000)
            .chain(MIN_X - 7_000..MIN_X + 7_000)
            .chain(MAX_Y - 7_000..MAX_Y + 7_000)
            .chain(vec![i64::MAX / 2, i64::MIN / 2])
    }

    #[test]
    fn round_down_bounds() {
        for v in sample_values() {
            let r = round_down(v);
            assert_eq!(r % GRID_RESOLUTION, 0, "{} -> {}", v, r);
            assert!(r <= v && v < r + GRID_RESOLUTION, "{} -> {}", v, r);
        }
    }

    #[test]
    fn round_up_bounds() {
        for v in sample_values() {
            let r = round_up(v);
            assert_eq!(r % GRID_RESOLUTION, 0, "{} -> {}", v, r);
            assert!(r - GRID_RESOLUTION < v && v <= r, "{} -> {}", v, r);
        }
    }

    #[test]
    fn representable_extremes() {
        assert_eq!(round_up(i64::MIN), i64::MIN + 808);
        assert_eq!(round_down(i64::MAX), i64::MAX - 807);
        assert_eq!(round_up(i64::MIN + 808), i64::MIN + 808);
    }

    #[test]
    fn aligned_values_are_fixed_points() {
        for v in &[0, 5000, -5000, MIN_X, MAX_X, MIN_Y, MAX_Y] {
            assert_eq!(round_down(*v), *v);
            assert_eq!(round_up(*v), *v);
        }
    }

    #[test]
    fn region_is_grid_aligned() {
        for v in &[MIN_X, MAX_X, MIN_Y, MAX_Y] {
            assert_eq!(v % GRID_RESOLUTION, 0);
        }
    }
}
