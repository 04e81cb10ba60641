//! Linear mapping from word counts to integer font sizes.

use std::convert::TryFrom;

use crate::rank::CountBounds;

/// Smallest font size assigned to a cloud word.
pub const MIN_FONT_SIZE: u32 = 11;
/// Largest font size assigned to a cloud word.
pub const MAX_FONT_SIZE: u32 = 48;

/// Maps counts within [`CountBounds`] onto `[min_size, max_size]`.
///
/// `size = min_size + (max_size - min_size) * (count - min) / (max - min)` using
/// truncating integer division. When every count is equal the result is `min_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    min_size: u32,
    max_size: u32,
    bounds: CountBounds,
}

impl FontScale {
    /// Creates a scale over `[min_size, max_size]`.
    ///
    /// The size range must not be reversed; [`CloudConfig::validate`] rejects such ranges.
    ///
    /// [`CloudConfig::validate`]: crate::config::CloudConfig::validate
    #[must_use]
    pub fn new(min_size: u32, max_size: u32, bounds: CountBounds) -> Self {
        debug_assert!(
            min_size <= max_size,
            "font size range {min_size}..={max_size} is reversed"
        );
        Self {
            min_size,
            max_size,
            bounds,
        }
    }

    /// Scale with the default 11..=48 size range.
    #[must_use]
    pub fn with_default_sizes(bounds: CountBounds) -> Self {
        Self::new(MIN_FONT_SIZE, MAX_FONT_SIZE, bounds)
    }

    /// Count bounds the scale was built for.
    #[must_use]
    pub fn bounds(&self) -> CountBounds {
        self.bounds
    }

    /// Font size for `count`; counts outside the bounds are clamped first.
    #[must_use]
    pub fn size_for(&self, count: usize) -> u32 {
        let CountBounds { min, max } = self.bounds;
        if self.bounds.is_degenerate() || max < min {
            return self.min_size;
        }
        let count = count.clamp(min, max);
        let span = u128::from(self.max_size.saturating_sub(self.min_size));
        let offset = span * (count - min) as u128 / (max - min) as u128;
        // offset <= span, which fits in u32
        self.min_size + u32::try_from(offset).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(min: usize, max: usize) -> FontScale {
        FontScale::with_default_sizes(CountBounds { min, max })
    }

    #[test]
    fn extremes_map_to_range_ends() {
        let scale = scale(1, 5);
        assert_eq!(scale.size_for(5), 48);
        assert_eq!(scale.size_for(1), 11);
    }

    #[test]
    fn intermediate_values_truncate() {
        let scale = scale(1, 5);
        // 37 * 1 / 4 = 9.25
        assert_eq!(scale.size_for(2), 20);
        // 37 * 2 / 4 = 18.5
        assert_eq!(scale.size_for(3), 29);
        // 37 * 3 / 4 = 27.75
        assert_eq!(scale.size_for(4), 38);
    }

    #[test]
    fn degenerate_bounds_use_minimum_size() {
        let scale = scale(7, 7);
        assert_eq!(scale.size_for(7), MIN_FONT_SIZE);
    }

    #[test]
    fn out_of_range_counts_are_clamped() {
        let scale = scale(10, 20);
        assert_eq!(scale.size_for(0), 11);
        assert_eq!(scale.size_for(1_000), 48);
    }

    #[test]
    fn custom_range_and_huge_counts() {
        let scale = FontScale::new(10, 30, CountBounds { min: 0, max: usize::MAX });
        assert_eq!(scale.size_for(usize::MAX), 30);
        assert_eq!(scale.size_for(0), 10);
        assert_eq!(scale.size_for(usize::MAX / 2), 19);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reversed")]
    fn reversed_size_range_is_rejected() {
        let _ = FontScale::new(30, 10, CountBounds { min: 1, max: 5 });
    }
}
