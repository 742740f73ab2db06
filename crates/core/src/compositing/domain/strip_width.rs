use serde::{Deserialize, Serialize};

/// How wide each color strip is in the palette image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripWidthPolicy {
    /// Divides the target width evenly across colors, rounding up. The
    /// palette may be up to `colors - 1` pixels wider than requested.
    Even,
    /// One pixel per color; the target width is ignored.
    Unit,
}

impl StripWidthPolicy {
    /// Width of every strip for `color_count` colors, or `None` when the
    /// target width cannot hold any strip.
    pub fn strip_width(self, target_width: u32, color_count: usize) -> Option<u32> {
        match self {
            StripWidthPolicy::Unit => Some(1),
            StripWidthPolicy::Even => {
                if target_width == 0 || color_count == 0 {
                    return None;
                }
                let width = (target_width as u64).div_ceil(color_count as u64);
                Some(width as u32)
            }
        }
    }
}

impl std::str::FromStr for StripWidthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(StripWidthPolicy::Even),
            "unit" => Ok(StripWidthPolicy::Unit),
            other => Err(format!("strip width must be 'even' or 'unit', got '{other}'")),
        }
    }
}

impl std::fmt::Display for StripWidthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StripWidthPolicy::Even => write!(f, "even"),
            StripWidthPolicy::Unit => write!(f, "unit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::exact_division(100, 10, 10)]
    #[case::rounds_up(100, 3, 34)]
    #[case::more_colors_than_pixels(100, 1200, 1)]
    #[case::single_color(1920, 1, 1920)]
    fn test_even_strip_width(#[case] target: u32, #[case] count: usize, #[case] expected: u32) {
        assert_eq!(
            StripWidthPolicy::Even.strip_width(target, count),
            Some(expected)
        );
    }

    #[test]
    fn test_even_zero_target_has_no_width() {
        assert_eq!(StripWidthPolicy::Even.strip_width(0, 5), None);
    }

    #[test]
    fn test_unit_ignores_target() {
        assert_eq!(StripWidthPolicy::Unit.strip_width(1920, 7), Some(1));
        assert_eq!(StripWidthPolicy::Unit.strip_width(0, 7), Some(1));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("even".parse::<StripWidthPolicy>(), Ok(StripWidthPolicy::Even));
        assert_eq!(" Unit ".parse::<StripWidthPolicy>(), Ok(StripWidthPolicy::Unit));
        assert!("wide".parse::<StripWidthPolicy>().is_err());
        assert_eq!(StripWidthPolicy::Unit.to_string(), "unit");
    }
}
