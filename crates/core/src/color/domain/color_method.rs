use std::fmt;
use std::str::FromStr;

use crate::shared::error::PaletteError;

/// Strategy for reducing a frame to one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMethod {
    /// Per-channel mean of every pixel.
    Average,
    /// Centroid of the most populated k-means cluster.
    Dominant,
}

impl ColorMethod {
    pub const ALL: &'static [ColorMethod] = &[ColorMethod::Average, ColorMethod::Dominant];

    pub fn name(self) -> &'static str {
        match self {
            ColorMethod::Average => "average",
            ColorMethod::Dominant => "dominant",
        }
    }
}

impl FromStr for ColorMethod {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ColorMethod::ALL
            .iter()
            .copied()
            .find(|m| m.name() == normalized)
            .ok_or_else(|| PaletteError::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for ColorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("average", ColorMethod::Average)]
    #[case("dominant", ColorMethod::Dominant)]
    #[case("  Dominant ", ColorMethod::Dominant)]
    #[case("AVERAGE", ColorMethod::Average)]
    fn test_parse_known(#[case] input: &str, #[case] expected: ColorMethod) {
        assert_eq!(input.parse::<ColorMethod>().unwrap(), expected);
    }

    #[rstest]
    #[case("median")]
    #[case("majority")]
    #[case("")]
    fn test_parse_unknown_is_invalid_method(#[case] input: &str) {
        let err = input.parse::<ColorMethod>().unwrap_err();
        assert!(matches!(err, PaletteError::InvalidMethod(ref name) if name == input));
    }

    #[test]
    fn test_display_matches_name() {
        for method in ColorMethod::ALL {
            assert_eq!(method.to_string(), method.name());
            assert_eq!(method.name().parse::<ColorMethod>().unwrap(), *method);
        }
    }
}
