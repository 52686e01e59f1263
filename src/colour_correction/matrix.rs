//! Named 3x3 colour-correction matrices

use std::fmt;
use std::str::FromStr;

use crate::colour_correction::common::error::CorrectionError;

/// Title reserved for the identity matrix. Always present, never removable.
pub const DEFAULT_TITLE: &str = "Default";

/// Row-major 3x3 matrix mapping `(R, G, B)` to corrected `(R, G, B)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourMatrix {
    pub rows: [[f64; 3]; 3],
}

impl ColourMatrix {
    pub const IDENTITY: ColourMatrix = ColourMatrix {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Builds a matrix from nine row-major coefficients.
    pub fn from_coefficients(c: [f64; 9]) -> Self {
        Self {
            rows: [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]],
        }
    }

    pub fn coefficients(&self) -> [f64; 9] {
        let r = &self.rows;
        [
            r[0][0], r[0][1], r[0][2], r[1][0], r[1][1], r[1][2], r[2][0], r[2][1], r[2][2],
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.coefficients().iter().all(|c| c.is_finite())
    }

    /// Matrix-vector product with `(r, g, b)`.
    #[inline]
    pub fn transform(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        self.rows.map(|row| row[0] * r + row[1] * g + row[2] * b)
    }
}

impl Default for ColourMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Comma-separated, row-major. This is the persisted value format.
impl fmt::Display for ColourMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.coefficients().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for ColourMatrix {
    type Err = CorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| CorrectionError::MalformedPersistedEntry {
            key: String::new(),
            reason,
        };

        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 9 {
            return Err(malformed(format!("expected 9 coefficients, found {}", fields.len())));
        }

        let mut coefficients = [0.0f64; 9];
        for (slot, field) in coefficients.iter_mut().zip(&fields) {
            let value: f64 = field
                .trim()
                .parse()
                .map_err(|_| malformed(format!("not a number: {:?}", field.trim())))?;
            if !value.is_finite() {
                return Err(malformed(format!("not finite: {:?}", field.trim())));
            }
            *slot = value;
        }

        Ok(Self::from_coefficients(coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_major() {
        let m: ColourMatrix = "1.5, -0.25, 0, 0,1,0, 0.1,0.2,0.7".parse().unwrap();
        assert_eq!(m.rows[0], [1.5, -0.25, 0.0]);
        assert_eq!(m.rows[2], [0.1, 0.2, 0.7]);
    }

    #[test]
    fn test_display_parses_back() {
        let m = ColourMatrix::new([[1.2, -0.1, -0.1], [-0.05, 1.1, -0.05], [0.0, -0.3, 1.3]]);
        let text = m.to_string();
        assert_eq!(text, "1.2,-0.1,-0.1,-0.05,1.1,-0.05,0,-0.3,1.3");
        assert_eq!(text.parse::<ColourMatrix>().unwrap(), m);
    }

    #[test]
    fn test_rejects_wrong_field_count() {
        assert!("1,0,0,0,1,0,0,0,1,extra".parse::<ColourMatrix>().is_err());
        assert!("1,0,0,0,1,0,0,0".parse::<ColourMatrix>().is_err());
        assert!("".parse::<ColourMatrix>().is_err());
    }

    #[test]
    fn test_rejects_non_numeric_and_non_finite() {
        let err = "1,0,0,0,x,0,0,0,1".parse::<ColourMatrix>().unwrap_err();
        assert!(matches!(err, CorrectionError::MalformedPersistedEntry { .. }));
        assert!("1,0,0,0,NaN,0,0,0,1".parse::<ColourMatrix>().is_err());
        assert!("inf,0,0,0,1,0,0,0,1".parse::<ColourMatrix>().is_err());
    }

    #[test]
    fn test_is_finite() {
        assert!(ColourMatrix::IDENTITY.is_finite());
        let mut rows = ColourMatrix::IDENTITY.rows;
        rows[1][2] = f64::NEG_INFINITY;
        assert!(!ColourMatrix::new(rows).is_finite());
        rows[1][2] = f64::NAN;
        assert!(!ColourMatrix::new(rows).is_finite());
    }

    #[test]
    fn test_transform() {
        let m = ColourMatrix::new([[2.0, 0.0, 0.0], [0.0, 0.5, 0.5], [1.0, 1.0, 1.0]]);
        assert_eq!(m.transform(10.0, 20.0, 30.0), [20.0, 25.0, 60.0]);
        assert_eq!(ColourMatrix::IDENTITY.transform(1.0, 2.5, 3.0), [1.0, 2.5, 3.0]);
    }
}
