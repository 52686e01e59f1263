//! Types for CFA addressing

use std::fmt;
use std::str::FromStr;

use crate::colour_correction::common::error::CorrectionError;

/// Standard 2x2 Bayer orderings, named by the top-left, top-right,
/// bottom-left and bottom-right sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CfaPattern {
    #[default]
    Rggb,
    Bggr,
    Grbg,
    Gbrg,
}

impl CfaPattern {
    pub const ALL: [CfaPattern; 4] = [
        CfaPattern::Rggb,
        CfaPattern::Bggr,
        CfaPattern::Grbg,
        CfaPattern::Gbrg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CfaPattern::Rggb => "RGGB",
            CfaPattern::Bggr => "BGGR",
            CfaPattern::Grbg => "GRBG",
            CfaPattern::Gbrg => "GBRG",
        }
    }
}

impl fmt::Display for CfaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CfaPattern {
    type Err = CorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RGGB" => Ok(CfaPattern::Rggb),
            "BGGR" => Ok(CfaPattern::Bggr),
            "GRBG" => Ok(CfaPattern::Grbg),
            "GBRG" => Ok(CfaPattern::Gbrg),
            _ => Err(CorrectionError::UnknownPattern(s.to_string())),
        }
    }
}

/// Colour role of a site within a 2x2 block.
///
/// `G1` is the green on the block's top row, `G2` the green on its bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    R,
    G1,
    G2,
    B,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::R, Role::G1, Role::G2, Role::B];
}
