use crate::colour_correction::pattern::types::{CfaPattern, Role};

/// Offset `(dx, dy)` of `role` inside a 2x2 block laid out as `pattern`.
///
/// The block origin does not shift the phase: every block is assumed to start
/// on the pattern's top-left site.
#[inline]
pub fn position(pattern: CfaPattern, role: Role) -> (usize, usize) {
    match (pattern, role) {
        (CfaPattern::Rggb, Role::R) => (0, 0),
        (CfaPattern::Rggb, Role::G1) => (1, 0),
        (CfaPattern::Rggb, Role::G2) => (0, 1),
        (CfaPattern::Rggb, Role::B) => (1, 1),

        (CfaPattern::Bggr, Role::R) => (1, 1),
        (CfaPattern::Bggr, Role::G1) => (1, 0),
        (CfaPattern::Bggr, Role::G2) => (0, 1),
        (CfaPattern::Bggr, Role::B) => (0, 0),

        (CfaPattern::Grbg, Role::R) => (1, 0),
        (CfaPattern::Grbg, Role::G1) => (0, 0),
        (CfaPattern::Grbg, Role::G2) => (1, 1),
        (CfaPattern::Grbg, Role::B) => (0, 1),

        (CfaPattern::Gbrg, Role::R) => (0, 1),
        (CfaPattern::Gbrg, Role::G1) => (0, 0),
        (CfaPattern::Gbrg, Role::G2) => (1, 1),
        (CfaPattern::Gbrg, Role::B) => (1, 0),
    }
}

/// Absolute coordinates of `role` for the block whose top-left site is `(x, y)`.
#[inline]
pub fn site(pattern: CfaPattern, role: Role, x: usize, y: usize) -> (usize, usize) {
    let (dx, dy) = position(pattern, role);
    (x + dx, y + dy)
}

/// Offsets of all four roles, in `[R, G1, G2, B]` order.
pub fn offsets(pattern: CfaPattern) -> [(usize, usize); 4] {
    Role::ALL.map(|role| position(pattern, role))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offsets_are_a_bijection() {
        let block: HashSet<(usize, usize)> = [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect();
        for pattern in CfaPattern::ALL {
            let mapped: HashSet<(usize, usize)> = offsets(pattern).into_iter().collect();
            assert_eq!(mapped, block, "pattern {pattern}");
        }
    }

    #[test]
    fn test_offset_table() {
        let expected = [
            (CfaPattern::Rggb, [(0, 0), (1, 0), (0, 1), (1, 1)]),
            (CfaPattern::Bggr, [(1, 1), (1, 0), (0, 1), (0, 0)]),
            (CfaPattern::Grbg, [(1, 0), (0, 0), (1, 1), (0, 1)]),
            (CfaPattern::Gbrg, [(0, 1), (0, 0), (1, 1), (1, 0)]),
        ];
        for (pattern, offsets_rgb) in expected {
            assert_eq!(offsets(pattern), offsets_rgb, "pattern {pattern}");
        }
    }

    #[test]
    fn test_table_matches_pattern_names() {
        // Name letters read top-left, top-right, bottom-left, bottom-right.
        for pattern in CfaPattern::ALL {
            let name = pattern.as_str().as_bytes();
            let letter = |(dx, dy): (usize, usize)| name[dy * 2 + dx];
            assert_eq!(letter(position(pattern, Role::R)), b'R');
            assert_eq!(letter(position(pattern, Role::B)), b'B');
            assert_eq!(letter(position(pattern, Role::G1)), b'G');
            assert_eq!(letter(position(pattern, Role::G2)), b'G');
        }
    }

    #[test]
    fn test_site_adds_block_origin() {
        assert_eq!(site(CfaPattern::Rggb, Role::B, 4, 6), (5, 7));
        assert_eq!(site(CfaPattern::Grbg, Role::R, 2, 0), (3, 0));
        assert_eq!(site(CfaPattern::Gbrg, Role::G1, 10, 10), (10, 10));
    }

    #[test]
    fn test_pattern_parsing() {
        assert_eq!("gbrg".parse::<CfaPattern>().unwrap(), CfaPattern::Gbrg);
        assert_eq!(" BGGR ".parse::<CfaPattern>().unwrap(), CfaPattern::Bggr);
        assert!("RGBG".parse::<CfaPattern>().is_err());
        assert_eq!(CfaPattern::default(), CfaPattern::Rggb);
    }
}
