//! Digit-group segmentation.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::{DigitGroup, Grouping};

/// Split a non-negative magnitude into digit-groups, most significant first,
/// assigning scale levels by position.
///
/// Zero-valued groups are retained: whether they are spoken (Mandarin 零) or
/// skipped is the assembler's decision. A zero magnitude yields a single
/// zero-valued units group; callers short-circuit to the locale's zero word
/// before reaching this point.
pub(crate) fn split(grouping: Grouping, n: &BigUint) -> Vec<DigitGroup> {
    let mut groups = Vec::new();
    let mut rest = n.clone();
    let mut level = 0u32;

    loop {
        let ceiling = BigUint::from(grouping.ceiling(level));
        let group = (&rest % &ceiling).to_u32().expect("group value below its ceiling");
        rest /= &ceiling;
        groups.push(DigitGroup { value: group, level });
        if rest.is_zero() {
            break;
        }
        level += 1;
    }

    groups.reverse();
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(grouping: Grouping, groups: &[DigitGroup]) -> BigUint {
        let mut total = BigUint::zero();
        for g in groups {
            total += BigUint::from(g.value) * BigUint::from(10u32).pow(grouping.exponent(g.level));
        }
        total
    }

    #[test]
    fn thousands_grouping() {
        let groups = split(Grouping::Thousands, &BigUint::from(1_234_567u32));
        assert_eq!(
            groups,
            vec![
                DigitGroup { value: 1, level: 2 },
                DigitGroup { value: 234, level: 1 },
                DigitGroup { value: 567, level: 0 },
            ]
        );
    }

    #[test]
    fn zero_groups_are_retained() {
        let groups = split(Grouping::Thousands, &BigUint::from(1_000_005u32));
        assert_eq!(
            groups,
            vec![
                DigitGroup { value: 1, level: 2 },
                DigitGroup { value: 0, level: 1 },
                DigitGroup { value: 5, level: 0 },
            ]
        );
    }

    #[test]
    fn myriad_grouping() {
        let groups = split(Grouping::Myriad, &BigUint::from(123_456_789u32));
        assert_eq!(
            groups,
            vec![
                DigitGroup { value: 1, level: 2 },
                DigitGroup { value: 2345, level: 1 },
                DigitGroup { value: 6789, level: 0 },
            ]
        );
    }

    #[test]
    fn south_asian_grouping() {
        // 12,34,56,789 in the Indian system: 12 crore, 34 lakh, 56 thousand, 789.
        let groups = split(Grouping::SouthAsian, &BigUint::from(123_456_789u32));
        assert_eq!(
            groups,
            vec![
                DigitGroup { value: 12, level: 3 },
                DigitGroup { value: 34, level: 2 },
                DigitGroup { value: 56, level: 1 },
                DigitGroup { value: 789, level: 0 },
            ]
        );
    }

    #[test]
    fn zero_yields_single_units_group() {
        let groups = split(Grouping::Thousands, &BigUint::zero());
        assert_eq!(groups, vec![DigitGroup { value: 0, level: 0 }]);
    }

    #[test]
    fn grouping_consistency() {
        // Reconstructing value * 10^exponent(level) over all groups must give
        // back the original magnitude for every strategy.
        let samples: &[u128] = &[
            0,
            7,
            10,
            999,
            1000,
            10_001,
            123_456,
            9_999_999,
            1_000_000_007,
            123_456_789_012_345_678_901_234_567u128,
        ];
        for &sample in samples {
            let n = BigUint::from(sample);
            for grouping in [Grouping::Thousands, Grouping::Myriad, Grouping::SouthAsian] {
                let groups = split(grouping, &n);
                assert_eq!(reconstruct(grouping, &groups), n, "{grouping:?} of {sample}");
                for g in &groups {
                    assert!(g.value < grouping.ceiling(g.level));
                }
            }
        }
    }
}
