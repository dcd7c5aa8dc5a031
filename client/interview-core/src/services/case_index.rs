/// Which list a test case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Standard,
    Custom,
}

/// 1-based ordinal used to match execution results back to the case that
/// produced them. Standard cases come first in sample order, then custom
/// cases in creation order, so ordinals over N standard and M custom cases
/// are exactly `{1, …, N+M}`.
///
/// Ordinals are recomputed against the current case counts at the moment a
/// request is issued. They are a per-request addressing scheme, not a
/// persisted identity: adding or removing a custom case between runs shifts
/// them.
pub fn ordinal_of(kind: CaseKind, position: usize, standard_count: usize) -> u32 {
    let ordinal = match kind {
        CaseKind::Standard => position + 1,
        CaseKind::Custom => standard_count + position + 1,
    };
    ordinal as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_cases_are_numbered_from_one() {
        assert_eq!(ordinal_of(CaseKind::Standard, 0, 3), 1);
        assert_eq!(ordinal_of(CaseKind::Standard, 2, 3), 3);
    }

    #[test]
    fn custom_cases_follow_standard_cases() {
        assert_eq!(ordinal_of(CaseKind::Custom, 0, 3), 4);
        assert_eq!(ordinal_of(CaseKind::Custom, 1, 3), 5);
    }

    #[test]
    fn ordinals_are_dense_and_unique() {
        for standard in 0..5usize {
            for custom in 0..5usize {
                let mut seen = HashSet::new();
                for i in 0..standard {
                    seen.insert(ordinal_of(CaseKind::Standard, i, standard));
                }
                for j in 0..custom {
                    seen.insert(ordinal_of(CaseKind::Custom, j, standard));
                }
                let expected: HashSet<u32> = (1..=(standard + custom) as u32).collect();
                assert_eq!(seen, expected, "N={} M={}", standard, custom);
            }
        }
    }
}
