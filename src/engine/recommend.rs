//! Random tool recommendation over an optional criteria subset.

use crate::catalog::ToolRecord;
use crate::engine::filter::{FilterCriteria, filter};
use rand::Rng;

/// Uniformly random pick from the tools matching `criteria`; `None` when
/// nothing matches. The RNG comes from the caller so selection is seedable
/// in tests.
pub fn random_pick<'a, R: Rng + ?Sized>(
    tools: &'a [ToolRecord],
    criteria: &FilterCriteria,
    rng: &mut R,
) -> Option<&'a ToolRecord> {
    let eligible = filter(tools, criteria);
    if eligible.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..eligible.len());
    Some(eligible[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::tool;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_honors_criteria() {
        let tools = vec![
            tool("wget", "net", Some("beginner"), &[]),
            tool("curl", "net", Some("advanced"), &[]),
            tool("jq", "dev", Some("beginner"), &[]),
        ];
        let criteria = FilterCriteria {
            category: Some("net".to_string()),
            difficulty: Some("advanced".to_string()),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            let pick = random_pick(&tools, &criteria, &mut rng).expect("pick");
            assert_eq!(pick.name, "curl");
        }
    }

    #[test]
    fn empty_subset_yields_none() {
        let tools = vec![tool("wget", "net", None, &[])];
        let criteria = FilterCriteria {
            category: Some("games".to_string()),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_pick(&tools, &criteria, &mut rng).is_none());
    }
}
