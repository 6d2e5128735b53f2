//! Smallest prime in a digit-replacement family of a target size.
//!
//! Replacing the first digit of the 2-digit template `_3` yields six primes:
//! 13, 23, 43, 53, 73, and 83. `find_family(6)` returns exactly that family;
//! `find_family(7)` finds `56__3` with seven prime members led by 56003.
//! The search scans digit-lengths upward, collecting for every prime the
//! templates it instantiates, and stops at the first length where some
//! family reaches the target, keyed by its smallest member.

pub mod sieve;
pub mod template;

use std::collections::HashMap;
use std::fmt;

/// Smallest meaningful target: every prime alone satisfies n = 1.
pub const MIN_TARGET: u32 = 2;
/// Largest possible target: a template has one instantiation per digit 0-9.
pub const MAX_TARGET: u32 = 10;

/// A qualifying family together with how far the search ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyResult {
    /// Digit-template with wildcard positions marked `_`, e.g. `56__3`.
    pub template: String,
    /// Prime members, strictly ascending. May hold more than the target:
    /// the scan finishes its digit-length before returning.
    pub members: Vec<u64>,
    /// Digit-length of the template and of every member.
    pub digit_length: u32,
    /// Primes visited across all digit-lengths.
    pub primes_scanned: usize,
    /// Oracle high-water mark at return.
    pub highest_checked: u64,
}

/// The search's single failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyError {
    /// Requested family size outside [`MIN_TARGET`, `MAX_TARGET`].
    TargetOutOfRange(u32),
}

impl fmt::Display for FamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyError::TargetOutOfRange(n) => write!(
                f,
                "family size {} out of range: expected {} to {}",
                n, MIN_TARGET, MAX_TARGET
            ),
        }
    }
}

impl std::error::Error for FamilyError {}

/// Finds the digit-replacement family with at least `n` prime members whose
/// least member is smallest, searching digit-lengths in increasing order.
///
/// Families never span digit-lengths, so the template map resets at each
/// length. Within one length every family collects its members in ascending
/// order, and the first family to reach `n` members with the smallest least
/// member wins the pass.
pub fn find_family(n: u32) -> Result<FamilyResult, FamilyError> {
    if !(MIN_TARGET..=MAX_TARGET).contains(&n) {
        return Err(FamilyError::TargetOutOfRange(n));
    }

    let rules = template::TemplateRules::for_target(n);
    let target = n as usize;
    let mut cache = sieve::PrimeCache::new();
    let mut primes_scanned = 0usize;

    for d in 1u32.. {
        let lo = if d == 1 { 2 } else { 10u64.pow(d - 1) };
        let hi = 10u64.pow(d);
        let mut families: HashMap<String, Vec<u64>> = HashMap::new();
        let mut best: Option<(u64, String)> = None;

        for x in lo..hi {
            if !cache.is_prime(x) {
                continue;
            }
            primes_scanned += 1;

            for tpl in template::wildcard_templates(x, &rules) {
                let members = families.entry(tpl.clone()).or_default();
                members.push(x);
                if members.len() == target {
                    let least = members[0];
                    match &best {
                        Some((b, _)) if *b <= least => {}
                        _ => best = Some((least, tpl)),
                    }
                }
            }
        }

        if let Some((_, tpl)) = best {
            let members = families
                .remove(&tpl)
                .expect("winning template tracked in this pass");
            return Ok(FamilyResult {
                template: tpl,
                members,
                digit_length: d,
                primes_scanned,
                highest_checked: cache.highest_checked(),
            });
        }
    }
    unreachable!("digit-length loop only exits by returning")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_targets() {
        assert_eq!(find_family(0), Err(FamilyError::TargetOutOfRange(0)));
        assert_eq!(find_family(1), Err(FamilyError::TargetOutOfRange(1)));
        assert_eq!(find_family(11), Err(FamilyError::TargetOutOfRange(11)));
    }

    #[test]
    fn test_smallest_targets_resolve_at_one_digit() {
        // The single-digit template `_` reaches two members at x = 3 and
        // finishes the pass holding all four one-digit primes.
        for n in 2..=4 {
            let result = find_family(n).unwrap();
            assert_eq!(result.template, "_", "n = {}", n);
            assert_eq!(result.members, vec![2, 3, 5, 7], "n = {}", n);
            assert_eq!(result.digit_length, 1);
        }
    }

    #[test]
    fn test_five_member_family() {
        let result = find_family(5).unwrap();
        assert_eq!(result.template, "_1");
        assert_eq!(result.members, vec![11, 31, 41, 61, 71]);
        assert_eq!(result.digit_length, 2);
    }

    #[test]
    fn test_error_display() {
        let err = FamilyError::TargetOutOfRange(11);
        assert_eq!(
            err.to_string(),
            "family size 11 out of range: expected 2 to 10"
        );
    }
}
