//! Digit-template enumeration.
//!
//! A template fixes some decimal positions and wildcards the rest. Filling
//! every wildcard with the same digit 0-9 generates the template's family.
//! Each prime instantiates one template per choice of digit value and
//! non-empty subset of that value's occurrence positions.

/// Wildcard marker in template strings.
pub const WILDCARD: u8 = b'_';

/// Search-space prunes applied while enumerating templates. Both only skip
/// templates whose family cannot reach the target size.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRules {
    /// Leave the units position fixed. A family varying its units digit
    /// keeps at most the four members ending in 1, 3, 7, or 9.
    pub keep_units_fixed: bool,
    /// Only wildcard subsets whose size is a multiple of 3. Other sizes
    /// shift the digit sum through every residue class as the substituted
    /// digit varies, making at least three of the ten outcomes divisible
    /// by 3.
    pub triples_only: bool,
}

impl TemplateRules {
    /// Prunes that are safe for a target family size of `n`.
    pub fn for_target(n: u32) -> Self {
        TemplateRules {
            keep_units_fixed: n > 4,
            triples_only: n > 7,
        }
    }

    /// Exhaustive enumeration, no prunes.
    pub fn none() -> Self {
        TemplateRules {
            keep_units_fixed: false,
            triples_only: false,
        }
    }
}

/// Every template `x` instantiates under `rules`.
///
/// Digit values are visited in ascending order and occurrence subsets in
/// ascending bitmask order, so the output order is deterministic. Distinct
/// (value, subset) pairs always yield distinct templates: the wildcard
/// positions of a template recover the digit value that produced it.
pub fn wildcard_templates(x: u64, rules: &TemplateRules) -> Vec<String> {
    let digits = x.to_string().into_bytes();
    let units = digits.len() - 1;
    let mut templates = Vec::new();

    for value in b'0'..=b'9' {
        let mut positions: Vec<usize> = digits
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == value)
            .map(|(i, _)| i)
            .collect();
        if rules.keep_units_fixed {
            positions.retain(|&i| i != units);
        }
        if positions.is_empty() {
            continue;
        }

        for mask in 1u32..1 << positions.len() {
            if rules.triples_only && mask.count_ones() % 3 != 0 {
                continue;
            }
            let mut template = digits.clone();
            for (bit, &pos) in positions.iter().enumerate() {
                if mask >> bit & 1 == 1 {
                    template[pos] = WILDCARD;
                }
            }
            templates.push(String::from_utf8(template).expect("decimal digits are ascii"));
        }
    }

    templates
}

/// Fill every wildcard position with `digit`. Returns None when the result
/// would start with a zero and so fall short of the template's digit-length.
pub fn instantiate(template: &str, digit: u8) -> Option<u64> {
    debug_assert!(digit <= 9);
    let filled: String = template
        .chars()
        .map(|c| {
            if c == WILDCARD as char {
                (b'0' + digit) as char
            } else {
                c
            }
        })
        .collect();
    if filled.len() > 1 && filled.starts_with('0') {
        return None;
    }
    filled.parse().ok()
}
