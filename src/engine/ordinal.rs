//! Ordinal transform: cardinal rendering with the lowest-order non-zero
//! group replaced by an ordinal form.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::engine::cardinal::{self, RenderOptions};
use crate::engine::segment;
use crate::table::{OrdinalUnits, RuleTable};

/// Render the ordinal phrase for `n` (callers guarantee `n >= 1`).
pub(crate) fn render(table: &'static RuleTable, n: &BigUint, opts: &RenderOptions) -> String {
    if let Some(small) = n.to_u64() {
        if let Some(&(_, word)) = table.ordinal.irregular.iter().find(|&&(v, _)| v == small) {
            return word.to_string();
        }
    }

    let scales = cardinal::ladder(table, opts);
    let gender = opts.gender.unwrap_or(table.default_gender);

    match table.ordinal.units {
        OrdinalUnits::FinalWord(transform) => {
            let phrase = cardinal::integer_words(table, scales, n, gender, opts.optional_and);
            rewrite_final_word(&phrase, transform)
        }
        OrdinalUnits::Affix { prefix, suffix } => {
            let phrase = cardinal::integer_words(table, scales, n, gender, opts.optional_and);
            format!("{prefix}{phrase}{suffix}")
        }
        OrdinalUnits::Composed { small, scale } => {
            let groups = segment::split(table.grouping, n);
            let lowest = *groups.iter().rev().find(|g| g.value > 0).expect("n >= 1");
            let exponent = table.grouping.exponent(lowest.level);
            let prefix_value = n - BigUint::from(lowest.value) * BigUint::from(10u32).pow(exponent);

            let mut out = String::new();
            if !prefix_value.is_zero() {
                out.push_str(&cardinal::integer_words(table, scales, &prefix_value, gender, false));
                out.push_str(table.join.group_sep);
            }
            if lowest.level == 0 {
                out.push_str(&small(u64::from(lowest.value)));
            } else {
                let word = scale.get(lowest.level as usize - 1).unwrap_or_else(|| {
                    panic!("locale {}: no ordinal scale word for 10^{exponent}", table.code)
                });
                if lowest.value > 1 {
                    let governing = BigUint::from(lowest.value);
                    out.push_str(&cardinal::integer_words(table, scales, &governing, gender, false));
                    out.push_str(table.join.group_sep);
                }
                out.push_str(word);
            }
            out
        }
    }
}

/// Rewrite the final word of a cardinal phrase, preserving the separator in
/// front of it ("twenty-one" keeps its hyphen).
fn rewrite_final_word(phrase: &str, transform: fn(&str) -> String) -> String {
    match phrase.rfind([' ', '-']) {
        Some(i) => {
            let (head, last) = phrase.split_at(i + 1);
            format!("{head}{}", transform(last))
        }
        None => transform(phrase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_word_rewrite_keeps_separators() {
        let shout = |w: &str| w.to_uppercase();
        assert_eq!(rewrite_final_word("twenty-one", shout), "twenty-ONE");
        assert_eq!(rewrite_final_word("one thousand", shout), "one THOUSAND");
        assert_eq!(rewrite_final_word("nine", shout), "NINE");
    }
}
