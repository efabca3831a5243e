//! Scale-word resolution.

use crate::table::{RuleTable, ScaleWord};

/// Resolve the inflected scale word for `level` governed by `value`.
///
/// A level past the end of the ladder means the rule table cannot express a
/// magnitude the segmenter produced. That is configuration incompleteness, a
/// programming error: fail loudly instead of substituting a placeholder that
/// would read as real output.
pub(crate) fn resolve(
    table: &RuleTable,
    scales: &'static [ScaleWord],
    level: u32,
    value: u32,
) -> (&'static str, &'static ScaleWord) {
    let rung = scales.get(level as usize - 1).unwrap_or_else(|| {
        panic!(
            "locale {}: scale ladder has no word for 10^{} (level {})",
            table.code,
            table.grouping.exponent(level),
            level
        )
    });
    (rung.forms.select(table.plural, u64::from(value)), rung)
}

#[cfg(test)]
mod tests {
    use crate::locales;

    #[test]
    #[should_panic(expected = "scale ladder has no word")]
    fn ladder_exhaustion_panics() {
        let table = locales::registry().get("en").copied().unwrap();
        super::resolve(table, table.scales, table.scales.len() as u32 + 1, 1);
    }
}
