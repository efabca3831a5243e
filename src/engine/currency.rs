//! Currency rendering: independent major/minor cardinal renders joined by
//! the locale's currency conjunction, with zero-part omission.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::engine::cardinal::{self, RenderOptions};
use crate::magnitude::CurrencyAmount;
use crate::table::RuleTable;

pub(crate) fn render(table: &'static RuleTable, amount: &CurrencyAmount, opts: &RenderOptions) -> String {
    let cur = &table.currency;
    let sep = cardinal::spacer(table);

    let major_zero = amount.major().is_zero();
    let minor = amount.minor();

    // Major part is spoken when non-zero, or when the whole amount is zero.
    let major_phrase = if !major_zero || minor == 0 {
        let gender = opts.gender.or(cur.major_gender).unwrap_or(table.default_gender);
        let words = cardinal::integer_words(table, table.scales, amount.major(), gender, false);
        let noun = cur.major.forms.select(table.plural, plural_operand(amount.major()));
        Some(format!("{words}{sep}{noun}"))
    } else {
        None
    };

    let minor_phrase = if minor > 0 {
        let gender = opts.gender.or(cur.minor_gender).unwrap_or(table.default_gender);
        let value = BigUint::from(minor);
        let words = cardinal::integer_words(table, table.scales, &value, gender, false);
        let noun = cur.minor.forms.select(table.plural, u64::from(minor));
        Some(format!("{words}{sep}{noun}"))
    } else {
        None
    };

    let body = match (major_phrase, minor_phrase) {
        (Some(major), Some(minor)) => format!("{major}{}{minor}", cur.joiner),
        (Some(major), None) => major,
        (None, Some(minor)) => minor,
        (None, None) => unreachable!("one of the parts is always spoken"),
    };

    if amount.is_negative() && !(major_zero && minor == 0) {
        format!("{}{sep}{body}", table.negative)
    } else {
        body
    }
}

/// Collapse an arbitrary-precision governing value into a u64 that preserves
/// the digit windows plural rules look at (last two digits, and the
/// distinction "exactly one" vs "ends in one").
fn plural_operand(n: &BigUint) -> u64 {
    match n.to_u64() {
        Some(v) => v,
        None => (n % 100u32).to_u64().expect("mod 100 fits") + 100,
    }
}
