//! Locale registry.
//!
//! One module per locale, each exporting a single `TABLE` static. The
//! registry maps lookup codes to tables once, lazily, and is the only place
//! that knows the full roster.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::table::RuleTable;

#[path = "locales/ar.rs"]
mod ar;
#[path = "locales/cs.rs"]
mod cs;
#[path = "locales/da.rs"]
mod da;
#[path = "locales/de.rs"]
mod de;
#[path = "locales/en.rs"]
mod en;
#[path = "locales/es.rs"]
mod es;
#[path = "locales/fi.rs"]
mod fi;
#[path = "locales/fil.rs"]
mod fil;
#[path = "locales/fr.rs"]
mod fr;
#[path = "locales/he.rs"]
mod he;
#[path = "locales/hi.rs"]
mod hi;
#[path = "locales/hr.rs"]
mod hr;
#[path = "locales/id.rs"]
mod id;
#[path = "locales/it.rs"]
mod it;
#[path = "locales/ja.rs"]
mod ja;
#[path = "locales/ko.rs"]
mod ko;
#[path = "locales/lt.rs"]
mod lt;
#[path = "locales/lv.rs"]
mod lv;
#[path = "locales/nl.rs"]
mod nl;
#[path = "locales/no.rs"]
mod no;
#[path = "locales/pl.rs"]
mod pl;
#[path = "locales/pt.rs"]
mod pt;
#[path = "locales/ru.rs"]
mod ru;
#[path = "locales/sr.rs"]
mod sr;
#[path = "locales/sv.rs"]
mod sv;
#[path = "locales/tr.rs"]
mod tr;
#[path = "locales/uk.rs"]
mod uk;
#[path = "locales/vi.rs"]
mod vi;
#[path = "locales/zh.rs"]
mod zh;

static TABLES: &[&RuleTable] = &[
    &ar::TABLE,
    &cs::TABLE,
    &da::TABLE,
    &de::TABLE,
    &en::TABLE,
    &es::TABLE,
    &fi::TABLE,
    &fil::TABLE,
    &fr::TABLE,
    &he::TABLE,
    &hi::TABLE,
    &hr::TABLE,
    &id::TABLE,
    &it::TABLE,
    &ja::TABLE,
    &ko::TABLE,
    &lt::TABLE,
    &lv::TABLE,
    &nl::TABLE,
    &no::TABLE,
    &pl::TABLE,
    &pt::TABLE,
    &ru::TABLE,
    &sr::TABLE,
    &sv::TABLE,
    &tr::TABLE,
    &uk::TABLE,
    &vi::TABLE,
    &zh::TABLE,
];

static REGISTRY: Lazy<HashMap<&'static str, &'static RuleTable>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(TABLES.len());
    for table in TABLES {
        // Each rung must denote the power of ten its ladder position implies,
        // or the declared exponents have drifted from the grouping strategy.
        for ladder in [Some(table.scales), table.alt_scales].into_iter().flatten() {
            for (i, rung) in ladder.iter().enumerate() {
                debug_assert_eq!(
                    rung.exponent,
                    table.grouping.exponent(i as u32 + 1),
                    "locale {}: ladder rung {} exponent drift",
                    table.code,
                    i
                );
            }
        }
        let clash = map.insert(table.code, *table);
        debug_assert!(clash.is_none(), "duplicate locale code {}", table.code);
    }
    map
});

pub(crate) fn registry() -> &'static HashMap<&'static str, &'static RuleTable> {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ConjunctionRule, LocaleFlags};

    #[test]
    fn ladder_exponents_match_their_levels() {
        for table in TABLES {
            for ladder in [Some(table.scales), table.alt_scales].into_iter().flatten() {
                for (i, rung) in ladder.iter().enumerate() {
                    let level = i as u32 + 1;
                    assert_eq!(
                        rung.exponent,
                        table.grouping.exponent(level),
                        "{}: rung at level {level}",
                        table.code
                    );
                }
            }
        }
    }

    #[test]
    fn optional_conjunction_locales_carry_the_flag() {
        for table in TABLES {
            let optional = table
                .join
                .conjunction
                .as_ref()
                .is_some_and(|conj| conj.rule == ConjunctionRule::Optional);
            if optional {
                assert!(table.flags.contains(LocaleFlags::OPTIONAL_AND), "{}", table.code);
            }
        }
    }
}
