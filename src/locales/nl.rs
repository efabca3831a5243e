//! Dutch. Inverted tens with a diaeresis after a vowel-final ones word
//! ("tweeëntwintig"), compounds below a million, and an optional "en"
//! conjunction some speakers insert ("duizend en een").

use crate::table::{
    Conjunction, ConjunctionRule, CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule,
    OrdinalUnits, PluralRule, RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable,
    UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nul", "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien", "elf", "twaalf",
    "dertien", "veertien", "vijftien", "zestien", "zeventien", "achttien", "negentien",
];

static TENS: [&str; 10] =
    ["", "", "twintig", "dertig", "veertig", "vijftig", "zestig", "zeventig", "tachtig", "negentig"];

fn fuse(tens: &'static str, ones: &'static str) -> String {
    // The connector takes a diaeresis after a vowel-final ones word.
    let connector = if ones.ends_with(['e', 'a', 'o', 'u', 'i']) { "ën" } else { "en" };
    format!("{ones}{connector}{tens}")
}

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Multiplier { word: "honderd", omit_one: true, joined: true },
    compose: TensOnesJoin::Fuse(fuse),
    hundred_rem_sep: "",
    standalone_one: None,
};

const fn big(exponent: u32, one: &'static str, other: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Binary { one, other },
        one: OneNumeral::Word("een"),
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 7] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("duizend"),
        one: OneNumeral::Omit,
        joined: true,
        gender: Gender::Masculine,
    },
    // Scale nouns stay uninflected after a numeral ("twee miljoen").
    big(6, "miljoen", "miljoen"),
    big(9, "miljard", "miljard"),
    big(12, "biljoen", "biljoen"),
    big(15, "biljard", "biljard"),
    big(18, "triljoen", "triljoen"),
    big(21, "triljard", "triljard"),
];

fn ordinal_word(word: &str) -> String {
    const STE: [&str; 7] = ["honderd", "duizend", "miljoen", "miljard", "biljoen", "biljard", "triljoen"];
    if let Some(head) = word.strip_suffix("drie") {
        return format!("{head}derde");
    }
    if word.ends_with("een") {
        let head = &word[..word.len() - 3];
        return format!("{head}eerste");
    }
    if word.ends_with("tig") || word.ends_with("acht") || STE.iter().any(|s| word.ends_with(s)) {
        return format!("{word}ste");
    }
    format!("{word}de")
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "nl",
    name: "Dutch",
    zero: "nul",
    negative: "min",
    decimal_mark: "komma",
    digits: ["nul", "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 2,
        conjunction: Some(Conjunction { word: "en", rule: ConjunctionRule::Optional, attached: false }),
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::FinalWord(ordinal_word) },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("euro") },
        minor: UnitNoun { forms: ScaleForms::Fixed("cent") },
        joiner: " en ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::OPTIONAL_AND,
};

#[cfg(test)]
mod tests {
    use crate::{locale, CardinalOptions};

    #[test]
    fn cardinals() {
        let nl = locale("nl").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nul", 0),
            ("een", 1),
            ("tweeëntwintig", 22),
            ("vierentwintig", 24),
            ("drieëndertig", 33),
            ("honderd", 100),
            ("honderdeen", 101),
            ("tweehonderdvijfenveertig", 245),
            ("duizend", 1_000),
            ("tweeduizend", 2_000),
            ("eenentwintigduizend", 21_000),
            ("een miljoen", 1_000_000),
            ("twee miljoen", 2_000_000),
            ("min negen", -9),
        ];
        for (expected, input) in cases {
            assert_eq!(nl.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn optional_conjunction() {
        let nl = locale("nl").unwrap();
        let plain = nl.cardinal(&1_001i128.into(), &Default::default());
        assert_eq!(plain, "duizendeen");
        let spoken = nl.cardinal(&1_001i128.into(), &CardinalOptions { optional_and: true, ..Default::default() });
        assert_eq!(spoken, "duizendeneen");
    }

    #[test]
    fn ordinals() {
        let nl = locale("nl").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("eerste", 1),
            ("tweede", 2),
            ("derde", 3),
            ("vierde", 4),
            ("achtste", 8),
            ("tiende", 10),
            ("twintigste", 20),
            ("eenentwintigste", 21),
            ("honderdste", 100),
            ("honderdeerste", 101),
            ("duizendste", 1_000),
        ];
        for (expected, input) in cases {
            assert_eq!(nl.ordinal(input).unwrap(), expected, "{input}");
        }
    }
}
