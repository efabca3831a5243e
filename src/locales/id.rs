//! Indonesian. se- fused one-forms (seratus, seribu), spaced puluh/belas
//! compounds, ke- ordinals.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh",
    "sebelas", "dua belas", "tiga belas", "empat belas", "lima belas", "enam belas", "tujuh belas",
    "delapan belas", "sembilan belas",
];

static TENS: [&str; 10] = [
    "", "", "dua puluh", "tiga puluh", "empat puluh", "lima puluh", "enam puluh", "tujuh puluh",
    "delapan puluh", "sembilan puluh",
];

static HUNDREDS: [&str; 10] = [
    "", "seratus", "dua ratus", "tiga ratus", "empat ratus", "lima ratus", "enam ratus", "tujuh ratus",
    "delapan ratus", "sembilan ratus",
];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Lookup(&HUNDREDS),
    compose: TensOnesJoin::Space,
    hundred_rem_sep: " ",
    standalone_one: None,
};

static SCALES: [ScaleWord; 4] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Binary { one: "seribu", other: "ribu" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Binary { one: "sejuta", other: "juta" },
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Fixed("miliar"),
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Fixed("triliun"),
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "id",
    name: "Indonesian",
    zero: "nol",
    negative: "minus",
    decimal_mark: "koma",
    digits: ["nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule { irregular: &[(1, "pertama")], units: OrdinalUnits::Affix { prefix: "ke", suffix: "" } },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("rupiah") },
        minor: UnitNoun { forms: ScaleForms::Fixed("sen") },
        joiner: " ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let id = locale("id").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nol", 0),
            ("sepuluh", 10),
            ("sebelas", 11),
            ("dua belas", 12),
            ("dua puluh satu", 21),
            ("seratus", 100),
            ("seratus lima", 105),
            ("dua ratus", 200),
            ("seribu", 1_000),
            ("dua ribu", 2_000),
            ("sejuta", 1_000_000),
            ("dua juta", 2_000_000),
            ("satu miliar", 1_000_000_000),
            ("minus tujuh", -7),
        ];
        for (expected, input) in cases {
            assert_eq!(id.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let id = locale("id").unwrap();
        assert_eq!(id.ordinal(1u64).unwrap(), "pertama");
        assert_eq!(id.ordinal(2u64).unwrap(), "kedua");
        assert_eq!(id.ordinal(21u64).unwrap(), "kedua puluh satu");
    }

    #[test]
    fn currency() {
        let id = locale("id").unwrap();
        let amount = crate::CurrencyAmount::parse("1500").unwrap();
        assert_eq!(id.currency(&amount, &Default::default()), "seribu lima ratus rupiah");
    }
}
