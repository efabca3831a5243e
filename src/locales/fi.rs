//! Finnish. Fully agglutinated segments ("kaksikymmentäyksi"), partitive
//! scale forms after a numeral greater than one, ordinals rebuilt
//! component by component through suffix substitution.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "nolla", "yksi", "kaksi", "kolme", "neljä", "viisi", "kuusi", "seitsemän", "kahdeksan", "yhdeksän",
    "kymmenen", "yksitoista", "kaksitoista", "kolmetoista", "neljätoista", "viisitoista", "kuusitoista",
    "seitsemäntoista", "kahdeksantoista", "yhdeksäntoista",
];

static TENS: [&str; 10] = [
    "", "", "kaksikymmentä", "kolmekymmentä", "neljäkymmentä", "viisikymmentä", "kuusikymmentä",
    "seitsemänkymmentä", "kahdeksankymmentä", "yhdeksänkymmentä",
];

static HUNDREDS: [&str; 10] = [
    "", "sata", "kaksisataa", "kolmesataa", "neljäsataa", "viisisataa", "kuusisataa", "seitsemänsataa",
    "kahdeksansataa", "yhdeksänsataa",
];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Lookup(&HUNDREDS),
    compose: TensOnesJoin::Joined,
    hundred_rem_sep: "",
    standalone_one: None,
};

static SCALES: [ScaleWord; 5] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Binary { one: "tuhat", other: "tuhatta" },
        one: OneNumeral::Omit,
        joined: true,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Binary { one: "miljoona", other: "miljoonaa" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Binary { one: "miljardi", other: "miljardia" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Binary { one: "biljoona", other: "biljoonaa" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Binary { one: "biljardi", other: "biljardia" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
];

/// Cardinal component to ordinal component, longest suffix first. "toista"
/// is its own ordinal.
static ORDINAL_STEMS: [(&str, &str); 17] = [
    ("kymmentä", "kymmenes"),
    ("kymmenen", "kymmenes"),
    ("seitsemän", "seitsemäs"),
    ("kahdeksan", "kahdeksas"),
    ("yhdeksän", "yhdeksäs"),
    ("toista", "toista"),
    ("tuhatta", "tuhannes"),
    ("tuhat", "tuhannes"),
    ("sataa", "sadas"),
    ("sata", "sadas"),
    ("yksi", "yhdes"),
    ("kaksi", "kahdes"),
    ("kolme", "kolmas"),
    ("neljä", "neljäs"),
    ("viisi", "viides"),
    ("kuusi", "kuudes"),
    ("nolla", "nollas"),
];

/// Every component of a Finnish ordinal inflects: decompose the compound
/// from the right, substituting each known cardinal piece.
fn ordinal_word(word: &str) -> String {
    fn rewrite(word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        for (cardinal, ordinal) in ORDINAL_STEMS {
            if let Some(head) = word.strip_suffix(cardinal) {
                return format!("{}{ordinal}", rewrite(head));
            }
        }
        // Scale and loan words take a plain -s after a final vowel.
        let stem = word.strip_suffix('a').unwrap_or(word);
        format!("{stem}s")
    }
    rewrite(word)
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "fi",
    name: "Finnish",
    zero: "nolla",
    negative: "miinus",
    decimal_mark: "pilkku",
    digits: ["nolla", "yksi", "kaksi", "kolme", "neljä", "viisi", "kuusi", "seitsemän", "kahdeksan", "yhdeksän"],
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
    ordinal: OrdinalRule {
        irregular: &[(1, "ensimmäinen"), (2, "toinen")],
        units: OrdinalUnits::FinalWord(ordinal_word),
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "euro", other: "euroa" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "sentti", other: "senttiä" } },
        joiner: " ja ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::NAIVE_LARGE_ORDINALS,
};

#[cfg(test)]
mod tests {
    use crate::locale;

    #[test]
    fn cardinals() {
        let fi = locale("fi").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("nolla", 0),
            ("yksitoista", 11),
            ("kaksikymmentäyksi", 21),
            ("sata", 100),
            ("satakaksikymmentäkolme", 123),
            ("tuhat", 1_000),
            ("kaksituhatta", 2_000),
            ("yksi miljoona", 1_000_000),
            ("kaksi miljoonaa", 2_000_000),
            ("miinus neljä", -4),
        ];
        for (expected, input) in cases {
            assert_eq!(fi.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals_inflect_every_component() {
        let fi = locale("fi").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("ensimmäinen", 1),
            ("toinen", 2),
            ("kolmas", 3),
            ("viides", 5),
            ("kymmenes", 10),
            ("yhdestoista", 11),
            ("kahdeskymmenes", 20),
            ("kahdeskymmenesyhdes", 21),
            ("sadas", 100),
            ("tuhannes", 1_000),
        ];
        for (expected, input) in cases {
            assert_eq!(fi.ordinal(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn currency() {
        let fi = locale("fi").unwrap();
        let amount = crate::CurrencyAmount::parse("2.50").unwrap();
        assert_eq!(fi.currency(&amount, &Default::default()), "kaksi euroa ja viisikymmentä senttiä");
    }
}
