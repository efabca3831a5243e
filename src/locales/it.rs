//! Italian. Fully compounded segments with vowel elision ("ventuno",
//! "trentotto", "centottanta"), mille/mila, ordinals in -esimo.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static ONES: [&str; 20] = [
    "zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove", "dieci", "undici",
    "dodici", "tredici", "quattordici", "quindici", "sedici", "diciassette", "diciotto", "diciannove",
];

static TENS: [&str; 10] =
    ["", "", "venti", "trenta", "quaranta", "cinquanta", "sessanta", "settanta", "ottanta", "novanta"];

fn below_hundred(n: u32) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        // The tens word loses its final vowel before uno and otto.
        1 => format!("{}uno", elide(tens)),
        3 => format!("{tens}tré"),
        8 => format!("{}otto", elide(tens)),
        ones => format!("{tens}{}", ONES[ones as usize]),
    }
}

fn elide(word: &str) -> &str {
    &word[..word.len() - 1]
}

fn segment(value: u32, _ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds > 0 {
        if hundreds > 1 {
            phrase.push_str(ONES[hundreds as usize]);
        }
        phrase.push_str("cento");
    }

    if rem > 0 {
        let rest = below_hundred(rem);
        // cento elides before the o of otto/ottanta.
        if phrase.ends_with('o') && rest.starts_with('o') {
            phrase.pop();
        }
        phrase.push_str(&rest);
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

static SCALES: [ScaleWord; 5] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Binary { one: "mille", other: "mila" },
        one: OneNumeral::Omit,
        joined: true,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Binary { one: "milione", other: "milioni" },
        one: OneNumeral::Word("un"),
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Binary { one: "miliardo", other: "miliardi" },
        one: OneNumeral::Word("un"),
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Binary { one: "bilione", other: "bilioni" },
        one: OneNumeral::Word("un"),
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Binary { one: "biliardo", other: "biliardi" },
        one: OneNumeral::Word("un"),
        joined: false,
        gender: Gender::Masculine,
    },
];

fn ordinal_word(word: &str) -> String {
    if let Some(head) = word.strip_suffix("mila") {
        return format!("{head}millesimo");
    }
    if word == "mille" {
        return "millesimo".to_string();
    }
    if let Some(head) = word.strip_suffix("tré") {
        return format!("{head}treesimo");
    }
    // Drop the final vowel before -esimo.
    let mut stem = word.to_string();
    stem.pop();
    format!("{stem}esimo")
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "it",
    name: "Italian",
    zero: "zero",
    negative: "meno",
    decimal_mark: "virgola",
    digits: ["zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::OneOther,
    segment: SegmentRenderer::Custom(segment),
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
        irregular: &[
            (1, "primo"),
            (2, "secondo"),
            (3, "terzo"),
            (4, "quarto"),
            (5, "quinto"),
            (6, "sesto"),
            (7, "settimo"),
            (8, "ottavo"),
            (9, "nono"),
            (10, "decimo"),
            (1_000_000, "milionesimo"),
            (1_000_000_000, "miliardesimo"),
        ],
        units: OrdinalUnits::FinalWord(ordinal_word),
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("euro") },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "centesimo", other: "centesimi" } },
        joiner: " e ",
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
        let it = locale("it").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("zero", 0),
            ("ventuno", 21),
            ("ventitré", 23),
            ("trentotto", 38),
            ("cento", 100),
            ("centouno", 101),
            ("centottanta", 180),
            ("duecentoquarantadue", 242),
            ("mille", 1_000),
            ("duemila", 2_000),
            ("ventunomila", 21_000),
            ("un milione", 1_000_000),
            ("due milioni", 2_000_000),
            ("un miliardo", 1_000_000_000),
            ("meno sei", -6),
        ];
        for (expected, input) in cases {
            assert_eq!(it.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let it = locale("it").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("primo", 1),
            ("ottavo", 8),
            ("undicesimo", 11),
            ("ventesimo", 20),
            ("ventunesimo", 21),
            ("ventitreesimo", 23),
            ("centesimo", 100),
            ("millesimo", 1_000),
            ("duemillesimo", 2_000),
            ("milionesimo", 1_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(it.ordinal(input).unwrap(), expected, "{input}");
        }
    }
}
