//! French. Vigesimal seventies through nineties, "et un" before a bare one,
//! plural "cents"/"quatre-vingts" only when the segment closes the number.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static ONES: [&str; 17] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze", "douze",
    "treize", "quatorze", "quinze", "seize",
];

static TENS: [&str; 7] = ["vingt", "trente", "quarante", "cinquante", "soixante", "", ""];

fn below_twenty(n: u32, ctx: &SegmentCtx) -> String {
    if n == 1 && ctx.gender == crate::Gender::Feminine {
        return "une".to_string();
    }
    if n < 17 {
        return ONES[n as usize].to_string();
    }
    format!("dix-{}", ONES[(n - 10) as usize])
}

fn below_hundred(n: u32, ctx: &SegmentCtx, closes: bool) -> String {
    match n {
        0..=19 => below_twenty(n, ctx),
        20..=69 => {
            let tens = TENS[(n / 10 - 2) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens} et {}", below_twenty(1, ctx)),
                ones => format!("{tens}-{}", below_twenty(ones, ctx)),
            }
        }
        70..=79 => {
            if n == 71 {
                "soixante et onze".to_string()
            } else {
                format!("soixante-{}", below_twenty(n - 60, ctx))
            }
        }
        80 => {
            if closes {
                "quatre-vingts".to_string()
            } else {
                "quatre-vingt".to_string()
            }
        }
        _ => format!("quatre-vingt-{}", below_twenty(n - 80, ctx)),
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let closes = ctx.final_group && !ctx.before_scale;
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds == 1 {
        phrase.push_str("cent");
    } else if hundreds > 1 {
        phrase.push_str(ONES[hundreds as usize]);
        phrase.push_str(" cent");
        if rem == 0 && closes {
            phrase.push('s');
        }
    }

    if rem > 0 {
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(&below_hundred(rem, ctx, closes));
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

const fn big(exponent: u32, one: &'static str, other: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Binary { one, other },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 6] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("mille"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    big(6, "million", "millions"),
    big(9, "milliard", "milliards"),
    big(12, "billion", "billions"),
    big(15, "billiard", "billiards"),
    big(18, "trillion", "trillions"),
];

fn ordinal_word(word: &str) -> String {
    match word {
        "un" => "unième".to_string(),
        "une" => "unième".to_string(),
        "cinq" => "cinquième".to_string(),
        "neuf" => "neuvième".to_string(),
        w => {
            // Plural agreement s ("cents", "quatre-vingts", "millions")
            // drops before the suffix; the s of "trois" stays.
            let stem = if w.ends_with("ts") || w.ends_with("ons") { &w[..w.len() - 1] } else { w };
            let stem = stem.strip_suffix('e').unwrap_or(stem);
            format!("{stem}ième")
        }
    }
}

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "fr",
    name: "French",
    zero: "zéro",
    negative: "moins",
    decimal_mark: "virgule",
    digits: ["zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf"],
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
        irregular: &[(1, "premier"), (1_000_000, "millionième"), (1_000_000_000, "milliardième")],
        units: OrdinalUnits::FinalWord(ordinal_word),
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "euro", other: "euros" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "centime", other: "centimes" } },
        joiner: " et ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
