//! Portuguese (Brazilian forms). "e" inside every segment and again before a
//! final group that is small or a round hundred ("mil e um", "mil e cem",
//! but "mil cento e um").

use crate::table::{
    Conjunction, ConjunctionRule, CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits,
    PluralRule, RuleTable, ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static ONES: [&str; 20] = [
    "zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez", "onze", "doze",
    "treze", "catorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];

static ONES_F: [&str; 20] = [
    "zero", "uma", "duas", "três", "quatro", "cinco", "seis", "sete", "oito", "nove", "dez", "onze", "doze",
    "treze", "catorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];

static TENS: [&str; 10] =
    ["", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa"];

static HUNDREDS: [&str; 10] = [
    "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos", "setecentos",
    "oitocentos", "novecentos",
];

fn ones_word(n: u32, ctx: &SegmentCtx) -> &'static str {
    if ctx.gender == Gender::Feminine {
        ONES_F[n as usize]
    } else {
        ONES[n as usize]
    }
}

fn below_hundred(n: u32, ctx: &SegmentCtx) -> String {
    if n < 20 {
        return ones_word(n, ctx).to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{tens} e {}", ones_word(ones, ctx)),
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds > 0 {
        if value == 100 {
            phrase.push_str("cem");
        } else {
            phrase.push_str(HUNDREDS[hundreds as usize]);
            if ctx.gender == Gender::Feminine && hundreds >= 2 {
                phrase.truncate(phrase.len() - 2);
                phrase.push_str("as");
            }
        }
    }

    if rem > 0 {
        if !phrase.is_empty() {
            phrase.push_str(" e ");
        }
        phrase.push_str(&below_hundred(rem, ctx));
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

static SCALES: [ScaleWord; 5] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("mil"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Binary { one: "milhão", other: "milhões" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Binary { one: "bilhão", other: "bilhões" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Binary { one: "trilhão", other: "trilhões" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Binary { one: "quatrilhão", other: "quatrilhões" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
];

static SMALL_ORDINALS: [&str; 10] =
    ["", "primeiro", "segundo", "terceiro", "quarto", "quinto", "sexto", "sétimo", "oitavo", "nono"];

static TENS_ORDINALS: [&str; 10] = [
    "", "décimo", "vigésimo", "trigésimo", "quadragésimo", "quinquagésimo", "sexagésimo", "septuagésimo",
    "octogésimo", "nonagésimo",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "centésimo", "ducentésimo", "trecentésimo", "quadringentésimo", "quingentésimo", "sexcentésimo",
    "septingentésimo", "octingentésimo", "noningentésimo",
];

fn small_ordinal(n: u64) -> String {
    let mut parts = Vec::new();
    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        parts.push(HUNDREDS_ORDINALS[hundreds]);
    }
    let tens = ((n / 10) % 10) as usize;
    if tens > 0 {
        parts.push(TENS_ORDINALS[tens]);
    }
    let ones = (n % 10) as usize;
    if ones > 0 {
        parts.push(SMALL_ORDINALS[ones]);
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 5] =
    ["milésimo", "milionésimo", "bilionésimo", "trilionésimo", "quatrilionésimo"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "pt",
    name: "Portuguese",
    zero: "zero",
    negative: "menos",
    decimal_mark: "vírgula",
    digits: ["zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove"],
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
        conjunction: Some(Conjunction {
            word: "e",
            rule: ConjunctionRule::FinalSmallOrRoundHundred,
            attached: false,
        }),
        gap_zero: None,
        scale_link: None,
    },
    ordinal: OrdinalRule {
        irregular: &[],
        units: OrdinalUnits::Composed { small: small_ordinal, scale: &SCALE_ORDINALS },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "real", other: "reais" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "centavo", other: "centavos" } },
        joiner: " e ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
