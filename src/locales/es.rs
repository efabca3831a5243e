//! Spanish. Fused twenties ("veintiuno"), apocope before scale words
//! ("veintiún mil", "un millón"), lexicalized hundreds, and the native long
//! scale where 10^9 is "mil millones".

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

static ONES: [&str; 20] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez", "once", "doce",
    "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho", "diecinueve",
];

static TWENTIES: [&str; 10] = [
    "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro", "veinticinco", "veintiséis",
    "veintisiete", "veintiocho", "veintinueve",
];

static TENS: [&str; 10] =
    ["", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa"];

static HUNDREDS: [&str; 10] = [
    "", "ciento", "doscientos", "trescientos", "cuatrocientos", "quinientos", "seiscientos", "setecientos",
    "ochocientos", "novecientos",
];

fn one_word(ctx: &SegmentCtx) -> &'static str {
    if ctx.before_scale {
        "un"
    } else if ctx.gender == Gender::Feminine {
        "una"
    } else {
        "uno"
    }
}

fn below_hundred(n: u32, ctx: &SegmentCtx) -> String {
    match n {
        1 => one_word(ctx).to_string(),
        2..=19 => ONES[n as usize].to_string(),
        20..=29 => match n {
            21 if ctx.before_scale => "veintiún".to_string(),
            21 if ctx.gender == Gender::Feminine => "veintiuna".to_string(),
            _ => TWENTIES[(n - 20) as usize].to_string(),
        },
        _ => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                1 => format!("{tens} y {}", one_word(ctx)),
                ones => format!("{tens} y {}", ONES[ones as usize]),
            }
        }
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds > 0 {
        if value == 100 {
            phrase.push_str("cien");
        } else {
            phrase.push_str(HUNDREDS[hundreds as usize]);
            if ctx.gender == Gender::Feminine && hundreds >= 2 {
                // doscientas, quinientas: swap the masculine plural ending.
                phrase.truncate(phrase.len() - 2);
                phrase.push_str("as");
            }
        }
    }

    if rem > 0 {
        if !phrase.is_empty() {
            phrase.push(' ');
        }
        phrase.push_str(&below_hundred(rem, ctx));
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

static SCALES: [ScaleWord; 6] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Fixed("mil"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 6,
        forms: ScaleForms::Binary { one: "millón", other: "millones" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 9,
        forms: ScaleForms::Fixed("mil millones"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 12,
        forms: ScaleForms::Binary { one: "billón", other: "billones" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 15,
        forms: ScaleForms::Fixed("mil billones"),
        one: OneNumeral::Omit,
        joined: false,
        gender: Gender::Masculine,
    },
    ScaleWord {
        exponent: 18,
        forms: ScaleForms::Binary { one: "trillón", other: "trillones" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    },
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "primero", "segundo", "tercero", "cuarto", "quinto", "sexto", "séptimo", "octavo", "noveno", "décimo",
    "undécimo", "duodécimo", "decimotercero", "decimocuarto", "decimoquinto", "decimosexto", "decimoséptimo",
    "decimoctavo", "decimonoveno",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "vigésimo", "trigésimo", "cuadragésimo", "quincuagésimo", "sexagésimo", "septuagésimo",
    "octogésimo", "nonagésimo",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "centésimo", "ducentésimo", "tricentésimo", "cuadringentésimo", "quingentésimo", "sexcentésimo",
    "septingentésimo", "octingentésimo", "noningentésimo",
];

fn small_ordinal(n: u64) -> String {
    let mut parts = Vec::new();
    let hundreds = (n / 100) as usize;
    if hundreds > 0 {
        parts.push(HUNDREDS_ORDINALS[hundreds].to_string());
    }
    let rem = n % 100;
    if rem >= 20 {
        let mut word = TENS_ORDINALS[(rem / 10) as usize].to_string();
        if rem % 10 > 0 {
            word.push(' ');
            word.push_str(SMALL_ORDINALS[(rem % 10) as usize]);
        }
        parts.push(word);
    } else if rem > 0 {
        parts.push(SMALL_ORDINALS[rem as usize].to_string());
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 6] =
    ["milésimo", "millonésimo", "milmillonésimo", "billonésimo", "milbillonésimo", "trillonésimo"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "es",
    name: "Spanish",
    zero: "cero",
    negative: "menos",
    decimal_mark: "coma",
    digits: ["cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve"],
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
        irregular: &[],
        units: OrdinalUnits::Composed { small: small_ordinal, scale: &SCALE_ORDINALS },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Binary { one: "dólar", other: "dólares" } },
        minor: UnitNoun { forms: ScaleForms::Binary { one: "centavo", other: "centavos" } },
        joiner: " con ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
