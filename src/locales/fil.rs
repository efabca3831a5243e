//! Filipino (Tagalog). labing- teens, 't-contracted tens ("dalawampu't
//! isa"), linker -ng / na between a numeral and its scale word.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "sero", "isa", "dalawa", "tatlo", "apat", "lima", "anim", "pito", "walo", "siyam", "sampu",
    "labing-isa", "labindalawa", "labintatlo", "labing-apat", "labinlima", "labing-anim", "labimpito",
    "labing-walo", "labinsiyam",
];

static TENS: [&str; 10] = [
    "", "", "dalawampu", "tatlumpu", "apatnapu", "limampu", "animnapu", "pitumpu", "walumpu", "siyamnapu",
];

static HUNDREDS: [&str; 10] = [
    "", "sandaan", "dalawang daan", "tatlong daan", "apat na daan", "limang daan", "anim na daan",
    "pitong daan", "walong daan", "siyam na daan",
];

fn fuse(tens: &'static str, ones: &'static str) -> String {
    format!("{tens}'t {ones}")
}

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: None,
    tens: &TENS,
    hundreds: HundredsRule::Lookup(&HUNDREDS),
    compose: TensOnesJoin::Fuse(fuse),
    hundred_rem_sep: " at ",
    standalone_one: None,
};

/// The linker depends on the final sound: vowel takes -ng, n takes -g,
/// anything else a separate "na".
fn link(phrase: &str) -> String {
    if phrase.ends_with(['a', 'e', 'i', 'o', 'u']) {
        format!("{phrase}ng")
    } else if phrase.ends_with('n') {
        format!("{phrase}g")
    } else {
        format!("{phrase} na")
    }
}

const fn rung(exponent: u32, word: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Fixed(word),
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 4] = [rung(3, "libo"), rung(6, "milyon"), rung(9, "bilyon"), rung(12, "trilyon")];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "fil",
    name: "Filipino",
    zero: "sero",
    negative: "negatibo",
    decimal_mark: "punto",
    digits: ["sero", "isa", "dalawa", "tatlo", "apat", "lima", "anim", "pito", "walo", "siyam"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::Fixed,
    segment: SegmentRenderer::Triplet(&TRIPLET),
    scales: &SCALES,
    alt_scales: None,
    join: JoinRule {
        group_sep: " ",
        scale_sep: " ",
        compound_below: 0,
        conjunction: None,
        gap_zero: None,
        scale_link: Some(link),
    },
    ordinal: OrdinalRule {
        irregular: &[(1, "una"), (2, "ikalawa"), (3, "ikatlo"), (4, "ikaapat"), (5, "ikalima")],
        units: OrdinalUnits::Affix { prefix: "ika-", suffix: "" },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("piso") },
        minor: UnitNoun { forms: ScaleForms::Fixed("sentimo") },
        joiner: " at ",
        major_gender: None,
        minor_gender: None,
    },
    flags: LocaleFlags::empty(),
};
