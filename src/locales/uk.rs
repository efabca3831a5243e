//! Ukrainian. Same shape as Russian: feminine тисяча, three plural forms,
//! final-component ordinals.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "нуль", "один", "два", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять", "десять",
    "одинадцять", "дванадцять", "тринадцять", "чотирнадцять", "п'ятнадцять", "шістнадцять", "сімнадцять",
    "вісімнадцять", "дев'ятнадцять",
];

static ONES_F: [&str; 20] = [
    "нуль", "одна", "дві", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять", "десять",
    "одинадцять", "дванадцять", "тринадцять", "чотирнадцять", "п'ятнадцять", "шістнадцять", "сімнадцять",
    "вісімнадцять", "дев'ятнадцять",
];

static TENS: [&str; 10] = [
    "", "", "двадцять", "тридцять", "сорок", "п'ятдесят", "шістдесят", "сімдесят", "вісімдесят",
    "дев'яносто",
];

static HUNDREDS: [&str; 10] = [
    "", "сто", "двісті", "триста", "чотириста", "п'ятсот", "шістсот", "сімсот", "вісімсот", "дев'ятсот",
];

static TRIPLET: TripletTable = TripletTable {
    ones: &ONES,
    ones_feminine: Some(&ONES_F),
    tens: &TENS,
    hundreds: HundredsRule::Lookup(&HUNDREDS),
    compose: TensOnesJoin::Space,
    hundred_rem_sep: " ",
    standalone_one: None,
};

const fn rung(exponent: u32, one: &'static str, few: &'static str, many: &'static str) -> ScaleWord {
    ScaleWord {
        exponent,
        forms: ScaleForms::Triple { one, few, many },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Masculine,
    }
}

static SCALES: [ScaleWord; 7] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Triple { one: "тисяча", few: "тисячі", many: "тисяч" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    rung(6, "мільйон", "мільйони", "мільйонів"),
    rung(9, "мільярд", "мільярди", "мільярдів"),
    rung(12, "трильйон", "трильйони", "трильйонів"),
    rung(15, "квадрильйон", "квадрильйони", "квадрильйонів"),
    rung(18, "квінтильйон", "квінтильйони", "квінтильйонів"),
    rung(21, "секстильйон", "секстильйони", "секстильйонів"),
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "перший", "другий", "третій", "четвертий", "п'ятий", "шостий", "сьомий", "восьмий", "дев'ятий",
    "десятий", "одинадцятий", "дванадцятий", "тринадцятий", "чотирнадцятий", "п'ятнадцятий", "шістнадцятий",
    "сімнадцятий", "вісімнадцятий", "дев'ятнадцятий",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "двадцятий", "тридцятий", "сороковий", "п'ятдесятий", "шістдесятий", "сімдесятий",
    "вісімдесятий", "дев'яностий",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "сотий", "двохсотий", "трьохсотий", "чотирьохсотий", "п'ятисотий", "шістсотий", "семисотий",
    "восьмисотий", "дев'ятисотий",
];

fn small_ordinal(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rem = n % 100;

    let mut parts = Vec::new();
    if hundreds > 0 {
        if rem == 0 {
            return HUNDREDS_ORDINALS[hundreds].to_string();
        }
        parts.push(HUNDREDS[hundreds].to_string());
    }
    if rem >= 20 {
        let tens = (rem / 10) as usize;
        let ones = (rem % 10) as usize;
        if ones == 0 {
            parts.push(TENS_ORDINALS[tens].to_string());
        } else {
            parts.push(TENS[tens].to_string());
            parts.push(SMALL_ORDINALS[ones].to_string());
        }
    } else if rem > 0 {
        parts.push(SMALL_ORDINALS[rem as usize].to_string());
    }
    parts.join(" ")
}

static SCALE_ORDINALS: [&str; 3] = ["тисячний", "мільйонний", "мільярдний"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "uk",
    name: "Ukrainian",
    zero: "нуль",
    negative: "мінус",
    decimal_mark: "кома",
    digits: ["нуль", "один", "два", "три", "чотири", "п'ять", "шість", "сім", "вісім", "дев'ять"],
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::EastSlavic,
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
        irregular: &[],
        units: OrdinalUnits::Composed { small: small_ordinal, scale: &SCALE_ORDINALS },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Triple { one: "гривня", few: "гривні", many: "гривень" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "копійка", few: "копійки", many: "копійок" } },
        joiner: " ",
        major_gender: Some(Gender::Feminine),
        minor_gender: Some(Gender::Feminine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CurrencyAmount};

    #[test]
    fn cardinals() {
        let uk = locale("uk").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("нуль", 0),
            ("сорок два", 42),
            ("одна тисяча", 1_000),
            ("дві тисячі", 2_000),
            ("п'ять тисяч", 5_000),
            ("дванадцять тисяч", 12_000),
            ("один мільйон", 1_000_000),
            ("два мільйони", 2_000_000),
            ("мінус сім", -7),
        ];
        for (expected, input) in cases {
            assert_eq!(uk.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let uk = locale("uk").unwrap();
        assert_eq!(uk.ordinal(1u64).unwrap(), "перший");
        assert_eq!(uk.ordinal(21u64).unwrap(), "двадцять перший");
        assert_eq!(uk.ordinal(100u64).unwrap(), "сотий");
        assert_eq!(uk.ordinal(1_000u64).unwrap(), "тисячний");
    }

    #[test]
    fn currency() {
        let uk = locale("uk").unwrap();
        let amount = CurrencyAmount::parse("2.05").unwrap();
        assert_eq!(uk.currency(&amount, &Default::default()), "дві гривні п'ять копійок");
        let amount = CurrencyAmount::parse("1").unwrap();
        assert_eq!(uk.currency(&amount, &Default::default()), "одна гривня");
    }
}
