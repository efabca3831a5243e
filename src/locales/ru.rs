//! Russian. Feminine agreement on тысяча, three plural forms throughout,
//! ordinals that inflect only the final component.

use crate::table::{
    CurrencyRule, HundredsRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule,
    RuleTable, ScaleForms, ScaleWord, SegmentRenderer, TensOnesJoin, TripletTable, UnitNoun,
};
use crate::{Gender, Grouping};

static ONES: [&str; 20] = [
    "ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять", "десять",
    "одиннадцать", "двенадцать", "тринадцать", "четырнадцать", "пятнадцать", "шестнадцать", "семнадцать",
    "восемнадцать", "девятнадцать",
];

static ONES_F: [&str; 20] = [
    "ноль", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять", "десять",
    "одиннадцать", "двенадцать", "тринадцать", "четырнадцать", "пятнадцать", "шестнадцать", "семнадцать",
    "восемнадцать", "девятнадцать",
];

static TENS: [&str; 10] = [
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят", "восемьдесят",
    "девяносто",
];

static HUNDREDS: [&str; 10] = [
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот", "девятьсот",
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

static SCALES: [ScaleWord; 10] = [
    ScaleWord {
        exponent: 3,
        forms: ScaleForms::Triple { one: "тысяча", few: "тысячи", many: "тысяч" },
        one: OneNumeral::Keep,
        joined: false,
        gender: Gender::Feminine,
    },
    rung(6, "миллион", "миллиона", "миллионов"),
    rung(9, "миллиард", "миллиарда", "миллиардов"),
    rung(12, "триллион", "триллиона", "триллионов"),
    rung(15, "квадриллион", "квадриллиона", "квадриллионов"),
    rung(18, "квинтиллион", "квинтиллиона", "квинтиллионов"),
    rung(21, "секстиллион", "секстиллиона", "секстиллионов"),
    rung(24, "септиллион", "септиллиона", "септиллионов"),
    rung(27, "октиллион", "октиллиона", "октиллионов"),
    rung(30, "нониллион", "нониллиона", "нониллионов"),
];

static SMALL_ORDINALS: [&str; 20] = [
    "", "первый", "второй", "третий", "четвёртый", "пятый", "шестой", "седьмой", "восьмой", "девятый",
    "десятый", "одиннадцатый", "двенадцатый", "тринадцатый", "четырнадцатый", "пятнадцатый", "шестнадцатый",
    "семнадцатый", "восемнадцатый", "девятнадцатый",
];

static TENS_ORDINALS: [&str; 10] = [
    "", "", "двадцатый", "тридцатый", "сороковой", "пятидесятый", "шестидесятый", "семидесятый",
    "восьмидесятый", "девяностый",
];

static HUNDREDS_ORDINALS: [&str; 10] = [
    "", "сотый", "двухсотый", "трёхсотый", "четырёхсотый", "пятисотый", "шестисотый", "семисотый",
    "восьмисотый", "девятисотый",
];

/// Only the final spoken component takes the ordinal form
/// ("сто двадцать пятый").
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

static SCALE_ORDINALS: [&str; 4] = ["тысячный", "миллионный", "миллиардный", "триллионный"];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "ru",
    name: "Russian",
    zero: "ноль",
    negative: "минус",
    decimal_mark: "запятая",
    digits: ["ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять"],
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
        major: UnitNoun { forms: ScaleForms::Triple { one: "рубль", few: "рубля", many: "рублей" } },
        minor: UnitNoun { forms: ScaleForms::Triple { one: "копейка", few: "копейки", many: "копеек" } },
        joiner: " ",
        major_gender: Some(Gender::Masculine),
        minor_gender: Some(Gender::Feminine),
    },
    flags: LocaleFlags::empty(),
};

#[cfg(test)]
mod tests {
    use crate::{locale, CurrencyAmount};

    #[test]
    fn cardinals() {
        let ru = locale("ru").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("ноль", 0),
            ("один", 1),
            ("двадцать один", 21),
            ("сто двадцать три", 123),
            ("одна тысяча", 1_000),
            ("две тысячи", 2_000),
            ("пять тысяч", 5_000),
            ("одиннадцать тысяч", 11_000),
            ("двадцать одна тысяча", 21_000),
            ("один миллион", 1_000_000),
            ("два миллиона", 2_000_000),
            ("пять миллионов", 5_000_000),
            ("минус сорок", -40),
        ];
        for (expected, input) in cases {
            assert_eq!(ru.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let ru = locale("ru").unwrap();
        let cases: Vec<(&str, u64)> = vec![
            ("первый", 1),
            ("восьмой", 8),
            ("двадцатый", 20),
            ("двадцать первый", 21),
            ("сотый", 100),
            ("сто двадцать пятый", 125),
            ("тысячный", 1_000),
            ("миллионный", 1_000_000),
        ];
        for (expected, input) in cases {
            assert_eq!(ru.ordinal(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn currency() {
        let ru = locale("ru").unwrap();
        let cases: Vec<(&str, &str)> = vec![
            ("один рубль", "1"),
            ("два рубля пятьдесят копеек", "2.50"),
            ("пять рублей", "5"),
            ("одна копейка", "0.01"),
            ("две копейки", "0.02"),
        ];
        for (expected, input) in cases {
            let amount = CurrencyAmount::parse(input).unwrap();
            assert_eq!(ru.currency(&amount, &Default::default()), expected, "{input}");
        }
    }
}
