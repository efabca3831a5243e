//! Vietnamese. Sandhi on final ones (mốt, lăm), lẻ at hundreds gaps,
//! "không trăm" padding on non-leading groups, thứ- ordinals.

use crate::table::{
    CurrencyRule, JoinRule, LocaleFlags, OneNumeral, OrdinalRule, OrdinalUnits, PluralRule, RuleTable,
    ScaleForms, ScaleWord, SegmentRenderer, UnitNoun,
};
use crate::{Gender, Grouping, RenderedSegment, SegmentCtx};

const DIGITS: [&str; 10] = ["không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín"];

fn below_hundred(n: u32) -> String {
    match n {
        0..=9 => DIGITS[n as usize].to_string(),
        10..=19 => match n % 10 {
            0 => "mười".to_string(),
            5 => "mười lăm".to_string(),
            ones => format!("mười {}", DIGITS[ones as usize]),
        },
        _ => {
            let tens = format!("{} mươi", DIGITS[(n / 10) as usize]);
            match n % 10 {
                0 => tens,
                1 => format!("{tens} mốt"),
                5 => format!("{tens} lăm"),
                ones => format!("{tens} {}", DIGITS[ones as usize]),
            }
        }
    }
}

fn segment(value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    let hundreds = value / 100;
    let rem = value % 100;

    let mut phrase = String::new();
    if hundreds > 0 {
        phrase.push_str(DIGITS[hundreds as usize]);
        phrase.push_str(" trăm");
    } else if !ctx.leading {
        // Inner groups always voice the hundreds position.
        phrase.push_str("không trăm");
    }

    if rem > 0 {
        if !phrase.is_empty() {
            if rem < 10 {
                phrase.push_str(" lẻ ");
            } else {
                phrase.push(' ');
            }
        }
        phrase.push_str(&below_hundred(rem));
    }

    RenderedSegment::new(phrase, hundreds > 0)
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

static SCALES: [ScaleWord; 5] =
    [rung(3, "nghìn"), rung(6, "triệu"), rung(9, "tỷ"), rung(12, "nghìn tỷ"), rung(15, "triệu tỷ")];

pub(crate) static TABLE: RuleTable = RuleTable {
    code: "vi",
    name: "Vietnamese",
    zero: "không",
    negative: "âm",
    decimal_mark: "phẩy",
    digits: DIGITS,
    grouping: Grouping::Thousands,
    default_gender: Gender::Masculine,
    plural: PluralRule::Fixed,
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
        irregular: &[(1, "thứ nhất"), (2, "thứ nhì"), (4, "thứ tư")],
        units: OrdinalUnits::Affix { prefix: "thứ ", suffix: "" },
    },
    currency: CurrencyRule {
        major: UnitNoun { forms: ScaleForms::Fixed("đồng") },
        minor: UnitNoun { forms: ScaleForms::Fixed("xu") },
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
        let vi = locale("vi").unwrap();
        let cases: Vec<(&str, i128)> = vec![
            ("không", 0),
            ("mười lăm", 15),
            ("hai mươi mốt", 21),
            ("hai mươi lăm", 25),
            ("một trăm lẻ năm", 105),
            ("một trăm mười lăm", 115),
            ("một nghìn", 1_000),
            ("một nghìn không trăm lẻ năm", 1_005),
            ("một nghìn hai trăm ba mươi bốn", 1_234),
            ("một triệu", 1_000_000),
            ("âm ba", -3),
        ];
        for (expected, input) in cases {
            assert_eq!(vi.cardinal(&input.into(), &Default::default()), expected, "{input}");
        }
    }

    #[test]
    fn ordinals() {
        let vi = locale("vi").unwrap();
        assert_eq!(vi.ordinal(1u64).unwrap(), "thứ nhất");
        assert_eq!(vi.ordinal(2u64).unwrap(), "thứ nhì");
        assert_eq!(vi.ordinal(3u64).unwrap(), "thứ ba");
        assert_eq!(vi.ordinal(4u64).unwrap(), "thứ tư");
        assert_eq!(vi.ordinal(21u64).unwrap(), "thứ hai mươi mốt");
    }
}
