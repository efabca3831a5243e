//! Segment word building: one digit-group's value to a word phrase.

use crate::table::{HundredsRule, MyriadTable, RuleTable, SegmentRenderer, TensOnesJoin, TripletTable};
use crate::{Gender, RenderedSegment, SegmentCtx};

/// Render one group's value through the locale's segment strategy.
pub(crate) fn render_group(table: &RuleTable, value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    match &table.segment {
        SegmentRenderer::Triplet(t) => triplet(t, value, ctx),
        SegmentRenderer::Myriad(m) => myriad(m, value, ctx),
        SegmentRenderer::Custom(f) => f(value, ctx),
    }
}

/// Generic 3-digit builder: hundreds digit, then tens+ones, composed per the
/// locale's table. `has_hundred` comes from the hundreds digit, never from
/// the produced text.
fn triplet(t: &TripletTable, value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    debug_assert!(value > 0 && value < 1000);
    let hundreds = (value / 100) as usize;
    let rem = value % 100;

    let mut phrase = String::new();
    let mut joined_hundred = false;

    if hundreds > 0 {
        match t.hundreds {
            HundredsRule::Multiplier { word, omit_one, joined } => {
                if hundreds == 1 && omit_one {
                    phrase.push_str(word);
                } else {
                    phrase.push_str(ones_word(t, ctx, hundreds));
                    if !joined {
                        phrase.push(' ');
                    }
                    phrase.push_str(word);
                }
                joined_hundred = joined;
            }
            HundredsRule::Lookup(words) => phrase.push_str(words[hundreds]),
        }
    }

    if rem > 0 {
        if !phrase.is_empty() {
            phrase.push_str(if joined_hundred { "" } else { t.hundred_rem_sep });
        }
        push_tens_ones(t, ctx, rem, &mut phrase);
    }

    RenderedSegment::new(phrase, hundreds > 0)
}

fn push_tens_ones(t: &TripletTable, ctx: &SegmentCtx, rem: u32, out: &mut String) {
    debug_assert!(rem > 0 && rem < 100);
    if rem < 20 {
        if rem == 1 && ctx.final_group && !ctx.before_scale {
            if let Some(word) = t.standalone_one {
                out.push_str(word);
                return;
            }
        }
        out.push_str(ones_word(t, ctx, rem as usize));
        return;
    }

    let tens = t.tens[(rem / 10) as usize];
    let ones = rem % 10;
    if ones == 0 {
        out.push_str(tens);
        return;
    }

    let ones_w = ones_word(t, ctx, ones as usize);
    match t.compose {
        TensOnesJoin::Space => {
            out.push_str(tens);
            out.push(' ');
            out.push_str(ones_w);
        }
        TensOnesJoin::Hyphen => {
            out.push_str(tens);
            out.push('-');
            out.push_str(ones_w);
        }
        TensOnesJoin::Joined => {
            out.push_str(tens);
            out.push_str(ones_w);
        }
        TensOnesJoin::Inverted { connector } => {
            out.push_str(ones_w);
            out.push_str(connector);
            out.push_str(tens);
        }
        TensOnesJoin::Fuse(fuse) => {
            out.push_str(&fuse(tens, ones_w));
        }
    }
}

fn ones_word(t: &TripletTable, ctx: &SegmentCtx, n: usize) -> &'static str {
    match (ctx.gender, t.ones_feminine) {
        (Gender::Feminine, Some(fem)) => fem[n],
        _ => t.ones[n],
    }
}

/// Generic 4-digit builder for myriad groups: thousand/hundred/ten digit
/// positions inside one group, with internal zero insertion and omit-one
/// handling.
fn myriad(m: &MyriadTable, value: u32, ctx: &SegmentCtx) -> RenderedSegment {
    debug_assert!(value > 0 && value < 10_000);
    let mut phrase = String::new();
    let mut pending_gap = false;

    for pos in (0..4u32).rev() {
        let digit = ((value / 10u32.pow(pos)) % 10) as usize;
        if digit == 0 {
            if !phrase.is_empty() {
                pending_gap = true;
            }
            continue;
        }
        if pending_gap && m.gap_zero {
            phrase.push_str(m.digits[0]);
        }
        pending_gap = false;

        let omit_one = digit == 1 && pos > 0 && m.omit_one_units;
        if !omit_one {
            phrase.push_str(m.digits[digit]);
        }
        if pos > 0 {
            phrase.push_str(m.units[pos as usize - 1]);
        }
    }

    if m.reduce_leading_one_ten && ctx.leading {
        let one_ten = format!("{}{}", m.digits[1], m.units[0]);
        if let Some(rest) = phrase.strip_prefix(&one_ten) {
            phrase = format!("{}{}", m.units[0], rest);
        }
    }

    RenderedSegment::new(phrase, value >= 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{HundredsRule, TensOnesJoin, TripletTable};

    static ONES: [&str; 20] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
        "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    ];
    static TENS: [&str; 10] =
        ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

    static PLAIN: TripletTable = TripletTable {
        ones: &ONES,
        ones_feminine: None,
        tens: &TENS,
        hundreds: HundredsRule::Multiplier { word: "hundred", omit_one: false, joined: false },
        compose: TensOnesJoin::Hyphen,
        hundred_rem_sep: " and ",
        standalone_one: None,
    };

    fn ctx() -> SegmentCtx {
        SegmentCtx { final_group: true, before_scale: false, leading: true, gender: Gender::Masculine }
    }

    #[test]
    fn triplet_composition() {
        assert_eq!(triplet(&PLAIN, 7, &ctx()).phrase, "seven");
        assert_eq!(triplet(&PLAIN, 15, &ctx()).phrase, "fifteen");
        assert_eq!(triplet(&PLAIN, 40, &ctx()).phrase, "forty");
        assert_eq!(triplet(&PLAIN, 42, &ctx()).phrase, "forty-two");
        assert_eq!(triplet(&PLAIN, 300, &ctx()).phrase, "three hundred");
        assert_eq!(triplet(&PLAIN, 301, &ctx()).phrase, "three hundred and one");
        assert_eq!(triplet(&PLAIN, 999, &ctx()).phrase, "nine hundred and ninety-nine");
    }

    #[test]
    fn has_hundred_comes_from_the_digit() {
        assert!(triplet(&PLAIN, 100, &ctx()).has_hundred);
        assert!(triplet(&PLAIN, 101, &ctx()).has_hundred);
        assert!(!triplet(&PLAIN, 99, &ctx()).has_hundred);
    }

    static MANDARIN: MyriadTable = MyriadTable {
        digits: ["零", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
        units: ["十", "百", "千"],
        gap_zero: true,
        omit_one_units: false,
        reduce_leading_one_ten: true,
    };

    #[test]
    fn myriad_internal_zero() {
        assert_eq!(myriad(&MANDARIN, 1005, &ctx()).phrase, "一千零五");
        assert_eq!(myriad(&MANDARIN, 1050, &ctx()).phrase, "一千零五十");
        assert_eq!(myriad(&MANDARIN, 1500, &ctx()).phrase, "一千五百");
    }

    #[test]
    fn myriad_leading_ten_reduction() {
        assert_eq!(myriad(&MANDARIN, 16, &ctx()).phrase, "十六");
        assert_eq!(myriad(&MANDARIN, 116, &ctx()).phrase, "一百一十六");
        let inner = SegmentCtx { leading: false, ..ctx() };
        assert_eq!(myriad(&MANDARIN, 16, &inner).phrase, "一十六");
    }
}
