//! Assembling rendered segments and scale words into the final phrase.

use crate::table::{ConjunctionRule, LocaleFlags, RuleTable};
use crate::RenderedSegment;

/// One non-zero group, rendered and paired with its resolved scale word.
pub(crate) struct Piece {
    pub seg: RenderedSegment,
    pub scale: Option<ResolvedScale>,
    pub value: u32,
    pub level: u32,
}

pub(crate) struct ResolvedScale {
    pub word: &'static str,
    pub joined: bool,
}

/// Concatenate pieces most-significant first under the locale's join rule.
///
/// Connector decisions are predicates over carried segment metadata
/// (`has_hundred`, position, scale adjacency); the phrase text is never
/// inspected.
pub(crate) fn assemble(table: &RuleTable, pieces: &[Piece], optional_and: bool) -> String {
    let join = &table.join;
    let mut out = String::new();

    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            let prev = &pieces[i - 1];
            let sep = if prev.level < join.compound_below { "" } else { join.group_sep };
            let conjoined = i + 1 == pieces.len() && conjunction_fires(table, piece, optional_and);

            if conjoined {
                let conj = join.conjunction.as_ref().expect("conjunction rule fired");
                if conj.attached || sep.is_empty() {
                    out.push_str(sep);
                    out.push_str(conj.word);
                } else {
                    out.push_str(sep);
                    out.push_str(conj.word);
                    out.push_str(sep);
                }
            } else {
                out.push_str(sep);
            }

            if let Some(zero) = join.gap_zero {
                if positional_gap(table, prev, piece) {
                    out.push_str(zero);
                }
            }
        }

        push_piece(table, piece, &mut out);
    }

    out
}

fn conjunction_fires(table: &RuleTable, last: &Piece, optional_and: bool) -> bool {
    let Some(conj) = table.join.conjunction.as_ref() else {
        return false;
    };
    match conj.rule {
        ConjunctionRule::FinalNoHundred => last.level == 0 && !last.seg.has_hundred,
        ConjunctionRule::FinalSmallOrRoundHundred => !last.seg.has_hundred || last.value % 100 == 0,
        ConjunctionRule::Optional => {
            table.flags.contains(LocaleFlags::OPTIONAL_AND)
                && optional_and
                && last.level == 0
                && !last.seg.has_hundred
        }
    }
}

/// A spoken positional gap exists when scale levels were skipped or the next
/// group's top digit position is empty (Mandarin 一千零五).
fn positional_gap(table: &RuleTable, prev: &Piece, next: &Piece) -> bool {
    prev.level > next.level + 1 || next.value < table.grouping.ceiling(next.level) / 10
}

fn push_piece(table: &RuleTable, piece: &Piece, out: &mut String) {
    let Some(scale) = &piece.scale else {
        out.push_str(&piece.seg.phrase);
        return;
    };

    if piece.seg.scale_only {
        out.push_str(scale.word);
        return;
    }

    match table.join.scale_link {
        Some(link) => out.push_str(&link(&piece.seg.phrase)),
        None => out.push_str(&piece.seg.phrase),
    }
    if !scale.joined {
        out.push_str(table.join.scale_sep);
    }
    out.push_str(scale.word);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{
        Conjunction, ConjunctionRule, CurrencyRule, JoinRule, LocaleFlags, OrdinalRule, OrdinalUnits,
        PluralRule, RuleTable, ScaleForms, SegmentRenderer, UnitNoun,
    };
    use crate::{Gender, Grouping, RenderedSegment};

    fn table(flags: LocaleFlags) -> RuleTable {
        RuleTable {
            code: "xx",
            name: "Test",
            zero: "zero",
            negative: "minus",
            decimal_mark: "point",
            digits: ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
            grouping: Grouping::Thousands,
            default_gender: Gender::Masculine,
            plural: PluralRule::OneOther,
            segment: SegmentRenderer::Custom(|_, _| RenderedSegment::new(String::new(), false)),
            scales: &[],
            alt_scales: None,
            join: JoinRule {
                group_sep: " ",
                scale_sep: " ",
                compound_below: 0,
                conjunction: Some(Conjunction {
                    word: "and",
                    rule: ConjunctionRule::Optional,
                    attached: false,
                }),
                gap_zero: None,
                scale_link: None,
            },
            ordinal: OrdinalRule { irregular: &[], units: OrdinalUnits::Affix { prefix: "", suffix: "" } },
            currency: CurrencyRule {
                major: UnitNoun { forms: ScaleForms::Fixed("unit") },
                minor: UnitNoun { forms: ScaleForms::Fixed("cent") },
                joiner: " ",
                major_gender: None,
                minor_gender: None,
            },
            flags,
        }
    }

    #[test]
    fn optional_conjunction_requires_the_locale_flag() {
        let last =
            Piece { seg: RenderedSegment::new("one".to_string(), false), scale: None, value: 1, level: 0 };
        assert!(conjunction_fires(&table(LocaleFlags::OPTIONAL_AND), &last, true));
        assert!(!conjunction_fires(&table(LocaleFlags::OPTIONAL_AND), &last, false));
        assert!(!conjunction_fires(&table(LocaleFlags::empty()), &last, true));
    }
}
