//! Cardinal pipeline driver: sign, zero short-circuit, digit-group walk,
//! fractional digits.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::engine::{assemble, builder, scale, segment};
use crate::magnitude::Magnitude;
use crate::table::{OneNumeral, RuleTable, ScaleWord};
use crate::{Gender, RenderedSegment, SegmentCtx};

/// Resolved per-call options, defaults already applied by the API layer.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RenderOptions {
    pub gender: Option<Gender>,
    pub optional_and: bool,
    pub long_scale: bool,
}

/// Ladder selected for this call (the long-scale alternative when the locale
/// has one and the caller asked for it).
pub(crate) fn ladder(table: &'static RuleTable, opts: &RenderOptions) -> &'static [ScaleWord] {
    if opts.long_scale {
        table.alt_scales.unwrap_or(table.scales)
    } else {
        table.scales
    }
}

/// Separator for sign, fraction and unit-noun words: a space in spaced
/// locales, nothing where groups glue together. Distinct from `group_sep`,
/// which some locales load with a conjunction (Arabic " و").
pub(crate) fn spacer(table: &RuleTable) -> &'static str {
    if table.join.group_sep.is_empty() {
        ""
    } else {
        " "
    }
}

pub(crate) fn render(table: &'static RuleTable, m: &Magnitude, opts: &RenderOptions) -> String {
    let sep = spacer(table);
    let mut out = String::new();

    if m.is_negative() && !m.is_zero() {
        out.push_str(table.negative);
        out.push_str(sep);
    }

    if m.integer().is_zero() {
        out.push_str(table.zero);
    } else {
        let gender = opts.gender.unwrap_or(table.default_gender);
        out.push_str(&integer_words(table, ladder(table, opts), m.integer(), gender, opts.optional_and));
    }

    if let Some(frac) = m.fraction() {
        out.push_str(sep);
        out.push_str(table.decimal_mark);
        for b in frac.bytes() {
            out.push_str(sep);
            out.push_str(table.digits[(b - b'0') as usize]);
        }
    }

    out
}

/// Render a bare non-negative integer (no sign, no fraction). Shared by the
/// ordinal transform and the currency renderer.
pub(crate) fn integer_words(
    table: &'static RuleTable,
    scales: &'static [ScaleWord],
    n: &BigUint,
    gender: Gender,
    optional_and: bool,
) -> String {
    if n.is_zero() {
        return table.zero.to_string();
    }

    let groups = segment::split(table.grouping, n);
    let nonzero: Vec<_> = groups.into_iter().filter(|g| g.value > 0).collect();

    let mut pieces = Vec::with_capacity(nonzero.len());
    for (idx, group) in nonzero.iter().enumerate() {
        let ctx = SegmentCtx {
            final_group: idx + 1 == nonzero.len(),
            before_scale: group.level > 0,
            leading: idx == 0,
            gender,
        };

        let piece = if group.level == 0 {
            assemble::Piece {
                seg: builder::render_group(table, group.value, &ctx),
                scale: None,
                value: group.value,
                level: 0,
            }
        } else {
            let (word, rung) = scale::resolve(table, scales, group.level, group.value);
            let resolved = assemble::ResolvedScale { word, joined: rung.joined };
            let seg = if rung.omits_numeral(group.value) {
                RenderedSegment::scale_only()
            } else if group.value == 1 {
                match rung.one {
                    OneNumeral::Word(w) => RenderedSegment::new(w.to_string(), false),
                    _ => builder::render_group(table, 1, &SegmentCtx { gender: rung.gender, ..ctx }),
                }
            } else {
                builder::render_group(table, group.value, &SegmentCtx { gender: rung.gender, ..ctx })
            };
            assemble::Piece { seg, scale: Some(resolved), value: group.value, level: group.level }
        };

        pieces.push(piece);
    }

    assemble::assemble(table, &pieces, optional_and)
}
