//! The shared rendering engine.
//!
//! Every locale variant is the same pipeline with a different rule table:
//!
//! ```text
//! Magnitude ── segment::split ──> [DigitGroup]            (segment.rs)
//!                   │
//!                   v
//!        builder::render_group × N                        (builder.rs)
//!        scale::resolve × N                               (scale.rs)
//!                   │
//!                   v
//!           assemble::assemble ──> String                 (assemble.rs)
//! ```
//!
//! `cardinal.rs` drives the pipeline (sign, zero short-circuit, fraction);
//! `ordinal.rs` and `currency.rs` reuse it, replacing only the terminal
//! segment or splitting the amount into major/minor renders.
//!
//! Every function here is pure: same table + same input = same output, no
//! state survives a call, and tables are never mutated. The only panic path
//! is configuration incompleteness (a magnitude past the locale's scale
//! ladder), which is a programming error in the rule table, not bad input.

#[path = "engine/assemble.rs"]
pub(crate) mod assemble;
#[path = "engine/builder.rs"]
pub(crate) mod builder;
#[path = "engine/cardinal.rs"]
pub(crate) mod cardinal;
#[path = "engine/currency.rs"]
pub(crate) mod currency;
#[path = "engine/ordinal.rs"]
pub(crate) mod ordinal;
#[path = "engine/scale.rs"]
pub(crate) mod scale;
#[path = "engine/segment.rs"]
pub(crate) mod segment;

pub(crate) use cardinal::RenderOptions;
