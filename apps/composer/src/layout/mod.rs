// Text flow and page composition.
// Implements: WinAnsi glyph lookup, glyph metrics, greedy line wrapping, single-page placement planning.
// Pure and synchronous; no rendering backend types appear here.

pub mod compose;
pub mod font_metrics;
pub mod winansi;
pub mod wrap;

pub use compose::{compose, PageGeometry, PlacementKind, PlacementPlan};
pub use font_metrics::StandardFont;
pub use wrap::{wrap, WrapRequest};
