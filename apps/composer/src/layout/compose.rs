//! Page Composer — turns a title, wrapped body lines and an optional image into a
//! fully resolved placement plan for a single page.
//!
//! Coordinates are PDF user space: origin at the bottom-left corner, `y` growing upward.
//! Text entries are anchored at their baseline origin.
//!
//! # Layout rules
//! - Title at `(margin, height - margin)`, drawn at `font_size + 4`. Never wrapped.
//! - Body starts two title line-heights below the top margin and steps down by
//!   `font_size * 1.5` per line. Nothing stops lines from running off the page.
//! - The image is scaled down (never up) to the text width and pinned to the bottom-left
//!   margin corner, independent of how far the body text reaches. Text and image may
//!   overlap.

use serde::Serialize;

use crate::layout::font_metrics::{FontMetricTable, StandardFont};
use crate::layout::wrap::Line;

/// Title size relative to body size.
pub const TITLE_SIZE_INCREMENT: f32 = 4.0;
/// Baseline-to-baseline distance as a multiple of body font size.
pub const LEADING_FACTOR: f32 = 1.5;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Page size and the uniform margin, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// ISO A4 (210 × 297 mm) with 50pt margins.
    pub const A4: PageGeometry = PageGeometry {
        width: 595.275_6,
        height: 841.889_8,
        margin: 50.0,
    };

    /// Horizontal space between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::A4
    }
}

/// Natural (pixel) size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageExtent {
    pub natural_width: f32,
    pub natural_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementKind {
    Title,
    BodyLine,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlacementContent {
    Text(String),
    /// The request's single image.
    Image,
}

/// One draw instruction.
///
/// For text entries `width` is the measured advance width and `height` is the font
/// size to draw with; for the image they are the placed rectangle's size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub kind: PlacementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub content: PlacementContent,
}

impl Placement {
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            PlacementContent::Text(text) => Some(text),
            PlacementContent::Image => None,
        }
    }
}

/// Ordered draw instructions for one page: title, body lines top to bottom, then the
/// image if there is one. Serializes to JSON for trace-level plan dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementPlan {
    pub font: StandardFont,
    pub geometry: PageGeometry,
    pub entries: Vec<Placement>,
}

impl PlacementPlan {
    pub fn title(&self) -> Option<&Placement> {
        self.entries.iter().find(|p| p.kind == PlacementKind::Title)
    }

    pub fn body_lines(&self) -> impl Iterator<Item = &Placement> {
        self.entries
            .iter()
            .filter(|p| p.kind == PlacementKind::BodyLine)
    }

    pub fn image(&self) -> Option<&Placement> {
        self.entries.iter().find(|p| p.kind == PlacementKind::Image)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Lays out one page. Consumes the wrapped lines.
pub fn compose(
    title: &str,
    lines: Vec<Line>,
    image: Option<ImageExtent>,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    geometry: &PageGeometry,
) -> PlacementPlan {
    let title_size = font_size_pt + TITLE_SIZE_INCREMENT;
    let leading = font_size_pt * LEADING_FACTOR;
    let top = geometry.height - geometry.margin;

    let mut entries = Vec::with_capacity(lines.len() + 2);

    entries.push(Placement {
        kind: PlacementKind::Title,
        x: geometry.margin,
        y: top,
        width: metrics.text_width(title, title_size),
        height: title_size,
        content: PlacementContent::Text(title.to_string()),
    });

    let mut y = top - title_size * 2.0;
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            y -= leading;
        }
        entries.push(Placement {
            kind: PlacementKind::BodyLine,
            x: geometry.margin,
            y,
            width: metrics.text_width(line.as_str(), font_size_pt),
            height: font_size_pt,
            content: PlacementContent::Text(line.into_string()),
        });
    }

    if let Some(extent) = image {
        let width = geometry.text_width().min(extent.natural_width);
        let scale = width / extent.natural_width;
        entries.push(Placement {
            kind: PlacementKind::Image,
            x: geometry.margin,
            y: geometry.margin,
            width,
            height: extent.natural_height * scale,
            content: PlacementContent::Image,
        });
    }

    PlacementPlan {
        font: metrics.font,
        geometry: *geometry,
        entries,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
