//! Rendering collaborator: the narrow set of drawing capabilities the assembler needs.
//!
//! The composition engine only talks to [`RenderBackend`] and [`RenderDocument`], so any
//! document-generation backend can sit behind them. The PDF implementation lives in
//! [`pdf`].
//!
//! A backend is shared across requests and must be stateless; every request opens its
//! own document handle with [`RenderBackend::create_document`].

pub mod raster;
pub mod pdf;

use thiserror::Error;

use crate::layout::font_metrics::StandardFont;

pub use raster::{decode_image, DecodedImage};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image could not be decoded: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error("character {0:?} cannot be drawn with the standard fonts")]
    Unencodable(char),

    #[error("{0} called outside a text block")]
    NotInTextBlock(&'static str),

    #[error("{0} called inside a text block")]
    InTextBlock(&'static str),

    #[error("{0} called before a page was created")]
    NoPage(&'static str),
}

/// Shared, stateless entry point of a rendering backend.
pub trait RenderBackend: Send + Sync {
    /// Decodes image bytes and reports their natural size.
    ///
    /// `hint` is a file extension or MIME type, consulted only when the format cannot be
    /// sniffed from the bytes.
    fn decode_image(&self, bytes: &[u8], hint: Option<&str>) -> Result<DecodedImage, RenderError>;

    /// Opens a fresh document handle for one request.
    fn create_document(&self) -> Box<dyn RenderDocument>;
}

/// A single in-progress document. Owned by one request and consumed by `serialize`.
pub trait RenderDocument {
    fn set_metadata(&mut self, title: &str, author: &str);

    fn create_page(&mut self, width: f32, height: f32);

    fn begin_text(&mut self) -> Result<(), RenderError>;

    fn end_text(&mut self) -> Result<(), RenderError>;

    fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError>;

    /// Moves the text origin relative to the start of the current line.
    fn move_text_origin(&mut self, dx: f32, dy: f32) -> Result<(), RenderError>;

    fn show_text(&mut self, text: &str) -> Result<(), RenderError>;

    /// Draws `image` into the rectangle with bottom-left corner `(x, y)`.
    fn draw_image(
        &mut self,
        image: &DecodedImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError>;

    fn serialize(self: Box<Self>) -> Result<Vec<u8>, RenderError>;
}
