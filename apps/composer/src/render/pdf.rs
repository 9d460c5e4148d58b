//! PDF implementation of the rendering collaborator, built on `pdf-writer`.
//!
//! Text is drawn with the non-embedded standard Type 1 fonts in WinAnsiEncoding. Content
//! streams and raw image samples are zlib-compressed; baseline JPEGs are embedded as-is.
//! Nothing is written until [`RenderDocument::serialize`], which resolves all object
//! references in one go.

use chrono::prelude::*;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Date, Filter, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use crate::layout::font_metrics::StandardFont;
use crate::layout::winansi;
use crate::render::raster::{decode_image, DecodedImage, ImageSource};
use crate::render::{RenderBackend, RenderDocument, RenderError};

/// Stateless factory for [`PdfDocument`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfBackend;

impl PdfBackend {
    pub fn new() -> PdfBackend {
        PdfBackend
    }
}

impl RenderBackend for PdfBackend {
    fn decode_image(&self, bytes: &[u8], hint: Option<&str>) -> Result<DecodedImage, RenderError> {
        decode_image(bytes, hint)
    }

    fn create_document(&self) -> Box<dyn RenderDocument> {
        Box::new(PdfDocument::default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document state
// ────────────────────────────────────────────────────────────────────────────

/// An in-memory PDF under construction.
#[derive(Default)]
pub struct PdfDocument {
    info: Option<Info>,
    pages: Vec<PageState>,
}

struct Info {
    title: String,
    author: String,
}

struct PageState {
    width: f32,
    height: f32,
    content: Content,
    /// Fonts referenced by the content stream, resource name `F{index}`.
    fonts: Vec<StandardFont>,
    /// Images referenced by the content stream, resource name `Im{index}`.
    images: Vec<EncodedImage>,
    in_text: bool,
}

struct EncodedImage {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
    grey: bool,
    width: i32,
    height: i32,
}

impl PdfDocument {
    fn current_page(&mut self, op: &'static str) -> Result<&mut PageState, RenderError> {
        self.pages.last_mut().ok_or(RenderError::NoPage(op))
    }

    fn text_page(&mut self, op: &'static str) -> Result<&mut PageState, RenderError> {
        let page = self.current_page(op)?;
        if !page.in_text {
            return Err(RenderError::NotInTextBlock(op));
        }
        Ok(page)
    }
}

impl RenderDocument for PdfDocument {
    fn set_metadata(&mut self, title: &str, author: &str) {
        self.info = Some(Info {
            title: title.to_string(),
            author: author.to_string(),
        });
    }

    fn create_page(&mut self, width: f32, height: f32) {
        self.pages.push(PageState {
            width,
            height,
            content: Content::new(),
            fonts: Vec::new(),
            images: Vec::new(),
            in_text: false,
        });
    }

    fn begin_text(&mut self) -> Result<(), RenderError> {
        let page = self.current_page("begin_text")?;
        if page.in_text {
            return Err(RenderError::InTextBlock("begin_text"));
        }
        page.in_text = true;
        page.content.begin_text();
        Ok(())
    }

    fn end_text(&mut self) -> Result<(), RenderError> {
        let page = self.text_page("end_text")?;
        page.in_text = false;
        page.content.end_text();
        Ok(())
    }

    fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError> {
        let page = self.text_page("set_font")?;
        let index = match page.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                page.fonts.push(font);
                page.fonts.len() - 1
            }
        };
        let name = format!("F{index}");
        page.content.set_font(Name(name.as_bytes()), size);
        Ok(())
    }

    fn move_text_origin(&mut self, dx: f32, dy: f32) -> Result<(), RenderError> {
        self.text_page("move_text_origin")?.content.next_line(dx, dy);
        Ok(())
    }

    fn show_text(&mut self, text: &str) -> Result<(), RenderError> {
        let encoded = winansi::encode(text).map_err(RenderError::Unencodable)?;
        self.text_page("show_text")?.content.show(Str(&encoded));
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &DecodedImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), RenderError> {
        let page = self.current_page("draw_image")?;
        if page.in_text {
            return Err(RenderError::InTextBlock("draw_image"));
        }

        page.images.push(encode_image(image));
        let name = format!("Im{}", page.images.len() - 1);
        page.content.save_state();
        page.content.transform([width, 0.0, 0.0, height, x, y]);
        page.content.x_object(Name(name.as_bytes()));
        page.content.restore_state();
        Ok(())
    }

    fn serialize(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let PdfDocument { info, pages } = *self;
        if pages.iter().any(|p| p.in_text) {
            return Err(RenderError::InTextBlock("serialize"));
        }

        let mut refs = RefAllocator::new();
        let catalog_id = refs.next();
        let page_tree_id = refs.next();

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(refs.next(), &mut writer);
        }

        let page_ids: Vec<Ref> = pages.iter().map(|_| refs.next()).collect();
        writer
            .pages(page_tree_id)
            .count(page_ids.len() as i32)
            .kids(page_ids.iter().copied());

        for (page, id) in pages.into_iter().zip(page_ids) {
            page.write(id, page_tree_id, &mut refs, &mut writer);
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        let bytes = writer.finish();
        debug!(bytes = bytes.len(), "Serialized PDF document");
        Ok(bytes)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serialization
// ────────────────────────────────────────────────────────────────────────────

const LEVEL: u8 = CompressionLevel::DefaultLevel as u8;

struct RefAllocator {
    next_id: i32,
}

impl RefAllocator {
    fn new() -> RefAllocator {
        RefAllocator { next_id: 1 }
    }

    fn next(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Info {
    fn write(&self, id: Ref, writer: &mut Pdf) {
        let mut info = writer.document_info(id);
        info.title(TextStr(self.title.as_str()));
        info.author(TextStr(self.author.as_str()));
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        let now = Local::now();
        let offset = now.offset().fix().local_minus_utc();
        let offset_hours = offset / (60 * 60);
        let offset_minutes = ((offset - offset_hours * 60 * 60) / 60).abs();
        let date = Date::new(now.year() as u16)
            .month(now.month() as u8)
            .day(now.day() as u8)
            .hour(now.hour() as u8)
            .minute(now.minute() as u8)
            .second(now.second() as u8)
            .utc_offset_hour(offset_hours as i8)
            .utc_offset_minute(offset_minutes as u8);
        info.creation_date(date);
    }
}

impl PageState {
    fn write(self, id: Ref, parent: Ref, refs: &mut RefAllocator, writer: &mut Pdf) {
        let font_ids: Vec<Ref> = self
            .fonts
            .iter()
            .map(|font| {
                let font_id = refs.next();
                writer
                    .type1_font(font_id)
                    .base_font(Name(font.base_font_name().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
                font_id
            })
            .collect();

        let image_ids: Vec<Ref> = self
            .images
            .iter()
            .map(|image| image.write(refs, writer))
            .collect();

        let content_id = refs.next();

        let mut page = writer.page(id);
        page.media_box(Rect::new(0.0, 0.0, self.width, self.height));
        page.parent(parent);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, font_id) in font_ids.iter().enumerate() {
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), *font_id);
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (i, image_id) in image_ids.iter().enumerate() {
            resource_xobjects.pair(Name(format!("Im{i}").as_bytes()), *image_id);
        }
        resource_xobjects.finish();
        resources.finish();
        page.finish();

        let compressed = compress_to_vec_zlib(&self.content.finish(), LEVEL);
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);
    }
}

fn encode_image(image: &DecodedImage) -> EncodedImage {
    let width = image.natural_width as i32;
    let height = image.natural_height as i32;
    match &image.source {
        ImageSource::Jpeg { data, grey } => EncodedImage {
            filter: Filter::DctDecode,
            bytes: data.clone(),
            mask: None,
            grey: *grey,
            width,
            height,
        },
        ImageSource::Pixels(pixels) => {
            let mask = pixels.color().has_alpha().then(|| {
                let alphas: Vec<u8> = pixels.to_rgba8().pixels().map(|p| p.0[3]).collect();
                compress_to_vec_zlib(&alphas, LEVEL)
            });
            EncodedImage {
                filter: Filter::FlateDecode,
                bytes: compress_to_vec_zlib(pixels.to_rgb8().as_raw(), LEVEL),
                mask,
                grey: false,
                width,
                height,
            }
        }
    }
}

impl EncodedImage {
    fn write(&self, refs: &mut RefAllocator, writer: &mut Pdf) -> Ref {
        let id = refs.next();
        let mask_id = self.mask.as_ref().map(|_| refs.next());

        let mut image = writer.image_xobject(id, &self.bytes);
        image.filter(self.filter);
        image.width(self.width);
        image.height(self.height);
        if self.grey {
            image.color_space().device_gray();
        } else {
            image.color_space().device_rgb();
        }
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, &self.mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask);
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width);
            s_mask.height(self.height);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        id
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
