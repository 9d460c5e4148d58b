//! Document Assembler — runs one composition end to end.
//!
//! # Pipeline
//! 1. Validate the request (blank fields, font size, characters the fonts cannot draw).
//! 2. Resolve font metrics and wrap the content to the page's text width.
//! 3. Decode the image, if any, for its natural size. Failure aborts the composition.
//! 4. Compose the placement plan.
//! 5. Replay the plan verbatim against a fresh document handle and serialize it.
//!
//! Everything here is synchronous; the HTTP handler runs it on the blocking pool.

use tracing::{debug, info, trace, Level};

use crate::creation::request::CompositionRequest;
use crate::errors::ComposeError;
use crate::layout::{
    compose, winansi, wrap, PageGeometry, PlacementKind, PlacementPlan, StandardFont,
    WrapRequest,
};
use crate::render::{DecodedImage, RenderBackend, RenderDocument};

/// Composes `request` into a single-page document and returns its serialized bytes.
pub fn assemble(
    request: &CompositionRequest,
    backend: &dyn RenderBackend,
) -> Result<Vec<u8>, ComposeError> {
    request.validate()?;
    let content = normalize_newlines(&request.content);
    // Title is a single text run; content newlines are paragraph breaks.
    ensure_encodable("title", winansi::first_unencodable(&request.title))?;
    ensure_encodable(
        "content",
        content.split('\n').find_map(winansi::first_unencodable),
    )?;

    let geometry = PageGeometry::A4;
    let font = StandardFont::resolve(&request.font_name);
    let metrics = font.metrics();
    let font_size = request.font_size_pt as f32;

    let lines = wrap(&WrapRequest {
        text: &content,
        metrics,
        font_size_pt: font_size,
        max_width: geometry.text_width(),
    })?;

    let image = request
        .image
        .as_ref()
        .map(|upload| backend.decode_image(&upload.bytes, upload.format_hint()))
        .transpose()?;

    let plan = compose(
        &request.title,
        lines,
        image.as_ref().map(DecodedImage::extent),
        metrics,
        font_size,
        &geometry,
    );
    debug!(
        font = font.base_font_name(),
        entries = plan.entries.len(),
        "Composed placement plan"
    );
    if tracing::enabled!(Level::TRACE) {
        if let Ok(dump) = serde_json::to_string(&plan) {
            trace!(plan = %dump, "Placement plan");
        }
    }

    let mut document = backend.create_document();
    document.set_metadata(&request.title, &request.author);
    render_plan(document.as_mut(), &plan, image.as_ref())?;
    let bytes = document.serialize()?;

    info!(
        font = font.base_font_name(),
        body_lines = plan.body_lines().count(),
        has_image = image.is_some(),
        bytes = bytes.len(),
        "Assembled document"
    );
    Ok(bytes)
}

/// Issues the draw calls for every plan entry in order.
///
/// The title gets its own text block. Body lines share one block, each positioned
/// relative to the previous line's origin. The image is drawn outside any text block.
pub fn render_plan(
    document: &mut dyn RenderDocument,
    plan: &PlacementPlan,
    image: Option<&DecodedImage>,
) -> Result<(), ComposeError> {
    document.create_page(plan.geometry.width, plan.geometry.height);

    // Origin of the previous body line while the body text block is open.
    let mut body_origin: Option<(f32, f32)> = None;

    for entry in &plan.entries {
        match entry.kind {
            PlacementKind::Title => {
                close_body(document, &mut body_origin)?;
                document.begin_text()?;
                document.set_font(plan.font, entry.height)?;
                document.move_text_origin(entry.x, entry.y)?;
                document.show_text(entry.text().unwrap_or_default())?;
                document.end_text()?;
            }
            PlacementKind::BodyLine => {
                match body_origin {
                    Some((x, y)) => document.move_text_origin(entry.x - x, entry.y - y)?,
                    None => {
                        document.begin_text()?;
                        document.set_font(plan.font, entry.height)?;
                        document.move_text_origin(entry.x, entry.y)?;
                    }
                }
                body_origin = Some((entry.x, entry.y));
                document.show_text(entry.text().unwrap_or_default())?;
            }
            PlacementKind::Image => {
                close_body(document, &mut body_origin)?;
                let image = image.ok_or_else(|| {
                    ComposeError::ResourceFailure("plan places an image but none was decoded".into())
                })?;
                document.draw_image(image, entry.x, entry.y, entry.width, entry.height)?;
            }
        }
    }

    close_body(document, &mut body_origin)
}

fn close_body(
    document: &mut dyn RenderDocument,
    body_origin: &mut Option<(f32, f32)>,
) -> Result<(), ComposeError> {
    if body_origin.take().is_some() {
        document.end_text()?;
    }
    Ok(())
}

/// Form submissions carry CRLF line endings; paragraphs are split on `'\n'` only.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn ensure_encodable(field: &str, unencodable: Option<char>) -> Result<(), ComposeError> {
    match unencodable {
        Some(c) => Err(ComposeError::InvalidArgument(format!(
            "{field} contains {c:?}, which the standard fonts cannot draw"
        ))),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::request::ImageUpload;
    use crate::render::pdf::PdfBackend;
    use crate::render::raster::tests::png_bytes;
    use crate::render::{decode_image, RenderError};
    use bytes::Bytes;
    use std::sync::{Arc, Mutex};

    /// Draw calls captured by [`RecordingBackend`].
    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Metadata(String, String),
        Page(f32, f32),
        BeginText,
        EndText,
        Font(StandardFont, f32),
        Move(f32, f32),
        Show(String),
        Image(f32, f32, f32, f32),
        Serialize,
    }

    #[derive(Default)]
    struct RecordingBackend {
        ops: Arc<Mutex<Vec<Op>>>,
        documents_created: Arc<Mutex<usize>>,
    }

    struct RecordingDocument {
        ops: Arc<Mutex<Vec<Op>>>,
    }

    impl RecordingBackend {
        fn ops(&self) -> Vec<Op> {
            self.ops.lock().unwrap().clone()
        }
    }

    impl RenderBackend for RecordingBackend {
        fn decode_image(&self, bytes: &[u8], hint: Option<&str>) -> Result<DecodedImage, RenderError> {
            decode_image(bytes, hint)
        }

        fn create_document(&self) -> Box<dyn RenderDocument> {
            *self.documents_created.lock().unwrap() += 1;
            Box::new(RecordingDocument {
                ops: Arc::clone(&self.ops),
            })
        }
    }

    impl RecordingDocument {
        fn push(&self, op: Op) {
            self.ops.lock().unwrap().push(op);
        }
    }

    impl RenderDocument for RecordingDocument {
        fn set_metadata(&mut self, title: &str, author: &str) {
            self.push(Op::Metadata(title.into(), author.into()));
        }
        fn create_page(&mut self, width: f32, height: f32) {
            self.push(Op::Page(width, height));
        }
        fn begin_text(&mut self) -> Result<(), RenderError> {
            self.push(Op::BeginText);
            Ok(())
        }
        fn end_text(&mut self) -> Result<(), RenderError> {
            self.push(Op::EndText);
            Ok(())
        }
        fn set_font(&mut self, font: StandardFont, size: f32) -> Result<(), RenderError> {
            self.push(Op::Font(font, size));
            Ok(())
        }
        fn move_text_origin(&mut self, dx: f32, dy: f32) -> Result<(), RenderError> {
            self.push(Op::Move(dx, dy));
            Ok(())
        }
        fn show_text(&mut self, text: &str) -> Result<(), RenderError> {
            self.push(Op::Show(text.into()));
            Ok(())
        }
        fn draw_image(
            &mut self,
            _image: &DecodedImage,
            x: f32,
            y: f32,
            width: f32,
            height: f32,
        ) -> Result<(), RenderError> {
            self.push(Op::Image(x, y, width, height));
            Ok(())
        }
        fn serialize(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
            self.push(Op::Serialize);
            Ok(b"recorded".to_vec())
        }
    }

    fn request(content: &str) -> CompositionRequest {
        CompositionRequest::new("Test PDF", content, "Test Author")
    }

    fn with_png(mut req: CompositionRequest, width: u32, height: u32) -> CompositionRequest {
        req.image = Some(ImageUpload {
            bytes: Bytes::from(png_bytes(width, height)),
            file_name: Some("image.png".into()),
            content_type: Some("image/png".into()),
        });
        req
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_draw_calls_follow_the_plan() {
        let backend = RecordingBackend::default();
        let bytes = assemble(&request("para one\npara two"), &backend).unwrap();
        assert_eq!(bytes, b"recorded".to_vec());

        let ops = backend.ops();
        let top = 841.889_8 - 50.0;
        assert_eq!(ops[0], Op::Metadata("Test PDF".into(), "Test Author".into()));
        assert!(matches!(ops[1], Op::Page(w, h) if approx(w, 595.275_6) && approx(h, 841.889_8)));

        // Title block.
        assert_eq!(ops[2], Op::BeginText);
        assert_eq!(ops[3], Op::Font(StandardFont::Helvetica, 16.0));
        assert!(matches!(ops[4], Op::Move(x, y) if approx(x, 50.0) && approx(y, top)));
        assert_eq!(ops[5], Op::Show("Test PDF".into()));
        assert_eq!(ops[6], Op::EndText);

        // Body block: absolute origin, then relative steps of one leading.
        assert_eq!(ops[7], Op::BeginText);
        assert_eq!(ops[8], Op::Font(StandardFont::Helvetica, 12.0));
        assert!(matches!(ops[9], Op::Move(x, y) if approx(x, 50.0) && approx(y, top - 32.0)));
        let shown: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Show(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(shown, vec!["Test PDF", "para one", "", "para two", ""]);
        for op in &ops[11..] {
            if let Op::Move(dx, dy) = op {
                assert!(approx(*dx, 0.0) && approx(*dy, -18.0), "unexpected step {op:?}");
            }
        }
        assert_eq!(ops[ops.len() - 2], Op::EndText);
        assert_eq!(ops[ops.len() - 1], Op::Serialize);
    }

    #[test]
    fn test_image_is_drawn_last_at_bottom_margin() {
        let backend = RecordingBackend::default();
        let req = with_png(request("alpha beta gamma"), 990, 200);
        assemble(&req, &backend).unwrap();

        let ops = backend.ops();
        let image_at = ops
            .iter()
            .position(|op| matches!(op, Op::Image(..)))
            .expect("image drawn");
        assert_eq!(ops[image_at - 1], Op::EndText);
        assert_eq!(ops[image_at + 1], Op::Serialize);

        let text_width = 595.275_6 - 100.0;
        match ops[image_at] {
            Op::Image(x, y, w, h) => {
                assert_eq!((x, y), (50.0, 50.0));
                assert!(approx(w, text_width));
                assert!(approx(h, 200.0 * text_width / 990.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_font_name_resolution_applies() {
        let backend = RecordingBackend::default();
        let mut req = request("body");
        req.font_name = "TIMES-BOLD".into();
        req.font_size_pt = 10;
        assemble(&req, &backend).unwrap();
        assert!(backend.ops().contains(&Op::Font(StandardFont::TimesBold, 14.0)));
        assert!(backend.ops().contains(&Op::Font(StandardFont::TimesBold, 10.0)));
    }

    #[test]
    fn test_undecodable_image_is_fatal() {
        let backend = RecordingBackend::default();
        let mut req = request("body");
        req.image = Some(ImageUpload {
            bytes: Bytes::from_static(b"Sample image content"),
            file_name: Some("image.jpg".into()),
            content_type: Some("image/jpeg".into()),
        });
        let result = assemble(&req, &backend);
        assert!(matches!(result, Err(ComposeError::ResourceFailure(_))), "got {result:?}");
        assert_eq!(*backend.documents_created.lock().unwrap(), 0);
    }

    #[test]
    fn test_invalid_requests_do_no_work() {
        let backend = RecordingBackend::default();
        let mut req = request("body");
        req.font_size_pt = 0;
        assert!(matches!(assemble(&req, &backend), Err(ComposeError::InvalidArgument(_))));

        let req = request("tab\tseparated");
        assert!(matches!(assemble(&req, &backend), Err(ComposeError::InvalidArgument(_))));

        let req = CompositionRequest::new("日本", "body", "a");
        assert!(matches!(assemble(&req, &backend), Err(ComposeError::InvalidArgument(_))));

        let req = CompositionRequest::new("Two\nLines", "body", "a");
        assert!(matches!(assemble(&req, &backend), Err(ComposeError::InvalidArgument(_))));
        assert_eq!(*backend.documents_created.lock().unwrap(), 0);

        assert!(backend.ops().is_empty());
    }

    #[test]
    fn test_crlf_content_splits_into_paragraphs() {
        let backend = RecordingBackend::default();
        assemble(&request("one\r\ntwo"), &backend).unwrap();
        let shown: Vec<Op> = backend
            .ops()
            .into_iter()
            .filter(|op| matches!(op, Op::Show(_)))
            .collect();
        assert_eq!(
            shown,
            vec![
                Op::Show("Test PDF".into()),
                Op::Show("one".into()),
                Op::Show("".into()),
                Op::Show("two".into()),
                Op::Show("".into()),
            ]
        );
    }

    #[test]
    fn test_pdf_output_with_and_without_image() {
        let backend = PdfBackend::new();
        let plain = assemble(&request("This is a test PDF document."), &backend).unwrap();
        let with_image = assemble(
            &with_png(request("This is a test PDF document."), 300, 300),
            &backend,
        )
        .unwrap();

        assert!(plain.starts_with(b"%PDF-"));
        assert!(with_image.starts_with(b"%PDF-"));
        assert!(with_image.len() > plain.len());
    }

    #[test]
    fn test_metadata_passes_through_unmodified() {
        let backend = RecordingBackend::default();
        let req = CompositionRequest::new("  Padded Title ", "body", "Ada (Lovelace)");
        assemble(&req, &backend).unwrap();
        assert_eq!(
            backend.ops()[0],
            Op::Metadata("  Padded Title ".into(), "Ada (Lovelace)".into())
        );
    }
}
