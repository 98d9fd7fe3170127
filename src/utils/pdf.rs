use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::AppError;

/// Renders the completion certificate and returns the PDF bytes.
///
/// The layout is a fixed three-line A4 landscape page using the builtin
/// Helvetica font, so no font assets need to ship with the binary. The
/// percent is engraved as received (it is validated upstream).
pub fn render_certificate(name: &str, percent: &str) -> Result<Vec<u8>, AppError> {
    let (document, page, layer) = PdfDocument::new(
        "Certificate of Completion",
        Mm(297.0),
        Mm(210.0),
        "Layer 1",
    );

    let font = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let layer = document.get_page(page).get_layer(layer);
    layer.use_text("Certificate of Completion", 24.0, Mm(40.0), Mm(160.0), &font);
    layer.use_text(format!("Awarded to: {}", name), 18.0, Mm(40.0), Mm(140.0), &font);
    layer.use_text(format!("Score: {}%", percent), 18.0, Mm(40.0), Mm(120.0), &font);

    document
        .save_to_bytes()
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}
