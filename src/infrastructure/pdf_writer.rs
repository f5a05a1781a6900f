//! Rendering page layouts to PDF files with printpdf

use crate::domain::export::layout::{PAGE_HEIGHT, PAGE_WIDTH};
use crate::domain::export::{DrawOp, FontWeight, PdfLayout};
use crate::error::{Result, SongbookError};
use crate::infrastructure::image::decode_data_url;
use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const LAYER_NAME: &str = "Sheet";

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Decode an attached image so it can be embedded.
/// Anything undecodable yields `None` and the export continues without it.
pub fn decode_image(data_url: Option<&str>) -> Option<DynamicImage> {
    let data_url = data_url?;
    let bytes = match decode_data_url(data_url) {
        Some(bytes) => bytes,
        None => {
            log::debug!("Attached image is not a base64 data URI, skipping");
            return None;
        }
    };

    match image_crate::load_from_memory(&bytes) {
        Ok(image) => Some(DynamicImage::ImageRgb8(image.to_rgb8())),
        Err(e) => {
            log::debug!("Attached image could not be decoded, skipping: {}", e);
            None
        }
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn pdf_error<E: std::fmt::Debug>(e: E) -> SongbookError {
    SongbookError::Pdf(format!("{:?}", e))
}

/// Draw `layout` into an A4 PDF at `path`, embedding `image` into image slots
pub fn write_pdf(layout: &PdfLayout, image: Option<&DynamicImage>, path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        layout.title.as_str(),
        pt_to_mm(PAGE_WIDTH),
        pt_to_mm(PAGE_HEIGHT),
        LAYER_NAME,
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(pt_to_mm(PAGE_WIDTH), pt_to_mm(PAGE_HEIGHT), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for op in &page.ops {
            draw(&layer, &fonts, op, image);
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_error)?;
    log::info!(
        "Wrote {} page(s) to {}",
        layout.pages.len(),
        path.display()
    );
    Ok(())
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, op: &DrawOp, image: Option<&DynamicImage>) {
    match op {
        DrawOp::Text {
            x,
            y,
            text,
            weight,
            size,
        } => {
            // Layout measures from the top edge, PDF from the bottom
            layer.use_text(
                text.as_str(),
                *size,
                pt_to_mm(*x),
                pt_to_mm(PAGE_HEIGHT - *y),
                fonts.for_weight(*weight),
            );
        }
        DrawOp::Image {
            x,
            y,
            width,
            height,
        } => {
            let Some(image) = image else {
                return;
            };
            let (px_width, px_height) = image.dimensions();
            if px_width == 0 || px_height == 0 {
                return;
            }

            // At 72 dpi one pixel is one point, so scale straight to the slot size
            let transform = ImageTransform {
                translate_x: Some(pt_to_mm(*x)),
                translate_y: Some(pt_to_mm(PAGE_HEIGHT - *y - *height)),
                scale_x: Some(*width / px_width as f32),
                scale_y: Some(*height / px_height as f32),
                dpi: Some(72.0),
                ..Default::default()
            };
            Image::from_dynamic_image(image).add_to_layer(layer.clone(), transform);
        }
    }
}
