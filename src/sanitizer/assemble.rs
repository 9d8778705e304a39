//! Image-to-PDF assembly.
//!
//! Each rendered page becomes one page whose sole content is an image
//! XObject. Two encodings are supported because the tool historically
//! shipped both and neither variant is authoritative: lossless
//! FlateDecode RGB (png) and DCTDecode (jpeg).

use crate::sanitizer::RenderedPage;
use clap::ValueEnum;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::{DynamicImage, ImageEncoder};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use serde::Serialize;
use std::fmt;
use std::io::{Cursor, Write};

const JPEG_QUALITY: u8 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCodec {
    Png,
    Jpeg,
}

impl fmt::Display for ImageCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageCodec::Png => f.write_str("png"),
            ImageCodec::Jpeg => f.write_str("jpeg"),
        }
    }
}

/// Encode one page image into a PDF image stream body and its filter name.
/// Pages are flattened to 8-bit RGB either way; raster pages carry no alpha.
fn encode_page(image: &DynamicImage, codec: ImageCodec) -> anyhow::Result<(Vec<u8>, &'static str)> {
    let rgb = image.to_rgb8();
    match codec {
        ImageCodec::Jpeg => {
            let mut buf = Cursor::new(Vec::new());
            let encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
            encoder.write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )?;
            Ok((buf.into_inner(), "DCTDecode"))
        }
        ImageCodec::Png => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(rgb.as_raw())?;
            Ok((encoder.finish()?, "FlateDecode"))
        }
    }
}

/// Assemble the rendered pages, in order, into one PDF.
///
/// Page boxes preserve the physical size of the original pages:
/// `points = pixels * 72 / dpi`.
pub fn assemble_pdf(
    pages: &[RenderedPage],
    codec: ImageCodec,
    dpi: f32,
) -> anyhow::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let (data, filter) = encode_page(&page.image, codec)?;
        let width = page.image.width();
        let height = page.image.height();
        let width_pts = width as f32 * 72.0 / dpi;
        let height_pts = height as f32 * 72.0 / dpi;

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => filter,
            },
            data,
        ));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width_pts.into(),
                        0.into(),
                        0.into(),
                        height_pts.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(width_pts),
                Object::Real(height_pts),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)?;
    Ok(out)
}
