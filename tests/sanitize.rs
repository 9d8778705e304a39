//! Assembly and output naming for the sanitizer, using synthetic page
//! images so no pdfium install is needed.

use image::{DynamicImage, RgbImage};
use pdfsec::sanitizer::assemble::{assemble_pdf, ImageCodec};
use pdfsec::sanitizer::{output_path_for, RenderedPage, RENDER_DPI};
use std::path::Path;

fn pages(n: usize) -> Vec<RenderedPage> {
    (0..n)
        .map(|index| RenderedPage {
            index,
            image: DynamicImage::ImageRgb8(RgbImage::from_pixel(
                120,
                90,
                image::Rgb([200, 200, 200]),
            )),
        })
        .collect()
}

#[test]
fn assembles_one_page_per_rendered_image() {
    let bytes = assemble_pdf(&pages(3), ImageCodec::Png, RENDER_DPI).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn assembles_jpeg_encoded_pages() {
    let bytes = assemble_pdf(&pages(2), ImageCodec::Jpeg, RENDER_DPI).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn single_page_output_is_loadable() {
    let bytes = assemble_pdf(&pages(1), ImageCodec::Png, RENDER_DPI).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn output_lands_in_sanitized_sibling_directory() {
    let out = output_path_for(Path::new("/home/user/Downloads/tax form.pdf"));
    assert_eq!(
        out,
        Path::new("/home/user/Downloads/sanitized/sanitized_tax form.pdf")
    );
}

#[test]
fn output_naming_is_deterministic() {
    let input = Path::new("/tmp/a.pdf");
    assert_eq!(output_path_for(input), output_path_for(input));
}
