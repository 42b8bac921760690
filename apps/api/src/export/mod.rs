//! PDF export descriptor.
//!
//! Rasterization happens in the browser against the rendered preview; the
//! service owns the contract only: the filename convention and the page,
//! image, and canvas settings the client pipeline must use. On export
//! failure the client's documented fallback is the native print dialog.

pub mod handlers;

use serde::Serialize;

use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Serialize)]
pub struct PdfExportDescriptor {
    pub filename: String,
    pub margin: u32,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub jspdf: PageOptions,
    /// What the client does when export fails.
    pub fallback: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub quality: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CanvasOptions {
    pub scale: u32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    #[serde(rename = "letterRendering")]
    pub letter_rendering: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageOptions {
    pub unit: &'static str,
    pub format: &'static str,
    pub orientation: &'static str,
}

/// `{full name, whitespace runs collapsed to single underscores}_Resume.pdf`
pub fn pdf_filename(full_name: &str) -> String {
    let mut collapsed = String::with_capacity(full_name.len());
    let mut in_whitespace = false;
    for ch in full_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                collapsed.push('_');
                in_whitespace = true;
            }
        } else {
            collapsed.push(ch);
            in_whitespace = false;
        }
    }
    format!("{collapsed}_Resume.pdf")
}

/// A4 portrait, zero margin, 2x raster scale, JPEG at 0.98.
pub fn descriptor_for(doc: &ResumeDocument) -> PdfExportDescriptor {
    PdfExportDescriptor {
        filename: pdf_filename(&doc.personal.full_name),
        margin: 0,
        image: ImageOptions {
            kind: "jpeg",
            quality: 0.98,
        },
        html2canvas: CanvasOptions {
            scale: 2,
            use_cors: true,
            letter_rendering: true,
        },
        jspdf: PageOptions {
            unit: "mm",
            format: "a4",
            orientation: "portrait",
        },
        fallback: "print",
    }
}
