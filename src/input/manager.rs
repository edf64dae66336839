//! Input manager routing uploaded buffers to the right extractor

use crate::error::Result;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;

/// An uploaded document, already read into memory by the caller. No on-disk
/// path is assumed to exist.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(data: Vec<u8>, file_name: Option<String>, content_type: String) -> Self {
        Self {
            data,
            file_name,
            content_type,
        }
    }
}

pub struct InputManager {
    pdf: PdfExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor::new(),
        }
    }

    pub fn extract_text(&self, upload: &UploadedFile) -> Result<String> {
        let file_type = FileType::detect(upload.file_name.as_deref(), &upload.content_type);
        let display_name = upload.file_name.as_deref().unwrap_or("<unnamed>");

        match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", display_name);
                self.pdf.extract(&upload.data)
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", display_name);
                DocxExtractor.extract(&upload.data)
            }
            FileType::Text => {
                info!("Reading buffer as plain text: {}", display_name);
                PlainTextExtractor.extract(&upload.data)
            }
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
