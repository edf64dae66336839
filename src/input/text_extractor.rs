//! Text extraction from in-memory document buffers

use crate::error::{Result, ResumeMatcherError};
use log::{debug, warn};

/// Converts one document format into plain text. Implementations operate
/// purely on the caller's byte buffer; nothing is written to disk.
pub trait TextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String>;
}

/// PDF decoding backend. `PdfExtractor` keeps an ordered list of these and
/// tries each in turn until one yields text.
trait PdfBackend: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, data: &[u8]) -> anyhow::Result<String>;
}

/// Primary backend: the `pdf-extract` crate's whole-document decoder.
struct PdfExtractBackend;

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, data: &[u8]) -> anyhow::Result<String> {
        Ok(pdf_extract::extract_text_from_mem(data)?)
    }
}

/// Fallback backend: `lopdf`, extracting page by page and concatenating the
/// pages with newlines in page order.
struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, data: &[u8]) -> anyhow::Result<String> {
        let doc = lopdf::Document::load_mem(data)?;
        let mut pages = Vec::new();

        for page_number in doc.get_pages().keys() {
            match doc.extract_text(&[*page_number]) {
                Ok(page_text) => pages.push(page_text),
                Err(e) => warn!("Failed to extract text from page {}: {}", page_number, e),
            }
        }

        Ok(pages.join("\n"))
    }
}

pub struct PdfExtractor {
    backends: Vec<Box<dyn PdfBackend>>,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self {
            backends: vec![Box::new(PdfExtractBackend), Box::new(LopdfBackend)],
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String> {
        let mut failures = Vec::new();

        for backend in &self.backends {
            debug!("Trying PDF backend: {}", backend.name());
            match backend.extract(data) {
                Ok(text) if !text.trim().is_empty() => return Ok(text),
                Ok(_) => failures.push(format!("{}: produced no text", backend.name())),
                Err(e) => failures.push(format!("{}: {}", backend.name(), e)),
            }
        }

        Err(ResumeMatcherError::PdfExtraction(format!(
            "all backends failed ({})",
            failures.join("; ")
        )))
    }
}

/// Office Open XML text extraction, paragraph boundaries preserved as
/// newlines.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, data: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| ResumeMatcherError::DocxExtraction(format!("Failed to read DOCX container: {}", e)))?;

        let mut paragraphs = Vec::new();
        for child in docx.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                let mut text = String::new();
                for paragraph_child in paragraph.children {
                    if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                        for run_child in run.children {
                            if let docx_rs::RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                paragraphs.push(text);
            }
        }

        Ok(paragraphs.join("\n"))
    }
}

/// No extraction at all: the buffer already is the text.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let text = PlainTextExtractor.extract(b"Jane Doe\njane@example.com").unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com");
    }

    #[test]
    fn test_plain_text_tolerates_invalid_utf8() {
        let text = PlainTextExtractor.extract(&[b'h', b'i', 0xff]).unwrap();
        assert!(text.starts_with("hi"));
    }

    #[test]
    fn test_pdf_garbage_fails_with_aggregated_error() {
        let err = PdfExtractor::new().extract(b"this is not a pdf").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("pdf-extract"));
        assert!(message.contains("lopdf"));
    }

    #[test]
    fn test_docx_garbage_fails() {
        assert!(DocxExtractor.extract(b"this is not a zip archive").is_err());
    }
}
