//! File type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
}

impl FileType {
    /// Pick an extraction strategy from the file name and the declared
    /// content type, first match wins:
    ///
    /// 1. `.pdf` extension, or a content type mentioning "pdf";
    /// 2. `.docx` extension, or a content type mentioning "word" or
    ///    "officedocument";
    /// 3. everything else is treated as plain UTF-8 text.
    pub fn detect(file_name: Option<&str>, content_type: &str) -> Self {
        let extension = file_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        let content_type = content_type.to_lowercase();

        if extension == "pdf" || content_type.contains("pdf") {
            FileType::Pdf
        } else if extension == "docx"
            || content_type.contains("word")
            || content_type.contains("officedocument")
        {
            FileType::Docx
        } else {
            FileType::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_pdf_by_extension() {
        assert_eq!(
            FileType::detect(Some("resume.pdf"), "application/octet-stream"),
            FileType::Pdf
        );
        assert_eq!(FileType::detect(Some("RESUME.PDF"), ""), FileType::Pdf);
    }

    #[test]
    fn test_detect_pdf_by_content_type() {
        assert_eq!(FileType::detect(None, "application/pdf"), FileType::Pdf);
    }

    #[test]
    fn test_detect_docx() {
        assert_eq!(FileType::detect(Some("resume.docx"), ""), FileType::Docx);
        assert_eq!(FileType::detect(None, "application/msword"), FileType::Docx);
        assert_eq!(
            FileType::detect(
                None,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            FileType::Docx
        );
    }

    #[test]
    fn test_pdf_extension_wins_over_word_content_type() {
        assert_eq!(
            FileType::detect(Some("resume.pdf"), "application/msword"),
            FileType::Pdf
        );
    }

    #[test]
    fn test_everything_else_is_text() {
        assert_eq!(FileType::detect(Some("notes.txt"), "text/plain"), FileType::Text);
        assert_eq!(FileType::detect(Some("resume.doc"), ""), FileType::Text);
        assert_eq!(FileType::detect(None, ""), FileType::Text);
    }
}
