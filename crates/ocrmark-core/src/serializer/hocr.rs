//! hOCR markup writer.
//!
//! Emits a very simplified hOCR document: a fixed XHTML preamble, then
//! one paragraph per top-level region. Word spans carry a
//! `bbox X1 Y1 X2 Y2; x_wconf C` title, line spans a bare `bbox` title
//! with their word spans nested inside, each preceded by a literal
//! space text node.

use crate::boxes::{LineBox, WordBox};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Fixed document preamble. Everything after it is a `<body>` of
/// `<p>`-wrapped region spans.
const XHTML_HEADER: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\"
 \"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">
<html xmlns=\"http://www.w3.org/1999/xhtml\">
<head>
\t<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" />
\t<title>OCR output</title>
</head>
";

/// Serializer from region models to hOCR markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HocrSerializer;

impl HocrSerializer {
    /// Create a new serializer
    #[inline]
    #[must_use = "serializer is created but not used"]
    pub const fn new() -> Self {
        Self
    }

    /// Render a flat word-box collection as an hOCR document.
    #[must_use = "rendered markup is returned but not used"]
    pub fn serialize_words(&self, boxes: &[WordBox]) -> String {
        let mut out = String::from(XHTML_HEADER);
        out.push_str("<body>\n");
        for word in boxes {
            out.push_str("<p>");
            Self::push_word_span(&mut out, word);
            out.push_str("</p>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    /// Render a line-box collection as an hOCR document, word spans
    /// nested inside each line span.
    #[must_use = "rendered markup is returned but not used"]
    pub fn serialize_lines(&self, lines: &[LineBox]) -> String {
        let mut out = String::from(XHTML_HEADER);
        out.push_str("<body>\n");
        for line in lines {
            out.push_str("<p>");
            Self::push_line_span(&mut out, line);
            out.push_str("</p>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn push_word_span(out: &mut String, word: &WordBox) {
        let _ = write!(
            out,
            "<span class=\"ocrx_word\" title=\"bbox {} {} {} {}; x_wconf {}\">{}</span>",
            word.position.top_left.x,
            word.position.top_left.y,
            word.position.bottom_right.x,
            word.position.bottom_right.y,
            word.confidence,
            escape(&word.content),
        );
    }

    fn push_line_span(out: &mut String, line: &LineBox) {
        let _ = write!(
            out,
            "<span class=\"ocr_line\" title=\"bbox {} {} {} {}\">",
            line.position.top_left.x,
            line.position.top_left.y,
            line.position.bottom_right.x,
            line.position.bottom_right.y,
        );
        for word in &line.word_boxes {
            out.push(' ');
            Self::push_word_span(out, word);
        }
        out.push_str("</span>");
    }
}
