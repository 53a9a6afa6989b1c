//! Streaming parser for word-tag markup (Tesseract-style hOCR).
//!
//! Tesseract tags every recognized word as its own span (`ocrx_word`,
//! with `ocr_word` as the older spelling) carrying a
//! `bbox X1 Y1 X2 Y2; x_wconf C` title, and wraps each line of words in
//! an `ocr_line` span. The scanner keeps an explicit stack of span
//! classifications so close events pair up correctly even when
//! unrelated spans nest inside a word or line.

use crate::utils::{decode_attr, decode_text};
use log::debug;
use ocrmark_core::{LineBox, OcrMarkError, Rect, Result, WordBox};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::mem;

/// Classification of an open span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Word,
    Line,
    /// Word or line span whose descriptor could not be read; the whole
    /// region is dropped without failing the document
    Ignore,
    Other,
}

/// A word span whose close event has not arrived yet
#[derive(Debug)]
struct OpenWord {
    text: String,
    position: Rect,
    confidence: i32,
}

/// One-document scanner producing both a flat word view and a nested
/// line view of the recognized content.
///
/// Not resumable: construct a fresh parser per document.
#[derive(Debug, Default)]
pub(crate) struct WordSpanParser {
    tag_stack: Vec<SpanKind>,
    open_word: Option<OpenWord>,
    line_position: Option<Rect>,
    pending_words: Vec<WordBox>,
    /// Every word box, in source order
    pub(crate) words: Vec<WordBox>,
    /// Line boxes with their word boxes nested
    pub(crate) lines: Vec<LineBox>,
}

impl WordSpanParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consume one complete document.
    ///
    /// # Errors
    /// Returns [`OcrMarkError::ParseError`] when the markup itself
    /// cannot be tokenized. Malformed word/line descriptors do not
    /// error; those regions are skipped.
    pub(crate) fn feed(&mut self, input: &str) -> Result<()> {
        let mut reader = Reader::from_str(input);
        reader.trim_text(false);
        reader.check_end_names(false);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => self.handle_open(&e),
                Ok(Event::Empty(e)) => {
                    self.handle_open(&e);
                    if e.name().as_ref() == b"span" {
                        self.handle_span_close();
                    }
                }
                Ok(Event::Text(e)) => self.handle_text(&decode_text(&e)),
                Ok(Event::End(e)) if e.name().as_ref() == b"span" => self.handle_span_close(),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(OcrMarkError::ParseError(format!(
                        "markup error at byte {}: {e}",
                        reader.buffer_position()
                    )));
                }
            }
            buf.clear();
        }
        Ok(())
    }

    fn handle_open(&mut self, e: &BytesStart) {
        if e.name().as_ref() != b"span" {
            return;
        }
        let mut class = None;
        let mut title = None;
        for attr in e.attributes().flatten() {
            match attr.key.as_ref() {
                b"class" => class = Some(decode_attr(&attr)),
                b"title" => title = Some(decode_attr(&attr)),
                _ => {}
            }
        }
        let kind = match (class.as_deref(), title.as_deref()) {
            (Some("ocr_word" | "ocrx_word"), Some(title)) => match Self::word_descriptor(title) {
                Ok((position, confidence)) => {
                    self.open_word = Some(OpenWord {
                        text: String::new(),
                        position,
                        confidence,
                    });
                    SpanKind::Word
                }
                // deprecated/incompatible markup variant: drop the
                // region, keep scanning the rest of the document
                Err(_) => SpanKind::Ignore,
            },
            (Some("ocr_line"), Some(title)) => match parse_bbox(title) {
                Ok(position) => {
                    self.line_position = Some(position);
                    self.pending_words.clear();
                    SpanKind::Line
                }
                Err(_) => SpanKind::Ignore,
            },
            _ => SpanKind::Other,
        };
        self.tag_stack.push(kind);
    }

    fn handle_text(&mut self, data: &str) {
        if let Some(word) = &mut self.open_word {
            word.text.push_str(data);
        }
    }

    fn handle_span_close(&mut self) {
        match self.tag_stack.pop() {
            Some(SpanKind::Word) => {
                // a close with nothing accumulated is a no-op
                if let Some(word) = self.open_word.take() {
                    let boxed =
                        WordBox::with_confidence(word.text, word.position, word.confidence);
                    self.pending_words.push(boxed.clone());
                    self.words.push(boxed);
                }
            }
            Some(SpanKind::Line) => {
                if let Some(position) = self.line_position {
                    self.lines
                        .push(LineBox::new(mem::take(&mut self.pending_words), position));
                }
            }
            // Other/Ignore spans and stray closes fall through
            _ => {}
        }
    }

    fn word_descriptor(title: &str) -> Result<(Rect, i32)> {
        let confidence = parse_confidence(title)?;
        let position = parse_bbox(title)?;
        Ok((position, confidence))
    }
}

/// Extract the `bbox X1 Y1 X2 Y2` piece of a span title.
fn parse_bbox(title: &str) -> Result<Rect> {
    for piece in title.split(';') {
        let piece = piece.trim();
        let Some(rest) = piece.strip_prefix("bbox") else {
            continue;
        };
        let mut coords = [0_i32; 4];
        let mut tokens = rest.split_whitespace();
        for coord in &mut coords {
            let token = tokens.next().ok_or_else(|| {
                OcrMarkError::ParseError(format!("truncated bbox descriptor: {title:?}"))
            })?;
            *coord = token.parse().map_err(|_| {
                OcrMarkError::ParseError(format!("invalid bbox coordinate {token:?} in {title:?}"))
            })?;
        }
        return Ok(Rect::from_coords(coords[0], coords[1], coords[2], coords[3]));
    }
    Err(OcrMarkError::ParseError(format!(
        "no bbox in title {title:?}"
    )))
}

/// Extract the `x_wconf C` piece of a span title, defaulting to 0 when
/// the engine emitted none.
fn parse_confidence(title: &str) -> Result<i32> {
    for piece in title.split(';') {
        let piece = piece.trim();
        let Some(rest) = piece.strip_prefix("x_wconf") else {
            continue;
        };
        let token = rest.split_whitespace().next().ok_or_else(|| {
            OcrMarkError::ParseError(format!("empty x_wconf descriptor: {title:?}"))
        })?;
        return token.parse().map_err(|_| {
            OcrMarkError::ParseError(format!("invalid x_wconf value {token:?} in {title:?}"))
        });
    }
    debug!("confidence measure not found in {title:?}");
    Ok(0)
}
