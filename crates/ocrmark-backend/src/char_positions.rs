//! Streaming parser for char-position markup (Cuneiform-style).
//!
//! Cuneiform reports each line's text in one `ocr_line` span and pairs
//! it with an `ocr_cinfo` span whose title lists four coordinates per
//! character: an `x_bboxes` preamble token first, then quadruples in
//! source order, with `-1 -1 -1 -1` standing in for every space. Word
//! boxes are recovered by consuming four tokens per character and
//! aggregating the min/max corners across each word.

use crate::utils::{decode_attr, decode_text};
use ocrmark_core::{OcrMarkError, Rect, Result, WordBox};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One-document scanner producing a flat word view. Line grouping is
/// left to callers.
///
/// Not resumable: construct a fresh parser per document.
#[derive(Debug, Default)]
pub(crate) struct CharPositionParser {
    line_text: Option<String>,
    /// Unconsumed coordinate tokens. Deliberately not cleared on line
    /// close: leftovers after a line's last word are dropped at the
    /// next content-region open.
    positions: Vec<String>,
    /// Every word box, in source order
    pub(crate) words: Vec<WordBox>,
}

impl CharPositionParser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consume one complete document.
    ///
    /// # Errors
    /// Returns [`OcrMarkError::CoordinatesExhausted`] when a line's
    /// text needs more coordinate quadruples than its positions list
    /// holds, [`OcrMarkError::InvalidCoordinate`] on a non-integer
    /// token, and [`OcrMarkError::ParseError`] when the markup cannot
    /// be tokenized. All are fatal for the document.
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
                    self.handle_close()?;
                }
                Ok(Event::Text(e)) => {
                    if let Some(text) = &mut self.line_text {
                        text.push_str(&decode_text(&e));
                    }
                }
                Ok(Event::End(_)) => self.handle_close()?,
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
        match class.as_deref() {
            Some("ocr_line") => {
                self.line_text = Some(String::new());
                self.positions.clear();
            }
            Some("ocr_cinfo") => {
                if let Some(title) = title {
                    // first token is the x_bboxes preamble; every
                    // literal -1 is a space-sentinel coordinate
                    self.positions = title
                        .split_whitespace()
                        .skip(1)
                        .filter(|token| *token != "-1")
                        .map(str::to_owned)
                        .collect();
                }
            }
            _ => {}
        }
    }

    /// Assemble word boxes once a line's text and positions are both in
    /// hand. Fires on every close event, mirroring the loose nesting
    /// the engine emits.
    fn handle_close(&mut self) -> Result<()> {
        if self.positions.is_empty() {
            return Ok(());
        }
        let Some(text) = self.line_text.take() else {
            return Ok(());
        };
        for word in text.split(' ') {
            if word.is_empty() {
                continue;
            }
            let needed = 4 * word.chars().count();
            if needed > self.positions.len() {
                return Err(OcrMarkError::CoordinatesExhausted {
                    word: word.to_string(),
                    needed,
                    available: self.positions.len(),
                });
            }
            let mut left = i32::MAX;
            let mut top = i32::MAX;
            let mut right = i32::MIN;
            let mut bottom = i32::MIN;
            for quad in self.positions[..needed].chunks_exact(4) {
                left = left.min(parse_coordinate(&quad[0])?);
                top = top.min(parse_coordinate(&quad[1])?);
                right = right.max(parse_coordinate(&quad[2])?);
                bottom = bottom.max(parse_coordinate(&quad[3])?);
            }
            self.positions.drain(..needed);
            self.words.push(WordBox::new(
                word,
                Rect::from_coords(left, top, right, bottom),
            ));
        }
        Ok(())
    }
}

fn parse_coordinate(token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| OcrMarkError::InvalidCoordinate(token.to_string()))
}
