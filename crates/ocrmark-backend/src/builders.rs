//! Output builders: the expected-shape contracts handed to OCR engines.
//!
//! A builder declares what a recognition pass should produce (plain
//! text, word boxes, line boxes), parses engine markup into that shape,
//! and renders the shape back out. Markup parsing tries the word-tag
//! dialect first, then the char-position dialect, and returns the first
//! non-empty result; some engine versions leave a trailing empty region
//! behind, which is trimmed here before the result is handed back.

use crate::char_positions::CharPositionParser;
use crate::traits::OutputBuilder;
use crate::word_spans::WordSpanParser;
use ocrmark_core::{HocrSerializer, LineBox, Rect, Result, WordBox};

/// Plain-text output contract: the engine's raw text, as-is.
#[derive(Debug, Clone, Default)]
pub struct TextBuilder {
    digits_only: bool,
    built_text: Vec<String>,
}

impl TextBuilder {
    /// Create a plain-text builder
    #[must_use = "builder is created but not used"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plain-text builder restricted to digit recognition
    /// (`[0-9.]`).
    ///
    /// The restriction is a capability flag, not a different output
    /// shape; see [`OutputBuilder::digits_only`].
    #[must_use = "builder is created but not used"]
    pub fn digits() -> Self {
        Self {
            digits_only: true,
            ..Self::default()
        }
    }
}

impl OutputBuilder for TextBuilder {
    type Output = String;

    fn file_extensions(&self) -> &'static [&'static str] {
        &["txt"]
    }

    fn digits_only(&self) -> bool {
        self.digits_only
    }

    fn parse(&self, input: &str) -> Result<String> {
        Ok(input.trim().to_string())
    }

    fn render(&self, output: &String) -> String {
        output.clone()
    }

    fn start_line(&mut self, _position: Rect) {
        self.built_text.push(String::new());
    }

    fn add_word(&mut self, word: &str, _position: Rect, _confidence: i32) {
        if let Some(line) = self.built_text.last_mut() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
    }

    fn into_output(self) -> String {
        self.built_text.join("\n")
    }
}

/// Word-box output contract: every recognized word with its rectangle
/// and confidence, in source order.
#[derive(Debug, Clone, Default)]
pub struct WordBoxBuilder {
    word_boxes: Vec<WordBox>,
}

impl WordBoxBuilder {
    /// Create a word-box builder
    #[must_use = "builder is created but not used"]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputBuilder for WordBoxBuilder {
    type Output = Vec<WordBox>;

    fn file_extensions(&self) -> &'static [&'static str] {
        &["html", "hocr"]
    }

    fn parse(&self, input: &str) -> Result<Vec<WordBox>> {
        let mut word_parser = WordSpanParser::new();
        word_parser.feed(input)?;
        if !word_parser.words.is_empty() {
            let mut words = word_parser.words;
            trim_trailing_empty_word(&mut words);
            return Ok(words);
        }
        let mut char_parser = CharPositionParser::new();
        char_parser.feed(input)?;
        let mut words = char_parser.words;
        trim_trailing_empty_word(&mut words);
        // neither dialect matched: empty output, not an error
        Ok(words)
    }

    fn render(&self, output: &Vec<WordBox>) -> String {
        HocrSerializer::new().serialize_words(output)
    }

    fn start_line(&mut self, _position: Rect) {}

    fn add_word(&mut self, word: &str, position: Rect, confidence: i32) {
        self.word_boxes
            .push(WordBox::with_confidence(word, position, confidence));
    }

    fn into_output(self) -> Vec<WordBox> {
        self.word_boxes
    }
}

/// Line-box output contract: lines of word boxes, words nested per
/// source.
#[derive(Debug, Clone, Default)]
pub struct LineBoxBuilder {
    digits_only: bool,
    lines: Vec<LineBox>,
}

impl LineBoxBuilder {
    /// Create a line-box builder
    #[must_use = "builder is created but not used"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line-box builder restricted to digit recognition
    /// (`[0-9.]`); see [`OutputBuilder::digits_only`].
    #[must_use = "builder is created but not used"]
    pub fn digits() -> Self {
        Self {
            digits_only: true,
            ..Self::default()
        }
    }
}

impl OutputBuilder for LineBoxBuilder {
    type Output = Vec<LineBox>;

    fn file_extensions(&self) -> &'static [&'static str] {
        &["html", "hocr"]
    }

    fn digits_only(&self) -> bool {
        self.digits_only
    }

    fn parse(&self, input: &str) -> Result<Vec<LineBox>> {
        let mut word_parser = WordSpanParser::new();
        word_parser.feed(input)?;
        if !word_parser.words.is_empty() {
            let mut lines = word_parser.lines;
            trim_trailing_empty_line(&mut lines);
            return Ok(lines);
        }
        let mut char_parser = CharPositionParser::new();
        char_parser.feed(input)?;
        let mut words = char_parser.words;
        trim_trailing_empty_word(&mut words);
        // the char-position dialect carries no line grouping; each word
        // becomes its own single-word line
        Ok(words
            .into_iter()
            .map(|word| {
                let position = word.position;
                LineBox::new(vec![word], position)
            })
            .collect())
    }

    fn render(&self, output: &Vec<LineBox>) -> String {
        HocrSerializer::new().serialize_lines(output)
    }

    fn start_line(&mut self, position: Rect) {
        // never open a new line while the last one is still empty
        if self
            .lines
            .last()
            .is_some_and(|line| line.content().is_empty())
        {
            return;
        }
        self.lines.push(LineBox::new(Vec::new(), position));
    }

    fn add_word(&mut self, word: &str, position: Rect, confidence: i32) {
        if let Some(line) = self.lines.last_mut() {
            line.word_boxes
                .push(WordBox::with_confidence(word, position, confidence));
        }
    }

    fn into_output(self) -> Vec<LineBox> {
        self.lines
    }
}

fn trim_trailing_empty_word(words: &mut Vec<WordBox>) {
    if words.last().is_some_and(|word| word.content.is_empty()) {
        words.pop();
    }
}

fn trim_trailing_empty_line(lines: &mut Vec<LineBox>) {
    if lines.last().is_some_and(|line| line.content().is_empty()) {
        lines.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORD_TAG_DOC: &str = concat!(
        r#"<span class="ocr_line" title="bbox 0 0 100 20">"#,
        r#"<span class="ocrx_word" title="bbox 0 0 40 20; x_wconf 90">Hello</span> "#,
        r#"<span class="ocrx_word" title="bbox 45 0 100 20; x_wconf 80">World</span>"#,
        r#"</span>"#,
    );

    const CHAR_POSITION_DOC: &str = concat!(
        r#"<span class="ocr_line">Hi x</span>"#,
        r#"<span class="ocr_cinfo" title="x_bboxes 0 0 10 10 11 0 20 10 -1 -1 -1 -1 30 0 40 12"></span>"#,
    );

    #[test]
    fn test_word_builder_reads_word_tag_dialect() {
        let words = WordBoxBuilder::new().parse(WORD_TAG_DOC).expect("parses");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].content, "Hello");
        assert_eq!(words[1].content, "World");
        assert_eq!(words[1].confidence, 80);
    }

    #[test]
    fn test_word_builder_falls_back_to_char_positions() {
        let words = WordBoxBuilder::new()
            .parse(CHAR_POSITION_DOC)
            .expect("parses");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].content, "Hi");
        assert_eq!(words[0].position, Rect::from_coords(0, 0, 20, 10));
    }

    #[test]
    fn test_line_builder_reads_word_tag_dialect() {
        let lines = LineBoxBuilder::new().parse(WORD_TAG_DOC).expect("parses");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content(), "Hello World");
        assert_eq!(lines[0].position, Rect::from_coords(0, 0, 100, 20));
    }

    #[test]
    fn test_line_builder_wraps_char_position_words() {
        let lines = LineBoxBuilder::new()
            .parse(CHAR_POSITION_DOC)
            .expect("parses");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].word_boxes.len(), 1);
        assert_eq!(lines[0].content(), "Hi");
        assert_eq!(lines[0].position, lines[0].word_boxes[0].position);
    }

    #[test]
    fn test_empty_input_is_not_an_error() {
        assert!(WordBoxBuilder::new().parse("").expect("parses").is_empty());
        assert!(LineBoxBuilder::new().parse("").expect("parses").is_empty());
    }

    #[test]
    fn test_unrecognized_dialect_yields_empty() {
        let words = WordBoxBuilder::new()
            .parse("<html><body><p>just text</p></body></html>")
            .expect("parses");
        assert!(words.is_empty());
    }

    #[test]
    fn test_trailing_empty_word_is_trimmed() {
        let markup = concat!(
            r#"<span class="ocrx_word" title="bbox 0 0 40 20; x_wconf 90">Hello</span>"#,
            r#"<span class="ocrx_word" title="bbox 45 0 46 20; x_wconf 0"></span>"#,
        );
        let words = WordBoxBuilder::new().parse(markup).expect("parses");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].content, "Hello");
    }

    #[test]
    fn test_trailing_empty_line_is_trimmed() {
        let markup = concat!(
            r#"<span class="ocr_line" title="bbox 0 0 100 20">"#,
            r#"<span class="ocrx_word" title="bbox 0 0 40 20; x_wconf 90">Hello</span>"#,
            r#"</span>"#,
            r#"<span class="ocr_line" title="bbox 0 25 100 45">"#,
            r#"<span class="ocrx_word" title="bbox 0 25 1 45; x_wconf 0"></span>"#,
            r#"</span>"#,
        );
        let lines = LineBoxBuilder::new().parse(markup).expect("parses");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content(), "Hello");
    }

    #[test]
    fn test_text_builder_trims_input() {
        let text = TextBuilder::new().parse("  Hello World\n").expect("parses");
        assert_eq!(text, "Hello World");
        assert_eq!(TextBuilder::new().render(&text), "Hello World");
    }

    #[test]
    fn test_text_builder_assembly() {
        let mut builder = TextBuilder::new();
        builder.start_line(Rect::from_coords(0, 0, 100, 20));
        builder.add_word("Hello", Rect::from_coords(0, 0, 40, 20), 90);
        builder.add_word("World", Rect::from_coords(45, 0, 100, 20), 80);
        builder.end_line();
        builder.start_line(Rect::from_coords(0, 25, 100, 45));
        builder.add_word("Second", Rect::from_coords(0, 25, 60, 45), 70);
        builder.end_line();
        assert_eq!(builder.into_output(), "Hello World\nSecond");
    }

    #[test]
    fn test_word_builder_assembly() {
        let mut builder = WordBoxBuilder::new();
        builder.start_line(Rect::from_coords(0, 0, 100, 20));
        builder.add_word("one", Rect::from_coords(0, 0, 30, 20), 95);
        builder.add_word("two", Rect::from_coords(35, 0, 60, 20), 85);
        builder.end_line();
        let words = builder.into_output();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].content, "one");
        assert_eq!(words[0].confidence, 95);
    }

    #[test]
    fn test_line_builder_assembly_skips_empty_lines() {
        let mut builder = LineBoxBuilder::new();
        builder.start_line(Rect::from_coords(0, 0, 100, 20));
        // still empty: the second start must not open another line
        builder.start_line(Rect::from_coords(0, 25, 100, 45));
        builder.add_word("word", Rect::from_coords(0, 0, 40, 20), 60);
        builder.end_line();
        builder.start_line(Rect::from_coords(0, 50, 100, 70));
        builder.add_word("next", Rect::from_coords(0, 50, 40, 70), 61);
        let lines = builder.into_output();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].content(), "word");
        assert_eq!(lines[0].position, Rect::from_coords(0, 0, 100, 20));
        assert_eq!(lines[1].content(), "next");
    }

    #[test]
    fn test_digit_variants_set_the_capability_flag() {
        assert!(!TextBuilder::new().digits_only());
        assert!(TextBuilder::digits().digits_only());
        assert!(!LineBoxBuilder::new().digits_only());
        assert!(LineBoxBuilder::digits().digits_only());
        assert!(!WordBoxBuilder::new().digits_only());
    }

    #[test]
    fn test_file_extensions() {
        assert_eq!(TextBuilder::new().file_extensions(), &["txt"]);
        assert_eq!(WordBoxBuilder::new().file_extensions(), &["html", "hocr"]);
        assert_eq!(LineBoxBuilder::new().file_extensions(), &["html", "hocr"]);
    }
}
