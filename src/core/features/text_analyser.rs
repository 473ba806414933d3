use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use unicode_segmentation::UnicodeSegmentation;

/// Average silent reading speed, words per minute
const READING_WPM: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextAnalysis {
    pub word_count: usize,
    pub char_count: usize,
    pub char_count_no_spaces: usize,
    pub grapheme_count: usize,
    pub sentence_count: usize,
    pub line_count: usize,
    pub reading_time_sec: f64,
}

/// Perform text analysis (pure logic)
pub fn perform_analysis(text: &str) -> TextAnalysis {
    // unicode_sentences underflows on empty input
    if text.is_empty() {
        return TextAnalysis::default();
    }
    let word_count = text.unicode_words().count();
    let reading_time_sec = if word_count > 0 {
        (word_count as f64 / READING_WPM) * 60.0
    } else {
        0.0
    };

    TextAnalysis {
        word_count,
        char_count: text.chars().count(),
        char_count_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        grapheme_count: text.graphemes(true).count(),
        sentence_count: text
            .unicode_sentences()
            .filter(|s| s.unicode_words().next().is_some())
            .count(),
        line_count: text.lines().count(),
        reading_time_sec,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextAnalyserWidget;

impl Widget for TextAnalyserWidget {
    fn kind(&self) -> &'static str {
        "text_analyser"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("text", "Văn bản", FieldKind::TextArea)]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let text = input.get("text");
        if text.is_empty() {
            return None;
        }
        let a = perform_analysis(text);
        let count = |n: usize| format_number(n as f64, format);
        let seconds = NumberFormat { max_fraction_digits: 0, ..*format };

        Some(
            WidgetOutput::default()
                .line("Số từ", count(a.word_count))
                .line("Số ký tự", count(a.grapheme_count))
                .line("Ký tự (không khoảng trắng)", count(a.char_count_no_spaces))
                .line("Số câu", count(a.sentence_count))
                .line("Số dòng", count(a.line_count))
                .line(
                    "Thời gian đọc",
                    format!("{} giây", format_number(a.reading_time_sec.ceil(), &seconds)),
                ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_vietnamese_text() {
        let a = perform_analysis("Xin chào thế giới. Hôm nay trời đẹp!\nDòng hai");
        assert_eq!(a.word_count, 10);
        assert_eq!(a.sentence_count, 3);
        assert_eq!(a.line_count, 2);

        let combining = perform_analysis("e\u{301}");
        assert_eq!(combining.char_count, 2);
        assert_eq!(combining.grapheme_count, 1);
    }

    #[test]
    fn test_reading_time() {
        let text = "từ ".repeat(400);
        let a = perform_analysis(&text);
        assert_eq!(a.word_count, 400);
        assert!((a.reading_time_sec - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert_eq!(perform_analysis(""), TextAnalysis::default());
        let blank = perform_analysis(" ");
        assert_eq!(blank.word_count, 0);
        assert_eq!(blank.sentence_count, 0);
        assert_eq!(blank.char_count, 1);
    }

    #[test]
    fn test_widget() {
        let input = WidgetInput::new().set("text", "một hai ba");
        let output = TextAnalyserWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.value_of("Số từ"), Some("3"));
        assert_eq!(output.value_of("Thời gian đọc"), Some("1 giây"));
        assert!(TextAnalyserWidget.evaluate(&WidgetInput::new(), &NumberFormat::default()).is_none());
    }
}
