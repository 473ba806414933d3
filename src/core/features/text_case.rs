//! Text case transforms
//!
//! Word splitting goes through `unicode_words`, so Vietnamese diacritics
//! survive every transform.

use super::{Widget, WidgetInput};
use crate::core::convert::format::NumberFormat;
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use unicode_segmentation::UnicodeSegmentation;

pub const RESULT_LABEL: &str = "Kết quả";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    Sentence,
    Snake,
    Kebab,
    Camel,
    Pascal,
    Toggle,
}

impl TextCase {
    pub const ALL: [TextCase; 9] = [
        TextCase::Upper,
        TextCase::Lower,
        TextCase::Title,
        TextCase::Sentence,
        TextCase::Snake,
        TextCase::Kebab,
        TextCase::Camel,
        TextCase::Pascal,
        TextCase::Toggle,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TextCase::Upper => "upper",
            TextCase::Lower => "lower",
            TextCase::Title => "title",
            TextCase::Sentence => "sentence",
            TextCase::Snake => "snake",
            TextCase::Kebab => "kebab",
            TextCase::Camel => "camel",
            TextCase::Pascal => "pascal",
            TextCase::Toggle => "toggle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TextCase::Upper => "CHỮ HOA",
            TextCase::Lower => "chữ thường",
            TextCase::Title => "Viết Hoa Mỗi Từ",
            TextCase::Sentence => "Viết hoa đầu câu",
            TextCase::Snake => "snake_case",
            TextCase::Kebab => "kebab-case",
            TextCase::Camel => "camelCase",
            TextCase::Pascal => "PascalCase",
            TextCase::Toggle => "đẢO cHỮ",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

fn capitalize(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// Rewrites each word in place, keeping punctuation and spacing
fn map_words(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split_word_bounds()
        .map(|segment| {
            if segment.unicode_words().next().is_some() {
                f(segment)
            } else {
                segment.to_string()
            }
        })
        .collect()
}

/// Lowercase everything, then capitalise the first letter of the text and
/// the first letter after `.`, `!` or `?` followed by whitespace, or after a
/// line break.
fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut capitalize = true;
    let mut chars = lower.chars().peekable();

    while let Some(c) = chars.next() {
        if capitalize && c.is_alphabetic() {
            out.extend(c.to_uppercase());
            capitalize = false;
            continue;
        }
        out.push(c);
        if c == '\n' {
            capitalize = true;
        } else if matches!(c, '.' | '!' | '?') && chars.peek().map_or(false, |n| n.is_whitespace()) {
            capitalize = true;
        }
    }
    out
}

fn toggle_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().to_string()
            } else {
                c.to_uppercase().to_string()
            }
        })
        .collect()
}

pub fn convert_case(text: &str, case: TextCase) -> String {
    if text.is_empty() {
        return String::new();
    }
    let words = || text.unicode_words().map(str::to_lowercase);
    match case {
        TextCase::Upper => text.to_uppercase(),
        TextCase::Lower => text.to_lowercase(),
        TextCase::Title => map_words(text, capitalize),
        TextCase::Sentence => sentence_case(text),
        TextCase::Snake => words().collect::<Vec<_>>().join("_"),
        TextCase::Kebab => words().collect::<Vec<_>>().join("-"),
        TextCase::Camel => words()
            .enumerate()
            .map(|(i, w)| if i == 0 { w } else { capitalize(&w) })
            .collect(),
        TextCase::Pascal => words().map(|w| capitalize(&w)).collect(),
        TextCase::Toggle => toggle_case(text),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCaseWidget;

impl Widget for TextCaseWidget {
    fn kind(&self) -> &'static str {
        "text_case"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("text", "Văn bản", FieldKind::TextArea),
            FieldSpec::new("case", "Kiểu chữ", FieldKind::Select)
                .with_default(TextCase::Upper.id())
                .with_options(TextCase::ALL.iter().map(|c| (c.id(), c.label()))),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, _format: &NumberFormat) -> Option<WidgetOutput> {
        let text = input.get("text");
        if text.is_empty() {
            return None;
        }
        let case = TextCase::parse(input.get_or("case", TextCase::Upper.id()))?;
        Some(WidgetOutput::default().line(RESULT_LABEL, convert_case(text, case)))
    }
}
