//! Hashing and text encoding demos

use super::{Widget, WidgetInput};
use crate::core::convert::format::NumberFormat;
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256, Sha512};

pub const RESULT_LABEL: &str = "Kết quả";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha256, HashAlgorithm::Sha512];

    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

/// Lowercase hex digest of `input`'s UTF-8 bytes
pub fn hash_hex(input: &str, algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(input.as_bytes())),
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(input.as_bytes())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(input.as_bytes())),
    }
}

/// Shows every supported digest at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashWidget;

impl Widget for HashWidget {
    fn kind(&self) -> &'static str {
        "hash_generator"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("text", "Văn bản", FieldKind::TextArea)]
    }

    fn evaluate(&self, input: &WidgetInput, _format: &NumberFormat) -> Option<WidgetOutput> {
        let text = input.get("text");
        if text.is_empty() {
            return None;
        }
        Some(
            HashAlgorithm::ALL
                .iter()
                .fold(WidgetOutput::default(), |out, alg| out.line(alg.label(), hash_hex(text, *alg))),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Base64,
    Url,
}

impl Codec {
    pub fn encode(&self, input: &str) -> String {
        match self {
            Codec::Base64 => STANDARD.encode(input.as_bytes()),
            Codec::Url => urlencoding::encode(input).into_owned(),
        }
    }

    /// `None` when `input` is not valid for this codec or does not decode to UTF-8
    pub fn decode(&self, input: &str) -> Option<String> {
        match self {
            Codec::Base64 => STANDARD
                .decode(input.trim())
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok()),
            Codec::Url => urlencoding::decode(input).ok().map(|s| s.into_owned()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderWidget {
    pub codec: Codec,
}

impl EncoderWidget {
    pub fn new(codec: Codec) -> Self {
        Self { codec }
    }
}

impl Widget for EncoderWidget {
    fn kind(&self) -> &'static str {
        match self.codec {
            Codec::Base64 => "base64_encoder",
            Codec::Url => "url_encoder",
        }
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("text", "Văn bản", FieldKind::TextArea),
            FieldSpec::new("direction", "Chế độ", FieldKind::Select)
                .with_default("encode")
                .with_options([("encode", "Mã hóa"), ("decode", "Giải mã")]),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, _format: &NumberFormat) -> Option<WidgetOutput> {
        let text = input.get("text");
        if text.is_empty() {
            return None;
        }
        let result = match input.get_or("direction", "encode") {
            "encode" => self.codec.encode(text),
            "decode" => self.codec.decode(text)?,
            _ => return None,
        };
        Some(WidgetOutput::default().line(RESULT_LABEL, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(hash_hex("abc", HashAlgorithm::Md5), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            hash_hex("abc", HashAlgorithm::Sha256),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(hash_hex("abc", HashAlgorithm::Sha512).len(), 128);
    }

    #[test]
    fn test_hash_widget_lists_all() {
        let input = WidgetInput::new().set("text", "abc");
        let output = HashWidget.evaluate(&input, &NumberFormat::default()).unwrap();
        assert_eq!(output.lines.len(), 3);
        assert_eq!(output.value_of("MD5"), Some("900150983cd24fb0d6963f7d28e17f72"));
    }

    #[test]
    fn test_base64() {
        assert_eq!(Codec::Base64.encode("Xin chào"), "WGluIGNow6Bv");
        assert_eq!(Codec::Base64.decode("WGluIGNow6Bv").as_deref(), Some("Xin chào"));
        assert_eq!(Codec::Base64.decode("%%%"), None);
    }

    #[test]
    fn test_url() {
        assert_eq!(Codec::Url.encode("a b&c"), "a%20b%26c");
        assert_eq!(Codec::Url.decode("a%20b%26c").as_deref(), Some("a b&c"));
    }

    #[test]
    fn test_encoder_widget_invalid_decode() {
        let widget = EncoderWidget::new(Codec::Base64);
        let input = WidgetInput::new().set("text", "not base64!").set("direction", "decode");
        assert!(widget.evaluate(&input, &NumberFormat::default()).is_none());
        assert_eq!(widget.kind(), "base64_encoder");
    }
}
