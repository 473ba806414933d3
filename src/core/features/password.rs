//! Random password generator

use super::{Widget, WidgetInput};
use crate::core::convert::format::{format_number, NumberFormat};
use crate::shared::types::{FieldKind, FieldSpec, WidgetOutput};
use rand::seq::SliceRandom;
use rand::Rng;

pub const PASSWORD_LABEL: &str = "Mật khẩu";
pub const ENTROPY_LABEL: &str = "Độ mạnh (bit)";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn classes(&self) -> Vec<&'static [u8]> {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter_map(|(enabled, set)| enabled.then_some(set))
        .collect()
    }

    /// Bits of entropy for a uniformly drawn password of this shape
    pub fn entropy_bits(&self) -> f64 {
        let pool: usize = self.classes().iter().map(|c| c.len()).sum();
        if pool == 0 {
            return 0.0;
        }
        self.length as f64 * (pool as f64).log2()
    }
}

/// Generate a password containing at least one character of every enabled class.
///
/// Returns `None` when no class is enabled. Length is clamped to
/// `MIN_LENGTH..=MAX_LENGTH`.
pub fn generate_password<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> Option<String> {
    let classes = options.classes();
    if classes.is_empty() {
        return None;
    }
    let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);
    let pool: Vec<u8> = classes.iter().flat_map(|c| c.iter().copied()).collect();

    let mut chars: Vec<u8> = classes
        .iter()
        .filter_map(|class| class.choose(rng).copied())
        .collect();
    while chars.len() < length {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }
    chars.shuffle(rng);
    String::from_utf8(chars).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordWidget;

impl Widget for PasswordWidget {
    fn kind(&self) -> &'static str {
        "password_generator"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("length", "Độ dài", FieldKind::Number).with_default("16"),
            FieldSpec::new("lowercase", "Chữ thường (a-z)", FieldKind::Checkbox).with_default("true"),
            FieldSpec::new("uppercase", "Chữ hoa (A-Z)", FieldKind::Checkbox).with_default("true"),
            FieldSpec::new("digits", "Chữ số (0-9)", FieldKind::Checkbox).with_default("true"),
            FieldSpec::new("symbols", "Ký tự đặc biệt", FieldKind::Checkbox).with_default("true"),
        ]
    }

    fn evaluate(&self, input: &WidgetInput, format: &NumberFormat) -> Option<WidgetOutput> {
        let length = input.number("length")?;
        if length < 1.0 {
            return None;
        }
        let options = PasswordOptions {
            length: length as usize,
            lowercase: input.flag("lowercase", true),
            uppercase: input.flag("uppercase", true),
            digits: input.flag("digits", true),
            symbols: input.flag("symbols", true),
        };
        let password = generate_password(&options, &mut rand::thread_rng())?;
        let bits = NumberFormat { max_fraction_digits: 0, ..*format };
        let clamped = PasswordOptions { length: password.len(), ..options };
        Some(
            WidgetOutput::default()
                .line(PASSWORD_LABEL, password)
                .line(ENTROPY_LABEL, format_number(clamped.entropy_bits(), &bits)),
        )
    }
}
