use unicode_script::{Script, UnicodeScript};

/// Classifies characters that are laid out as standalone, separator-free words
pub type WideScript = fn(char) -> bool;

/// Whether the character belongs to the Han (CJK ideograph) script. Han characters are
/// split into single-character words and are never followed by a separator when rendered.
pub fn is_han(ch: char) -> bool {
    ch.script() == Script::Han
}
