use crate::layout::words::SEPARATOR;
use crate::script::WideScript;

/// Appends a single word to a line being rendered. Words ending in a wide-script
/// character are pushed bare; any other word is followed by a separator. An empty word
/// (left by consecutive separators) becomes a lone separator.
fn push_word(line: &mut String, word: &str, wide_script: WideScript) {
    match word.chars().next_back() {
        None => line.push(SEPARATOR),
        Some(last) if wide_script(last) => line.push_str(word),
        Some(_) => {
            line.push_str(word);
            line.push(SEPARATOR);
        }
    }
}

/// Renders a group of words (one wrapped line) back into printable text.
///
/// Separators are attached per word rather than placed between words, so runs of CJK
/// characters read without artificial gaps while other words keep a single space after
/// them, including the last one on the line.
///
/// ```
/// use rag_wrap::{is_han, layout::render_line};
///
/// assert_eq!(render_line(&["你", "好", "world"], is_han), "你好world ");
/// assert_eq!(render_line(&["a", "", "b"], is_han), "a  b ");
/// ```
pub fn render_line<S: AsRef<str>>(words: &[S], wide_script: WideScript) -> String {
    let capacity = words.iter().map(|word| word.as_ref().len() + 1).sum();
    let mut line = String::with_capacity(capacity);
    for word in words {
        push_word(&mut line, word.as_ref(), wide_script);
    }
    line
}
