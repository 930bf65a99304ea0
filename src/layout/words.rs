use crate::measure::MeasureWidth;
use crate::script::WideScript;
use crate::units::Width;

/// The character placed between words, and the character newlines are normalized to
pub const SEPARATOR: char = ' ';

/// A single unbreakable fragment of text along with its measured display width.
///
/// Words are produced in the order they appear in the source text and that order is
/// never changed by any later stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub width: Width,
}

impl Word {
    /// Measure `text` and wrap it up as a word
    pub fn new<S: Into<String>, M: MeasureWidth + ?Sized>(text: S, measurer: &M) -> Word {
        let text = text.into();
        let width = measurer.width(&text);
        Word { text, width }
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Breaks the text into runs at every wide-script character. Each wide character becomes
/// a segment of its own, everything between them accumulates into a single segment.
fn segments(text: &str, wide_script: WideScript) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();

    for ch in text.chars() {
        if wide_script(ch) {
            // reuse the empty run left behind by a preceding wide character
            match segments.last_mut() {
                Some(last) if last.is_empty() => last.push(ch),
                _ => segments.push(ch.to_string()),
            }
            segments.push(String::new());
        } else {
            match segments.last_mut() {
                Some(last) => last.push(ch),
                None => segments.push(ch.to_string()),
            }
        }
    }

    if segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }

    segments
}

/// Splits text into an ordered list of measured words.
///
/// Characters for which `wide_script` returns `true` are always words of their own.
/// All other text is split on [`SEPARATOR`] after newlines (`\n`, `\r\n` and `\r`) have
/// been turned into separators. Consecutive separators produce empty words, which the
/// assembler renders as a bare separator so runs of spaces survive wrapping.
pub fn tokenize<M: MeasureWidth + ?Sized>(
    text: &str,
    wide_script: WideScript,
    measurer: &M,
) -> Vec<Word> {
    // normalize newlines
    let text = text.replace("\r\n", "\n");

    segments(&text, wide_script)
        .iter()
        .flat_map(|segment| {
            segment
                .replace(['\n', '\r'], &SEPARATOR.to_string())
                .split(SEPARATOR)
                .map(|word| Word::new(word, measurer))
                .collect::<Vec<Word>>()
        })
        .collect()
}

/// The widest of the given word widths, or zero if there are none. Both
/// [`effective_limit`] and the zero-limit clamp in
/// [`break_lines`](crate::layout::break_lines) raise limits to this.
pub(crate) fn widest(widths: impl IntoIterator<Item = Width>) -> Width {
    widths.into_iter().max().unwrap_or_default()
}

/// Raises `limit` to the width of the widest word, if necessary, so that every word can
/// be placed on a line of its own without overflowing.
///
/// An empty word list leaves the limit untouched.
pub fn effective_limit(words: &[Word], limit: usize) -> usize {
    let needed: usize = widest(words.iter().map(|word| word.width)).into();

    if needed > limit {
        tracing::debug!(
            requested = limit,
            effective = needed,
            "raising wrap limit to fit widest word"
        );
        needed
    } else {
        limit
    }
}
