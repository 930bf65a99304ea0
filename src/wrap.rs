use crate::error::WrapError;
use crate::layout::{break_lines, effective_limit, render_line, tokenize, Word};
use crate::measure::{MeasureWidth, UnicodeWidth};
use crate::script::{is_han, WideScript};
use crate::units::Width;

/// The cost added to a line that overflows the limit. Large enough that the line breaker
/// only overflows when a single word is wider than the limit.
pub const DEFAULT_PENALTY: i64 = 100_000;

/// The number of cells budgeted between two adjacent words on a line
pub const DEFAULT_SPACING: usize = 1;

/// A wrapped paragraph
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Wrapped {
    /// The printable lines, in order. Lines keep the separator that follows their last
    /// word, if any.
    pub lines: Vec<String>,
    /// The limit the lines were actually wrapped to. This is never less than the limit
    /// that was asked for, and is raised to the width of the widest word when that word
    /// wouldn't otherwise fit.
    pub limit: usize,
}

/// Options controlling how text is wrapped.
///
/// The defaults match [`wrap_text`]: one cell between words, [`DEFAULT_PENALTY`] for
/// overflowing lines, Han ideographs treated as standalone words, and widths measured
/// with [`UnicodeWidth`].
///
/// ```
/// use rag_wrap::{AnsiAware, UnicodeWidth, WrapOptions};
///
/// let options = WrapOptions::new().spacing(1).measurer(AnsiAware(UnicodeWidth));
/// let wrapped = options.wrap("\u{1b}[1mbold\u{1b}[0m and plain", 8);
/// assert_eq!(wrapped.lines, vec!["\u{1b}[1mbold\u{1b}[0m and ", "plain "]);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct WrapOptions<M = UnicodeWidth> {
    /// Cells budgeted between adjacent words
    pub spacing: usize,
    /// Cost added once to every line that overflows the limit
    pub penalty: i64,
    /// Characters that form words of their own and are rendered without a separator
    pub wide_script: WideScript,
    /// How the display width of each word is measured
    pub measurer: M,
}

impl Default for WrapOptions<UnicodeWidth> {
    fn default() -> Self {
        WrapOptions {
            spacing: DEFAULT_SPACING,
            penalty: DEFAULT_PENALTY,
            wide_script: is_han,
            measurer: UnicodeWidth,
        }
    }
}

impl WrapOptions<UnicodeWidth> {
    /// Create a set of options with all the defaults
    pub fn new() -> Self {
        WrapOptions::default()
    }
}

impl<M: MeasureWidth> WrapOptions<M> {
    /// Set the number of cells budgeted between words
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cost of an overflowing line
    pub fn penalty(mut self, penalty: i64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set which characters are split into standalone, separator-free words
    pub fn wide_script(mut self, wide_script: WideScript) -> Self {
        self.wide_script = wide_script;
        self
    }

    /// Swap out the width measurer
    pub fn measurer<N: MeasureWidth>(self, measurer: N) -> WrapOptions<N> {
        WrapOptions {
            spacing: self.spacing,
            penalty: self.penalty,
            wide_script: self.wide_script,
            measurer,
        }
    }

    fn render(&self, words: &[Word], limit: usize) -> Vec<String> {
        let widths: Vec<Width> = words.iter().map(|word| word.width).collect();
        break_lines(&widths, Width(self.spacing), limit, self.penalty)
            .lines
            .into_iter()
            .map(|range| render_line(&words[range], self.wide_script))
            .collect()
    }

    /// Wrap `text` into lines no wider than `limit` with minimal raggedness.
    ///
    /// If any word is wider than `limit`, the limit is silently raised to that word's
    /// width; the limit actually used is returned in [`Wrapped::limit`]. Empty text gives
    /// no lines and leaves the limit as requested.
    #[tracing::instrument(level = "trace", skip(self, text), fields(bytes = text.len()))]
    pub fn wrap(&self, text: &str, limit: usize) -> Wrapped {
        let words = tokenize(text, self.wide_script, &self.measurer);
        let limit = effective_limit(&words, limit);
        Wrapped {
            lines: self.render(&words, limit),
            limit,
        }
    }

    /// Like [`WrapOptions::wrap`], except the limit is enforced: if any word is too wide
    /// to fit, an error naming the first such word is returned instead.
    pub fn try_wrap(&self, text: &str, limit: usize) -> Result<Wrapped, WrapError> {
        let words = tokenize(text, self.wide_script, &self.measurer);
        if let Some(word) = words.iter().find(|word| word.width.get() > limit) {
            return Err(WrapError::WordTooWide {
                word: word.text.clone(),
                width: word.width.get(),
                limit,
            });
        }

        Ok(Wrapped {
            lines: self.render(&words, limit),
            limit,
        })
    }

    /// Wrap each line of a multi-line text separately, keeping the explicit line breaks.
    ///
    /// All lines are wrapped to the same limit, raised if necessary to fit the widest
    /// word in any of them. Blank lines are kept as empty strings; empty text gives no
    /// lines.
    pub fn wrap_lines(&self, text: &str, limit: usize) -> Wrapped {
        if text.is_empty() {
            return Wrapped {
                lines: Vec::new(),
                limit,
            };
        }

        let paragraphs: Vec<Vec<Word>> = split_lines(text)
            .into_iter()
            .map(|line| tokenize(line, self.wide_script, &self.measurer))
            .collect();
        let limit = paragraphs
            .iter()
            .fold(limit, |limit, words| effective_limit(words, limit));

        let lines = paragraphs
            .iter()
            .flat_map(|words| {
                if words.is_empty() {
                    vec![String::new()]
                } else {
                    self.render(words, limit)
                }
            })
            .collect();

        Wrapped { lines, limit }
    }

    /// Group pre-split words into lines with minimal raggedness, without any tokenizing
    /// or rendering. Each line is a contiguous slice of `words`.
    ///
    /// Unlike [`WrapOptions::wrap`], the limit is not raised; a word wider than `limit`
    /// overflows on a line (and costs [`WrapOptions::penalty`]). A limit of zero is taken
    /// to mean the width of the widest word.
    pub fn wrap_words<'w, S: AsRef<str>>(&self, words: &'w [S], limit: usize) -> Vec<&'w [S]> {
        let widths: Vec<Width> = words
            .iter()
            .map(|word| self.measurer.width(word.as_ref()))
            .collect();
        break_lines(&widths, Width(self.spacing), limit, self.penalty)
            .lines
            .into_iter()
            .map(|range| &words[range])
            .collect()
    }
}

/// Wrap `text` into lines no wider than `limit` with minimal raggedness, using the
/// default [`WrapOptions`].
///
/// The limit is silently raised to the width of the widest word if that word wouldn't
/// otherwise fit, so this never fails; check [`Wrapped::limit`] for the limit actually
/// used, or use [`try_wrap_text`] to treat that case as an error.
///
/// ```
/// use rag_wrap::wrap_text;
///
/// let wrapped = wrap_text("你好world", 4);
/// assert_eq!(wrapped.lines, vec!["你好", "world "]);
/// assert_eq!(wrapped.limit, 5);
/// ```
pub fn wrap_text(text: &str, limit: usize) -> Wrapped {
    WrapOptions::new().wrap(text, limit)
}

/// Wrap `text` using the default [`WrapOptions`], failing if any word is wider than
/// `limit` instead of raising the limit
pub fn try_wrap_text(text: &str, limit: usize) -> Result<Wrapped, WrapError> {
    WrapOptions::new().try_wrap(text, limit)
}

/// Wrap each line of `text` separately using the default [`WrapOptions`]. See
/// [`WrapOptions::wrap_lines`].
pub fn wrap_lines(text: &str, limit: usize) -> Wrapped {
    WrapOptions::new().wrap_lines(text, limit)
}

/// Group words into lines with minimal raggedness, measuring each word with
/// [`UnicodeWidth`] and budgeting `spacing` cells between adjacent words. Lines wider
/// than `limit` cost an extra `penalty`.
///
/// ```
/// use rag_wrap::wrap_words;
///
/// let lines = wrap_words(&["aaa", "bb", "c"], 1, 5, 100_000);
/// assert_eq!(lines, vec![&["aaa"][..], &["bb", "c"][..]]);
/// ```
pub fn wrap_words<S: AsRef<str>>(
    words: &[S],
    spacing: usize,
    limit: usize,
    penalty: i64,
) -> Vec<&[S]> {
    WrapOptions::new()
        .spacing(spacing)
        .penalty(penalty)
        .wrap_words(words, limit)
}

/// Decompose a multi-line string into its lines. Every `\n` (or `\r\n`) ends a line, so
/// a trailing newline produces a final empty line.
///
/// ```
/// use rag_wrap::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests;
