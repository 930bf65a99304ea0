use crate::units::Width;
use unicode_width::UnicodeWidthStr;

/// Measures the display width of a fragment of text.
///
/// Implementations must be deterministic and additive-consistent: the width reported for
/// a word is the width the line breaker will budget for it, so a measurer that disagrees
/// with the eventual renderer will produce sub-optimal (but still complete) wrapping.
pub trait MeasureWidth {
    /// The display width of `text`, in cells
    fn width(&self, text: &str) -> Width;
}

/// Measures text using the Unicode East Asian Width property, counting wide glyphs as
/// two cells. This is the default measurer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct UnicodeWidth;

impl MeasureWidth for UnicodeWidth {
    fn width(&self, text: &str) -> Width {
        UnicodeWidthStr::width(text).into()
    }
}

/// Wraps another measurer, stripping ANSI escape sequences (colours, styles) before
/// measuring so that coloured text is budgeted by what is actually visible.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AnsiAware<M = UnicodeWidth>(pub M);

impl<M: MeasureWidth> MeasureWidth for AnsiAware<M> {
    fn width(&self, text: &str) -> Width {
        // escape sequences always start with ESC; skip the allocation otherwise
        if !text.contains('\u{1b}') {
            return self.0.width(text);
        }
        let visible = strip_ansi_escapes::strip_str(text);
        self.0.width(&visible)
    }
}

impl<F> MeasureWidth for F
where
    F: Fn(&str) -> usize,
{
    fn width(&self, text: &str) -> Width {
        Width::from(self(text))
    }
}
