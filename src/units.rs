use derive_more::{Display, From, Into};

/// A display width, measured in terminal cells. Most characters occupy a single cell,
/// while wide glyphs (CJK ideographs, many emoji) occupy two.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
)]
pub struct Width(pub usize);

impl Width {
    /// A zero-width measurement
    pub const ZERO: Width = Width(0);

    /// Obtain the raw number of cells
    pub fn get(self) -> usize {
        self.0
    }

    /// Widen into the signed type the line breaker computes its costs in, saturating
    /// on the (practically unreachable) overflow
    pub(crate) fn signed(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

