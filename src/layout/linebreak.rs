use std::ops::Range;

use crate::layout::words::widest;
use crate::units::Width;

/// The result of breaking a sequence of words into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breaks {
    /// Each line as a contiguous range of word indices. The ranges are in order, never
    /// empty, and together cover every word exactly once.
    pub lines: Vec<Range<usize>>,
    /// The total cost (raggedness plus overflow penalties) of this set of breaks
    pub cost: i64,
}

/// A limit of zero cannot be honoured by any non-empty word, so treat it as "as narrow
/// as the widest word allows", the same limit [`effective_limit`](crate::layout::effective_limit)
/// would raise it to
fn clamp_limit(widths: &[Width], limit: usize) -> i64 {
    let limit = if limit == 0 {
        widest(widths.iter().copied()).get()
    } else {
        limit
    };
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Cost of a single non-final line of the given natural width: the square of its slack,
/// plus the penalty if the line overflows
fn line_cost(width: i64, limit: i64, penalty: i64) -> i64 {
    let slack = limit - width;
    let cost = slack.saturating_mul(slack);
    if width > limit {
        cost.saturating_add(penalty)
    } else {
        cost
    }
}

/// Width of words `range` laid out on one line with `spacing` between adjacent words
fn natural_width(widths: &[Width], range: Range<usize>, spacing: i64) -> i64 {
    let gaps = i64::try_from(range.len().saturating_sub(1)).unwrap_or(i64::MAX);
    widths[range]
        .iter()
        .fold(spacing.saturating_mul(gaps), |acc, width| {
            acc.saturating_add(width.signed())
        })
}

/// Breaks words into lines with minimal raggedness.
///
/// Raggedness is the sum over every line but the last of the square of the difference
/// between the limit and the line's natural width (its words plus `spacing` between each
/// pair). The last line is free as long as it fits. Lines that are too long, which only
/// happens when a single word is wider than `limit`, additionally cost `penalty`, once
/// per line no matter how many of its words are too wide.
///
/// When two break points give the same cost, the earlier one is taken.
///
/// A `limit` of zero is treated as the width of the widest word.
///
/// Runs in O(n²) time and space for `n` words.
#[tracing::instrument(level = "trace", skip(widths), fields(words = widths.len()))]
pub fn break_lines(widths: &[Width], spacing: Width, limit: usize, penalty: i64) -> Breaks {
    let n = widths.len();
    if n == 0 {
        return Breaks {
            lines: Vec::new(),
            cost: 0,
        };
    }

    let lim = clamp_limit(widths, limit);
    let spc = spacing.signed();

    // length[i][j] is the width of words i..=j on a single line
    let mut length: Vec<Vec<i64>> = vec![vec![0; n]; n];
    for i in 0..n {
        length[i][i] = widths[i].signed();
        for j in i + 1..n {
            length[i][j] = length[i][j - 1]
                .saturating_add(spc)
                .saturating_add(widths[j].signed());
        }
    }

    // cost[i] is the cheapest way to lay out words i..n, and the line starting at word i
    // ends just before word next[i]
    let mut cost: Vec<i64> = vec![0; n];
    let mut next: Vec<usize> = vec![n; n];

    for i in (0..n).rev() {
        if length[i][n - 1] <= lim {
            // everything left fits on the last line
            cost[i] = 0;
            next[i] = n;
            continue;
        }

        let mut best: Option<(i64, usize)> = None;
        for j in i + 1..n {
            let c = line_cost(length[i][j - 1], lim, penalty).saturating_add(cost[j]);
            // strictly less, so ties go to the earliest break
            if best.map_or(true, |(best_cost, _)| c < best_cost) {
                best = Some((c, j));
            }
        }

        match best {
            Some((c, j)) => {
                cost[i] = c;
                next[i] = j;
            }
            None => {
                // a lone final word that can't fit, so it overflows on its own line
                tracing::debug!(
                    word = i,
                    width = length[i][i],
                    limit = lim,
                    "word overflows limit"
                );
                cost[i] = line_cost(length[i][i], lim, penalty);
                next[i] = n;
            }
        }
    }

    let mut lines: Vec<Range<usize>> = Vec::new();
    let mut i = 0;
    while i < n {
        lines.push(i..next[i]);
        i = next[i];
    }

    tracing::trace!(lines = lines.len(), cost = cost[0], "broke words into lines");

    Breaks {
        lines,
        cost: cost[0],
    }
}

/// Calculates the cost [`break_lines`] assigns to an arbitrary set of lines, using the
/// same spacing, limit and penalty rules.
///
/// Returns `None` if the lines don't form a valid partition of `widths` (out of order,
/// empty, overlapping or incomplete), or if the final line overflows while holding more
/// than one word, a layout [`break_lines`] never produces.
pub fn partition_cost(
    widths: &[Width],
    lines: &[Range<usize>],
    spacing: Width,
    limit: usize,
    penalty: i64,
) -> Option<i64> {
    let n = widths.len();
    let mut expected_start = 0usize;
    for line in lines {
        if line.start != expected_start || line.end <= line.start || line.end > n {
            return None;
        }
        expected_start = line.end;
    }
    if expected_start != n {
        return None;
    }

    let lim = clamp_limit(widths, limit);
    let spc = spacing.signed();

    let mut total: i64 = 0;
    for (index, line) in lines.iter().enumerate() {
        let width = natural_width(widths, line.clone(), spc);
        let is_last = index + 1 == lines.len();
        if is_last && width <= lim {
            continue;
        }
        if is_last && line.len() > 1 {
            return None;
        }
        total = total.saturating_add(line_cost(width, lim, penalty));
    }

    Some(total)
}
