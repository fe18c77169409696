// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Tab expansion and cursor/byte-index reconciliation.

const TAB_STOP: usize = 8;

/// **formatLine**: expand every tab in `raw` to `8 - (byteIndex mod 8)`
/// spaces; every other byte passes through unchanged (control bytes are
/// displayed verbatim). A `None`/empty input formats as an empty line —
/// callers pass `&[]` for that case, which this function handles the same
/// as any other empty slice.
#[must_use]
pub fn format_line(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for (i, &b) in raw.iter().enumerate() {
        if b == b'\t' {
            let spaces = TAB_STOP - (i % TAB_STOP);
            out.extend(std::iter::repeat(b' ').take(spaces));
        } else {
            out.push(b);
        }
    }
    out
}

/// The direction of a pending cursor move, used by [`format_check_cursor`] to
/// decide which side of a tab's span to snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn of(delta: i64) -> Self { if delta >= 0 { Direction::Forward } else { Direction::Backward } }
}

/// **formatCheckCursor**: walk `raw` byte-by-byte, tracking
/// byte index `i` and screen column `o`, to find the `(cX, iX)` pair
/// consistent with the tab-expansion map for a requested screen column
/// `target_cx` approached from `direction`.
///
/// Returns `(cx, ix)`.
#[must_use]
pub fn format_check_cursor(raw: &[u8], target_cx: i64, direction: Direction) -> (i64, usize) {
    let mut i = 0usize;
    let mut o = 0i64;

    while i < raw.len() {
        let b = raw[i];
        if b == b'\t' {
            let j = (TAB_STOP - (i % TAB_STOP)) as i64;
            if target_cx > o && target_cx < o + j {
                return match direction {
                    Direction::Forward => (o + j, i + 1),
                    Direction::Backward => (o, i),
                };
            }
            o += j;
        } else if target_cx == o {
            return (o, i);
        } else {
            o += 1;
        }
        i += 1;
    }

    // Cursor at end-of-line.
    (o, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_line_expands_leading_tab() {
        assert_eq!(format_line(b"\tX"), b"        X");
    }

    #[test]
    fn format_line_expands_mid_line_tab_to_next_stop() {
        // "ab\tX": tab at byte index 2 expands to 8-(2%8)=6 spaces.
        assert_eq!(format_line(b"ab\tX"), b"ab      X");
    }

    #[test]
    fn format_line_passes_through_non_tab_bytes() {
        assert_eq!(format_line(b"plain text"), b"plain text");
    }

    #[test]
    fn format_line_handles_empty_input() {
        assert_eq!(format_line(b""), Vec::<u8>::new());
    }

    // S5: a line containing "\tX". Move right from column 0 (direction >=
    // 0): new cX = 8, iX = 1. Move left from column 5 (direction < 0): cX =
    // 0, iX = 0.
    #[test]
    fn scenario_s5_tab_cursor_forward() {
        assert_eq!(format_check_cursor(b"\tX", 8, Direction::Forward), (8, 1));
    }

    #[test]
    fn scenario_s5_tab_cursor_backward() {
        assert_eq!(format_check_cursor(b"\tX", 5, Direction::Backward), (0, 0));
    }

    #[test]
    fn cursor_at_end_of_line() {
        assert_eq!(format_check_cursor(b"abc", 3, Direction::Forward), (3, 3));
    }

    #[test]
    fn idempotent_when_rerun_with_same_inputs() {
        // Invariant 6: running formatCheckCursor twice yields the same iX.
        let (cx1, ix1) = format_check_cursor(b"\tX", 8, Direction::Forward);
        let (cx2, ix2) = format_check_cursor(b"\tX", cx1, Direction::Forward);
        assert_eq!((cx1, ix1), (cx2, ix2));
    }
}
