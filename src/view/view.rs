// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `View`: a window onto a [`Content`] bound to one box, or free-standing
//! for the command line.

use std::cell::RefCell;
use std::rc::Rc;

use super::format::{format_check_cursor, format_line, Direction};
use crate::text::content::{Content, LineId};

/// Cached box geometry a view draws into; kept in screen coordinates, border
/// cells already subtracted").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewGeometry {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

/// A window onto a [`Content`]. Multiple views can share one `Content` (e.g.
/// after [`crate::boxes::split_box`] clones a view), so the content is
/// reference-counted; the core is single-threaded, so `Rc<RefCell<_>>`
/// (rather than `Arc<Mutex<_>>`) is the right tool.
pub struct View {
    pub content: Rc<RefCell<Content>>,
    pub line: LineId,
    pub cx: i64,
    pub cy: i64,
    pub offset_x: i64,
    pub offset_y: i64,
    /// The current line's tab-expanded output; its length is `oW`.
    pub formatted: Vec<u8>,
    /// Byte index within `line` corresponding to screen column `cx`.
    pub ix: usize,
    pub mode_index: usize,
    pub prompt: Option<String>,
    pub geometry: ViewGeometry,
}

impl View {
    #[must_use]
    pub fn new(content: Rc<RefCell<Content>>) -> Self {
        let line = content.borrow().sentinel();
        let mut view = Self {
            content,
            line,
            cx: 0,
            cy: 0,
            offset_x: 0,
            offset_y: 0,
            formatted: Vec::new(),
            ix: 0,
            mode_index: 0,
            prompt: None,
            geometry: ViewGeometry::default(),
        };
        view.line = view.first_real_line_or_sentinel();
        view.reformat_current_line();
        view
    }

    fn first_real_line_or_sentinel(&self) -> LineId {
        let content = self.content.borrow();
        content.iter().next().unwrap_or_else(|| content.sentinel())
    }

    /// `oW`: the screen width of the current line's expanded text.
    #[must_use]
    pub fn output_width(&self) -> i64 { self.formatted.len() as i64 }

    /// Re-run `formatLine` against the current line's raw bytes.
    pub fn reformat_current_line(&mut self) {
        let content = self.content.borrow();
        let raw = if content.is_sentinel(self.line) { &[][..] } else { content.text(self.line) };
        drop(content);
        self.formatted = format_line(raw);
    }

    fn raw_line(&self) -> Vec<u8> {
        let content = self.content.borrow();
        if content.is_sentinel(self.line) { Vec::new() } else { content.text(self.line).to_vec() }
    }

    /// **formatCheckCursor** bound to this view's current line.
    pub fn format_check_cursor(&mut self, target_cx: i64, direction: Direction) {
        let raw = self.raw_line();
        let (cx, ix) = format_check_cursor(&raw, target_cx, direction);
        self.cx = cx;
        self.ix = ix;
    }

    /// **moveCursorAbsolute**: enforce every view invariant in
    /// one pass. Returns `true` iff `(cx, cy)` actually changed.
    pub fn move_cursor_absolute(&mut self, mut target_cx: i64, mut target_cy: i64, scroll_dx: i64, scroll_dy: i64) -> bool {
        let before = (self.cx, self.cy);

        let line_count = self.content.borrow().line_count() as i64;
        let max_cy = (line_count - 1).max(0);
        target_cy = target_cy.clamp(0, max_cy);

        let direction = Direction::of(target_cx - self.cx);

        if target_cx < 0 {
            if target_cy > 0 || self.cy > 0 {
                target_cy = (target_cy.min(self.cy) - 1).max(0);
                self.move_to_line(target_cy);
                self.reformat_current_line();
                target_cx = self.output_width();
            } else {
                target_cx = 0;
            }
        }

        self.move_to_line(target_cy);
        self.reformat_current_line();

        if target_cx > self.output_width() {
            let line_count = self.content.borrow().line_count() as i64;
            if self.cy + 1 < line_count {
                self.move_to_line(self.cy + 1);
                self.reformat_current_line();
                target_cx = 0;
            } else {
                target_cx = self.output_width();
            }
        }

        self.format_check_cursor(target_cx, direction);

        self.offset_x += scroll_dx;
        self.offset_y += scroll_dy;
        self.clamp_offsets();

        before != (self.cx, self.cy)
    }

    /// **moveCursorRelative**: thin wrapper that adds deltas and delegates.
    pub fn move_cursor_relative(&mut self, dcx: i64, dcy: i64, scroll_dx: i64, scroll_dy: i64) -> bool {
        self.move_cursor_absolute(self.cx + dcx, self.cy + dcy, scroll_dx, scroll_dy)
    }

    /// Walk the line list forward/backward to land on absolute row `target_cy`.
    fn move_to_line(&mut self, target_cy: i64) {
        let steps = target_cy - self.cy;
        let content = self.content.borrow();
        let mut cur = self.line;
        if steps > 0 {
            for _ in 0..steps {
                let next = content.next(cur);
                if content.is_sentinel(next) {
                    break;
                }
                cur = next;
            }
        } else {
            for _ in 0..(-steps) {
                let prev = content.prev(cur);
                if content.is_sentinel(prev) {
                    break;
                }
                cur = prev;
            }
        }
        drop(content);
        self.line = cur;
        self.cy = target_cy;
    }

    fn clamp_offsets(&mut self) {
        let w = self.geometry.w.max(1);
        let h = self.geometry.h.max(1);

        if self.cx < self.offset_x {
            self.offset_x = self.cx;
        } else if self.cx >= self.offset_x + w {
            self.offset_x = self.cx - w + 1;
        }

        if self.cy < self.offset_y {
            self.offset_y = self.cy;
        } else if self.cy >= self.offset_y + h {
            self.offset_y = self.cy - h + 1;
        }

        let line_count = self.content.borrow().line_count() as i64;
        let max_offset_y = (line_count - h).max(0);
        self.offset_y = self.offset_y.clamp(0, max_offset_y);
        self.offset_x = self.offset_x.max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> View {
        let content = Rc::new(RefCell::new(Content::new("t")));
        {
            let mut c = content.borrow_mut();
            c.add_line(None, b"one");
            c.add_line(None, b"two");
            c.add_line(None, b"three");
        }
        let mut v = View::new(content);
        v.geometry = ViewGeometry { x: 0, y: 0, w: 80, h: 23 };
        v
    }

    #[test]
    fn new_view_starts_on_first_line() {
        let v = sample_view();
        assert_eq!(v.formatted, b"one");
        assert_eq!(v.cy, 0);
    }

    #[test]
    fn move_down_advances_line_and_reformats() {
        let mut v = sample_view();
        let moved = v.move_cursor_relative(0, 1, 0, 0);
        assert!(moved);
        assert_eq!(v.cy, 1);
        assert_eq!(v.formatted, b"two");
    }

    #[test]
    fn move_cursor_clamps_to_line_count() {
        let mut v = sample_view();
        v.move_cursor_absolute(0, 99, 0, 0);
        assert_eq!(v.cy, 2);
        assert_eq!(v.formatted, b"three");
    }

    #[test]
    fn negative_cx_wraps_to_end_of_previous_line() {
        let mut v = sample_view();
        v.move_cursor_absolute(0, 1, 0, 0);
        let moved = v.move_cursor_absolute(-1, 1, 0, 0);
        assert!(moved);
        assert_eq!(v.cy, 0);
        assert_eq!(v.cx, 3); // end of "one"
    }

    #[test]
    fn cx_past_end_wraps_to_start_of_next_line() {
        let mut v = sample_view();
        let moved = v.move_cursor_absolute(999, 0, 0, 0);
        assert!(moved);
        assert_eq!(v.cy, 1);
        assert_eq!(v.cx, 0);
    }

    #[test]
    fn no_move_when_target_equals_current() {
        let mut v = sample_view();
        assert!(!v.move_cursor_absolute(0, 0, 0, 0));
    }
}
