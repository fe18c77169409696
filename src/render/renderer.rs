// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `Renderer`: the sole writer of the output stream. Styling
//! is three ANSI escapes — reset, bold, cursor-position — plus whatever
//! bytes the active border palette contributes.

use std::io::{self, Write};

use super::palette::{self, PaletteKind};
use crate::boxes::tree::{BoxId, BoxTree};
use crate::text::content::{Content, LineId};

const RESET: &[u8] = b"\x1b[m";
const BOLD: &[u8] = b"\x1b[1m";

pub struct Renderer<W: Write> {
    out: W,
    palette_kind: PaletteKind,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, palette_kind: PaletteKind) -> Self { Self { out, palette_kind } }

    fn move_cursor(&mut self, row: i64, col: i64) -> io::Result<()> {
        write!(self.out, "\x1b[{};{}H", row + 1, col + 1)
    }

    /// **drawLine**: one output row. `left`/`right` are the
    /// vertical border glyph for a bordered box (`None` for a borderless
    /// one); `internal` pads out any width `contents` falls short of.
    pub fn draw_line(
        &mut self,
        y: i64,
        start: i64,
        end: i64,
        left: Option<&[u8]>,
        internal: &[u8],
        contents: &[u8],
        right: Option<&[u8]>,
        current: bool,
    ) -> io::Result<()> {
        self.move_cursor(y, start)?;
        self.out.write_all(if current { BOLD } else { RESET })?;

        if let Some(l) = left {
            self.out.write_all(l)?;
        }

        let interior = (end - start + 1 - i64::from(left.is_some()) - i64::from(right.is_some())).max(0) as usize;
        let take = contents.len().min(interior);
        self.out.write_all(&contents[..take])?;
        for _ in take..interior {
            self.out.write_all(internal)?;
        }

        if let Some(r) = right {
            self.out.write_all(r)?;
        }
        if current {
            self.out.write_all(RESET)?;
        }
        Ok(())
    }

    /// **drawBox**: border rows (if any) plus interior rows
    /// walked from the view's `offsetY`.
    pub fn draw_box(&mut self, tree: &BoxTree, id: BoxId) -> io::Result<()> {
        let rect = tree.rect(id);
        let has_border = tree.has_border(id);
        let current = id == tree.current;
        let set = palette::palette(self.palette_kind);
        let glyphs = if current { set.current } else { set.normal };

        let start = rect.x;
        let end = (rect.x + rect.w - 1).max(start);
        let border_rows = i64::from(has_border) * 2;

        if has_border {
            self.draw_line(rect.y, start, end, Some(glyphs.top_left), glyphs.horizontal, b"", Some(glyphs.top_right), current)?;
        }

        if let Some(view) = tree.view(id) {
            let content = view.content.borrow();
            let interior_rows = (rect.h - border_rows).max(0);
            let (left, right) = if has_border { (Some(glyphs.vertical), Some(glyphs.vertical)) } else { (None, None) };
            for row in 0..interior_rows {
                let y = rect.y + i64::from(has_border) + row;
                let delta = (view.offset_y + row) - view.cy;
                let text = nth_line_from(&content, view.line, delta)
                    .filter(|&l| !content.is_sentinel(l))
                    .map(|l| content.text(l))
                    .unwrap_or(&[]);
                let visible = text.get(view.offset_x.max(0) as usize..).unwrap_or(&[]);
                self.draw_line(y, start, end, left, b" ", visible, right, current)?;
            }
        }

        if has_border {
            self.draw_line(rect.y + rect.h - 1, start, end, Some(glyphs.bottom_left), glyphs.horizontal, b"", Some(glyphs.bottom_right), current)?;
        }
        Ok(())
    }

    /// **drawBoxes**: recurse over every leaf.
    pub fn draw_boxes(&mut self, tree: &BoxTree) -> io::Result<()> {
        for id in tree.leaves() {
            self.draw_box(tree, id)?;
        }
        self.out.flush()
    }

    /// Write raw bytes that aren't part of a drawn line — currently only the
    /// terminal size-probe chord.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.out.flush()
    }

    /// Park the real terminal cursor at the focused view's screen position,
    /// so the box the user is bold-bordered into is also where their
    /// keystrokes visibly land.
    pub fn position_cursor(&mut self, tree: &BoxTree) -> io::Result<()> {
        if let Some(view) = tree.view(tree.current) {
            let y = view.geometry.y + (view.cy - view.offset_y);
            let x = view.geometry.x + (view.cx - view.offset_x);
            self.move_cursor(y, x)?;
        }
        self.out.flush()
    }
}

/// Walk `delta` steps (either direction) from `start`, returning `None` on
/// running off either end of the line list.
fn nth_line_from(content: &Content, start: LineId, delta: i64) -> Option<LineId> {
    let mut cur = start;
    if delta >= 0 {
        for _ in 0..delta {
            let next = content.next(cur);
            if content.is_sentinel(next) {
                return None;
            }
            cur = next;
        }
    } else {
        for _ in 0..(-delta) {
            let prev = content.prev(cur);
            if content.is_sentinel(prev) {
                return None;
            }
            cur = prev;
        }
    }
    Some(cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::geometry::{Orientation, Rect};
    use crate::text::content::Content;
    use crate::view::view::View;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tree_with_one_box() -> BoxTree {
        let content = Rc::new(RefCell::new(Content::new("t")));
        content.borrow_mut().add_line(None, b"hello");
        let view = View::new(content);
        BoxTree::new(view, Rect::new(0, 0, 10, 5))
    }

    #[test]
    fn draw_line_pads_short_content_with_internal_fill() {
        let mut buf = Vec::new();
        let mut r = Renderer::new(&mut buf, PaletteKind::AsciiSticks);
        r.draw_line(0, 0, 4, None, b".", b"hi", None, false).unwrap();
        assert!(buf.ends_with(b"hi..."));
    }

    #[test]
    fn draw_line_truncates_overlong_content() {
        let mut buf = Vec::new();
        let mut r = Renderer::new(&mut buf, PaletteKind::AsciiSticks);
        r.draw_line(0, 0, 2, None, b" ", b"abcdef", None, false).unwrap();
        assert!(buf.ends_with(b"abc"));
    }

    #[test]
    fn draw_line_bolds_current_and_resets_after() {
        let mut buf = Vec::new();
        let mut r = Renderer::new(&mut buf, PaletteKind::AsciiSticks);
        r.draw_line(0, 0, 1, None, b" ", b"x", None, true).unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("\x1b[1m"));
        assert!(text.ends_with("\x1b[m"));
    }

    #[test]
    fn draw_box_on_borderless_root_emits_no_border_glyphs() {
        let tree = tree_with_one_box();
        let mut buf = Vec::new();
        let mut r = Renderer::new(&mut buf, PaletteKind::AsciiSticks);
        r.draw_box(&tree, tree.root).unwrap();
        assert!(!buf.contains(&b'+'));
    }

    #[test]
    fn draw_boxes_renders_every_leaf() {
        let mut tree = tree_with_one_box();
        tree.split_box(tree.root, 0.5, Orientation::Vertical).unwrap();
        let mut buf = Vec::new();
        let mut r = Renderer::new(&mut buf, PaletteKind::Utf8Line);
        r.draw_boxes(&tree).unwrap();
        assert!(buf.windows("┌".len()).any(|w| w == "┌".as_bytes()));
    }
}
