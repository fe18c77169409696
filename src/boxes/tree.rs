// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! The binary split-box tree.
//!
//! Same arena-of-ids representation as [`crate::text::content::Content`]:
//! a `Vec<Option<BoxNode>>` addressed by integer ids, which sidesteps the
//! parent/child/sibling aliasing a `Rc`-and-`Weak` tree would otherwise
//! force onto every traversal.

use super::geometry::{Orientation, Rect, MIN_SPLIT_CELLS};
use crate::core::error::{BoxtermError, BoxtermResult};
use crate::view::view::{View, ViewGeometry};
use crate::view::format::Direction;

pub type BoxId = usize;

struct BoxNode {
    parent: Option<BoxId>,
    children: Option<(BoxId, BoxId)>,
    rect: Rect,
    orientation: Orientation,
    split: f64,
    border: bool,
    view: Option<View>,
}

pub struct BoxTree {
    arena: Vec<Option<BoxNode>>,
    free: Vec<BoxId>,
    pub root: BoxId,
    pub current: BoxId,
}

impl BoxTree {
    /// A tree with a single full-screen, borderless root leaf.
    #[must_use]
    pub fn new(root_view: View, rect: Rect) -> Self {
        let root_node = BoxNode {
            parent: None,
            children: None,
            rect,
            orientation: Orientation::Horizontal,
            split: 0.5,
            border: false,
            view: Some(root_view),
        };
        let mut tree = Self { arena: vec![Some(root_node)], free: Vec::new(), root: 0, current: 0 };
        tree.current = tree.root;
        tree
    }

    fn node(&self, id: BoxId) -> &BoxNode { self.arena[id].as_ref().expect("dangling BoxId") }
    fn node_mut(&mut self, id: BoxId) -> &mut BoxNode { self.arena[id].as_mut().expect("dangling BoxId") }

    #[must_use]
    pub fn is_leaf(&self, id: BoxId) -> bool { self.node(id).children.is_none() }

    #[must_use]
    pub fn rect(&self, id: BoxId) -> Rect { self.node(id).rect }

    #[must_use]
    pub fn has_border(&self, id: BoxId) -> bool { self.node(id).border }

    #[must_use]
    pub fn parent(&self, id: BoxId) -> Option<BoxId> { self.node(id).parent }

    #[must_use]
    pub fn children(&self, id: BoxId) -> Option<(BoxId, BoxId)> { self.node(id).children }

    #[must_use]
    pub fn view(&self, id: BoxId) -> Option<&View> { self.node(id).view.as_ref() }

    pub fn view_mut(&mut self, id: BoxId) -> Option<&mut View> { self.node_mut(id).view.as_mut() }

    fn alloc(&mut self, node: BoxNode) -> BoxId {
        match self.free.pop() {
            Some(id) => {
                self.arena[id] = Some(node);
                id
            }
            None => {
                self.arena.push(Some(node));
                self.arena.len() - 1
            }
        }
    }

    /// Depth-first, in-order leaf ids under `id`.
    fn leaves_under(&self, id: BoxId, out: &mut Vec<BoxId>) {
        match self.node(id).children {
            None => out.push(id),
            Some((a, b)) => {
                self.leaves_under(a, out);
                self.leaves_under(b, out);
            }
        }
    }

    #[must_use]
    pub fn leaves(&self) -> Vec<BoxId> {
        let mut out = Vec::new();
        self.leaves_under(self.root, &mut out);
        out
    }

    /// **splitBox(box, ratio)**. `ratio >= 1` un-splits
    /// (deletes the sibling); `ratio <= 0` deletes `id` itself; otherwise
    /// splits `id` along `orientation` at `ratio`.
    pub fn split_box(&mut self, id: BoxId, ratio: f64, orientation: Orientation) -> BoxtermResult<()> {
        if ratio >= 1.0 {
            let Some(parent) = self.parent(id) else { return Ok(()) };
            let (a, b) = self.children(parent).expect("parent of a box always has children");
            let sibling = if a == id { b } else { a };
            return self.delete_box(sibling);
        }
        if ratio <= 0.0 {
            return self.delete_box(id);
        }
        if !self.is_leaf(id) {
            return Ok(());
        }

        let rect = self.rect(id);
        let (rect1, rect2) = split_rect(rect, ratio, orientation);
        let axis1 = match orientation { Orientation::Horizontal => rect1.h, Orientation::Vertical => rect1.w };
        let axis2 = match orientation { Orientation::Horizontal => rect2.h, Orientation::Vertical => rect2.w };
        if axis1 < MIN_SPLIT_CELLS || axis2 < MIN_SPLIT_CELLS {
            return Err(BoxtermError::SplitTooSmall);
        }

        let parent_view = self.node_mut(id).view.take().expect("leaf always has a view");
        let cursor_in_first = match orientation {
            Orientation::Horizontal => parent_view.cy < rect1.h,
            Orientation::Vertical => parent_view.cx < rect1.w,
        };

        let mut view1 = clone_view_for_split(&parent_view);
        let mut view2 = clone_view_for_split(&parent_view);

        if cursor_in_first {
            place_cursor_short_of_split(&mut view2, orientation, axis2);
        } else {
            place_cursor_short_of_split(&mut view1, orientation, axis1);
        }

        let sub1 = self.alloc(BoxNode {
            parent: Some(id),
            children: None,
            rect: rect1,
            orientation,
            split: 0.5,
            border: true,
            view: Some(view1),
        });
        let sub2 = self.alloc(BoxNode {
            parent: Some(id),
            children: None,
            rect: rect2,
            orientation,
            split: 0.5,
            border: true,
            view: Some(view2),
        });

        let node = self.node_mut(id);
        node.children = Some((sub1, sub2));
        node.orientation = orientation;
        node.split = ratio;

        if self.current == id {
            self.current = if cursor_in_first { sub1 } else { sub2 };
        }

        self.calc_boxes();
        Ok(())
    }

    /// **deleteBox**: no-op on the root; otherwise promote
    /// the sibling's subtree into the parent slot.
    pub fn delete_box(&mut self, id: BoxId) -> BoxtermResult<()> {
        let Some(parent_id) = self.parent(id) else { return Ok(()) };
        let (a, b) = self.children(parent_id).expect("parent of a box always has children");
        let sibling = if a == id { b } else { a };

        let sibling_node = self.arena[sibling].take().expect("dangling BoxId");
        self.free_subtree(id);

        // Promote sibling in place of parent: re-home sibling's children (if
        // any) to point at `parent_id`, and move its leaf contents over.
        if let Some((c, d)) = sibling_node.children {
            self.node_mut(c).parent = Some(parent_id);
            self.node_mut(d).parent = Some(parent_id);
        }
        let grandparent = self.node(parent_id).parent;
        let rect = self.node(parent_id).rect;
        // Only a full-screen box has no border; restoring the root to a
        // single leaf must clear whatever border the collapsing sibling had.
        let border = grandparent.is_some() && sibling_node.border;
        *self.node_mut(parent_id) = BoxNode {
            parent: grandparent,
            children: sibling_node.children,
            rect,
            orientation: sibling_node.orientation,
            split: sibling_node.split,
            border,
            view: sibling_node.view,
        };
        self.free.push(sibling);

        if self.current == id || self.current == sibling {
            self.current = self.leaves_under_first(parent_id);
        }

        self.calc_boxes();
        Ok(())
    }

    fn leaves_under_first(&self, id: BoxId) -> BoxId {
        let mut out = Vec::new();
        self.leaves_under(id, &mut out);
        out.first().copied().unwrap_or(id)
    }

    fn free_subtree(&mut self, id: BoxId) {
        if let Some(node) = &self.arena[id] {
            if let Some((a, b)) = node.children {
                self.free_subtree(a);
                self.free_subtree(b);
            }
        }
        self.arena[id] = None;
        self.free.push(id);
    }

    /// **switchBoxes**: depth-first in-order traversal over
    /// leaves, wrapping to the leftmost leaf on exhaustion.
    pub fn switch_boxes(&mut self) -> BoxId {
        let leaves = self.leaves();
        let pos = leaves.iter().position(|&l| l == self.current).unwrap_or(0);
        self.current = leaves[(pos + 1) % leaves.len()];
        self.current
    }

    /// **calcBoxes**: recompute every descendant's rectangle
    /// from the root, resize leaf views (subtracting border cells), and
    /// re-run `moveCursorAbsolute` on every view so cursors stay inside the
    /// new geometry.
    pub fn calc_boxes(&mut self) {
        let root_rect = self.rect(self.root);
        self.recompute_rects(self.root, root_rect);

        let leaves = self.leaves();
        for id in leaves {
            let rect = self.rect(id);
            let border = self.has_border(id);
            let (x, y, w, h) = if border {
                (rect.x + 1, rect.y + 1, (rect.w - 2).max(0), (rect.h - 2).max(0))
            } else {
                (rect.x, rect.y, rect.w, rect.h)
            };
            if let Some(view) = self.view_mut(id) {
                view.geometry = ViewGeometry { x, y, w, h };
                let (cx, cy) = (view.cx, view.cy);
                view.move_cursor_absolute(cx, cy, 0, 0);
            }
        }
    }

    /// Apply a fresh root rectangle after a terminal resize
    /// and recompute every descendant's geometry from it.
    pub fn resize_root(&mut self, rect: Rect) {
        self.node_mut(self.root).rect = rect;
        self.calc_boxes();
    }

    fn recompute_rects(&mut self, id: BoxId, rect: Rect) {
        self.node_mut(id).rect = rect;
        if let Some((a, b)) = self.children(id) {
            let orientation = self.node(id).orientation;
            let ratio = self.node(id).split;
            let (rect1, rect2) = split_rect(rect, ratio, orientation);
            self.recompute_rects(a, rect1);
            self.recompute_rects(b, rect2);
        }
    }
}

fn split_rect(rect: Rect, ratio: f64, orientation: Orientation) -> (Rect, Rect) {
    match orientation {
        Orientation::Horizontal => {
            let h1 = ((rect.h as f64) * ratio).floor() as i64;
            let h2 = rect.h - h1;
            (Rect::new(rect.x, rect.y, rect.w, h1), Rect::new(rect.x, rect.y + h1, rect.w, h2))
        }
        Orientation::Vertical => {
            let w1 = ((rect.w as f64) * ratio).floor() as i64;
            let w2 = rect.w - w1;
            (Rect::new(rect.x, rect.y, w1, rect.h), Rect::new(rect.x + w1, rect.y, w2, rect.h))
        }
    }
}

/// A split child's view: same content, duplicated prompt, scratch state
/// reset.
fn clone_view_for_split(parent: &View) -> View {
    let mut view = View::new(parent.content.clone());
    view.line = parent.line;
    view.cx = parent.cx;
    view.cy = parent.cy;
    view.prompt = parent.prompt.clone();
    view.mode_index = parent.mode_index;
    view.reformat_current_line();
    view.format_check_cursor(parent.cx, Direction::Forward);
    view
}

fn place_cursor_short_of_split(view: &mut View, orientation: Orientation, axis_len: i64) {
    let short = (axis_len - 1).max(0);
    match orientation {
        Orientation::Horizontal => {
            let line_count = view.content.borrow().line_count() as i64;
            view.move_cursor_absolute(0, short.min(line_count - 1).max(0), 0, 0);
        }
        Orientation::Vertical => {
            let target = short.min(view.output_width());
            view.format_check_cursor(target, Direction::Backward);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::content::Content;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fresh_tree() -> BoxTree {
        let content = Rc::new(RefCell::new(Content::new("scratch")));
        content.borrow_mut().add_line(None, b"hello");
        let view = View::new(content);
        BoxTree::new(view, Rect::new(0, 0, 80, 23))
    }

    #[test]
    fn new_tree_has_single_borderless_root() {
        let t = fresh_tree();
        assert!(t.is_leaf(t.root));
        assert!(!t.has_border(t.root));
    }

    // S6: full-screen box of width 80 height 23; splitH ratio 0.5 yields
    // heights 11 and 12 (top gets floor); deleteBox on the bottom restores
    // one box of height 23.
    #[test]
    fn scenario_s6_split_then_delete() {
        let mut t = fresh_tree();
        t.split_box(t.root, 0.5, Orientation::Horizontal).unwrap();
        let (top, bottom) = t.children(t.root).unwrap();
        assert_eq!(t.rect(top).h, 11);
        assert_eq!(t.rect(bottom).h, 12);

        t.delete_box(bottom).unwrap();
        assert!(t.is_leaf(t.root));
        assert_eq!(t.rect(t.root).h, 23);
    }

    #[test]
    fn delete_box_collapsing_to_root_clears_the_border() {
        let mut t = fresh_tree();
        t.split_box(t.root, 0.5, Orientation::Vertical).unwrap();
        let (left, right) = t.children(t.root).unwrap();
        assert!(t.has_border(left) && t.has_border(right));

        t.delete_box(right).unwrap();
        assert!(t.is_leaf(t.root));
        assert!(!t.has_border(t.root), "a full-screen box must never have a border");
    }

    #[test]
    fn split_rejects_sub_six_cell_result() {
        let mut t = fresh_tree();
        let err = t.split_box(t.root, 0.02, Orientation::Horizontal).unwrap_err();
        assert!(matches!(err, BoxtermError::SplitTooSmall));
        assert!(t.is_leaf(t.root));
    }

    #[test]
    fn delete_box_on_root_is_a_no_op() {
        let mut t = fresh_tree();
        t.delete_box(t.root).unwrap();
        assert!(t.is_leaf(t.root));
    }

    #[test]
    fn switch_boxes_wraps_to_leftmost_leaf() {
        let mut t = fresh_tree();
        t.split_box(t.root, 0.5, Orientation::Vertical).unwrap();
        let (left, right) = t.children(t.root).unwrap();
        t.current = left;
        assert_eq!(t.switch_boxes(), right);
        assert_eq!(t.switch_boxes(), left);
    }

    #[test]
    fn calc_boxes_shrinks_leaf_view_geometry_for_borders() {
        let mut t = fresh_tree();
        t.split_box(t.root, 0.5, Orientation::Vertical).unwrap();
        let (left, _right) = t.children(t.root).unwrap();
        let geom = t.view(left).unwrap().geometry;
        // bordered leaf: 1 cell subtracted from each side.
        assert_eq!(geom.x, 1);
        assert_eq!(geom.y, 1);
        assert_eq!(geom.h, 21);
    }
}
