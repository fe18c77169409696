// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `Content`: the circular line list backing a buffer.
//!
//! A circular doubly-linked list with a sentinel node is re-expressed as an
//! arena (`Vec<Option<LineSlot>>`) addressed by integer `LineId`s, with slot
//! 0 permanently reserved for the sentinel — sidestepping the aliasing
//! problems a borrow-checked language would otherwise raise with real
//! pointers.

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::core::error::{BoxtermError, BoxtermResult};

/// Lines are grown in multiples of this many bytes").
const LINE_CHUNK: usize = 128;

/// Index into a [`Content`]'s line arena. `0` always denotes the sentinel.
pub type LineId = usize;

const SENTINEL: LineId = 0;

struct LineSlot {
    text: Vec<u8>,
    next: LineId,
    prev: LineId,
}

/// Owns a circular line list, an optional backing file, and modification
/// state.
pub struct Content {
    slots: Vec<Option<LineSlot>>,
    free: Vec<LineId>,
    count: usize,
    pub path: Option<PathBuf>,
    pub display_name: String,
    pub read_only: bool,
    pub modified: bool,
}

impl Content {
    /// A fresh, empty content (just the sentinel, pointing to itself).
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        let sentinel = LineSlot { text: Vec::new(), next: SENTINEL, prev: SENTINEL };
        Self {
            slots: vec![Some(sentinel)],
            free: Vec::new(),
            count: 0,
            path: None,
            display_name: display_name.into(),
            read_only: false,
            modified: false,
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.count }

    #[must_use]
    pub fn sentinel(&self) -> LineId { SENTINEL }

    #[must_use]
    pub fn text(&self, id: LineId) -> &[u8] {
        debug_assert_ne!(id, SENTINEL, "sentinel's text storage must never be dereferenced");
        &self.slots[id].as_ref().expect("dangling LineId").text
    }

    #[must_use]
    pub fn next(&self, id: LineId) -> LineId { self.slots[id].as_ref().expect("dangling LineId").next }

    #[must_use]
    pub fn prev(&self, id: LineId) -> LineId { self.slots[id].as_ref().expect("dangling LineId").prev }

    #[must_use]
    pub fn is_sentinel(&self, id: LineId) -> bool { id == SENTINEL }

    /// Iterate every non-sentinel line, head to tail.
    pub fn iter(&self) -> impl Iterator<Item = LineId> + '_ {
        let mut cur = self.next(SENTINEL);
        std::iter::from_fn(move || {
            if cur == SENTINEL {
                None
            } else {
                let id = cur;
                cur = self.next(cur);
                Some(id)
            }
        })
    }

    /// **addLine**: allocate a new line after `after` (or at
    /// the tail if `after` is `None`), and return its id.
    pub fn add_line(&mut self, after: Option<LineId>, text: &[u8]) -> LineId {
        let after = after.unwrap_or_else(|| self.prev(SENTINEL));

        let mut buf = Vec::with_capacity(rounded_capacity(text.len()));
        buf.extend_from_slice(text);

        let before = self.next(after);
        let slot = LineSlot { text: buf, next: before, prev: after };

        let id = match self.free.pop() {
            Some(reused) => {
                self.slots[reused] = Some(slot);
                reused
            }
            None => {
                self.slots.push(Some(slot));
                self.slots.len() - 1
            }
        };

        self.link_prev(before, id);
        self.link_next(after, id);
        self.count += 1;
        id
    }

    /// **freeLine**: unlink and release storage.
    pub fn free_line(&mut self, id: LineId) {
        assert_ne!(id, SENTINEL, "cannot free the sentinel");
        let (prev, next) = {
            let slot = self.slots[id].as_ref().expect("dangling LineId");
            (slot.prev, slot.next)
        };
        self.link_next(prev, next);
        self.link_prev(next, prev);
        self.slots[id] = None;
        self.free.push(id);
        self.count -= 1;
    }

    /// Relocate `id` so it immediately follows `after` (used when executing
    /// a command line to move it to the end of history).
    pub fn move_after(&mut self, id: LineId, after: LineId) {
        if id == after {
            return;
        }
        let (prev, next) = {
            let slot = self.slots[id].as_ref().expect("dangling LineId");
            (slot.prev, slot.next)
        };
        self.link_next(prev, next);
        self.link_prev(next, prev);

        let before = self.next(after);
        self.link_prev(before, id);
        self.link_next(after, id);
        if let Some(slot) = self.slots[id].as_mut() {
            slot.prev = after;
            slot.next = before;
        }
    }

    pub fn set_text(&mut self, id: LineId, text: Vec<u8>) {
        debug_assert_ne!(id, SENTINEL);
        self.slots[id].as_mut().expect("dangling LineId").text = text;
        self.modified = true;
    }

    fn link_next(&mut self, id: LineId, next: LineId) {
        self.slots[id].as_mut().expect("dangling LineId").next = next;
    }

    fn link_prev(&mut self, id: LineId, prev: LineId) {
        self.slots[id].as_mut().expect("dangling LineId").prev = prev;
    }

    /// **loadFile**: read the path line-by-line, strip one
    /// trailing newline byte if present, append each line.
    pub fn load_file(&mut self, path: &Path) -> BoxtermResult<()> {
        let file = std::fs::File::open(path)
            .map_err(|source| BoxtermError::FileRead { path: path.display().to_string(), source })?;
        let reader = BufReader::new(file);

        for raw in reader.split(b'\n') {
            let raw = raw.map_err(|source| BoxtermError::FileRead { path: path.display().to_string(), source })?;
            let line = strip_trailing_cr(&raw);
            self.add_line(None, line);
        }

        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// **saveFile**:
    /// write every non-sentinel line followed by a newline.
    pub fn save_file(&mut self) -> BoxtermResult<()> {
        let path = self.path.clone().ok_or_else(|| BoxtermError::FileWrite {
            path: self.display_name.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no path bound to this content"),
        })?;
        self.save_file_as(&path)
    }

    pub fn save_file_as(&mut self, path: &Path) -> BoxtermResult<()> {
        let mut opts = std::fs::OpenOptions::new();
        opts.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.mode(0o664);
        }
        let mut file = opts
            .open(path)
            .map_err(|source| BoxtermError::FileWrite { path: path.display().to_string(), source })?;

        for id in self.iter() {
            file.write_all(self.text(id))
                .and_then(|()| file.write_all(b"\n"))
                .map_err(|source| BoxtermError::FileWrite { path: path.display().to_string(), source })?;
        }

        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

fn strip_trailing_cr(line: &[u8]) -> &[u8] {
    match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    }
}

/// Round a minimum byte count up to the next [`LINE_CHUNK`] multiple.
pub(crate) fn rounded_capacity(min_len: usize) -> usize {
    (min_len / LINE_CHUNK + 1) * LINE_CHUNK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_content_has_empty_circular_sentinel() {
        let c = Content::new("scratch");
        assert_eq!(c.line_count(), 0);
        assert_eq!(c.next(c.sentinel()), c.sentinel());
        assert_eq!(c.prev(c.sentinel()), c.sentinel());
    }

    #[test]
    fn add_line_appends_at_tail_by_default() {
        let mut c = Content::new("scratch");
        let a = c.add_line(None, b"one");
        let b = c.add_line(None, b"two");
        assert_eq!(c.line_count(), 2);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(c.text(a), b"one");
        assert_eq!(c.text(b), b"two");
    }

    #[test]
    fn add_line_after_middle() {
        let mut c = Content::new("scratch");
        let a = c.add_line(None, b"a");
        let z = c.add_line(None, b"z");
        let m = c.add_line(Some(a), b"m");
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![a, m, z]);
    }

    #[test]
    fn free_line_preserves_circularity() {
        let mut c = Content::new("scratch");
        let a = c.add_line(None, b"a");
        let b = c.add_line(None, b"b");
        let z = c.add_line(None, b"z");
        c.free_line(b);
        assert_eq!(c.line_count(), 2);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![a, z]);
        assert_eq!(c.next(c.sentinel()), a);
        assert_eq!(c.prev(c.sentinel()), z);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut c = Content::new("scratch");
        let a = c.add_line(None, b"a");
        c.free_line(a);
        let b = c.add_line(None, b"b");
        assert_eq!(b, a, "arena slot should be recycled rather than growing unboundedly");
    }

    #[test]
    fn move_after_relocates_without_losing_siblings() {
        let mut c = Content::new("scratch");
        let a = c.add_line(None, b"a");
        let b = c.add_line(None, b"b");
        let z = c.add_line(None, b"z");
        c.move_after(a, z);
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![b, z, a]);
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = std::env::temp_dir().join(format!("boxterm-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.txt");
        std::fs::write(&path, b"first\nsecond\nthird\n").unwrap();

        let mut c = Content::new("roundtrip.txt");
        c.load_file(&path).unwrap();
        assert_eq!(c.line_count(), 3);
        let lines: Vec<_> = c.iter().map(|id| c.text(id).to_vec()).collect();
        assert_eq!(lines, vec![b"first".to_vec(), b"second".to_vec(), b"third".to_vec()]);

        let out_path = dir.join("roundtrip.out.txt");
        c.save_file_as(&out_path).unwrap();
        let saved = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(saved, "first\nsecond\nthird\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}
