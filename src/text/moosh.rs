// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! **mooshStrings**: the unified insert/delete/replace splice
//! primitive every line edit ultimately funnels through.

use super::content::{rounded_capacity, Content, LineId};

/// Splice `line`'s bytes: delete `length` bytes at `index`, then insert
/// `text` (if any) in their place.
///
/// The five cases (delete-only, pure insertion, shrinking replace, exact
/// overwrite, growing replace) all reduce to one splice —
/// `old[..index] ++ text ++ old[index+length..]` — once `text` defaults to
/// an empty slice when absent. `index`/`index+length` are clamped to the
/// line's current length, which gives the "append at end of line" behavior
/// for free when `index` is at or past the end.
///
/// `insert` is not consulted here: it only distinguishes, at the call site,
/// whether the caller passed `length = 0` (pure insert) or `length =
/// text.len()` (in-place overwrite) — see the dispatcher's printable-run
/// handling.
pub fn moosh_strings(
    content: &mut Content,
    line: LineId,
    text: Option<&[u8]>,
    index: usize,
    length: usize,
    insert: bool,
) {
    let _ = insert;

    let old = content.text(line).to_vec();
    let old_len = old.len();
    let replacement = text.unwrap_or(&[]);

    let head_end = index.min(old_len);
    let tail_start = index.saturating_add(length).min(old_len);

    let new_len = head_end + replacement.len() + (old_len - tail_start);
    let mut new_text = Vec::with_capacity(rounded_capacity(new_len));
    new_text.extend_from_slice(&old[..head_end]);
    new_text.extend_from_slice(replacement);
    new_text.extend_from_slice(&old[tail_start..]);

    content.set_text(line, new_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(content: &mut Content, text: &[u8]) -> LineId { content.add_line(None, text) }

    #[test]
    fn delete_removes_bytes_at_index() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"hello world");
        moosh_strings(&mut c, l, None, 5, 6, false);
        assert_eq!(c.text(l), b"hello");
    }

    #[test]
    fn zero_length_is_pure_insertion() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"helloworld");
        moosh_strings(&mut c, l, Some(b" "), 5, 0, true);
        assert_eq!(c.text(l), b"hello world");
    }

    #[test]
    fn equal_length_is_exact_overwrite() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"hello world");
        moosh_strings(&mut c, l, Some(b"WORLD"), 6, 5, false);
        assert_eq!(c.text(l), b"hello WORLD");
    }

    #[test]
    fn shorter_length_shifts_tail_up() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"hello world");
        moosh_strings(&mut c, l, Some(b"there"), 0, 5, false);
        assert_eq!(c.text(l), b"there world");
    }

    #[test]
    fn longer_length_shifts_tail_down() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"hi world");
        moosh_strings(&mut c, l, Some(b"hello"), 0, 2, false);
        assert_eq!(c.text(l), b"hello world");
    }

    #[test]
    fn index_past_end_appends() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"abc");
        moosh_strings(&mut c, l, Some(b"def"), 100, 0, true);
        assert_eq!(c.text(l), b"abcdef");
    }

    #[test]
    fn delete_past_end_is_clamped() {
        let mut c = Content::new("t");
        let l = line_with(&mut c, b"abc");
        moosh_strings(&mut c, l, None, 1, 100, false);
        assert_eq!(c.text(l), b"a");
    }
}
