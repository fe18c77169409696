// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Built-in commands: a fixed set of named functions any
//! [`super::Context`] may bind into its keymaps.
//!
//! A native-handler-or-script-name tagged union is better expressed in Rust
//! as a sum type with one dispatch entry point; [`CommandOutcome`] is that
//! sum type. Most commands only ever touch
//! their view and return `Handled`; the handful that reach outside a single
//! view (`splitH`, `deleteBox`, `switchBoxes`, `switchMode`, `quit`,
//! `executeLine`) return a variant the caller — [`crate::editor::Editor`] —
//! interprets against the box tree it alone owns, since a plain `fn(&mut
//! View)` has no way to reach a sibling box.

use crate::text::moosh::moosh_strings;
use crate::view::view::View;

/// What running a command asks the caller to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The command fully handled itself; nothing further to do.
    Handled,
    SplitH(f64),
    SplitV(f64),
    DeleteBox,
    SwitchBoxes,
    SwitchMode(String),
    /// `switchMode`: advance to the next mode in the context's list,
    /// wrapping around — distinct from `SwitchMode`, which jumps to a named
    /// mode (e.g. vi's `:`-prefixed ex mode).
    SwitchModeNext,
    ExecuteLine(String),
    Quit,
    Nop,
    /// A refusal that should be surfaced to the user.
    Diagnostic(String),
}

pub type CommandFn = fn(&mut View) -> CommandOutcome;

fn page_size(view: &View) -> i64 { (view.geometry.h - 1).max(1) }

pub fn left_char(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(-1, 0, 0, 0);
    CommandOutcome::Handled
}

pub fn right_char(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(1, 0, 0, 0);
    CommandOutcome::Handled
}

pub fn up_line(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(0, -1, 0, 0);
    CommandOutcome::Handled
}

pub fn down_line(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(0, 1, 0, 0);
    CommandOutcome::Handled
}

pub fn up_page(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(0, -page_size(view), 0, 0);
    CommandOutcome::Handled
}

pub fn down_page(view: &mut View) -> CommandOutcome {
    view.move_cursor_relative(0, page_size(view), 0, 0);
    CommandOutcome::Handled
}

pub fn start_of_line(view: &mut View) -> CommandOutcome {
    view.move_cursor_absolute(0, view.cy, 0, 0);
    CommandOutcome::Handled
}

pub fn end_of_line(view: &mut View) -> CommandOutcome {
    let width = view.output_width();
    view.move_cursor_absolute(width, view.cy, 0, 0);
    CommandOutcome::Handled
}

/// `backSpaceChar` is a move-left followed by `deleteChar`, but only when
/// the move actually happened.
pub fn back_space_char(view: &mut View) -> CommandOutcome {
    let moved = view.move_cursor_relative(-1, 0, 0, 0);
    if moved {
        delete_char(view)
    } else {
        CommandOutcome::Handled
    }
}

/// `deleteChar` at end-of-line joins with the next line, if any.
pub fn delete_char(view: &mut View) -> CommandOutcome {
    let ix = view.ix;
    let at_eol = ix as i64 >= view.output_width();

    if at_eol {
        let (next_line, has_next) = {
            let content = view.content.borrow();
            let next = content.next(view.line);
            (next, !content.is_sentinel(next))
        };
        if has_next {
            let suffix = view.content.borrow().text(next_line).to_vec();
            {
                let mut content = view.content.borrow_mut();
                let cur_len = content.text(view.line).len();
                moosh_strings(&mut content, view.line, Some(&suffix), cur_len, 0, true);
                content.free_line(next_line);
            }
            view.reformat_current_line();
        }
    } else {
        {
            let mut content = view.content.borrow_mut();
            moosh_strings(&mut content, view.line, None, ix, 1, false);
        }
        view.reformat_current_line();
    }
    CommandOutcome::Handled
}

/// `splitLine`: insert a new line after the current one
/// holding the suffix from `iX` onward, truncate the current line, move the
/// cursor to column 0 of the next line.
pub fn split_line(view: &mut View) -> CommandOutcome {
    let ix = view.ix;
    let new_line = {
        let mut content = view.content.borrow_mut();
        let raw = content.text(view.line).to_vec();
        let suffix = raw.get(ix..).unwrap_or(&[]).to_vec();
        moosh_strings(&mut content, view.line, None, ix, raw.len().saturating_sub(ix), false);
        content.add_line(Some(view.line), &suffix)
    };
    view.line = new_line;
    view.reformat_current_line();
    view.move_cursor_absolute(0, view.cy + 1, 0, 0);
    CommandOutcome::Handled
}

/// `executeLine`: hand the current line's text up to the
/// caller, which dispatches it as a command name, relocates the line to the
/// end of history, and ensures a trailing blank line exists.
pub fn execute_line(view: &mut View) -> CommandOutcome {
    let text = String::from_utf8_lossy(view.content.borrow().text(view.line)).into_owned();
    CommandOutcome::ExecuteLine(text)
}

pub fn save_content(view: &mut View) -> CommandOutcome {
    match view.content.borrow_mut().save_file() {
        Ok(()) => CommandOutcome::Handled,
        Err(err) => CommandOutcome::Diagnostic(err.to_string()),
    }
}

pub fn split_h(_view: &mut View) -> CommandOutcome { CommandOutcome::SplitH(0.5) }

pub fn split_v(_view: &mut View) -> CommandOutcome { CommandOutcome::SplitV(0.5) }

pub fn delete_box(_view: &mut View) -> CommandOutcome { CommandOutcome::DeleteBox }

pub fn switch_boxes(_view: &mut View) -> CommandOutcome { CommandOutcome::SwitchBoxes }

pub fn quit(_view: &mut View) -> CommandOutcome { CommandOutcome::Quit }

pub fn nop(_view: &mut View) -> CommandOutcome { CommandOutcome::Nop }

/// Enter the context's command-line mode (e.g. vi's `:`-prefixed ex mode).
/// By convention that mode is named `"cmdline"`.
pub fn enter_command_line(_view: &mut View) -> CommandOutcome { CommandOutcome::SwitchMode("cmdline".to_owned()) }

/// Leave the command-line mode and return to `"normal"`.
pub fn leave_command_line(_view: &mut View) -> CommandOutcome { CommandOutcome::SwitchMode("normal".to_owned()) }

/// `switchMode`: cycle to the next mode in the context's mode list,
/// wrapping back to the first once the list is exhausted.
pub fn switch_mode(_view: &mut View) -> CommandOutcome { CommandOutcome::SwitchModeNext }

/// Resolve a builtin by name, for contexts that bind the literal builtin
/// name rather than an emulation-specific alias.
#[must_use]
pub fn builtin(name: &str) -> Option<CommandFn> {
    Some(match name {
        "leftChar" => left_char,
        "rightChar" => right_char,
        "upLine" => up_line,
        "downLine" => down_line,
        "upPage" => up_page,
        "downPage" => down_page,
        "startOfLine" => start_of_line,
        "endOfLine" => end_of_line,
        "backSpaceChar" => back_space_char,
        "deleteChar" => delete_char,
        "splitLine" => split_line,
        "executeLine" => execute_line,
        "saveContent" => save_content,
        "splitH" => split_h,
        "splitV" => split_v,
        "deleteBox" => delete_box,
        "switchBoxes" => switch_boxes,
        "quit" => quit,
        "nop" => nop,
        "enterCommandLine" => enter_command_line,
        "leaveCommandLine" => leave_command_line,
        "switchMode" => switch_mode,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::content::Content;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_view(lines: &[&[u8]]) -> View {
        let content = Rc::new(RefCell::new(Content::new("t")));
        for l in lines {
            content.borrow_mut().add_line(None, l);
        }
        let mut v = View::new(content);
        v.geometry = crate::view::view::ViewGeometry { x: 0, y: 0, w: 80, h: 23 };
        v
    }

    #[test]
    fn delete_char_removes_byte_under_cursor() {
        let mut v = sample_view(&[b"hello"]);
        v.move_cursor_absolute(1, 0, 0, 0);
        delete_char(&mut v);
        assert_eq!(v.formatted, b"hllo");
    }

    #[test]
    fn delete_char_at_eol_joins_next_line() {
        let mut v = sample_view(&[b"foo", b"bar"]);
        v.move_cursor_absolute(3, 0, 0, 0);
        delete_char(&mut v);
        assert_eq!(v.formatted, b"foobar");
        assert_eq!(v.content.borrow().line_count(), 1);
    }

    #[test]
    fn back_space_char_only_deletes_when_move_happened() {
        let mut v = sample_view(&[b"hi"]);
        // Cursor already at column 0: move-left fails, nothing is deleted.
        back_space_char(&mut v);
        assert_eq!(v.formatted, b"hi");
    }

    #[test]
    fn split_line_moves_suffix_to_new_line() {
        let mut v = sample_view(&[b"helloworld"]);
        v.move_cursor_absolute(5, 0, 0, 0);
        split_line(&mut v);
        assert_eq!(v.content.borrow().line_count(), 2);
        assert_eq!(v.formatted, b"world");
        assert_eq!(v.cx, 0);
    }

    #[test]
    fn split_h_requests_outcome_not_mutation() {
        let mut v = sample_view(&[b"x"]);
        assert_eq!(split_h(&mut v), CommandOutcome::SplitH(0.5));
    }
}
