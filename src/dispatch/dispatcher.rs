// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `Dispatcher`: turns a decoded key-event payload into a
//! command against a target view, holding the "accumulated sequence" across
//! calls since the decoder flushes eagerly on every read and a multi-key
//! binding like `^X^C` can span several flushes.

use crate::context::commands::CommandOutcome;
use crate::context::context::Context;
use crate::text::moosh::moosh_strings;
use crate::view::view::View;

/// Holds the in-progress key sequence between calls. One `Dispatcher` serves
/// one target at a time; the caller re-resolves which view is "current"
/// (command line vs. current box) before each call, since that can change
/// between keystrokes.
#[derive(Default)]
pub struct Dispatcher {
    pending: String,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self { Self { pending: String::new() } }

    /// Drop any in-progress sequence, e.g. after switching mode.
    pub fn reset(&mut self) { self.pending.clear(); }

    #[must_use]
    pub fn pending(&self) -> &str { &self.pending }

    /// Feed one decoded payload (the `Keys` event's translated names
    /// concatenated with any untranslated bytes) to the dispatcher.
    ///
    /// `is_translated` distinguishes a named key (`"Up"`, `"^X"`, ...) from a
    /// raw printable run passed through untouched; only the latter falls
    /// back to text insertion on no-match.
    ///
    /// Returns the command's outcome once a full match resolves, or `None`
    /// while waiting for more bytes.
    pub fn dispatch(
        &mut self,
        payload: &str,
        is_translated: bool,
        view: &mut View,
        context: &Context,
        mode_index: usize,
        overwrite_mode: bool,
    ) -> Option<CommandOutcome> {
        self.pending.push_str(payload);
        if self.pending.is_empty() {
            return None;
        }

        let Some(mode) = context.mode(mode_index) else {
            self.pending.clear();
            return None;
        };

        let mut waiting_on_prefix = false;
        for &(key, command_name) in &mode.keymap {
            if key == self.pending {
                self.pending.clear();
                return context.command(command_name).map(|f| f(view));
            }
            if Self::is_proper_prefix_wait(&self.pending, key) {
                waiting_on_prefix = true;
            }
        }
        if waiting_on_prefix {
            return None;
        }

        if !is_translated {
            return Some(self.splice_printable_run(view, overwrite_mode));
        }

        // A named key with no binding in this mode: discard the sequence.
        self.pending.clear();
        None
    }

    /// Only a control-name prefix (`^X`, `^W`, ...) is held open waiting for
    /// a second stroke; a single unmatched printable character falls through
    /// to text insertion immediately rather than stalling on some unrelated
    /// two-character binding that happens to share its first character.
    fn is_proper_prefix_wait(pending: &str, key: &str) -> bool {
        key.len() > pending.len() && key.starts_with(pending) && pending.starts_with('^') && pending.len() >= 2
    }

    fn splice_printable_run(&mut self, view: &mut View, overwrite_mode: bool) -> CommandOutcome {
        let text = std::mem::take(&mut self.pending);
        let ix = view.ix;
        let replaced_len = if overwrite_mode { text.len() } else { 0 };
        {
            let mut content = view.content.borrow_mut();
            moosh_strings(&mut content, view.line, Some(text.as_bytes()), ix, replaced_len, !overwrite_mode);
        }
        view.reformat_current_line();
        let advance = text.chars().count() as i64;
        view.move_cursor_relative(advance, 0, 0, 0);
        CommandOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::context::Mode;
    use crate::text::content::Content;
    use std::cell::RefCell;
    use std::collections::HashMap;
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

    fn emacs_like_context() -> Context {
        let mut commands: HashMap<&'static str, crate::context::commands::CommandFn> = HashMap::new();
        commands.insert("quit", crate::context::commands::quit);
        commands.insert("rightChar", crate::context::commands::right_char);
        let mode = Mode::new("emacs", vec![("^X^C", "quit"), ("^F", "rightChar")], false);
        Context::new("emacs", commands, vec![mode])
    }

    #[test]
    fn two_stroke_binding_resolves_across_two_calls() {
        let context = emacs_like_context();
        let mut view = sample_view(&[b"hi"]);
        let mut d = Dispatcher::new();

        assert_eq!(d.dispatch("^X", true, &mut view, &context, 0, false), None);
        assert_eq!(d.pending(), "^X");
        let outcome = d.dispatch("^C", true, &mut view, &context, 0, false);
        assert_eq!(outcome, Some(CommandOutcome::Quit));
        assert_eq!(d.pending(), "");
    }

    #[test]
    fn two_stroke_binding_resolves_in_one_call() {
        let context = emacs_like_context();
        let mut view = sample_view(&[b"hi"]);
        let mut d = Dispatcher::new();

        let outcome = d.dispatch("^X^C", true, &mut view, &context, 0, false);
        assert_eq!(outcome, Some(CommandOutcome::Quit));
    }

    #[test]
    fn unbound_named_key_is_discarded_not_stalled() {
        let context = emacs_like_context();
        let mut view = sample_view(&[b"hi"]);
        let mut d = Dispatcher::new();

        let outcome = d.dispatch("Up", true, &mut view, &context, 0, false);
        assert_eq!(outcome, None);
        assert_eq!(d.pending(), "");
    }

    #[test]
    fn untranslated_printable_run_inserts_and_advances_cursor() {
        let context = emacs_like_context();
        let mut view = sample_view(&[b"hi"]);
        let mut d = Dispatcher::new();

        let outcome = d.dispatch("X", false, &mut view, &context, 0, false);
        assert_eq!(outcome, Some(CommandOutcome::Handled));
        assert_eq!(view.formatted, b"Xhi");
        assert_eq!(view.cx, 1);
    }

    #[test]
    fn printable_run_in_overwrite_mode_replaces_in_place() {
        let context = emacs_like_context();
        let mut view = sample_view(&[b"hello"]);
        let mut d = Dispatcher::new();

        d.dispatch("AB", false, &mut view, &context, 0, true);
        assert_eq!(view.formatted, b"ABllo");
    }

    #[test]
    fn single_unmatched_char_does_not_wait_on_unrelated_prefix() {
        let mut commands: HashMap<&'static str, crate::context::commands::CommandFn> = HashMap::new();
        commands.insert("nop", crate::context::commands::nop);
        let mode = Mode::new("vi", vec![("jj", "nop")], false);
        let context = Context::new("vi", commands, vec![mode]);
        let mut view = sample_view(&[b""]);
        let mut d = Dispatcher::new();

        // "j" is a plain printable character, not a control prefix, so it
        // must fall through to insertion rather than wait for a second "j".
        let outcome = d.dispatch("j", false, &mut view, &context, 0, false);
        assert_eq!(outcome, Some(CommandOutcome::Handled));
        assert_eq!(view.formatted, b"j");
    }
}
