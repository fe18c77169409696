// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! `Editor`: the single value holding the box tree, the
//! command-line view, and the two global mode flags. Everything that
//! mutates more than one view funnels through here, since a bare `fn(&mut
//! View) -> CommandOutcome` has no way to reach a sibling box.

use crate::boxes::geometry::{Orientation, Rect};
use crate::boxes::tree::BoxTree;
use crate::context::commands::CommandOutcome;
use crate::context::context::Context;
use crate::core::ansi::input_decoder::events::{CsiEvent, DecoderEvent};
use crate::core::ansi::input_decoder::resize::ResizeCoordinator;
use crate::core::error::BoxtermResult;
use crate::dispatch::Dispatcher;
use crate::view::view::View;

/// What a single call to [`Editor::handle_event`] asks the main loop to do.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub quit: bool,
    /// Send the size-probe chord: a resize was observed and the terminal's
    /// reply is needed before the box tree can be resized.
    pub send_probe: bool,
    pub diagnostic: Option<String>,
}

impl StepOutcome {
    fn continuing() -> Self { Self::default() }
    fn quit() -> Self { Self { quit: true, ..Self::default() } }
    fn probe() -> Self { Self { send_probe: true, ..Self::default() } }
    fn diagnostic(msg: impl Into<String>) -> Self { Self { diagnostic: Some(msg.into()), ..Self::default() } }
}

pub struct Editor {
    pub tree: BoxTree,
    pub command_line: View,
    pub command_mode: bool,
    pub overwrite_mode: bool,
    pub still_running: bool,
    pub context: Context,
    /// Index into `context.modes`; authoritative over `command_mode`, which
    /// mirrors `context.modes[mode_index].command_mode` for convenience.
    pub mode_index: usize,
    dispatcher: Dispatcher,
    resize: ResizeCoordinator,
}

impl Editor {
    #[must_use]
    pub fn new(context: Context, tree: BoxTree, command_line: View) -> Self {
        let command_mode = context.mode(0).is_some_and(|m| m.command_mode);
        Self {
            tree,
            command_line,
            command_mode,
            overwrite_mode: false,
            still_running: true,
            context,
            mode_index: 0,
            dispatcher: Dispatcher::new(),
            resize: ResizeCoordinator::new(),
        }
    }

    /// Called by the main loop when a SIGWINCH has been observed.
    pub fn request_resize_probe(&mut self) { self.resize.request_probe(); }

    pub fn handle_event(&mut self, event: DecoderEvent) -> BoxtermResult<StepOutcome> {
        match event {
            DecoderEvent::Keys { payload, is_translated } => self.handle_keys(&payload, is_translated),
            DecoderEvent::Csi(csi) => self.handle_csi(&csi),
            DecoderEvent::Mouse(_) | DecoderEvent::RawBytes(_) => Ok(StepOutcome::continuing()),
            DecoderEvent::Tick => Ok(self.handle_tick()),
            DecoderEvent::Eof => Ok(StepOutcome::quit()),
        }
    }

    fn handle_keys(&mut self, payload: &str, is_translated: bool) -> BoxtermResult<StepOutcome> {
        let mode_index = self.mode_index;
        let overwrite = self.overwrite_mode;
        let outcome = if self.command_mode {
            self.dispatcher.dispatch(payload, is_translated, &mut self.command_line, &self.context, mode_index, overwrite)
        } else {
            let current = self.tree.current;
            let view = self.tree.view_mut(current).expect("current box always has a view");
            self.dispatcher.dispatch(payload, is_translated, view, &self.context, mode_index, overwrite)
        };
        match outcome {
            Some(o) => self.apply_outcome(o),
            None => Ok(StepOutcome::continuing()),
        }
    }

    fn handle_csi(&mut self, csi: &CsiEvent) -> BoxtermResult<StepOutcome> {
        if let Some((rows, cols)) = ResizeCoordinator::accept_as_size_report(&csi.command, &csi.params) {
            self.tree.resize_root(Rect::new(0, 0, i64::from(cols), i64::from(rows)));
        }
        Ok(StepOutcome::continuing())
    }

    fn handle_tick(&mut self) -> StepOutcome {
        if self.resize.take_pending() { StepOutcome::probe() } else { StepOutcome::continuing() }
    }

    fn apply_outcome(&mut self, outcome: CommandOutcome) -> BoxtermResult<StepOutcome> {
        Ok(match outcome {
            CommandOutcome::Handled | CommandOutcome::Nop => StepOutcome::continuing(),
            CommandOutcome::SplitH(ratio) => self.split(ratio, Orientation::Horizontal),
            CommandOutcome::SplitV(ratio) => self.split(ratio, Orientation::Vertical),
            CommandOutcome::DeleteBox => match self.tree.delete_box(self.tree.current) {
                Ok(()) => StepOutcome::continuing(),
                Err(e) => StepOutcome::diagnostic(e.to_string()),
            },
            CommandOutcome::SwitchBoxes => {
                self.tree.switch_boxes();
                StepOutcome::continuing()
            }
            CommandOutcome::SwitchMode(name) => {
                self.switch_mode(&name);
                StepOutcome::continuing()
            }
            CommandOutcome::SwitchModeNext => {
                self.cycle_mode();
                StepOutcome::continuing()
            }
            CommandOutcome::ExecuteLine(text) => self.execute_line_text(&text)?,
            CommandOutcome::Quit => StepOutcome::quit(),
            CommandOutcome::Diagnostic(msg) => StepOutcome::diagnostic(msg),
        })
    }

    fn split(&mut self, ratio: f64, orientation: Orientation) -> StepOutcome {
        match self.tree.split_box(self.tree.current, ratio, orientation) {
            Ok(()) => StepOutcome::continuing(),
            Err(e) => StepOutcome::diagnostic(e.to_string()),
        }
    }

    fn switch_mode(&mut self, name: &str) {
        if let Some(idx) = self.context.mode_index_by_name(name) {
            self.mode_index = idx;
            self.command_mode = self.context.mode(idx).is_some_and(|m| m.command_mode);
            self.dispatcher.reset();
        }
    }

    /// **switchMode**: `currentBox->view->mode++`, wrapping back to the
    /// first mode once the index runs past the last one.
    fn cycle_mode(&mut self) {
        if self.context.modes.is_empty() {
            return;
        }
        self.mode_index = (self.mode_index + 1) % self.context.modes.len();
        self.command_mode = self.context.mode(self.mode_index).is_some_and(|m| m.command_mode);
        self.dispatcher.reset();
    }

    /// **executeLine**'s caller-side half: dispatch the typed
    /// text as a command name against the current box's view, then always
    /// return to the context's `"normal"` mode and relocate the command
    /// line to the end of its history.
    fn execute_line_text(&mut self, text: &str) -> BoxtermResult<StepOutcome> {
        let name = text.trim();
        let mut nested = StepOutcome::continuing();

        if !name.is_empty() {
            if let Some(cmd) = self.context.command(name) {
                let current = self.tree.current;
                let outcome = {
                    let view = self.tree.view_mut(current).expect("current box always has a view");
                    cmd(view)
                };
                nested = self.apply_outcome(outcome)?;
            } else {
                nested = StepOutcome::diagnostic(format!("unknown command: {name}"));
            }
        }

        if let Some(idx) = self.context.mode_index_by_name("normal") {
            self.mode_index = idx;
        }
        self.command_mode = false;
        self.dispatcher.reset();
        self.relocate_command_line_to_history_end();

        Ok(nested)
    }

    fn relocate_command_line_to_history_end(&mut self) {
        let content_rc = self.command_line.content.clone();
        let line = self.command_line.line;

        let (tail, needs_blank) = {
            let content = content_rc.borrow();
            let tail = content.prev(content.sentinel());
            let blank_present = !content.is_sentinel(tail) && content.text(tail).is_empty();
            (tail, !blank_present)
        };

        if tail != line {
            content_rc.borrow_mut().move_after(line, tail);
        }

        if needs_blank {
            self.command_line.line = content_rc.borrow_mut().add_line(None, b"");
        }

        let cy = (content_rc.borrow().line_count() as i64) - 1;
        self.command_line.cy = cy.max(0);
        self.command_line.cx = 0;
        self.command_line.reformat_current_line();
        self.command_line.move_cursor_absolute(0, self.command_line.cy, 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::emulations;
    use crate::text::content::Content;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fresh_editor(mode: &str) -> Editor {
        let context = emulations::by_name(mode).expect("known mode");
        let doc = Rc::new(RefCell::new(Content::new("scratch")));
        doc.borrow_mut().add_line(None, b"hello");
        let mut view = View::new(doc);
        view.geometry = crate::view::view::ViewGeometry { x: 0, y: 0, w: 80, h: 23 };
        let tree = BoxTree::new(view, Rect::new(0, 0, 80, 23));

        let history = Rc::new(RefCell::new(Content::new(".boxes.history")));
        history.borrow_mut().add_line(None, b"");
        let command_line = View::new(history);

        Editor::new(context, tree, command_line)
    }

    #[test]
    fn quit_outcome_stops_the_loop() {
        let mut editor = fresh_editor("emacs");
        let outcome = editor.handle_event(DecoderEvent::Keys { payload: "^X^C".into(), is_translated: true }).unwrap();
        assert!(outcome.quit);
    }

    #[test]
    fn split_then_delete_round_trips_through_editor() {
        let mut editor = fresh_editor("vi");
        editor.handle_event(DecoderEvent::Keys { payload: "^Ws".into(), is_translated: true }).unwrap();
        assert!(!editor.tree.is_leaf(editor.tree.root));
        let (top, _bottom) = editor.tree.children(editor.tree.root).unwrap();
        editor.tree.current = top;
        editor.handle_event(DecoderEvent::Keys { payload: "^Wc".into(), is_translated: true }).unwrap();
        assert!(editor.tree.is_leaf(editor.tree.root));
    }

    #[test]
    fn colon_enters_command_line_mode_and_return_executes() {
        let mut editor = fresh_editor("vi");
        editor.handle_event(DecoderEvent::Keys { payload: ":".into(), is_translated: false }).unwrap();
        assert!(editor.command_mode);

        editor.handle_event(DecoderEvent::Keys { payload: "nop".into(), is_translated: false }).unwrap();
        editor.handle_event(DecoderEvent::Keys { payload: "Return".into(), is_translated: true }).unwrap();

        assert!(!editor.command_mode);
        assert_eq!(editor.command_line.content.borrow().line_count(), 2);
    }

    #[test]
    fn shift_f2_cycles_mcedit_into_command_mode_and_back() {
        let mut editor = fresh_editor("mcedit");
        assert_eq!(editor.mode_index, 0);
        assert!(!editor.command_mode);

        editor.handle_event(DecoderEvent::Keys { payload: "Shift F2".into(), is_translated: true }).unwrap();
        assert_eq!(editor.mode_index, 1);
        assert!(editor.command_mode);

        editor.handle_event(DecoderEvent::Keys { payload: "Shift F2".into(), is_translated: true }).unwrap();
        assert_eq!(editor.mode_index, 0);
        assert!(!editor.command_mode);
    }

    #[test]
    fn resize_report_updates_root_rect() {
        let mut editor = fresh_editor("mcedit");
        editor
            .handle_event(DecoderEvent::Csi(CsiEvent { command: "R".into(), params: vec![Some(40), Some(100)] }))
            .unwrap();
        let rect = editor.tree.rect(editor.tree.root);
        assert_eq!((rect.w, rect.h), (100, 40));
    }
}
