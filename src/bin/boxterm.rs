// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! CLI entry point: parse arguments, load the file and the persisted
//! command-line history, put the terminal into raw mode, and hand off to
//! [`boxterm::editor::main_loop::run`].

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;

use boxterm::boxes::tree::BoxTree;
use boxterm::boxes::geometry::Rect;
use boxterm::context::emulations::EmulationMode;
use boxterm::core::log::init_logging;
use boxterm::core::terminal::RawMode;
use boxterm::editor::{main_loop, Editor};
use boxterm::render::{palette, Renderer};
use boxterm::text::content::Content;
use boxterm::view::view::View;

const HISTORY_FILE: &str = ".boxes.history";

/// A split-box terminal text editor core with pluggable emulations.
#[derive(Parser, Debug)]
#[command(name = "boxterm", version)]
struct Cli {
    /// File to open; an untitled scratch buffer is used if omitted.
    file: Option<PathBuf>,

    /// Editor personality.
    #[arg(short = 'm', long = "mode", default_value_t = EmulationMode::Mcedit)]
    mode: EmulationMode,

    /// Draw box borders with plain ASCII instead of the UTF-8 line-drawing set.
    #[arg(short = 'a', long = "stickchars")]
    stickchars: bool,

    /// Override the detected terminal column count.
    #[arg(short = 'w')]
    cols: Option<u16>,

    /// Override the detected terminal row count.
    #[arg(short = 'h')]
    rows: Option<u16>,

    /// Write structured logs to boxterm.log (filtered by `BOXTERM_LOG`).
    #[arg(short = 'l', long = "enable-logging")]
    enable_logging: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let _log_guard = if cli.enable_logging { Some(init_logging("./boxterm.log")?) } else { None };

    let context = cli.mode.context();

    let (cols, rows) = detect_size(cli.cols, cli.rows);

    let content = load_content(cli.file.as_deref())?;
    let root_view = View::new(content);
    let tree = BoxTree::new(root_view, Rect::new(0, 0, i64::from(cols), i64::from(rows)));

    let history_path = PathBuf::from(HISTORY_FILE);
    let history = load_content(Some(&history_path))?;
    let command_line = View::new(history);

    let mut editor = Editor::new(context, tree, command_line);

    let raw_mode = RawMode::enable()?;
    let stdout = io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), palette::from_stickchars_flag(cli.stickchars));

    let run_result = main_loop::run(&mut editor, &mut renderer);

    drop(raw_mode);
    println!();

    editor.command_line.content.borrow_mut().save_file_as(&history_path).ok();

    run_result?;
    Ok(())
}

/// Load `path` into a fresh [`Content`], tolerating a missing file by
/// binding the content to that path anyway so the first save creates it.
fn load_content(path: Option<&std::path::Path>) -> miette::Result<Rc<RefCell<Content>>> {
    let display = path.map(|p| p.display().to_string()).unwrap_or_else(|| "untitled".to_owned());
    let mut content = Content::new(display);

    if let Some(path) = path {
        if path.exists() {
            content.load_file(path)?;
        } else {
            content.path = Some(path.to_path_buf());
        }
    }

    if content.line_count() == 0 {
        content.add_line(None, b"");
    }

    Ok(Rc::new(RefCell::new(content)))
}

fn detect_size(cols: Option<u16>, rows: Option<u16>) -> (u16, u16) {
    let probed = rustix::termios::tcgetwinsize(rustix::stdio::stdin()).ok();
    let (probed_cols, probed_rows) = probed.map(|w| (w.ws_col, w.ws_row)).unwrap_or((80, 24));
    (cols.unwrap_or(probed_cols), rows.unwrap_or(probed_rows))
}
