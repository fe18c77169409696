// Copyright (c) 2025 boxterm contributors. Licensed under Apache License, Version 2.0.

//! Border palettes: four glyph sets, each with a normal and a
//! "current" (focused box) variant. Glyphs are raw output bytes rather than
//! `char` since the DOS code-page palette is single-byte CP437, not UTF-8,
//! and the VT100 palette needs a charset-switch wrapper (`ESC ( 0` /
//! `ESC ( B`) around each glyph.

/// One border's worth of corner and side glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub top_left: &'static [u8],
    pub top_right: &'static [u8],
    pub bottom_left: &'static [u8],
    pub bottom_right: &'static [u8],
    pub horizontal: &'static [u8],
    pub vertical: &'static [u8],
}

/// A palette's normal and current-box variants.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub normal: Glyphs,
    pub current: Glyphs,
}

/// Palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    AsciiSticks,
    Utf8Line,
    Vt100AltCharset,
    DosCodePage,
}

const ASCII: Glyphs = Glyphs {
    top_left: b"+",
    top_right: b"+",
    bottom_left: b"+",
    bottom_right: b"+",
    horizontal: b"-",
    vertical: b"|",
};

const UTF8_LIGHT: Glyphs = Glyphs {
    top_left: "┌".as_bytes(),
    top_right: "┐".as_bytes(),
    bottom_left: "└".as_bytes(),
    bottom_right: "┘".as_bytes(),
    horizontal: "─".as_bytes(),
    vertical: "│".as_bytes(),
};

const UTF8_HEAVY: Glyphs = Glyphs {
    top_left: "┏".as_bytes(),
    top_right: "┓".as_bytes(),
    bottom_left: "┗".as_bytes(),
    bottom_right: "┛".as_bytes(),
    horizontal: "━".as_bytes(),
    vertical: "┃".as_bytes(),
};

// DEC Special Graphics charset, switched in with `ESC ( 0` and back out with
// `ESC ( B` around each glyph (teacher: core/ansi/constants/esc.rs
// CHARSET_DEC_GRAPHICS / CHARSET_ASCII).
const VT100_IN: &[u8] = b"\x1b(0";
const VT100_OUT: &[u8] = b"\x1b(B";

macro_rules! vt100_glyph {
    ($final_byte:expr) => {
        concat!("\x1b(0", $final_byte, "\x1b(B").as_bytes()
    };
}

const VT100: Glyphs = Glyphs {
    top_left: vt100_glyph!("l"),
    top_right: vt100_glyph!("k"),
    bottom_left: vt100_glyph!("m"),
    bottom_right: vt100_glyph!("j"),
    horizontal: vt100_glyph!("q"),
    vertical: vt100_glyph!("x"),
};

// CP437 box-drawing bytes: single line for normal, double line for current.
const DOS_SINGLE: Glyphs = Glyphs {
    top_left: &[0xDA],
    top_right: &[0xBF],
    bottom_left: &[0xC0],
    bottom_right: &[0xD9],
    horizontal: &[0xC4],
    vertical: &[0xB3],
};

const DOS_DOUBLE: Glyphs = Glyphs {
    top_left: &[0xC9],
    top_right: &[0xBB],
    bottom_left: &[0xC8],
    bottom_right: &[0xBC],
    horizontal: &[0xCD],
    vertical: &[0xBA],
};

/// Resolve a palette kind to its glyph sets. ASCII sticks and the VT100
/// alt-charset palette have no bold/double-weight counterpart, so their
/// "current" variant reuses the same glyphs; the caller's bold SGR still
/// marks the focused box.
#[must_use]
pub fn palette(kind: PaletteKind) -> Palette {
    match kind {
        PaletteKind::AsciiSticks => Palette { normal: ASCII, current: ASCII },
        PaletteKind::Utf8Line => Palette { normal: UTF8_LIGHT, current: UTF8_HEAVY },
        PaletteKind::Vt100AltCharset => Palette { normal: VT100, current: VT100 },
        PaletteKind::DosCodePage => Palette { normal: DOS_SINGLE, current: DOS_DOUBLE },
    }
}

/// `-a`/`--stickchars` selects palette 0 (ASCII sticks); otherwise the
/// line-drawing UTF-8 palette is the default.
#[must_use]
pub fn from_stickchars_flag(stickchars: bool) -> PaletteKind {
    if stickchars { PaletteKind::AsciiSticks } else { PaletteKind::Utf8Line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_palette_shares_glyphs_between_variants() {
        let p = palette(PaletteKind::AsciiSticks);
        assert_eq!(p.normal.horizontal, p.current.horizontal);
    }

    #[test]
    fn utf8_palette_current_variant_is_heavier() {
        let p = palette(PaletteKind::Utf8Line);
        assert_ne!(p.normal.horizontal, p.current.horizontal);
        assert_eq!(p.current.horizontal, "━".as_bytes());
    }

    #[test]
    fn vt100_glyph_wraps_charset_switch_around_final_byte() {
        let p = palette(PaletteKind::Vt100AltCharset);
        assert_eq!(p.normal.horizontal, b"\x1b(0q\x1b(B");
        assert!(p.normal.top_left.starts_with(VT100_IN));
        assert!(p.normal.top_left.ends_with(VT100_OUT));
    }

    #[test]
    fn dos_palette_current_variant_uses_double_line_bytes() {
        let p = palette(PaletteKind::DosCodePage);
        assert_eq!(p.current.top_left, &[0xC9]);
    }

    #[test]
    fn stickchars_flag_selects_palette_zero() {
        assert_eq!(from_stickchars_flag(true), PaletteKind::AsciiSticks);
        assert_eq!(from_stickchars_flag(false), PaletteKind::Utf8Line);
    }
}
