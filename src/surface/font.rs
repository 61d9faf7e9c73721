use std::ffi::CString;
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use raylib::core::text::{Font, RaylibFont, WeakFont};
use raylib::ffi;
use raylib::prelude::*;

const FONT_BASE_SIZE: i32 = 32;

/// The font every panel draws with: a loaded TTF, or raylib's built-in one.
pub enum PanelFont {
    Loaded(Font),
    Default(WeakFont),
}

impl PanelFont {
    pub fn measure(&self, text: &str, font_size: f32, spacing: f32) -> Vector2 {
        match self {
            PanelFont::Loaded(font) => font.measure_text(text, font_size, spacing),
            PanelFont::Default(font) => font.measure_text(text, font_size, spacing),
        }
    }
}

impl AsRef<ffi::Font> for PanelFont {
    fn as_ref(&self) -> &ffi::Font {
        match self {
            PanelFont::Loaded(font) => AsRef::<ffi::Font>::as_ref(font),
            PanelFont::Default(font) => AsRef::<ffi::Font>::as_ref(font),
        }
    }
}

/// Printable ASCII plus every char of `extra`, as unique codepoints.
pub fn glyph_codepoints(extra: &str) -> Vec<i32> {
    let mut codepoints: Vec<i32> = (32u8..127)
        .map(char::from)
        .chain(extra.chars())
        .map(|c| c as i32)
        .collect();
    codepoints.sort_unstable();
    codepoints.dedup();
    codepoints
}

/// Loads `path` with glyphs for printable ASCII and every char of `extra`.
pub fn load_font(_: &mut RaylibHandle, _: &RaylibThread, path: &Path, extra: &str) -> Result<Font> {
    let name = path
        .to_str()
        .ok_or_else(|| anyhow!("Font path {:?} is not valid UTF-8", path))?;
    let c_name = CString::new(name).map_err(|e| anyhow!("Font path '{}': {}", name, e))?;
    let mut codepoints = glyph_codepoints(extra);

    // RaylibHandle::load_font_ex passes the UTF-8 byte length as the
    // codepoint count, which overreads once the string holds multi-byte chars.
    let raw = unsafe {
        ffi::LoadFontEx(
            c_name.as_ptr(),
            FONT_BASE_SIZE,
            codepoints.as_mut_ptr(),
            codepoints.len() as i32,
        )
    };
    if raw.glyphs.is_null() {
        bail!("Failed to load font '{}'", name);
    }
    log::debug!("Font '{}' loaded with {} glyphs", name, raw.glyphCount);
    Ok(unsafe { Font::from_raw(raw) })
}
