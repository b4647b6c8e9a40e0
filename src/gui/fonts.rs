// src/gui/fonts.rs
//
// egui's bundled fonts have no CJK glyphs. Borrow one from the system if a
// known font file is present; otherwise names render as boxes.

use std::{fs, sync::Arc};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

const CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\msjh.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

const FONT_NAME: &str = "system-cjk";

pub fn install_cjk(ctx: &egui::Context) {
    let Some((path, bytes)) = CANDIDATES
        .iter()
        .find_map(|p| fs::read(p).ok().map(|b| (*p, b)))
    else {
        logd!("Fonts: no CJK font found, using defaults");
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(s!(FONT_NAME), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        // fallback after the bundled fonts, so latin text is unchanged
        fonts.families.entry(family).or_default().push(s!(FONT_NAME));
    }
    ctx.set_fonts(fonts);
    logf!("Fonts: CJK fallback from {path}");
}
