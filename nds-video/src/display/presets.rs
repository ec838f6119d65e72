//! Named DISPCNT presets.
//!
//! The `graphics_*` presets write exactly three fields: `display_mode = 1`,
//! `bg0_3d`, and `bg_mode`. Layer enables, sprite mapping, palettes and every
//! other field keep whatever the overlay already held.

use super::dispcnt::{BgMode, DisplayConfig, DisplayMode, Field, FramebufferBank, MainField};
use crate::engine::{Engine, Main};

const LARGE_BITMAP: u32 = 6;
const DISPLAY_VRAM: u32 = 2;
const DISPLAY_FIFO: u32 = 3;

impl<E: Engine> DisplayConfig<E> {
    fn graphics(&mut self, bg0_3d: bool, bg_mode: u32) -> &mut Self {
        self.overlay.set(Field::DisplayMode as usize, DisplayMode::Normal as u32);
        self.overlay.set_flag(MainField::Bg0Is3d as usize, bg0_3d);
        self.overlay.set(Field::BgMode as usize, bg_mode);
        self
    }

    /// Text, text, text, text (mode 0).
    pub fn graphics_tttt(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Tttt as u32)
    }

    /// Text, text, text, affine (mode 1).
    pub fn graphics_ttta(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Ttta as u32)
    }

    /// Text, text, affine, affine (mode 2).
    pub fn graphics_ttaa(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Ttaa as u32)
    }

    /// Text, text, text, extended (mode 3).
    pub fn graphics_ttte(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Ttte as u32)
    }

    /// Text, text, affine, extended (mode 4).
    pub fn graphics_ttae(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Ttae as u32)
    }

    /// Text, text, extended, extended (mode 5).
    pub fn graphics_ttee(&mut self) -> &mut Self {
        self.graphics(false, BgMode::Ttee as u32)
    }
}

/// Engine A only. BG0 is the 3D renderer's output in every `graphics_3d_*`
/// preset; the 3D engine itself is configured elsewhere.
///
/// | Preset            | BG0 | BG1  | BG2          | BG3      |
/// |-------------------|-----|------|--------------|----------|
/// | `graphics_3d_ttt` | 3D  | Text | Text         | Text     |
/// | `graphics_3d_tta` | 3D  | Text | Text         | Affine   |
/// | `graphics_3d_taa` | 3D  | Text | Affine       | Affine   |
/// | `graphics_3d_tte` | 3D  | Text | Text         | Extended |
/// | `graphics_3d_tae` | 3D  | Text | Affine       | Extended |
/// | `graphics_3d_tee` | 3D  | Text | Extended     | Extended |
/// | `graphics_bmp`    | -   | -    | Large bitmap | -        |
/// | `graphics_3d_bmp` | 3D  | -    | Large bitmap | -        |
impl DisplayConfig<Main> {
    pub fn graphics_3d_ttt(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Tttt as u32)
    }

    pub fn graphics_3d_tta(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Ttta as u32)
    }

    pub fn graphics_3d_taa(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Ttaa as u32)
    }

    pub fn graphics_3d_tte(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Ttte as u32)
    }

    pub fn graphics_3d_tae(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Ttae as u32)
    }

    pub fn graphics_3d_tee(&mut self) -> &mut Self {
        self.graphics(true, BgMode::Ttee as u32)
    }

    /// Mode 6: one 512K 8bpp rotoscale bitmap on BG2.
    pub fn graphics_bmp(&mut self) -> &mut Self {
        self.graphics(false, LARGE_BITMAP)
    }

    /// Mode 6 with 3D output on BG0.
    pub fn graphics_3d_bmp(&mut self) -> &mut Self {
        self.graphics(true, LARGE_BITMAP)
    }

    /// Show an RGB15 framebuffer from the base of `bank`, which must be
    /// mapped to its LCDC address. Every other field is zero.
    pub fn vram_framebuffer(bank: FramebufferBank) -> Self {
        let mut config = Self::new();
        config.overlay.set(Field::DisplayMode as usize, DISPLAY_VRAM);
        config.overlay.set(MainField::VramBlock as usize, bank as u32);
        config
    }

    /// Show an RGB15 framebuffer streamed from main memory by DMA. Every
    /// other field is zero.
    pub fn main_memory_fifo() -> Self {
        let mut config = Self::new();
        config.overlay.set(Field::DisplayMode as usize, DISPLAY_FIFO);
        config
    }
}
