//! # Display Control
//!
//! Each 2D engine has a 32-bit DISPCNT register selecting its background
//! mode, enabled layers, sprite mapping and output source. The register is
//! write-only, so configurations are built in a [`DisplayConfig`] and then
//! committed through the engine's [`DisplayEngine`] handle:
//!
//! ```ignore
//! let mut video = Video::take().unwrap();
//!
//! let mut top = DisplayConfig::<Main>::new();
//! top.graphics_3d_tte().enable_layers(Layers::BG0 | Layers::BG3 | Layers::OBJ);
//! video.main.commit(&top);
//!
//! let mut bottom = DisplayConfig::<Sub>::new();
//! bottom.graphics_tttt().enable_layers(Layers::BG0);
//! video.sub.commit(&bottom);
//! ```
//!
//! ## Stale fields
//!
//! Presets only write the fields they name. Applying `graphics_ttta` to a
//! config that earlier had `set_ext_palettes(true, true)` keeps the palettes
//! enabled. Start from [`DisplayConfig::new`] or call
//! [`reset`](DisplayConfig::reset) when switching to an unrelated setup.
//!
//! ## What commits mean
//!
//! A commit is one 32-bit write. Nothing is read back and nothing is kept:
//! the register holds the value until the next commit, and the config can
//! be dropped or reused.

mod dispcnt;
mod presets;

use core::marker::PhantomData;

use log::debug;

pub use dispcnt::{
    BgMode, BitmapObjBoundary, BitmapObjDimension, DISPCNT_FIELDS, DisplayConfig, DisplayMode,
    Dispcnt, Field, FramebufferBank, Layers, MainField, ObjMapping, TileObjBoundary,
};

use crate::{
    bus::RegisterBus,
    engine::{Engine, Main},
};

/// Write access to one engine's DISPCNT register.
///
/// There is one handle per engine (see [`Video`](crate::Video)), and
/// committing needs `&mut self`, so two configurations can never be written
/// to the same engine at once.
pub struct DisplayEngine<E, B> {
    bus: B,
    engine: PhantomData<E>,
}

impl<E: Engine, B: RegisterBus> DisplayEngine<E, B> {
    pub(crate) fn new(bus: B) -> Self {
        Self { bus, engine: PhantomData }
    }

    /// Write `config` to this engine's DISPCNT.
    pub fn commit(&mut self, config: &DisplayConfig<E>) {
        debug!(target: "dispcnt", "{:?} DISPCNT <- {:#010x}", E::ID, config.pack());
        self.bus.write32(E::DISPCNT, config.pack());
    }

    /// Disable the engine's display (the screen turns white).
    pub fn off(&mut self) {
        self.commit(&DisplayConfig::off());
    }
}

impl<B: RegisterBus> DisplayEngine<Main, B> {
    /// Display the RGB15 framebuffer at the base of `bank`. The bank must
    /// already be mapped to its LCDC address.
    pub fn show_vram(&mut self, bank: FramebufferBank) {
        self.commit(&DisplayConfig::<Main>::vram_framebuffer(bank));
    }

    /// Display an RGB15 framebuffer streamed from main memory by DMA.
    pub fn show_main_memory_fifo(&mut self) {
        self.commit(&DisplayConfig::<Main>::main_memory_fifo());
    }
}

impl<E: Engine> DisplayConfig<E> {
    /// Shorthand for [`DisplayEngine::commit`].
    pub fn commit<B: RegisterBus>(&self, engine: &mut DisplayEngine<E, B>) {
        engine.commit(self);
    }
}
