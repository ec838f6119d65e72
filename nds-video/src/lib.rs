#![cfg_attr(not(test), no_std)]
//! # nds-video
//!
//! Typed access to the Nintendo DS 2D display control registers and the VRAM
//! bank controller.
//!
//! - [`display`]: build a [`DisplayConfig`] for either engine and commit it.
//! - [`vram`]: route banks to backgrounds, sprites, palettes or the LCDC
//!   window, one at a time or through a named preset.
//! - [`register`]: the packed-field overlay both are built on.
//!
//! ```ignore
//! use nds_video::{Layers, Main, Video, DisplayConfig};
//! use nds_video::vram::MainBg;
//!
//! let mut video = Video::take().unwrap();
//! video.reset();
//! video.vram.apply(MainBg::A128.preset());
//!
//! let mut config = DisplayConfig::<Main>::new();
//! config.graphics_ttte().enable_layers(Layers::BG3);
//! video.main.commit(&config);
//! ```
//!
//! All registers involved are write-only and nothing here reads hardware
//! back. Logging goes through [`log`] under the `dispcnt` and `vramcnt`
//! targets.

pub mod bus;
mod console;
pub mod display;
pub mod engine;
pub mod register;
pub mod vram;

pub use console::Video;
pub use display::{DisplayConfig, DisplayEngine, Layers};
pub use engine::{Engine, EngineId, Main, Sub};
pub use register::{Overlay, RangeError};
pub use vram::{Bank, MappingError, Preset, Role, VramRouter};
