//! # 2D Engines
//!
//! The DS has two 2D engines. Engine A ([`Main`]) can composite the 3D
//! renderer onto BG0, display a framebuffer straight from VRAM or main
//! memory, and offset all tile/map bases by up to 448K. Engine B ([`Sub`])
//! has none of that. Everything engine B can do, engine A can do too.
//!
//! Engines are marker types so that capabilities are checked by the compiler:
//! methods only engine A supports live on `impl ... <Main>` blocks and simply
//! do not exist for [`Sub`].

/// Display control register of engine A.
pub const DISPCNT_MAIN: usize = 0x0400_0000;
/// Display control register of engine B.
pub const DISPCNT_SUB: usize = 0x0400_1000;

/// Runtime name of an engine, for values such as bank roles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineId {
    Main,
    Sub,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Main {}
    impl Sealed for super::Sub {}
}

/// Compile-time engine selector. Sealed: the hardware has exactly two.
pub trait Engine: sealed::Sealed + Copy + Default + 'static {
    const ID: EngineId;
    /// Address of this engine's display control register.
    const DISPCNT: usize;
    /// Highest background mode this engine implements.
    const MAX_BG_MODE: u32;
    /// Highest display mode this engine implements.
    const MAX_DISPLAY_MODE: u32;
}

/// Engine A.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Main;

/// Engine B.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sub;

impl Engine for Main {
    const ID: EngineId = EngineId::Main;
    const DISPCNT: usize = DISPCNT_MAIN;
    const MAX_BG_MODE: u32 = 6;
    const MAX_DISPLAY_MODE: u32 = 3;
}

impl Engine for Sub {
    const ID: EngineId = EngineId::Sub;
    const DISPCNT: usize = DISPCNT_SUB;
    const MAX_BG_MODE: u32 = 5;
    const MAX_DISPLAY_MODE: u32 = 1;
}
