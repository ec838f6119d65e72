//! The named bank presets.
//!
//! Names list banks in region order and end with the total size in KB, so
//! `EFG_96` is E at 0, F at 64K and G at 80K of the main BG region. Sub
//! presets prefix each part with its role: `H_BG32_DI_S128X` is H as 32K of
//! BG plus D as 128K of sprites with I as the extended sprite palette.
//!
//! Every table below is built during constant evaluation, so a catalogue
//! entry whose banks cannot sit next to each other fails to compile.

use super::{
    bank::{Bank, Role},
    tiling::{Preset, Tiling},
};
use crate::engine::EngineId::{Main, Sub};

const MAIN_BG: Role = Role::Bg(Main);
const MAIN_SPRITE: Role = Role::Sprite(Main);

/// Build a static table holding `$kind::preset` for every `$kind::ALL`.
macro_rules! preset_table {
    ($name:ident, $kind:ty) => {
        static $name: [Preset; <$kind>::ALL.len()] = {
            let mut table = [Preset::EMPTY; <$kind>::ALL.len()];
            let mut i = 0;
            while i < table.len() {
                table[i] = <$kind>::ALL[i].build();
                i += 1;
            }
            table
        };

        impl $kind {
            pub fn preset(self) -> &'static Preset {
                &$name[self as usize]
            }

            pub fn name(self) -> &'static str {
                self.preset().name()
            }
        }
    };
}

/// Layouts both the main BG and main sprite regions offer.
#[derive(Copy, Clone)]
enum Shared {
    E64,
    F16,
    G16,
    Fg32,
    Gf32,
    Ef80,
    Eg80,
    Efg96,
    Egf96,
    A128,
    B128,
    Ab256,
}

impl Shared {
    const fn tiling(self, role: Role) -> Tiling {
        use Shared::*;
        let empty = Tiling::new(role);
        match self {
            E64 => empty.then(Bank::E),
            F16 => empty.then(Bank::F),
            G16 => empty.then(Bank::G),
            Fg32 => F16.tiling(role).then(Bank::G),
            Gf32 => G16.tiling(role).then(Bank::F),
            Ef80 => E64.tiling(role).then(Bank::F),
            Eg80 => E64.tiling(role).then(Bank::G),
            Efg96 => Ef80.tiling(role).then(Bank::G),
            Egf96 => Eg80.tiling(role).then(Bank::F),
            A128 => empty.then(Bank::A),
            B128 => empty.then(Bank::B),
            Ab256 => A128.tiling(role).then(Bank::B),
        }
    }
}

/// Main engine background layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum MainBg {
    E64,
    F16,
    G16,
    Fg32,
    Gf32,
    Ef80,
    Eg80,
    Efg96,
    Egf96,
    A128,
    B128,
    C128,
    D128,
    Ab256,
    Ac256,
    Ad256,
    Bc256,
    Bd256,
    Cd256,
    Abc384,
    Abd384,
    Acd384,
    Bcd384,
    Abcd512,
}

impl MainBg {
    pub const ALL: [MainBg; 24] = {
        use MainBg::*;
        [
            E64, F16, G16, Fg32, Gf32, Ef80, Eg80, Efg96, Egf96, A128, B128, C128, D128, Ab256,
            Ac256, Ad256, Bc256, Bd256, Cd256, Abc384, Abd384, Acd384, Bcd384, Abcd512,
        ]
    };

    const fn tiling(self) -> Tiling {
        use MainBg::*;
        let empty = Tiling::new(MAIN_BG);
        match self {
            E64 => Shared::E64.tiling(MAIN_BG),
            F16 => Shared::F16.tiling(MAIN_BG),
            G16 => Shared::G16.tiling(MAIN_BG),
            Fg32 => Shared::Fg32.tiling(MAIN_BG),
            Gf32 => Shared::Gf32.tiling(MAIN_BG),
            Ef80 => Shared::Ef80.tiling(MAIN_BG),
            Eg80 => Shared::Eg80.tiling(MAIN_BG),
            Efg96 => Shared::Efg96.tiling(MAIN_BG),
            Egf96 => Shared::Egf96.tiling(MAIN_BG),
            A128 => Shared::A128.tiling(MAIN_BG),
            B128 => Shared::B128.tiling(MAIN_BG),
            C128 => empty.then(Bank::C),
            D128 => empty.then(Bank::D),
            Ab256 => Shared::Ab256.tiling(MAIN_BG),
            Ac256 => A128.tiling().then(Bank::C),
            Ad256 => A128.tiling().then(Bank::D),
            Bc256 => B128.tiling().then(Bank::C),
            Bd256 => B128.tiling().then(Bank::D),
            Cd256 => C128.tiling().then(Bank::D),
            Abc384 => Ab256.tiling().then(Bank::C),
            Abd384 => Ab256.tiling().then(Bank::D),
            Acd384 => Ac256.tiling().then(Bank::D),
            Bcd384 => Bc256.tiling().then(Bank::D),
            Abcd512 => Abc384.tiling().then(Bank::D),
        }
    }

    const fn build(self) -> Preset {
        use MainBg::*;
        let name = match self {
            E64 => "E_64",
            F16 => "F_16",
            G16 => "G_16",
            Fg32 => "FG_32",
            Gf32 => "GF_32",
            Ef80 => "EF_80",
            Eg80 => "EG_80",
            Efg96 => "EFG_96",
            Egf96 => "EGF_96",
            A128 => "A_128",
            B128 => "B_128",
            C128 => "C_128",
            D128 => "D_128",
            Ab256 => "AB_256",
            Ac256 => "AC_256",
            Ad256 => "AD_256",
            Bc256 => "BC_256",
            Bd256 => "BD_256",
            Cd256 => "CD_256",
            Abc384 => "ABC_384",
            Abd384 => "ABD_384",
            Acd384 => "ACD_384",
            Bcd384 => "BCD_384",
            Abcd512 => "ABCD_512",
        };
        Preset::new(name, self.tiling())
    }
}

preset_table!(MAIN_BG_PRESETS, MainBg);

/// Main engine sprite layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum MainSprite {
    E64,
    F16,
    G16,
    Fg32,
    Gf32,
    Ef80,
    Eg80,
    Efg96,
    Egf96,
    A128,
    B128,
    Ab256,
}

impl MainSprite {
    pub const ALL: [MainSprite; 12] = {
        use MainSprite::*;
        [E64, F16, G16, Fg32, Gf32, Ef80, Eg80, Efg96, Egf96, A128, B128, Ab256]
    };

    const fn build(self) -> Preset {
        use MainSprite::*;
        let (name, shared) = match self {
            E64 => ("E_64", Shared::E64),
            F16 => ("F_16", Shared::F16),
            G16 => ("G_16", Shared::G16),
            Fg32 => ("FG_32", Shared::Fg32),
            Gf32 => ("GF_32", Shared::Gf32),
            Ef80 => ("EF_80", Shared::Ef80),
            Eg80 => ("EG_80", Shared::Eg80),
            Efg96 => ("EFG_96", Shared::Efg96),
            Egf96 => ("EGF_96", Shared::Egf96),
            A128 => ("A_128", Shared::A128),
            B128 => ("B_128", Shared::B128),
            Ab256 => ("AB_256", Shared::Ab256),
        };
        Preset::new(name, shared.tiling(MAIN_SPRITE))
    }
}

preset_table!(MAIN_SPRITE_PRESETS, MainSprite);

/// Main engine extended background palettes. `F01` and `F23` pick the
/// pair of 8K palette slots F serves; `FG` and `GF` fill all four.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum MainBgExtPalette {
    E,
    F01,
    F23,
    G01,
    G23,
    Fg,
    Gf,
}

impl MainBgExtPalette {
    pub const ALL: [MainBgExtPalette; 7] = {
        use MainBgExtPalette::*;
        [E, F01, F23, G01, G23, Fg, Gf]
    };

    const fn build(self) -> Preset {
        use MainBgExtPalette::*;
        let empty = Tiling::new(Role::BgExtPalette(Main));
        let (name, tiling) = match self {
            E => ("E", empty.then(Bank::E)),
            F01 => ("F_01", empty.place(Bank::F, 0)),
            F23 => ("F_23", empty.place(Bank::F, 1)),
            G01 => ("G_01", empty.place(Bank::G, 0)),
            G23 => ("G_23", empty.place(Bank::G, 1)),
            Fg => ("FG", empty.then(Bank::F).then(Bank::G)),
            Gf => ("GF", empty.then(Bank::G).then(Bank::F)),
        };
        Preset::new(name, tiling)
    }
}

preset_table!(MAIN_BG_EXT_PALETTE_PRESETS, MainBgExtPalette);

/// Main engine extended sprite palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum MainSpriteExtPalette {
    F,
    G,
}

impl MainSpriteExtPalette {
    pub const ALL: [MainSpriteExtPalette; 2] = [MainSpriteExtPalette::F, MainSpriteExtPalette::G];

    const fn build(self) -> Preset {
        let empty = Tiling::new(Role::SpriteExtPalette(Main));
        match self {
            MainSpriteExtPalette::F => Preset::new("F", empty.then(Bank::F)),
            MainSpriteExtPalette::G => Preset::new("G", empty.then(Bank::G)),
        }
    }
}

preset_table!(MAIN_SPRITE_EXT_PALETTE_PRESETS, MainSpriteExtPalette);

/// Sub engine background layouts. `Ch128x` is C as 128K of BG with H as
/// the extended BG palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum SubBg {
    H32,
    I16,
    Hi48,
    C128,
    HExtPalette,
    Ch128x,
}

impl SubBg {
    pub const ALL: [SubBg; 6] = {
        use SubBg::*;
        [H32, I16, Hi48, C128, HExtPalette, Ch128x]
    };

    const fn build(self) -> Preset {
        use SubBg::*;
        let bg = Tiling::new(Role::Bg(Sub));
        let ext = Tiling::new(Role::BgExtPalette(Sub));
        match self {
            H32 => Preset::new("H_32", bg.then(Bank::H)),
            I16 => Preset::new("I_16", bg.then(Bank::I)),
            Hi48 => Preset::new("HI_48", bg.then(Bank::H).then(Bank::I)),
            C128 => Preset::new("C_128", bg.then(Bank::C)),
            HExtPalette => Preset::new("H_EXT", ext.then(Bank::H)),
            Ch128x => C128.build().join(HExtPalette.build()).named("CH_128X"),
        }
    }
}

preset_table!(SUB_BG_PRESETS, SubBg);

/// Sub engine sprite layouts. `Di128x` is D as 128K of sprites with I as
/// the extended sprite palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum SubSprite {
    I16,
    D128,
    IExtPalette,
    Di128x,
}

impl SubSprite {
    pub const ALL: [SubSprite; 4] = {
        use SubSprite::*;
        [I16, D128, IExtPalette, Di128x]
    };

    const fn build(self) -> Preset {
        use SubSprite::*;
        let sprite = Tiling::new(Role::Sprite(Sub));
        let ext = Tiling::new(Role::SpriteExtPalette(Sub));
        match self {
            I16 => Preset::new("I_16", sprite.then(Bank::I)),
            D128 => Preset::new("D_128", sprite.then(Bank::D)),
            IExtPalette => Preset::new("I_EXT", ext.then(Bank::I)),
            Di128x => D128.build().join(IExtPalette.build()).named("DI_128X"),
        }
    }
}

preset_table!(SUB_SPRITE_PRESETS, SubSprite);

/// Complete sub engine setups, background and sprites together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum SubPreset {
    HiBg48,
    HBg32IS16,
    HiBg48DS128,
    HBg32DiS128x,
    ChBg128xIS16,
    ChBg128xDiS128x,
}

impl SubPreset {
    pub const ALL: [SubPreset; 6] = {
        use SubPreset::*;
        [HiBg48, HBg32IS16, HiBg48DS128, HBg32DiS128x, ChBg128xIS16, ChBg128xDiS128x]
    };

    const fn build(self) -> Preset {
        use SubPreset::*;
        let (name, bg, sprite) = match self {
            HiBg48 => return SubBg::Hi48.build().named("HI_BG48"),
            HBg32IS16 => ("H_BG32_I_S16", SubBg::H32, SubSprite::I16),
            HiBg48DS128 => ("HI_BG48_D_S128", SubBg::Hi48, SubSprite::D128),
            HBg32DiS128x => ("H_BG32_DI_S128X", SubBg::H32, SubSprite::Di128x),
            ChBg128xIS16 => ("CH_BG128X_I_S16", SubBg::Ch128x, SubSprite::I16),
            ChBg128xDiS128x => ("CH_BG128X_DI_S128X", SubBg::Ch128x, SubSprite::Di128x),
        };
        bg.build().join(sprite.build()).named(name)
    }
}

preset_table!(SUB_PRESETS, SubPreset);
