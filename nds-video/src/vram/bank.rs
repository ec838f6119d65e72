use crate::{
    engine::EngineId,
    register::{FieldId, FieldSpec, Layout, Overlay},
};

pub const KB: u32 = 1024;

/// `VRAMCNT`: control bytes of banks A-D as one word. Banks E-I follow
/// byte-wise, with `WRAMCNT` at `0x0400_0247` between G and H.
pub const VRAMCNT: usize = 0x0400_0240;

/// Base of the LCDC window, where every bank can be mapped for plain
/// CPU access.
pub const LCDC_BASE: usize = 0x0680_0000;

/// The nine VRAM banks.
///
/// | Bank  | Size | Control      |
/// |-------|------|--------------|
/// | A-D   | 128K | `0x0400_0240`-`0x0400_0243` |
/// | E     | 64K  | `0x0400_0244` |
/// | F, G  | 16K  | `0x0400_0245`, `0x0400_0246` |
/// | H     | 32K  | `0x0400_0248` |
/// | I     | 16K  | `0x0400_0249` |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bank {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

/// What a bank is routed to.
///
/// `Lcdc` is the direct-access passthrough: the bank appears at its own
/// address in the LCDC window and no engine uses it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Lcdc,
    Bg(EngineId),
    Sprite(EngineId),
    BgExtPalette(EngineId),
    SpriteExtPalette(EngineId),
    /// 3D texture image slots.
    Texture,
    /// 3D texture palette slots.
    TexturePalette,
    /// ARM7 work memory.
    Arm7,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Lcdc,
        Role::Bg(EngineId::Main),
        Role::Bg(EngineId::Sub),
        Role::Sprite(EngineId::Main),
        Role::Sprite(EngineId::Sub),
        Role::BgExtPalette(EngineId::Main),
        Role::BgExtPalette(EngineId::Sub),
        Role::SpriteExtPalette(EngineId::Main),
        Role::SpriteExtPalette(EngineId::Sub),
        Role::Texture,
        Role::TexturePalette,
        Role::Arm7,
    ];
}

/// Byte range a bank occupies inside its role's region, relative to the
/// region base.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    const fn at(start: u32, len: u32) -> Option<Self> {
        Some(Self { start, end: start + len })
    }

    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

use Bank::*;
use EngineId::{Main, Sub};

impl Bank {
    pub const ALL: [Bank; 9] = [A, B, C, D, E, F, G, H, I];

    pub const fn capacity(self) -> u32 {
        match self {
            A | B | C | D => 128 * KB,
            E => 64 * KB,
            F | G | I => 16 * KB,
            H => 32 * KB,
        }
    }

    /// Address of the bank's control byte.
    pub const fn control_address(self) -> usize {
        VRAMCNT
            + match self {
                A => 0,
                B => 1,
                C => 2,
                D => 3,
                E => 4,
                F => 5,
                G => 6,
                H => 8,
                I => 9,
            }
    }

    /// Where the bank shows up when routed to [`Role::Lcdc`].
    pub const fn lcdc_address(self) -> usize {
        LCDC_BASE + self.lcdc_offset() as usize
    }

    const fn lcdc_offset(self) -> u32 {
        match self {
            A => 0x0_0000,
            B => 0x2_0000,
            C => 0x4_0000,
            D => 0x6_0000,
            E => 0x8_0000,
            F => 0x9_0000,
            G => 0x9_4000,
            H => 0x9_8000,
            I => 0xA_0000,
        }
    }

    /// `mst` value routing this bank to `role`, if the bank supports it.
    pub const fn role_code(self, role: Role) -> Option<u8> {
        Some(match (self, role) {
            (_, Role::Lcdc) => 0,
            (A | B | C | D | E | F | G, Role::Bg(Main)) => 1,
            (A | B | E | F | G, Role::Sprite(Main)) => 2,
            (C | D, Role::Arm7) => 2,
            (A | B | C | D, Role::Texture) => 3,
            (E | F | G, Role::TexturePalette) => 3,
            (E | F | G, Role::BgExtPalette(Main)) => 4,
            (F | G, Role::SpriteExtPalette(Main)) => 5,
            (C, Role::Bg(Sub)) => 4,
            (H | I, Role::Bg(Sub)) => 1,
            (D, Role::Sprite(Sub)) => 4,
            (I, Role::Sprite(Sub)) => 2,
            (H, Role::BgExtPalette(Sub)) => 2,
            (I, Role::SpriteExtPalette(Sub)) => 3,
            _ => return None,
        })
    }

    /// Inverse of [`role_code`](Self::role_code).
    pub fn role_for_code(self, code: u8) -> Option<Role> {
        Role::ALL.into_iter().find(|&role| self.role_code(role) == Some(code))
    }

    /// Highest offset accepted for `role`. Roles without slots only take 0.
    pub const fn max_offset(self, role: Role) -> u8 {
        match (self, role) {
            (A | B | C | D, Role::Bg(Main) | Role::Texture) => 3,
            (F | G, Role::Bg(Main) | Role::Sprite(Main) | Role::TexturePalette) => 3,
            (A | B, Role::Sprite(Main)) => 1,
            (C | D, Role::Arm7) => 1,
            (F | G, Role::BgExtPalette(Main)) => 1,
            _ => 0,
        }
    }

    /// Byte range the bank covers in `role`'s region at `offset`.
    ///
    /// Main BG and sprite regions place F and G at
    /// `16K * offset.bit0 + 64K * offset.bit1`, so E (64K at 0) followed by
    /// F and G at offsets 2 and 3 forms one contiguous 96K block.
    pub const fn span(self, role: Role, offset: u8) -> Option<Span> {
        if self.role_code(role).is_none() || offset > self.max_offset(role) {
            return None;
        }
        let ofs = offset as u32;
        let low = ofs & 1;
        let high = ofs >> 1;
        match (self, role) {
            (_, Role::Lcdc) => Span::at(self.lcdc_offset(), self.capacity()),

            (A | B | C | D, Role::Bg(Main) | Role::Texture | Role::Arm7) => {
                Span::at(ofs * 128 * KB, self.capacity())
            }
            (A | B, Role::Sprite(Main)) => Span::at(ofs * 128 * KB, self.capacity()),
            (E, Role::Bg(Main) | Role::Sprite(Main) | Role::TexturePalette) => {
                Span::at(0, self.capacity())
            }
            (F | G, Role::Bg(Main) | Role::Sprite(Main)) => {
                Span::at(16 * KB * low + 64 * KB * high, self.capacity())
            }
            (F | G, Role::TexturePalette) => Span::at(16 * KB * (low + 4 * high), self.capacity()),

            // Four 8K slots; E only uses its first 32K.
            (E, Role::BgExtPalette(Main)) => Span::at(0, 32 * KB),
            (F | G, Role::BgExtPalette(Main)) => Span::at(16 * KB * ofs, 16 * KB),
            (F | G, Role::SpriteExtPalette(Main)) => Span::at(0, 8 * KB),

            (C | H, Role::Bg(Sub)) => Span::at(0, self.capacity()),
            (I, Role::Bg(Sub)) => Span::at(32 * KB, self.capacity()),
            (D | I, Role::Sprite(Sub)) => Span::at(0, self.capacity()),
            (H, Role::BgExtPalette(Sub)) => Span::at(0, 32 * KB),
            (I, Role::SpriteExtPalette(Sub)) => Span::at(0, 8 * KB),

            _ => None,
        }
    }

    /// Offset that places the bank at byte `position` of `role`'s region.
    pub const fn offset_at(self, role: Role, position: u32) -> Option<u8> {
        let mut offset = 0;
        while offset <= self.max_offset(role) {
            match self.span(role, offset) {
                Some(span) if span.start == position => return Some(offset),
                _ => {}
            }
            offset += 1;
        }
        None
    }
}

/// Layout marker for a bank control byte.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VramCnt;

impl Layout for VramCnt {
    const NAME: &'static str = "VRAMCNT";
    const WIDTH: u32 = 8;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("mst", 3),
        FieldSpec::new("offset", 2),
        FieldSpec::new("reserved", 2),
        FieldSpec::new("enable", 1),
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum VramCntField {
    Mst = 0,
    Offset = 1,
    Enable = 3,
}

impl FieldId<VramCnt> for VramCntField {
    fn index(self) -> usize {
        self as usize
    }
}

/// One bank's control byte.
pub type BankControl = Overlay<VramCnt>;

/// A bank control byte, decoded against its bank.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankState {
    pub enabled: bool,
    pub code: u8,
    pub offset: u8,
    /// `None` when the bank is disabled or the code means nothing for it.
    pub role: Option<Role>,
}

impl BankState {
    /// Powered down, unmapped.
    pub const OFF: Self = Self { enabled: false, code: 0, offset: 0, role: None };
}

impl Overlay<VramCnt> {
    /// Enabled control byte with `mst = code` and `offset`. Both are cut to
    /// their field widths.
    pub fn mapped(code: u8, offset: u8) -> Self {
        let mut control = Self::new();
        control
            .set_field_truncated(VramCntField::Mst, code as u32)
            .set_field_truncated(VramCntField::Offset, offset as u32)
            .set_field_truncated(VramCntField::Enable, 1);
        control
    }

    pub fn enabled(&self) -> bool {
        self.field(VramCntField::Enable) != 0
    }

    pub fn code(&self) -> u8 {
        self.field(VramCntField::Mst) as u8
    }

    pub fn offset(&self) -> u8 {
        self.field(VramCntField::Offset) as u8
    }

    pub fn decode(&self, bank: Bank) -> BankState {
        let enabled = self.enabled();
        BankState {
            enabled,
            code: self.code(),
            offset: self.offset(),
            role: if enabled { bank.role_for_code(self.code()) } else { None },
        }
    }
}
