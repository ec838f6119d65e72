//! # VRAM Banks
//!
//! The nine VRAM banks are routed by one write-only control byte each:
//!
//! | Bits | Field  | Meaning                                   |
//! |------|--------|-------------------------------------------|
//! | 0-2  | mst    | Role; the same code means different roles per bank |
//! | 3-4  | offset | Slot within the role's region             |
//! | 5-6  | -      | Reserved                                  |
//! | 7    | enable | Bank is mapped                            |
//!
//! [`VramRouter`] writes those bytes. Most code only needs
//! [`apply`](VramRouter::apply) with a catalogue entry:
//!
//! ```ignore
//! video.vram.disable_all();
//! video.vram.apply(MainBg::Abcd512.preset());
//! video.vram.apply(SubPreset::HBg32IS16.preset());
//! ```
//!
//! ## Routing is not exclusive
//!
//! Nothing stops two banks from claiming the same region, and applying a
//! preset leaves banks it does not name alone. `disable_all` first gives a
//! known baseline.

mod bank;
mod catalogue;
mod tiling;

use log::{debug, trace, warn};

pub use bank::{
    Bank, BankControl, BankState, KB, LCDC_BASE, Role, Span, VRAMCNT, VramCnt, VramCntField,
};
pub use catalogue::{
    MainBg, MainBgExtPalette, MainSprite, MainSpriteExtPalette, SubBg, SubPreset, SubSprite,
};
pub use tiling::{MAX_BANKS, MAX_TILINGS, Mapping, Preset, Tiling};

use crate::{bus::RegisterBus, register::RangeError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("bank {bank:?} cannot be routed to {role:?}")]
    UnsupportedRole { bank: Bank, role: Role },
}

/// Write access to the bank control bytes.
pub struct VramRouter<B> {
    bus: B,
}

impl<B: RegisterBus> VramRouter<B> {
    pub(crate) fn new(bus: B) -> Self {
        Self { bus }
    }

    fn write(&mut self, bank: Bank, control: BankControl) {
        trace!(target: "vramcnt", "{:?} <- {:#04x}", bank, control.pack());
        self.bus.write8(bank.control_address(), control.pack() as u8);
    }

    /// Route `bank` to `role` at `offset` and enable it.
    ///
    /// Nothing is written when the bank cannot take the role or the offset
    /// is out of range for it.
    pub fn enable_role(&mut self, bank: Bank, role: Role, offset: u8) -> Result<(), MappingError> {
        let Some(code) = bank.role_code(role) else {
            warn!(target: "vramcnt", "{:?} has no {:?} routing", bank, role);
            return Err(MappingError::UnsupportedRole { bank, role });
        };
        let max = bank.max_offset(role);
        if offset > max {
            return Err(RangeError {
                register: "VRAMCNT",
                field: "offset",
                value: offset as u32,
                max: max as u32,
            }
            .into());
        }
        self.write(bank, BankControl::mapped(code, offset));
        Ok(())
    }

    /// Map `bank` to its own LCDC address for direct CPU access.
    pub fn lcdc(&mut self, bank: Bank) {
        self.write(bank, BankControl::mapped(0, 0));
    }

    /// Write a control byte as is. The byte is not checked against the
    /// bank's role table.
    pub fn write_raw(&mut self, bank: Bank, value: u8) {
        let control = BankControl::from_bits(value as u32);
        if control.enabled() && bank.role_for_code(control.code()).is_none() {
            warn!(
                target: "vramcnt",
                "{:?} <- {:#04x}: mst {} means nothing for this bank",
                bank,
                value,
                control.code()
            );
        }
        self.write(bank, control);
    }

    /// Disable all nine banks. A-D are cleared with one word write, E-I
    /// byte by byte; `WRAMCNT` is not touched.
    pub fn disable_all(&mut self) {
        debug!(target: "vramcnt", "disable all banks");
        self.bus.write32(VRAMCNT, 0);
        for bank in [Bank::E, Bank::F, Bank::G, Bank::H, Bank::I] {
            self.write(bank, BankControl::new());
        }
    }

    /// Write the control byte of every bank `preset` names, in order.
    pub fn apply(&mut self, preset: &Preset) {
        debug!(target: "vramcnt", "apply {}", preset.name());
        for mapping in preset.mappings() {
            match mapping.control() {
                Some(control) => self.write(mapping.bank, control),
                None => {
                    warn!(target: "vramcnt", "{:?} has no {:?} routing", mapping.bank, mapping.role)
                }
            }
        }
    }
}
