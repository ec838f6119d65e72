//! # Register Bus
//!
//! All hardware access goes through [`RegisterBus`]. It has no read methods:
//! the registers behind it are write-only, and a write can neither fail nor
//! be verified, so the methods return nothing.
//!
//! [`Mmio`] is the real thing. Tests substitute a bus that records writes.

use volatile_register::WO;

pub trait RegisterBus {
    fn write32(&mut self, address: usize, value: u32);
    fn write8(&mut self, address: usize, value: u8);
}

impl<B: RegisterBus + ?Sized> RegisterBus for &mut B {
    #[inline(always)]
    fn write32(&mut self, address: usize, value: u32) {
        (**self).write32(address, value);
    }

    #[inline(always)]
    fn write8(&mut self, address: usize, value: u8) {
        (**self).write8(address, value);
    }
}

/// Memory-mapped I/O on the ARM9.
#[derive(Debug, Copy, Clone)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// # Safety
    ///
    /// Only valid on DS hardware (or an emulator), where the I/O addresses
    /// used by this crate are mapped.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for Mmio {
    #[inline(always)]
    fn write32(&mut self, address: usize, value: u32) {
        unsafe { (*(address as *const WO<u32>)).write(value) }
    }

    #[inline(always)]
    fn write8(&mut self, address: usize, value: u8) {
        unsafe { (*(address as *const WO<u8>)).write(value) }
    }
}
