//! Mock register bus that records writes and keeps the resulting memory

use nds_video::{
    Bank,
    bus::RegisterBus,
    vram::{BankControl, BankState},
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Write32 { address: usize, value: u32 },
    Write8 { address: usize, value: u8 },
}

#[derive(Debug, Default)]
struct MockState {
    /// Byte-addressed view of everything written so far
    memory: HashMap<usize, u8>,
    /// Operations log for verification
    operations: Vec<Operation>,
}

/// Shared handle: clones see the same memory and log, the way every
/// `Video` handle shares one address space.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<MockState>>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Byte at `address`, or `None` if it was never written.
    pub fn byte(&self, address: usize) -> Option<u8> {
        self.state.borrow().memory.get(&address).copied()
    }

    /// Little-endian word at `address`; unwritten bytes read as zero.
    pub fn word(&self, address: usize) -> u32 {
        let state = self.state.borrow();
        (0..4).fold(0, |word, i| {
            word | (*state.memory.get(&(address + i)).unwrap_or(&0) as u32) << (8 * i)
        })
    }

    /// Decoded control byte of `bank`; never-written banks read as zero.
    pub fn bank_state(&self, bank: Bank) -> BankState {
        let byte = self.byte(bank.control_address()).unwrap_or(0);
        BankControl::from_bits(byte as u32).decode(bank)
    }

    /// Pretend some earlier code left `bank` routed somewhere.
    pub fn preload(&self, bank: Bank, value: u8) {
        self.state.borrow_mut().memory.insert(bank.control_address(), value);
    }
}

impl RegisterBus for MockBus {
    fn write32(&mut self, address: usize, value: u32) {
        let mut state = self.state.borrow_mut();
        for (i, byte) in value.to_le_bytes().into_iter().enumerate() {
            state.memory.insert(address + i, byte);
        }
        state.operations.push(Operation::Write32 { address, value });
    }

    fn write8(&mut self, address: usize, value: u8) {
        let mut state = self.state.borrow_mut();
        state.memory.insert(address, value);
        state.operations.push(Operation::Write8 { address, value });
    }
}
