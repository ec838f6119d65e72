//! Contiguous arrangements of banks inside one role's region.
//!
//! A [`Tiling`] is built left to right: the first bank goes to its lowest
//! offset (or an explicit one), each following bank to the offset that
//! starts exactly where the previous one ended. A bank that has no such
//! offset stops the build with a panic, which for the `const` catalogue
//! means a compile error.

use core::fmt;

use super::bank::{Bank, BankControl, Role, Span};

pub const MAX_BANKS: usize = 4;
pub const MAX_TILINGS: usize = 4;

/// One bank's routing inside a tiling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Mapping {
    pub bank: Bank,
    pub role: Role,
    pub offset: u8,
}

impl Mapping {
    pub fn span(&self) -> Option<Span> {
        self.bank.span(self.role, self.offset)
    }

    /// The control byte that establishes this mapping, or `None` if the
    /// bank cannot take the role.
    pub fn control(&self) -> Option<BankControl> {
        let code = self.bank.role_code(self.role)?;
        Some(BankControl::mapped(code, self.offset))
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Tiling {
    role: Role,
    start: u32,
    end: u32,
    banks: [Option<Mapping>; MAX_BANKS],
    len: usize,
}

impl Tiling {
    pub(crate) const fn new(role: Role) -> Self {
        Self { role, start: 0, end: 0, banks: [None; MAX_BANKS], len: 0 }
    }

    /// Append `bank` right after the banks already placed.
    pub(crate) const fn then(self, bank: Bank) -> Self {
        if self.len == 0 {
            return self.place(bank, 0);
        }
        match bank.offset_at(self.role, self.end) {
            Some(offset) => self.place(bank, offset),
            None => panic!("bank cannot continue this tiling"),
        }
    }

    /// Start the tiling with `bank` at `offset`.
    pub(crate) const fn place(self, bank: Bank, offset: u8) -> Self {
        let span = match bank.span(self.role, offset) {
            Some(span) => span,
            None => panic!("bank cannot take this role at this offset"),
        };
        if self.len == MAX_BANKS {
            panic!("too many banks in one tiling");
        }
        if self.len > 0 && span.start != self.end {
            panic!("tiling would leave a gap");
        }
        if self.contains(bank) {
            panic!("bank placed twice");
        }

        let mut next = self;
        next.banks[self.len] = Some(Mapping { bank, role: self.role, offset });
        next.len += 1;
        if self.len == 0 {
            next.start = span.start;
        }
        next.end = span.end;
        next
    }

    pub(crate) const fn contains(&self, bank: Bank) -> bool {
        let mut i = 0;
        while i < self.len {
            if let Some(mapping) = self.banks[i] {
                if mapping.bank as u8 == bank as u8 {
                    return true;
                }
            }
            i += 1;
        }
        false
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    /// Region-relative range covered by all banks together.
    pub const fn span(&self) -> Span {
        Span { start: self.start, end: self.end }
    }

    pub const fn size(&self) -> u32 {
        self.end - self.start
    }

    pub fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        self.banks[..self.len].iter().flatten().copied()
    }
}

impl fmt::Debug for Tiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tiling")
            .field("role", &self.role)
            .field("span", &(self.start..self.end))
            .field("banks", &&self.banks[..self.len])
            .finish()
    }
}

/// A named routing setup: one or more tilings over disjoint banks.
///
/// Applying a preset writes only the banks it names. Banks left over from a
/// previous preset keep their routing, so reset with
/// [`VramRouter::disable_all`](super::VramRouter::disable_all) first unless
/// the old routing is meant to stay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Preset {
    name: &'static str,
    tilings: [Option<Tiling>; MAX_TILINGS],
    len: usize,
}

impl Preset {
    pub(crate) const EMPTY: Self = Self { name: "", tilings: [None; MAX_TILINGS], len: 0 };

    pub(crate) const fn new(name: &'static str, tiling: Tiling) -> Self {
        Self::EMPTY.and(tiling).named(name)
    }

    pub(crate) const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Add a tiling. Its banks must not appear in the preset yet.
    pub(crate) const fn and(self, tiling: Tiling) -> Self {
        if self.len == MAX_TILINGS {
            panic!("too many tilings in one preset");
        }
        let mut i = 0;
        while i < tiling.len {
            if let Some(mapping) = tiling.banks[i] {
                if self.uses(mapping.bank) {
                    panic!("bank used by two tilings");
                }
            }
            i += 1;
        }

        let mut next = self;
        next.tilings[self.len] = Some(tiling);
        next.len += 1;
        next
    }

    /// All tilings of `other` added to this preset.
    pub(crate) const fn join(self, other: Preset) -> Self {
        let mut next = self;
        let mut i = 0;
        while i < other.len {
            if let Some(tiling) = other.tilings[i] {
                next = next.and(tiling);
            }
            i += 1;
        }
        next
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn uses(&self, bank: Bank) -> bool {
        let mut i = 0;
        while i < self.len {
            if let Some(tiling) = &self.tilings[i] {
                if tiling.contains(bank) {
                    return true;
                }
            }
            i += 1;
        }
        false
    }

    pub fn tilings(&self) -> impl Iterator<Item = &Tiling> + '_ {
        self.tilings[..self.len].iter().flatten()
    }

    /// Every bank write the preset makes, in order.
    pub fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        self.tilings().flat_map(Tiling::mappings)
    }

    /// Bytes the preset makes available to `role`.
    pub fn capacity(&self, role: Role) -> Option<u32> {
        self.tilings().find(|t| t.role == role).map(Tiling::size)
    }
}
