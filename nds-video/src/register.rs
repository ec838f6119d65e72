//! # Register Overlays
//!
//! Every register this crate touches is write-only. Software never learns what
//! the hardware currently holds, so each register is mirrored by an
//! [`Overlay`]: a plain value that is filled in field by field and then
//! committed with a single write.
//!
//! A register is described by a [`Layout`], an ordered table of
//! `(name, width)` pairs. Fields are packed LSB first in declaration order:
//!
//! | Table entry     | Bits               |
//! |-----------------|--------------------|
//! | `FIELDS[0]`     | `0 .. w0`          |
//! | `FIELDS[1]`     | `w0 .. w0 + w1`    |
//! | `FIELDS[n]`     | follows `FIELDS[n - 1]` |
//!
//! Shifts and masks are derived from that table and nothing else. Reordering
//! the table silently moves every later field, so tables must match the
//! hardware documentation exactly.

use core::{fmt, marker::PhantomData, ops::Range};

use bit_field::BitField;
use heapless::Vec;

/// Upper bound on the number of fields a [`Layout`] may declare.
pub const MAX_FIELDS: usize = 32;

/// One named, fixed-width field of a register layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: u32,
}

impl FieldSpec {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }

    /// Largest value the field can hold.
    pub const fn max(&self) -> u32 {
        mask_of(self.width)
    }
}

/// Static description of a hardware register.
pub trait Layout {
    /// Register name, used in errors and diagnostics.
    const NAME: &'static str;
    /// Register width in bits (at most 32).
    const WIDTH: u32;
    /// Field table, LSB first.
    const FIELDS: &'static [FieldSpec];
}

/// A typed handle naming one entry of `L::FIELDS`.
pub trait FieldId<L: Layout>: Copy {
    fn index(self) -> usize;
}

/// A value did not fit the field it was written to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{value:#x} does not fit {register}.{field} (max {max:#x})")]
pub struct RangeError {
    pub register: &'static str,
    pub field: &'static str,
    pub value: u32,
    pub max: u32,
}

const fn mask_of(width: u32) -> u32 {
    if width >= 32 { u32::MAX } else { (1 << width) - 1 }
}

/// Sum of all field widths in `fields`.
pub const fn total_width(fields: &[FieldSpec]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < fields.len() {
        total += fields[i].width;
        i += 1;
    }
    total
}

/// Bit position of the field at `index`.
pub const fn shift_of(fields: &[FieldSpec], index: usize) -> u32 {
    let mut shift = 0;
    let mut i = 0;
    while i < index {
        shift += fields[i].width;
        i += 1;
    }
    shift
}

/// In-memory mirror of a register described by `L`.
///
/// An overlay is independent of the hardware: building one writes nothing,
/// and it is never updated from the hardware afterwards.
#[derive(Copy, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct Overlay<L> {
    bits: u32,
    layout: PhantomData<L>,
}

impl<L: Layout> Overlay<L> {
    const TABLE_OK: () = {
        assert!(L::WIDTH <= 32, "register wider than 32 bits");
        assert!(L::FIELDS.len() <= MAX_FIELDS, "too many fields");
        assert!(total_width(L::FIELDS) <= L::WIDTH, "fields overflow the register");
    };

    /// All fields zero.
    pub const fn new() -> Self {
        let () = Self::TABLE_OK;
        Self { bits: 0, layout: PhantomData }
    }

    /// Raw constructor. Bits past `L::WIDTH` are dropped, nothing else is
    /// checked: reserved bits and out-of-table values are kept verbatim.
    pub const fn from_bits(bits: u32) -> Self {
        let () = Self::TABLE_OK;
        Self { bits: bits & mask_of(L::WIDTH), layout: PhantomData }
    }

    /// The full register value.
    pub const fn pack(&self) -> u32 {
        self.bits
    }

    /// Zero every field. Presets only touch the fields they name, so an
    /// overlay reused across unrelated presets should be reset first.
    pub fn reset(&mut self) -> &mut Self {
        self.bits = 0;
        self
    }

    pub fn field<F: FieldId<L>>(&self, field: F) -> u32 {
        self.get(field.index())
    }

    /// Checked write of one field.
    pub fn set_field<F: FieldId<L>>(
        &mut self,
        field: F,
        value: u32,
    ) -> Result<&mut Self, RangeError> {
        let index = field.index();
        self.set_checked(index, value, L::FIELDS[index].max())?;
        Ok(self)
    }

    /// Unchecked write of one field: the value is cut to the field width,
    /// exactly as the hardware would latch it.
    pub fn set_field_truncated<F: FieldId<L>>(&mut self, field: F, value: u32) -> &mut Self {
        let index = field.index();
        self.set(index, value & L::FIELDS[index].max());
        self
    }

    /// Field values in declaration order.
    pub fn unpack(&self) -> Vec<u32, MAX_FIELDS> {
        (0..L::FIELDS.len()).map(|i| self.get(i)).collect()
    }

    /// Inverse of [`unpack`](Self::unpack): one value per field, in
    /// declaration order. Fields past the end of a short `values` stay zero,
    /// as in [`new`](Self::new); values past the last field are ignored.
    pub fn from_fields(values: &[u32]) -> Result<Self, RangeError> {
        let mut overlay = Self::new();
        for (i, &value) in values.iter().enumerate().take(L::FIELDS.len()) {
            overlay.set_checked(i, value, L::FIELDS[i].max())?;
        }
        Ok(overlay)
    }

    /// `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldSpec, u32)> + '_ {
        L::FIELDS.iter().enumerate().map(|(i, spec)| (*spec, self.get(i)))
    }

    fn range(index: usize) -> Range<usize> {
        let start = shift_of(L::FIELDS, index) as usize;
        start..start + L::FIELDS[index].width as usize
    }

    pub(crate) fn get(&self, index: usize) -> u32 {
        self.bits.get_bits(Self::range(index))
    }

    pub(crate) fn set(&mut self, index: usize, value: u32) {
        self.bits.set_bits(Self::range(index), value);
    }

    /// Write `value` if it is at most `max` (which never exceeds the field
    /// width; engines narrow it for fields with engine-specific values).
    pub(crate) fn set_checked(
        &mut self,
        index: usize,
        value: u32,
        max: u32,
    ) -> Result<(), RangeError> {
        if value > max {
            return Err(RangeError {
                register: L::NAME,
                field: L::FIELDS[index].name,
                value,
                max,
            });
        }
        self.set(index, value);
        Ok(())
    }

    pub(crate) fn set_flag(&mut self, index: usize, on: bool) {
        self.set(index, on as u32);
    }
}

impl<L: Layout> Default for Overlay<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Layout> fmt::Debug for Overlay<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(L::NAME);
        for (spec, value) in self.iter() {
            s.field(spec.name, &value);
        }
        s.finish()
    }
}
