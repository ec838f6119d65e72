//! Unit tests for the packed field overlay

use nds_video::{
    Overlay, RangeError,
    display::Dispcnt,
    register::{FieldId, Layout},
    vram::VramCnt,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Field addressed by position, for sweeping whole layouts.
#[derive(Debug, Clone, Copy)]
struct Nth(usize);

impl<L: Layout> FieldId<L> for Nth {
    fn index(self) -> usize {
        self.0
    }
}

fn field_count() -> usize {
    Dispcnt::FIELDS.len()
}

proptest! {
    #[test]
    fn raw_bits_survive(bits in any::<u32>()) {
        prop_assert_eq!(Overlay::<Dispcnt>::from_bits(bits).pack(), bits);
    }

    #[test]
    fn unpacked_fields_rebuild_the_word(bits in any::<u32>()) {
        let overlay = Overlay::<Dispcnt>::from_bits(bits);
        let fields = overlay.unpack();
        prop_assert_eq!(fields.len(), field_count());
        prop_assert_eq!(Overlay::<Dispcnt>::from_fields(&fields).unwrap(), overlay);
    }

    #[test]
    fn writing_one_field_leaves_the_others(
        bits in any::<u32>(),
        index in 0..field_count(),
        value in any::<u32>(),
    ) {
        let mut overlay = Overlay::<Dispcnt>::from_bits(bits);
        let before = overlay.unpack();
        let max = Dispcnt::FIELDS[index].max();
        let value = value & max;

        overlay.set_field(Nth(index), value).unwrap();

        let after = overlay.unpack();
        for i in 0..field_count() {
            if i == index {
                prop_assert_eq!(after[i], value);
            } else {
                prop_assert_eq!(after[i], before[i]);
            }
        }
    }

    #[test]
    fn oversized_values_are_rejected_untouched(
        bits in any::<u32>(),
        index in 0..field_count(),
        extra in 1u32..1024,
    ) {
        let mut overlay = Overlay::<Dispcnt>::from_bits(bits);
        let spec = Dispcnt::FIELDS[index];
        let value = spec.max() + extra;

        let err = overlay.set_field(Nth(index), value).unwrap_err();

        prop_assert_eq!(
            err,
            RangeError { register: "DISPCNT", field: spec.name, value, max: spec.max() }
        );
        prop_assert_eq!(overlay.pack(), bits);
    }

    #[test]
    fn truncated_writes_keep_low_bits(index in 0..field_count(), value in any::<u32>()) {
        let mut overlay = Overlay::<Dispcnt>::new();
        overlay.set_field_truncated(Nth(index), value);
        prop_assert_eq!(overlay.field(Nth(index)), value & Dispcnt::FIELDS[index].max());
    }
}

#[test]
fn short_field_lists_leave_trailing_fields_zero() {
    let overlay = Overlay::<VramCnt>::from_fields(&[1]).unwrap();
    assert_eq!(overlay.pack(), 1);
    assert_eq!(overlay.unpack().as_slice(), &[1, 0, 0, 0]);

    let overlay = Overlay::<VramCnt>::from_fields(&[2, 3, 0, 1, 7, 7]).unwrap();
    assert_eq!(overlay.pack(), 0x9A);

    assert!(Overlay::<VramCnt>::from_fields(&[8]).is_err());
}

#[test]
fn byte_register_drops_high_bits() {
    assert_eq!(Overlay::<VramCnt>::from_bits(0x1234).pack(), 0x34);
}

#[test]
fn reserved_bits_are_kept_raw() {
    // Bits 5-6 of a bank control byte are reserved.
    let overlay = Overlay::<VramCnt>::from_bits(0b1110_0001);
    assert_eq!(overlay.unpack().as_slice(), &[1, 0, 3, 1]);
}

#[test]
fn debug_lists_fields_by_name() {
    let text = format!("{:?}", Overlay::<VramCnt>::from_bits(0x8B));
    assert_eq!(text, "VRAMCNT { mst: 3, offset: 1, reserved: 0, enable: 1 }");
}
