//! Unit tests for single-bank routing

use crate::common::{Operation, create_mock_video};
use nds_video::{
    Bank, EngineId, MappingError, RangeError, Role,
    vram::{BankState, VRAMCNT},
};
use pretty_assertions::assert_eq;

#[test]
fn enable_role_writes_one_byte() {
    let (mut video, bus) = create_mock_video();
    video.vram.enable_role(Bank::C, Role::Arm7, 1).unwrap();

    assert_eq!(bus.operations(), vec![Operation::Write8 { address: 0x0400_0242, value: 0x8A }]);
    assert_eq!(
        bus.bank_state(Bank::C),
        BankState { enabled: true, code: 2, offset: 1, role: Some(Role::Arm7) }
    );
}

#[test]
fn same_code_means_different_roles() {
    let (mut video, bus) = create_mock_video();
    video.vram.write_raw(Bank::C, 0x84);
    video.vram.write_raw(Bank::D, 0x84);
    video.vram.write_raw(Bank::E, 0x84);

    assert_eq!(bus.bank_state(Bank::C).role, Some(Role::Bg(EngineId::Sub)));
    assert_eq!(bus.bank_state(Bank::D).role, Some(Role::Sprite(EngineId::Sub)));
    assert_eq!(bus.bank_state(Bank::E).role, Some(Role::BgExtPalette(EngineId::Main)));
}

#[test]
fn rejected_mappings_write_nothing() {
    let (mut video, bus) = create_mock_video();

    let err = video.vram.enable_role(Bank::I, Role::Texture, 0).unwrap_err();
    assert_eq!(err, MappingError::UnsupportedRole { bank: Bank::I, role: Role::Texture });

    let err = video.vram.enable_role(Bank::F, Role::BgExtPalette(EngineId::Main), 2).unwrap_err();
    assert_eq!(
        err,
        MappingError::Range(RangeError { register: "VRAMCNT", field: "offset", value: 2, max: 1 })
    );

    assert!(bus.operations().is_empty());
}

#[test]
fn lcdc_is_code_zero_enabled() {
    let (mut video, bus) = create_mock_video();
    for bank in Bank::ALL {
        video.vram.lcdc(bank);
    }
    for bank in Bank::ALL {
        assert_eq!(bus.byte(bank.control_address()), Some(0x80));
        assert_eq!(bus.bank_state(bank).role, Some(Role::Lcdc));
    }
    assert_eq!(Bank::A.lcdc_address(), 0x0680_0000);
    assert_eq!(Bank::I.lcdc_address(), 0x068A_0000);
}

#[test]
fn raw_writes_are_not_checked() {
    let (mut video, bus) = create_mock_video();
    // mst 7 is meaningless for H, offset and reserved bits set too.
    video.vram.write_raw(Bank::H, 0xFF);
    assert_eq!(bus.byte(0x0400_0248), Some(0xFF));
    let state = bus.bank_state(Bank::H);
    assert!(state.enabled);
    assert_eq!(state.role, None);
}

#[test]
fn disable_all_resets_every_bank() {
    let (mut video, bus) = create_mock_video();
    for bank in Bank::ALL {
        bus.preload(bank, 0x81);
    }
    video.vram.disable_all();

    for bank in Bank::ALL {
        assert_eq!(bus.bank_state(bank), BankState::OFF, "{bank:?}");
    }
    assert_eq!(bus.operations()[0], Operation::Write32 { address: VRAMCNT, value: 0 });
    assert_eq!(bus.byte(0x0400_0247), None, "WRAMCNT must not be written");
}
