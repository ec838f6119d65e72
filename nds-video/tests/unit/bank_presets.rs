//! Unit tests for the bank preset catalogue

use nds_video::{
    Bank, EngineId, Preset, Role,
    vram::{
        KB, MainBg, MainBgExtPalette, MainSprite, MainSpriteExtPalette, SubBg, SubPreset, SubSprite,
    },
};
use pretty_assertions::assert_eq;

fn catalogue() -> Vec<&'static Preset> {
    let mut all = Vec::new();
    all.extend(MainBg::ALL.map(MainBg::preset));
    all.extend(MainSprite::ALL.map(MainSprite::preset));
    all.extend(MainBgExtPalette::ALL.map(MainBgExtPalette::preset));
    all.extend(MainSpriteExtPalette::ALL.map(MainSpriteExtPalette::preset));
    all.extend(SubBg::ALL.map(SubBg::preset));
    all.extend(SubSprite::ALL.map(SubSprite::preset));
    all.extend(SubPreset::ALL.map(SubPreset::preset));
    all
}

#[test]
fn every_tiling_is_contiguous_and_gap_free() {
    for preset in catalogue() {
        for tiling in preset.tilings() {
            let mut cursor = tiling.span().start;
            for mapping in tiling.mappings() {
                let span = mapping.span().expect("mapping without a span");
                assert!(!span.is_empty(), "{}: {:?}", preset.name(), mapping.bank);
                assert_eq!(
                    span.start,
                    cursor,
                    "{}: {:?} out of place",
                    preset.name(),
                    mapping.bank
                );
                cursor = span.end;
            }
            assert_eq!(cursor, tiling.span().end, "{}", preset.name());
        }
    }
}

#[test]
fn no_bank_appears_twice() {
    for preset in catalogue() {
        let banks: Vec<Bank> = preset.mappings().map(|m| m.bank).collect();
        for (i, bank) in banks.iter().enumerate() {
            assert!(!banks[i + 1..].contains(bank), "{} uses {:?} twice", preset.name(), bank);
        }
    }
}

#[test]
fn banks_sharing_a_role_never_overlap() {
    for preset in catalogue() {
        let mappings: Vec<_> = preset.mappings().collect();
        for (i, a) in mappings.iter().enumerate() {
            for b in mappings[i + 1..].iter().filter(|b| b.role == a.role) {
                let (Some(sa), Some(sb)) = (a.span(), b.span()) else {
                    panic!("{}: mapping without a span", preset.name());
                };
                assert!(!sa.overlaps(&sb), "{}: {:?} and {:?}", preset.name(), a.bank, b.bank);
            }
        }
    }
}

#[test]
fn every_mapping_is_routable() {
    for preset in catalogue() {
        for mapping in preset.mappings() {
            let code = mapping.bank.role_code(mapping.role);
            assert!(code.is_some(), "{}: {:?} as {:?}", preset.name(), mapping.bank, mapping.role);
            let control = mapping.control().expect("routable mapping");
            assert!(control.enabled());
            assert_eq!(Some(control.code()), code);
            assert_eq!(control.offset(), mapping.offset);
        }
    }
}

#[test]
fn names_state_the_size() {
    let bg = Role::Bg(EngineId::Main);
    for preset in MainBg::ALL.map(MainBg::preset) {
        let kb: u32 = preset.name().rsplit('_').next().unwrap().parse().unwrap();
        assert_eq!(preset.capacity(bg), Some(kb * KB), "{}", preset.name());
    }
    let sprite = Role::Sprite(EngineId::Main);
    for preset in MainSprite::ALL.map(MainSprite::preset) {
        let kb: u32 = preset.name().rsplit('_').next().unwrap().parse().unwrap();
        assert_eq!(preset.capacity(sprite), Some(kb * KB), "{}", preset.name());
    }
}

#[test]
fn shared_layouts_differ_only_in_role() {
    let bg: Vec<_> = MainBg::Efg96.preset().mappings().map(|m| (m.bank, m.offset)).collect();
    let obj: Vec<_> = MainSprite::Efg96.preset().mappings().map(|m| (m.bank, m.offset)).collect();
    assert_eq!(bg, obj);
    assert_eq!(bg, vec![(Bank::E, 0), (Bank::F, 2), (Bank::G, 3)]);
}

#[test]
fn ext_palette_slots() {
    let offsets = |p: MainBgExtPalette| -> Vec<(Bank, u8)> {
        p.preset().mappings().map(|m| (m.bank, m.offset)).collect()
    };
    assert_eq!(offsets(MainBgExtPalette::F23), vec![(Bank::F, 1)]);
    assert_eq!(offsets(MainBgExtPalette::Gf), vec![(Bank::G, 0), (Bank::F, 1)]);
    assert_eq!(
        MainBgExtPalette::E.preset().capacity(Role::BgExtPalette(EngineId::Main)),
        Some(32 * KB)
    );
    assert_eq!(
        MainSpriteExtPalette::G.preset().capacity(Role::SpriteExtPalette(EngineId::Main)),
        Some(8 * KB)
    );
}

#[test]
fn sub_presets_combine_bg_and_sprites() {
    let preset = SubPreset::ChBg128xDiS128x.preset();
    let roles: Vec<(Bank, Role)> = preset.mappings().map(|m| (m.bank, m.role)).collect();
    assert_eq!(
        roles,
        vec![
            (Bank::C, Role::Bg(EngineId::Sub)),
            (Bank::H, Role::BgExtPalette(EngineId::Sub)),
            (Bank::D, Role::Sprite(EngineId::Sub)),
            (Bank::I, Role::SpriteExtPalette(EngineId::Sub)),
        ]
    );

    let preset = SubPreset::HiBg48DS128.preset();
    assert_eq!(preset.capacity(Role::Bg(EngineId::Sub)), Some(48 * KB));
    assert_eq!(preset.capacity(Role::Sprite(EngineId::Sub)), Some(128 * KB));
    assert!(!preset.uses(Bank::C));
}

#[test]
fn sub_bg_i_sits_behind_h() {
    let span = SubBg::I16.preset().tilings().next().unwrap().span();
    assert_eq!((span.start, span.end), (32 * KB, 48 * KB));
}
