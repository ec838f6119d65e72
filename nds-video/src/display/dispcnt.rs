use core::marker::PhantomData;

use crate::{
    engine::{Engine, Main, Sub},
    register::{FieldId, FieldSpec, Layout, Overlay, RangeError, shift_of},
};

/// Layout marker for the 32-bit DISPCNT register.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dispcnt;

/// DISPCNT, LSB first. Both engines share the layout; engine B ignores the
/// main-only fields.
pub const DISPCNT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("bg_mode", 3),
    FieldSpec::new("bg0_3d", 1),
    FieldSpec::new("tile_obj_mapping", 1),
    FieldSpec::new("bmp_obj_2d_dimension", 1),
    FieldSpec::new("bmp_obj_mapping", 1),
    FieldSpec::new("forced_blank", 1),
    FieldSpec::new("bg0_enable", 1),
    FieldSpec::new("bg1_enable", 1),
    FieldSpec::new("bg2_enable", 1),
    FieldSpec::new("bg3_enable", 1),
    FieldSpec::new("obj_enable", 1),
    FieldSpec::new("window_0_enable", 1),
    FieldSpec::new("window_1_enable", 1),
    FieldSpec::new("obj_window_enable", 1),
    FieldSpec::new("display_mode", 2),
    FieldSpec::new("vram_block", 2),
    FieldSpec::new("tile_obj_1d_boundary", 2),
    FieldSpec::new("bmp_obj_1d_boundary", 1),
    FieldSpec::new("hblank_oam_access", 1),
    FieldSpec::new("char_base", 3),
    FieldSpec::new("screen_base", 3),
    FieldSpec::new("bg_ext_palettes", 1),
    FieldSpec::new("obj_ext_palettes", 1),
];

impl Layout for Dispcnt {
    const NAME: &'static str = "DISPCNT";
    const WIDTH: u32 = 32;
    const FIELDS: &'static [FieldSpec] = DISPCNT_FIELDS;
}

/// DISPCNT fields both engines implement. Discriminants index
/// [`DISPCNT_FIELDS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum Field {
    BgMode = 0,
    TileObjMapping = 2,
    BitmapObjDimension = 3,
    BitmapObjMapping = 4,
    ForcedBlank = 5,
    Bg0Enable = 6,
    Bg1Enable = 7,
    Bg2Enable = 8,
    Bg3Enable = 9,
    ObjEnable = 10,
    Window0Enable = 11,
    Window1Enable = 12,
    ObjWindowEnable = 13,
    DisplayMode = 14,
    TileObjBoundary = 16,
    BitmapObjBoundary = 17,
    HblankOamAccess = 18,
    BgExtPalettes = 21,
    ObjExtPalettes = 22,
}

/// DISPCNT fields only engine A implements.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum MainField {
    Bg0Is3d = 1,
    VramBlock = 15,
    CharBase = 19,
    ScreenBase = 20,
}

impl FieldId<Dispcnt> for Field {
    fn index(self) -> usize {
        self as usize
    }
}

impl FieldId<Dispcnt> for MainField {
    fn index(self) -> usize {
        self as usize
    }
}

const LAYER_SHIFT: u32 = shift_of(DISPCNT_FIELDS, Field::Bg0Enable as usize);

bitflags::bitflags! {
    /// Layer and window enables, DISPCNT bits 8-15.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layers: u8 {
        const BG0     = 0b0000_0001;
        const BG1     = 0b0000_0010;
        const BG2     = 0b0000_0100;
        const BG3     = 0b0000_1000;
        const OBJ     = 0b0001_0000;
        const WIN0    = 0b0010_0000;
        const WIN1    = 0b0100_0000;
        const OBJ_WIN = 0b1000_0000;

        const ALL_BG  = Self::BG0.bits() | Self::BG1.bits() | Self::BG2.bits() | Self::BG3.bits();
    }
}

/// Background modes both engines support.
///
/// | Mode | BG0  | BG1  | BG2      | BG3      |
/// |------|------|------|----------|----------|
/// | 0    | Text | Text | Text     | Text     |
/// | 1    | Text | Text | Text     | Affine   |
/// | 2    | Text | Text | Affine   | Affine   |
/// | 3    | Text | Text | Text     | Extended |
/// | 4    | Text | Text | Affine   | Extended |
/// | 5    | Text | Text | Extended | Extended |
///
/// Mode 6 (large bitmap) is engine A only, see
/// [`DisplayConfig::graphics_bmp`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BgMode {
    Tttt = 0,
    Ttta = 1,
    Ttaa = 2,
    Ttte = 3,
    Ttae = 4,
    Ttee = 5,
}

/// Display modes both engines support. Modes 2 and 3 (framebuffer from VRAM,
/// framebuffer from main memory) are engine A only.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    /// Screen is white.
    Off = 0,
    /// Backgrounds, sprites and (engine A) 3D.
    Normal = 1,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjMapping {
    TwoDim = 0,
    OneDim = 1,
}

/// Source width of 2D-mapped bitmap sprites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitmapObjDimension {
    Width128 = 0,
    Width256 = 1,
}

/// Stride between 1D-mapped tile sprites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileObjBoundary {
    Bytes32 = 0,
    Bytes64 = 1,
    Bytes128 = 2,
    Bytes256 = 3,
}

/// Stride between 1D-mapped bitmap sprites.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitmapObjBoundary {
    Bytes128 = 0,
    Bytes256 = 1,
}

/// VRAM banks engine A can display as a framebuffer. The bank has to be
/// mapped to its LCDC address (see [`VramRouter::lcdc`](crate::vram::VramRouter::lcdc)).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FramebufferBank {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// Overlay for one engine's DISPCNT register.
///
/// `E` selects the engine the configuration is meant for. Fields and presets
/// engine B lacks only exist on `DisplayConfig<Main>`:
///
/// ```compile_fail
/// use nds_video::{display::DisplayConfig, engine::Sub};
///
/// let mut config = DisplayConfig::<Sub>::new();
/// config.graphics_3d_ttt();
/// ```
///
/// ```compile_fail
/// use nds_video::display::{DisplayConfig, MainField};
/// use nds_video::engine::Sub;
///
/// let mut config = DisplayConfig::<Sub>::new();
/// config.set_main_field(MainField::CharBase, 1);
/// ```
///
/// A configuration written for engine B is valid on engine A and converts
/// with `DisplayConfig::<Main>::from`; there is no conversion the other way.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct DisplayConfig<E> {
    pub(crate) overlay: Overlay<Dispcnt>,
    engine: PhantomData<E>,
}

impl<E: Engine> DisplayConfig<E> {
    /// All fields zero.
    pub const fn new() -> Self {
        Self { overlay: Overlay::new(), engine: PhantomData }
    }

    /// Display disabled (white screen), every other field zero.
    pub const fn off() -> Self {
        Self::new()
    }

    /// Unchecked raw constructor. Bits are kept as given, including values
    /// the engine does not implement.
    pub const fn from_bits(bits: u32) -> Self {
        Self { overlay: Overlay::from_bits(bits), engine: PhantomData }
    }

    /// Register value to commit.
    pub const fn pack(&self) -> u32 {
        self.overlay.pack()
    }

    pub fn overlay(&self) -> &Overlay<Dispcnt> {
        &self.overlay
    }

    /// Zero every field.
    pub fn reset(&mut self) -> &mut Self {
        self.overlay.reset();
        self
    }

    pub fn field(&self, field: Field) -> u32 {
        self.overlay.field(field)
    }

    /// Checked field write. Fails if `value` overflows the field, or if it
    /// names a background/display mode this engine does not implement.
    pub fn set_field(&mut self, field: Field, value: u32) -> Result<&mut Self, RangeError> {
        let max = match field {
            Field::BgMode => E::MAX_BG_MODE,
            Field::DisplayMode => E::MAX_DISPLAY_MODE,
            _ => Dispcnt::FIELDS[field as usize].max(),
        };
        self.overlay.set_checked(field as usize, value, max)?;
        Ok(self)
    }

    /// Unchecked field write, cut to the field width.
    pub fn set_field_truncated(&mut self, field: Field, value: u32) -> &mut Self {
        self.overlay.set_field_truncated(field, value);
        self
    }

    /// Background mode index (0-6).
    pub fn bg_mode(&self) -> u32 {
        self.field(Field::BgMode)
    }

    pub fn set_bg_mode(&mut self, mode: BgMode) -> &mut Self {
        self.overlay.set(Field::BgMode as usize, mode as u32);
        self
    }

    /// Display mode index (0-3).
    pub fn display_mode(&self) -> u32 {
        self.field(Field::DisplayMode)
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) -> &mut Self {
        self.overlay.set(Field::DisplayMode as usize, mode as u32);
        self
    }

    /// Whether BG0 shows 3D output. Always readable, since a raw value may
    /// carry the bit; only engine A can set it.
    pub fn bg0_3d(&self) -> bool {
        self.overlay.field(MainField::Bg0Is3d) != 0
    }

    pub fn layers(&self) -> Layers {
        Layers::from_bits_retain((self.pack() >> LAYER_SHIFT) as u8)
    }

    /// Replace all eight layer/window enables.
    pub fn set_layers(&mut self, layers: Layers) -> &mut Self {
        for bit in 0..8 {
            let on = layers.bits() & (1 << bit) != 0;
            self.overlay.set_flag(Field::Bg0Enable as usize + bit, on);
        }
        self
    }

    pub fn enable_layers(&mut self, layers: Layers) -> &mut Self {
        self.set_layers(self.layers() | layers)
    }

    pub fn disable_layers(&mut self, layers: Layers) -> &mut Self {
        self.set_layers(self.layers() - layers)
    }

    pub fn forced_blank(&self) -> bool {
        self.field(Field::ForcedBlank) != 0
    }

    /// Stop the engine from accessing VRAM, OAM and palettes.
    pub fn set_forced_blank(&mut self, on: bool) -> &mut Self {
        self.overlay.set_flag(Field::ForcedBlank as usize, on);
        self
    }

    pub fn set_tile_obj_mapping(&mut self, mapping: ObjMapping) -> &mut Self {
        self.overlay.set(Field::TileObjMapping as usize, mapping as u32);
        self
    }

    pub fn set_bitmap_obj_mapping(&mut self, mapping: ObjMapping) -> &mut Self {
        self.overlay.set(Field::BitmapObjMapping as usize, mapping as u32);
        self
    }

    pub fn set_bitmap_obj_dimension(&mut self, dimension: BitmapObjDimension) -> &mut Self {
        self.overlay.set(Field::BitmapObjDimension as usize, dimension as u32);
        self
    }

    pub fn set_tile_obj_boundary(&mut self, boundary: TileObjBoundary) -> &mut Self {
        self.overlay.set(Field::TileObjBoundary as usize, boundary as u32);
        self
    }

    pub fn set_bitmap_obj_boundary(&mut self, boundary: BitmapObjBoundary) -> &mut Self {
        self.overlay.set(Field::BitmapObjBoundary as usize, boundary as u32);
        self
    }

    /// Allow OAM access during H-blank (at the cost of fewer sprite pixels
    /// per line).
    pub fn set_hblank_oam_access(&mut self, on: bool) -> &mut Self {
        self.overlay.set_flag(Field::HblankOamAccess as usize, on);
        self
    }

    pub fn bg_ext_palettes(&self) -> bool {
        self.field(Field::BgExtPalettes) != 0
    }

    pub fn obj_ext_palettes(&self) -> bool {
        self.field(Field::ObjExtPalettes) != 0
    }

    /// Enable or disable background and sprite extended palettes. The
    /// palettes themselves live in banks routed with the VRAM router.
    pub fn set_ext_palettes(&mut self, bg: bool, obj: bool) -> &mut Self {
        self.overlay.set_flag(Field::BgExtPalettes as usize, bg);
        self.overlay.set_flag(Field::ObjExtPalettes as usize, obj);
        self
    }
}

impl DisplayConfig<Main> {
    pub fn main_field(&self, field: MainField) -> u32 {
        self.overlay.field(field)
    }

    pub fn set_main_field(
        &mut self,
        field: MainField,
        value: u32,
    ) -> Result<&mut Self, RangeError> {
        self.overlay.set_field(field, value)?;
        Ok(self)
    }

    pub fn set_bg0_3d(&mut self, on: bool) -> &mut Self {
        self.overlay.set_flag(MainField::Bg0Is3d as usize, on);
        self
    }

    /// VRAM bank shown in display mode 2.
    pub fn vram_block(&self) -> u32 {
        self.main_field(MainField::VramBlock)
    }

    /// Global tile base offset, in units of 64K (0-7).
    pub fn set_char_base(&mut self, blocks: u32) -> Result<&mut Self, RangeError> {
        self.set_main_field(MainField::CharBase, blocks)
    }

    /// Global map base offset, in units of 64K (0-7).
    pub fn set_screen_base(&mut self, blocks: u32) -> Result<&mut Self, RangeError> {
        self.set_main_field(MainField::ScreenBase, blocks)
    }
}

impl From<DisplayConfig<Sub>> for DisplayConfig<Main> {
    fn from(config: DisplayConfig<Sub>) -> Self {
        Self { overlay: config.overlay, engine: PhantomData }
    }
}
