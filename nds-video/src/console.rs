use core::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::{
    bus::{Mmio, RegisterBus},
    display::DisplayEngine,
    engine::{Main, Sub},
    vram::VramRouter,
};

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Write handles for both display engines and the VRAM bank controls.
///
/// ```compile_fail
/// # use nds_video::{Video, DisplayConfig, Main};
/// # #[derive(Clone)] struct Null;
/// # impl nds_video::bus::RegisterBus for Null {
/// #     fn write32(&mut self, _: usize, _: u32) {}
/// #     fn write8(&mut self, _: usize, _: u8) {}
/// # }
/// let mut video = Video::new(Null);
/// // A main engine configuration cannot be committed to the sub engine.
/// video.sub.commit(&DisplayConfig::<Main>::new());
/// ```
pub struct Video<B = Mmio> {
    pub main: DisplayEngine<Main, B>,
    pub sub: DisplayEngine<Sub, B>,
    pub vram: VramRouter<B>,
}

impl Video<Mmio> {
    /// The hardware handles, once. Later calls return `None`.
    ///
    /// The ARM9 is single-core and nothing here runs from interrupts, so a
    /// plain load and store is enough.
    pub fn take() -> Option<Self> {
        if TAKEN.load(Ordering::Relaxed) {
            return None;
        }
        TAKEN.store(true, Ordering::Relaxed);
        Some(unsafe { Self::steal() })
    }

    /// # Safety
    ///
    /// Creates another set of handles regardless of [`take`](Self::take).
    /// Writes through two sets can interleave.
    pub unsafe fn steal() -> Self {
        Self::new(unsafe { Mmio::new() })
    }
}

impl<B: RegisterBus + Clone> Video<B> {
    pub fn new(bus: B) -> Self {
        Self {
            main: DisplayEngine::new(bus.clone()),
            sub: DisplayEngine::new(bus.clone()),
            vram: VramRouter::new(bus),
        }
    }

    /// Turn both displays off and disable every bank.
    pub fn reset(&mut self) {
        debug!(target: "dispcnt", "reset video");
        self.main.off();
        self.sub.off();
        self.vram.disable_all();
    }
}
