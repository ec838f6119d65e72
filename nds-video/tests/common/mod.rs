//! Common test utilities and mock implementations

pub mod mock_bus;

pub use mock_bus::{MockBus, Operation};

use nds_video::Video;

/// A `Video` wired to a fresh mock bus, plus a handle to inspect it.
pub fn create_mock_video() -> (Video<MockBus>, MockBus) {
    let bus = MockBus::new();
    (Video::new(bus.clone()), bus)
}
