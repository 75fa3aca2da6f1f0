// atsprobe/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "pcsc")]
pub mod pcsc;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "pcsc")]
pub use pcsc::PcscTransport;
pub use traits::Transport;
