mod clock;
pub mod error;
mod sequencer;
mod short_id;

pub use clock::Clock;
pub use error::Error;
pub use sequencer::{Sequencer, SequencerSettings};
pub use short_id::ShortId;
