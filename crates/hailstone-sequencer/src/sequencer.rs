use crate::{
    clock::{Clock, SystemClock},
    error::Error,
    ShortId,
};
use jiff::Timestamp;
use std::sync::Mutex;
use typed_builder::TypedBuilder;

const MAX_ELAPSED_MILLIS: u64 = (1_u64 << 41) - 1;
const MAX_NODE_ID: u16 = u8::MAX as u16;
const MAX_SEQUENCE: u16 = (1 << 14) - 1;

/// Configures a Sequencer instance.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct SequencerSettings {
    /// A unique node index in the range `[0, 255]`.
    ///
    /// Carried as a `u16` so that out-of-range inputs from configuration are
    /// representable and rejected with an error instead of truncated.
    #[builder]
    pub node_id: u16,
    /// Custom epoch used as the zero point for the 41-bit elapsed field.
    ///
    /// Sequencer math runs at whole-millisecond precision
    /// (`Timestamp::as_millisecond`); the 41-bit field spans roughly 69.7
    /// years from this instant.
    #[builder]
    pub start_epoch: Timestamp,
}

#[derive(Debug)]
struct GeneratorState {
    /// Tick the last ID was minted at, in unix milliseconds. May run ahead
    /// of the wall clock after a per-tick sequence overflow.
    current_tick: i64,
    /// Raw wall-clock reading of the most recent successful call.
    last_wall_clock: Timestamp,
    sequence: u16,
}

/// Snowflake-style generator of 63-bit time-ordered IDs.
///
/// One instance owns all generation state for one node identity; every
/// consumer in the process must share that instance, otherwise two
/// generators can mint the same `(elapsed, node, sequence)` triple.
#[derive(Debug)]
pub struct Sequencer<C: Clock> {
    start_millis: i64,
    node_id: u8,
    clock: C,
    state: Mutex<GeneratorState>,
}

impl Sequencer<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new(settings: SequencerSettings) -> Result<Self, Error> {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> Sequencer<C> {
    fn with_clock(settings: SequencerSettings, clock: C) -> Result<Self, Error> {
        if settings.node_id > MAX_NODE_ID {
            return Err(Error::InvalidNodeId {
                node_id: settings.node_id,
                max_node_id: MAX_NODE_ID,
            });
        }

        if settings.start_epoch == Timestamp::UNIX_EPOCH {
            return Err(Error::EpochZero);
        }

        let now = clock.now();
        if settings.start_epoch > now {
            return Err(Error::EpochAhead {
                epoch: settings.start_epoch,
                now,
            });
        }

        let start_millis = settings.start_epoch.as_millisecond();
        if (now.as_millisecond() - start_millis) as u64 > MAX_ELAPSED_MILLIS {
            return Err(Error::EpochExhausted);
        }

        Ok(Self {
            start_millis,
            node_id: settings.node_id as u8,
            clock,
            state: Mutex::new(GeneratorState {
                current_tick: start_millis,
                last_wall_clock: settings.start_epoch,
                sequence: 0,
            }),
        })
    }

    /// Generates the next unique ShortId.
    ///
    /// Correctness strategy:
    /// - if the per-millisecond sequence is exhausted, advance the tick
    ///   synthetically instead of waiting for the clock
    /// - if the clock moves backward, refuse with an error; generation
    ///   resumes once the clock has caught back up
    /// - once elapsed time no longer fits in 41 bits the instance is
    ///   permanently exhausted
    pub fn next_id(&self) -> Result<ShortId, Error> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;

        let now = self.clock.now();
        let now_millis = now.as_millisecond();

        if now_millis < state.last_wall_clock.as_millisecond() {
            // The OS clock regressed below our last reading. Minting here
            // could repeat a (tick, sequence) pair, so refuse and leave the
            // state untouched.
            return Err(Error::ClockMovedBackward {
                now,
                last: state.last_wall_clock,
            });
        }

        let (tick, sequence) = if now_millis > state.current_tick {
            // A new millisecond has begun.
            (now_millis, 0)
        } else if state.sequence < MAX_SEQUENCE {
            // Same tick as the last call (or the tick is running ahead of
            // the clock after an earlier overflow).
            (state.current_tick, state.sequence + 1)
        } else {
            // All 16384 sequence numbers of this tick are spent: move to
            // the next tick synthetically, without re-reading the clock.
            (state.current_tick + 1, 0)
        };

        // Checked before any state is committed, so a failed call leaves
        // the generator exactly as it was. Covers the synthetic advance
        // path as well as the wall-clock path.
        let elapsed = (tick - self.start_millis) as u64;
        if elapsed > MAX_ELAPSED_MILLIS {
            return Err(Error::EpochExhausted);
        }

        state.current_tick = tick;
        state.last_wall_clock = now;
        state.sequence = sequence;

        Ok(ShortId::new()
            .with_elapsed(elapsed)
            .with_node(self.node_id)
            .with_sequence(sequence))
    }
}
