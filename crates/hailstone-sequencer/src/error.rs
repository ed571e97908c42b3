use jiff::Timestamp;
use thiserror::Error;

/// Errors returned by Sequencer construction and ID generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid node id {node_id}; expected 0..={max_node_id}")]
    InvalidNodeId { node_id: u16, max_node_id: u16 },
    #[error("start epoch is the zero timestamp; pick a real reference instant")]
    EpochZero,
    #[error("start epoch is ahead of current clock time: epoch={epoch}, now={now}")]
    EpochAhead { epoch: Timestamp, now: Timestamp },
    #[error("elapsed time since the start epoch no longer fits in 41 bits")]
    EpochExhausted,
    #[error("clock moved backward: now={now}, last observed={last}")]
    ClockMovedBackward { now: Timestamp, last: Timestamp },
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}
