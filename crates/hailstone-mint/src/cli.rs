use clap::Parser;
use jiff::Timestamp;

pub const NODE_ID_ENV: &str = "HAILSTONE_MINT_NODE_ID";
pub const START_EPOCH_ENV: &str = "HAILSTONE_MINT_START_EPOCH";
pub const COUNT_ENV: &str = "HAILSTONE_MINT_COUNT";

pub const DEFAULT_NODE_ID: &str = "1";
pub const DEFAULT_COUNT: &str = "1";

#[derive(Debug, Parser)]
#[command(name = "mint")]
pub struct CLI {
    /// Node index of this generator within the fleet (0-255).
    #[arg(long, env = NODE_ID_ENV, default_value = DEFAULT_NODE_ID)]
    pub node_id: u16,

    /// Reference zero-point for the id timestamps, RFC 3339
    /// (e.g. 2024-01-01T00:00:00Z).
    #[arg(long, env = START_EPOCH_ENV)]
    pub start_epoch: Timestamp,

    /// How many ids to mint.
    #[arg(long, env = COUNT_ENV, default_value = DEFAULT_COUNT)]
    pub count: u64,

    /// Print the packed decimal value instead of the token.
    #[arg(long)]
    pub raw: bool,
}
