mod cli;

use crate::cli::CLI;
use clap::Parser;
use hailstone_sequencer::{Sequencer, SequencerSettings};
use hailstone_token::ShortToken;
use std::io::Write;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        node_id = config.node_id,
        start_epoch = %config.start_epoch,
        count = config.count,
        "minting ids"
    );

    let settings = SequencerSettings::builder()
        .node_id(config.node_id)
        .start_epoch(config.start_epoch)
        .build();
    // The one generator instance for this process; everything below only
    // borrows it.
    let sequencer = Sequencer::new(settings)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..config.count {
        let id = sequencer.next_id()?;
        if config.raw {
            writeln!(out, "{}", id.as_u64())?;
        } else {
            writeln!(out, "{}", ShortToken::encode(id))?;
        }
    }

    Ok(())
}
