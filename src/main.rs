use std::{fs::File, io};

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use zeroes::{logger, Harness, ZeroesOptions};

fn main() -> anyhow::Result<()> {
    let options = ZeroesOptions::parse();
    logger::init_logger(options.log_level, options.line_numbers);

    let harness = Harness::from_options(&options);
    let suite = harness
        .run(&mut io::stdout().lock())
        .context("Failed to write transcript")?;

    if let Some(path) = &options.json {
        let output = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        serde_json::to_writer_pretty(output, &suite)
            .with_context(|| format!("Failed to write report file: {}", path.display()))?;
        info!("wrote report to {}", path.display());
    }

    let failed = suite.failures().count();
    for failure in suite.failures() {
        warn!(
            "{:?} scenario for {} failed: {}",
            failure.scenario,
            failure.mover,
            failure.detail.as_deref().unwrap_or_default()
        );
    }
    if options.strict && failed > 0 {
        anyhow::bail!("{failed} scenario(s) failed");
    }

    Ok(())
}
