use anyhow::Context;
use lot_pricing::cleaning::run_cleaning_stage;
use lot_pricing::{init_tracing, PipelineConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PipelineConfig::default();
    let outcome = run_cleaning_stage(&config).context("cleaning stage failed")?;

    println!(
        "✅ {} listings exported to '{}' ({} without area in '{}')",
        outcome.listings.len(),
        config.cleaned_path().display(),
        outcome.unresolved_ids.len(),
        config.unresolved_path().display()
    );

    Ok(())
}
