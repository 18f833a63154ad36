use anyhow::Context;
use chrono::Local;
use lot_pricing::cleaning::ensure_cleaned_listings;
use lot_pricing::model::{train, FeatureRow, ModelVariant};
use lot_pricing::report::render_report;
use lot_pricing::{init_tracing, ExampleLot, PipelineConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PipelineConfig::default();
    let listings = ensure_cleaned_listings(&config).context("could not load cleaned listings")?;

    let (model, report) = train(ModelVariant::Baseline, &listings)?;

    let example = ExampleLot::baseline();
    let prediction = model
        .predict(&FeatureRow::from_example(&example))
        .context("example lot cannot be priced by this model")?;

    let text = render_report(&report, &example, prediction, Local::now())
        .context("failed to render report")?;
    print!("{text}");
    Ok(())
}
