use anyhow::Context;
use pq_plot::plot::parse_cli;
use pq_plot::{plot_table, Table};

fn main() -> anyhow::Result<()> {
    let (opts, verbose) = parse_cli();
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::info!(
        "read data from {} and plot to {}",
        opts.input.display(),
        opts.output.display()
    );
    let table = Table::from_parquet(&opts.input)
        .with_context(|| format!("loading {}", opts.input.display()))?;
    let summary = plot_table(&table, &opts.output, &opts)
        .with_context(|| format!("plotting to {}", opts.output.display()))?;
    log::info!(
        "{} lines of {} points, {}x{} px",
        summary.lines,
        summary.points,
        summary.width,
        summary.height
    );
    Ok(())
}
