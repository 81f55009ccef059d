use anyhow::Context;
use pq_plot::sample::{parse_cli, sample_table};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = parse_cli();
    let table = sample_table(opts.columns, opts.rows, opts.seed).context("sampling potentials")?;
    table
        .to_parquet(&opts.output)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    log::info!(
        "wrote {} potentials of {} points to {}",
        opts.columns,
        opts.rows,
        opts.output.display()
    );
    Ok(())
}
