//! Synthetic input: random C1 potentials V(φ) on φ ∈ [0, 1], each stored
//! together with its slope dV/dφ.

use crate::c1::{c1_deriv, c1_potential};
use crate::error::{PlotError, Result};
use crate::linspace::linspace;
use crate::Table;
use clap::{value_t, App, Arg};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use super::{DEFAULT_INPUT, VERSION};

/// accepted peak heights, max V in [V_MAX_LOW, V_MAX_HIGH]
pub const V_MAX_LOW: f64 = 0.01;
pub const V_MAX_HIGH: f64 = 0.31622776601683794; // 10^-0.5
/// draws allowed per column before giving up
pub const MAX_TRIES: usize = 1_000_000;

/// Settings of one run of the generator
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOptions {
    pub output: PathBuf,
    pub columns: usize,
    pub rows: usize,
    pub seed: u64,
}

/// Counts the local maxima and minima of a sampled curve, end points included.
/// A point equal to a neighbour is neither.
pub fn count_local_extrema(ys: &[f64]) -> (usize, usize) {
    let n = ys.len();
    if n < 2 {
        return (0, 0);
    }
    let mut count_max = 0;
    let mut count_min = 0;
    for (i, &y) in ys.iter().enumerate() {
        let (is_max, is_min) = if i == 0 {
            (y > ys[1], y < ys[1])
        } else if i == n - 1 {
            (y > ys[i - 1], y < ys[i - 1])
        } else {
            let (prev, next) = (ys[i - 1], ys[i + 1]);
            (y > prev && y > next, y < prev && y < next)
        };
        if is_max {
            count_max += 1;
        } else if is_min {
            count_min += 1;
        }
    }
    (count_max, count_min)
}

/// true when the curve has a single barrier of acceptable height
fn accept(v: &[f64]) -> bool {
    let v_max = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(V_MAX_LOW..=V_MAX_HIGH).contains(&v_max) {
        return false;
    }
    let (count_max, count_min) = count_local_extrema(v);
    count_max <= 1 && count_min <= 2
}

/// Draws shape points until the potential passes the acceptance test.
/// Returns V and dV/dφ at every `phi`.
pub fn sample_potential<R: Rng>(rng: &mut R, phi: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if phi.len() < 2 {
        return Err(PlotError::TooFewPoints(phi.len()));
    }
    for _ in 0..MAX_TRIES {
        let mut ps: Vec<f64> = (0..4).map(|_| rng.gen::<f64>()).collect();
        ps.sort_by(|a, b| a.total_cmp(b));
        let (phi_1p, mut phi_0, mut phi_2, phi_1n) = (ps[0], ps[1], ps[2], ps[3]);
        if rng.gen_bool(0.5) {
            std::mem::swap(&mut phi_0, &mut phi_2);
        }
        let f = c1_potential(phi_0, phi_1n, phi_1p, phi_2);
        let v: Vec<f64> = phi.iter().map(|&p| f(p)).collect();
        if !accept(&v) {
            continue;
        }
        let df = c1_deriv(phi_0, phi_1n, phi_1p, phi_2);
        let w = phi.iter().map(|&p| df(p)).collect();
        return Ok((v, w));
    }
    Err(PlotError::SamplingExhausted { tries: MAX_TRIES })
}

/// `columns` potentials named v0, v1, ..., each sampled at `rows` points of
/// [0, 1]; a column holds V followed by dV/dφ, so it has 2 * rows values.
/// The same seed gives the same table.
pub fn sample_table(columns: usize, rows: usize, seed: u64) -> Result<Table> {
    let phi = linspace(0., 1., rows);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = Table::new();
    for i in 0..columns {
        let (mut v, w) = sample_potential(&mut rng, &phi)?;
        v.extend(w);
        table.push(format!("v{}", i), v);
    }
    debug!("sampled {} potentials with seed {}", columns, seed);
    Ok(table)
}

fn cli_app() -> App<'static, 'static> {
    let arg_parquetout = Arg::with_name("output_parquetfile")
        .help("name of the parquet file to write")
        .short("o")
        .long("parquet")
        .takes_value(true)
        .default_value(DEFAULT_INPUT);
    let arg_columns = Arg::with_name("columns")
        .help("number of potentials")
        .short("c")
        .long("columns")
        .takes_value(true)
        .default_value("10000");
    let arg_rows = Arg::with_name("rows")
        .help("number of points per potential, the file holds twice as many with the slope")
        .short("n")
        .long("rows")
        .takes_value(true)
        .default_value("100");
    let arg_seed = Arg::with_name("seed")
        .help("seed of the random generator")
        .long("seed")
        .takes_value(true)
        .default_value("0");
    App::new("Pq_sample")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to write random C1 potentials to a parquet file")
        .arg(arg_parquetout)
        .arg(arg_columns)
        .arg(arg_rows)
        .arg(arg_seed)
}

fn options_from(m: &clap::ArgMatches) -> std::result::Result<SampleOptions, clap::Error> {
    let output = PathBuf::from(m.value_of("output_parquetfile").unwrap_or(DEFAULT_INPUT));
    let columns = value_t!(m, "columns", usize)?;
    let rows = value_t!(m, "rows", usize)?;
    let seed = value_t!(m, "seed", u64)?;
    if rows < 2 {
        return Err(clap::Error::with_description(
            "rows must be at least 2",
            clap::ErrorKind::InvalidValue,
        ));
    }
    Ok(SampleOptions {
        output,
        columns,
        rows,
        seed,
    })
}

/// Takes the CLI arguments of the sample generator.
pub fn parse_cli() -> SampleOptions {
    let matches = cli_app().get_matches();
    options_from(&matches).unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<SampleOptions, clap::Error> {
        let m = cli_app().get_matches_from_safe(args.iter().copied())?;
        options_from(&m)
    }

    #[test]
    fn test_count_local_extrema() {
        assert_eq!(count_local_extrema(&[0., 1., 0.]), (1, 2));
        assert_eq!(count_local_extrema(&[0., 1., 2., 3.]), (1, 1));
        assert_eq!(count_local_extrema(&[1., 0., 1., 0., 1.]), (3, 2));
        // plateaus count as neither
        assert_eq!(count_local_extrema(&[0., 1., 1., 0.]), (0, 2));
        assert_eq!(count_local_extrema(&[2., 2.]), (0, 0));
        assert_eq!(count_local_extrema(&[5.]), (0, 0));
    }

    #[test]
    fn test_accepted_potentials_have_one_barrier() {
        let phi = linspace(0., 1., 100);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (v, w) = sample_potential(&mut rng, &phi).unwrap();
            assert_eq!(v.len(), 100);
            assert_eq!(w.len(), 100);
            let v_max = v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(v_max >= V_MAX_LOW && v_max <= V_MAX_HIGH, "v_max {}", v_max);
            let (count_max, count_min) = count_local_extrema(&v);
            assert!(count_max <= 1 && count_min <= 2);
            assert!(v[0].abs() < 1e-12);
            assert!((v[99] + 1.).abs() < 1e-4);
        }
    }

    #[test]
    fn test_too_few_points() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample_potential(&mut rng, &[0.]),
            Err(PlotError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_sample_table_layout() {
        let table = sample_table(3, 50, 1).unwrap();
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.n_rows(), 100);
        assert_eq!(table.columns()[2].name, "v2");
        assert!(table.columns().iter().all(|c| c.values.len() == 100));
        // V ends at -1 with a flat slope
        let c = &table.columns()[0].values;
        assert!((c[49] + 1.).abs() < 1e-4);
        assert!(c[50].abs() < 1e-12);
        assert!(c[99].abs() < 1e-4);
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(sample_table(2, 20, 42).unwrap(), sample_table(2, 20, 42).unwrap());
        assert_ne!(sample_table(2, 20, 42).unwrap(), sample_table(2, 20, 43).unwrap());
    }

    #[test]
    fn test_cli() {
        let opts = parse(&["pq_sample"]).unwrap();
        assert_eq!(opts.output, PathBuf::from("c1.parquet"));
        assert_eq!((opts.columns, opts.rows, opts.seed), (10000, 100, 0));

        let opts = parse(&["pq_sample", "-c", "4", "-n", "30", "--seed", "9"]).unwrap();
        assert_eq!((opts.columns, opts.rows, opts.seed), (4, 30, 9));

        assert!(parse(&["pq_sample", "--rows", "1"]).is_err());
        assert!(parse(&["pq_sample", "--seed", "-3"]).is_err());
    }
}
