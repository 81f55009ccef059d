use super::{BBox, PlotOptions, Scale, DEFAULT_ALPHA, DEFAULT_DPI, DEFAULT_INPUT, DEFAULT_OUTPUT};
use super::{DEFAULT_STYLES, DEFAULT_XLABEL, DEFAULT_YLABEL, MAX_DPI, VERSION};
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the parquet columns.
/// Without arguments the result equals `PlotOptions::default()`.
/// Returns the options and the verbose flag.
pub fn parse_cli() -> (PlotOptions, bool) {
    let matches = cli_app().get_matches();
    match options_from(&matches) {
        Ok(opts) => (opts, matches.is_present("verbose")),
        Err(e) => e.exit(),
    }
}

fn cli_app() -> App<'static, 'static> {
    let arg_parquetin = Arg::with_name("input_parquetfile")
        .help("name of the parquet file with the columns to plot")
        .short("f")
        .long("parquet")
        .takes_value(true)
        .default_value(DEFAULT_INPUT);
    let arg_pngout = Arg::with_name("output_pngfile")
        .help("name of the output png file, overwritten if it exists")
        .short("o")
        .long("pngfile")
        .takes_value(true)
        .default_value(DEFAULT_OUTPUT);
    let arg_dpi = Arg::with_name("dpi")
        .help("resolution of the png file, in dots per inch")
        .short("d")
        .long("dpi")
        .takes_value(true)
        .default_value("600");
    let arg_style = Arg::with_name("style")
        .help("comma separated style sheets, applied in order")
        .long_help("comma separated style sheets, applied in order; available: default, science, nature, ieee, grid")
        .short("s")
        .long("style")
        .takes_value(true)
        .default_value("science,nature");
    let arg_alpha = Arg::with_name("alpha")
        .help("opacity of the lines, between 0 and 1")
        .short("a")
        .long("alpha")
        .takes_value(true)
        .default_value("0.7");
    let arg_xlabel = Arg::with_name("xlabel")
        .help("label of the x-axis, $..$ marks TeX-style math")
        .long("xlabel")
        .takes_value(true)
        .default_value(DEFAULT_XLABEL);
    let arg_ylabel = Arg::with_name("ylabel")
        .help("label of the y-axis, $..$ marks TeX-style math")
        .long("ylabel")
        .takes_value(true)
        .default_value(DEFAULT_YLABEL);
    let arg_xscale = Arg::with_name("xscale")
        .help("scale of the x-axis")
        .long("xscale")
        .takes_value(true)
        .possible_values(&["linear", "log"])
        .default_value("linear");
    let arg_yscale = Arg::with_name("yscale")
        .help("scale of the y-axis")
        .long("yscale")
        .takes_value(true)
        .possible_values(&["linear", "log"])
        .default_value("linear");
    let arg_bbox = Arg::with_name("bbox")
        .help("tight crops the image to the drawn content, full keeps the whole figure")
        .long("bbox")
        .takes_value(true)
        .possible_values(&["tight", "full"])
        .default_value("tight");
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    App::new("Pq_plot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot every column of a parquet file over a unit x-axis")
        .arg(arg_parquetin)
        .arg(arg_pngout)
        .arg(arg_dpi)
        .arg(arg_style)
        .arg(arg_alpha)
        .arg(arg_xlabel)
        .arg(arg_ylabel)
        .arg(arg_xscale)
        .arg(arg_yscale)
        .arg(arg_bbox)
        .arg(arg_verbose)
}

fn options_from(m: &ArgMatches) -> Result<PlotOptions, clap::Error> {
    let mut opts = PlotOptions::default();
    if let Some(p) = m.value_of("input_parquetfile") {
        opts.input = PathBuf::from(p);
    }
    if let Some(p) = m.value_of("output_pngfile") {
        opts.output = PathBuf::from(p);
    }
    opts.dpi = parse_value(m, "dpi", DEFAULT_DPI)?;
    if opts.dpi == 0 {
        return Err(invalid("dpi must be positive"));
    }
    if opts.dpi > MAX_DPI {
        return Err(invalid(&format!("dpi must be at most {}", MAX_DPI)));
    }
    opts.bbox = parse_value(m, "bbox", BBox::Tight)?;
    opts.config.alpha = parse_value(m, "alpha", DEFAULT_ALPHA)?;
    if let Some(s) = m.value_of("style") {
        opts.styles = split_styles(s);
    }
    if opts.styles.is_empty() {
        opts.styles = DEFAULT_STYLES.iter().map(|s| s.to_string()).collect();
    }
    if let Some(l) = m.value_of("xlabel") {
        opts.config.xlabel = l.to_string();
    }
    if let Some(l) = m.value_of("ylabel") {
        opts.config.ylabel = l.to_string();
    }
    opts.config.xscale = parse_value(m, "xscale", Scale::Linear)?;
    opts.config.yscale = parse_value(m, "yscale", Scale::Linear)?;
    Ok(opts)
}

fn parse_value<T>(m: &ArgMatches, name: &str, default: T) -> Result<T, clap::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match m.value_of(name) {
        Some(v) => v
            .parse()
            .map_err(|e| invalid(&format!("invalid value '{}' for --{}: {}", v, name, e))),
        None => Ok(default),
    }
}

fn invalid(msg: &str) -> clap::Error {
    clap::Error::with_description(msg, clap::ErrorKind::InvalidValue)
}

/// "science, nature" -> ["science", "nature"]
pub fn split_styles(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<PlotOptions, clap::Error> {
        let m = cli_app().get_matches_from_safe(args.iter().copied())?;
        options_from(&m)
    }

    #[test]
    fn test_no_arguments_is_the_fixed_setup() {
        assert_eq!(parse(&["pq_plot"]).unwrap(), PlotOptions::default());
    }

    #[test]
    fn test_overrides() {
        let opts = parse(&[
            "pq_plot", "-f", "data.parquet", "-o", "out.png", "--dpi", "300", "-s", "ieee, grid",
            "--alpha", "1", "--yscale", "log", "--ylabel", "$E_0$",
        ])
        .unwrap();
        assert_eq!(opts.input, PathBuf::from("data.parquet"));
        assert_eq!(opts.output, PathBuf::from("out.png"));
        assert_eq!(opts.dpi, 300);
        assert_eq!(opts.styles, vec!["ieee", "grid"]);
        assert_eq!(opts.config.alpha, 1.);
        assert_eq!(opts.config.yscale, Scale::Log);
        assert_eq!(opts.config.xscale, Scale::Linear);
        assert_eq!(opts.config.ylabel, "$E_0$");
    }

    #[test]
    fn test_bad_values() {
        assert!(parse(&["pq_plot", "--dpi", "0"]).is_err());
        assert!(parse(&["pq_plot", "--dpi", "high"]).is_err());
        assert!(parse(&["pq_plot", "--xscale", "symlog"]).is_err());
        assert!(parse(&["pq_plot", "--bbox", "loose"]).is_err());
    }

    #[test]
    fn test_dpi_upper_bound() {
        assert_eq!(parse(&["pq_plot", "--dpi", "2400"]).unwrap().dpi, MAX_DPI);
        assert!(parse(&["pq_plot", "--dpi", "2401"]).is_err());
        assert!(parse(&["pq_plot", "--dpi", "100000"]).is_err());
    }

    #[test]
    fn test_full_bbox() {
        assert_eq!(parse(&["pq_plot", "--bbox", "full"]).unwrap().bbox, BBox::Full);
    }

    #[test]
    fn test_split_styles() {
        assert_eq!(split_styles("science,nature"), vec!["science", "nature"]);
        assert_eq!(split_styles(" grid ,, "), vec!["grid"]);
    }
}
