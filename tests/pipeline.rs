use pq_plot::{plot_parquet, PlotError, PlotOptions, Table};
use std::path::Path;
use std::process::Command;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn options_in(dir: &Path) -> PlotOptions {
    PlotOptions {
        input: dir.join("c1.parquet"),
        output: dir.join("plot.png"),
        ..PlotOptions::default()
    }
}

fn png_size(path: &Path) -> (u32, u32) {
    let file = std::fs::File::open(path).unwrap();
    let reader = png::Decoder::new(file).read_info().unwrap();
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn two_columns_give_two_lines_and_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_in(dir.path());
    let mut table = Table::new();
    table.push("a", vec![0., 1., 2., 3., 4.]);
    table.push("b", vec![4., 3., 2., 1., 0.]);
    table.to_parquet(&opts.input).unwrap();

    let summary = plot_parquet(&opts).unwrap();
    assert_eq!(summary.columns, 2);
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.points, 5);

    let bytes = std::fs::read(&opts.output).unwrap();
    assert!(bytes.len() > PNG_SIGNATURE.len());
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    assert_eq!(png_size(&opts.output), (summary.width, summary.height));
    // cropped below the 3.3 x 2.5 in canvas
    assert!(summary.width <= 1980 && summary.height <= 1500);
}

#[test]
fn rerun_overwrites_the_previous_image() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PlotOptions {
        dpi: 100,
        ..options_in(dir.path())
    };
    pq_plot::sample::sample_table(3, 40, 1)
        .unwrap()
        .to_parquet(&opts.input)
        .unwrap();
    std::fs::write(&opts.output, b"stale").unwrap();

    let first = plot_parquet(&opts).unwrap();
    let bytes = std::fs::read(&opts.output).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);

    let second = plot_parquet(&opts).unwrap();
    assert_eq!((first.width, first.height), (second.width, second.height));
    assert_eq!(png_size(&opts.output), (second.width, second.height));
}

#[test]
fn single_point_column_renders() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PlotOptions {
        dpi: 100,
        ..options_in(dir.path())
    };
    let mut table = Table::new();
    table.push("only", vec![1.25]);
    table.to_parquet(&opts.input).unwrap();

    let summary = plot_parquet(&opts).unwrap();
    assert_eq!(summary.points, 1);
    assert_eq!(summary.lines, 1);
    assert!(opts.output.exists());
}

#[test]
fn missing_input_leaves_previous_image_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_in(dir.path());
    std::fs::write(&opts.output, b"previous").unwrap();

    match plot_parquet(&opts) {
        Err(PlotError::Open { path, .. }) => assert_eq!(path, opts.input),
        other => panic!("expected an Open error, got {:?}", other),
    }
    assert_eq!(std::fs::read(&opts.output).unwrap(), b"previous");
}

#[test]
fn unknown_style_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PlotOptions {
        styles: vec!["science".to_string(), "seaborn".to_string()],
        ..options_in(dir.path())
    };
    pq_plot::sample::sample_table(2, 10, 1)
        .unwrap()
        .to_parquet(&opts.input)
        .unwrap();

    assert!(matches!(plot_parquet(&opts), Err(PlotError::UnknownStyle(_))));
    assert!(!opts.output.exists());
}

#[test]
fn binary_fails_without_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_pq_plot"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("c1.parquet"), "stderr: {}", stderr);
    assert!(!dir.path().join("plot.png").exists());
}

#[test]
fn binaries_generate_and_plot() {
    let dir = tempfile::tempdir().unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_pq_sample"))
        .args(&["--columns", "4", "--rows", "30", "--seed", "5"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let table = Table::from_parquet(dir.path().join("c1.parquet")).unwrap();
    // potential then slope
    assert_eq!((table.n_columns(), table.n_rows()), (4, 60));

    let status = Command::new(env!("CARGO_BIN_EXE_pq_plot"))
        .args(&["--dpi", "150"])
        .current_dir(dir.path())
        .status()
        .unwrap();
    assert!(status.success());
    let bytes = std::fs::read(dir.path().join("plot.png")).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}
