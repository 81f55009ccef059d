use log::{debug, info};
use std::path::{Path, PathBuf};
pub mod c1;
pub mod canvas;
pub mod error;
pub mod export;
pub mod linspace;
pub mod loader;
pub mod mathtext;
pub mod plot;
pub mod render;
pub mod sample;
pub mod style;

pub use error::{PlotError, Result};
pub use export::BBox;
pub use render::{Figure, PlotConfig, Scale};

pub const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

pub const DEFAULT_INPUT: &str = "c1.parquet";
pub const DEFAULT_OUTPUT: &str = "plot.png";
pub const DEFAULT_DPI: u32 = 600;
/// highest accepted resolution; keeps pixel offsets and buffer sizes in range
pub const MAX_DPI: u32 = 2400;
pub const DEFAULT_ALPHA: f64 = 0.7;
pub const DEFAULT_STYLES: [&str; 2] = ["science", "nature"];
pub const DEFAULT_XLABEL: &str = r"$\phi$";
pub const DEFAULT_YLABEL: &str = r"$V(\phi)$";

/// One named column of the input table
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// The main struct for the loaded data: named columns in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

/// Borrowed view of one column, as handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
}

impl Table {
    pub fn new() -> Table {
        Table {
            columns: Vec::new(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, name: S, values: Vec<f64>) {
        self.columns.push(Column {
            name: name.into(),
            values,
        });
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// length of the first column, which sets the length of the x-axis
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// one series per column, in column order;
    /// lengths are not checked here, the renderer does it
    pub fn series(&self) -> Vec<Series<'_>> {
        self.columns
            .iter()
            .map(|c| Series {
                name: &c.name,
                values: &c.values,
            })
            .collect()
    }

    /// evenly spaced x values over [0, 1], one per row of the first column
    pub fn unit_x_axis(&self) -> Vec<f64> {
        linspace::linspace(0., 1., self.n_rows())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        writeln!(f, "{}", names.join(","))?;
        for row in 0..self.n_rows() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .map(|c| c.values.get(row).map_or_else(String::new, |v| v.to_string()))
                .collect();
            writeln!(f, "{}", cells.join(","))?;
        }
        Ok(())
    }
}

/// Everything one run of the plotter needs; the default is the fixed setup:
/// c1.parquet to plot.png at 600 dpi with the science and nature styles.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub styles: Vec<String>,
    pub dpi: u32,
    pub bbox: BBox,
    pub config: PlotConfig,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
            dpi: DEFAULT_DPI,
            bbox: BBox::Tight,
            config: PlotConfig::default(),
        }
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSummary {
    pub columns: usize,
    pub points: usize,
    pub lines: usize,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

/// load the table, draw every column over the unit x-axis and save the image
pub fn plot_parquet(opts: &PlotOptions) -> Result<PlotSummary> {
    let table = Table::from_parquet(&opts.input)?;
    info!(
        "loaded {} columns of {} rows from {}",
        table.n_columns(),
        table.n_rows(),
        opts.input.display()
    );
    plot_table(&table, &opts.output, opts)
}

/// draw an in-memory table and save it to `output`
pub fn plot_table(table: &Table, output: &Path, opts: &PlotOptions) -> Result<PlotSummary> {
    if table.is_empty() {
        return Err(PlotError::NoColumns);
    }
    let series = table.series();
    let x = table.unit_x_axis();
    debug!("x-axis of {} points over [0, 1]", x.len());
    let figure = render::render_styled(&x, &series, &opts.config, opts.styles.as_slice())?;
    let saved = figure.savefig(output, opts.dpi, opts.bbox)?;
    info!(
        "saved {} lines to {} ({}x{} px, {} dpi)",
        figure.lines().len(),
        output.display(),
        saved.width,
        saved.height,
        opts.dpi
    );
    Ok(PlotSummary {
        columns: table.n_columns(),
        points: x.len(),
        lines: figure.lines().len(),
        width: saved.width,
        height: saved.height,
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_columns() -> Table {
        let mut table = Table::new();
        table.push("a", vec![0., 1., 2., 3., 4.]);
        table.push("b", vec![4., 3., 2., 1., 0.]);
        table
    }

    #[test]
    fn test_series_keep_column_order() {
        let table = two_columns();
        let series = table.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "a");
        assert_eq!(series[1].name, "b");
        assert_eq!(series[1].values, &[4., 3., 2., 1., 0.]);
    }

    #[test]
    fn test_unit_x_axis_follows_first_column() {
        let table = two_columns();
        assert_eq!(table.unit_x_axis(), vec![0., 0.25, 0.5, 0.75, 1.]);

        let mut single = Table::new();
        single.push("only", vec![3.]);
        assert_eq!(single.unit_x_axis(), vec![0.]);

        assert!(Table::new().unit_x_axis().is_empty());
    }

    #[test]
    fn test_display() {
        let table = two_columns();
        let text = table.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("a,b"));
        assert_eq!(lines.next(), Some("0,4"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_default_options() {
        let opts = PlotOptions::default();
        assert_eq!(opts.input, PathBuf::from("c1.parquet"));
        assert_eq!(opts.output, PathBuf::from("plot.png"));
        assert_eq!(opts.dpi, 600);
        assert_eq!(opts.styles, vec!["science", "nature"]);
        assert_eq!(opts.config.alpha, 0.7);
        assert_eq!(opts.bbox, BBox::Tight);
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plot.png");
        let table = Table::new();
        assert!(table.is_empty());
        assert!(matches!(
            plot_table(&table, &output, &PlotOptions::default()),
            Err(PlotError::NoColumns)
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_full_bbox_keeps_the_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("plot.png");
        let opts = PlotOptions {
            dpi: 100,
            ..PlotOptions::default()
        };
        let full = plot_table(
            &two_columns(),
            &output,
            &PlotOptions {
                bbox: BBox::Full,
                ..opts.clone()
            },
        )
        .unwrap();
        // nature figure size, 3.3 x 2.5 in
        assert_eq!((full.width, full.height), (330, 250));
        let tight = plot_table(&two_columns(), &output, &opts).unwrap();
        assert!(tight.width < full.width && tight.height < full.height);
    }
}
