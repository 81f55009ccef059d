//! Builds the in-memory [`Figure`]: one line per series against a shared
//! x-axis, coloured from the active style, with axis limits already fixed.
//! Nothing is drawn here; pixels only exist once the figure is saved.

use crate::error::{PlotError, Result};
use crate::mathtext;
use crate::style::{self, Style};
use crate::{Series, DEFAULT_ALPHA, DEFAULT_XLABEL, DEFAULT_YLABEL};
use log::{debug, info};
use plotters::style::RGBColor;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl FromStr for Scale {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Scale> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Scale::Linear),
            "log" => Ok(Scale::Log),
            other => Err(PlotError::UnknownScale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scale::Linear => write!(f, "linear"),
            Scale::Log => write!(f, "log"),
        }
    }
}

/// Display options for the axes
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub xlabel: String,
    pub ylabel: String,
    pub xscale: Scale,
    pub yscale: Scale,
    /// opacity of every line
    pub alpha: f64,
    /// limits hug the data instead of adding the style margins
    pub tight: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            xlabel: DEFAULT_XLABEL.to_string(),
            ylabel: DEFAULT_YLABEL.to_string(),
            xscale: Scale::Linear,
            yscale: Scale::Linear,
            alpha: DEFAULT_ALPHA,
            tight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: RGBColor,
    pub alpha: f64,
}

impl Line {
    /// Runs of consecutive points that can be drawn, split wherever a value
    /// is not finite (or not positive on a log axis).
    pub fn segments(&self, xscale: Scale, yscale: Scale) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if drawable(x, xscale) && drawable(y, yscale) {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

fn drawable(v: f64, scale: Scale) -> bool {
    v.is_finite() && (scale == Scale::Linear || v > 0.)
}

/// A figure ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    style: Style,
    xlabel: String,
    ylabel: String,
    xscale: Scale,
    yscale: Scale,
    xlim: (f64, f64),
    ylim: (f64, f64),
    lines: Vec<Line>,
}

impl Figure {
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    pub fn scales(&self) -> (Scale, Scale) {
        (self.xscale, self.yscale)
    }

    pub fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    pub fn ylim(&self) -> (f64, f64) {
        self.ylim
    }
}

/// Renders the series with the named style sheets active for the call only.
pub fn render_styled<S: AsRef<str>>(
    x: &[f64],
    series: &[Series<'_>],
    config: &PlotConfig,
    styles: &[S],
) -> Result<Figure> {
    let _ctx = style::context(styles)?;
    render(x, series, config)
}

/// Renders the series with the active style.
///
/// Every series must have the length of `x`.
pub fn render(x: &[f64], series: &[Series<'_>], config: &PlotConfig) -> Result<Figure> {
    if series.is_empty() {
        return Err(PlotError::NoColumns);
    }
    if !(0. ..=1.).contains(&config.alpha) {
        return Err(PlotError::InvalidAlpha(config.alpha));
    }
    for s in series {
        if s.values.len() != x.len() {
            return Err(PlotError::LengthMismatch {
                column: s.name.to_string(),
                expected: x.len(),
                found: s.values.len(),
            });
        }
    }

    let style = style::current();
    let lines: Vec<Line> = series
        .iter()
        .enumerate()
        .map(|(i, s)| Line {
            label: s.name.to_string(),
            x: x.to_vec(),
            y: s.values.to_vec(),
            color: style.line_color(i),
            alpha: config.alpha,
        })
        .collect();

    let margins = if config.tight { 0. } else { style.margins };
    let xlim = axis_limits(x.iter().copied(), config.xscale, margins, "x")?;
    let ylim = axis_limits(
        lines.iter().flat_map(|l| l.y.iter().copied()),
        config.yscale,
        margins,
        "y",
    )?;
    debug!("limits x {:?}, y {:?}", xlim, ylim);
    info!("rendered {} lines of {} points", lines.len(), x.len());

    Ok(Figure {
        xlabel: mathtext::to_unicode(&config.xlabel),
        ylabel: mathtext::to_unicode(&config.ylabel),
        xscale: config.xscale,
        yscale: config.yscale,
        xlim,
        ylim,
        lines,
        style,
    })
}

/// min and max of the drawable values, None if there are none
pub fn data_bounds<I: IntoIterator<Item = f64>>(values: I, scale: Scale) -> Option<(f64, f64)> {
    let mut iter = values.into_iter().filter(|&v| drawable(v, scale));
    let first = iter.next()?;
    let (mut min, mut max) = (first, first);
    for v in iter {
        if v > max {
            max = v
        }
        if v < min {
            min = v
        }
    }
    Some((min, max))
}

fn axis_limits<I: IntoIterator<Item = f64>>(
    values: I,
    scale: Scale,
    margins: f64,
    axis: &'static str,
) -> Result<(f64, f64)> {
    let (lo, hi) = match (data_bounds(values, scale), scale) {
        (Some(b), _) => b,
        (None, Scale::Linear) => (0., 1.),
        (None, Scale::Log) => return Err(PlotError::LogScaleDomain { axis }),
    };
    let (lo, hi) = match scale {
        Scale::Linear => {
            let span = hi - lo;
            nonsingular(lo - margins * span, hi + margins * span)
        }
        Scale::Log => {
            let (llo, lhi) = (lo.log10(), hi.log10());
            let span = lhi - llo;
            let (llo, lhi) = nonsingular(llo - margins * span, lhi + margins * span);
            (10f64.powf(llo), 10f64.powf(lhi))
        }
    };
    Ok((lo, hi))
}

/// widens a range too small to draw an axis over
fn nonsingular(lo: f64, hi: f64) -> (f64, f64) {
    let tiny = 1e-12 * lo.abs().max(hi.abs()).max(1.);
    if hi - lo > tiny {
        return (lo, hi);
    }
    let half = if lo == 0. { 0.05 } else { 0.05 * lo.abs() };
    (lo - half, hi + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: [f64; 5] = [0., 1., 2., 3., 4.];
    const B: [f64; 5] = [4., 3., 2., 1., 0.];
    const X: [f64; 5] = [0., 0.25, 0.5, 0.75, 1.];

    fn series<'a>() -> Vec<Series<'a>> {
        vec![
            Series {
                name: "a",
                values: &A,
            },
            Series {
                name: "b",
                values: &B,
            },
        ]
    }

    #[test]
    fn test_one_line_per_series_in_order() {
        let fig = render_styled(&X, &series(), &PlotConfig::default(), &["science", "nature"]).unwrap();
        let lines = fig.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "a");
        assert_eq!(lines[1].label, "b");
        assert_eq!(lines[1].y, B.to_vec());
        assert_eq!(lines[0].x, X.to_vec());
        assert!(lines.iter().all(|l| l.alpha == 0.7));
        assert_eq!(lines[0].color, RGBColor(0x0c, 0x5d, 0xa5));
        assert_eq!(lines[1].color, RGBColor(0x00, 0xb9, 0x45));
        assert_eq!(fig.xlabel(), "φ");
        assert_eq!(fig.ylabel(), "V(φ)");
    }

    #[test]
    fn test_style_is_captured_and_released() {
        let before = style::current();
        let fig = render_styled(&X, &series(), &PlotConfig::default(), &["science", "nature"]).unwrap();
        assert_eq!(fig.style().figsize, (3.3, 2.5));
        assert_eq!(style::current(), before);
    }

    #[test]
    fn test_tight_limits() {
        let fig = render(&X, &series(), &PlotConfig::default()).unwrap();
        assert_eq!(fig.xlim(), (0., 1.));
        assert_eq!(fig.ylim(), (0., 4.));

        let loose = PlotConfig {
            tight: false,
            ..PlotConfig::default()
        };
        let fig = render(&X, &series(), &loose).unwrap();
        assert_relative_eq!(fig.xlim().0, -0.05);
        assert_relative_eq!(fig.ylim().1, 4.2);
    }

    #[test]
    fn test_single_point_is_widened() {
        let single = [2.5];
        let s = [Series {
            name: "v0",
            values: &single,
        }];
        let fig = render(&[0.], &s, &PlotConfig::default()).unwrap();
        let (xlo, xhi) = fig.xlim();
        assert!(xlo < 0. && xhi > 0.);
        let (ylo, yhi) = fig.ylim();
        assert!(ylo < 2.5 && yhi > 2.5);
        assert_eq!(fig.lines().len(), 1);
    }

    #[test]
    fn test_length_mismatch() {
        let short = [1., 2.];
        let s = [
            Series {
                name: "a",
                values: &A,
            },
            Series {
                name: "short",
                values: &short,
            },
        ];
        match render(&X, &s, &PlotConfig::default()) {
            Err(PlotError::LengthMismatch {
                column,
                expected,
                found,
            }) => {
                assert_eq!(column, "short");
                assert_eq!(expected, 5);
                assert_eq!(found, 2);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_no_columns_and_bad_alpha() {
        assert!(matches!(
            render(&X, &[], &PlotConfig::default()),
            Err(PlotError::NoColumns)
        ));
        let config = PlotConfig {
            alpha: 1.5,
            ..PlotConfig::default()
        };
        assert!(matches!(
            render(&X, &series(), &config),
            Err(PlotError::InvalidAlpha(_))
        ));
    }

    #[test]
    fn test_log_scale() {
        let config = PlotConfig {
            yscale: Scale::Log,
            ..PlotConfig::default()
        };
        // zeros are left out of a log axis
        let fig = render(&X, &series(), &config).unwrap();
        assert_relative_eq!(fig.ylim().0, 1.);
        assert_relative_eq!(fig.ylim().1, 4.);

        let zeros = [0., 0., 0., 0., 0.];
        let s = [Series {
            name: "z",
            values: &zeros,
        }];
        assert!(matches!(
            render(&X, &s, &config),
            Err(PlotError::LogScaleDomain { axis: "y" })
        ));
    }

    #[test]
    fn test_segments_split_on_gaps() {
        let line = Line {
            label: "g".to_string(),
            x: X.to_vec(),
            y: vec![1., f64::NAN, 2., 3., f64::INFINITY],
            color: RGBColor(0, 0, 0),
            alpha: 1.,
        };
        let segments = line.segments(Scale::Linear, Scale::Linear);
        assert_eq!(segments, vec![vec![(0., 1.)], vec![(0.5, 2.), (0.75, 3.)]]);
    }

    #[test]
    fn test_scale_from_str() {
        assert_eq!("linear".parse::<Scale>().unwrap(), Scale::Linear);
        assert_eq!(" LOG ".parse::<Scale>().unwrap(), Scale::Log);
        assert!("symlog".parse::<Scale>().is_err());
    }
}
