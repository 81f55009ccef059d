//! Rasterises a [`Figure`] into an RGB pixel buffer with plotters.

use crate::error::{PlotError, Result};
use crate::render::{Figure, Scale};
use crate::style::{Style, TickDirection, POINTS_PER_INCH};
use crate::MAX_DPI;
use log::debug;
use plotters::coord::ranged1d::{AsRangedCoord, Ranged, ValueFormatter};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontStyle;

/// An RGB image, 3 bytes per pixel, row major
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub background: RGBColor,
}

impl Raster {
    /// byte offset of pixel (x, y)
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

fn draw_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Draws the figure at `dpi`; the canvas is the style figure size in inches times dpi.
pub fn rasterize(fig: &Figure, dpi: u32) -> Result<Raster> {
    if dpi == 0 || dpi > MAX_DPI {
        return Err(PlotError::InvalidDpi(dpi));
    }
    let style = fig.style();
    let width = (style.figsize.0 * dpi as f64).round().max(1.) as u32;
    let height = (style.figsize.1 * dpi as f64).round().max(1.) as u32;
    debug!("rasterizing {}x{} px at {} dpi", width, height, dpi);

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&style.background).map_err(draw_err)?;
        let (xlo, xhi) = fig.xlim();
        let (ylo, yhi) = fig.ylim();
        match fig.scales() {
            (Scale::Linear, Scale::Linear) => draw_axes(&root, fig, dpi, xlo..xhi, ylo..yhi)?,
            (Scale::Linear, Scale::Log) => {
                draw_axes(&root, fig, dpi, xlo..xhi, (ylo..yhi).log_scale())?
            }
            (Scale::Log, Scale::Linear) => {
                draw_axes(&root, fig, dpi, (xlo..xhi).log_scale(), ylo..yhi)?
            }
            (Scale::Log, Scale::Log) => draw_axes(
                &root,
                fig,
                dpi,
                (xlo..xhi).log_scale(),
                (ylo..yhi).log_scale(),
            )?,
        }
        root.present().map_err(draw_err)?;
    }
    Ok(Raster {
        width,
        height,
        pixels,
        background: style.background,
    })
}

/// points to pixels at the given resolution, at least one pixel
fn px(points: f64, dpi: u32) -> u32 {
    (points * dpi as f64 / POINTS_PER_INCH).round().max(1.) as u32
}

fn draw_axes<X, Y>(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    fig: &Figure,
    dpi: u32,
    x_spec: X,
    y_spec: Y,
) -> Result<()>
where
    X: AsRangedCoord<Value = f64>,
    Y: AsRangedCoord<Value = f64>,
    X::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y::CoordDescType: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let style: &Style = fig.style();
    let label_px = px(style.label_size, dpi);
    let tick_label_px = px(style.tick_label_size, dpi);
    let tick_px = px(style.tick_size, dpi) as i32;
    let axes_px = px(style.axes_line_width, dpi);

    let mut chart = ChartBuilder::on(root)
        .margin(label_px)
        .x_label_area_size(tick_label_px * 2 + label_px * 2)
        .y_label_area_size(tick_label_px * 4 + label_px * 2)
        .build_cartesian_2d(x_spec, y_spec)
        .map_err(draw_err)?;

    let tick_font = FontDesc::new(style.font.family(), tick_label_px as f64, FontStyle::Normal)
        .color(&style.foreground);
    let label_font = FontDesc::new(style.font.family(), label_px as f64, FontStyle::Normal)
        .color(&style.foreground);
    let tick_mark = match style.tick_direction {
        TickDirection::In => -tick_px,
        TickDirection::Out => tick_px,
    };
    let tick_fmt = |v: &f64| format_tick(*v);

    let mut mesh = chart.configure_mesh();
    mesh.axis_style(style.foreground.stroke_width(axes_px))
        .set_all_tick_mark_size(tick_mark)
        .label_style(tick_font)
        .axis_desc_style(label_font)
        .x_desc(fig.xlabel())
        .y_desc(fig.ylabel())
        .x_labels(6)
        .y_labels(6)
        .x_label_formatter(&tick_fmt)
        .y_label_formatter(&tick_fmt);
    if style.grid {
        mesh.bold_line_style(style.grid_color.stroke_width(px(style.grid_line_width, dpi)))
            .light_line_style(&TRANSPARENT);
    } else {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(draw_err)?;

    for line in fig.lines() {
        let (xscale, yscale) = fig.scales();
        let line_style = line.color.mix(line.alpha).stroke_width(px(style.line_width, dpi));
        for segment in line.segments(xscale, yscale) {
            chart
                .draw_series(LineSeries::new(segment, line_style))
                .map_err(draw_err)?;
        }
    }

    if style.mirror_ticks {
        // top and right spines
        let (xlo, xhi) = fig.xlim();
        let (ylo, yhi) = fig.ylim();
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(xlo, yhi), (xhi, yhi), (xhi, ylo)],
                style.foreground.stroke_width(axes_px),
            )))
            .map_err(draw_err)?;

        // tick marks at the same key points as the bottom and left axes
        let inward = match style.tick_direction {
            TickDirection::In => tick_px,
            TickDirection::Out => -tick_px,
        };
        let spec = chart.as_coord_spec();
        let mut marks: Vec<Vec<(i32, i32)>> = Vec::new();
        for x in spec.x_spec().key_points(6usize) {
            let (bx, by) = chart.backend_coord(&(x, yhi));
            marks.push(vec![(bx, by), (bx, by + inward)]);
        }
        for y in spec.y_spec().key_points(6usize) {
            let (bx, by) = chart.backend_coord(&(xhi, y));
            marks.push(vec![(bx, by), (bx - inward, by)]);
        }
        for mark in marks {
            root.draw(&PathElement::new(mark, style.foreground.stroke_width(axes_px)))
                .map_err(draw_err)?;
        }
    }
    Ok(())
}

/// short tick label: trailing zeros dropped, scientific notation for very
/// large or very small magnitudes
pub fn format_tick(v: f64) -> String {
    if v == 0. {
        return "0".to_string();
    }
    let a = v.abs();
    if !(1e-3..1e4).contains(&a) {
        let s = format!("{:.1e}", v);
        return s.replace(".0e", "e");
    }
    let s = format!("{:.3}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tight_crop;
    use crate::render::{render_styled, PlotConfig};
    use crate::Table;

    fn two_lines() -> Figure {
        let mut table = Table::new();
        table.push("a", vec![0., 1., 2., 3., 4.]);
        table.push("b", vec![4., 3., 2., 1., 0.]);
        let x = table.unit_x_axis();
        render_styled(&x, &table.series(), &PlotConfig::default(), &["science", "nature"]).unwrap()
    }

    /// `color` at `alpha` over a white background
    fn over_white(color: RGBColor, alpha: f64) -> [u8; 3] {
        let blend = |c: u8| (alpha * c as f64 + (1. - alpha) * 255.).round() as u8;
        [blend(color.0), blend(color.1), blend(color.2)]
    }

    fn count_near(raster: &Raster, target: [u8; 3], tol: u8) -> usize {
        raster
            .pixels
            .chunks(3)
            .filter(|p| (0..3).all(|i| p[i].max(target[i]) - p[i].min(target[i]) <= tol))
            .count()
    }

    fn is_dark(p: [u8; 3]) -> bool {
        p.iter().all(|&c| c < 80)
    }

    /// number of separate dark stretches along row `y`
    fn dark_runs(raster: &Raster, y: u32) -> usize {
        let mut runs = 0;
        let mut inside = false;
        for x in 0..raster.width {
            let dark = is_dark(raster.pixel(x, y));
            if dark && !inside {
                runs += 1;
            }
            inside = dark;
        }
        runs
    }

    #[test]
    fn test_lines_are_drawn_in_cycle_colors() {
        let raster = rasterize(&two_lines(), 200).unwrap();
        assert_eq!((raster.width, raster.height), (660, 500));

        let a = over_white(RGBColor(0x0c, 0x5d, 0xa5), 0.7);
        let b = over_white(RGBColor(0x00, 0xb9, 0x45), 0.7);
        assert_eq!(a, [85, 141, 192]);
        assert_eq!(b, [77, 206, 124]);
        assert!(count_near(&raster, a, 3) > 500);
        assert!(count_near(&raster, b, 3) > 500);

        let cropped = tight_crop(&raster, 10);
        assert!(cropped.width < raster.width);
        assert!(cropped.height < raster.height);
        assert_eq!(count_near(&cropped, a, 3), count_near(&raster, a, 3));
    }

    #[test]
    fn test_mirrored_ticks_on_top_spine() {
        let raster = rasterize(&two_lines(), 200).unwrap();
        // first row that is mostly dark is the top spine
        let top = (0..raster.height)
            .find(|&y| {
                let dark = (0..raster.width).filter(|&x| is_dark(raster.pixel(x, y)));
                dark.count() > raster.width as usize / 2
            })
            .unwrap();
        // inward ticks hang below the spine; the left and right spines add one run each
        let runs = dark_runs(&raster, top + 4);
        assert!(runs >= 5, "{} dark runs below the top spine", runs);
    }

    #[test]
    fn test_resolution_bounds() {
        let fig = two_lines();
        assert!(matches!(rasterize(&fig, 0), Err(PlotError::InvalidDpi(0))));
        assert!(matches!(
            rasterize(&fig, MAX_DPI + 1),
            Err(PlotError::InvalidDpi(_))
        ));
    }

    #[test]
    fn test_pixel_offset() {
        let raster = Raster {
            width: 70_000,
            height: 1,
            pixels: Vec::new(),
            background: RGBColor(255, 255, 255),
        };
        // past u32 once multiplied out
        assert_eq!(raster.offset(0, 70_000), 70_000usize * 70_000 * 3);
        assert_eq!(raster.offset(5, 0), 15);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.), "0");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(1.), "1");
        assert_eq!(format_tick(-2.5), "-2.5");
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
        assert_eq!(format_tick(-0.0001), "-1e-4");
        assert_eq!(format_tick(25000.), "2.5e4");
        assert_eq!(format_tick(-0.0004), "-4e-4");
    }

    #[test]
    fn test_points_to_pixels() {
        assert_eq!(px(72., 600), 600);
        assert_eq!(px(7., 600), 58);
        assert_eq!(px(0.01, 72), 1);
    }
}
