//! Named style sheets and the scoped style context.
//!
//! The active style lives in thread-local state. Sheets are applied in order
//! on top of it, each one overriding only what it sets. [`context`] swaps the
//! style for the lifetime of the returned guard and puts the previous one
//! back when the guard is dropped, whatever way the scope is left.

use crate::error::{PlotError, Result};
use log::debug;
use plotters::style::{FontFamily, RGBColor};
use std::cell::RefCell;
use std::marker::PhantomData;

/// points per inch, used to turn style sizes into pixels
pub const POINTS_PER_INCH: f64 = 72.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Serif,
    SansSerif,
}

impl FontKind {
    pub fn family(self) -> FontFamily<'static> {
        match self {
            FontKind::Serif => FontFamily::Serif,
            FontKind::SansSerif => FontFamily::SansSerif,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDirection {
    In,
    Out,
}

/// Visual defaults for a figure. Sizes are in points, the figure size in inches.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub figsize: (f64, f64),
    pub font: FontKind,
    pub label_size: f64,
    pub tick_label_size: f64,
    pub line_width: f64,
    pub axes_line_width: f64,
    pub tick_size: f64,
    pub tick_direction: TickDirection,
    /// draw the top and right spines, with tick marks at the same positions
    /// as the bottom and left axes
    pub mirror_ticks: bool,
    pub grid: bool,
    pub grid_line_width: f64,
    pub color_cycle: Vec<RGBColor>,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub grid_color: RGBColor,
    /// padding around the content when saving with a tight bounding box
    pub pad_inches: f64,
    /// fraction of the data span added on each side when not autoscaling tight
    pub margins: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            figsize: (6.4, 4.8),
            font: FontKind::SansSerif,
            label_size: 10.,
            tick_label_size: 10.,
            line_width: 1.5,
            axes_line_width: 0.8,
            tick_size: 3.5,
            tick_direction: TickDirection::Out,
            mirror_ticks: false,
            grid: false,
            grid_line_width: 0.8,
            color_cycle: vec![
                RGBColor(0x1f, 0x77, 0xb4),
                RGBColor(0xff, 0x7f, 0x0e),
                RGBColor(0x2c, 0xa0, 0x2c),
                RGBColor(0xd6, 0x27, 0x28),
                RGBColor(0x94, 0x67, 0xbd),
                RGBColor(0x8c, 0x56, 0x4b),
                RGBColor(0xe3, 0x77, 0xc2),
                RGBColor(0x7f, 0x7f, 0x7f),
                RGBColor(0xbc, 0xbd, 0x22),
                RGBColor(0x17, 0xbe, 0xcf),
            ],
            background: RGBColor(255, 255, 255),
            foreground: RGBColor(0, 0, 0),
            grid_color: RGBColor(0xb0, 0xb0, 0xb0),
            pad_inches: 0.1,
            margins: 0.05,
        }
    }
}

impl Style {
    /// colour of the `i`-th line, wrapping around the cycle
    pub fn line_color(&self, i: usize) -> RGBColor {
        if self.color_cycle.is_empty() {
            return self.foreground;
        }
        self.color_cycle[i % self.color_cycle.len()]
    }

    /// Applies the named sheets in order on top of `self`.
    pub fn with_sheets<S: AsRef<str>>(mut self, names: &[S]) -> Result<Style> {
        for name in names {
            let name = name.as_ref().trim();
            let sheet = find_sheet(name).ok_or_else(|| PlotError::UnknownStyle(name.to_string()))?;
            (sheet.apply)(&mut self);
        }
        Ok(self)
    }
}

struct Sheet {
    name: &'static str,
    apply: fn(&mut Style),
}

const SHEETS: &[Sheet] = &[
    Sheet {
        name: "default",
        apply: sheet_default,
    },
    Sheet {
        name: "science",
        apply: sheet_science,
    },
    Sheet {
        name: "nature",
        apply: sheet_nature,
    },
    Sheet {
        name: "ieee",
        apply: sheet_ieee,
    },
    Sheet {
        name: "grid",
        apply: sheet_grid,
    },
];

fn find_sheet(name: &str) -> Option<&'static Sheet> {
    SHEETS.iter().find(|s| s.name == name)
}

fn sheet_default(s: &mut Style) {
    *s = Style::default();
}

fn sheet_science(s: &mut Style) {
    s.figsize = (3.5, 2.625);
    s.font = FontKind::Serif;
    s.line_width = 1.;
    s.axes_line_width = 0.5;
    s.grid_line_width = 0.5;
    s.tick_size = 3.;
    s.tick_direction = TickDirection::In;
    s.mirror_ticks = true;
    s.color_cycle = vec![
        RGBColor(0x0c, 0x5d, 0xa5),
        RGBColor(0x00, 0xb9, 0x45),
        RGBColor(0xff, 0x95, 0x00),
        RGBColor(0xff, 0x2c, 0x00),
        RGBColor(0x84, 0x5b, 0x97),
        RGBColor(0x47, 0x47, 0x47),
        RGBColor(0x9e, 0x9e, 0x9e),
    ];
    s.pad_inches = 0.05;
}

fn sheet_nature(s: &mut Style) {
    s.figsize = (3.3, 2.5);
    s.font = FontKind::SansSerif;
    s.label_size = 7.;
    s.tick_label_size = 7.;
    s.axes_line_width = 0.5;
    s.line_width = 1.;
}

fn sheet_ieee(s: &mut Style) {
    s.figsize = (3.3, 2.5);
    s.font = FontKind::Serif;
    s.label_size = 8.;
    s.tick_label_size = 8.;
    s.line_width = 1.;
    s.color_cycle = vec![
        RGBColor(0, 0, 0),
        RGBColor(0xff, 0, 0),
        RGBColor(0, 0, 0xff),
        RGBColor(0, 0x80, 0),
    ];
}

fn sheet_grid(s: &mut Style) {
    s.grid = true;
}

/// names of the built-in sheets
pub fn available() -> impl Iterator<Item = &'static str> {
    SHEETS.iter().map(|s| s.name)
}

thread_local! {
    static CURRENT: RefCell<Style> = RefCell::new(Style::default());
}

/// snapshot of the active style
pub fn current() -> Style {
    CURRENT.with(|c| c.borrow().clone())
}

/// the active style with `names` applied on top, without activating it
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Style> {
    current().with_sheets(names)
}

/// Makes the named sheets the active style until changed again.
pub fn use_styles<S: AsRef<str>>(names: &[S]) -> Result<()> {
    let style = resolve(names)?;
    CURRENT.with(|c| *c.borrow_mut() = style);
    Ok(())
}

/// Activates the named sheets until the returned guard is dropped.
///
/// Unknown names fail before anything changes.
pub fn context<S: AsRef<str>>(names: &[S]) -> Result<StyleContext> {
    let style = resolve(names)?;
    let previous = CURRENT.with(|c| std::mem::replace(&mut *c.borrow_mut(), style));
    debug!(
        "entering style context [{}]",
        names.iter().map(|n| n.as_ref()).collect::<Vec<_>>().join(", ")
    );
    Ok(StyleContext {
        previous: Some(previous),
        _thread_bound: PhantomData,
    })
}

/// Guard returned by [`context`]; restores the previous style on drop.
#[must_use = "the style is restored as soon as the context is dropped"]
pub struct StyleContext {
    previous: Option<Style>,
    // the state is thread-local, so the guard must stay on its thread
    _thread_bound: PhantomData<*const ()>,
}

impl Drop for StyleContext {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // try_with: the thread-local may already be gone during thread teardown
            let _ = CURRENT.try_with(|c| *c.borrow_mut() = previous);
            debug!("style context restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_science_then_nature() {
        let style = Style::default().with_sheets(&["science", "nature"]).unwrap();
        assert_eq!(style.figsize, (3.3, 2.5));
        assert_eq!(style.font, FontKind::SansSerif);
        assert_eq!(style.label_size, 7.);
        // kept from science
        assert_eq!(style.tick_direction, TickDirection::In);
        assert!(style.mirror_ticks);
        assert_eq!(style.pad_inches, 0.05);
        assert_eq!(style.line_color(0), RGBColor(0x0c, 0x5d, 0xa5));
        assert_eq!(style.line_color(7), style.line_color(0));
    }

    #[test]
    fn test_order_matters() {
        let style = Style::default().with_sheets(&["nature", "science"]).unwrap();
        assert_eq!(style.figsize, (3.5, 2.625));
        assert_eq!(style.font, FontKind::Serif);
    }

    #[test]
    fn test_context_restores_on_drop() {
        let before = current();
        {
            let _ctx = context(&["science", "nature"]).unwrap();
            assert_eq!(current().figsize, (3.3, 2.5));
            {
                let _inner = context(&["grid"]).unwrap();
                assert!(current().grid);
                assert_eq!(current().figsize, (3.3, 2.5));
            }
            assert!(!current().grid);
        }
        assert_eq!(current(), before);
    }

    #[test]
    fn test_context_restores_on_error_path() {
        fn failing_block() -> Result<()> {
            let _ctx = context(&["ieee"])?;
            assert_eq!(current().font, FontKind::Serif);
            Err(PlotError::NoColumns)
        }
        let before = current();
        assert!(failing_block().is_err());
        assert_eq!(current(), before);
    }

    #[test]
    fn test_context_restores_on_panic() {
        let before = current();
        let outcome = std::panic::catch_unwind(|| {
            let _ctx = context(&["science"]).unwrap();
            panic!("inside the plotting block");
        });
        assert!(outcome.is_err());
        assert_eq!(current(), before);
    }

    #[test]
    fn test_unknown_style_changes_nothing() {
        let before = current();
        match context(&["science", "nope"]) {
            Err(PlotError::UnknownStyle(name)) => assert_eq!(name, "nope"),
            _ => panic!("expected an unknown style error"),
        }
        assert_eq!(current(), before);
    }

    #[test]
    fn test_use_styles_and_default_reset() {
        std::thread::spawn(|| {
            use_styles(&["science"]).unwrap();
            assert_eq!(current().font, FontKind::Serif);
            use_styles(&["default"]).unwrap();
            assert_eq!(current(), Style::default());
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_available() {
        let names: Vec<_> = available().collect();
        assert!(names.contains(&"science"));
        assert!(names.contains(&"nature"));
    }
}
