//! Line chart geometry.
//!
//! Turns a labelled series into SVG-ready coordinates: the plotted points, a
//! monotone cubic path through them, axis ticks and the hover band owned by
//! each point. Coordinates are in viewBox units; the rendered SVG scales them
//! to whatever container it lands in.

use std::fmt::Write;

use crate::format::plain_number;

pub const DEFAULT_TICK_COUNT: usize = 5;

/// Rough advance width of an axis label glyph, in viewBox units.
const LABEL_CHAR_WIDTH: f64 = 7.0;
const LABEL_GAP: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            margin: Margin {
                top: 10.0,
                right: 20.0,
                bottom: 30.0,
                left: 45.0,
            },
        }
    }
}

impl Viewport {
    pub fn plot_left(&self) -> f64 {
        self.margin.left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin.top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn plot_width(&self) -> f64 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Vertical axis policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YDomain {
    /// Zero-based, extended upward to a round number covering the data.
    Auto,
    Fixed(f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Horizontal slice of the plot area that activates a point's tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverBand {
    pub index: usize,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub domain: (f64, f64),
    pub points: Vec<PlotPoint>,
    pub path: String,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
}

impl ChartGeometry {
    pub fn layout(series: &[SeriesPoint], domain: YDomain, viewport: Viewport) -> Self {
        let (lo, hi, y_ticks) = match domain {
            YDomain::Fixed(lo, hi) => (lo, hi, linear_ticks(lo, hi, DEFAULT_TICK_COUNT)),
            YDomain::Auto => {
                let max = series.iter().map(|p| p.value).fold(0.0, f64::max);
                let (hi, ticks) = nice_ticks(0.0, max, DEFAULT_TICK_COUNT);
                (0.0, hi, ticks)
            }
        };

        let scale_y = |value: f64| {
            let span = hi - lo;
            let ratio = if span == 0.0 { 0.5 } else { (value - lo) / span };
            viewport.plot_bottom() - ratio * viewport.plot_height()
        };

        let points: Vec<PlotPoint> = series
            .iter()
            .enumerate()
            .map(|(i, p)| PlotPoint {
                x: category_x(i, series.len(), &viewport),
                y: scale_y(p.value),
                label: p.label.clone(),
                value: p.value,
            })
            .collect();

        let y_ticks = y_ticks
            .into_iter()
            .map(|value| Tick {
                position: scale_y(value),
                label: tick_label(value),
            })
            .collect();

        let x_ticks = thin_labels(&points, &viewport);
        let path = monotone_path(&points);

        Self {
            viewport,
            domain: (lo, hi),
            points,
            path,
            y_ticks,
            x_ticks,
        }
    }

    /// Each point owns the span halfway to its neighbours.
    pub fn hover_bands(&self) -> Vec<HoverBand> {
        let left = self.viewport.plot_left();
        let right = self.viewport.plot_right();
        let n = self.points.len();

        (0..n)
            .map(|i| {
                let start = if i == 0 {
                    left
                } else {
                    (self.points[i - 1].x + self.points[i].x) / 2.0
                };
                let end = if i + 1 == n {
                    right
                } else {
                    (self.points[i].x + self.points[i + 1].x) / 2.0
                };
                HoverBand {
                    index: i,
                    x: start,
                    width: (end - start).max(0.0),
                }
            })
            .collect()
    }
}

fn category_x(index: usize, count: usize, viewport: &Viewport) -> f64 {
    if count <= 1 {
        return viewport.plot_left() + viewport.plot_width() / 2.0;
    }
    viewport.plot_left() + index as f64 * viewport.plot_width() / (count - 1) as f64
}

fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![lo];
    }
    let step = (hi - lo) / (count - 1) as f64;
    (0..count).map(|i| lo + step * i as f64).collect()
}

/// Picks a step from the 1, 2, 2.5, 5, 10 family so that at most `count`
/// ticks starting at `lo` cover `hi`, then stops at the first tick at or
/// above `hi`. Returns the resulting upper bound and ticks.
fn nice_ticks(lo: f64, hi: f64, count: usize) -> (f64, Vec<f64>) {
    let intervals = count.max(2) - 1;
    let raw = (hi - lo) / intervals as f64;
    let step = if raw <= 0.0 || !raw.is_finite() {
        1.0
    } else {
        let magnitude = 10f64.powf(raw.log10().floor());
        let normalized = raw / magnitude;
        let factor = [1.0, 2.0, 2.5, 5.0, 10.0]
            .into_iter()
            .find(|f| *f >= normalized - 1e-9)
            .unwrap_or(10.0);
        factor * magnitude
    };
    let used = if hi > lo {
        (((hi - lo) / step) - 1e-9).ceil().clamp(1.0, intervals as f64) as usize
    } else {
        1
    };
    let ticks: Vec<f64> = (0..=used).map(|i| lo + step * i as f64).collect();
    (lo + step * used as f64, ticks)
}

fn tick_label(value: f64) -> String {
    plain_number((value * 1e6).round() / 1e6)
}

/// Keeps every k-th category label so neighbours don't overlap.
fn thin_labels(points: &[PlotPoint], viewport: &Viewport) -> Vec<Tick> {
    if points.is_empty() {
        return Vec::new();
    }
    let widest = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0) as f64;
    let needed = widest * LABEL_CHAR_WIDTH + LABEL_GAP;
    let spacing = if points.len() > 1 {
        viewport.plot_width() / (points.len() - 1) as f64
    } else {
        viewport.plot_width()
    };
    let every = if spacing <= 0.0 {
        points.len()
    } else {
        (needed / spacing).ceil().max(1.0) as usize
    };

    points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .map(|(_, p)| Tick {
            position: p.x,
            label: p.label.clone(),
        })
        .collect()
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at an interior point from its two neighbouring secants.
fn interior_tangent(p0: &PlotPoint, p1: &PlotPoint, p2: &PlotPoint) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = if h0 != 0.0 { (p1.y - p0.y) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.y - p1.y) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 {
        (s0 * h1 + s1 * h0) / (h0 + h1)
    } else {
        0.0
    };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// Tangent at an end point, from the secant and the neighbour's tangent.
fn end_tangent(from: &PlotPoint, to: &PlotPoint, neighbour_tangent: f64) -> f64 {
    let h = to.x - from.x;
    if h == 0.0 {
        neighbour_tangent
    } else {
        (3.0 * (to.y - from.y) / h - neighbour_tangent) / 2.0
    }
}

/// SVG path through the points, monotone in x.
pub fn monotone_path(points: &[PlotPoint]) -> String {
    let mut d = String::new();
    let Some(first) = points.first() else {
        return d;
    };
    let _ = write!(d, "M{:.2},{:.2}", first.x, first.y);

    match points.len() {
        1 => return d,
        2 => {
            let _ = write!(d, "L{:.2},{:.2}", points[1].x, points[1].y);
            return d;
        }
        _ => {}
    }

    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(&points[i - 1], &points[i], &points[i + 1]);
    }
    tangents[0] = end_tangent(&points[0], &points[1], tangents[1]);
    tangents[n - 1] = end_tangent(&points[n - 2], &points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (a, b) = (&points[i], &points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        let _ = write!(
            d,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            a.x + dx,
            a.y + dx * tangents[i],
            b.x - dx,
            b.y - dx * tangents[i + 1],
            b.x,
            b.y
        );
    }
    d
}
