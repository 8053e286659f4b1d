//! Line chart for the dashboard: loads against booked capacity.
//!
//! Geometry is computed by [`ChartLayout::compute`], a pure function of the
//! series, the resolved width and the [`ChartConfig`]. Painting goes through
//! the [`ChartSurface`] trait so the same layout drives a `<canvas>` in the
//! browser and an SVG on desktop.

use super::data::TimeSeries;

/// Presentation constants for the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Width used when the surface cannot report a layout width.
    pub fallback_width: f64,
    pub height: f64,
    pub padding: f64,
    /// Multiplier on the largest value so the top point clears the edge.
    pub headroom: f64,
    /// Number of horizontal gridlines, top and bottom included.
    pub grid_lines: usize,
    pub grid_dash: [f64; 2],
    pub grid_color: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub fill_top: &'static str,
    pub fill_bottom: &'static str,
    pub line_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            fallback_width: 600.0,
            height: 300.0,
            padding: 40.0,
            headroom: 1.1,
            grid_lines: 5,
            grid_dash: [4.0, 4.0],
            grid_color: "rgba(148, 163, 184, 0.35)",
            primary_color: "#2563eb",
            secondary_color: "#94a3b8",
            fill_top: "rgba(37, 99, 235, 0.28)",
            fill_bottom: "rgba(37, 99, 235, 0)",
            line_width: 2.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertical linear gradient between two y coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalGradient {
    pub top: f64,
    pub bottom: f64,
    pub from: &'static str,
    pub to: &'static str,
}

/// Drawing backend the layout paints onto.
pub trait ChartSurface {
    /// Current layout width of the drawing element, if known.
    fn layout_width(&self) -> Option<f64>;
    /// Size the backing store and clear any previous frame.
    fn reset(&mut self, width: f64, height: f64);
    /// Dash pattern for subsequent strokes; empty means solid.
    fn set_line_dash(&mut self, pattern: &[f64]);
    fn stroke_polyline(&mut self, points: &[ChartPoint], color: &str, line_width: f64);
    /// Fill the region between `points` and the horizontal `baseline`.
    fn fill_to_baseline(&mut self, points: &[ChartPoint], baseline: f64, fill: &VerticalGradient);
}

/// Pixel geometry of one chart frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub max_value: f64,
    /// y coordinate of the zero line.
    pub baseline: f64,
    pub gridlines: Vec<f64>,
    pub loads: Vec<ChartPoint>,
    pub capacity: Vec<ChartPoint>,
}

impl ChartLayout {
    pub fn compute(series: &TimeSeries, width: f64, config: &ChartConfig) -> Self {
        let height = config.height;
        let padding = config.padding;
        let usable_width = (width - 2.0 * padding).max(0.0);
        let usable_height = (height - 2.0 * padding).max(0.0);

        let max_value = max_value(series, config.headroom);
        let baseline = padding + usable_height;

        let intervals = config.grid_lines.saturating_sub(1);
        let gridlines = (0..config.grid_lines)
            .map(|i| {
                if intervals == 0 {
                    padding
                } else {
                    padding + usable_height * (i as f64 / intervals as f64)
                }
            })
            .collect();

        let project = |values: &[f64]| -> Vec<ChartPoint> {
            let n = values.len();
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let x = if n > 1 {
                        padding + usable_width * (i as f64 / (n - 1) as f64)
                    } else {
                        padding
                    };
                    let y = if max_value > 0.0 {
                        padding + usable_height - (value / max_value) * usable_height
                    } else {
                        baseline
                    };
                    ChartPoint { x, y }
                })
                .collect()
        };

        Self {
            width,
            height,
            padding,
            max_value,
            baseline,
            gridlines,
            loads: project(&series.loads),
            capacity: project(&series.capacity),
        }
    }

    /// Grid first, then capacity, then the filled loads trace on top.
    pub fn paint<S: ChartSurface + ?Sized>(&self, surface: &mut S, config: &ChartConfig) {
        surface.reset(self.width, self.height);

        surface.set_line_dash(&config.grid_dash);
        for &y in &self.gridlines {
            let line = [
                ChartPoint { x: self.padding, y },
                ChartPoint {
                    x: self.width - self.padding,
                    y,
                },
            ];
            surface.stroke_polyline(&line, config.grid_color, 1.0);
        }
        surface.set_line_dash(&[]);

        surface.stroke_polyline(&self.capacity, config.secondary_color, config.line_width);

        let fill = VerticalGradient {
            top: self.padding,
            bottom: self.baseline,
            from: config.fill_top,
            to: config.fill_bottom,
        };
        surface.fill_to_baseline(&self.loads, self.baseline, &fill);
        surface.stroke_polyline(&self.loads, config.primary_color, config.line_width);
    }
}

/// Largest value across both sequences, scaled by `headroom`.
pub fn max_value(series: &TimeSeries, headroom: f64) -> f64 {
    let peak = series
        .loads
        .iter()
        .chain(series.capacity.iter())
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    peak * headroom
}

/// Lay out and paint `series` onto `surface`.
///
/// Does nothing when no series has been selected yet or the surface is not
/// mounted. Returns the geometry that was painted.
pub fn draw_chart<S: ChartSurface + ?Sized>(
    series: Option<&TimeSeries>,
    surface: Option<&mut S>,
    config: &ChartConfig,
) -> Option<ChartLayout> {
    let series = series?;
    let surface = surface?;

    let width = surface
        .layout_width()
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(config.fallback_width);

    let layout = ChartLayout::compute(series, width, config);
    layout.paint(surface, config);
    tracing::trace!(width, points = series.len(), "chart painted");
    Some(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        width: Option<f64>,
        ops: Vec<String>,
    }

    impl ChartSurface for Recorder {
        fn layout_width(&self) -> Option<f64> {
            self.width
        }
        fn reset(&mut self, width: f64, height: f64) {
            self.ops.push(format!("reset {width}x{height}"));
        }
        fn set_line_dash(&mut self, pattern: &[f64]) {
            self.ops.push(format!("dash {pattern:?}"));
        }
        fn stroke_polyline(&mut self, points: &[ChartPoint], color: &str, _line_width: f64) {
            self.ops.push(format!("stroke {color} {}", points.len()));
        }
        fn fill_to_baseline(&mut self, points: &[ChartPoint], _baseline: f64, _fill: &VerticalGradient) {
            self.ops.push(format!("fill {}", points.len()));
        }
    }

    fn series(loads: Vec<f64>, capacity: Vec<f64>) -> TimeSeries {
        TimeSeries {
            labels: (0..loads.len()).map(|i| format!("p{i}")).collect(),
            loads,
            capacity,
        }
    }

    fn week() -> TimeSeries {
        series(
            vec![180.0, 230.0, 310.0, 360.0, 410.0, 380.0, 320.0],
            vec![240.0, 260.0, 340.0, 390.0, 430.0, 420.0, 360.0],
        )
    }

    #[test]
    fn max_value_applies_headroom() {
        let max = max_value(&week(), 1.1);
        assert!((max - 473.0).abs() < 1e-9, "got {max}");
    }

    #[test]
    fn all_zero_series_sits_on_baseline() {
        let config = ChartConfig::default();
        let layout = ChartLayout::compute(&series(vec![0.0; 4], vec![0.0; 4]), 600.0, &config);
        assert_eq!(layout.max_value, 0.0);
        assert_eq!(layout.baseline, 260.0);
        for point in layout.loads.iter().chain(layout.capacity.iter()) {
            assert_eq!(point.y, layout.baseline);
            assert!(point.y.is_finite());
        }
    }

    #[test]
    fn single_point_sits_at_left_padding() {
        let config = ChartConfig::default();
        let layout = ChartLayout::compute(&series(vec![12.0], vec![20.0]), 600.0, &config);
        assert_eq!(layout.loads.len(), 1);
        assert_eq!(layout.loads[0].x, config.padding);
        assert_eq!(layout.capacity[0].x, config.padding);
        assert!(layout.loads[0].y.is_finite());
    }

    #[test]
    fn points_span_usable_width() {
        let config = ChartConfig::default();
        let layout = ChartLayout::compute(&week(), 600.0, &config);
        assert_eq!(layout.loads.first().unwrap().x, 40.0);
        assert_eq!(layout.loads.last().unwrap().x, 560.0);
        assert_eq!(layout.gridlines, vec![40.0, 95.0, 150.0, 205.0, 260.0]);
        // Tallest capacity point leaves the headroom gap above it.
        let top = layout.capacity[4].y;
        assert!(top > config.padding);
    }

    #[test]
    fn paint_order_is_grid_capacity_loads() {
        let config = ChartConfig::default();
        let mut surface = Recorder::default();
        draw_chart(Some(&week()), Some(&mut surface), &config).unwrap();

        let ops = surface.ops;
        assert_eq!(ops[0], "reset 600x300");
        assert_eq!(ops[1], "dash [4.0, 4.0]");
        let grid = &ops[2..7];
        assert!(grid.iter().all(|op| op.starts_with(&format!("stroke {}", config.grid_color))));
        assert_eq!(ops[7], "dash []");
        assert_eq!(ops[8], format!("stroke {} 7", config.secondary_color));
        assert_eq!(ops[9], "fill 7");
        assert_eq!(ops[10], format!("stroke {} 7", config.primary_color));
        assert_eq!(ops.len(), 11);
    }

    #[test]
    fn width_comes_from_surface_when_reported() {
        let config = ChartConfig::default();
        let mut surface = Recorder {
            width: Some(900.0),
            ..Default::default()
        };
        let layout = draw_chart(Some(&week()), Some(&mut surface), &config).unwrap();
        assert_eq!(layout.width, 900.0);

        surface.width = Some(0.0);
        let layout = draw_chart(Some(&week()), Some(&mut surface), &config).unwrap();
        assert_eq!(layout.width, config.fallback_width);
    }

    #[test]
    fn missing_series_or_surface_is_a_no_op() {
        let config = ChartConfig::default();
        let mut surface = Recorder::default();
        assert!(draw_chart(None, Some(&mut surface), &config).is_none());
        assert!(surface.ops.is_empty());
        assert!(draw_chart::<Recorder>(Some(&week()), None, &config).is_none());
    }

    #[test]
    fn repeated_draws_produce_identical_geometry() {
        let config = ChartConfig::default();
        let mut surface = Recorder::default();
        let first = draw_chart(Some(&week()), Some(&mut surface), &config);
        let second = draw_chart(Some(&week()), Some(&mut surface), &config);
        assert_eq!(first, second);
    }
}
