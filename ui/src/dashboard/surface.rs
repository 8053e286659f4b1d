//! Chart surfaces: an SVG recorder usable everywhere and, in the browser,
//! a 2D `<canvas>` context.

use super::chart::{ChartPoint, ChartSurface, VerticalGradient};

/// One recorded SVG shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgShape {
    Polyline {
        points: String,
        color: String,
        width: f64,
        dash: Option<String>,
    },
    Area {
        path: String,
    },
}

/// Records chart strokes and fills as SVG attribute strings for rendering
/// inside an `svg` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    layout_width: Option<f64>,
    width: f64,
    height: f64,
    dash: Vec<f64>,
    gradient: Option<VerticalGradient>,
    shapes: Vec<SvgShape>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the measured width of the element hosting the SVG.
    pub fn set_layout_width(&mut self, width: f64) {
        self.layout_width = Some(width);
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    pub fn shapes(&self) -> &[SvgShape] {
        &self.shapes
    }

    pub fn gradient(&self) -> Option<&VerticalGradient> {
        self.gradient.as_ref()
    }

    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty()
    }
}

fn svg_points(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl ChartSurface for SvgSurface {
    fn layout_width(&self) -> Option<f64> {
        self.layout_width
    }

    fn reset(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.dash.clear();
        self.gradient = None;
        self.shapes.clear();
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        self.dash = pattern.to_vec();
    }

    fn stroke_polyline(&mut self, points: &[ChartPoint], color: &str, line_width: f64) {
        if points.is_empty() {
            return;
        }
        let dash = (!self.dash.is_empty()).then(|| {
            self.dash
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        });
        self.shapes.push(SvgShape::Polyline {
            points: svg_points(points),
            color: color.to_string(),
            width: line_width,
            dash,
        });
    }

    fn fill_to_baseline(&mut self, points: &[ChartPoint], baseline: f64, fill: &VerticalGradient) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let mut path = format!("M {:.2},{:.2}", first.x, baseline);
        for p in points {
            path.push_str(&format!(" L {:.2},{:.2}", p.x, p.y));
        }
        path.push_str(&format!(" L {:.2},{:.2} Z", last.x, baseline));

        self.gradient = Some(fill.clone());
        self.shapes.push(SvgShape::Area { path });
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::super::chart::{ChartPoint, ChartSurface, VerticalGradient};

    /// 2D canvas context of a mounted `<canvas>` element.
    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasSurface {
        /// Look up a mounted canvas by element id.
        pub fn from_element_id(id: &str) -> Result<Self, String> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or("Document unavailable")?;
            let canvas: HtmlCanvasElement = document
                .get_element_by_id(id)
                .ok_or("Canvas not mounted")?
                .dyn_into()
                .map_err(|_| "Canvas cast failed")?;
            let ctx: CanvasRenderingContext2d = canvas
                .get_context("2d")
                .map_err(|_| "Canvas context unavailable")?
                .ok_or("Canvas context missing")?
                .dyn_into()
                .map_err(|_| "Context cast failed")?;
            Ok(Self { canvas, ctx })
        }

        fn trace(&self, points: &[ChartPoint]) {
            self.ctx.begin_path();
            if let Some(first) = points.first() {
                self.ctx.move_to(first.x, first.y);
            }
            for p in points.iter().skip(1) {
                self.ctx.line_to(p.x, p.y);
            }
        }
    }

    impl ChartSurface for CanvasSurface {
        fn layout_width(&self) -> Option<f64> {
            self.canvas
                .parent_element()
                .map(|parent| parent.client_width() as f64)
                .filter(|w| *w > 0.0)
        }

        fn reset(&mut self, width: f64, height: f64) {
            // Assigning the backing size also clears the bitmap.
            self.canvas.set_width(width.max(0.0) as u32);
            self.canvas.set_height(height.max(0.0) as u32);
        }

        fn set_line_dash(&mut self, pattern: &[f64]) {
            let segments = js_sys::Array::new();
            for value in pattern {
                segments.push(&JsValue::from_f64(*value));
            }
            self.ctx.set_line_dash(&segments).ok();
        }

        fn stroke_polyline(&mut self, points: &[ChartPoint], color: &str, line_width: f64) {
            if points.is_empty() {
                return;
            }
            self.trace(points);
            self.ctx.set_stroke_style_str(color);
            self.ctx.set_line_width(line_width);
            self.ctx.stroke();
        }

        fn fill_to_baseline(&mut self, points: &[ChartPoint], baseline: f64, fill: &VerticalGradient) {
            let (Some(first), Some(last)) = (points.first(), points.last()) else {
                return;
            };
            let gradient = self
                .ctx
                .create_linear_gradient(0.0, fill.top, 0.0, fill.bottom);
            gradient.add_color_stop(0.0, fill.from).ok();
            gradient.add_color_stop(1.0, fill.to).ok();

            self.trace(points);
            self.ctx.line_to(last.x, baseline);
            self.ctx.line_to(first.x, baseline);
            self.ctx.close_path();
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }
}
