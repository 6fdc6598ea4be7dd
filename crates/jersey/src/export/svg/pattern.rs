//! Procedural pattern geometry.
//!
//! Each pattern is laid out over the whole canvas in canvas coordinates and
//! is clipped to a body silhouette by the caller. Geometry is computed into
//! plain values first so it can be checked without going through SVG.

use svg::{self, node::element as svg_element};

use jersey_core::{color::HexColor, pattern::PatternShape};

use super::silhouette::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Id of the `linearGradient` used by the gradient pattern.
pub const GRADIENT_ID: &str = "patternGradient";

/// Horizontal vertices per brush stroke edge.
const BRUSH_SEGMENTS: u32 = 20;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    fn to_svg(self, fill: &str) -> svg_element::Rectangle {
        svg_element::Rectangle::new()
            .set("x", self.x)
            .set("y", self.y)
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", fill)
    }
}

/// A rectangle rotated about a center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotatedRect {
    pub rect: Rect,
    /// Rotation in degrees, SVG orientation.
    pub angle: f32,
    pub center: (f32, f32),
}

/// Offsets of `count` strips of `thickness`, each centered in one of
/// `count` equal bands along `span`.
fn band_offsets(count: u32, thickness: u32, span: f32) -> impl Iterator<Item = f32> {
    let gap = span / count.max(1) as f32;
    let thickness = thickness as f32;
    (0..count).map(move |i| (i as f32).mul_add(gap, (gap - thickness) / 2.0))
}

/// Full-height vertical strips.
pub fn stripes(count: u32, thickness: u32) -> Vec<Rect> {
    band_offsets(count, thickness, CANVAS_WIDTH)
        .map(|x| Rect {
            x,
            y: 0.0,
            width: thickness as f32,
            height: CANVAS_HEIGHT,
        })
        .collect()
}

/// Full-width horizontal strips.
pub fn hoops(count: u32, thickness: u32) -> Vec<Rect> {
    band_offsets(count, thickness, CANVAS_HEIGHT)
        .map(|y| Rect {
            x: 0.0,
            y,
            width: CANVAS_WIDTH,
            height: thickness as f32,
        })
        .collect()
}

/// One canvas-high band of `width` centered on `center` and tilted by
/// `angle` degrees, rising to the right.
pub fn sash(angle: u32, width: u32, center: (f32, f32)) -> RotatedRect {
    let width = width as f32;
    RotatedRect {
        rect: Rect {
            x: center.0 - width / 2.0,
            y: center.1 - CANVAS_HEIGHT / 2.0,
            width,
            height: CANVAS_HEIGHT,
        },
        angle: -(angle as f32),
        center,
    }
}

/// Every other cell of a `cell`-sized grid, starting with the top-left one.
pub fn checker(cell: u32) -> Vec<Rect> {
    let size = cell.max(1) as f32;
    let columns = (CANVAS_WIDTH / size).ceil() as u32;
    let rows = (CANVAS_HEIGHT / size).ceil() as u32;

    (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (row, column)))
        .filter(|(row, column)| (row + column) % 2 == 0)
        .map(|(row, column)| Rect {
            x: column as f32 * size,
            y: row as f32 * size,
            width: size,
            height: size,
        })
        .collect()
}

/// Opacity of the gradient's end stop.
pub fn gradient_opacity(intensity: u32) -> f32 {
    intensity.min(100) as f32 / 100.0
}

/// Vertical gradient from `primary` to `fill`.
pub fn gradient_definition(
    intensity: u32,
    primary: HexColor,
    fill: HexColor,
) -> svg_element::LinearGradient {
    svg_element::LinearGradient::new()
        .set("id", GRADIENT_ID)
        .set("x1", 0)
        .set("y1", 0)
        .set("x2", 0)
        .set("y2", 1)
        .add(
            svg_element::Stop::new()
                .set("offset", 0)
                .set("stop-color", primary.to_string()),
        )
        .add(
            svg_element::Stop::new()
                .set("offset", 1)
                .set("stop-color", fill.to_string())
                .set("stop-opacity", gradient_opacity(intensity)),
        )
}

/// Deterministic offset in `[-bound, bound]` for one brush vertex.
fn jitter(stroke: u32, vertex: u32, bound: f32) -> f32 {
    let mut hash = stroke.wrapping_mul(0x9E37_79B9) ^ vertex.wrapping_mul(0x85EB_CA6B);
    hash ^= hash >> 15;
    hash = hash.wrapping_mul(0x2C1B_3C6D);
    hash ^= hash >> 12;
    let unit = (hash % 2001) as f32 / 1000.0 - 1.0;
    unit * bound
}

/// Closed outlines of horizontal brush strokes.
///
/// Strokes are `thickness` high and start every `2 × thickness`. Both edges
/// wander by at most `roughness / 10`.
pub fn brush(thickness: u32, roughness: u32) -> Vec<Vec<(f32, f32)>> {
    let height = thickness.max(1) as f32;
    let bound = roughness as f32 / 10.0;
    let step = CANVAS_WIDTH / BRUSH_SEGMENTS as f32;

    let mut strokes = Vec::new();
    let mut stroke = 0;
    let mut top = 0.0;
    while top < CANVAS_HEIGHT {
        let upper = (0..=BRUSH_SEGMENTS)
            .map(|vertex| (vertex as f32 * step, top + jitter(stroke, vertex, bound)));
        let lower = (0..=BRUSH_SEGMENTS).rev().map(|vertex| {
            let offset = jitter(stroke, vertex + BRUSH_SEGMENTS + 1, bound);
            (vertex as f32 * step, top + height + offset)
        });
        strokes.push(upper.chain(lower).collect());

        stroke += 1;
        top = stroke as f32 * 2.0 * height;
    }
    strokes
}

/// Path data of a closed polygon.
fn polygon_data(points: &[(f32, f32)]) -> String {
    let mut data = String::new();
    for (index, (x, y)) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        data.push_str(&format!("{command} {x:.1} {y:.1} "));
    }
    data.push('z');
    data
}

/// Baselines of the wave bands, one every `4 × amplitude`.
pub fn wave_baselines(amplitude: u32) -> Vec<f32> {
    let spacing = 4.0 * amplitude.max(1) as f32;
    let mut baselines = Vec::new();
    let mut y = spacing / 2.0;
    while y - amplitude as f32 <= CANVAS_HEIGHT {
        baselines.push(y);
        y += spacing;
    }
    baselines
}

/// Path data of one wave across the canvas at `baseline`.
///
/// Each wavelength is a quadratic crest followed by a reflected trough.
fn wave_data(baseline: f32, amplitude: u32, wavelength: u32) -> String {
    let amplitude = amplitude as f32;
    let wavelength = wavelength.max(1) as f32;
    let half = wavelength / 2.0;

    let mut data = format!("M 0 {baseline:.1}");
    let mut x = 0.0;
    while x < CANVAS_WIDTH {
        let crest = baseline - 2.0 * amplitude;
        data.push_str(&format!(
            " Q {:.1} {crest:.1} {:.1} {baseline:.1} T {:.1} {baseline:.1}",
            x + half / 2.0,
            x + half,
            x + wavelength,
        ));
        x += wavelength;
    }
    data
}

/// Render the shapes of one pattern layer.
///
/// `center` is the center of the body the layer is clipped to.
pub fn render(
    shape: PatternShape,
    fill: HexColor,
    center: (f32, f32),
) -> Vec<Box<dyn svg::Node>> {
    let fill = fill.to_string();
    let rects = |rects: Vec<Rect>| -> Vec<Box<dyn svg::Node>> {
        rects
            .into_iter()
            .map(|rect| Box::new(rect.to_svg(&fill)) as Box<dyn svg::Node>)
            .collect()
    };

    match shape {
        PatternShape::Stripes { count, thickness } => rects(stripes(count, thickness)),
        PatternShape::Hoops { count, thickness } => rects(hoops(count, thickness)),
        PatternShape::Checker { cell } => rects(checker(cell)),
        PatternShape::Sash { angle, width } => {
            let sash = sash(angle, width, center);
            let group = svg_element::Group::new()
                .set(
                    "transform",
                    format!(
                        "rotate({} {} {})",
                        sash.angle, sash.center.0, sash.center.1
                    ),
                )
                .add(sash.rect.to_svg(&fill));
            vec![Box::new(group)]
        }
        PatternShape::Gradient { .. } => {
            let rect = Rect {
                x: 0.0,
                y: 0.0,
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            };
            vec![Box::new(rect.to_svg(&format!("url(#{GRADIENT_ID})")))]
        }
        PatternShape::Brush {
            thickness,
            roughness,
        } => brush(thickness, roughness)
            .iter()
            .map(|outline| {
                Box::new(
                    svg_element::Path::new()
                        .set("d", polygon_data(outline))
                        .set("fill", fill.as_str()),
                ) as Box<dyn svg::Node>
            })
            .collect(),
        PatternShape::Waves {
            amplitude,
            wavelength,
        } => wave_baselines(amplitude)
            .into_iter()
            .map(|baseline| {
                Box::new(
                    svg_element::Path::new()
                        .set("d", wave_data(baseline, amplitude, wavelength))
                        .set("fill", "none")
                        .set("stroke", fill.as_str())
                        .set("stroke-width", amplitude),
                ) as Box<dyn svg::Node>
            })
            .collect(),
    }
}
