//! SVG backend.
//!
//! [`render`] draws a [`JerseySpec`] as a front and a back view on a fixed
//! canvas. Layers are emitted back to front:
//!
//! 1. background
//! 2. shorts, with the front side panels and outlines
//! 3. bodies in the primary color
//! 4. the pattern, once per body and clipped to it
//! 5. trims, body outlines and collars
//! 6. front text (logo mark, sponsor) clipped to the front body
//! 7. back text (sponsor, player, number, team) clipped to the back body
//! 8. the caption
//!
//! Output depends only on the design and the options.

mod pattern;
mod silhouette;
mod text;

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use jersey_core::{
    color::HexColor, options::RenderOptions, pattern::PatternShape, spec::JerseySpec,
};

use silhouette::{BACK_CENTER_X, BODY_CENTER_Y, CANVAS_HEIGHT, CANVAS_WIDTH, FRONT_CENTER_X};
use text::Label;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

const FRONT_CLIP_ID: &str = "frontJerseyClip";
const BACK_CLIP_ID: &str = "backJerseyClip";

const OUTLINE_COLOR: &str = "#111";
const BODY_STROKE_WIDTH: f32 = 2.0;
const TRIM_STROKE_WIDTH: f32 = 1.5;

const BACK_SPONSOR_SIZE: u32 = 10;
const PLAYER_LETTER_SPACING: u32 = 2;

const CAPTION: &str = "© 2025 Procedural Jersey Generator";
const CAPTION_SIZE: u32 = 9;
const CAPTION_COLOR: HexColor = HexColor::from_rgb(0x99, 0x99, 0x99);

fn filled(data: &str, fill: &str) -> svg_element::Path {
    svg_element::Path::new().set("d", data).set("fill", fill)
}

fn outlined(data: &str, stroke: &str, width: f32) -> svg_element::Path {
    svg_element::Path::new()
        .set("d", data)
        .set("fill", "none")
        .set("stroke", stroke)
        .set("stroke-width", width)
}

fn clip_path(id: &str, data: &str) -> svg_element::ClipPath {
    svg_element::ClipPath::new()
        .set("id", id)
        .add(svg_element::Path::new().set("d", data))
}

fn clipped_group(id: &str) -> svg_element::Group {
    svg_element::Group::new().set("clip-path", format!("url(#{id})"))
}

fn definitions(spec: &JerseySpec, shape: Option<PatternShape>) -> svg_element::Definitions {
    let mut defs = svg_element::Definitions::new()
        .add(clip_path(FRONT_CLIP_ID, silhouette::FRONT_BODY))
        .add(clip_path(BACK_CLIP_ID, silhouette::BACK_BODY));

    if let Some(PatternShape::Gradient { intensity }) = shape {
        defs = defs.add(pattern::gradient_definition(
            intensity,
            spec.primary(),
            spec.pattern_color(),
        ));
    }

    defs
}

fn shorts(spec: &JerseySpec) -> svg_element::Group {
    let secondary = spec.secondary().to_string();
    svg_element::Group::new()
        .add(filled(silhouette::FRONT_SHORTS, &secondary))
        .add(filled(
            silhouette::FRONT_SHORTS_DECOR,
            &spec.primary().to_string(),
        ))
        .add(filled(silhouette::BACK_SHORTS, &secondary))
        .add(outlined(
            silhouette::FRONT_SHORTS,
            OUTLINE_COLOR,
            BODY_STROKE_WIDTH,
        ))
        .add(outlined(
            silhouette::BACK_SHORTS,
            OUTLINE_COLOR,
            BODY_STROKE_WIDTH,
        ))
}

fn bodies(spec: &JerseySpec) -> svg_element::Group {
    let primary = spec.primary().to_string();
    svg_element::Group::new()
        .add(filled(silhouette::FRONT_BODY, &primary))
        .add(filled(silhouette::BACK_BODY, &primary))
}

fn pattern_layer(
    spec: &JerseySpec,
    shape: PatternShape,
    clip_id: &str,
    center_x: f32,
) -> svg_element::Group {
    pattern::render(shape, spec.pattern_color(), (center_x, BODY_CENTER_Y))
        .into_iter()
        .fold(clipped_group(clip_id).set("class", "pattern"), |group, node| {
            group.add(node)
        })
}

fn trims_and_outlines(spec: &JerseySpec) -> svg_element::Group {
    let tertiary = spec.tertiary().to_string();
    let secondary = spec.secondary().to_string();

    let mut group = svg_element::Group::new();
    for trim in silhouette::TRIMS {
        group = group.add(filled(trim, &tertiary));
    }

    group = group
        .add(outlined(
            silhouette::FRONT_BODY,
            OUTLINE_COLOR,
            BODY_STROKE_WIDTH,
        ))
        .add(outlined(
            silhouette::BACK_BODY,
            OUTLINE_COLOR,
            BODY_STROKE_WIDTH,
        ));
    for trim in silhouette::TRIMS {
        group = group.add(outlined(trim, OUTLINE_COLOR, TRIM_STROKE_WIDTH));
    }

    for collar in [silhouette::FRONT_COLLAR, silhouette::BACK_COLLAR] {
        group = group.add(
            svg_element::Path::new()
                .set("d", collar)
                .set("fill", "white")
                .set("stroke", secondary.as_str())
                .set("stroke-width", TRIM_STROKE_WIDTH),
        );
    }

    group
}

fn add_labels(
    mut group: svg_element::Group,
    labels: &[Label<'_>],
    spec: &JerseySpec,
) -> svg_element::Group {
    for label in labels {
        if let Some(text) = label.render(spec.font(), spec.tertiary()) {
            group = group.add(text);
        }
    }
    group
}

fn front_text(spec: &JerseySpec) -> svg_element::Group {
    let logo = svg_element::Path::new()
        .set("d", silhouette::LOGO)
        .set("transform", silhouette::LOGO_TRANSFORM)
        .set("fill", "#ffffff");

    let sponsor = Label::new(spec.sponsor(), FRONT_CENTER_X, 125.0, spec.sponsor_size());
    add_labels(clipped_group(FRONT_CLIP_ID).add(logo), &[sponsor], spec)
}

fn back_text(spec: &JerseySpec, number: &str) -> svg_element::Group {
    let labels = [
        Label::new(spec.sponsor(), BACK_CENTER_X, 45.0, BACK_SPONSOR_SIZE),
        Label::new(spec.player(), BACK_CENTER_X, 85.0, spec.player_size())
            .with_letter_spacing(PLAYER_LETTER_SPACING),
        Label::new(number, BACK_CENTER_X, 155.0, spec.number_size()),
        Label::new(spec.team(), BACK_CENTER_X, 190.0, spec.team_size()),
    ];
    add_labels(clipped_group(BACK_CLIP_ID), &labels, spec)
}

fn debug_overlay() -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .set("fill", "none")
        .set("stroke", "magenta")
        .set("stroke-dasharray", "4,4")
}

/// Render a validated design to a standalone SVG document.
///
/// # Examples
///
/// ```
/// # use jersey::{export::svg::render, options::RenderOptions};
/// let spec = jersey_parser::compile(
///     "jersey { primary: #036; secondary: #fc0; tertiary: #000; }",
/// )
/// .unwrap();
///
/// let svg = render(&spec, &RenderOptions::default());
/// assert!(svg.starts_with("<?xml"));
/// assert!(svg.contains("#003366"));
/// ```
pub fn render(spec: &JerseySpec, options: &RenderOptions) -> String {
    let shape = spec.pattern().and_then(|pattern| pattern.shape());
    debug!(shape:?; "Rendering jersey");

    let mut document = Document::new()
        .set("viewBox", (0, 0, CANVAS_WIDTH, CANVAS_HEIGHT))
        .set("width", CANVAS_WIDTH)
        .set("height", CANVAS_HEIGHT)
        .add(svg_element::Title::new(format!("{} jersey", spec.team())))
        .add(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", CANVAS_WIDTH)
                .set("height", CANVAS_HEIGHT)
                .set("fill", "#fff"),
        )
        .add(definitions(spec, shape));

    if options.show_debug() {
        document = document.add(debug_overlay());
    }

    let number = spec.number().to_string();
    let mut jersey = svg_element::Group::new()
        .set("id", "jersey")
        .add(shorts(spec))
        .add(bodies(spec));

    if let Some(shape) = shape {
        jersey = jersey
            .add(pattern_layer(spec, shape, FRONT_CLIP_ID, FRONT_CENTER_X))
            .add(pattern_layer(spec, shape, BACK_CLIP_ID, BACK_CENTER_X));
    }

    jersey = jersey
        .add(trims_and_outlines(spec))
        .add(front_text(spec))
        .add(back_text(spec, &number));

    if let Some(caption) = Label::new(CAPTION, CANVAS_WIDTH / 2.0, 336.0, CAPTION_SIZE)
        .with_weight("normal")
        .render(spec.font(), CAPTION_COLOR)
    {
        jersey = jersey.add(caption);
    }

    let output = format!("{XML_HEADER}\n{}\n", document.add(jersey));
    trace!(bytes = output.len(); "Rendered document");

    output
}
