// SPDX-License-Identifier: MIT

//! PDF export: the static rendering surface.
//!
//! Consumes the same scene as the interactive canvas — only the page-space
//! [`PageMap`] and the translation of draw commands into `printpdf` calls
//! live here. One landscape US-letter page with a legend band at the bottom.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::geom::label::text_extent;
use crate::geom::{DevPoint, DevRect};
use crate::layout::LayoutData;
use crate::render::scene::{self, SceneOptions};
use crate::render::{
    palette, DrawCmd, PageMap, Rgba, TextAlign, PAGE_HEIGHT_PT, PAGE_MARGIN_PT, PAGE_WIDTH_PT,
};

const PT_TO_MM: f32 = 0.352_777_78;

fn mm(pt: f32) -> Mm {
    Mm(pt * PT_TO_MM)
}

fn pdf_color(c: Rgba) -> Color {
    Color::Rgb(Rgb::new(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
        None,
    ))
}

/// Export the layout to a single-page PDF at `path`. Synchronous; blocks
/// until the file is written.
pub fn export_to_pdf(layout: &LayoutData, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    layout.validate()?;

    let map = PageMap::letter_landscape(&layout.boundary);
    let scene = scene::build(layout, &map, &SceneOptions::default());
    for v in &scene.violations {
        log::warn!(
            "exporting layout with {} {:.1} ft past the {} boundary",
            v.kind.display_name(),
            v.overshoot_ft,
            v.edge.label()
        );
    }

    let (doc, page, layer) = PdfDocument::new(
        "Property Layout",
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    for cmd in &scene.cmds {
        draw_cmd(&layer, &font, cmd);
    }
    draw_legend(&layer, &font);

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    log::info!("PDF exported to {}", path.display());
    Ok(())
}

fn dash_pattern(on: bool) -> LineDashPattern {
    LineDashPattern {
        offset: 0,
        dash_1: if on { Some(4) } else { None },
        gap_1: if on { Some(3) } else { None },
        dash_2: None,
        gap_2: None,
        dash_3: None,
        gap_3: None,
    }
}

fn draw_cmd(layer: &PdfLayerReference, font: &IndirectFontRef, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Line {
            a,
            b,
            width,
            color,
            dashed,
        } => {
            layer.set_outline_color(pdf_color(*color));
            layer.set_outline_thickness(*width);
            layer.set_line_dash_pattern(dash_pattern(*dashed));
            layer.add_line(Line {
                points: vec![
                    (Point::new(mm(a.x), mm(a.y)), false),
                    (Point::new(mm(b.x), mm(b.y)), false),
                ],
                is_closed: false,
            });
            if *dashed {
                layer.set_line_dash_pattern(dash_pattern(false));
            }
        }
        DrawCmd::Rect { rect, fill, stroke } => draw_rect(layer, rect, *fill, *stroke),
        DrawCmd::Circle {
            center,
            radius,
            fill,
        } => draw_circle(layer, *center, *radius, *fill),
        DrawCmd::Text {
            pos,
            text,
            size,
            color,
            align,
        } => draw_text(layer, font, *pos, text, *size, *color, *align),
    }
}

fn rect_ring(rect: &DevRect) -> Vec<(Point, bool)> {
    vec![
        (Point::new(mm(rect.min_x), mm(rect.min_y)), false),
        (Point::new(mm(rect.max_x), mm(rect.min_y)), false),
        (Point::new(mm(rect.max_x), mm(rect.max_y)), false),
        (Point::new(mm(rect.min_x), mm(rect.max_y)), false),
    ]
}

fn draw_rect(
    layer: &PdfLayerReference,
    rect: &DevRect,
    fill: Option<Rgba>,
    stroke: Option<(f32, Rgba)>,
) {
    if let Some((width, color)) = stroke {
        layer.set_outline_color(pdf_color(color));
        layer.set_outline_thickness(width);
    }
    if let Some(fill) = fill {
        layer.set_fill_color(pdf_color(fill));
        layer.add_polygon(Polygon {
            rings: vec![rect_ring(rect)],
            mode: if stroke.is_some() {
                PaintMode::FillStroke
            } else {
                PaintMode::Fill
            },
            winding_order: WindingOrder::NonZero,
        });
    } else if stroke.is_some() {
        layer.add_line(Line {
            points: rect_ring(rect),
            is_closed: true,
        });
    }
}

fn draw_circle(layer: &PdfLayerReference, center: DevPoint, radius: f32, fill: Rgba) {
    // printpdf has no circle primitive; a 24-gon at marker size is
    // indistinguishable on paper.
    let segments = 24;
    let ring: Vec<(Point, bool)> = (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            (
                Point::new(
                    mm(center.x + radius * angle.cos()),
                    mm(center.y + radius * angle.sin()),
                ),
                false,
            )
        })
        .collect();
    layer.set_fill_color(pdf_color(fill));
    layer.add_polygon(Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

fn draw_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    pos: DevPoint,
    text: &str,
    size: f32,
    color: Rgba,
    align: TextAlign,
) {
    let x = match align {
        TextAlign::Center => pos.x - text_extent(text, size).0 * 0.5,
        TextAlign::Left => pos.x,
    };
    // `use_text` anchors at the baseline; drop it so `pos` is a visual center.
    let y = pos.y - size * 0.35;
    layer.set_fill_color(pdf_color(color));
    layer.use_text(text, size, mm(x), mm(y), font);
}

fn draw_legend(layer: &PdfLayerReference, font: &IndirectFontRef) {
    let x = PAGE_MARGIN_PT;
    let y = PAGE_MARGIN_PT + 10.0;
    let col2 = x + 150.0;

    layer.set_fill_color(pdf_color(palette::BOUNDARY));
    layer.use_text("Legend:", 9.0, mm(x), mm(y + 28.0), font);
    layer.use_text("Blue = House", 9.0, mm(x), mm(y + 14.0), font);
    layer.use_text("Green = Well", 9.0, mm(x), mm(y), font);
    layer.use_text("Brown = Shed", 9.0, mm(col2), mm(y + 14.0), font);
    layer.use_text("Gray = Septic Tank", 9.0, mm(col2), mm(y), font);
}
