use std::path::Path;

use anyhow::Result;

use crate::config::RenderConfig;
use crate::field::MarkerAnchor;
use crate::layout::Layout;
use crate::selection::FieldState;
use crate::theme::Theme;

/// Renders the pitch and one marker per placement. Percentage coordinates
/// from the layout are resolved against the configured surface size here
/// and nowhere else.
pub fn render_svg(
    layout: &Layout,
    state: &FieldState,
    theme: &Theme,
    config: &RenderConfig,
) -> String {
    let width = config.width.max(200.0);
    let height = config.height.max(200.0);
    let radius = config.marker_radius;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.background
    ));

    push_pitch(&mut svg, width, height, theme);

    for placement in &layout.placements {
        let highlighted = state.is_highlighted(&placement.player);
        let x = placement.coord.left / 100.0 * width;
        let y = placement.coord.top / 100.0 * height;
        // CenterX anchors on the marker's top edge; Center on its middle.
        let center_y = match placement.coord.anchor {
            MarkerAnchor::CenterX => y + radius,
            MarkerAnchor::Center => y,
        };

        let (fill, border, text, subtext) = if highlighted {
            (
                theme.highlight_fill.as_str(),
                theme.highlight_ring.as_str(),
                theme.highlight_text.as_str(),
                theme.highlight_text.as_str(),
            )
        } else {
            (
                theme.marker_fill.as_str(),
                theme.marker_border.as_str(),
                theme.marker_text.as_str(),
                theme.marker_subtext.as_str(),
            )
        };

        if highlighted {
            svg.push_str(&format!(
                "<circle cx=\"{x:.2}\" cy=\"{center_y:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\"/>",
                radius + 4.0,
                theme.highlight_ring
            ));
        }
        svg.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{center_y:.2}\" r=\"{radius:.2}\" fill=\"{fill}\" stroke=\"{border}\" stroke-width=\"1.6\"/>",
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{text}\">{}</text>",
            center_y + theme.font_size * 0.35,
            theme.font_family,
            theme.font_size,
            placement.player.jersey_number
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{subtext}\">{}</text>",
            center_y + radius + theme.font_size * 1.1,
            theme.font_family,
            theme.font_size * 0.9,
            escape_xml(&placement.player.name)
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Pitch markings: outline, halfway line, centre circle, penalty areas.
/// Attack runs towards the top of the surface, matching the slot tables.
fn push_pitch(svg: &mut String, width: f32, height: f32, theme: &Theme) {
    let margin_x = width * 0.04;
    let margin_y = height * 0.03;
    let pitch_w = width - margin_x * 2.0;
    let pitch_h = height - margin_y * 2.0;

    svg.push_str(&format!(
        "<rect x=\"{margin_x:.2}\" y=\"{margin_y:.2}\" width=\"{pitch_w:.2}\" height=\"{pitch_h:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
        theme.pitch_fill, theme.pitch_line
    ));

    let mid_y = height / 2.0;
    svg.push_str(&format!(
        "<line x1=\"{margin_x:.2}\" y1=\"{mid_y:.2}\" x2=\"{:.2}\" y2=\"{mid_y:.2}\" stroke=\"{}\" stroke-width=\"2\"/>",
        margin_x + pitch_w,
        theme.pitch_line
    ));
    svg.push_str(&format!(
        "<circle cx=\"{:.2}\" cy=\"{mid_y:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        width / 2.0,
        pitch_w * 0.12,
        theme.pitch_line
    ));

    let box_w = pitch_w * 0.55;
    let box_h = pitch_h * 0.13;
    let box_x = (width - box_w) / 2.0;
    svg.push_str(&format!(
        "<rect x=\"{box_x:.2}\" y=\"{margin_y:.2}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        theme.pitch_line
    ));
    svg.push_str(&format!(
        "<rect x=\"{box_x:.2}\" y=\"{:.2}\" width=\"{box_w:.2}\" height=\"{box_h:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>",
        margin_y + pitch_h - box_h,
        theme.pitch_line
    ));
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, svg)?,
        None => println!("{svg}"),
    }
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
