use crate::common::gridline_offsets;
use crate::plateplot::{HeatPanel, PlatePlot, TextBlock};
use std::path::Path;

const PANEL_SIZE: f64 = 480.0;
const SCALE_SPACE: f64 = 110.0;
const PAD: f64 = 24.0;
const TITLE_HEIGHT: f64 = 56.0;
const PANEL_TITLE_HEIGHT: f64 = 34.0;
const TEXT_GAP: f64 = 48.0;
const LINE_HEIGHT: f64 = 22.0;
const MIN_SLOTS: usize = 3;

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    std::fs::write(path, svg_content).map_err(|e| e.to_string())
}

pub fn generate_string(plot: &PlatePlot) -> String {
    let mut generator = Generator::new();
    generator.generate(plot);
    generator.svg
}

struct Generator {
    svg: String,
}

impl Generator {
    fn new() -> Self {
        Self { svg: String::new() }
    }

    fn generate(&mut self, plot: &PlatePlot) {
        let slots = plot.panels.len().max(MIN_SLOTS);
        let slot_width = PANEL_SIZE + SCALE_SPACE + PAD;
        let width = slots as f64 * slot_width + PAD;

        let panels_top = PAD + TITLE_HEIGHT + PANEL_TITLE_HEIGHT;
        let panels_height = plot
            .panels
            .iter()
            .map(|panel| panel_dims(panel).1)
            .fold(0.0, f64::max);
        let text_top = panels_top + panels_height + TEXT_GAP;
        let max_lines = plot
            .text_blocks
            .iter()
            .map(|block| block.lines.len())
            .max()
            .unwrap_or(0);
        let height = text_top + max_lines as f64 * LINE_HEIGHT + PAD;

        self.start_svg(width, height);
        self.add_background();
        self.add_scale_gradient();
        self.add_text(
            (width / 2.0, PAD + 26.0),
            &plot.title,
            22.0,
            r#"text-anchor="middle" font-weight="bold""#,
        );

        for (index, panel) in plot.panels.iter().enumerate() {
            let x = PAD + index as f64 * slot_width;
            self.plot_panel(panel, (x, panels_top));
        }

        let block_width = (width - 2.0 * PAD) / plot.text_blocks.len().max(1) as f64;
        for (index, block) in plot.text_blocks.iter().enumerate() {
            let x = PAD + index as f64 * block_width;
            self.plot_text_block(block, (x, text_top));
        }

        self.end_svg();
    }

    fn plot_panel(&mut self, panel: &HeatPanel, origin: (f64, f64)) {
        let (x0, y0) = origin;
        let cell = cell_size(panel);
        let (width, height) = panel_dims(panel);

        self.add_text(
            (x0 + width / 2.0, y0 - 10.0),
            &panel.title,
            18.0,
            r#"text-anchor="middle""#,
        );

        let max_value = panel.max_value();
        for (row_index, row) in panel.values.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                if value.is_nan() || *value <= 0.0 || max_value <= 0.0 {
                    continue;
                }
                let x = x0 + col_index as f64 * cell;
                let y = y0 + row_index as f64 * cell;
                let color = gray_shade(*value / max_value);
                self.add_rect((x, y), (cell, cell), &color);
            }
        }

        for offset in gridline_offsets(panel.ncols(), panel.cols_per_plate) {
            let x = x0 + offset as f64 * cell;
            self.add_line((x, y0), (x, y0 + height));
        }
        for offset in gridline_offsets(panel.nrows(), panel.rows_per_plate) {
            let y = y0 + offset as f64 * cell;
            self.add_line((x0, y), (x0 + width, y));
        }
        self.add_outline((x0, y0), (width, height));

        if let Some(label) = &panel.scale_label {
            self.plot_scale((x0 + width + 16.0, y0), height, max_value, label);
        }
    }

    fn plot_scale(&mut self, origin: (f64, f64), panel_height: f64, max_value: f64, label: &str) {
        let (x, y) = origin;
        let bar_height = panel_height * 0.4;
        let bar_width = 16.0;
        let bar_y = y + (panel_height - bar_height) / 2.0;
        self.svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#scale)\" stroke=\"#000000\" stroke-width=\"1\" />\n",
            x, bar_y, bar_width, bar_height
        ));
        let tick_x = x + bar_width + 4.0;
        self.add_text(
            (tick_x, bar_y + 5.0),
            &format!("{:.1}", max_value),
            12.0,
            "",
        );
        self.add_text((tick_x, bar_y + bar_height + 4.0), "0", 12.0, "");

        let label_x = tick_x + 40.0;
        let label_y = bar_y + bar_height / 2.0;
        self.svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"12px\" text-anchor=\"middle\" transform=\"rotate(-90 {} {})\">{}</text>\n",
            label_x,
            label_y,
            label_x,
            label_y,
            escape(label)
        ));
    }

    fn plot_text_block(&mut self, block: &TextBlock, origin: (f64, f64)) {
        let (x, y) = origin;
        for (index, line) in block.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let line_y = y + index as f64 * LINE_HEIGHT;
            self.add_text((x, line_y), line, 16.0, "");
        }
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &str) {
        let (x, y) = pos;
        let (w, h) = dims;
        self.svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0\" />\n",
            x, y, w, h, color, color
        ));
    }

    fn add_line(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.svg.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#7F7F7F\" stroke-width=\"1\" />\n",
            from.0, from.1, to.0, to.1
        ));
    }

    fn add_outline(&mut self, pos: (f64, f64), dims: (f64, f64)) {
        self.svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" stroke=\"#000000\" stroke-width=\"1.5\" fill=\"none\" />\n",
            pos.0, pos.1, dims.0, dims.1
        ));
    }

    fn add_text(&mut self, pos: (f64, f64), text: &str, size: f64, extra: &str) {
        self.svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}px\" {}>{}</text>\n",
            pos.0,
            pos.1,
            size,
            extra,
            escape(text)
        ));
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        self.svg.push_str("<?xml version=\"1.0\"?>\n");
        self.svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{}\" height=\"{}\">\n",
            width, height
        ));
    }

    fn end_svg(&mut self) {
        self.svg.push_str("</svg>\n");
    }

    fn add_background(&mut self) {
        self.svg
            .push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    }

    fn add_scale_gradient(&mut self) {
        self.svg.push_str(concat!(
            "<defs><linearGradient id=\"scale\" x1=\"0\" y1=\"1\" x2=\"0\" y2=\"0\">",
            "<stop offset=\"0\" stop-color=\"#FFFFFF\"/>",
            "<stop offset=\"1\" stop-color=\"#000000\"/>",
            "</linearGradient></defs>\n"
        ));
    }
}

fn cell_size(panel: &HeatPanel) -> f64 {
    let ncols = panel.ncols().max(1) as f64;
    let nrows = panel.nrows().max(1) as f64;
    (PANEL_SIZE / ncols).min(PANEL_SIZE / nrows)
}

fn panel_dims(panel: &HeatPanel) -> (f64, f64) {
    let cell = cell_size(panel);
    (panel.ncols() as f64 * cell, panel.nrows() as f64 * cell)
}

// 0.0 is white, 1.0 is black
fn gray_shade(fraction: f64) -> String {
    let level = (255.0 * (1.0 - fraction.clamp(0.0, 1.0))).round() as u8;
    format!("#{:02X}{:02X}{:02X}", level, level, level)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
