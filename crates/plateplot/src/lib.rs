/*!
This crate provides functionality to generate "plate plots": side-by-side
heat maps of well matrices, each partitioned into physical plates by
gridlines, optionally accompanied by a colour scale, and annotated with
blocks of free text below the panels and a figure title above them. The
crate supports rendering of plate plots as SVG, PNG, and PDF images.

Plate plots are useful for inspecting where on a sorting matrix a signal
was detected.
*/

mod common;
mod image;
mod pdf;
mod plateplot;
mod png;
mod svg;

pub use common::gridline_offsets;
pub use image::generate as generate_image;
pub use plateplot::{HeatPanel, PlatePlot, TextBlock};
pub use svg::generate_string as generate_svg_string;
