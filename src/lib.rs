pub mod cli;
pub mod commands;
pub mod figure;
pub mod locus;
pub mod plate;
pub mod source;
pub mod stats;
pub mod utils;
