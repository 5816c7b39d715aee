use crate::figure::ColorMode;
use crate::locus::LocusSet;
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="spatials",
          version=&**FULL_VERSION,
          about="Plate spatials and detection efficiencies for matrix experiments",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) 2011-{}
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Immunoglobulin spatials (heavy, kappa, lambda)")]
    Ig(SpatialsArgs),
    #[clap(about = "T-cell receptor spatials (beta, alpha)")]
    Tcr(SpatialsArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ig(_) => "ig",
            Command::Tcr(_) => "tcr",
        }
    }

    pub fn locus_set(&self) -> LocusSet {
        match self {
            Command::Ig(_) => LocusSet::Immunoglobulin,
            Command::Tcr(_) => LocusSet::Receptor,
        }
    }

    pub fn args(&self) -> &SpatialsArgs {
        match self {
            Command::Ig(args) | Command::Tcr(args) => args,
        }
    }
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct SpatialsArgs {
    #[clap(help = "Experiment identifier")]
    #[clap(value_name = "EXPERIMENT_ID")]
    #[arg(value_parser = check_nonempty)]
    pub experiment_id: String,

    #[clap(help = "Sequencing run name, used for the output location")]
    #[clap(value_name = "RUN_NAME")]
    #[arg(value_parser = check_nonempty)]
    pub run_name: String,

    #[clap(help = "Panel coloring: '' for presence, gs for read counts, gs_log for log10 read counts")]
    #[clap(value_name = "COLOR_MODE")]
    #[arg(value_parser = parse_color_mode)]
    pub color_mode: Option<ColorMode>,

    #[clap(short = 'c')]
    #[clap(long = "config")]
    #[clap(help = "Configuration file [default: ./config or ../config]")]
    #[clap(value_name = "CONFIG")]
    #[arg(value_parser = check_file_exists)]
    pub config_path: Option<PathBuf>,

    #[clap(short = 'r')]
    #[clap(long = "records")]
    #[clap(help = "Consensus table export [default: <database>.consensus.tsv next to the config]")]
    #[clap(value_name = "RECORDS")]
    #[arg(value_parser = check_file_exists)]
    pub records_path: Option<PathBuf>,

    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory receiving <RUN_NAME>/<EXPERIMENT_ID>_<RUN_NAME>_spatials.<FORMAT>")]
    #[clap(value_name = "OUTPUT_DIR")]
    #[clap(default_value = "../quality_control")]
    pub output_dir: PathBuf,

    #[clap(long = "format")]
    #[clap(help = "Figure format (pdf, png or svg)")]
    #[clap(value_name = "FORMAT")]
    #[clap(default_value = "pdf")]
    #[arg(value_parser = check_image_format)]
    pub format: String,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "reject-duplicates")]
    #[clap(help = "Fail when two records claim the same well of a locus")]
    pub reject_duplicates: bool,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "skip-malformed")]
    #[clap(help = "Skip records with undecodable well tags instead of failing")]
    pub skip_malformed: bool,
}

impl SpatialsArgs {
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode.unwrap_or_default()
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    s.parse()
}

fn check_image_format(s: &str) -> Result<String, String> {
    match s {
        "svg" | "png" | "pdf" => Ok(s.to_string()),
        _ => Err("Figure format must be svg, png, or pdf".to_string()),
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_nonempty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("Value cannot be an empty string".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcr_with_defaults() {
        let cli = Cli::try_parse_from(["spatials", "tcr", "exp1", "run1"]).unwrap();
        assert_eq!(cli.command.name(), "tcr");
        assert_eq!(cli.command.locus_set(), LocusSet::Receptor);
        let args = cli.command.args();
        assert_eq!(args.experiment_id, "exp1");
        assert_eq!(args.color_mode(), ColorMode::Presence);
        assert_eq!(args.format, "pdf");
        assert_eq!(args.output_dir, PathBuf::from("../quality_control"));
        assert!(!args.reject_duplicates);
    }

    #[test]
    fn ig_with_color_mode_and_flags() {
        let cli = Cli::try_parse_from([
            "spatials",
            "-vv",
            "ig",
            "exp2",
            "run2",
            "gs_log",
            "--format",
            "svg",
            "--skip-malformed",
        ])
        .unwrap();
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.command.locus_set(), LocusSet::Immunoglobulin);
        let args = cli.command.args();
        assert_eq!(args.color_mode(), ColorMode::LogMagnitude);
        assert_eq!(args.format, "svg");
        assert!(args.skip_malformed);
    }

    #[test]
    fn empty_color_mode_is_presence() {
        let cli = Cli::try_parse_from(["spatials", "tcr", "exp1", "run1", ""]).unwrap();
        assert_eq!(cli.command.args().color_mode, Some(ColorMode::Presence));
        assert_eq!(cli.command.args().color_mode(), ColorMode::Presence);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Cli::try_parse_from(["spatials", "tcr", "exp", "run", "rainbow"]).is_err());
        assert!(Cli::try_parse_from(["spatials", "tcr", "exp", "run", "--format", "jpg"]).is_err());
        assert!(Cli::try_parse_from(["spatials", "tcr", "exp"]).is_err());
        assert!(Cli::try_parse_from([
            "spatials",
            "tcr",
            "exp",
            "run",
            "--config",
            "/nonexistent/config"
        ])
        .is_err());
    }
}
