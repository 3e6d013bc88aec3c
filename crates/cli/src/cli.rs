use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `ridgeline` application.
#[derive(Debug, Parser)]
#[command(
    name = "ridgeline",
    about = "Career roadmap generator: gap analysis, learning paths, timelines, certifications"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `ridgeline` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lists known roles with experience and salary bands.
    Roles {
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Analyzes skill gaps for a profile against its target role.
    Analyze {
        /// Path to a candidate profile JSON file.
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Target role override (defaults to `target_role` from the profile).
        #[arg(long)]
        role: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generates themed learning paths for the identified gaps.
    Paths {
        /// Path to a candidate profile JSON file.
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Target role override (defaults to `target_role` from the profile).
        #[arg(long)]
        role: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generates the phased timeline and milestones.
    Timeline {
        /// Path to a candidate profile JSON file.
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Target role override (defaults to `target_role` from the profile).
        #[arg(long)]
        role: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Recommends certifications with an ROI estimate.
    Certs {
        /// Path to a candidate profile JSON file.
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Target role override (defaults to `target_role` from the profile).
        #[arg(long)]
        role: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Generates the complete roadmap (analysis, paths, timeline, certifications).
    Roadmap {
        /// Path to a candidate profile JSON file.
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Target role override (defaults to `target_role` from the profile).
        #[arg(long)]
        role: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}
