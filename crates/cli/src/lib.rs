//! Command-line entry points for the career roadmap generator.

pub mod cli;
pub mod profile;
pub mod report;
pub mod roadmap;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use cli::{Cli, Commands, OutputFormat};
use ridgeline_catalog::{role_catalog, CandidateProfile};
use ridgeline_certs::{certification_roi, recommend_certifications};
use ridgeline_gaps::{analyze_skills_gap, skill_development_recommendations};
use ridgeline_paths::generate_learning_paths;
use ridgeline_timeline::{generate_career_timeline, generate_milestones};
use roadmap::build_roadmap;

#[derive(Serialize)]
struct AnalysisReport<'a> {
    analysis: &'a ridgeline_gaps::GapAnalysis,
    recommendations: &'a [String],
}

#[derive(Serialize)]
struct TimelineReport<'a> {
    timeline: &'a ridgeline_timeline::CareerTimeline,
    milestones: &'a [ridgeline_timeline::Milestone],
}

#[derive(Serialize)]
struct CertsReport<'a> {
    certifications: &'a [ridgeline_certs::CertificationRecommendation],
    roi: &'a ridgeline_certs::RoiEstimate,
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn load_validated(path: &Path, role: Option<&str>) -> Result<(CandidateProfile, String)> {
    let profile = profile::load_profile(path)?;
    let target = profile::validate_profile(&profile, role)?;
    Ok((profile, target))
}

/// Parse arguments and run the requested command.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Roles { format } => {
            let roles = role_catalog();
            emit(format, &roles, || report::render_roles(roles))?;
        }
        Commands::Analyze {
            profile,
            role,
            format,
        } => {
            let (profile, target) = load_validated(&profile, role.as_deref())?;
            let analysis = analyze_skills_gap(&profile, &target);
            let recommendations = skill_development_recommendations(&analysis);
            tracing::info!(role = %analysis.role_title, gaps = analysis.gaps.len(), "analyzed profile");
            emit(
                format,
                &AnalysisReport {
                    analysis: &analysis,
                    recommendations: &recommendations,
                },
                || report::render_analysis(&analysis, &recommendations),
            )?;
        }
        Commands::Paths {
            profile,
            role,
            format,
        } => {
            let (profile, target) = load_validated(&profile, role.as_deref())?;
            let analysis = analyze_skills_gap(&profile, &target);
            let paths = generate_learning_paths(&analysis.gaps, &profile);
            emit(format, &paths, || report::render_paths(&paths))?;
        }
        Commands::Timeline {
            profile,
            role,
            format,
        } => {
            let (profile, target) = load_validated(&profile, role.as_deref())?;
            let analysis = analyze_skills_gap(&profile, &target);
            let timeline = generate_career_timeline(&analysis, &profile, &target);
            let milestones = generate_milestones(&timeline, &analysis);
            emit(
                format,
                &TimelineReport {
                    timeline: &timeline,
                    milestones: &milestones,
                },
                || report::render_timeline(&timeline, &milestones),
            )?;
        }
        Commands::Certs {
            profile,
            role,
            format,
        } => {
            let (profile, target) = load_validated(&profile, role.as_deref())?;
            let analysis = analyze_skills_gap(&profile, &target);
            let certifications = recommend_certifications(&analysis, &profile, &target);
            let roi = certification_roi(&certifications);
            emit(
                format,
                &CertsReport {
                    certifications: &certifications,
                    roi: &roi,
                },
                || report::render_certs(&certifications, &roi),
            )?;
        }
        Commands::Roadmap {
            profile,
            role,
            format,
        } => {
            let (profile, target) = load_validated(&profile, role.as_deref())?;
            let roadmap = build_roadmap(&profile, &target);
            tracing::info!(role = %roadmap.role_title, months = roadmap.timeline.total_months, "built roadmap");
            emit(format, &roadmap, || report::render_roadmap(&roadmap))?;
        }
    }
    Ok(())
}
