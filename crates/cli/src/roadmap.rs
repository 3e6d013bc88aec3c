//! Full roadmap assembly: every analysis stage run against one profile.

use ridgeline_catalog::CandidateProfile;
use ridgeline_certs::{
    certification_roi, recommend_certifications, CertificationRecommendation, RoiEstimate,
};
use ridgeline_gaps::{analyze_skills_gap, skill_development_recommendations, GapAnalysis};
use ridgeline_paths::{generate_learning_paths, LearningPath};
use ridgeline_timeline::{
    generate_career_timeline, generate_milestones, CareerTimeline, Milestone,
};
use serde::Serialize;

/// Every stage of the pipeline, bundled for a single report.
#[derive(Debug, Clone, Serialize)]
pub struct Roadmap {
    pub role_title: String,
    pub analysis: GapAnalysis,
    pub recommendations: Vec<String>,
    pub learning_paths: Vec<LearningPath>,
    pub timeline: CareerTimeline,
    pub milestones: Vec<Milestone>,
    pub certifications: Vec<CertificationRecommendation>,
    pub roi: RoiEstimate,
}

pub fn build_roadmap(profile: &CandidateProfile, target_role: &str) -> Roadmap {
    let analysis = analyze_skills_gap(profile, target_role);
    let recommendations = skill_development_recommendations(&analysis);
    let learning_paths = generate_learning_paths(&analysis.gaps, profile);
    let timeline = generate_career_timeline(&analysis, profile, target_role);
    let milestones = generate_milestones(&timeline, &analysis);
    let certifications = recommend_certifications(&analysis, profile, target_role);
    let roi = certification_roi(&certifications);
    Roadmap {
        role_title: analysis.role_title.clone(),
        analysis,
        recommendations,
        learning_paths,
        timeline,
        milestones,
        certifications,
        roi,
    }
}
