// Criterion benchmarks for Oppmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oppmatch::core::{generate_reasoning, render_opportunity, skill_overlap, weighted_score};
use oppmatch::models::{
    MatchResult, Opportunity, OpportunityCategory, ScoringWeights, UserProfile,
};

fn create_opportunity(id: usize) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: format!("Backend Engineer {}", id),
        organization: "Acme".to_string(),
        description: "Distributed systems role working across storage and APIs".to_string(),
        location: Some("Berlin".to_string()),
        category: OpportunityCategory::Job,
        url: format!("https://example.com/{}", id),
        posted_date: None,
        deadline: None,
        skills_required: vec![
            "Rust".to_string(),
            "PostgreSQL".to_string(),
            "Kubernetes".to_string(),
        ],
        compensation_range: Some("60-90k EUR".to_string()),
        experience_level: Some("Mid".to_string()),
        remote: true,
        source: "wellfound".to_string(),
        raw_data: serde_json::Value::Null,
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        user_id: "bench_user".to_string(),
        email: "bench@example.com".to_string(),
        skills: vec![
            "Rust".to_string(),
            "Python".to_string(),
            "PostgreSQL".to_string(),
            "Docker".to_string(),
        ],
        interests: vec!["backend".to_string(), "infrastructure".to_string()],
        experience_level: Some("Mid".to_string()),
        preferred_locations: vec!["Berlin".to_string()],
        remote_preference: true,
        resume_text: Some("Engineer with five years of backend experience".repeat(10)),
        created_at: None,
        updated_at: None,
    }
}

fn bench_projection(c: &mut Criterion) {
    let opportunity = create_opportunity(1);

    c.bench_function("render_opportunity", |b| {
        b.iter(|| render_opportunity(black_box(&opportunity)));
    });
}

fn bench_weighted_score(c: &mut Criterion) {
    let weights = ScoringWeights::default();

    c.bench_function("weighted_score", |b| {
        b.iter(|| {
            weighted_score(
                black_box(0.73),
                black_box(0.5),
                black_box(1.0),
                black_box(&weights),
            )
        });
    });
}

fn bench_skill_overlap(c: &mut Criterion) {
    let profile = create_profile();
    let mut group = c.benchmark_group("skill_overlap");

    for size in [5, 25, 100] {
        let required: Vec<String> = (0..size).map(|i| format!("skill-{}", i)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &required, |b, required| {
            b.iter(|| skill_overlap(black_box(&profile.skills), black_box(required)));
        });
    }

    group.finish();
}

fn bench_reasoning(c: &mut Criterion) {
    let result = MatchResult {
        opportunity: create_opportunity(1),
        user_profile: create_profile(),
        similarity_score: 0.82,
        matched_skills: vec!["rust".to_string(), "postgresql".to_string()],
        matched_interests: vec!["backend".to_string()],
        reasoning: String::new(),
    };

    c.bench_function("generate_reasoning", |b| {
        b.iter(|| generate_reasoning(black_box(&result)));
    });
}

criterion_group!(
    benches,
    bench_projection,
    bench_weighted_score,
    bench_skill_overlap,
    bench_reasoning
);
criterion_main!(benches);
