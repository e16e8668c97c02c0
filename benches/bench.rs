// Criterion benchmarks for Padel Engine

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use padel_engine::core::{
    eligibility::{classify, rank_categories},
    rating::estimate_rating,
    selection::SelectionSet,
    Engine,
};
use padel_engine::models::{CategoryBand, ExperienceAssessment, PlayingFrequency, TournamentCategory};
use padel_engine::services::RatingCache;

fn create_assessment(id: usize) -> ExperienceAssessment {
    ExperienceAssessment {
        years_playing: Some((id % 12) as u32),
        previous_sports: vec![if id % 2 == 0 { "Tennis" } else { "running" }.to_string()],
        self_assessed_skill: Some((id % 5 + 1) as u8),
        playing_frequency: Some(PlayingFrequency::Weekly),
        competitive_experience: id % 3 == 0,
        tournament_participation: id % 4 == 0,
        coaching_experience: false,
    }
}

fn create_categories(count: usize) -> Vec<TournamentCategory> {
    (0..count)
        .map(|i| {
            let min = 1.0 + (i as f64 * 0.5) % 4.0;
            TournamentCategory {
                name: format!("Category {}", i),
                band: CategoryBand::new(min, min + 0.5),
            }
        })
        .collect()
}

fn bench_estimate_rating(c: &mut Criterion) {
    let experience = create_assessment(6);
    c.bench_function("estimate_rating", |b| {
        b.iter(|| estimate_rating(black_box(&experience)));
    });
}

fn bench_rating_cache(c: &mut Criterion) {
    let cache = RatingCache::new(Engine::with_default_params(), 1000, 60);
    let experience = create_assessment(6);
    tokio_test::block_on(cache.estimate(&experience));

    c.bench_function("rating_cache_hit", |b| {
        b.iter(|| tokio_test::block_on(cache.estimate(black_box(&experience))));
    });
}

fn bench_classify(c: &mut Criterion) {
    let band = CategoryBand::new(2.0, 3.0);
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(1.85), black_box(&band), black_box(0.2)));
    });
}

fn bench_rank_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_categories");

    for count in [4, 16, 64].iter() {
        let categories = create_categories(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| rank_categories(black_box(2.7), black_box(&categories), 0.2));
        });
    }

    group.finish();
}

fn bench_slots(c: &mut Criterion) {
    let engine = Engine::with_default_params();
    let start = NaiveDate::from_ymd_opt(2025, 7, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 7, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let generator = engine.slot_generator(start, end);

    c.bench_function("slot_grid_31_days", |b| {
        b.iter(|| black_box(&generator).grid());
    });

    let days = generator.days();
    c.bench_function("select_all_days_of_month", |b| {
        b.iter(|| {
            let mut selection = SelectionSet::new();
            for day in &days {
                selection.select_all_for_day(*day, &generator);
            }
            black_box(selection)
        });
    });
}

criterion_group!(
    benches,
    bench_estimate_rating,
    bench_rating_cache,
    bench_classify,
    bench_rank_categories,
    bench_slots
);

criterion_main!(benches);
