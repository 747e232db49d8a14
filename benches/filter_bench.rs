//! Benchmarks for topic and resource filtering
//!
//! Run with: cargo bench

use bloom::forum::{filter_topics, CategoryFilter, ForumTopic, TopicCategory};
use bloom::resources::{Resource, ResourceDirectory, ResourceFilter, ResourceType};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_topics(count: usize) -> Vec<ForumTopic> {
    let categories = TopicCategory::all();
    (0..count)
        .map(|i| {
            ForumTopic::new(
                i as u32,
                format!("Topic {} about sleep and stress", i),
                format!("Peer discussion number {} on coping strategies", i),
                categories[i % categories.len()],
            )
            .posts(i as u32 % 50)
        })
        .collect()
}

fn create_directory(count: usize) -> ResourceDirectory {
    let kinds = ResourceType::all();
    let tags = ["anxiety", "sleep", "mindfulness", "student-life", "resilience"];
    let resources = (0..count)
        .map(|i| {
            Resource::new(
                i as u32,
                format!("Resource {}", i),
                format!("Practical guide number {} for everyday wellbeing", i),
                kinds[i % kinds.len()],
            )
            .category(tags[i % tags.len()])
            .category(tags[(i + 2) % tags.len()])
            .with_likes(i as u32 % 100)
        })
        .collect();
    ResourceDirectory::new(resources)
}

fn bench_topics(c: &mut Criterion) {
    let mut group = c.benchmark_group("topics");

    for size in [100, 1000, 10000] {
        let topics = create_topics(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("search_all_{}", size), |b| {
            b.iter(|| filter_topics(black_box(&topics), black_box("SLEEP"), CategoryFilter::All).len())
        });

        group.bench_function(format!("search_category_{}", size), |b| {
            let filter = CategoryFilter::Only(TopicCategory::Anxiety);
            b.iter(|| filter_topics(black_box(&topics), black_box("stress"), filter).len())
        });
    }

    group.finish();
}

fn bench_resources(c: &mut Criterion) {
    let mut group = c.benchmark_group("resources");

    for size in [100, 1000, 10000] {
        let directory = create_directory(size);
        group.throughput(Throughput::Elements(size as u64));

        let empty = ResourceFilter::new();
        group.bench_function(format!("no_filter_{}", size), |b| {
            b.iter(|| directory.filter(black_box(&empty)).len())
        });

        let faceted = ResourceFilter::new()
            .search("guide")
            .with_type(ResourceType::Article)
            .with_type(ResourceType::Podcast)
            .with_category("sleep");
        group.bench_function(format!("faceted_{}", size), |b| {
            b.iter(|| directory.filter(black_box(&faceted)).len())
        });

        group.bench_function(format!("all_categories_{}", size), |b| {
            b.iter(|| directory.all_categories().len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_topics, bench_resources);
criterion_main!(benches);
