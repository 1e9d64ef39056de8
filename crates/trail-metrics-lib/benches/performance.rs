//! Performance benchmarks for trail-metrics-lib
//!
//! Run with: cargo bench --package trail-metrics-lib

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use geo::Point;
use gpx::{Gpx, TrackSegment, Waypoint};
use trail_metrics_lib::{Track, TrackSummary};

/// Generate a realistic track with the specified number of points.
fn generate_track(num_points: usize) -> Track {
    let mut gpx = Gpx::default();
    let mut track = gpx::Track::default();
    let mut segment = TrackSegment::default();

    for i in 0..num_points {
        let t = i as f64 / num_points as f64;
        let lat = 39.97 + t * 0.1 + (t * 50.0).sin() * 0.001;
        let lon = -0.51 + t * 0.1 + (t * 30.0).cos() * 0.001;
        let mut waypoint = Waypoint::new(Point::new(lon, lat));
        waypoint.elevation = Some(650.0 + (t * 20.0).sin() * 120.0);
        segment.points.push(waypoint);
    }

    track.segments.push(segment);
    gpx.tracks.push(track);
    Track::from_gpx(gpx)
}

fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for &num_points in &[1_000usize, 10_000, 100_000] {
        let track = generate_track(num_points);
        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_function(format!("{}_points", num_points), |b| {
            b.iter(|| TrackSummary::new(&track).unwrap());
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(20);

    // Serialize a 10k-point track once, then benchmark re-parsing it
    let track = generate_track(10_000);
    let mut gpx_data = track.gpx_data().clone();
    gpx_data.version = gpx::GpxVersion::Gpx11;
    gpx_data.creator = Some("trail-metrics-lib".to_string());
    let mut bytes = Vec::new();
    gpx::write(&gpx_data, &mut bytes).unwrap();

    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("10k_points", |b| {
        b.iter(|| Track::parse(bytes.as_slice()).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_parse);

criterion_main!(benches);
