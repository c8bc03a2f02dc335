// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_bubble::{
    Body, HitParams, SpeechBubble, build_outline, compute_junction, enforce_apex_constraints,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Apex positions spread over a region four times the body's size, centered
/// on the body.
fn apexes(body: &Body, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            Point::new(
                (rng.next_f64() * 4.0 - 1.5) * body.width(),
                (rng.next_f64() * 4.0 - 1.5) * body.height(),
            )
        })
        .collect()
}

fn bench_bubble(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_bubble");

    for &(w, h) in &[(100.0_f64, 130.0_f64), (400.0_f64, 40.0_f64)] {
        let body = Body::new(w, h);
        let points = apexes(&body, 1_024, 0xB0BB_1E00_0000_0001);

        group.bench_function(format!("compute_junction({w}x{h})"), |b| {
            b.iter(|| {
                for &apex in &points {
                    black_box(compute_junction(&body, black_box(apex)));
                }
            });
        });

        group.bench_function(format!("enforce_apex_constraints({w}x{h})"), |b| {
            b.iter(|| {
                for &apex in &points {
                    black_box(enforce_apex_constraints(&body, black_box(apex)));
                }
            });
        });

        group.bench_function(format!("build_outline({w}x{h})"), |b| {
            b.iter(|| {
                for &apex in &points {
                    black_box(build_outline(&body, black_box(apex)));
                }
            });
        });

        let outline = build_outline(&body, Point::new(w * 0.25, h * 1.5));
        let params = HitParams {
            fill_tolerance: 2.0,
            stroke_tolerance: 1.0,
            handle_radius: 4.0,
        };
        group.bench_function(format!("hit_test({w}x{h})"), |b| {
            b.iter(|| {
                for &pt in &points {
                    black_box(outline.hit_test(black_box(pt), &params));
                }
            });
        });
    }

    let body = Body::new(160.0, 90.0);
    let pointer = apexes(&body, 256, 0xD7A6_0000_0000_0002);
    group.bench_function("drag_session(256 samples)", |b| {
        b.iter(|| {
            let mut bubble = SpeechBubble::new(Point::ORIGIN, body);
            for pair in pointer.windows(2) {
                bubble = bubble.drag_apex(pair[0], pair[1]);
            }
            black_box(bubble)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_bubble);
criterion_main!(benches);
