// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use campus_map::campus;
use campus_scene::hit::{HitParams, topmost_hit};
use campus_scene::{Geometry, SceneQuery, Shape, filter_by_name};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use peniko::Color;

/// A grid of rotated rectangles with a decorative circle on every fourth cell.
fn grid(side: usize) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let x = col as f64 * 40.0;
            let y = row as f64 * 40.0;
            let i = row * side + col;
            let shape = if i % 4 == 3 {
                Shape::new(
                    format!("tree-{i}"),
                    "Tree",
                    Geometry::circle(Point::new(x + 15.0, y + 15.0), 12.0),
                    Color::from_rgb8(0x4C, 0xAF, 0x50),
                )
                .decorative()
            } else {
                Shape::new(
                    format!("bldg-{i}"),
                    format!("Building {i}"),
                    Geometry::rotated_rect(x, y, 30.0, 30.0, -10.0),
                    Color::from_rgb8(0x75, 0x75, 0x75),
                )
            };
            shapes.push(shape);
        }
    }
    shapes
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/filter_by_name");

    for side in [8usize, 32, 128] {
        let shapes = grid(side);
        group.throughput(Throughput::Elements(shapes.len() as u64));

        group.bench_with_input(BenchmarkId::new("empty", shapes.len()), &shapes, |b, shapes| {
            b.iter(|| black_box(filter_by_name(shapes, "")));
        });
        group.bench_with_input(BenchmarkId::new("substring", shapes.len()), &shapes, |b, shapes| {
            b.iter(|| black_box(filter_by_name(shapes, black_box("ing 1"))));
        });
    }

    group.finish();
}

fn bench_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/topmost_hit");
    let params = HitParams::default();

    for side in [8usize, 32, 128] {
        let scene = SceneQuery::new(grid(side)).unwrap();
        let render_list = scene.filtered("");
        // Near the origin: the reverse scan has to walk almost the whole list.
        let pt = Point::new(15.0, 15.0);
        group.throughput(Throughput::Elements(render_list.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("worst_case", render_list.len()),
            &render_list,
            |b, list| {
                b.iter(|| black_box(topmost_hit(list, black_box(pt), &params)));
            },
        );
    }

    group.finish();
}

fn bench_campus_click(c: &mut Criterion) {
    let scene = campus::default_scene().unwrap();
    let params = HitParams::default();
    c.bench_function("campus/resolve_click_at", |b| {
        b.iter(|| {
            black_box(scene.query().resolve_click_at(
                "",
                black_box(Point::new(560.0, 330.0)),
                &params,
            ))
        });
    });
}

criterion_group!(benches, bench_filter, bench_hit, bench_campus_click);
criterion_main!(benches);
