use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::QuadTree;
use quadtree::shapes::Rectangle;
use rand::prelude::*;

fn world() -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 1000.0,
    }
}

fn random_sprite<R: Rng>(rng: &mut R) -> Rectangle {
    Rectangle {
        x: rng.gen_range(0.0..990.0),
        y: rng.gen_range(0.0..990.0),
        width: 10.0,
        height: 10.0,
    }
}

fn filled(rng: &mut StdRng, n: u32) -> QuadTree<u32> {
    let mut quadtree = QuadTree::new(world());
    for i in 0..n {
        quadtree.insert(i, random_sprite(rng));
    }
    quadtree
}

// One frame: rebuild the tree from scratch, then clear it.
fn rebuild_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let sprites: Vec<Rectangle> = (0..1000).map(|_| random_sprite(&mut rng)).collect();
    let mut quadtree = QuadTree::new(world());

    c.bench_function("quadtree_rebuild_1000", |b| {
        b.iter(|| {
            for (i, rect) in sprites.iter().enumerate() {
                quadtree.insert(i, *rect);
            }
            black_box(quadtree.count());
            quadtree.clear();
        })
    });
}

fn query_region_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let quadtree = filled(&mut rng, 1000);
    let queries: Vec<Rectangle> = (0..256).map(|_| random_sprite(&mut rng)).collect();

    c.bench_function("quadtree_query_region", |b| {
        let mut i = 0;
        b.iter(|| {
            let found = quadtree.query_region(black_box(&queries[i % queries.len()]));
            i += 1;
            black_box(found.len())
        })
    });
}

fn query_intersecting_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let quadtree = filled(&mut rng, 1000);
    let query = Rectangle {
        x: 400.0,
        y: 400.0,
        width: 200.0,
        height: 200.0,
    };

    c.bench_function("quadtree_query_intersecting", |b| {
        b.iter(|| black_box(quadtree.query_intersecting(black_box(&query)).len()))
    });
}

criterion_group!(
    quadtree_benchmarks,
    rebuild_benchmark,
    query_region_benchmark,
    query_intersecting_benchmark
);
criterion_main!(quadtree_benchmarks);
