use criterion::{criterion_group, criterion_main, Criterion};
use quickhull2d::algorithms::convex_hull;
use quickhull2d::data::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn gen_points<R>(rng: &mut R, count: usize) -> Vec<Point<f64>>
where
  R: Rng + ?Sized,
{
  (0..count).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0xde1e7e);
  for n in [100, 1_000, 10_000] {
    let pts = gen_points(&mut rng, n);
    c.bench_function(&format!("quick_hull({})", n), |b| {
      b.iter(|| convex_hull(&pts))
    });
  }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
