use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xs_h3_wkb::*;

// --- Fixtures for benchmarks ---

fn boundary_from_degs(coords: &[(f64, f64)]) -> CellBoundary {
  let verts: Vec<LatLng> = coords.iter().map(|(lat, lng)| LatLng::from_degs(*lat, *lng)).collect();
  CellBoundary::from_verts(&verts).unwrap_or_default()
}

/// Hexagon-shaped boundary centred on (`lat`, `lng`), in degrees.
fn hexagon(lat: f64, lng: f64) -> CellBoundary {
  let coords: Vec<(f64, f64)> = (0..6)
    .map(|i| {
      let t = std::f64::consts::FRAC_PI_3 * f64::from(i);
      let mut vert_lng = lng + 0.5 * t.cos();
      if vert_lng > 180.0 {
        vert_lng -= 360.0;
      }
      (lat + 0.5 * t.sin(), vert_lng)
    })
    .collect();
  boundary_from_degs(&coords)
}

fn grid_multi_polygon(n: usize) -> GeoMultiPolygon {
  let polygons = (0..n)
    .map(|i| {
      let boundary = hexagon(f64::from(i as u32 % 10) * 2.0, 162.0 + f64::from(i as u32 / 10) * 2.0);
      GeoPolygon::new(boundary.to_geoloop(), Vec::new())
    })
    .collect();
  GeoMultiPolygon::new(polygons)
}

// --- Benchmark Functions ---

fn bench_cell_boundary_to_wkb(c: &mut Criterion) {
  let config = WkbConfig::default();
  let plain = hexagon(37.0, -122.0);
  let crossed = hexagon(-16.0, 179.8);
  let polar = boundary_from_degs(&[
    (88.0, 30.0),
    (88.0, 90.0),
    (88.0, 150.0),
    (88.0, -150.0),
    (88.0, -90.0),
    (88.0, -30.0),
  ]);

  c.benchmark_group("cell_boundary_to_wkb")
    .bench_function("plain", |b| b.iter(|| cell_boundary_to_wkb(black_box(&plain), &config)))
    .bench_function("crossed", |b| b.iter(|| cell_boundary_to_wkb(black_box(&crossed), &config)))
    .bench_function("polar", |b| b.iter(|| cell_boundary_to_wkb(black_box(&polar), &config)));
}

fn bench_multi_polygon_to_wkb_split(c: &mut Criterion) {
  let config = WkbConfig::default();
  let mut group = c.benchmark_group("multi_polygon_to_wkb_split");
  for n in [1usize, 10, 100].iter() {
    let multi_polygon = grid_multi_polygon(*n);
    group.bench_with_input(BenchmarkId::from_parameter(n), &multi_polygon, |b, multi_polygon| {
      b.iter(|| multi_polygon_to_wkb_split(black_box(multi_polygon), &config));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_cell_boundary_to_wkb, bench_multi_polygon_to_wkb_split);
criterion_main!(benches);
