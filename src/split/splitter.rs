// src/split/splitter.rs

//! Splits polygons whose exterior crosses the antimeridian into parts that
//! each stay within one longitude hemisphere.
//!
//! Crossed rings are flattened into one vertex arena. Each edge changing
//! hemisphere records an intersection with the meridian, and the
//! intersections are sorted along the meridian so that consecutive pairs
//! (ranks `2k`, `2k + 1`) bound one strip of the polygon. Output rings are
//! built by walking the arena and jumping between paired intersections.
//! Rings that are not crossed are kept aside and handed to whichever output
//! part contains them.

use log::{debug, trace, warn};

use crate::bbox::{bbox3_expand_to_interior, bbox3_from_loop};
use crate::constants::M_PI;
use crate::latlng::{geo_exact_equal, sign};
use crate::polygon::{count_polygon_vertices, ring_position, RingPosition};
use crate::split::crossing::{polygon_crosses, ring_crosses, split_180_lat};
use crate::types::{GeoError, GeoLoop, GeoMultiPolygon, GeoPolygon, LatLng};

/// Hemisphere an edge enters when it crosses the meridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
  WestToEast,
  EastToWest,
}

#[derive(Debug, Clone, Copy)]
struct SplitVertex {
  coord: LatLng,
  used: bool,
  /// Intersection on the edge leaving this vertex.
  intersect: Option<usize>,
  /// Hemisphere, carried over from neighbours for vertices on the prime meridian.
  sign: i8,
  /// Closes the ring: first and last vertices of a ring point at each other.
  link: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct SplitIntersect {
  dir: Direction,
  /// Crossing of the prime meridian (only around poles) rather than the antimeridian.
  is_prime: bool,
  lat: f64,
  vertex: usize,
  rank: usize,
}

impl SplitIntersect {
  /// Position along the meridian circle. Antimeridian crossings sort by
  /// latitude; prime meridian crossings continue past the poles as
  /// `±PI - lat`.
  fn sort_key(&self) -> f64 {
    if self.is_prime {
      let pole = if self.lat < 0.0 { -M_PI } else { M_PI };
      pole - self.lat
    } else {
      self.lat
    }
  }

  /// The synthetic vertex for this crossing on the side of hemisphere `sign`.
  fn lat_lng(&self, sign: i8) -> LatLng {
    let lng = if self.is_prime {
      0.0
    } else if sign > 0 {
      M_PI
    } else {
      -M_PI
    };
    LatLng { lat: self.lat, lng }
  }
}

#[derive(Debug, Clone, Copy)]
struct PendingHole<'a> {
  /// Ring index in the source polygon.
  ring: usize,
  geoloop: &'a GeoLoop,
  assigned: bool,
}

/// Working set of a single polygon split.
#[derive(Debug, Default)]
struct Split<'a> {
  vertices: Vec<SplitVertex>,
  intersects: Vec<SplitIntersect>,
  /// Intersection indices by rank.
  sorted: Vec<usize>,
  holes: Vec<PendingHole<'a>>,
}

/// Appends `coord` unless it repeats the last vertex exactly.
fn push_vertex(ring: &mut Vec<LatLng>, coord: LatLng) {
  if !ring.last().is_some_and(|last| geo_exact_equal(last, &coord)) {
    ring.push(coord);
  }
}

/// Logs an invariant violation on its way out.
fn invariant(err: GeoError) -> GeoError {
  warn!("antimeridian split failed: {err}");
  err
}

impl<'a> Split<'a> {
  fn with_capacity(vertex_count: usize, ring_count: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(vertex_count),
      intersects: Vec::new(),
      sorted: Vec::new(),
      holes: Vec::with_capacity(ring_count.saturating_sub(1)),
    }
  }

  fn vertex(&self, index: usize) -> Result<&SplitVertex, GeoError> {
    self.vertices.get(index).ok_or_else(|| {
      invariant(GeoError::VertexIndexOutOfBounds {
        index,
        len: self.vertices.len(),
      })
    })
  }

  fn vertex_mut(&mut self, index: usize) -> Result<&mut SplitVertex, GeoError> {
    let len = self.vertices.len();
    self
      .vertices
      .get_mut(index)
      .ok_or_else(|| invariant(GeoError::VertexIndexOutOfBounds { index, len }))
  }

  fn add_hole(&mut self, ring: usize, geoloop: &'a GeoLoop) {
    self.holes.push(PendingHole {
      ring,
      geoloop,
      assigned: false,
    });
  }

  /// Appends a crossed ring to the arena, recording an intersection after
  /// every vertex whose outgoing edge changes hemisphere.
  fn process_ring(&mut self, ring: &[LatLng]) -> Result<(), GeoError> {
    if ring.len() < 2 {
      return Err(invariant(GeoError::DegenerateRing { verts: ring.len() }));
    }

    // Vertices on the prime meridian take the hemisphere of the ring so far;
    // leading ones take that of the first vertex off the meridian.
    let mut current = ring.iter().map(|v| sign(v.lng)).find(|s| *s != 0).unwrap_or(0);

    let first = self.vertices.len();
    for (i, cur) in ring.iter().enumerate() {
      let next = &ring[(i + 1) % ring.len()];
      let next_sign = sign(next.lng);
      let index = self.vertices.len();

      self.vertices.push(SplitVertex {
        coord: *cur,
        used: false,
        intersect: None,
        sign: current,
        link: None,
      });

      if current != 0 && next_sign != 0 && next_sign != current {
        let intersect = self.intersects.len();
        self.intersects.push(SplitIntersect {
          dir: if current < 0 {
            Direction::WestToEast
          } else {
            Direction::EastToWest
          },
          is_prime: (cur.lng - next.lng).abs() < M_PI,
          lat: split_180_lat(cur, next),
          vertex: index,
          rank: 0,
        });
        self.vertices[index].intersect = Some(intersect);
        current = next_sign;
      }
    }

    let last = self.vertices.len() - 1;
    self.vertex_mut(first)?.link = Some(last);
    self.vertex_mut(last)?.link = Some(first);
    Ok(())
  }

  /// Ranks the intersections along the meridian.
  fn sort_intersects(&mut self) -> Result<(), GeoError> {
    if self.intersects.len() % 2 != 0 {
      return Err(invariant(GeoError::OddIntersectionCount(self.intersects.len())));
    }

    let mut sorted: Vec<usize> = (0..self.intersects.len()).collect();
    sorted.sort_by(|a, b| {
      self.intersects[*a]
        .sort_key()
        .total_cmp(&self.intersects[*b].sort_key())
    });
    for (rank, index) in sorted.iter().enumerate() {
      self.intersects[*index].rank = rank;
    }
    self.sorted = sorted;
    Ok(())
  }

  /// The intersection paired with `intersect` on the meridian.
  fn partner(&self, intersect: &SplitIntersect) -> Result<SplitIntersect, GeoError> {
    let rank = if intersect.rank % 2 == 0 {
      intersect.rank + 1
    } else {
      intersect.rank - 1
    };
    self
      .sorted
      .get(rank)
      .and_then(|index| self.intersects.get(*index))
      .copied()
      .ok_or_else(|| invariant(GeoError::OddIntersectionCount(self.intersects.len())))
  }

  /// Builds one output polygon starting from an unused vertex.
  fn create_polygon(&mut self, start: usize) -> Result<GeoPolygon, GeoError> {
    let sign = self.vertex(start)?.sign;
    let mut ring: Vec<LatLng> = Vec::new();

    let mut index = start;
    let mut forward = true;
    while !self.vertex(index)?.used {
      let vertex = self.vertex_mut(index)?;
      vertex.used = true;
      let vertex = *vertex;
      push_vertex(&mut ring, vertex.coord);

      // Other endpoint of the edge being followed, and the vertex that owns
      // that edge's potential intersection.
      let (mut next, edge_owner) = match vertex.link {
        Some(link) if forward == (index > link) => (link, index.max(link)),
        _ => {
          let next = if forward {
            index + 1
          } else {
            index.checked_sub(1).ok_or_else(|| {
              invariant(GeoError::VertexIndexOutOfBounds {
                index,
                len: self.vertices.len(),
              })
            })?
          };
          (next, index.min(next))
        }
      };

      if let Some(intersect) = self.vertex(edge_owner)?.intersect {
        let intersect = self.intersects[intersect];
        push_vertex(&mut ring, intersect.lat_lng(sign));

        let partner = self.partner(&intersect)?;
        push_vertex(&mut ring, partner.lat_lng(sign));

        // Continue into our hemisphere from the partner's edge
        forward = (sign > 0) == (partner.dir == Direction::WestToEast);
        let edge_start = partner.vertex;
        next = if forward {
          match self.vertex(edge_start)?.link {
            Some(link) if edge_start > link => link,
            _ => edge_start + 1,
          }
        } else {
          edge_start
        };
      }

      index = next;
    }

    let mut polygon = GeoPolygon::new(GeoLoop::new(ring), Vec::new());
    self.assign_holes(sign, &mut polygon);
    Ok(polygon)
  }

  /// Moves every pending hole lying inside the polygon's exterior into it.
  /// A hole is placed by its first vertex that is not on the exterior boundary.
  fn assign_holes(&mut self, sign: i8, polygon: &mut GeoPolygon) {
    let exterior = &polygon.geoloop.verts;
    let mut bbox = bbox3_from_loop(exterior);
    bbox3_expand_to_interior(&mut bbox);

    for hole in self.holes.iter_mut().filter(|hole| !hole.assigned) {
      let position = hole
        .geoloop
        .verts
        .iter()
        .map(|coord| ring_position(exterior, sign, &bbox, coord))
        .find(|position| *position != RingPosition::Boundary)
        .unwrap_or(RingPosition::Boundary);

      if position != RingPosition::Outside {
        trace!("hole ring {} assigned to part with sign {}", hole.ring, sign);
        polygon.holes.push(hole.geoloop.clone());
        hole.assigned = true;
      }
    }
  }

  fn create_multi_polygon(&mut self) -> Result<Vec<GeoPolygon>, GeoError> {
    let mut polygons = Vec::new();
    let mut start = 0;
    while let Some(offset) = self.vertices[start..].iter().position(|v| !v.used) {
      let index = start + offset;
      polygons.push(self.create_polygon(index)?);
      start = index + 1;
    }

    if let Some(hole) = self.holes.iter().find(|hole| !hole.assigned) {
      return Err(invariant(GeoError::UnassignedHole { index: hole.ring }));
    }
    Ok(polygons)
  }
}

/// Splits one polygon by the antimeridian.
///
/// The exterior ring and any crossed hole are cut; each resulting ring
/// becomes the exterior of an output polygon, and the untouched holes are
/// distributed among them.
///
/// # Errors
///
/// Fails when a crossed ring has fewer than 2 vertices, when the crossings
/// do not pair up, or when an untouched hole ends up in no part.
pub fn split_polygon(polygon: &GeoPolygon) -> Result<Vec<GeoPolygon>, GeoError> {
  let (vertex_count, ring_count) = count_polygon_vertices(polygon);
  let mut split = Split::with_capacity(vertex_count, ring_count);

  for (i, ring) in polygon.rings().enumerate() {
    if i == 0 || ring_crosses(&ring.verts) {
      split.process_ring(&ring.verts)?;
    } else {
      split.add_hole(i, ring);
    }
  }

  split.sort_intersects()?;
  let polygons = split.create_multi_polygon()?;
  debug!(
    "split polygon of {} rings ({} vertices, {} intersections) into {} parts",
    ring_count,
    vertex_count,
    split.intersects.len(),
    polygons.len()
  );
  Ok(polygons)
}

/// Splits every polygon whose exterior crosses the antimeridian; the others
/// are copied unchanged. Polygon order is preserved, with the parts of a
/// split polygon taking its place.
///
/// # Errors
///
/// See [`split_polygon`].
pub fn split_multi_polygon_by_180(multi_polygon: &GeoMultiPolygon) -> Result<GeoMultiPolygon, GeoError> {
  let mut polygons = Vec::with_capacity(multi_polygon.len());
  for polygon in &multi_polygon.polygons {
    if polygon_crosses(polygon) {
      polygons.extend(split_polygon(polygon)?);
    } else {
      polygons.push(polygon.clone());
    }
  }
  Ok(GeoMultiPolygon::new(polygons))
}
