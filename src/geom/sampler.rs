//! Regular-grid sampling of parametric surfaces.
//!
//! Every parametric shape is a pure function of `(u, v)` over the normalized
//! unit square; the sampler walks an inclusive `(n+1) x (n+1)` grid, emits two
//! triangles per cell with a fixed winding, and derives smooth normals. The
//! sampler never special-cases singular points: equations are evaluated as
//! written, and zero-area triangles near poles are tolerated downstream.

use super::mesh::ShapeMesh;
use super::Point3;

/// Rectangular native domain of a parametric equation.
///
/// Equations are written in their natural coordinates (angles in radians,
/// signed spans, ...); the sampler maps the normalized grid into this domain
/// linearly before evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    pub u0: f64,
    pub u1: f64,
    pub v0: f64,
    pub v1: f64,
}

impl SurfaceDomain {
    /// The normalized unit square.
    pub const UNIT: Self = Self::new(0.0, 1.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(u0: f64, u1: f64, v0: f64, v1: f64) -> Self {
        Self { u0, u1, v0, v1 }
    }

    /// Map a normalized `(u, v)` pair into this domain.
    #[must_use]
    pub fn map(&self, u: f64, v: f64) -> (f64, f64) {
        (
            self.u0 + (self.u1 - self.u0) * u,
            self.v0 + (self.v1 - self.v0) * v,
        )
    }
}

/// Triangulate a regular grid of `u_count x v_count` vertices laid out
/// row-major with u fastest (vertex `(i, j)` at `j * u_count + i`).
///
/// Each cell emits `(i,j)-(i+1,j)-(i,j+1)` and `(i+1,j)-(i+1,j+1)-(i,j+1)`,
/// giving consistent outward-facing winding under the right-handed
/// convention.
#[must_use]
pub fn triangulate_grid(u_count: usize, v_count: usize) -> Vec<u32> {
    if u_count < 2 || v_count < 2 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((u_count - 1) * (v_count - 1) * 6);
    for j in 0..v_count - 1 {
        for i in 0..u_count - 1 {
            let i0 = (j * u_count + i) as u32;
            let i1 = (j * u_count + i + 1) as u32;
            let i2 = ((j + 1) * u_count + i) as u32;
            let i3 = ((j + 1) * u_count + i + 1) as u32;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i1, i3, i2]);
        }
    }
    indices
}

/// Sample a parametric surface over the unit square.
///
/// `u` and `v` are partitioned into `slices_u + 1` and `stacks_v + 1` evenly
/// spaced samples inclusive of both endpoints, so resolution `n` produces an
/// `(n+1) x (n+1)` vertex grid and `6 * n^2` indices.
#[must_use]
pub fn sample_surface<F>(f: F, slices_u: usize, stacks_v: usize) -> ShapeMesh
where
    F: Fn(f64, f64) -> Point3,
{
    let u_count = slices_u + 1;
    let v_count = stacks_v + 1;

    let mut points = Vec::with_capacity(u_count * v_count);
    for j in 0..v_count {
        let v = j as f64 / stacks_v as f64;
        for i in 0..u_count {
            let u = i as f64 / slices_u as f64;
            points.push(f(u, v));
        }
    }

    let indices = triangulate_grid(u_count, v_count);
    ShapeMesh::assemble(points, indices)
}

/// Sample an equation written in its native domain.
#[must_use]
pub fn sample_surface_in_domain(
    f: fn(f64, f64) -> Point3,
    domain: SurfaceDomain,
    slices_u: usize,
    stacks_v: usize,
) -> ShapeMesh {
    sample_surface(
        |u, v| {
            let (s, t) = domain.map(u, v);
            f(s, t)
        },
        slices_u,
        stacks_v,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_plane(u: f64, v: f64) -> Point3 {
        Point3::new(u, v, 0.0)
    }

    #[test]
    fn test_grid_counts_match_resolution() {
        for n in [3usize, 8, 32] {
            let mesh = sample_surface(flat_plane, n, n);
            assert_eq!(mesh.vertex_count(), (n + 1) * (n + 1));
            assert_eq!(mesh.indices.len(), 6 * n * n);
            mesh.validate().unwrap();
        }
    }

    #[test]
    fn test_grid_layout_is_row_major_u_fastest() {
        let mesh = sample_surface(flat_plane, 2, 2);
        // Vertex (i, j) lives at j * 3 + i.
        assert_eq!(mesh.positions[0], [0.0, 0.0, 0.0]);
        assert_eq!(mesh.positions[1], [0.5, 0.0, 0.0]);
        assert_eq!(mesh.positions[3], [0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_cell_winding() {
        let indices = triangulate_grid(3, 3);
        // First cell: grid corners (0,0)-(1,0)-(0,1), then (1,0)-(1,1)-(0,1).
        assert_eq!(&indices[0..6], &[0, 1, 3, 1, 4, 3]);
    }

    #[test]
    fn test_planar_patch_normals_point_up() {
        let mesh = sample_surface(flat_plane, 4, 4);
        for n in mesh.normals.as_ref().unwrap() {
            assert!((n[2] - 1.0).abs() < 1e-12, "expected +Z normal, got {n:?}");
        }
    }

    #[test]
    fn test_domain_mapping() {
        let domain = SurfaceDomain::new(0.0, std::f64::consts::TAU, -1.0, 1.0);
        assert_eq!(domain.map(0.0, 0.0), (0.0, -1.0));
        assert_eq!(domain.map(1.0, 1.0), (std::f64::consts::TAU, 1.0));
        let (u, v) = domain.map(0.5, 0.5);
        assert!((u - std::f64::consts::PI).abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn test_resampling_is_deterministic() {
        let a = sample_surface(flat_plane, 7, 7);
        let b = sample_surface(flat_plane, 7, 7);
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.positions, b.positions);
    }

    #[test]
    fn test_degenerate_pole_cells_are_kept() {
        // Collapse the v=0 row to a single point; the sampler must still emit
        // the full index grid, degenerate triangles included.
        let n = 4;
        let mesh = sample_surface(|u, v| Point3::new(u * v, v, 0.0), n, n);
        assert_eq!(mesh.indices.len(), 6 * n * n);
        mesh.validate().unwrap();
    }
}
