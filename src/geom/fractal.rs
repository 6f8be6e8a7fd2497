//! Recursive subdivision generators.
//!
//! Self-similar meshes built by replacing faces (or cells) level by level.
//! Recursion threads an owned accumulator through the calls and returns it,
//! keeping the build free of shared mutable state; emitted triangles carry
//! their own vertices (sequential index triples), so the shared normal pass
//! produces flat facets.

use super::mesh::ShapeMesh;
use super::Point3;

/// Subdivision depth for a requested resolution: one level per 16
/// segments, capped at 3.
#[must_use]
pub fn depth_for_resolution(resolution: usize) -> u32 {
    ((resolution / 16) as u32).min(3)
}

// ─────────────────────────────────────────────────────────────────────────────
// Sierpinski pyramid
// ─────────────────────────────────────────────────────────────────────────────

const PYRAMID_VERTICES: [Point3; 4] = [
    Point3::new(0.0, 1.0, 0.0),
    Point3::new(-1.0, -1.0, 1.0),
    Point3::new(1.0, -1.0, 1.0),
    Point3::new(0.0, -1.0, -1.0),
];

const PYRAMID_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

/// Medial subdivision keeping the three corner triangles; the central
/// triangle is discarded. Depth 0 emits the input triangle unmodified.
fn subdivide_face(mut acc: Vec<Point3>, a: Point3, b: Point3, c: Point3, depth: u32) -> Vec<Point3> {
    if depth == 0 {
        acc.push(a);
        acc.push(b);
        acc.push(c);
        return acc;
    }

    let ab = a.midpoint(b);
    let bc = b.midpoint(c);
    let ca = a.midpoint(c);

    acc = subdivide_face(acc, a, ab, ca, depth - 1);
    acc = subdivide_face(acc, ab, b, bc, depth - 1);
    subdivide_face(acc, ca, bc, c, depth - 1)
}

/// Sierpinski pyramid at the given subdivision depth.
///
/// Starts from a fixed tetrahedron and yields `4 * 3^depth` triangles.
#[must_use]
pub fn sierpinski(depth: u32) -> ShapeMesh {
    let mut points = Vec::new();
    for face in &PYRAMID_FACES {
        points = subdivide_face(
            points,
            PYRAMID_VERTICES[face[0]],
            PYRAMID_VERTICES[face[1]],
            PYRAMID_VERTICES[face[2]],
            depth,
        );
    }

    let indices = (0..points.len() as u32).collect();
    ShapeMesh::assemble(points, indices)
}

// ─────────────────────────────────────────────────────────────────────────────
// Menger sponge
// ─────────────────────────────────────────────────────────────────────────────

/// A cell is carved out when, at any base-3 digit position, at least two
/// of its coordinates have digit 1.
fn cell_removed(mut x: usize, mut y: usize, mut z: usize) -> bool {
    while x > 0 || y > 0 || z > 0 {
        let cx = x % 3 == 1;
        let cy = y % 3 == 1;
        let cz = z % 3 == 1;
        if (cx && cy) || (cy && cz) || (cz && cx) {
            return true;
        }
        x /= 3;
        y /= 3;
        z /= 3;
    }
    false
}

/// Append one axis-aligned box, faceted like the plain cube generator.
fn push_box(
    points: &mut Vec<Point3>,
    indices: &mut Vec<u32>,
    center: [f64; 3],
    half: f64,
) {
    const FACES: [[[f64; 3]; 4]; 6] = [
        // +y
        [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        // -y
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        // +z
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        // -z
        [[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]],
        // +x
        [[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]],
        // -x
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    ];

    for face in &FACES {
        let base = points.len() as u32;
        for corner in face {
            points.push(Point3::new(
                center[0] + corner[0] * half,
                center[1] + corner[1] * half,
                center[2] + corner[2] * half,
            ));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2]);
        indices.extend_from_slice(&[base, base + 2, base + 3]);
    }
}

/// Menger sponge spanning the unit box centered at the origin.
///
/// The grid has `3^depth` cells per axis and `20^depth` surviving cells;
/// depth is capped at 2 to bound the output.
#[must_use]
pub fn menger_sponge(depth: u32) -> ShapeMesh {
    let depth = depth.min(2);
    let size = 3usize.pow(depth);
    let unit = 1.0 / size as f64;

    let mut points = Vec::new();
    let mut indices = Vec::new();

    for x in 0..size {
        for y in 0..size {
            for z in 0..size {
                if cell_removed(x, y, z) {
                    continue;
                }
                let center = [
                    (x as f64 + 0.5) * unit - 0.5,
                    (y as f64 + 0.5) * unit - 0.5,
                    (z as f64 + 0.5) * unit - 0.5,
                ];
                push_box(&mut points, &mut indices, center, unit / 2.0);
            }
        }
    }

    ShapeMesh::assemble(points, indices)
}
