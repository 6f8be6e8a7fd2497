//! Closed-form solid generators.
//!
//! Direct analytic constructors for the shapes that need no surface
//! sampling: the box, quadric solids of revolution, and the Platonic
//! solids at unit circumradius. Faceted solids duplicate vertices per
//! face so the shared normal pass yields flat shading; solids of
//! revolution share ring vertices so the same pass yields smooth sides
//! with sharp cap rims (cap fans use their own rim copies).

use std::f64::consts::PI;

use super::mesh::ShapeMesh;
use super::Point3;

/// Axis-aligned 2x2x2 box: 6 quad faces split into triangles.
#[must_use]
pub fn cube() -> ShapeMesh {
    let mut points = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    let mut add_face = |corners: [[f64; 3]; 4]| {
        let base = points.len() as u32;
        for c in corners {
            points.push(Point3::from_array(c));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2]);
        indices.extend_from_slice(&[base, base + 2, base + 3]);
    };

    // Top face (+y)
    add_face([[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]]);
    // Bottom face (-y)
    add_face([[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]]);
    // Front face (+z)
    add_face([[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]);
    // Back face (-z)
    add_face([[1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0]]);
    // Right face (+x)
    add_face([[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]]);
    // Left face (-x)
    add_face([[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]]);

    ShapeMesh::assemble(points, indices)
}

/// Unit sphere with `segments` longitude and latitude divisions.
///
/// One shared vertex per pole, `segments - 1` latitude rings wrapped
/// around the y axis.
#[must_use]
pub fn sphere(segments: usize) -> ShapeMesh {
    let u_count = segments;
    let v_count = segments;

    let mut points = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Top pole vertex
    points.push(Point3::new(0.0, 1.0, 0.0));

    // Latitude rings
    for i in 1..v_count {
        let phi = PI * i as f64 / v_count as f64;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for j in 0..u_count {
            let theta = 2.0 * PI * j as f64 / u_count as f64;
            points.push(Point3::new(
                ring_radius * theta.cos(),
                y,
                ring_radius * theta.sin(),
            ));
        }
    }

    // Bottom pole vertex
    points.push(Point3::new(0.0, -1.0, 0.0));

    // Top cap (triangles)
    for j in 0..u_count {
        let i1 = (j + 1) as u32;
        let i2 = ((j + 1) % u_count + 1) as u32;
        indices.extend_from_slice(&[0, i2, i1]);
    }

    // Middle rings (quads)
    for i in 0..v_count - 2 {
        for j in 0..u_count {
            let ring = i * u_count + 1;
            let next_ring = (i + 1) * u_count + 1;

            let i0 = (ring + j) as u32;
            let i1 = (ring + (j + 1) % u_count) as u32;
            let i2 = (next_ring + (j + 1) % u_count) as u32;
            let i3 = (next_ring + j) as u32;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i0, i2, i3]);
        }
    }

    // Bottom cap (triangles)
    let bottom_pole = (points.len() - 1) as u32;
    let last_ring = (v_count - 2) * u_count + 1;
    for j in 0..u_count {
        let i1 = (last_ring + j) as u32;
        let i2 = (last_ring + (j + 1) % u_count) as u32;
        indices.extend_from_slice(&[bottom_pole, i1, i2]);
    }

    ShapeMesh::assemble(points, indices)
}

/// Torus with major radius 1 and tube radius 0.4, wrapped in both
/// directions (no seam duplicates).
#[must_use]
pub fn torus(segments: usize) -> ShapeMesh {
    const MAJOR: f64 = 1.0;
    const TUBE: f64 = 0.4;

    let arc_count = segments;
    let tube_count = segments;

    let mut points = Vec::with_capacity(arc_count * tube_count);
    for j in 0..arc_count {
        let phi = 2.0 * PI * j as f64 / arc_count as f64;
        for i in 0..tube_count {
            let theta = 2.0 * PI * i as f64 / tube_count as f64;
            let ring = MAJOR + TUBE * theta.cos();
            points.push(Point3::new(
                ring * phi.cos(),
                ring * phi.sin(),
                TUBE * theta.sin(),
            ));
        }
    }

    let mut indices = Vec::with_capacity(arc_count * tube_count * 6);
    for j in 0..arc_count {
        let jn = (j + 1) % arc_count;
        for i in 0..tube_count {
            let i_n = (i + 1) % tube_count;

            let i0 = (j * tube_count + i) as u32;
            let i1 = (jn * tube_count + i) as u32;
            let i2 = (jn * tube_count + i_n) as u32;
            let i3 = (j * tube_count + i_n) as u32;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i0, i2, i3]);
        }
    }

    ShapeMesh::assemble(points, indices)
}

/// Solid of revolution between two rings: covers the cylinder, the cone
/// (top radius 0) and the regular prisms (fixed low segment counts).
/// Height runs along the y axis.
fn lathe(radius_top: f64, radius_bottom: f64, height: f64, segments: usize) -> ShapeMesh {
    let half = height / 2.0;

    let mut points = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let ring = |radius: f64, y: f64, points: &mut Vec<Point3>| {
        let base = points.len() as u32;
        for j in 0..segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            points.push(Point3::new(radius * theta.cos(), y, radius * theta.sin()));
        }
        base
    };

    // Side wall between the two rings; a zero radius collapses one ring
    // and degenerates half of each quad, which is tolerated.
    let bottom = ring(radius_bottom, -half, &mut points);
    let top = ring(radius_top, half, &mut points);
    for j in 0..segments {
        let jn = (j + 1) % segments;
        let b0 = bottom + j as u32;
        let b1 = bottom + jn as u32;
        let t0 = top + j as u32;
        let t1 = top + jn as u32;

        indices.extend_from_slice(&[b0, t0, t1]);
        indices.extend_from_slice(&[b0, t1, b1]);
    }

    // Caps use their own rim copies so the rim stays sharp.
    if radius_top > 0.0 {
        let rim = ring(radius_top, half, &mut points);
        let center = points.len() as u32;
        points.push(Point3::new(0.0, half, 0.0));
        for j in 0..segments {
            let jn = (j + 1) % segments;
            indices.extend_from_slice(&[center, rim + jn as u32, rim + j as u32]);
        }
    }
    if radius_bottom > 0.0 {
        let rim = ring(radius_bottom, -half, &mut points);
        let center = points.len() as u32;
        points.push(Point3::new(0.0, -half, 0.0));
        for j in 0..segments {
            let jn = (j + 1) % segments;
            indices.extend_from_slice(&[center, rim + j as u32, rim + jn as u32]);
        }
    }

    ShapeMesh::assemble(points, indices)
}

/// Capped cylinder, radius 1 and height 2.
#[must_use]
pub fn cylinder(segments: usize) -> ShapeMesh {
    lathe(1.0, 1.0, 2.0, segments)
}

/// Cone with base radius 1 and height 2.
#[must_use]
pub fn cone(segments: usize) -> ShapeMesh {
    lathe(0.0, 1.0, 2.0, segments)
}

/// Regular prism: a cylinder at a fixed low side count, ignoring the
/// requested resolution.
#[must_use]
pub fn prism(sides: usize) -> ShapeMesh {
    lathe(1.0, 1.0, 2.0, sides)
}

// ─────────────────────────────────────────────────────────────────────────────
// Platonic solids
// ─────────────────────────────────────────────────────────────────────────────

/// Golden ratio, shared by the icosahedron and dodecahedron tables.
const PHI: f64 = 1.618_033_988_749_895;

/// Assemble a faceted solid from a vertex table and triangle list:
/// every corner is re-emitted per face (flat shading), and all table
/// vertices are projected onto the unit circumsphere.
fn faceted(vertices: &[[f64; 3]], faces: &[[u32; 3]]) -> ShapeMesh {
    let mut points = Vec::with_capacity(faces.len() * 3);
    let mut indices = Vec::with_capacity(faces.len() * 3);

    for face in faces {
        for &corner in face {
            let p = Point3::from_array(vertices[corner as usize]);
            let unit = p.to_vec3().normalized_or(super::Vec3::Z);
            indices.push(points.len() as u32);
            points.push(Point3::from(unit));
        }
    }

    ShapeMesh::assemble(points, indices)
}

const TETRAHEDRON_VERTICES: [[f64; 3]; 4] = [
    [1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

const TETRAHEDRON_FACES: [[u32; 3]; 4] = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];

#[must_use]
pub fn tetrahedron() -> ShapeMesh {
    faceted(&TETRAHEDRON_VERTICES, &TETRAHEDRON_FACES)
}

const OCTAHEDRON_VERTICES: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

const OCTAHEDRON_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [0, 4, 3],
    [0, 3, 5],
    [0, 5, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
    [1, 4, 2],
];

#[must_use]
pub fn octahedron() -> ShapeMesh {
    faceted(&OCTAHEDRON_VERTICES, &OCTAHEDRON_FACES)
}

const ICOSAHEDRON_VERTICES: [[f64; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

const ICOSAHEDRON_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

#[must_use]
pub fn icosahedron() -> ShapeMesh {
    faceted(&ICOSAHEDRON_VERTICES, &ICOSAHEDRON_FACES)
}

/// Reciprocal of the golden ratio.
const INV_PHI: f64 = 1.0 / PHI;

const DODECAHEDRON_VERTICES: [[f64; 3]; 20] = [
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [0.0, -INV_PHI, -PHI],
    [0.0, -INV_PHI, PHI],
    [0.0, INV_PHI, -PHI],
    [0.0, INV_PHI, PHI],
    [-INV_PHI, -PHI, 0.0],
    [-INV_PHI, PHI, 0.0],
    [INV_PHI, -PHI, 0.0],
    [INV_PHI, PHI, 0.0],
    [-PHI, 0.0, -INV_PHI],
    [PHI, 0.0, -INV_PHI],
    [-PHI, 0.0, INV_PHI],
    [PHI, 0.0, INV_PHI],
];

// Pentagon faces pre-triangulated as fans, three triangles each.
const DODECAHEDRON_FACES: [[u32; 3]; 36] = [
    [3, 11, 7],
    [3, 7, 15],
    [3, 15, 13],
    [7, 19, 17],
    [7, 17, 6],
    [7, 6, 15],
    [17, 4, 8],
    [17, 8, 10],
    [17, 10, 6],
    [8, 0, 16],
    [8, 16, 2],
    [8, 2, 10],
    [0, 12, 1],
    [0, 1, 18],
    [0, 18, 16],
    [6, 10, 2],
    [6, 2, 13],
    [6, 13, 15],
    [2, 16, 18],
    [2, 18, 3],
    [2, 3, 13],
    [18, 1, 9],
    [18, 9, 11],
    [18, 11, 3],
    [4, 14, 12],
    [4, 12, 0],
    [4, 0, 8],
    [11, 9, 5],
    [11, 5, 19],
    [11, 19, 7],
    [19, 5, 14],
    [19, 14, 4],
    [19, 4, 17],
    [1, 12, 14],
    [1, 14, 5],
    [1, 5, 9],
];

#[must_use]
pub fn dodecahedron() -> ShapeMesh {
    faceted(&DODECAHEDRON_VERTICES, &DODECAHEDRON_FACES)
}

/// Star polyhedron: the icosahedron with one level of 4-way face
/// subdivision, every vertex projected back onto the unit sphere.
#[must_use]
pub fn star_polyhedron() -> ShapeMesh {
    let corners: Vec<Point3> = ICOSAHEDRON_VERTICES
        .iter()
        .map(|&v| Point3::from_array(v))
        .collect();

    let mut points = Vec::with_capacity(ICOSAHEDRON_FACES.len() * 12);
    let mut indices = Vec::with_capacity(ICOSAHEDRON_FACES.len() * 12);

    let mut push_triangle = |a: Point3, b: Point3, c: Point3| {
        for p in [a, b, c] {
            let unit = p.to_vec3().normalized_or(super::Vec3::Z);
            indices.push(points.len() as u32);
            points.push(Point3::from(unit));
        }
    };

    for face in &ICOSAHEDRON_FACES {
        let a = corners[face[0] as usize];
        let b = corners[face[1] as usize];
        let c = corners[face[2] as usize];

        let ab = a.midpoint(b);
        let bc = b.midpoint(c);
        let ca = c.midpoint(a);

        push_triangle(a, ab, ca);
        push_triangle(ab, b, bc);
        push_triangle(ca, bc, c);
        push_triangle(ab, bc, ca);
    }

    ShapeMesh::assemble(points, indices)
}
