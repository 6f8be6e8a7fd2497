//! Regression tests for the generated shape meshes.
//!
//! These tests pin down the observable output of every catalog entry:
//!
//! 1. Vertex and triangle counts per generation strategy
//! 2. Buffer validity (triangle lists, finite coordinates, normal lengths)
//! 3. Determinism across repeated generation calls
//!
//! Counts are exact: the samplers and subdivision generators are fully
//! deterministic, so any count drift means the sampling contract changed.
//!
//! # Running these tests
//!
//! ```bash
//! cargo test --test regression_shape_outputs
//! ```

use morph_engine::catalog::{MAX_RESOLUTION, MIN_RESOLUTION, ShapeCatalog, clamp_resolution};
use morph_engine::geom::{ShapeMesh, Vec3};

// ============================================================================
// Test Helpers
// ============================================================================

/// Observable summary of a generated mesh.
#[derive(Debug, Clone, PartialEq)]
struct ShapeSnapshot {
    vertex_count: usize,
    triangle_count: usize,
    has_normals: bool,
    max_radius: f64,
}

impl ShapeSnapshot {
    fn capture(mesh: &ShapeMesh) -> Self {
        let max_radius = mesh
            .positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0_f64, f64::max);
        ShapeSnapshot {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            has_normals: mesh.normals.is_some(),
            max_radius,
        }
    }
}

fn generate(catalog: &ShapeCatalog, id: &str, resolution: i32) -> ShapeMesh {
    catalog
        .generate(id, resolution)
        .unwrap_or_else(|error| panic!("{id}: {error}"))
}

// ============================================================================
// Catalog sweep
// ============================================================================

#[test]
fn every_shape_generates_a_valid_mesh_at_its_default_resolution() {
    let catalog = ShapeCatalog::default();
    for descriptor in catalog.all() {
        let mesh = generate(&catalog, descriptor.id, descriptor.resolution_range.default);
        mesh.validate()
            .unwrap_or_else(|reason| panic!("{}: {reason}", descriptor.id));

        let snapshot = ShapeSnapshot::capture(&mesh);
        assert!(
            snapshot.triangle_count > 0,
            "{}: empty mesh",
            descriptor.id
        );
        assert!(snapshot.has_normals, "{}: missing normals", descriptor.id);
        assert!(
            snapshot.max_radius > 0.3 && snapshot.max_radius < 20.0,
            "{}: implausible extent {}",
            descriptor.id,
            snapshot.max_radius
        );
    }
}

#[test]
fn every_shape_generates_at_the_global_resolution_extremes() {
    let catalog = ShapeCatalog::default();
    for descriptor in catalog.all() {
        for resolution in [MIN_RESOLUTION, MAX_RESOLUTION] {
            let mesh = generate(&catalog, descriptor.id, resolution);
            mesh.validate().unwrap_or_else(|reason| {
                panic!("{} at resolution {resolution}: {reason}", descriptor.id)
            });
        }
    }
}

#[test]
fn every_normal_is_unit_length() {
    let catalog = ShapeCatalog::default();
    for descriptor in catalog.all() {
        let mesh = generate(&catalog, descriptor.id, descriptor.resolution_range.default);
        let normals = mesh.normals.as_ref().expect("normals present");
        assert_eq!(normals.len(), mesh.vertex_count(), "{}", descriptor.id);
        for n in normals {
            let len = Vec3::from_array(*n).length();
            assert!(
                (len - 1.0).abs() < 1e-9,
                "{}: normal of length {len}",
                descriptor.id
            );
        }
    }
}

#[test]
fn repeated_generation_is_bit_identical() {
    let catalog = ShapeCatalog::default();
    for id in [
        "cube",
        "sphere",
        "torusKnot",
        "kleinBottle",
        "gyroid",
        "shell",
        "boySurface",
        "sierpinski",
        "mengerSponge",
    ] {
        let first = generate(&catalog, id, 24);
        let second = generate(&catalog, id, 24);
        assert_eq!(first.positions, second.positions, "{id}");
        assert_eq!(first.indices, second.indices, "{id}");
        assert_eq!(first.normals, second.normals, "{id}");
    }
}

// ============================================================================
// Strategy contracts
// ============================================================================

#[test]
fn parametric_shapes_follow_the_grid_contract() {
    let catalog = ShapeCatalog::default();
    for descriptor in catalog.all() {
        if descriptor.generator.strategy_name() != "parametric" {
            continue;
        }
        for resolution in [8, 17, 32] {
            let n = clamp_resolution(resolution);
            let mesh = generate(&catalog, descriptor.id, resolution);
            assert_eq!(
                mesh.vertex_count(),
                (n + 1) * (n + 1),
                "{} at {n}",
                descriptor.id
            );
            assert_eq!(mesh.indices.len(), 6 * n * n, "{} at {n}", descriptor.id);
        }
    }
}

#[test]
fn closed_form_counts_are_pinned() {
    let catalog = ShapeCatalog::default();

    // (id, resolution, vertices, triangles)
    let expected: &[(&str, i32, usize, usize)] = &[
        ("cube", 32, 24, 12),
        ("sphere", 32, 2 + 31 * 32, 2 * 32 + 30 * 32 * 2),
        ("torus", 32, 32 * 32, 2 * 32 * 32),
        ("cylinder", 32, 4 * 32 + 2, 4 * 32),
        ("cone", 32, 3 * 32 + 1, 3 * 32),
        ("tetrahedron", 3, 12, 4),
        ("octahedron", 3, 24, 8),
        ("dodecahedron", 3, 108, 36),
        ("icosahedron", 3, 60, 20),
        ("triangularPrism", 32, 14, 12),
        ("pentagonalPrism", 32, 22, 20),
        ("hexagonalPrism", 32, 26, 24),
        ("star", 16, 240, 80),
    ];

    for &(id, resolution, vertices, triangles) in expected {
        let mesh = generate(&catalog, id, resolution);
        assert_eq!(mesh.vertex_count(), vertices, "{id}: vertex count");
        assert_eq!(mesh.triangle_count(), triangles, "{id}: triangle count");
    }
}

#[test]
fn fixed_solids_ignore_the_requested_resolution() {
    let catalog = ShapeCatalog::default();
    for id in ["cube", "tetrahedron", "dodecahedron", "triangularPrism"] {
        let low = generate(&catalog, id, MIN_RESOLUTION);
        let high = generate(&catalog, id, MAX_RESOLUTION);
        assert_eq!(low.positions, high.positions, "{id}");
        assert_eq!(low.indices, high.indices, "{id}");
    }
}

#[test]
fn fractal_depth_scales_with_resolution() {
    let catalog = ShapeCatalog::default();

    // One subdivision level per 16 segments, capped at depth 3.
    let sierpinski: &[(i32, usize)] = &[(3, 4), (16, 12), (32, 36), (48, 108), (128, 108)];
    for &(resolution, triangles) in sierpinski {
        let mesh = generate(&catalog, "sierpinski", resolution);
        assert_eq!(
            mesh.triangle_count(),
            triangles,
            "sierpinski at {resolution}"
        );
    }

    // The sponge grows with 20^depth boxes and caps one level earlier.
    let menger: &[(i32, usize)] = &[(3, 12), (16, 20 * 12), (32, 400 * 12), (128, 400 * 12)];
    for &(resolution, triangles) in menger {
        let mesh = generate(&catalog, "mengerSponge", resolution);
        assert_eq!(
            mesh.triangle_count(),
            triangles,
            "mengerSponge at {resolution}"
        );
    }
}

// ============================================================================
// Shape-specific geometry
// ============================================================================

#[test]
fn sphere_vertices_sit_on_the_unit_sphere() {
    let catalog = ShapeCatalog::default();
    let mesh = generate(&catalog, "sphere", 32);
    for p in &mesh.positions {
        let r = Vec3::from_array(*p).length();
        assert!((r - 1.0).abs() < 1e-12, "off-sphere vertex {p:?}");
    }
}

#[test]
fn steinmetz_samples_stay_at_unit_distance() {
    let catalog = ShapeCatalog::default();
    let mesh = generate(&catalog, "steinmetzSolid", 24);
    for p in &mesh.positions {
        // Circular v-slices of radius sqrt(1 - v^2) put every sample at
        // distance 1 from the origin.
        let r = p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
        assert!((r - 1.0).abs() < 1e-9, "vertex {p:?}");
    }
}

#[test]
fn wave_surface_height_stays_within_amplitude() {
    let catalog = ShapeCatalog::default();
    let mesh = generate(&catalog, "wave", 32);
    for p in &mesh.positions {
        assert!(p[2].abs() <= 0.2 + 1e-12, "vertex {p:?}");
    }
}

#[test]
fn superellipsoid_stays_within_the_unit_box() {
    let catalog = ShapeCatalog::default();
    let mesh = generate(&catalog, "superellipsoid", 24);
    for p in &mesh.positions {
        for c in p {
            assert!(c.abs() <= 1.0 + 1e-9, "vertex {p:?}");
        }
    }
}

#[test]
fn menger_sponge_spans_the_unit_box() {
    let catalog = ShapeCatalog::default();
    let mesh = generate(&catalog, "mengerSponge", 32);
    let snapshot = ShapeSnapshot::capture(&mesh);
    assert_eq!(snapshot.triangle_count, 400 * 12);
    for p in &mesh.positions {
        for c in p {
            assert!((-0.5..=0.5).contains(c), "vertex {p:?}");
        }
    }
}
