//! Prisma's, het stervlak en de gyroïde.
//!
//! Categorie: GEOMETRIC VARIATIONS

use std::f64::consts::TAU;

use crate::geom::{self, Point3, ShapeMesh, SurfaceDomain};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

fn triangular_prism(_segments: usize) -> ShapeMesh {
    geom::prism(3)
}

fn pentagonal_prism(_segments: usize) -> ShapeMesh {
    geom::prism(5)
}

fn hexagonal_prism(_segments: usize) -> ShapeMesh {
    geom::prism(6)
}

fn star(_segments: usize) -> ShapeMesh {
    geom::star_polyhedron()
}

/// Drievoudig periodiek minimaaloppervlak, hier één periode.
fn gyroid(u: f64, v: f64) -> Point3 {
    Point3::new(u.sin() * v.cos(), v.sin() * u.cos(), (u + v).sin())
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "triangularPrism",
        name: "Triangular Prism",
        category: categories::GEOMETRIC,
        description: "A prism with a triangular base. It has 5 faces (2 triangular and 3 rectangular), 9 edges, and 6 vertices.",
        tags: &["geometric", "prism", "triangular", "polyhedron"],
        difficulty: 2,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(triangular_prism),
    },
    ShapeDescriptor {
        id: "pentagonalPrism",
        name: "Pentagonal Prism",
        category: categories::GEOMETRIC,
        description: "A prism with a pentagonal base. It has 7 faces (2 pentagonal and 5 rectangular), 15 edges, and 10 vertices.",
        tags: &["geometric", "prism", "pentagonal", "polyhedron"],
        difficulty: 2,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(pentagonal_prism),
    },
    ShapeDescriptor {
        id: "hexagonalPrism",
        name: "Hexagonal Prism",
        category: categories::GEOMETRIC,
        description: "A prism with a hexagonal base. It has 8 faces (2 hexagonal and 6 rectangular), 18 edges, and 12 vertices.",
        tags: &["geometric", "prism", "hexagonal", "polyhedron"],
        difficulty: 2,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(hexagonal_prism),
    },
    ShapeDescriptor {
        id: "star",
        name: "Star Polyhedron",
        category: categories::GEOMETRIC,
        description: "A star polyhedron is a polyhedron which has some repetitive quality but is not necessarily convex. This creates a spiky, star-like appearance with fascinating geometric properties.",
        tags: &["geometric", "star", "polyhedron", "spiky", "non-convex", "angular", "symmetrical"],
        difficulty: 3,
        resolution_range: ResolutionRange::new(8, 32, 16),
        generator: Generator::ClosedForm(star),
    },
    ShapeDescriptor {
        id: "gyroid",
        name: "Gyroid Surface",
        category: categories::GEOMETRIC,
        description: "A gyroid is an infinitely connected triply periodic minimal surface. It has fascinating properties including no straight lines and constant mean curvature of zero.",
        tags: &["geometric", "minimal surface", "periodic", "triply connected", "curved"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: gyroid,
            domain: SurfaceDomain::new(0.0, TAU, 0.0, TAU),
        },
    },
];
