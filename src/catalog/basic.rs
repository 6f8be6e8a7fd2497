//! Basisvormen: kubus, bol, torus, cilinder en kegel.
//!
//! Categorie: BASIC SHAPES

use crate::geom::{self, ShapeMesh};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

fn cube(_segments: usize) -> ShapeMesh {
    geom::cube()
}

fn sphere(segments: usize) -> ShapeMesh {
    geom::sphere(segments)
}

fn torus(segments: usize) -> ShapeMesh {
    geom::torus(segments)
}

fn cylinder(segments: usize) -> ShapeMesh {
    geom::cylinder(segments)
}

fn cone(segments: usize) -> ShapeMesh {
    geom::cone(segments)
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "cube",
        name: "Cube",
        category: categories::BASIC,
        description: "A perfect cube - one of the most fundamental 3D shapes with 6 equal square faces, 12 edges, and 8 vertices. Also known as a regular hexahedron, it is one of the five Platonic solids.",
        tags: &["basic", "simple", "rectangular", "hexahedron", "regular", "platonic"],
        difficulty: 1,
        resolution_range: ResolutionRange::FIXED,
        generator: Generator::ClosedForm(cube),
    },
    ShapeDescriptor {
        id: "sphere",
        name: "Sphere",
        category: categories::BASIC,
        description: "A perfect sphere - the set of all points equidistant from a center point. The most symmetric 3D shape and fundamental form in geometry.",
        tags: &["basic", "round", "smooth", "ball", "spherical", "symmetric"],
        difficulty: 1,
        resolution_range: ResolutionRange::new(8, 128, 32),
        generator: Generator::ClosedForm(sphere),
    },
    ShapeDescriptor {
        id: "torus",
        name: "Torus",
        category: categories::BASIC,
        description: "A torus is the donut-shaped surface traced by revolving a circle around an axis in its own plane. It is a fundamental object in both geometry and topology.",
        tags: &["basic", "donut", "ring", "curved", "revolution"],
        difficulty: 1,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(torus),
    },
    ShapeDescriptor {
        id: "cylinder",
        name: "Cylinder",
        category: categories::BASIC,
        description: "A cylinder with circular cross-section - a prism with a circular base and parallel sides. One of the most fundamental and useful shapes in engineering and everyday applications.",
        tags: &["basic", "circular", "prism", "tube", "column", "engineering", "rotational"],
        difficulty: 1,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(cylinder),
    },
    ShapeDescriptor {
        id: "cone",
        name: "Cone",
        category: categories::BASIC,
        description: "A cone with circular base tapering to a point - a common geometric solid with rotational symmetry.",
        tags: &["basic", "point", "apex", "circular", "tapered"],
        difficulty: 1,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(cone),
    },
];
