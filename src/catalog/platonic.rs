//! De vier overige platonische lichamen; de kubus staat bij de basisvormen.
//!
//! Categorie: PLATONIC SOLIDS

use crate::geom::{self, ShapeMesh};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

fn tetrahedron(_segments: usize) -> ShapeMesh {
    geom::tetrahedron()
}

fn octahedron(_segments: usize) -> ShapeMesh {
    geom::octahedron()
}

fn dodecahedron(_segments: usize) -> ShapeMesh {
    geom::dodecahedron()
}

fn icosahedron(_segments: usize) -> ShapeMesh {
    geom::icosahedron()
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "tetrahedron",
        name: "Tetrahedron",
        category: categories::PLATONIC,
        description: "The simplest Platonic solid with 4 triangular faces, 6 edges, and 4 vertices. Each face is an equilateral triangle, making it the building block of 3D geometry.",
        tags: &["platonic", "triangular", "simplest", "pyramid", "tetrahedral", "regular"],
        difficulty: 2,
        resolution_range: ResolutionRange::FIXED,
        generator: Generator::ClosedForm(tetrahedron),
    },
    ShapeDescriptor {
        id: "octahedron",
        name: "Octahedron",
        category: categories::PLATONIC,
        description: "A Platonic solid with 8 triangular faces, 12 edges, and 6 vertices. It can be viewed as two square pyramids joined at their bases.",
        tags: &["platonic", "triangular", "dual", "symmetric"],
        difficulty: 2,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(octahedron),
    },
    ShapeDescriptor {
        id: "dodecahedron",
        name: "Dodecahedron",
        category: categories::PLATONIC,
        description: "A Platonic solid with 12 pentagonal faces, 30 edges, and 20 vertices. Each vertex is shared by three pentagons.",
        tags: &["platonic", "pentagonal", "complex", "golden ratio"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(dodecahedron),
    },
    ShapeDescriptor {
        id: "icosahedron",
        name: "Icosahedron",
        category: categories::PLATONIC,
        description: "A Platonic solid with 20 triangular faces, 30 edges, and 12 vertices. The most complex of the Platonic solids.",
        tags: &["platonic", "triangular", "complex", "spherical"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::ClosedForm(icosahedron),
    },
];
