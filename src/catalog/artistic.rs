//! Organische en decoratieve oppervlakken.
//!
//! Categorie: ARTISTIC SHAPES

use std::f64::consts::{PI, TAU};

use crate::geom::{Point3, SurfaceDomain};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

/// Taps toelopende spiraal; de fase `u + 6v` draait de mantel om de as.
fn spiral_horn(u: f64, v: f64) -> Point3 {
    let scale = (1.0 - v).powf(0.8) * 0.6 + 0.4;
    let phase = u + 6.0 * v;
    Point3::new(scale * phase.cos(), scale * phase.sin(), v)
}

/// Logaritmische schelp: straal groeit met `(v/π)^4`, de as zakt met `u`.
fn nautilus_shell(u: f64, v: f64) -> Point3 {
    const A: f64 = 0.2;
    const B: f64 = 0.6;
    const C: f64 = 0.2;
    const N: f64 = 4.0;

    let r = A + B * (v / PI).powf(N);
    Point3::new(
        r * u.cos() * v.sin(),
        r * u.sin() * v.sin(),
        r * v.cos() - C * u,
    )
}

fn double_helix(u: f64, v: f64) -> Point3 {
    const RADIUS: f64 = 0.3;
    const COIL: f64 = 1.0;

    Point3::new(
        u.cos() + RADIUS * u.cos() * (u * COIL).cos(),
        u.sin() + RADIUS * u.sin() * (u * COIL).cos(),
        v * 2.0 + RADIUS * (u * COIL).sin(),
    )
}

fn wave_surface(u: f64, v: f64) -> Point3 {
    const FREQUENCY: f64 = 3.0;
    const AMPLITUDE: f64 = 0.2;

    Point3::new(
        u,
        v,
        AMPLITUDE * (FREQUENCY * PI * u).sin() * (FREQUENCY * PI * v).sin(),
    )
}

fn twisted_cube(u: f64, v: f64) -> Point3 {
    const TWIST: f64 = 0.35;

    Point3::new(u * (PI * v * TWIST).cos(), u * (PI * v * TWIST).sin(), v)
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "horn",
        name: "Spiral Horn",
        category: categories::ARTISTIC,
        description: "A spiral horn shape that mimics the natural growth patterns found in shells, horns, and other organic structures. The shape tapers and spirals outward.",
        tags: &["artistic", "spiral", "horn", "organic", "natural", "tapering"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: spiral_horn,
            domain: SurfaceDomain::new(0.0, TAU, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "shell",
        name: "Nautilus Shell",
        category: categories::ARTISTIC,
        description: "A nautilus shell shape that demonstrates the logarithmic spiral found in nature. This beautiful form combines mathematical precision with organic aesthetics, showcasing the golden ratio and Fibonacci sequences.",
        tags: &["artistic", "shell", "nautilus", "spiral", "logarithmic", "golden-ratio", "fibonacci", "organic"],
        difficulty: 4,
        resolution_range: ResolutionRange::new(16, 128, 48),
        generator: Generator::Parametric {
            equation: nautilus_shell,
            domain: SurfaceDomain::new(0.0, 4.0 * PI, 0.0, PI),
        },
    },
    ShapeDescriptor {
        id: "helix",
        name: "Double Helix",
        category: categories::ARTISTIC,
        description: "A double helix structure similar to DNA. This shape demonstrates how two helical curves can intertwine to create complex but elegant forms.",
        tags: &["artistic", "helix", "DNA", "double", "spiral", "biological", "intertwined"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: double_helix,
            domain: SurfaceDomain::new(0.0, 4.0 * PI, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "wave",
        name: "Wave Surface",
        category: categories::ARTISTIC,
        description: "A wave surface that creates rippling patterns similar to water waves. The surface undulates in both directions creating complex interference patterns.",
        tags: &["artistic", "wave", "surface", "ripple", "water", "interference", "undulating"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: wave_surface,
            domain: SurfaceDomain::new(-1.0, 1.0, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "twist",
        name: "Twisted Cube",
        category: categories::ARTISTIC,
        description: "A twisted surface that demonstrates how simple geometric forms can be transformed into complex artistic shapes through mathematical transformations.",
        tags: &["artistic", "twist", "cube", "transformation", "deformation", "sculptural"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: twisted_cube,
            domain: SurfaceDomain::new(-1.0, 1.0, -1.0, 1.0),
        },
    },
];
