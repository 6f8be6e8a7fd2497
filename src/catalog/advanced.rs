//! Minimaaloppervlakken en projectieve vlakken.
//!
//! Categorie: ADVANCED MATHEMATICAL

use std::f64::consts::{PI, TAU};

use crate::geom::{Point3, SurfaceDomain};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

/// Omwentelingsoppervlak van de kettinglijn.
fn catenoid(u: f64, v: f64) -> Point3 {
    let c = u.cosh();
    Point3::new(c * v.cos(), c * v.sin(), u)
}

/// Rechte lijn die om de as draait en langs de as schuift.
fn helicoid(u: f64, v: f64) -> Point3 {
    Point3::new(u * v.cos(), u * v.sin(), v / PI)
}

fn boy_surface(u: f64, v: f64) -> Point3 {
    let a = u.sin();
    let b = u.cos() * v.sin();
    let c = u.cos() * v.cos();
    let d = 0.5 * (c.powi(3) - 3.0 * c * b.powi(2));

    Point3::new(
        a * d,
        a * (b.powi(3) - 3.0 * b * c.powi(2)),
        -0.5 * a * (b.powi(2) * c + c.powi(3)),
    )
}

fn roman_surface(u: f64, v: f64) -> Point3 {
    Point3::new(
        (2.0 * u).sin() * v.sin() * v.sin(),
        u.sin() * v.cos() * v.sin(),
        u.cos() * v.sin(),
    )
}

fn cross_cap(u: f64, v: f64) -> Point3 {
    Point3::new(
        u.sin() * v.sin(),
        u.sin() * v.cos(),
        u.cos() * (2.0 * v).sin() / 2.0,
    )
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "catenoid",
        name: "Catenoid",
        category: categories::ADVANCED,
        description: "A catenoid is a minimal surface formed by rotating a catenary curve around its directrix. It has zero mean curvature and is the only minimal surface of revolution.",
        tags: &["advanced", "mathematical", "minimal surface", "catenary", "revolution", "zero curvature"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: catenoid,
            domain: SurfaceDomain::new(-1.0, 1.0, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "helicoid",
        name: "Helicoid",
        category: categories::ADVANCED,
        description: "The helicoid is a minimal surface that can be described as a surface swept by a line rotating about and translating along a fixed axis. It is locally isometric to the catenoid.",
        tags: &["advanced", "mathematical", "minimal surface", "helical", "twisted", "isometric"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: helicoid,
            domain: SurfaceDomain::new(-1.0, 1.0, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "boySurface",
        name: "Boy's Surface",
        category: categories::ADVANCED,
        description: "Boy's surface is an immersion of the real projective plane in 3-dimensional space. It demonstrates advanced topological concepts and is famous for being the first known non-orientable surface without self-intersections.",
        tags: &["advanced", "topology", "projective", "non-orientable", "immersion", "boy-surface", "mathematical", "research"],
        difficulty: 5,
        resolution_range: ResolutionRange::new(32, 256, 96),
        generator: Generator::Parametric {
            equation: boy_surface,
            domain: SurfaceDomain::new(0.0, PI, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "romanSurface",
        name: "Roman Surface",
        category: categories::ADVANCED,
        description: "The Roman surface is a self-intersecting mapping of the real projective plane into three-dimensional space. It has four cusps and exhibits beautiful symmetry properties.",
        tags: &["advanced", "mathematical", "projective plane", "self-intersecting", "cusps", "symmetry"],
        difficulty: 5,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: roman_surface,
            domain: SurfaceDomain::new(0.0, TAU, 0.0, PI),
        },
    },
    ShapeDescriptor {
        id: "crossCap",
        name: "Cross-Cap",
        category: categories::ADVANCED,
        description: "A cross-cap is a non-orientable surface that is topologically equivalent to a Möbius strip with a disk attached. It demonstrates how surfaces can have self-intersections.",
        tags: &["advanced", "mathematical", "non-orientable", "cross-cap", "self-intersection", "topology"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: cross_cap,
            domain: SurfaceDomain::new(0.0, PI, 0.0, TAU),
        },
    },
];
