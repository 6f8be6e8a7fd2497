//! Knopen en niet-oriënteerbare oppervlakken.
//!
//! Categorie: MATHEMATICAL SHAPES

use std::f64::consts::TAU;

use crate::geom::{Point3, SurfaceDomain, Vec3};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

/// Buisstraal van de knoopvormen.
const KNOT_TUBE_RADIUS: f64 = 0.4;
/// Stap langs de kromme voor het voorwaartse-differentieframe.
const KNOT_FRAME_STEP: f64 = 0.01;

/// Punt op de (p, q)-toruskromme met hoofdstraal 1; `t` loopt over
/// `[0, p * 2π]` voor een gesloten knoop.
fn torus_knot_curve(t: f64, p: f64, q: f64) -> Point3 {
    let winding = q / p * t;
    let radial = (2.0 + winding.cos()) * 0.5;
    Point3::new(radial * t.cos(), radial * t.sin(), winding.sin() * 0.5)
}

/// Buisoppervlak rond de (p, q)-toruskromme. Het lokale frame komt uit een
/// voorwaartse differentie; bij een ontaard frame valt de richting terug op
/// een vaste as.
fn knot_tube(u: f64, v: f64, p: f64, q: f64) -> Point3 {
    let here = torus_knot_curve(u, p, q);
    let ahead = torus_knot_curve(u + KNOT_FRAME_STEP, p, q);

    let tangent = ahead - here;
    let outward = ahead.to_vec3() + here.to_vec3();
    let binormal = tangent.cross(outward).normalized_or(Vec3::Z);
    let normal = binormal.cross(tangent).normalized_or(Vec3::X);

    let offset = normal.mul_scalar(-KNOT_TUBE_RADIUS * v.cos())
        + binormal.mul_scalar(KNOT_TUBE_RADIUS * v.sin());
    here + offset
}

fn torus_knot(u: f64, v: f64) -> Point3 {
    // Zelfde (2, 3)-kromme als de trefoil; de twee ids verschillen alleen
    // in metadata.
    knot_tube(u, v, 2.0, 3.0)
}

fn trefoil_knot(u: f64, v: f64) -> Point3 {
    knot_tube(u, v, 2.0, 3.0)
}

fn figure_eight_knot(u: f64, v: f64) -> Point3 {
    knot_tube(u, v, 4.0, 5.0)
}

/// Doorsnede van twee haaks op elkaar staande cilinders.
fn steinmetz_solid(u: f64, v: f64) -> Point3 {
    let ring = (1.0 - v * v).sqrt();
    Point3::new(u.cos() * ring, u.sin() * ring, v)
}

/// Band met een halve draai; `v` loopt over de breedte.
fn mobius_strip(u: f64, v: f64) -> Point3 {
    let radius = 1.0 + v * 0.5 * (u * 0.5).cos();
    Point3::new(
        radius * u.cos(),
        radius * u.sin(),
        v * 0.5 * (u * 0.5).sin(),
    )
}

fn klein_bottle(u: f64, v: f64) -> Point3 {
    let r = 4.0 * (1.0 - u.cos() / 2.0);
    Point3::new(
        u.cos() * (6.0 + r * v.cos()),
        u.sin() * (6.0 + r * v.cos()),
        r * v.sin(),
    )
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "torusKnot",
        name: "Torus Knot",
        category: categories::MATHEMATICAL,
        description: "A torus knot is a special kind of knot that lies on the surface of a torus. This creates complex interwoven patterns with beautiful mathematical properties.",
        tags: &["mathematical", "knot", "parametric", "complex", "topology"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: torus_knot,
            domain: SurfaceDomain::new(0.0, 2.0 * TAU, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "steinmetzSolid",
        name: "Steinmetz Solid",
        category: categories::MATHEMATICAL,
        description: "A Steinmetz solid is the intersection of two or more cylinders. This creates a solid with interesting geometric properties and curved surfaces.",
        tags: &["mathematical", "intersection", "cylindrical", "parametric"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: steinmetz_solid,
            domain: SurfaceDomain::new(0.0, TAU, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "mobius",
        name: "Möbius Strip",
        category: categories::MATHEMATICAL,
        description: "A surface with only one side and one boundary. Famous for its topological properties, the Möbius strip demonstrates non-orientable surfaces and is fundamental in topology and differential geometry.",
        tags: &["mathematical", "topology", "non-orientable", "one-sided", "möbius", "strip", "boundary", "twist"],
        difficulty: 5,
        resolution_range: ResolutionRange::new(16, 64, 32),
        generator: Generator::Parametric {
            equation: mobius_strip,
            domain: SurfaceDomain::new(0.0, TAU, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "kleinBottle",
        name: "Klein Bottle",
        category: categories::MATHEMATICAL,
        description: "A Klein bottle is a non-orientable surface that has no distinct inside or outside. It is a fascinating topological object that cannot exist in 3D space without self-intersection, representing a 4D surface projected into 3D.",
        tags: &["mathematical", "topology", "non-orientable", "bottle", "parametric", "4D", "klein"],
        difficulty: 5,
        resolution_range: ResolutionRange::new(16, 128, 64),
        generator: Generator::Parametric {
            equation: klein_bottle,
            domain: SurfaceDomain::new(0.0, TAU, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "trefoilKnot",
        name: "Trefoil Knot",
        category: categories::MATHEMATICAL,
        description: "The trefoil knot is the simplest non-trivial knot. It has three crossings and cannot be untangled without cutting, making it a fundamental object in knot theory.",
        tags: &["mathematical", "knot", "topology", "trefoil", "simple"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: trefoil_knot,
            domain: SurfaceDomain::new(0.0, 2.0 * TAU, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "figureBight",
        name: "Figure-8 Knot",
        category: categories::MATHEMATICAL,
        description: "The figure-eight knot is a unique knot with four crossings. It has the remarkable property of being amphichiral - identical to its mirror image.",
        tags: &["mathematical", "knot", "topology", "figure-8", "amphichiral"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: figure_eight_knot,
            domain: SurfaceDomain::new(0.0, 4.0 * TAU, 0.0, TAU),
        },
    },
];

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::{klein_bottle, knot_tube, mobius_strip, torus_knot_curve};

    #[test]
    fn knot_tube_stays_on_tube_radius() {
        for step in 0..8 {
            let u = f64::from(step) * 2.0 * TAU / 8.0;
            let centre = torus_knot_curve(u, 2.0, 3.0);
            let surface = knot_tube(u, 0.7, 2.0, 3.0);
            let distance = (surface - centre).length();
            assert!(
                (distance - 0.4).abs() < 1e-9,
                "afstand {distance} wijkt af van de buisstraal"
            );
        }
    }

    #[test]
    fn klein_bottle_spans_its_large_radius() {
        // Bij u = 0 ligt de mond op x = 6 + r, met r = 2.
        let rim = klein_bottle(0.0, 0.0);
        assert!((rim.x - 8.0).abs() < 1e-12);
        assert!(rim.y.abs() < 1e-12 && rim.z.abs() < 1e-12);
    }

    #[test]
    fn mobius_strip_half_twist_flips_the_edge() {
        let start = mobius_strip(0.0, 1.0);
        let around = mobius_strip(TAU, 1.0);
        // Na één omloop zit de rand aan de andere kant van de middencirkel.
        assert!((start.x - 1.5).abs() < 1e-12);
        assert!((around.x - 0.5).abs() < 1e-9);
    }
}
