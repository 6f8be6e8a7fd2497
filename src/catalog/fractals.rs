//! Recursieve fractals en parametrische familieleden.
//!
//! Categorie: FRACTALS AND COMPLEX

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geom::{self, Point3, ShapeMesh, SurfaceDomain};

use super::{Generator, ResolutionRange, ShapeDescriptor, categories};

fn sierpinski(depth: u32) -> ShapeMesh {
    geom::sierpinski(depth)
}

fn menger_sponge(depth: u32) -> ShapeMesh {
    geom::menger_sponge(depth)
}

/// Spiraal onder de gulden hoek; de straal groeit met `√u`.
fn fibonacci_spiral(u: f64, v: f64) -> Point3 {
    let golden = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle = u * TAU * golden;
    let radius = u.sqrt();
    Point3::new(radius * angle.cos(), radius * angle.sin(), v)
}

/// `sgn(x) * |x|^n`; de tekenfunctie behandelt 0 als positief.
fn sign_pow(x: f64, exponent: f64) -> f64 {
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    sign * x.abs().powf(exponent)
}

/// Superellipsoïde met vormparameters n1 = 0.7 en n2 = 0.4, tussen bol en
/// blok in.
fn superellipsoid(u: f64, v: f64) -> Point3 {
    const N1: f64 = 0.7;
    const N2: f64 = 0.4;

    let (cu, su) = (u.cos(), u.sin());
    let (cv, sv) = (v.cos(), v.sin());
    Point3::new(
        sign_pow(cu, N1) * sign_pow(cv, N2),
        sign_pow(cu, N1) * sign_pow(sv, N2),
        sign_pow(su, N1),
    )
}

/// Eenbladige hyperboloïde met taille op straal 1.
fn hyperboloid(u: f64, v: f64) -> Point3 {
    const WAIST: f64 = 0.5;

    let radial = (1.0 + u * u).sqrt();
    Point3::new(radial * v.cos(), radial * v.sin(), WAIST * u)
}

pub const REGISTRATIONS: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        id: "sierpinski",
        name: "Sierpinski Pyramid",
        category: categories::FRACTALS,
        description: "The Sierpinski pyramid is a 3D fractal formed by recursively subdividing a tetrahedron. It demonstrates self-similarity and infinite detail at all scales, showcasing the mathematical beauty of fractals.",
        tags: &["fractal", "self-similar", "recursive", "sierpinski", "tetrahedron", "infinite-detail", "mathematical", "chaos-theory"],
        difficulty: 4,
        resolution_range: ResolutionRange::new(8, 64, 16),
        generator: Generator::Fractal(sierpinski),
    },
    ShapeDescriptor {
        id: "fibonacci",
        name: "Fibonacci Spiral",
        category: categories::FRACTALS,
        description: "The Fibonacci spiral is based on the golden ratio and appears frequently in nature. This 3D version creates a spiraling surface following the Fibonacci sequence.",
        tags: &["fractal", "fibonacci", "spiral", "golden ratio", "nature", "sequence"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: fibonacci_spiral,
            domain: SurfaceDomain::new(0.0, 1.0, -1.0, 1.0),
        },
    },
    ShapeDescriptor {
        id: "superellipsoid",
        name: "Superellipsoid",
        category: categories::FRACTALS,
        description: "A superellipsoid is a generalization of an ellipsoid with adjustable roundness parameters. It can range from cube-like to sphere-like shapes and everything in between.",
        tags: &["complex", "superellipsoid", "parametric", "generalization", "ellipsoid", "roundness"],
        difficulty: 3,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: superellipsoid,
            domain: SurfaceDomain::new(-FRAC_PI_2, FRAC_PI_2, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "hyperboloid",
        name: "Hyperboloid",
        category: categories::FRACTALS,
        description: "A hyperboloid is a quadric surface that can take two forms: one sheet (saddle-like) or two sheets. This creates fascinating curved surfaces with ruled line properties.",
        tags: &["complex", "hyperboloid", "quadric", "saddle", "ruled surface", "curved"],
        difficulty: 4,
        resolution_range: ResolutionRange::DEFAULT,
        generator: Generator::Parametric {
            equation: hyperboloid,
            domain: SurfaceDomain::new(-1.0, 1.0, 0.0, TAU),
        },
    },
    ShapeDescriptor {
        id: "mengerSponge",
        name: "Menger Sponge",
        category: categories::FRACTALS,
        description: "The Menger sponge is a three-dimensional fractal built by repeatedly removing the centre and face-centre cells from a subdivided cube. Each step multiplies the cube count by twenty, approaching zero volume with unbounded surface area.",
        tags: &["fractal", "menger", "sponge", "recursive", "self-similar", "cubes"],
        difficulty: 4,
        resolution_range: ResolutionRange::new(8, 64, 16),
        generator: Generator::Fractal(menger_sponge),
    },
];

#[cfg(test)]
mod tests {
    use super::{fibonacci_spiral, sign_pow, superellipsoid};

    #[test]
    fn sign_pow_keeps_sign_and_magnitude() {
        assert!((sign_pow(0.25, 0.5) - 0.5).abs() < 1e-12);
        assert!((sign_pow(-0.25, 0.5) + 0.5).abs() < 1e-12);
        assert_eq!(sign_pow(0.0, 0.7), 0.0);
    }

    #[test]
    fn superellipsoid_touches_the_poles() {
        use std::f64::consts::FRAC_PI_2;
        let top = superellipsoid(FRAC_PI_2, 0.0);
        assert!(top.x.abs() < 1e-6 && top.y.abs() < 1e-6);
        assert!((top.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fibonacci_radius_stays_in_unit_disc() {
        for step in 0..=10 {
            let u = f64::from(step) / 10.0;
            let point = fibonacci_spiral(u, 0.0);
            let radius = point.x.hypot(point.y);
            assert!(radius <= 1.0 + 1e-12);
        }
    }
}
