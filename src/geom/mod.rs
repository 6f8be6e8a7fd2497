mod core;
mod fractal;
mod mesh;
mod sampler;
mod solids;

pub use core::{Point3, Vec3};
pub use fractal::{depth_for_resolution, menger_sponge, sierpinski};
pub use mesh::{ShapeMesh, compute_smooth_normals};
pub use sampler::{SurfaceDomain, sample_surface, sample_surface_in_domain, triangulate_grid};
pub use solids::{
    cone, cube, cylinder, dodecahedron, icosahedron, octahedron, prism, sphere, star_polyhedron,
    tetrahedron, torus,
};
