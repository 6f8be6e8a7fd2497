use super::{Point3, Vec3};

/// Triangle mesh produced by every shape generator.
///
/// A buffer is created fresh per generation call and never mutated after
/// construction; regeneration always yields a new buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    pub normals: Option<Vec<[f64; 3]>>,
}

impl ShapeMesh {
    /// Create a new mesh with positions and indices only.
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            normals: None,
        }
    }

    /// Assemble a mesh from generator output: convert the points, keep the
    /// index list, and derive per-vertex normals by area-weighted averaging.
    #[must_use]
    pub fn assemble(points: Vec<Point3>, indices: Vec<u32>) -> Self {
        let normals = compute_smooth_normals(&points, &indices);
        let positions = points.into_iter().map(Point3::to_array).collect();
        Self {
            positions,
            indices,
            normals: Some(normals),
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    /// Returns true if all vertex indices are within bounds.
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    /// Returns true if indices represent a triangle list.
    #[must_use]
    pub fn has_triangle_indices(&self) -> bool {
        self.indices.len() % 3 == 0
    }

    /// Returns true if the normal buffer, when present, matches `positions.len()`.
    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        self.normals
            .as_ref()
            .is_none_or(|normals| normals.len() == self.positions.len())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.has_triangle_indices() {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh normal buffer does not match vertex count".to_string());
        }
        Ok(())
    }

    /// Returns the position buffer as a flat slice: `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// This is a zero-copy view over `positions`, useful for wasm/JS adapters that
    /// expect packed numeric buffers.
    #[must_use]
    pub fn positions_flat(&self) -> &[f64] {
        flatten_f64_array_slice(&self.positions)
    }

    /// Returns the normal buffer as a flat slice: `[nx0, ny0, nz0, ...]`.
    ///
    /// This is a zero-copy view over `normals` when present.
    #[must_use]
    pub fn normals_flat(&self) -> Option<&[f64]> {
        self.normals.as_deref().map(flatten_f64_array_slice)
    }
}

fn flatten_f64_array_slice(data: &[[f64; 3]]) -> &[f64] {
    let count = data.len().checked_mul(3).unwrap_or(0);
    let ptr = data.as_ptr().cast::<f64>();
    // SAFETY: `[[f64; 3]]` is stored contiguously, and we compute the element count as `len * 3`.
    unsafe { std::slice::from_raw_parts(ptr, count) }
}

/// Per-vertex normals as the area-weighted average of incident face normals.
///
/// Each face contributes its unnormalized cross product (twice the face area
/// times the unit normal) to all three corners; accumulated sums are
/// normalized at the end. Degenerate vertices fall back to +Z. Meshes with
/// per-face duplicated vertices come out flat-shaded for free, since every
/// vertex then has exactly one incident face.
#[must_use]
pub fn compute_smooth_normals(points: &[Point3], indices: &[u32]) -> Vec<[f64; 3]> {
    let mut normals = vec![[0.0, 0.0, 0.0]; points.len()];

    for tri in indices.chunks_exact(3) {
        let i0 = tri[0] as usize;
        let i1 = tri[1] as usize;
        let i2 = tri[2] as usize;

        let (Some(a), Some(b), Some(c)) = (points.get(i0), points.get(i1), points.get(i2)) else {
            continue;
        };

        let ab = *b - *a;
        let ac = *c - *a;
        let n = ab.cross(ac);

        for &corner in &[i0, i1, i2] {
            normals[corner][0] += n.x;
            normals[corner][1] += n.y;
            normals[corner][2] += n.z;
        }
    }

    for n in &mut normals {
        let len = Vec3::from_array(*n).length();
        if len.is_finite() && len > 0.0 {
            let inv = 1.0 / len;
            n[0] *= inv;
            n[1] *= inv;
            n[2] *= inv;
        } else {
            *n = [0.0, 0.0, 1.0];
        }
    }

    normals
}
