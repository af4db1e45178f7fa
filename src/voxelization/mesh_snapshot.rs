use crate::math::{Isometry, Point, Point2, Real, Vector};
use crate::shape::Triangle;

/// Error indicating an inconsistency in the mesh data handed to the voxelizers.
///
/// These are data-contract violations: they are reported immediately at
/// snapshot construction and never silently recovered.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeshDataError {
    /// A triangle references a vertex index outside of the vertex buffer.
    #[error("triangle {triangle} references vertex {index} but the mesh only has {num_vertices} vertices")]
    VertexIndexOutOfBounds {
        /// Index of the offending triangle.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
    /// Vertex colors were provided, but not exactly one per vertex.
    #[error("the mesh has {num_colors} vertex colors for {num_vertices} vertices")]
    ColorCountMismatch {
        /// Number of provided vertex colors.
        num_colors: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
    /// Texture coordinates were provided, but not exactly one per vertex.
    #[error("the mesh has {num_uvs} texture coordinates for {num_vertices} vertices")]
    UvCountMismatch {
        /// Number of provided texture coordinates.
        num_uvs: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
}

/// A read-only snapshot of one triangle mesh, with everything the voxelizers
/// need precomputed.
///
/// The snapshot stores world-space vertices, triangle index triples, one unit
/// normal per triangle, and optional per-vertex colors and texture
/// coordinates. Its constructors validate the index/attribute invariants once,
/// so voxelization itself is infallible.
pub struct MeshSnapshot {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    normals: Vec<Vector<Real>>,
    colors: Vec<Vector<Real>>,
    uvs: Vec<Point2<Real>>,
}

impl MeshSnapshot {
    /// Builds a snapshot from world-space vertices.
    ///
    /// `colors` and `uvs` may be empty; if they aren't, they must contain
    /// exactly one entry per vertex, addressable by the same indices as
    /// `vertices`. One normal per triangle is computed as the normalized cross
    /// product of its first two edges, in winding order.
    ///
    /// A degenerate triangle gets the zero vector as its normal, which the
    /// intersection test treats as a non-discriminating axis; such triangles
    /// are never rejected.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        colors: Vec<Vector<Real>>,
        uvs: Vec<Point2<Real>>,
    ) -> Result<Self, MeshDataError> {
        let num_vertices = vertices.len();

        if !colors.is_empty() && colors.len() != num_vertices {
            return Err(MeshDataError::ColorCountMismatch {
                num_colors: colors.len(),
                num_vertices,
            });
        }

        if !uvs.is_empty() && uvs.len() != num_vertices {
            return Err(MeshDataError::UvCountMismatch {
                num_uvs: uvs.len(),
                num_vertices,
            });
        }

        for (triangle, idx) in indices.iter().enumerate() {
            for &index in idx {
                if index as usize >= num_vertices {
                    return Err(MeshDataError::VertexIndexOutOfBounds {
                        triangle,
                        index,
                        num_vertices,
                    });
                }
            }
        }

        let normals = indices
            .iter()
            .enumerate()
            .map(|(tri_id, idx)| {
                let tri = Triangle::new(
                    vertices[idx[0] as usize],
                    vertices[idx[1] as usize],
                    vertices[idx[2] as usize],
                );
                tri.scaled_normal().try_normalize(0.0).unwrap_or_else(|| {
                    log::debug!("triangle {tri_id} is degenerate, falling back to a zero normal");
                    Vector::zeros()
                })
            })
            .collect();

        Ok(Self {
            vertices,
            indices,
            normals,
            colors,
            uvs,
        })
    }

    /// Builds a snapshot from local-space vertices and a transform.
    ///
    /// Each vertex is scaled component-wise by `scale`, then mapped to world
    /// space by `pos`. See [`MeshSnapshot::new`] for the attribute invariants.
    pub fn from_local_space(
        pos: &Isometry<Real>,
        scale: &Vector<Real>,
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
        colors: Vec<Vector<Real>>,
        uvs: Vec<Point2<Real>>,
    ) -> Result<Self, MeshDataError> {
        let vertices = vertices
            .into_iter()
            .map(|pt| pos * Point::from(pt.coords.component_mul(scale)))
            .collect();
        Self::new(vertices, indices, colors, uvs)
    }

    /// The world-space vertices of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex index triples of this mesh, in insertion order.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// One unit normal per triangle (the zero vector for degenerate triangles).
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The per-vertex RGB colors, or an empty slice if the mesh has none.
    #[inline]
    pub fn colors(&self) -> &[Vector<Real>] {
        &self.colors
    }

    /// The per-vertex texture coordinates, or an empty slice if the mesh has none.
    #[inline]
    pub fn uvs(&self) -> &[Point2<Real>] {
        &self.uvs
    }

    /// The `i`-th triangle of this mesh, in world space.
    #[inline]
    pub fn triangle(&self, i: usize) -> Triangle {
        let idx = self.indices[i];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }
}
