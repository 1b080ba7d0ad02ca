use crate::{dump::Trace, element::Handle, error::Error, mesh::QuadMesh};
use glam::DVec3;

/// Opaque identifier for an entity owned by a solid kernel.
///
/// The mesh engine never interprets these; it only stores them and hands
/// them back when assembling higher-dimensional entities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KernelId(pub u64);

/// The boundary between the mesh engine and the host's B-rep kernel.
///
/// The engine drives construction bottom-up: all points, then all lines,
/// then all faces, then one solid. Implementations own the geometry those
/// ids refer to; the engine keeps only the ids.
pub trait SolidKernel {
    fn make_point(&mut self, position: DVec3) -> Result<KernelId, Error>;

    fn make_line(&mut self, begin: KernelId, end: KernelId) -> Result<KernelId, Error>;

    /// Make a face bounded by four lines through four corner points, given
    /// in rotational order.
    fn make_face(
        &mut self,
        edges: &[KernelId; 4],
        corners: &[KernelId; 4],
    ) -> Result<KernelId, Error>;

    fn make_solid(&mut self, faces: &[KernelId]) -> Result<KernelId, Error>;

    fn surface_area(&self, solid: KernelId) -> Result<f64, Error>;

    fn volume(&self, solid: KernelId) -> Result<f64, Error>;
}

/// The solid built from a mesh, with its mass properties as reported by
/// the kernel that built it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidReport {
    pub solid: KernelId,
    pub area: f64,
    pub volume: f64,
}

/// Push the whole mesh across the kernel boundary and assemble a solid.
///
/// Kernel ids for vertices and faces are recorded on the mesh records, so
/// the caller can correlate mesh entities with kernel entities afterwards.
/// Point and edge ids are also kept in local index tables for the duration
/// of the call; lines and faces look their constituents up there. The only
/// failures are the kernel's own.
pub fn build_solid(mesh: &mut QuadMesh, kernel: &mut impl SolidKernel) -> Result<KernelId, Error> {
    let mut point_ids = Vec::with_capacity(mesh.num_vertices());
    for v in mesh.vertices() {
        let id = kernel.make_point(mesh.point(v))?;
        mesh.vertex_mut(v).kernel = Some(id);
        point_ids.push(id);
    }
    let mut edge_ids = Vec::with_capacity(mesh.num_edges());
    for e in mesh.edges() {
        let (from, to) = mesh.edge_vertices(e);
        edge_ids.push(kernel.make_line(
            point_ids[from.index() as usize],
            point_ids[to.index() as usize],
        )?);
    }
    let mut face_ids = Vec::with_capacity(mesh.num_faces());
    for f in mesh.faces() {
        let edges = mesh.face_edges(f).map(|e| edge_ids[e.index() as usize]);
        let corners = mesh
            .face_corners(f)
            .map(|c| point_ids[c.index() as usize]);
        let id = kernel.make_face(&edges, &corners)?;
        mesh.face_mut(f).kernel = Some(id);
        face_ids.push(id);
    }
    kernel.make_solid(&face_ids)
}

/// Validate, refine and hand off in one call.
///
/// This is the whole pipeline a host plugin runs: gate on
/// [`check_closed`](QuadMesh::check_closed), run `passes` subdivision
/// passes with per-pass tracing, then build the solid and query its mass
/// properties.
pub fn refine_to_solid(
    mesh: &mut QuadMesh,
    passes: usize,
    trace: Trace,
    kernel: &mut impl SolidKernel,
) -> Result<SolidReport, Error> {
    mesh.check_closed()?;
    mesh.reserve_subdivided(passes);
    trace.report(0, mesh);
    for pass in 1..=passes {
        mesh.subdivide()?;
        trace.report(pass, mesh);
    }
    let solid = build_solid(mesh, kernel)?;
    Ok(SolidReport {
        solid,
        area: kernel.surface_area(solid)?,
        volume: kernel.volume(solid)?,
    })
}
