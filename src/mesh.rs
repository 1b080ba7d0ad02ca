use crate::{
    element::{EH, Edge, FH, Face, Handle, VH, Vertex},
    lock::AxisLock,
    solid::KernelId,
};
use glam::DVec3;

/// Topology store for a closed all-quadrilateral mesh.
///
/// Three parallel arenas addressed by the [`VH`], [`EH`] and [`FH`] handle
/// types. Entities are append-only within one generation; a subdivision
/// pass layers a new, larger generation on top and old handles stay valid
/// throughout (growth reallocates the arenas, never compacts them).
///
/// The only mutation primitives are the Euler operators [`add_vertex`],
/// [`add_edge`] and [`add_face`], which keep the cross-references (edge
/// face links, derived corners, valence counts, lock propagation)
/// consistent at every return.
///
/// [`add_vertex`]: QuadMesh::add_vertex
/// [`add_edge`]: QuadMesh::add_edge
/// [`add_face`]: QuadMesh::add_face
pub struct QuadMesh {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) faces: Vec<Face>,
}

impl QuadMesh {
    pub fn new() -> Self {
        QuadMesh {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(nverts: usize, nedges: usize, nfaces: usize) -> Self {
        QuadMesh {
            vertices: Vec::with_capacity(nverts),
            edges: Vec::with_capacity(nedges),
            faces: Vec::with_capacity(nfaces),
        }
    }

    /// Grow the arenas to hold at least the given totals.
    pub fn reserve(&mut self, nverts: usize, nedges: usize, nfaces: usize) {
        self.vertices
            .reserve(nverts.saturating_sub(self.vertices.len()));
        self.edges.reserve(nedges.saturating_sub(self.edges.len()));
        self.faces.reserve(nfaces.saturating_sub(self.faces.len()));
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    // The handle iterators capture no borrow of the mesh, so entities can
    // be mutated while walking them.
    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<> {
        (0..(self.num_vertices() as u32)).map(|i| i.into())
    }

    pub fn edges(&self) -> impl Iterator<Item = EH> + use<> {
        (0..(self.num_edges() as u32)).map(|i| i.into())
    }

    pub fn faces(&self) -> impl Iterator<Item = FH> + use<> {
        (0..(self.num_faces() as u32)).map(|i| i.into())
    }

    pub(crate) fn vertex(&self, v: VH) -> &Vertex {
        &self.vertices[v.index() as usize]
    }

    pub(crate) fn vertex_mut(&mut self, v: VH) -> &mut Vertex {
        &mut self.vertices[v.index() as usize]
    }

    pub(crate) fn edge(&self, e: EH) -> &Edge {
        &self.edges[e.index() as usize]
    }

    pub(crate) fn edge_mut(&mut self, e: EH) -> &mut Edge {
        &mut self.edges[e.index() as usize]
    }

    pub(crate) fn face(&self, f: FH) -> &Face {
        &self.faces[f.index() as usize]
    }

    pub(crate) fn face_mut(&mut self, f: FH) -> &mut Face {
        &mut self.faces[f.index() as usize]
    }

    pub fn point(&self, v: VH) -> DVec3 {
        self.vertex(v).position
    }

    pub fn set_point(&mut self, v: VH, position: DVec3) {
        self.vertex_mut(v).position = position;
    }

    pub fn vertex_lock(&self, v: VH) -> AxisLock {
        self.vertex(v).lock
    }

    /// The number of edges incident on this vertex.
    pub fn edge_valence(&self, v: VH) -> usize {
        self.vertex(v).edge_valence as usize
    }

    /// The number of faces incident on this vertex.
    pub fn face_valence(&self, v: VH) -> usize {
        self.vertex(v).face_valence as usize
    }

    pub fn vertex_kernel(&self, v: VH) -> Option<KernelId> {
        self.vertex(v).kernel
    }

    pub fn edge_vertices(&self, e: EH) -> (VH, VH) {
        let edge = self.edge(e);
        (edge.from, edge.to)
    }

    pub fn edge_faces(&self, e: EH) -> (Option<FH>, Option<FH>) {
        let edge = self.edge(e);
        (edge.left, edge.right)
    }

    pub fn edge_lock(&self, e: EH) -> AxisLock {
        self.edge(e).lock
    }

    pub fn edge_successor(&self, e: EH) -> Option<EH> {
        self.edge(e).successor
    }

    pub fn is_boundary_edge(&self, e: EH) -> bool {
        let edge = self.edge(e);
        edge.left.is_none() || edge.right.is_none()
    }

    pub fn midpoint(&self, e: EH) -> DVec3 {
        let (from, to) = self.edge_vertices(e);
        (self.point(from) + self.point(to)) * 0.5
    }

    /// Boundary edges in south, east, north, west order.
    pub fn face_edges(&self, f: FH) -> [EH; 4] {
        self.face(f).edges
    }

    /// Corner vertices in rotational order, starting at the south-west one.
    pub fn face_corners(&self, f: FH) -> [VH; 4] {
        self.face(f).corners
    }

    pub fn face_lock(&self, f: FH) -> AxisLock {
        self.face(f).lock
    }

    pub fn face_point(&self, f: FH) -> Option<VH> {
        self.face(f).face_point
    }

    pub fn face_kernel(&self, f: FH) -> Option<KernelId> {
        self.face(f).kernel
    }

    pub fn face_centroid(&self, f: FH) -> DVec3 {
        self.face(f)
            .corners
            .iter()
            .fold(DVec3::ZERO, |total, c| total + self.point(*c))
            * 0.25
    }

    /// Append a vertex with zero valence, no lock and a cleared accumulator.
    pub fn add_vertex(&mut self, position: DVec3) -> VH {
        let vi = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position,
            accum: DVec3::ZERO,
            lock: AxisLock::FREE,
            edge_valence: 0,
            face_valence: 0,
            kernel: None,
        });
        vi.into()
    }

    /// Append a directed edge with both face references unset.
    ///
    /// Increments the edge valence of both endpoints. Duplicate edges are
    /// not detected; supplying each topological edge exactly once is the
    /// caller's responsibility.
    pub fn add_edge(&mut self, from: VH, to: VH) -> EH {
        let ei = self.edges.len() as u32;
        self.edges.push(Edge {
            from,
            to,
            left: None,
            right: None,
            lock: AxisLock::FREE,
            successor: None,
        });
        self.vertex_mut(from).edge_valence += 1;
        self.vertex_mut(to).edge_valence += 1;
        ei.into()
    }

    /// Append a quad face bounded by four existing edges.
    ///
    /// The edges must already form a consistent loop: south and east run
    /// along the corner loop, north and west against it, with shared
    /// corners where consecutive sides meet. That is a caller contract
    /// (the host extraction and the subdivision engine both produce it by
    /// construction) and is only checked in debug builds.
    ///
    /// Corners are derived from the edges; the face installs itself as the
    /// left face of south/east and the right face of north/west, bumps the
    /// face valence of its corners, and unions `lock` into its corners and
    /// boundary edges.
    pub fn add_face(&mut self, south: EH, east: EH, north: EH, west: EH, lock: AxisLock) -> FH {
        debug_assert_eq!(self.edge(south).to, self.edge(east).from);
        debug_assert_eq!(self.edge(east).to, self.edge(north).to);
        debug_assert_eq!(self.edge(north).from, self.edge(west).to);
        debug_assert_eq!(self.edge(west).from, self.edge(south).from);
        let fi: FH = (self.faces.len() as u32).into();
        let corners = [
            self.edge(south).from,
            self.edge(east).from,
            self.edge(north).to,
            self.edge(west).to,
        ];
        for side in [south, east] {
            let edge = self.edge_mut(side);
            debug_assert!(edge.left.is_none(), "edge already has a left face");
            edge.left = Some(fi);
            edge.lock |= lock;
        }
        for side in [north, west] {
            let edge = self.edge_mut(side);
            debug_assert!(edge.right.is_none(), "edge already has a right face");
            edge.right = Some(fi);
            edge.lock |= lock;
        }
        for c in corners {
            let vertex = self.vertex_mut(c);
            vertex.face_valence += 1;
            vertex.lock |= lock;
        }
        self.faces.push(Face {
            edges: [south, east, north, west],
            corners,
            face_point: None,
            lock,
            kernel: None,
        });
        fi
    }
}

impl Default for QuadMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::QuadMesh;
    use crate::lock::AxisLock;
    use glam::DVec3;

    #[test]
    fn t_box_counts() {
        let qbox = QuadMesh::unit_box();
        assert_eq!(qbox.num_vertices(), 8);
        assert_eq!(qbox.num_edges(), 12);
        assert_eq!(qbox.num_faces(), 6);
    }

    #[test]
    fn t_box_valences() {
        let qbox = QuadMesh::unit_box();
        for v in qbox.vertices() {
            assert_eq!(qbox.edge_valence(v), 3);
            assert_eq!(qbox.face_valence(v), 3);
        }
    }

    #[test]
    fn t_box_watertight() {
        let qbox = QuadMesh::unit_box();
        for e in qbox.edges() {
            assert!(!qbox.is_boundary_edge(e), "{e} must border two faces");
        }
    }

    #[test]
    fn t_box_corners_match_edges() {
        let qbox = QuadMesh::unit_box();
        for f in qbox.faces() {
            let [s, e, n, w] = qbox.face_edges(f);
            let corners = qbox.face_corners(f);
            assert_eq!(corners[0], qbox.edge_vertices(s).0);
            assert_eq!(corners[1], qbox.edge_vertices(e).0);
            assert_eq!(corners[2], qbox.edge_vertices(n).1);
            assert_eq!(corners[3], qbox.edge_vertices(w).1);
        }
    }

    #[test]
    fn t_mutate_while_iterating() {
        let mut mesh = QuadMesh::unit_box();
        for v in mesh.vertices() {
            let p = mesh.point(v);
            mesh.set_point(v, p * 2.0);
        }
        assert_eq!(mesh.point(6u32.into()), DVec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn t_add_edge_bumps_valence() {
        let mut mesh = QuadMesh::new();
        let a = mesh.add_vertex(DVec3::ZERO);
        let b = mesh.add_vertex(DVec3::X);
        mesh.add_edge(a, b);
        assert_eq!(mesh.edge_valence(a), 1);
        assert_eq!(mesh.edge_valence(b), 1);
        assert_eq!(mesh.face_valence(a), 0);
    }

    #[test]
    fn t_face_lock_propagates() {
        let mut locks = [AxisLock::FREE; 6];
        locks[0].set_z(true); // bottom face
        let qbox = QuadMesh::quad_box_with_locks(DVec3::ZERO, DVec3::ONE, locks);
        // The four bottom corners picked up the lock through add_face.
        let locked = qbox
            .vertices()
            .filter(|v| qbox.vertex_lock(*v).z())
            .count();
        assert_eq!(locked, 4);
        // The four bottom rim edges carry it too; verticals and top do not.
        let locked = qbox.edges().filter(|e| qbox.edge_lock(*e).z()).count();
        assert_eq!(locked, 4);
    }

    #[test]
    fn t_centroid() {
        let qbox = QuadMesh::unit_box();
        let centroids: Vec<DVec3> = qbox.faces().map(|f| qbox.face_centroid(f)).collect();
        assert!(centroids.contains(&DVec3::new(0.5, 0.5, 0.0)));
        assert!(centroids.contains(&DVec3::new(0.5, 0.5, 1.0)));
    }
}
