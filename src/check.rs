use crate::{element::Handle, error::Error, mesh::QuadMesh};

impl QuadMesh {
    /// Verify the mesh is a closed all-quad polyhedron with consistent
    /// derived data.
    ///
    /// Checks, in order: the mesh has at least one face; every edge carries
    /// both a left and a right face; every face's stored corners agree with
    /// the endpoints of its boundary edges; and the cached valence counters
    /// match a fresh recount over the incidence records. Returns the first
    /// violation found.
    ///
    /// Meant to gate the first subdivision pass on a freshly extracted
    /// mesh. The engine itself preserves all of these properties, so
    /// re-checking between passes is useful in tests but not required.
    pub fn check_closed(&self) -> Result<(), Error> {
        if self.num_faces() == 0 {
            return Err(Error::EmptyMesh);
        }
        for e in self.edges() {
            if self.is_boundary_edge(e) {
                return Err(Error::BoundaryEdge(e));
            }
        }
        for f in self.faces() {
            let [s, e, n, w] = self.face_edges(f);
            let derived = [
                self.edge_vertices(s).0,
                self.edge_vertices(e).0,
                self.edge_vertices(n).1,
                self.edge_vertices(w).1,
            ];
            if derived != self.face_corners(f) {
                return Err(Error::CornerMismatch(f));
            }
            // The sides must also close up into a loop.
            let loop_closes = self.edge_vertices(s).1 == self.edge_vertices(e).0
                && self.edge_vertices(e).1 == self.edge_vertices(n).1
                && self.edge_vertices(n).0 == self.edge_vertices(w).1
                && self.edge_vertices(w).0 == self.edge_vertices(s).0;
            if !loop_closes {
                return Err(Error::CornerMismatch(f));
            }
        }
        let mut edge_counts = vec![0usize; self.num_vertices()];
        for e in self.edges() {
            let (from, to) = self.edge_vertices(e);
            edge_counts[from.index() as usize] += 1;
            edge_counts[to.index() as usize] += 1;
        }
        let mut face_counts = vec![0usize; self.num_vertices()];
        for f in self.faces() {
            for c in self.face_corners(f) {
                face_counts[c.index() as usize] += 1;
            }
        }
        for v in self.vertices() {
            // A zero-valence vertex would divide by zero in the relocation
            // rule; it has no place in a closed polyhedron.
            if edge_counts[v.index() as usize] == 0 || face_counts[v.index() as usize] == 0 {
                return Err(Error::IsolatedVertex(v));
            }
            if self.edge_valence(v) != edge_counts[v.index() as usize] {
                return Err(Error::EdgeValenceMismatch(v));
            }
            if self.face_valence(v) != face_counts[v.index() as usize] {
                return Err(Error::FaceValenceMismatch(v));
            }
        }
        Ok(())
    }
}
