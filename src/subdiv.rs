use crate::{element::FH, error::Error, mesh::QuadMesh};
use glam::DVec3;

impl QuadMesh {
    /// Reserve space for the final mesh after `niter` subdivision passes.
    ///
    /// A pass adds one vertex per face and per edge, splits every edge in
    /// two and adds four interior edges per face, and turns every face into
    /// four. Reserving up front keeps each pass to at most one reallocation
    /// per arena.
    pub(crate) fn reserve_subdivided(&mut self, niter: usize) {
        let mut nv = self.num_vertices();
        let mut ne = self.num_edges();
        let mut nf = self.num_faces();
        for _ in 0..niter {
            (nv, ne, nf) = (nv + ne + nf, 2 * ne + 4 * nf, 4 * nf);
        }
        self.reserve(nv, ne, nf);
    }

    /// Subdivide the mesh according to the [Catmull-Clark
    /// scheme](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface).
    ///
    /// The mesh must be a closed all-quad polyhedron; run
    /// [`check_closed`](QuadMesh::check_closed) once before the first pass.
    ///
    /// ```rust
    /// use subsurf::QuadMesh;
    ///
    /// let mut mesh = QuadMesh::unit_box();
    /// assert_eq!((8, 12, 6), (mesh.num_vertices(), mesh.num_edges(), mesh.num_faces()));
    /// mesh.subdivide_catmull_clark(1).expect("Subdivision failed");
    /// assert_eq!((26, 48, 24), (mesh.num_vertices(), mesh.num_edges(), mesh.num_faces()));
    /// mesh.check_closed().expect("Topological errors found");
    /// ```
    pub fn subdivide_catmull_clark(&mut self, iterations: usize) -> Result<(), Error> {
        if iterations == 0 {
            return Ok(());
        }
        self.reserve_subdivided(iterations);
        for _ in 0..iterations {
            self.subdivide()?;
        }
        Ok(())
    }

    /// One full refinement pass over the current generation.
    ///
    /// Four phases with a strict happens-before order, because each reads
    /// state the previous one wrote within the same pass: face points, then
    /// edge points and splits, then the face rebuild, then the relocation
    /// of the original vertices. Entity counts are captured at entry; the
    /// entities appended during the pass belong to the next generation and
    /// are never revisited as if they were original.
    pub fn subdivide(&mut self) -> Result<(), Error> {
        let nv = self.num_vertices();
        let ne = self.num_edges();
        let nf = self.num_faces();
        // Clear the per-pass scratch left over from the previous generation.
        for v in &mut self.vertices[..nv] {
            v.accum = DVec3::ZERO;
        }
        for e in &mut self.edges[..ne] {
            e.successor = None;
        }
        self.face_points(nf);
        self.edge_points(ne)?;
        self.rebuild_faces(nf)?;
        self.relocate_vertices(nv);
        Ok(())
    }

    /// Phase A: append one centroid vertex per original face and feed the
    /// face-point term of the vertex-update rule into the corner
    /// accumulators.
    fn face_points(&mut self, nf: usize) {
        for fi in 0..nf {
            let corners = self.faces[fi].corners;
            let centroid = corners
                .iter()
                .fold(DVec3::ZERO, |total, c| total + self.point(*c))
                * 0.25;
            let fv = self.add_vertex(centroid);
            self.faces[fi].face_point = Some(fv);
            for c in corners {
                self.vertex_mut(c).accum += centroid;
            }
        }
    }

    /// Phase B: append one edge point per original edge and split the edge
    /// around it.
    ///
    /// The edge point averages the two endpoints with the two adjacent face
    /// points, except on locked axes where it degenerates to the plain
    /// midpoint. The original record keeps the first half (rewired to end
    /// at the edge point) and links the appended second half through
    /// `successor` so the face rebuild can find it. One unit of edge
    /// valence moves from the original end vertex to the edge point, which
    /// now sits between the two halves.
    fn edge_points(&mut self, ne: usize) -> Result<(), Error> {
        for i in 0..ne {
            let edge = self.edges[i];
            let ei = (i as u32).into();
            let lf = edge.left.ok_or(Error::BoundaryEdge(ei))?;
            let rf = edge.right.ok_or(Error::BoundaryEdge(ei))?;
            let lp = self.point(self.face(lf).face_point.ok_or(Error::MissingFacePoint(lf))?);
            let rp = self.point(self.face(rf).face_point.ok_or(Error::MissingFacePoint(rf))?);
            let p0 = self.point(edge.from);
            let p1 = self.point(edge.to);
            let mid = (p0 + p1) * 0.5;
            let mut pos = (p0 + p1 + lp + rp) * 0.25;
            for k in 0..3 {
                if edge.lock.axis(k) {
                    pos[k] = mid[k];
                }
            }
            let ev = self.add_vertex(pos);
            // Edge-contribution term: twice the midpoint, once per incident
            // edge. Combined with the face term and the double division in
            // phase D this reproduces the Catmull-Clark mask exactly.
            self.vertex_mut(edge.from).accum += mid * 2.0;
            self.vertex_mut(edge.to).accum += mid * 2.0;
            let second = self.add_edge(ev, edge.to);
            self.edge_mut(second).lock = edge.lock;
            let first = self.edge_mut(ei);
            first.to = ev;
            first.successor = Some(second);
            // The edge point replaces `to` as the endpoint of the first
            // half; hand over one unit of its valence.
            self.vertex_mut(edge.to).edge_valence -= 1;
            self.vertex_mut(ev).edge_valence += 1;
        }
        Ok(())
    }

    /// Phase C: re-quadrangulate every original face into four children.
    ///
    /// Four interior spoke edges connect the boundary edge points to the
    /// face point. Three children are appended through the Euler operator;
    /// the original record is mutated in place into the south-west child,
    /// with the same corner/valence/lock bookkeeping `add_face` would do
    /// for the sides that change.
    fn rebuild_faces(&mut self, nf: usize) -> Result<(), Error> {
        for i in 0..nf {
            let fi: FH = (i as u32).into();
            let face = self.faces[i];
            let [s, e, n, w] = face.edges;
            let s2 = self.edge(s).successor.ok_or(Error::MissingSuccessor(s))?;
            let e2 = self.edge(e).successor.ok_or(Error::MissingSuccessor(e))?;
            let n2 = self.edge(n).successor.ok_or(Error::MissingSuccessor(n))?;
            let w2 = self.edge(w).successor.ok_or(Error::MissingSuccessor(w))?;
            let fv = face.face_point.ok_or(Error::MissingFacePoint(fi))?;
            let [c0, _, _, _] = face.corners;
            // First halves now end at the edge points.
            let sm = self.edge(s).to;
            let em = self.edge(e).to;
            let nm = self.edge(n).to;
            let wm = self.edge(w).to;
            let lock = face.lock;
            // This face's side of east/north moves to the new children; the
            // stale references must not trip the Euler operator. South and
            // west stay with the south-west child, i.e. this record.
            self.edge_mut(e).left = None;
            self.edge_mut(n).right = None;
            // Interior spokes, directed so the children see them in the
            // usual south/east-along, north/west-against arrangement.
            let a = self.add_edge(sm, fv);
            let b = self.add_edge(wm, fv);
            let c = self.add_edge(fv, em);
            let d = self.add_edge(fv, nm);
            self.add_face(s2, e, c, a, lock); // south-east child
            self.add_face(c, e2, n2, d, lock); // north-east child
            self.add_face(b, d, n, w2, lock); // north-west child
            // The original slot becomes the south-west child.
            {
                let ea = self.edge_mut(a);
                ea.left = Some(fi);
                ea.lock |= lock;
            }
            {
                let eb = self.edge_mut(b);
                eb.right = Some(fi);
                eb.lock |= lock;
            }
            for gone in [face.corners[1], face.corners[2], face.corners[3]] {
                self.vertex_mut(gone).face_valence -= 1;
            }
            for kept in [sm, fv, wm] {
                let vertex = self.vertex_mut(kept);
                vertex.face_valence += 1;
                vertex.lock |= lock;
            }
            let record = &mut self.faces[i];
            record.edges = [s, a, b, w];
            record.corners = [c0, sm, fv, wm];
            record.face_point = None;
        }
        Ok(())
    }

    /// Phase D: relocate the original vertices.
    ///
    /// `new = ((n - 3) * old + accum / n) / n` per unlocked axis, where `n`
    /// is the edge valence read live from the record, after phase B's
    /// transfer. The accumulator holds the unnormalized face-point sum plus
    /// twice the edge midpoints, so the value is divided by the valence
    /// twice; that is the Catmull-Clark weighting, not an accident.
    fn relocate_vertices(&mut self, nv: usize) {
        for vertex in &mut self.vertices[..nv] {
            let n = vertex.edge_valence as f64;
            let fresh = ((n - 3.0) * vertex.position + vertex.accum / n) / n;
            for k in 0..3 {
                if !vertex.lock.axis(k) {
                    vertex.position[k] = fresh[k];
                }
            }
        }
    }
}
