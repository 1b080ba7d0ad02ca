use crate::{element::Handle, mesh::QuadMesh};
use std::io::Write;

/// How much to print while refining.
///
/// Diagnostics go to stdout, where the host application's console shows
/// them. `Counts` prints one line of entity totals per pass; `Tables`
/// additionally dumps the full incidence tables.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Trace {
    #[default]
    Silent,
    Counts,
    Tables,
}

impl Trace {
    pub(crate) fn report(self, pass: usize, mesh: &QuadMesh) {
        if self == Trace::Silent {
            return;
        }
        println!(
            "pass {pass}: {} vertices, {} edges, {} faces",
            mesh.num_vertices(),
            mesh.num_edges(),
            mesh.num_faces()
        );
        if self == Trace::Tables {
            mesh.print_tables();
        }
    }
}

fn opt<H: Handle>(h: Option<H>) -> String {
    match h {
        Some(h) => h.index().to_string(),
        None => "-".to_string(),
    }
}

impl QuadMesh {
    /// Write the three incidence tables in a fixed-width layout.
    ///
    /// One row per entity, handles as bare indices, `-` for an unset
    /// reference. This is the format to paste into a bug report.
    pub fn write_tables<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(
            w,
            "{:>6} {:>12} {:>12} {:>12} {:>4} {:>4} {:>5}",
            "vertex", "x", "y", "z", "ev", "fv", "lock"
        )?;
        for v in self.vertices() {
            let p = self.point(v);
            writeln!(
                w,
                "{:>6} {:>12.6} {:>12.6} {:>12.6} {:>4} {:>4} {:>5}",
                v.index(),
                p.x,
                p.y,
                p.z,
                self.edge_valence(v),
                self.face_valence(v),
                self.vertex_lock(v)
            )?;
        }
        writeln!(
            w,
            "{:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5}",
            "edge", "from", "to", "left", "right", "succ", "lock"
        )?;
        for e in self.edges() {
            let (from, to) = self.edge_vertices(e);
            let (left, right) = self.edge_faces(e);
            writeln!(
                w,
                "{:>6} {:>6} {:>6} {:>6} {:>6} {:>6} {:>5}",
                e.index(),
                from.index(),
                to.index(),
                opt(left),
                opt(right),
                opt(self.edge_successor(e)),
                self.edge_lock(e)
            )?;
        }
        writeln!(
            w,
            "{:>6} {:>6} {:>6} {:>6} {:>6} {:>20} {:>6} {:>5}",
            "face", "south", "east", "north", "west", "corners", "fp", "lock"
        )?;
        for f in self.faces() {
            let [s, e, n, w_] = self.face_edges(f);
            let corners = self.face_corners(f).map(|c| c.index().to_string());
            writeln!(
                w,
                "{:>6} {:>6} {:>6} {:>6} {:>6} {:>20} {:>6} {:>5}",
                f.index(),
                s.index(),
                e.index(),
                n.index(),
                w_.index(),
                corners.join(" "),
                opt(self.face_point(f)),
                self.face_lock(f)
            )?;
        }
        Ok(())
    }

    /// Dump the incidence tables to stdout.
    pub fn print_tables(&self) {
        // Diagnostics only; a broken stdout is not worth an error path.
        let _ = self.write_tables(&mut std::io::stdout().lock());
    }
}

#[cfg(test)]
mod test {
    use crate::mesh::QuadMesh;

    #[test]
    fn t_tables_list_every_entity() {
        let mesh = QuadMesh::unit_box();
        let mut out = Vec::new();
        mesh.write_tables(&mut out).expect("write failed");
        let text = String::from_utf8(out).expect("tables are not valid utf-8");
        for header in ["vertex", "edge", "face", "corners"] {
            assert!(text.contains(header), "missing {header} header");
        }
        // 3 headers + 8 vertices + 12 edges + 6 faces.
        assert_eq!(text.lines().count(), 29);
    }

    #[test]
    fn t_unset_references_print_as_dash() {
        let mut mesh = QuadMesh::new();
        let a = mesh.add_vertex(glam::DVec3::ZERO);
        let b = mesh.add_vertex(glam::DVec3::X);
        mesh.add_edge(a, b);
        let mut out = Vec::new();
        mesh.write_tables(&mut out).expect("write failed");
        let text = String::from_utf8(out).expect("tables are not valid utf-8");
        assert!(text.contains('-'));
    }
}
