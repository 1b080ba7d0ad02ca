use crate::{lock::AxisLock, mesh::QuadMesh};
use glam::DVec3;

/*
           7-----------6
          /|          /|
         / |         / |
        4-----------5  |
        |  |        |  |
        |  3--------|--2
        | /         | /
        |/          |/
        0-----------1

Directed edges, indexed:
  rim of the bottom: 0: 0->1, 1: 1->2, 2: 3->2, 3: 0->3
  rim of the top:    4: 4->5, 5: 5->6, 6: 7->6, 7: 4->7
  verticals:         8: 0->4, 9: 1->5, 10: 2->6, 11: 3->7
*/

const BOX_POS: [(f64, f64, f64); 8] = [
    (0.0, 0.0, 0.0),
    (1.0, 0.0, 0.0),
    (1.0, 1.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (1.0, 0.0, 1.0),
    (1.0, 1.0, 1.0),
    (0.0, 1.0, 1.0),
];

const BOX_EDGES: [(u32, u32); 12] = [
    (0, 1),
    (1, 2),
    (3, 2),
    (0, 3),
    (4, 5),
    (5, 6),
    (7, 6),
    (4, 7),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

// Sides as (south, east, north, west) edge indices. South and east run
// along each face's outward-CCW corner loop, north and west against it.
const BOX_FACES: [(u32, u32, u32, u32); 6] = [
    (3, 2, 1, 0),   // bottom
    (0, 9, 4, 8),   // front
    (1, 10, 5, 9),  // right
    (11, 6, 10, 2), // back
    (8, 7, 11, 3),  // left
    (4, 5, 6, 7),   // top
];

impl QuadMesh {
    /// Axis-aligned box spanning `min` to `max`, all axes free.
    pub fn quad_box(min: DVec3, max: DVec3) -> Self {
        Self::quad_box_with_locks(min, max, [AxisLock::FREE; 6])
    }

    /// Unit box spanning the origin to (1, 1, 1).
    pub fn unit_box() -> Self {
        Self::quad_box(DVec3::ZERO, DVec3::ONE)
    }

    /// Axis-aligned box with one lock mask per face, in bottom, front,
    /// right, back, left, top order.
    ///
    /// Locking the bottom face on z, say, pins the whole bottom plane of
    /// every refinement of this box at `min.z`.
    pub fn quad_box_with_locks(min: DVec3, max: DVec3, face_locks: [AxisLock; 6]) -> Self {
        let mut mesh = QuadMesh::with_capacity(8, 12, 6);
        for (x, y, z) in BOX_POS {
            mesh.add_vertex(DVec3::new(
                min.x + x * (max.x - min.x),
                min.y + y * (max.y - min.y),
                min.z + z * (max.z - min.z),
            ));
        }
        for (from, to) in BOX_EDGES {
            mesh.add_edge(from.into(), to.into());
        }
        for ((s, e, n, w), lock) in BOX_FACES.into_iter().zip(face_locks) {
            mesh.add_face(s.into(), e.into(), n.into(), w.into(), lock);
        }
        mesh
    }
}
