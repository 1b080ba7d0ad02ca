use crate::{
    error::Error,
    solid::{KernelId, SolidKernel},
};
use glam::DVec3;
use std::collections::HashMap;

/// An in-process stand-in for a real B-rep kernel.
///
/// Hands out sequential ids, stores everything in flat maps, and computes
/// mass properties directly from the planar-quad geometry it was given:
/// areas by fan triangulation and volume by the divergence theorem over
/// the oriented surface. Good enough to test the bridge and to sanity
/// check refined meshes without a host application.
#[derive(Default)]
pub struct MockKernel {
    next_id: u64,
    points: HashMap<u64, DVec3>,
    lines: HashMap<u64, [u64; 2]>,
    faces: HashMap<u64, [u64; 4]>,
    solids: HashMap<u64, Vec<u64>>,
}

impl MockKernel {
    fn fresh_id(&mut self) -> KernelId {
        let id = self.next_id;
        self.next_id += 1;
        KernelId(id)
    }

    fn point(&self, id: u64) -> Result<DVec3, Error> {
        self.points
            .get(&id)
            .copied()
            .ok_or_else(|| Error::Kernel(format!("unknown point {id}")))
    }

    fn face_corners(&self, id: u64) -> Result<[DVec3; 4], Error> {
        let corners = self
            .faces
            .get(&id)
            .ok_or_else(|| Error::Kernel(format!("unknown face {id}")))?;
        let mut out = [DVec3::ZERO; 4];
        for (slot, c) in out.iter_mut().zip(corners) {
            *slot = self.point(*c)?;
        }
        Ok(out)
    }

    fn solid_faces(&self, solid: KernelId) -> Result<&[u64], Error> {
        self.solids
            .get(&solid.0)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::Kernel(format!("unknown solid {}", solid.0)))
    }
}

impl SolidKernel for MockKernel {
    fn make_point(&mut self, position: DVec3) -> Result<KernelId, Error> {
        let id = self.fresh_id();
        self.points.insert(id.0, position);
        Ok(id)
    }

    fn make_line(&mut self, begin: KernelId, end: KernelId) -> Result<KernelId, Error> {
        self.point(begin.0)?;
        self.point(end.0)?;
        let id = self.fresh_id();
        self.lines.insert(id.0, [begin.0, end.0]);
        Ok(id)
    }

    fn make_face(
        &mut self,
        edges: &[KernelId; 4],
        corners: &[KernelId; 4],
    ) -> Result<KernelId, Error> {
        for e in edges {
            if !self.lines.contains_key(&e.0) {
                return Err(Error::Kernel(format!("unknown line {}", e.0)));
            }
        }
        for c in corners {
            self.point(c.0)?;
        }
        let id = self.fresh_id();
        self.faces.insert(id.0, corners.map(|c| c.0));
        Ok(id)
    }

    fn make_solid(&mut self, faces: &[KernelId]) -> Result<KernelId, Error> {
        for f in faces {
            if !self.faces.contains_key(&f.0) {
                return Err(Error::Kernel(format!("unknown face {}", f.0)));
            }
        }
        let id = self.fresh_id();
        self.solids
            .insert(id.0, faces.iter().map(|f| f.0).collect());
        Ok(id)
    }

    fn surface_area(&self, solid: KernelId) -> Result<f64, Error> {
        let mut area = 0.0;
        for f in self.solid_faces(solid)? {
            let [a, b, c, d] = self.face_corners(*f)?;
            area += 0.5 * ((b - a).cross(c - a).length() + (c - a).cross(d - a).length());
        }
        Ok(area)
    }

    fn volume(&self, solid: KernelId) -> Result<f64, Error> {
        // Divergence theorem over the triangulated boundary. Faces arrive
        // with outward-consistent winding, so the signed contributions sum
        // to the enclosed volume.
        let mut volume = 0.0;
        for f in self.solid_faces(solid)? {
            let [a, b, c, d] = self.face_corners(*f)?;
            volume += a.dot(b.cross(c)) + a.dot(c.cross(d));
        }
        Ok(volume / 6.0)
    }
}

#[cfg(test)]
mod test {
    use super::MockKernel;
    use crate::macros::assert_f64_eq;
    use crate::solid::{KernelId, SolidKernel, build_solid};
    use crate::{error::Error, mesh::QuadMesh};
    use glam::DVec3;

    #[test]
    fn t_sequential_ids() {
        let mut kernel = MockKernel::default();
        let a = kernel.make_point(DVec3::ZERO).expect("make_point failed");
        let b = kernel.make_point(DVec3::X).expect("make_point failed");
        assert_eq!(a, KernelId(0));
        assert_eq!(b, KernelId(1));
        let l = kernel.make_line(a, b).expect("make_line failed");
        assert_eq!(l, KernelId(2));
    }

    #[test]
    fn t_unknown_entity_is_an_error() {
        let mut kernel = MockKernel::default();
        let a = kernel.make_point(DVec3::ZERO).expect("make_point failed");
        match kernel.make_line(a, KernelId(99)) {
            Err(Error::Kernel(msg)) => assert!(msg.contains("99")),
            other => panic!("expected a kernel error, got {other:?}"),
        }
    }

    #[test]
    fn t_box_mass_properties() {
        let mut mesh = QuadMesh::quad_box(DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0));
        let mut kernel = MockKernel::default();
        let solid = build_solid(&mut mesh, &mut kernel).expect("Failed to build a solid");
        let area = kernel.surface_area(solid).expect("surface_area failed");
        let volume = kernel.volume(solid).expect("volume failed");
        assert_f64_eq!(area, 2.0 * (2.0 * 3.0 + 3.0 * 4.0 + 4.0 * 2.0), 1e-12);
        assert_f64_eq!(volume, 24.0, 1e-12);
    }

    #[test]
    fn t_volume_is_translation_invariant() {
        let shift = DVec3::new(-5.0, 7.0, 11.0);
        let mut mesh = QuadMesh::quad_box(shift, shift + DVec3::ONE);
        let mut kernel = MockKernel::default();
        let solid = build_solid(&mut mesh, &mut kernel).expect("Failed to build a solid");
        let volume = kernel.volume(solid).expect("volume failed");
        assert_f64_eq!(volume, 1.0, 1e-9);
    }
}
