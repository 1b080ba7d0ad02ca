use crate::{lock::AxisLock, solid::KernelId};
use glam::DVec3;
use std::fmt::{Debug, Display};

/**
 * All elements of the mesh implement this trait. They are identified by their
 * index.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VH {
    idx: u32,
}

/**
 * Edge handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FH {
    idx: u32,
}

impl Handle for VH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for VH {
    fn from(idx: u32) -> Self {
        VH { idx }
    }
}

impl From<&u32> for VH {
    fn from(idx: &u32) -> Self {
        VH { idx: *idx }
    }
}

impl Handle for EH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for EH {
    fn from(idx: u32) -> Self {
        EH { idx }
    }
}

impl From<&u32> for EH {
    fn from(idx: &u32) -> Self {
        EH { idx: *idx }
    }
}

impl Handle for FH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for FH {
    fn from(idx: u32) -> Self {
        FH { idx }
    }
}

impl From<&u32> for FH {
    fn from(idx: &u32) -> Self {
        FH { idx: *idx }
    }
}

impl Display for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Display for EH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EH({})", self.index())
    }
}

impl Display for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

impl Debug for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Debug for EH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EH({})", self.index())
    }
}

impl Debug for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

/// A mesh corner point.
///
/// `accum` is scratch storage used by one subdivision pass to collect the
/// neighbor contributions before the position update; it carries no meaning
/// between passes. `kernel` stays `None` until the solid bridge runs.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Vertex {
    pub(crate) position: DVec3,
    pub(crate) accum: DVec3,
    pub(crate) lock: AxisLock,
    pub(crate) edge_valence: u32,
    pub(crate) face_valence: u32,
    pub(crate) kernel: Option<KernelId>,
}

/// A directed topological edge.
///
/// One record per edge, not a halfedge pair: `left` and `right` carry the
/// two incident faces relative to the `from -> to` direction. Both must be
/// populated for a watertight mesh. `successor` points at the second half
/// after a split and is only meaningful within the pass that set it.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Edge {
    pub(crate) from: VH,
    pub(crate) to: VH,
    pub(crate) left: Option<FH>,
    pub(crate) right: Option<FH>,
    pub(crate) lock: AxisLock,
    pub(crate) successor: Option<EH>,
}

/// A quadrilateral face.
///
/// Boundary edges are stored as south, east, north, west. South and east
/// run along the corner loop (this face on their left); north and west run
/// against it (this face on their right). Corners are derived from the
/// edges at creation time and never mutated independently.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Face {
    pub(crate) edges: [EH; 4],
    pub(crate) corners: [VH; 4],
    pub(crate) face_point: Option<VH>,
    pub(crate) lock: AxisLock,
    pub(crate) kernel: Option<KernelId>,
}

#[cfg(test)]
mod test {
    use super::{EH, FH, Handle, VH};

    #[test]
    fn t_handle_roundtrip() {
        let v: VH = 42u32.into();
        let e: EH = 7u32.into();
        let f: FH = 0u32.into();
        assert_eq!(v.index(), 42);
        assert_eq!(e.index(), 7);
        assert_eq!(f.index(), 0);
        assert_eq!(format!("{v} {e} {f}"), "VH(42) EH(7) FH(0)");
    }
}
