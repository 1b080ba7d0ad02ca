//! Catmull-Clark subdivision for closed all-quadrilateral meshes.
//!
//! This crate is the mesh side of a subdivision-surface feature inside a
//! parametric solid modeler. It owns the quad topology, refines it with
//! [Catmull-Clark](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface)
//! passes, and hands the refined boundary to the host's B-rep kernel
//! through the [`SolidKernel`] trait. Per-axis [`AxisLock`] masks let
//! points stay exactly on symmetry planes across passes.
//!
//! ```rust
//! use subsurf::{MockKernel, QuadMesh, Trace, refine_to_solid};
//!
//! let mut mesh = QuadMesh::unit_box();
//! let mut kernel = MockKernel::default();
//! let report =
//!     refine_to_solid(&mut mesh, 2, Trace::Silent, &mut kernel).expect("Refinement failed");
//! assert!(report.volume < 1.0);
//! ```

mod check;
mod dump;
mod element;
mod error;
mod lock;
#[cfg(test)]
mod macros;
mod mesh;
mod mock;
mod primitive;
mod solid;
mod subdiv;

pub use dump::Trace;
pub use element::{EH, FH, Handle, VH};
pub use error::Error;
pub use lock::AxisLock;
pub use mesh::QuadMesh;
pub use mock::MockKernel;
pub use solid::{KernelId, SolidKernel, SolidReport, build_solid, refine_to_solid};
