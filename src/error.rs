use crate::element::{EH, FH, VH};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    // Input validation.
    EmptyMesh,
    IsolatedVertex(VH),
    BoundaryEdge(EH),
    CornerMismatch(FH),
    EdgeValenceMismatch(VH),
    FaceValenceMismatch(VH),
    // Subdivision.
    MissingFacePoint(FH),
    MissingSuccessor(EH),
    // Solid bridge.
    Kernel(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyMesh => write!(f, "mesh has no faces"),
            Error::IsolatedVertex(v) => {
                write!(f, "{v} has no incident edges or faces")
            }
            Error::BoundaryEdge(e) => {
                write!(f, "{e} borders fewer than two faces; mesh is not watertight")
            }
            Error::CornerMismatch(fh) => {
                write!(f, "corners of {fh} disagree with its boundary edges")
            }
            Error::EdgeValenceMismatch(v) => {
                write!(f, "stored edge valence of {v} does not match its incident edges")
            }
            Error::FaceValenceMismatch(v) => {
                write!(f, "stored face valence of {v} does not match its incident faces")
            }
            Error::MissingFacePoint(fh) => {
                write!(f, "{fh} has no face point; phases ran out of order")
            }
            Error::MissingSuccessor(e) => {
                write!(f, "{e} was not split; phases ran out of order")
            }
            Error::Kernel(msg) => write!(f, "kernel failure: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn t_messages_name_the_entity() {
        let msg = format!("{}", Error::BoundaryEdge(3u32.into()));
        assert!(msg.contains("EH(3)"));
        let msg = format!("{}", Error::Kernel("surface fit failed".to_string()));
        assert!(msg.contains("surface fit failed"));
    }
}
