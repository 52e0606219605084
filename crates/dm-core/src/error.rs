use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("image {width}x{height} exceeds the i32 coordinate range")]
    ImageTooLarge { width: usize, height: usize },
    #[error("invalid kernel: {len} weights do not form an odd square")]
    InvalidKernel { len: usize },
    #[error("a triangle needs exactly 3 vertices, got {vertices}")]
    InvalidTriangle { vertices: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
