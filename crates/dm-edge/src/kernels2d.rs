use dm_core::{Error, Result};

/// Square correlation kernel with odd side length.
///
/// Weights are stored row-major; `weights[k]` applies to the neighbor at
/// offset `(k % size - radius, k / size - radius)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2D {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel2D {
    pub fn new(weights: Vec<f32>) -> Result<Self> {
        let len = weights.len();
        let size = (len as f64).sqrt().round() as usize;
        if len == 0 || size * size != len || size % 2 == 0 {
            return Err(Error::InvalidKernel { len });
        }

        Ok(Self { size, weights })
    }

    /// Uniform mean over a `size x size` window, every weight `1 / size^2`.
    pub fn box_blur(size: usize) -> Result<Self> {
        let n = checked_area(size)?;
        Self::new(vec![1.0 / n as f32; n])
    }

    /// High-pass "value minus `size^2` times local mean": center weight
    /// `1 - size^2`, every other weight `1`. Sums to zero.
    pub fn laplacian(size: usize) -> Result<Self> {
        let n = checked_area(size)?;
        let mut weights = vec![1.0f32; n];
        weights[n / 2] = 1.0 - n as f32;
        Self::new(weights)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> usize {
        self.size / 2
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }
}

fn checked_area(size: usize) -> Result<usize> {
    size.checked_mul(size)
        .ok_or(Error::InvalidKernel { len: usize::MAX })
}
