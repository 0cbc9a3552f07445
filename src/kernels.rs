/// An immutable 3x3 matrix of convolution weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

impl Kernel {
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Weight at the given row and column of the matrix.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row][col]
    }

    #[inline]
    pub fn weights(&self) -> &[[f32; 3]; 3] {
        &self.weights
    }
}

const EDGE_DETECT: Kernel = Kernel::new([[0., -1., 0.], [-1., 4., -1.], [0., -1., 0.]]);
const SHARPEN: Kernel = Kernel::new([[0., -1., 0.], [-1., 5., -1.], [0., -1., 0.]]);
const BOX_BLUR: Kernel = Kernel::new([
    [1. / 9., 1. / 9., 1. / 9.],
    [1. / 9., 1. / 9., 1. / 9.],
    [1. / 9., 1. / 9., 1. / 9.],
]);
const GAUSSIAN_BLUR: Kernel = Kernel::new([
    [1. / 16., 1. / 8., 1. / 16.],
    [1. / 8., 1. / 4., 1. / 8.],
    [1. / 16., 1. / 8., 1. / 16.],
]);
const EMBOSS: Kernel = Kernel::new([[-2., -1., 0.], [-1., 1., 1.], [0., 1., 2.]]);
const IDENTITY: Kernel = Kernel::new([[0., 0., 0.], [0., 1., 0.], [0., 0., 0.]]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KernelType {
    /// Discrete Laplacian. Uniform areas of the image become black and
    /// the borders between areas with different intensity become
    /// bright lines.
    EdgeDetect,
    /// Amplifies the difference between a pixel and its neighbors.
    Sharpen,
    /// Each pixel becomes the plain average of its 3x3 neighborhood.
    BoxBlur,
    /// Each pixel becomes the average of its 3x3 neighborhood weighted
    /// with a discrete gaussian.
    GaussianBlur,
    /// Emphasizes one diagonal direction, the image looks stamped into
    /// the surface.
    Emboss,
    /// Copies the image unchanged.
    Identity,
}

impl Default for KernelType {
    fn default() -> Self {
        KernelType::Identity
    }
}

impl KernelType {
    /// Returns the weight matrix of the kernel.
    #[inline]
    pub fn kernel(&self) -> Kernel {
        match self {
            KernelType::EdgeDetect => EDGE_DETECT,
            KernelType::Sharpen => SHARPEN,
            KernelType::BoxBlur => BOX_BLUR,
            KernelType::GaussianBlur => GAUSSIAN_BLUR,
            KernelType::Emboss => EMBOSS,
            KernelType::Identity => IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_kernels_sum_to_one() {
        for kernel_type in [
            KernelType::BoxBlur,
            KernelType::GaussianBlur,
            KernelType::Identity,
            KernelType::Sharpen,
        ] {
            let kernel = kernel_type.kernel();
            let sum: f32 = kernel.weights().iter().flatten().sum();
            assert!(
                (sum - 1.0).abs() < 1e-6,
                "{:?} weights sum to {}",
                kernel_type,
                sum
            );
        }
    }

    #[test]
    fn edge_detect_sums_to_zero() {
        let sum: f32 = KernelType::EdgeDetect.kernel().weights().iter().flatten().sum();
        assert!(sum.abs() < 1e-6);
    }
}
