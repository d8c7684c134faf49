/// Single source of all non-determinism in the pipeline: template ids,
/// synthetic score sampling, and synthetic name selection.
///
/// Tests substitute a seeded implementation to assert exact outputs.
pub trait IEntropySource: Send + Sync {
    /// Uniform sample in `[0.0, 1.0)`.
    fn unit(&self) -> f64;

    /// Uniform index in `[0, bound)`. Returns 0 when `bound` is 0.
    fn index(&self, bound: usize) -> usize;

    /// A fresh identifier starting with `prefix`.
    fn id(&self, prefix: &str) -> String;

    /// Uniform sample in `[min, max)`.
    fn range(&self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.unit()
    }
}
