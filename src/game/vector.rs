// Vector helpers for ball direction sampling

use thiserror::Error;

/// Errors from vector math on inputs outside the operation's domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The zero vector has no direction
    #[error("cannot normalize a zero vector")]
    ZeroVector,
}

/// Euclidean length of `vector`
pub fn magnitude<const N: usize>(vector: [f32; N]) -> f32 {
    vector.iter().map(|c| c * c).sum::<f32>().sqrt()
}

/// Scale `vector` to unit length.
///
/// Fails with [`DomainError::ZeroVector`] when every component is zero; callers
/// sampling random directions are expected to resample in that case.
pub fn normalize<const N: usize>(vector: [f32; N]) -> Result<[f32; N], DomainError> {
    let magnitude = magnitude(vector);
    if magnitude == 0.0 {
        return Err(DomainError::ZeroVector);
    }

    Ok(vector.map(|c| c / magnitude))
}
