/// Default tolerance for component comparisons and unit/zero checks.
pub const KINDA_SMALL_NUMBER: f32 = 1.0e-4;

/// Default squared-length threshold below which a vector is treated as zero
/// when normalizing.
pub const SMALL_NUMBER: f32 = 1.0e-8;
