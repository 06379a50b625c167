pub mod conversion;
pub mod offset;
pub mod smoothing;
