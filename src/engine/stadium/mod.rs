pub mod model;
pub mod templates;

/// Discrete level-of-detail classification for one stadium, fixed for the
/// lifetime of a population layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTier {
    High,
    Medium,
    Low,
}
