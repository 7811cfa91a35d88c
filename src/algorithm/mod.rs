/// Multi-pass packing orchestration
pub mod packer;
/// Collision tests and single placement attempts
pub mod placement;
/// Shape-candidate policies
pub mod policy;
/// Injectable random sources
pub mod random;
