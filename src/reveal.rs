pub mod animator;
pub mod latch;
