//! Entity allocation and sparse component storage.

pub mod entity;
pub mod storage;

pub use entity::EntityAllocator;
pub use storage::{Column, ComponentStorage};
