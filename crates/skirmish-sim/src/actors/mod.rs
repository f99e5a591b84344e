//! Actor assemblies: factories that attach components and behavior trees.

pub mod aim;
pub mod bullet;
pub mod player;
pub mod power_up;
pub mod raster;
pub mod shelter;
pub mod tank;
pub mod tower;

pub use aim::Aim;
