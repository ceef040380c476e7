// components/mod.rs
//
// Entity data types. Each variant owns its geometry and knows how to
// advance itself; the environment decides when.

pub mod character;
pub mod entity;
pub mod geometry;
pub mod item;
pub mod motion;
pub mod obstacle;
pub mod platform;
pub mod weapon;
