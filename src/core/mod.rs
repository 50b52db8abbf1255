pub mod ecs;
pub mod error;
pub mod serialization;
pub mod shared;
pub mod world;
