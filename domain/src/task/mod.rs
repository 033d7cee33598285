//! Task aggregate, value objects, and persistence snapshots

pub mod entities;
pub mod state;
pub mod status;
pub mod value_objects;
