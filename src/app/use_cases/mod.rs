//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod data_load;
pub mod search;
pub mod selection;
