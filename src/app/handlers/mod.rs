//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod draft;
pub mod filters;
pub mod selection;
pub mod workflow;
