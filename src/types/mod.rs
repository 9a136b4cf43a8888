//! Typed models for the Watson services covered by this crate.

pub mod assistant_v2;
pub mod visual_recognition_v3;
