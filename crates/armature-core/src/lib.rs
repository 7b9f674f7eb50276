//! Armature Core Types and Definitions
//!
//! This crate provides the foundational types for Armature division
//! schemes. It includes:
//!
//! - **Components**: immutable component records ([`component::Component`])
//! - **Schemes**: the request model ([`scheme`] module)
//! - **Sheets**: page format, orientation, and layout enumerations
//!   ([`sheet`] module)
//! - **Geometry**: basic geometric types ([`geometry`] module)

pub mod component;
pub mod geometry;
pub mod scheme;
pub mod sheet;
