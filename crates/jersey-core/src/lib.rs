//! Jersey Core Types and Definitions
//!
//! This crate provides the shared model of the jersey design language. It
//! includes:
//!
//! - **Colors**: canonical hex colors ([`color::HexColor`])
//! - **Patterns**: named fill patterns and their argument rules ([`pattern`] module)
//! - **Spec**: the validated, defaulted design ([`spec::JerseySpec`])
//! - **Options**: render switches ([`options::RenderOptions`])

pub mod color;
pub mod options;
pub mod pattern;
pub mod spec;
