//! # todohub-domain
//!
//! Pure domain model for the todohub service.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`TodoId`](id::TodoId) and error conventions
//! - Define **Todo items** (an id paired with a free-text description)
//! - Define the wire shape of a todo (`{"Id": …, "Description": …}`)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod todo;
