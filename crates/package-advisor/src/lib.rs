//! Decision-support library recommending professional services packages.
//!
//! A weighted questionnaire score resolves to a package tier, family, and
//! price; a narrative explainer justifies the result; a contract-value
//! validator confirms or escalates it. The HTTP and CLI surfaces live in the
//! companion api crate.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
