//! # aquashare-link
//!
//! Domain wrapper binding the token codec to the "share a dashboard by
//! user id" use case.
//!
//! ## Modules
//!
//! - `service` — issue and resolve share tokens for a user id
//! - `links` — build the shareable viewer URLs a token is embedded in

pub mod links;
pub mod service;

pub use links::LinkBuilder;
pub use service::ShareLinkService;
