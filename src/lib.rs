//! Client for the Puppy Bowl roster API.
//!
//! [`api`] talks to the service, [`views`] turns its answers into a display model ([`page`]).
//! The binary paints that model in a native window.

pub mod api;
pub mod config;
pub mod page;
pub mod player;
pub mod views;

mod error;

pub use {
	config::Config,
	error::{Error, Result},
};
