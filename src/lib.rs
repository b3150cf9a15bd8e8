//! # booklyn
//!
//! Leptos + WASM frontend for the Booklyn band/venue gig-booking marketplace.
//!
//! This crate contains pages, components, the client-side session store, the
//! single configured API gateway client, and the browser storage glue that
//! keeps a session alive across reloads. All business logic lives behind the
//! REST API; this crate only presents it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
