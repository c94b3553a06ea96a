//! Modules layer - Infrastructure for the browser platform and external JS
//! libraries
//!
//! Contains the storage abstraction, DOM plumbing, and bindings for Leaflet
//! and the Bootstrap tooltip widget.

pub mod dom;
pub mod geolocation;
pub mod leaflet;
pub mod storage;
pub mod tooltip;
