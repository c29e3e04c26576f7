//! API layer: native client, REST management API and HTML pages

pub mod native;
pub mod rest;
pub mod web;
