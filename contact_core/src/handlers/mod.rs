//! HTTP handlers

pub mod contact;
pub mod routes;
