//! Storefront Studio - GUI Library
//!
//! Core application types and modules for the Storefront Studio
//! desktop dashboard.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod handler;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;
