//! Background services.
//!
//! Async tasks spawned via `Task::perform`; heavy work runs on the
//! blocking pool.

pub mod catalog;
