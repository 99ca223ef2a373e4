//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type and
//! is dispatched from `App::update`. The shared grid transition logic
//! lives in [`grid`]; the per-section handlers wrap it and decide how
//! to schedule the follow-up work (debounce timers, catalog fetches).

pub mod grid;
pub mod products;
mod stores;
mod users;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use products::ProductsHandler;
pub use stores::StoresHandler;
pub use users::UsersHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task, or `Task::none()` if complete.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
