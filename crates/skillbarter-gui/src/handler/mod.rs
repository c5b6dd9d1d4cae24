//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message type, keeping
//! form logic out of the main `App::update()`:
//!
//! ```ignore
//! pub fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Dialog(msg) => DialogHandler.handle(&mut self.state, msg),
//!         Message::Contact(msg) => ContactHandler.handle(&mut self.state, msg),
//!         // ...
//!     }
//! }
//! ```

mod contact;
mod dialog;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use contact::ContactHandler;
pub use dialog::DialogHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
