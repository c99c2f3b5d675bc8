//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod blink;
pub mod buttons;
pub mod console;
pub mod coordinator;
pub mod display_writer;

pub use blink::blink_task;
pub use buttons::button_task;
pub use console::console_task;
pub use coordinator::coordinator_task;
pub use display_writer::display_writer_task;
