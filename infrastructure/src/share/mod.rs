//! Share surface adapters
//!
//! Provides [`SystemShareSheet`], which hands quote text to the system
//! clipboard or to standard output, honouring the request's exclusion list.

mod clipboard;
mod system_share;

pub use clipboard::{ClipboardCommand, ClipboardError};
pub use system_share::SystemShareSheet;
