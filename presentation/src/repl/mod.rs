//! Interactive quote REPL

pub mod command;
pub mod quote_repl;

pub use command::ReplCommand;
pub use quote_repl::QuoteRepl;
