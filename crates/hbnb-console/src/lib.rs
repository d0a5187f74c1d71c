//! Command interpreter for the HBNB object store.
//!
//! A line-oriented console: each input line is one command, executed to
//! completion (including the store flush) before the next line is read.
//!
//! # Pipeline
//!
//! 1. [`dotcall`] rewrites `Class.verb(args)` into `verb Class args`.
//! 2. [`dispatch::Console`] splits the command word from its arguments.
//! 3. [`tokenizer`] splits the arguments, keeping quotes.
//! 4. Each verb validates its tokens in a fixed order and reports only the
//!    first failure ([`CommandError`]).
//! 5. `create` runs parameters through [`coerce`]; `update` runs its value
//!    through [`literal`].
//! 6. Every mutation ends with a store flush; flush errors are fatal
//!    ([`ConsoleError`]).

pub mod coerce;
pub mod config;
pub mod dispatch;
pub mod dotcall;
pub mod error;
pub mod help;
pub mod literal;
pub mod repl;
pub mod tokenizer;

pub use config::{Backend, ConsoleConfig};
pub use dispatch::{Console, ReplControl};
pub use error::{CommandError, ConfigError, ConsoleError, TokenizeError};
pub use repl::ReplOptions;
