use std::path::PathBuf;

use hbnb_store::StoreError;
use thiserror::Error;

/// Malformed quoting or escaping in a command line.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("No closing quotation")]
    NoClosingQuotation,

    #[error("No escaped character")]
    NoEscapedCharacter,
}

/// A recoverable command failure. The display strings are the exact text
/// printed to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class doesn't exist **")]
    ClassDoesNotExist,

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    NoInstanceFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,

    #[error("*** Parse error: {0}")]
    Parse(#[from] TokenizeError),
}

/// A failure that ends the session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading a [`ConsoleConfig`](crate::ConsoleConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
