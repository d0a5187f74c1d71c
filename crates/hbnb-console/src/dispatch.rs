//! Command dispatch.
//!
//! [`Console`] owns the class registry and the object store. Each verb
//! validates its arguments in a fixed order and stops at the first failure:
//!
//! | verb    | checks                                         |
//! |---------|------------------------------------------------|
//! | create  | class name, class exists                       |
//! | show    | class name, class exists, id, instance exists  |
//! | destroy | class name, class exists, id, instance exists  |
//! | all     | class exists (only when a class is given)      |
//! | count   | class name, class exists                       |
//! | update  | show's checks, then attribute name, then value |
//!
//! A failed check prints its [`CommandError`] and changes nothing. Every
//! successful mutation is followed by a store flush; a flush error ends the
//! session.

use std::io::Write;

use hbnb_store::{ObjectStore, StoreError};
use hbnb_types::{quoted_repr, AttrValue, ClassDescriptor, ClassRegistry, ObjectKey};
use tracing::{debug, warn};

use crate::coerce::coerce_all;
use crate::dotcall::{self, split_ident, DotCall};
use crate::error::{CommandError, ConsoleError, TokenizeError};
use crate::help;
use crate::literal::parse_literal;
use crate::tokenizer::{tokenize, unquote};

/// Whether the read loop should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Exit,
}

/// Why a command stopped early.
enum Failure {
    /// Printed to the user; the session continues.
    Command(CommandError),
    /// Ends the session.
    Fatal(ConsoleError),
}

impl From<CommandError> for Failure {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<TokenizeError> for Failure {
    fn from(err: TokenizeError) -> Self {
        Self::Command(CommandError::Parse(err))
    }
}

impl From<StoreError> for Failure {
    fn from(err: StoreError) -> Self {
        Self::Fatal(ConsoleError::Store(err))
    }
}

/// Output of a successful command, printed followed by a newline.
type Outcome = Result<Option<String>, Failure>;

/// The command interpreter.
pub struct Console<S> {
    registry: ClassRegistry,
    store: S,
}

impl<S: ObjectStore> Console<S> {
    pub fn new(registry: ClassRegistry, store: S) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &ClassRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute one input line, writing any output to `out`.
    ///
    /// Command failures are printed and reported as [`ReplControl::Continue`].
    /// Only store and output errors are returned.
    pub fn execute<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<ReplControl, ConsoleError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplControl::Continue);
        }

        let line = match line.strip_prefix('?') {
            Some(rest) => format!("help {rest}"),
            None => line.to_string(),
        };

        let outcome = match dotcall::rewrite(&line) {
            Some(DotCall::UpdateMany { class, id, pairs }) => {
                debug!(%class, %id, pairs = pairs.len(), "dot-call dict update");
                self.update_many(&class, &id, pairs)
            }
            Some(DotCall::Line(rewritten)) => {
                debug!(from = %line, to = %rewritten, "dot-call rewrite");
                return self.dispatch(&rewritten, out);
            }
            None => return self.dispatch(&line, out),
        };
        self.finish(outcome, out)
    }

    fn dispatch<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> Result<ReplControl, ConsoleError> {
        let (command, args) = split_command(line);
        debug!(command, args, "dispatch");

        let outcome = match command {
            "quit" => return Ok(ReplControl::Exit),
            "EOF" => {
                writeln!(out)?;
                return Ok(ReplControl::Exit);
            }
            "help" => Ok(Some(help::render(args))),
            "create" => self.create(args),
            "show" => self.show(args),
            "destroy" => self.destroy(args),
            "all" => self.all(args),
            "count" => self.count(args),
            "update" => self.update(args),
            _ => Ok(Some(format!("*** Unknown syntax: {line}"))),
        };
        self.finish(outcome, out)
    }

    fn finish<W: Write>(&self, outcome: Outcome, out: &mut W) -> Result<ReplControl, ConsoleError> {
        match outcome {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => {}
            Err(Failure::Command(err)) => writeln!(out, "{err}")?,
            Err(Failure::Fatal(err)) => return Err(err),
        }
        Ok(ReplControl::Continue)
    }

    fn create(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let descriptor = class_of(&self.registry, &tokens)?.clone();

        let params = coerce_all(&tokens[1..]);
        for (name, value) in &params {
            if hbnb_types::RESERVED_ATTRIBUTES.contains(&name.as_str()) {
                warn!(attribute = %name, "ignoring reserved attribute");
                continue;
            }
            if let Some(expected) = self.registry.attribute_kind(name) {
                if expected != value.kind() {
                    warn!(
                        attribute = %name,
                        %expected,
                        actual = %value.kind(),
                        "attribute kind differs from hint"
                    );
                }
            }
        }

        let instance = descriptor.construct(params);
        let id = instance.id().to_string();
        debug!(class = descriptor.name(), %id, "created instance");
        self.store.insert(instance);
        self.store.save()?;
        Ok(Some(id))
    }

    fn show(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let key = self.key_of(&tokens)?;
        Ok(self.store.get(&key).map(ToString::to_string))
    }

    fn destroy(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let key = self.key_of(&tokens)?;
        self.store.delete(&key);
        debug!(%key, "destroyed instance");
        self.store.save()?;
        Ok(None)
    }

    fn all(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let forms: Vec<String> = if tokens.is_empty() {
            self.store.all().values().map(ToString::to_string).collect()
        } else {
            let class = class_of(&self.registry, &tokens)?.name();
            self.store.of_class(class).map(ToString::to_string).collect()
        };
        Ok(Some(format_list(&forms)))
    }

    fn count(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let class = class_of(&self.registry, &tokens)?.name();
        Ok(Some(self.store.count(class).to_string()))
    }

    fn update(&mut self, args: &str) -> Outcome {
        let tokens = tokenize(args)?;
        let key = self.key_of(&tokens)?;
        let name = tokens.get(2).ok_or(CommandError::AttributeNameMissing)?;
        let raw = tokens.get(3).ok_or(CommandError::ValueMissing)?;
        let pairs = vec![(unquote(name).to_string(), parse_literal(raw))];
        self.apply_update(&key, pairs)
    }

    fn update_many(&mut self, class: &str, id: &str, pairs: Vec<(String, AttrValue)>) -> Outcome {
        let descriptor = self
            .registry
            .resolve(class)
            .ok_or(CommandError::ClassDoesNotExist)?;
        let key = ObjectKey::new(descriptor.name(), id);
        if !self.store.contains(&key) {
            return Err(CommandError::NoInstanceFound.into());
        }
        if pairs.is_empty() {
            return Err(CommandError::AttributeNameMissing.into());
        }
        self.apply_update(&key, pairs)
    }

    /// Set every pair on the instance at `key`, refresh `updated_at` and
    /// flush once.
    fn apply_update(&mut self, key: &ObjectKey, pairs: Vec<(String, AttrValue)>) -> Outcome {
        let instance = self
            .store
            .get_mut(key)
            .ok_or(CommandError::NoInstanceFound)?;
        for (name, value) in pairs {
            if !instance.set(name.as_str(), value) {
                warn!(attribute = %name, %key, "ignoring reserved attribute");
            }
        }
        instance.touch();
        debug!(%key, "updated instance");
        self.store.save()?;
        Ok(None)
    }

    /// Class and id checks shared by show, destroy and update.
    fn key_of(&self, tokens: &[String]) -> Result<ObjectKey, CommandError> {
        let class = class_of(&self.registry, tokens)?.name();
        let id = tokens.get(1).ok_or(CommandError::InstanceIdMissing)?;
        let key = ObjectKey::new(class, unquote(id));
        if self.store.contains(&key) {
            Ok(key)
        } else {
            Err(CommandError::NoInstanceFound)
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Console<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("classes", &self.registry.len())
            .field("store", &self.store)
            .finish()
    }
}

/// Resolve the class named by the first token.
fn class_of<'r>(
    registry: &'r ClassRegistry,
    tokens: &[String],
) -> Result<&'r ClassDescriptor, CommandError> {
    let name = tokens.first().ok_or(CommandError::ClassNameMissing)?;
    registry
        .resolve(unquote(name))
        .ok_or(CommandError::ClassDoesNotExist)
}

/// Command word (leading identifier characters) and trimmed arguments.
fn split_command(line: &str) -> (&str, &str) {
    let (command, rest) = split_ident(line);
    (command, rest.trim())
}

/// Bracketed, comma separated list of quoted strings.
fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quoted_repr(item)).collect();
    format!("[{}]", quoted.join(", "))
}
