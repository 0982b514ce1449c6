//! Dispatch pipeline: prefix check, tokenize, resolve, coerce, invoke.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::coerce;
use crate::error::{CommandError, RegistrationError};
use crate::introspect::{self, CommandDetails};
use crate::registry::CommandRegistry;
use crate::resolve;
use crate::tokenize;
use crate::types::{Args, CommandSpec};

// ---------------------------------------------------------------------------
// Context and handler trait
// ---------------------------------------------------------------------------

/// Transport-supplied identity of the originating message. The engine never
/// reads it; handlers receive it verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventContext {
    pub channel_id: String,
    pub author_id: String,
    pub message_id: String,
}

/// What a successful dispatch call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message was not addressed to the engine (prefix mismatch).
    Ignored,
    /// A handler ran to completion.
    Completed,
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Called with the event context and the fully bound arguments. The
    /// engine reads nothing back: replies, errors, and other side effects go
    /// through whatever transport handle the handler captured.
    async fn handle(&self, ctx: &EventContext, args: &Args);
}

/// Adapter turning a plain closure into a handler.
pub struct FnHandler<F>(F);

#[async_trait]
impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&EventContext, &Args) + Send + Sync,
{
    async fn handle(&self, ctx: &EventContext, args: &Args) {
        (self.0)(ctx, args)
    }
}

/// Wrap a synchronous closure as a `CommandHandler`.
pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&EventContext, &Args) + Send + Sync,
{
    FnHandler(f)
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Prefix-addressed command engine: owns the registry and runs the
/// parse/resolve/coerce/invoke pipeline for each inbound message.
///
/// `dispatch` is async only to await the handler; everything before the
/// handler call runs synchronously with no interior awaits. Concurrent
/// `dispatch` calls share nothing but `&self`.
pub struct CommandDispatcher {
    prefix: String,
    registry: CommandRegistry,
}

impl CommandDispatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), registry: CommandRegistry::new() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Register a command. See [`CommandRegistry::register`].
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), RegistrationError> {
        self.registry.register(spec)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Introspect one command by name.
    pub fn describe(&self, name: &str) -> Result<CommandDetails, CommandError> {
        introspect::describe(&self.registry, name)
    }

    /// Introspect every command, sorted by name.
    pub fn describe_all(&self) -> Vec<CommandDetails> {
        introspect::describe_all(&self.registry)
    }

    /// Run one inbound message through the pipeline.
    ///
    /// Text that does not start with the prefix is `Ok(Outcome::Ignored)`.
    /// Every error aborts the call at the stage it occurred; the handler is
    /// only ever invoked with a fully bound [`Args`] aggregate.
    pub async fn dispatch(
        &self,
        ctx: &EventContext,
        text: &str,
    ) -> Result<Outcome, CommandError> {
        let Some(rest) = tokenize::strip_prefix(text, &self.prefix) else {
            return Ok(Outcome::Ignored);
        };

        let tokens = tokenize::tokenize(rest)?;
        let Some((name, arg_tokens)) = tokens.split_first() else {
            return Err(CommandError::NoCommandProvided);
        };

        let command = self
            .registry
            .get(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.clone()))?;

        let raw = resolve::resolve(name, &command.args, arg_tokens)?;

        let mut values = Vec::with_capacity(command.args.len());
        for (spec, raw_value) in command.args.iter().zip(&raw) {
            let value =
                coerce::coerce(spec.kind, raw_value).map_err(|source| CommandError::Coercion {
                    command: name.clone(),
                    argument: spec.name.clone(),
                    value: raw_value.clone(),
                    source,
                })?;
            values.push((spec.name.clone(), value));
        }
        let args = Args::new(values);

        info!(
            "[Commands] Dispatching {}{} for author {}",
            self.prefix, name, ctx.author_id
        );
        debug!("[Commands] Bound arguments for {}: {:?}", name, args);
        command.handler.handle(ctx, &args).await;
        Ok(Outcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::types::{ArgKind, ArgSpec, ArgValue};

    /// Handler that records every invocation it receives.
    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<(EventContext, Args)>>>,
    }

    #[async_trait]
    impl CommandHandler for Recorder {
        async fn handle(&self, ctx: &EventContext, args: &Args) {
            self.calls.lock().unwrap().push((ctx.clone(), args.clone()));
        }
    }

    impl Recorder {
        fn calls(&self) -> Vec<(EventContext, Args)> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn ctx() -> EventContext {
        EventContext {
            channel_id: "chan".to_string(),
            author_id: "author".to_string(),
            message_id: "msg".to_string(),
        }
    }

    fn dispatcher_with(spec: CommandSpec) -> CommandDispatcher {
        let mut dispatcher = CommandDispatcher::new(".");
        dispatcher.register(spec).unwrap();
        dispatcher
    }

    #[tokio::test]
    async fn non_prefixed_text_is_ignored_without_invoking_anything() {
        logging::init_console_logger("debug");
        let recorder = Recorder::default();
        let dispatcher = dispatcher_with(
            CommandSpec::new("hello", "Greets.").handler(recorder.clone()),
        );
        let outcome = dispatcher.dispatch(&ctx(), "hello there").await.unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn prefix_alone_is_no_command_provided() {
        let dispatcher = CommandDispatcher::new(".");
        let err = dispatcher.dispatch(&ctx(), ".").await.unwrap_err();
        assert!(matches!(err, CommandError::NoCommandProvided));
    }

    #[tokio::test]
    async fn unregistered_name_is_unknown_command() {
        let dispatcher = CommandDispatcher::new(".");
        let err = dispatcher.dispatch(&ctx(), ".missing").await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::UnknownCommand(name) if name == "missing"
        ));
    }

    #[tokio::test]
    async fn all_default_command_runs_on_bare_name() {
        let recorder = Recorder::default();
        let dispatcher = dispatcher_with(
            CommandSpec::new("hello", "Greets something.")
                .arg(ArgSpec::string("Target").default_value("world"))
                .arg(ArgSpec::new("Count", ArgKind::UInt8).default_value("1"))
                .handler(recorder.clone()),
        );
        let outcome = dispatcher.dispatch(&ctx(), ".hello").await.unwrap();
        assert_eq!(outcome, Outcome::Completed);

        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        let (seen_ctx, args) = &calls[0];
        assert_eq!(*seen_ctx, ctx());
        assert_eq!(args.string("Target"), "world");
        assert_eq!(args.uint8("Count"), 1);
    }

    #[tokio::test]
    async fn missing_required_argument_short_circuits() {
        let dispatcher = dispatcher_with(
            CommandSpec::new("test", "Needs an argument.")
                .arg(ArgSpec::string("RequiredArg"))
                .handler(handler_fn(|_, _| {})),
        );
        let err = dispatcher.dispatch(&ctx(), ".test").await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::RequiredArgumentMissing { argument, .. } if argument == "RequiredArg"
        ));
    }

    #[tokio::test]
    async fn keyword_only_invocation_binds_by_name() {
        let recorder = Recorder::default();
        let dispatcher = dispatcher_with(
            CommandSpec::new("cmd", "One string arg.")
                .arg(ArgSpec::string("Arg"))
                .handler(recorder.clone()),
        );
        dispatcher.dispatch(&ctx(), ".cmd Arg=value").await.unwrap();
        assert_eq!(recorder.calls()[0].1.string("Arg"), "value");
    }

    #[tokio::test]
    async fn positional_after_keyword_is_rejected() {
        let dispatcher = dispatcher_with(
            CommandSpec::new("cmd", "Three string args.")
                .arg(ArgSpec::string("Arg1"))
                .arg(ArgSpec::string("Arg2"))
                .arg(ArgSpec::string("Arg3"))
                .handler(handler_fn(|_, _| {})),
        );
        let err = dispatcher.dispatch(&ctx(), ".cmd A Arg2=B C").await.unwrap_err();
        assert!(matches!(
            err,
            CommandError::KeywordAfterPositional { token, .. } if token == "C"
        ));
    }

    #[tokio::test]
    async fn coercion_failure_names_argument_and_wraps_the_parse_error() {
        let dispatcher = dispatcher_with(
            CommandSpec::new("cmd", "One int arg.")
                .arg(ArgSpec::new("IntArg", ArgKind::Int32))
                .handler(handler_fn(|_, _| {})),
        );
        let err = dispatcher.dispatch(&ctx(), ".cmd ABC").await.unwrap_err();
        match err {
            CommandError::Coercion { argument, value, source, .. } => {
                assert_eq!(argument, "IntArg");
                assert_eq!(value, "ABC");
                assert!(matches!(source, crate::error::CoercionError::Int(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn quoted_values_reach_the_handler_intact() {
        let recorder = Recorder::default();
        let dispatcher = dispatcher_with(
            CommandSpec::new("say", "Echoes.")
                .arg(ArgSpec::string("Text"))
                .handler(recorder.clone()),
        );
        dispatcher
            .dispatch(&ctx(), r#".say "hello there world""#)
            .await
            .unwrap();
        assert_eq!(recorder.calls()[0].1.string("Text"), "hello there world");
    }

    #[tokio::test]
    async fn malformed_quoting_fails_before_lookup() {
        let dispatcher = CommandDispatcher::new(".");
        let err = dispatcher
            .dispatch(&ctx(), r#".whatever "unterminated"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::TokenizationSyntax(_)));
    }

    #[tokio::test]
    async fn mixed_positional_keyword_and_default_sources() {
        let recorder = Recorder::default();
        let dispatcher = dispatcher_with(
            CommandSpec::new("roll", "Rolls dice.")
                .arg(ArgSpec::new("Sides", ArgKind::UInt32))
                .arg(ArgSpec::new("Times", ArgKind::UInt32).default_value("1"))
                .arg(ArgSpec::boolean("Verbose").default_value("false"))
                .handler(recorder.clone()),
        );
        dispatcher.dispatch(&ctx(), ".roll 20 Verbose=true").await.unwrap();

        let (_, args) = &recorder.calls()[0];
        assert_eq!(args.get("Sides"), Some(&ArgValue::UInt32(20)));
        assert_eq!(args.get("Times"), Some(&ArgValue::UInt32(1)));
        assert_eq!(args.get("Verbose"), Some(&ArgValue::Bool(true)));
    }
}
