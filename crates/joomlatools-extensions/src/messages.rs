//! Aggregating host diagnostic messages after a failed operation

use crate::application::Application;
use joomlatools_core::types::{QueuedMessage, Severity};

/// Drain the application's message queue and keep the error descriptions.
///
/// Warnings and notices are discarded; only errors explain a failure. The
/// original queue order is preserved.
pub fn error_descriptions(application: &mut dyn Application) -> Vec<String> {
    describe_errors(application.drain_message_queue())
}

pub(crate) fn describe_errors(messages: Vec<QueuedMessage>) -> Vec<String> {
    messages
        .into_iter()
        .filter(|message| message.severity == Severity::Error)
        .map(|message| message.text)
        .collect()
}
