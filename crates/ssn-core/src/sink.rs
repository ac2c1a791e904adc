//! Trigger/display boundary for hosts.
//!
//! A host wires a [`Trigger`] to whatever event it has (button press,
//! command invocation, request) and supplies a [`DisplaySink`] that renders
//! the formatted result.

use crate::digits::FormattedSsn;
use crate::error::GenerateError;
use crate::generator::Generator;
use crate::source::DigitSource;

/// Anything that renders a string to a user.
pub trait DisplaySink {
    /// Show `text`.
    fn show(&mut self, text: &str);
}

/// Collects every shown value.
impl DisplaySink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Holds only the latest value, like a text label.
impl DisplaySink for String {
    fn show(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl<K: DisplaySink + ?Sized> DisplaySink for &mut K {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

/// A generator wired to a display sink.
pub struct Trigger<S, K> {
    generator: Generator<S>,
    sink: K,
}

impl<S: DigitSource, K: DisplaySink> Trigger<S, K> {
    /// Wire `generator` to `sink`.
    pub fn new(generator: Generator<S>, sink: K) -> Self {
        Self { generator, sink }
    }

    /// Generate once and deliver the result to the sink.
    ///
    /// On error nothing is shown.
    pub fn fire(&mut self) -> Result<FormattedSsn, GenerateError> {
        let ssn = self.generator.generate()?;
        self.sink.show(&ssn.to_string());
        Ok(ssn)
    }

    /// Access the sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Split back into generator and sink.
    pub fn into_parts(self) -> (Generator<S>, K) {
        (self.generator, self.sink)
    }
}
