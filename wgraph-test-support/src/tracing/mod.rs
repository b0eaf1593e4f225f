//! Recording layer utilities for capturing spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Structured fields keyed by field name, rendered as strings.
pub type Fields = HashMap<String, String>;

/// Recording layer installed during tests to capture closed spans and emitted
/// events for later assertions.
///
/// # Examples
/// ```
/// use tracing_subscriber::layer::SubscriberExt;
/// use wgraph_test_support::tracing::RecordingLayer;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo", size = 3).entered();
///     tracing::info!("inside");
/// });
///
/// let span = layer.span_named("demo").expect("span recorded");
/// assert_eq!(span.fields.get("size").map(String::as_str), Some("3"));
/// assert_eq!(layer.events_with_message("inside").len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    recording: Arc<Mutex<Recording>>,
}

#[derive(Default)]
struct Recording {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// Snapshot of a closed span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name captured from the tracing metadata.
    pub name: String,
    /// Structured fields recorded against the span, including late records.
    pub fields: Fields,
}

/// Snapshot of an emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Log level associated with the event.
    pub level: Level,
    /// Event target string extracted from the metadata.
    pub target: String,
    /// Structured fields attached to the event, `message` included.
    pub fields: Fields,
}

impl EventRecord {
    /// Returns the event's formatted message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get("message").map(String::as_str)
    }
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.lock()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns every event whose message equals `message`.
    #[must_use]
    pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
        self.lock()
            .events
            .iter()
            .filter(|event| event.message() == Some(message))
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.recording.lock().expect("recording lock poisoned")
    }
}

struct OpenSpan {
    name: String,
    fields: Fields,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut open = OpenSpan {
            name: attrs.metadata().name().to_owned(),
            fields: Fields::new(),
        };
        attrs.record(&mut FieldRecorder(&mut open.fields));
        span.extensions_mut().insert(open);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldRecorder(&mut open.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        self.lock().spans.push(SpanRecord {
            name: open.name,
            fields: open.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.lock().events.push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            fields,
        });
    }
}

struct FieldRecorder<'a>(&'a mut Fields);

impl FieldRecorder<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.put(field, value.to_string());
    }
}
