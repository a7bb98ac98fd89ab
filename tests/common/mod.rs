//! Captures vehicle notifications emitted through `tracing`.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use rental_factory_recipe::vehicle::NOTIFICATION_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct NotificationLayer {
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for NotificationLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != NOTIFICATION_TARGET {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.messages.lock().unwrap().push(message);
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

/// Runs `f` with a subscriber that records every notification message, in order.
pub fn capture_notifications<F: FnOnce()>(f: F) -> Vec<String> {
    let layer = NotificationLayer::default();
    let messages = layer.messages.clone();
    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, f);

    let captured = messages.lock().unwrap().clone();
    captured
}
