//! Notifier Adapters

mod collecting_notifier;

pub use collecting_notifier::CollectingNotifier;
