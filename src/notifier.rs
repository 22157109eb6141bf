use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A short user-visible status message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => log::error!("{}: {}", notification.title, notification.description),
            Severity::Info => log::info!("{}: {}", notification.title, notification.description),
        }
    }
}

/// Forwards notifications into a component callback, e.g. a toast list.
#[derive(Clone)]
pub struct CallbackNotifier(pub Callback<Notification>);

impl Notifier for CallbackNotifier {
    fn notify(&self, notification: Notification) {
        self.0.emit(notification);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn callback_notifier_forwards() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let notifier = {
            let seen = seen.clone();
            CallbackNotifier(Callback::from(move |n: Notification| seen.borrow_mut().push(n)))
        };
        notifier.notify(Notification::error("Connection failed", "Error: boom"));
        assert_eq!(
            *seen.borrow(),
            vec![Notification::error("Connection failed", "Error: boom")]
        );
    }
}
