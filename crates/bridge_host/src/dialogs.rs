//! Blocking page dialog contracts (`alert`, `confirm`, `prompt`) and a scripted adapter.
//!
//! Dialog calls never fail from the caller's point of view: a host that cannot show a dialog
//! resolves as if the human dismissed it.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DialogService`].
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the page's native modal dialogs.
pub trait DialogService {
    /// Shows a message and resolves once it is dismissed.
    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()>;

    /// Asks a yes/no question. Resolves `false` when the dialog cannot be shown.
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool>;

    /// Asks for free text. Resolves `None` when cancelled or when the dialog cannot be shown.
    fn prompt<'a>(
        &'a self,
        message: &'a str,
        default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>>;
}

/// One dialog shown through a [`ScriptedDialogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRecord {
    /// `alert(message)`.
    Alert(String),
    /// `confirm(message)`.
    Confirm(String),
    /// `prompt(message, default)`.
    Prompt {
        /// Prompt text.
        message: String,
        /// Pre-filled answer.
        default_value: String,
    },
}

#[derive(Debug, Default)]
struct ScriptedDialogs {
    shown: Vec<DialogRecord>,
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
}

#[derive(Debug, Clone, Default)]
/// Dialog service that records every dialog and answers from queued responses.
///
/// With empty queues, `confirm` resolves `false` and `prompt` resolves `None` (cancelled). Clones
/// share the record and the queues.
pub struct ScriptedDialogService {
    inner: Rc<RefCell<ScriptedDialogs>>,
}

impl ScriptedDialogService {
    /// Queues the answer for the next `confirm`.
    pub fn push_confirm(&self, answer: bool) -> &Self {
        self.inner.borrow_mut().confirms.push_back(answer);
        self
    }

    /// Queues the answer for the next `prompt`.
    pub fn push_prompt(&self, answer: Option<&str>) -> &Self {
        self.inner
            .borrow_mut()
            .prompts
            .push_back(answer.map(str::to_string));
        self
    }

    /// Returns every dialog shown so far, oldest first.
    pub fn shown(&self) -> Vec<DialogRecord> {
        self.inner.borrow().shown.clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .shown
                .push(DialogRecord::Alert(message.to_string()));
        })
    }

    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.shown.push(DialogRecord::Confirm(message.to_string()));
            inner.confirms.pop_front().unwrap_or(false)
        })
    }

    fn prompt<'a>(
        &'a self,
        message: &'a str,
        default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.shown.push(DialogRecord::Prompt {
                message: message.to_string(),
                default_value: default_value.to_string(),
            });
            inner.prompts.pop_front().flatten()
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scripted_dialogs_answer_in_queue_order() {
        let dialogs = ScriptedDialogService::default();
        dialogs.push_confirm(true).push_prompt(Some("typed"));

        assert!(block_on(dialogs.confirm("sure?")));
        assert!(!block_on(dialogs.confirm("again?")));
        assert_eq!(
            block_on(dialogs.prompt("say", "x")),
            Some("typed".to_string())
        );
        assert_eq!(block_on(dialogs.prompt("say", "x")), None);
    }

    #[test]
    fn scripted_dialogs_record_what_was_shown() {
        let dialogs = ScriptedDialogService::default();
        let observer = dialogs.clone();
        block_on(dialogs.alert("hello"));
        block_on(dialogs.prompt("QR?", "https://t.me/example"));

        assert_eq!(
            observer.shown(),
            vec![
                DialogRecord::Alert("hello".to_string()),
                DialogRecord::Prompt {
                    message: "QR?".to_string(),
                    default_value: "https://t.me/example".to_string(),
                },
            ]
        );
    }
}
