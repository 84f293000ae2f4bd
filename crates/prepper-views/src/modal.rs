//! Delete confirmation dialog.
//!
//! The dialog is answered exactly once. `confirmation()` hands out the two
//! ends of a single-use channel: the caller awaits `PendingConfirmation`
//! while the `Confirmer` waits for the user's decision.

use tokio::sync::oneshot;

use crate::action::{Action, Decision};
use crate::node::{Node, div, el, form, heading, raw};

/// `id` of the dialog overlay.
pub const DIALOG_ID: &str = "confirm-dialog";

const KEY_HANDLER: &str = "<script>document.addEventListener('keydown',function(e){\
var f=document.querySelector('#confirm-dialog form');if(!f)return;\
var d=e.key==='Escape'?'escape':(e.key==='Enter'?'confirm':'');if(!d)return;\
e.preventDefault();f.requestSubmit(f.querySelector('button[value=\"'+d+'\"]'));});</script>";

/// The dialog asking whether to remove `item_name`.
///
/// Enter confirms; Escape and a click on the overlay cancel.
#[must_use]
pub fn delete_confirm_modal(key: &str, item_name: &str) -> Node {
    let dialog = div("relative z-10 bg-white rounded-lg p-6 max-w-sm w-full mx-4 shadow-xl")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .child(div("text-center mb-4 text-4xl").text("🗑️"))
        .child(heading(
            2,
            "Fjern produkt?",
            "text-lg font-semibold text-gray-800 mb-3 text-center",
        ))
        .child(
            el("p")
                .class("text-gray-600 mb-6 text-center text-sm")
                .text("Er du sikker på, at du vil fjerne")
                .child(el("br"))
                .child(el("strong").text(format!("\"{item_name}\"")))
                .child(el("br"))
                .text("fra din kurv?"),
        )
        .child(
            div("flex gap-3")
                .child(decision_button(
                    Decision::Cancel,
                    "Nej, behold",
                    "flex-1 px-4 py-2 bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200 font-medium",
                ))
                .child(
                    decision_button(
                        Decision::Confirm,
                        "Ja, fjern",
                        "flex-1 px-4 py-2 bg-red-500 text-white rounded-md hover:bg-red-600 font-medium",
                    )
                    .attr("autofocus", ""),
                ),
        );

    let overlay_click = decision_button(
        Decision::Cancel,
        "",
        "absolute inset-0 w-full h-full cursor-default bg-black/40",
    )
    .attr("aria-label", "Luk");

    let escape = decision_button(Decision::Escape, "", "").attr("hidden", "");

    div("fixed inset-0 flex items-center justify-center z-50")
        .attr("id", DIALOG_ID)
        .child(
            form(
                Action::Confirm {
                    key: key.to_owned(),
                },
                "contents",
            )
            .child(overlay_click)
            .child(dialog)
            .child(escape),
        )
        .child(raw(KEY_HANDLER))
        .into()
}

fn decision_button(decision: Decision, label: &str, class: &str) -> crate::node::Element {
    el("button")
        .attr("type", "submit")
        .attr("name", "decision")
        .attr("value", decision.as_str())
        .class(class)
        .text(label)
}

/// Resolves a pending confirmation.
#[derive(Debug)]
pub struct Confirmer(oneshot::Sender<Decision>);

/// Awaits the user's answer.
#[derive(Debug)]
pub struct PendingConfirmation(oneshot::Receiver<Decision>);

/// Opens a confirmation.
#[must_use]
pub fn confirmation() -> (Confirmer, PendingConfirmation) {
    let (tx, rx) = oneshot::channel();
    (Confirmer(tx), PendingConfirmation(rx))
}

impl Confirmer {
    /// Delivers `decision`. Returns `false` if nobody is waiting anymore.
    pub fn resolve(self, decision: Decision) -> bool {
        self.0.send(decision).is_ok()
    }
}

impl PendingConfirmation {
    /// Waits for the decision. A confirmer dropped without answering counts
    /// as `Decision::Cancel`.
    pub async fn decision(self) -> Decision {
        self.0.await.unwrap_or(Decision::Cancel)
    }

    /// Waits for the decision and reports whether it was a confirmation.
    pub async fn confirmed(self) -> bool {
        self.decision().await.is_confirmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_modal_posts_decisions_for_key() {
        // Arrange / Act
        let node = delete_confirm_modal("abc", "Vandfilter <XL>");

        // Assert
        assert_eq!(
            node.actions(),
            vec![&Action::Confirm {
                key: "abc".to_owned(),
            }]
        );
        let html = render(&node);
        assert!(html.contains("name=\"key\" value=\"abc\""));
        assert!(html.contains("value=\"confirm\" class=\"flex-1"));
        assert!(html.contains("value=\"cancel\""));
        assert!(html.contains("value=\"escape\""));
        assert!(html.contains("<strong>\"Vandfilter &lt;XL&gt;\"</strong>"));
    }

    #[tokio::test]
    async fn test_confirm_resolves_waiter() {
        let (confirmer, pending) = confirmation();

        assert!(confirmer.resolve(Decision::Confirm));

        assert!(pending.confirmed().await);
    }

    #[tokio::test]
    async fn test_escape_and_cancel_do_not_confirm() {
        for decision in [Decision::Cancel, Decision::Escape] {
            let (confirmer, pending) = confirmation();
            confirmer.resolve(decision);
            assert_eq!(pending.decision().await, decision);
        }
    }

    #[tokio::test]
    async fn test_dropped_confirmer_cancels() {
        let (confirmer, pending) = confirmation();
        drop(confirmer);

        assert!(!pending.confirmed().await);
    }

    #[tokio::test]
    async fn test_resolving_after_waiter_is_gone_reports_false() {
        let (confirmer, pending) = confirmation();
        drop(pending);

        assert!(!confirmer.resolve(Decision::Confirm));
    }
}
