//! Login form.

use crate::action::Action;
use crate::node::{Node, div, el, form, heading, paragraph, submit};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm \
     placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:border-sky-500";

/// The login form, with `error` shown above it after a failed attempt.
#[must_use]
pub fn login_view(error: Option<&str>) -> Node {
    let mut container = div("max-w-md mx-auto mt-8 p-6 bg-white rounded-lg shadow-md")
        .child(heading(2, "Log ind", "text-2xl font-bold text-center text-gray-800 mb-6"));
    if let Some(message) = error {
        container = container.child(
            paragraph("mb-4 p-3 rounded-md bg-red-50 text-red-700 text-sm", message)
                .attr("role", "alert"),
        );
    }

    let fields = form(Action::Login, "space-y-4")
        .child(form_group(
            "Brugernavn",
            "username",
            "Indtast brugernavn",
            "text",
            "username",
        ))
        .child(form_group(
            "Adgangskode",
            "password",
            "Indtast adgangskode",
            "password",
            "current-password",
        ))
        .child(submit(
            "Log ind",
            "w-full bg-sky-600 hover:bg-sky-700 text-white py-2 px-4 rounded-md transition-colors",
        ));

    container.child(fields).into()
}

fn form_group(title: &str, name: &str, placeholder: &str, kind: &str, autocomplete: &str) -> Node {
    div("mb-4")
        .child(
            el("label")
                .attr("for", name)
                .class("block text-sm font-medium text-gray-700 mb-2")
                .text(title),
        )
        .child(
            el("input")
                .attr("id", name)
                .attr("name", name)
                .attr("type", kind)
                .attr("placeholder", placeholder)
                .attr("autocomplete", autocomplete)
                .attr("required", "")
                .class(INPUT_CLASS),
        )
        .into()
}
