//! Alert fragments for reporting failed form submissions to HTMX clients.
//!
//! The fragment is swapped into the `#alert-container` element that
//! [base](crate::html::base) places at the bottom of every page.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// An error alert with a short message and a longer explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm text-red-800 border
                    border-red-300 rounded-lg bg-red-50 dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        span class="block mt-1" { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto text-red-500 hover:text-red-700"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
