use maud::{Markup, html};
use time::Date;

use crate::{
    category::{Category, CategoryId},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The values a budget form starts with.
pub struct BudgetFormDefaults {
    pub category_id: Option<CategoryId>,
    pub amount: Option<f64>,
    pub start_date: Date,
    pub end_date: Date,
}

impl BudgetFormDefaults {
    /// Defaults for a new budget covering the calendar month of `today`.
    pub fn for_month_of(today: Date) -> Self {
        let last_day = today.month().length(today.year());

        Self {
            category_id: None,
            amount: None,
            start_date: today.replace_day(1).unwrap_or(today),
            end_date: today.replace_day(last_day).unwrap_or(today),
        }
    }
}

/// A form for creating or updating a budget.
pub fn budget_form_view(
    action: &str,
    defaults: &BudgetFormDefaults,
    categories: &[Category],
    submit_label: &str,
) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));
    let category_deleted = defaults
        .category_id
        .is_some_and(|id| !categories.iter().any(|category| category.id == id));

    html! {
        form
            method="post"
            action=(action)
            hx-post=(action)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category_id"
                    id="category_id"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if category_deleted {
                        option value="" selected disabled { "(deleted category)" }
                    }
                    @for category in categories {
                        option
                            value=(category.id)
                            selected[Some(category.id) == defaults.category_id]
                        {
                            (category.name)
                        }
                    }
                }
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="400.00"
                        required
                        value=[amount_str.as_deref()]
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div class="grid grid-cols-2 gap-4"
            {
                div
                {
                    label for="start_date" class=(FORM_LABEL_STYLE) { "Start Date" }

                    input
                        name="start_date"
                        id="start_date"
                        type="date"
                        value=(defaults.start_date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="end_date" class=(FORM_LABEL_STYLE) { "End Date" }

                    input
                        name="end_date"
                        id="end_date"
                        type="date"
                        value=(defaults.end_date)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}
