use maud::{Markup, html};
use time::Date;

use crate::{
    account::{Account, AccountId},
    category::{Category, CategoryId},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The values a transaction form starts with.
pub struct TransactionFormDefaults<'a> {
    pub description: Option<&'a str>,
    pub amount: Option<f64>,
    pub date: Date,
    pub account_id: Option<AccountId>,
    pub category_id: Option<CategoryId>,
}

/// A form for creating or updating a transaction.
///
/// Amounts are signed: income is positive and expenses are negative.
pub fn transaction_form_view(
    action: &str,
    defaults: &TransactionFormDefaults<'_>,
    accounts: &[Account],
    categories: &[Category],
    submit_label: &str,
) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));
    // A transaction can outlive its account or category.
    let account_deleted = defaults
        .account_id
        .is_some_and(|id| !accounts.iter().any(|account| account.id == id));
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
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="SuperMart"
                    value=[defaults.description]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount (negative for expenses)"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="-85.50"
                        required
                        value=[amount_str.as_deref()]
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(defaults.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="account_id"
                    class=(FORM_LABEL_STYLE)
                {
                    "Account"
                }

                select
                    name="account_id"
                    id="account_id"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if account_deleted {
                        option value="" selected disabled { "(deleted account)" }
                    }
                    @for account in accounts {
                        option
                            value=(account.id)
                            selected[Some(account.id) == defaults.account_id]
                        {
                            (account.name)
                        }
                    }
                }
            }

            div
            {
                label
                    for="category_id"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

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

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}
