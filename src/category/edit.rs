//! Category editing page and endpoint.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    Error,
    app_state::DatabaseState,
    category::{CategoryForm, CategoryId, CategoryName, get_category, update_category},
    db::acquire,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
    },
    navigation::NavBar,
    routing::redirect_to,
};

/// Render the category editing page.
pub async fn get_edit_category_page(
    Path(category_id): Path<CategoryId>,
    State(state): State<DatabaseState>,
) -> Result<Response, Error> {
    let connection = acquire(&state.db_connection)?;

    let category = get_category(category_id, &connection)?;
    let update_endpoint = format_endpoint(endpoints::UPDATE_CATEGORY, category_id);

    Ok(edit_category_view(&update_endpoint, category.name.as_ref()).into_response())
}

/// Handle category update form submission.
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<DatabaseState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<CategoryForm>,
) -> Response {
    let connection = match acquire(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_form_response(is_htmx),
    };

    match CategoryName::new(&form.name)
        .and_then(|name| update_category(category_id, name, &connection))
    {
        Ok(()) => redirect_to(endpoints::SETTINGS_VIEW, is_htmx),
        Err(error) => {
            tracing::warn!("could not update category {category_id}: {error}");
            error.into_form_response(is_htmx)
        }
    }
}

fn edit_category_view(update_endpoint: &str, category_name: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();
    let form = category_form_view(update_endpoint, category_name, "Update Category");

    let content = html! {
        (nav_bar)
        div class=(FORM_CONTAINER_STYLE) { (form) }
    };

    base("Edit Category", &[], &content)
}

/// A form for creating or renaming a category.
pub(crate) fn category_form_view(action: &str, category_name: &str, submit_label: &str) -> Markup {
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
                    for="category-name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category Name"
                }

                input
                    id="category-name"
                    type="text"
                    name="name"
                    placeholder="Category Name"
                    value=(category_name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}
