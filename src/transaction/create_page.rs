//! Defines the page for recording a new transaction.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, loading_spinner,
    },
    navigation::NavBar,
};

fn new_transaction_form_view() -> Markup {
    let create_route = endpoints::TRANSACTIONS_API;
    let spinner = loading_spinner();

    html! {
        form
            hx-post=(create_route)
            hx-disabled-elt="#title, #value, #category, #submit-button"
            hx-indicator="#indicator"
            hx-swap="none"
            class="space-y-4 md:space-y-6"
        {
            div
            {
                label for="title" class=(FORM_LABEL_STYLE) { "Título" }

                input
                    id="title"
                    type="text"
                    name="title"
                    placeholder="Nome da transação"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="value" class=(FORM_LABEL_STYLE) { "Valor" }

                input
                    id="value"
                    type="number"
                    name="value"
                    step="0.01"
                    min="0.01"
                    placeholder="0,00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset class=(FORM_RADIO_GROUP_STYLE)
            {
                legend class=(FORM_LABEL_STYLE) { "Tipo" }

                div class="flex items-center gap-2"
                {
                    input
                        id="type-income"
                        type="radio"
                        name="type"
                        value="income"
                        checked
                        required
                        class=(FORM_RADIO_INPUT_STYLE);

                    label for="type-income" class=(FORM_RADIO_LABEL_STYLE) { "Entrada" }
                }

                div class="flex items-center gap-2"
                {
                    input
                        id="type-outcome"
                        type="radio"
                        name="type"
                        value="outcome"
                        class=(FORM_RADIO_INPUT_STYLE);

                    label for="type-outcome" class=(FORM_RADIO_LABEL_STYLE) { "Saída" }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Categoria" }

                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Categoria"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button
                type="submit"
                id="submit-button"
                class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator" { (spinner) }
                " Enviar"
            }
        }
    }
}

fn new_transaction_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_TRANSACTION_VIEW).into_html();
    let form = new_transaction_form_view();

    let content = html! {
        (nav_bar)

        div
            class="flex flex-col items-center px-6 py-8 mx-auto lg:py-0
            text-gray-900 dark:text-white"
        {
            div class="w-full max-w-md space-y-4"
            {
                h1 class="text-xl font-bold" { "Cadastrar transação" }

                (form)
            }
        }
    };

    base("Cadastrar", &content)
}

/// Route handler for the page that records a new transaction.
pub async fn get_new_transaction_page() -> Response {
    new_transaction_view().into_response()
}
