//! Defines the route handler for the page that lists transactions with
//! their aggregate balances.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    AppState,
    api::ApiClient,
    endpoints,
    html::{
        BALANCE_CARD_STYLE, BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
    notification::Notifier,
};

use super::{
    core::TransactionType,
    list_model::{BalanceSummary, TransactionList, TransactionRow},
};

/// The max number of graphemes to display in the transaction title cells
/// before truncating and displaying ellipses.
const MAX_TITLE_GRAPHEMES: usize = 32;

/// The state needed for the transaction list page.
#[derive(Debug, Clone)]
pub struct TransactionListState {
    /// The client for the finance backend.
    pub api: ApiClient,
    /// The sending half of the notification channel.
    pub notifier: Notifier,
}

impl FromRef<AppState> for TransactionListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            notifier: state.notifier.clone(),
        }
    }
}

/// Render an overview of the user's transactions and balances.
///
/// A backend failure degrades to an empty listing plus a toast; this handler
/// never returns an error page.
pub async fn get_transaction_list_page(
    State(state): State<TransactionListState>,
) -> Response {
    let mut list = TransactionList::new();
    list.load(&state.api, &state.notifier).await;

    let markup = transaction_list_view(&list);
    list.stop();

    markup.into_response()
}

fn transaction_list_view(list: &TransactionList) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-6 lg:max-w-5xl lg:w-full lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Listagem" }

                    a href=(endpoints::IMPORT_VIEW) class=(LINK_STYLE)
                    {
                        "Importar transações"
                    }

                    a href=(endpoints::NEW_TRANSACTION_VIEW) class=(LINK_STYLE)
                    {
                        "Cadastrar transação"
                    }
                }

                (balance_cards_view(list.balance()))

                section class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden"
                {
                    @if list.rows().is_empty() {
                        p class="px-6 py-8 text-center text-gray-500 dark:text-gray-400"
                        {
                            "Nenhuma transação cadastrada."
                        }
                    } @else {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                                    th scope="col" class="px-6 py-4 text-right" { "Preço" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                                    th scope="col" class=(TABLE_CELL_STYLE)
                                    {
                                        span class="sr-only" { "Ações" }
                                    }
                                }
                            }

                            tbody
                            {
                                @for row in list.rows() {
                                    (transaction_row_view(row))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Listagem", &content)
}

fn balance_cards_view(balance: &BalanceSummary) -> Markup {
    html! {
        section class="grid grid-cols-1 sm:grid-cols-3 gap-4 w-full"
        {
            (balance_card("Entradas", &balance.income, "balance-income"))
            (balance_card("Saídas", &balance.outcome, "balance-outcome"))
            (balance_card("Total", &balance.total, "balance-total"))
        }
    }
}

fn balance_card(label: &str, amount: &str, test_id: &str) -> Markup {
    html! {
        div class=(BALANCE_CARD_STYLE)
        {
            header class="text-sm text-gray-600 dark:text-gray-400"
            {
                p { (label) }
            }

            h2 class="mt-2 text-3xl font-bold" data-testid=(test_id) { (amount) }
        }
    }
}

fn amount_view(row: &TransactionRow) -> Markup {
    // Outcome values arrive non-negative; the leading minus is purely
    // presentational, the way bank statements print debits.
    match row.transaction_type {
        TransactionType::Income => html! {
            span class="text-green-700 dark:text-green-300" { (row.formatted_value) }
        },
        TransactionType::Outcome => html! {
            span class="text-red-700 dark:text-red-300" { "- " (row.formatted_value) }
        },
    }
}

fn transaction_row_view(row: &TransactionRow) -> Markup {
    let (title, tooltip) = format_title(&row.title);
    let confirm_message = format!(
        "Tem certeza que deseja excluir a transação '{}'? Essa ação não pode ser desfeita.",
        row.title
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (title) }
            td class="px-6 py-4 text-right" { (amount_view(row)) }
            td class=(TABLE_CELL_STYLE) { (row.category_title) }
            td class=(TABLE_CELL_STYLE)
            {
                time { (row.formatted_date) }
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(row.delete_url)
                    hx-target="closest tr"
                    hx-swap="outerHTML"
                    hx-confirm=(confirm_message)
                {
                    "Excluir"
                }
            }
        }
    }
}

fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();
        let truncated = truncated + "...";
        (truncated, Some(title))
    }
}
