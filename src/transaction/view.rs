//! HTML views for the transactions page and its htmx partials.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_currency,
    },
    ledger::{Category, Transaction, TransactionKind},
    navigation::NavBar,
};

/// The emoji shown next to a transaction's description.
///
/// Decoration only: the raw category string is what gets stored and shown in
/// the badge, the emoji just comes from the closest known category.
fn category_emoji(category: Category) -> &'static str {
    match category {
        Category::Food => "🍔",
        Category::Transport => "🚗",
        Category::Entertainment => "🎬",
        Category::Utilities => "⚡",
        Category::Salary => "💼",
        Category::Freelance => "💻",
        Category::Other => "📦",
    }
}

/// Renders the full transactions page: the add form and the list.
pub(super) fn transactions_view(nav_bar: NavBar, transactions: &[Transaction]) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-2xl"
            {
                (add_transaction_form())

                (transaction_list(transactions))
            }
        }
    );

    base("Transactions", &content)
}

/// Renders the form for recording a new transaction.
fn add_transaction_form() -> Markup {
    html!(
        section class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Add Transaction" }

            form
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target-error="#alert-container"
                class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-md
                    grid grid-cols-1 sm:grid-cols-2 gap-4"
            {
                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                    input
                        type="text"
                        name="description"
                        id="description"
                        placeholder="e.g. Grocery Store"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required
                        autofocus;
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        type="number"
                        name="amount"
                        id="amount"
                        placeholder="0.00"
                        min="0.01"
                        step="0.01"
                        class=(FORM_TEXT_INPUT_STYLE)
                        required;
                }

                div
                {
                    label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                    select name="type" id="type" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        option value=(TransactionKind::Income.as_str()) { "Income" }
                        option value=(TransactionKind::Expense.as_str()) selected { "Expense" }
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select name="category" id="category" class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category.as_str())
                            {
                                (category_emoji(category)) " " (category.label())
                            }
                        }
                    }
                }

                div class="sm:col-span-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
                }
            }
        }
    )
}

/// Renders the transaction list section.
///
/// This is also the partial returned by the delete and clear endpoints, so
/// htmx can swap the whole section (including the empty state and the clear
/// button) in one go.
pub(super) fn transaction_list(transactions: &[Transaction]) -> Markup {
    html!(
        section id="transactions-list" class="w-full"
        {
            div class="flex justify-between items-baseline mb-4"
            {
                h3 class="text-xl font-semibold" { "Recent Transactions" }

                @if !transactions.is_empty() {
                    button
                        hx-post=(endpoints::CLEAR_TRANSACTIONS)
                        hx-confirm="Are you sure you want to clear all transactions? This action cannot be undone."
                        hx-target="#transactions-list"
                        hx-swap="outerHTML"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Clear All"
                    }
                }
            }

            @if transactions.is_empty() {
                (empty_state_view())
            } @else {
                ul class="flex flex-col gap-2"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    )
}

/// Renders a single transaction as a list row.
fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
    let emoji = category_emoji(Category::parse(&transaction.category));

    let (amount_text, amount_style) = match transaction.kind {
        TransactionKind::Income => (
            format!("+{}", format_currency(transaction.amount)),
            "font-semibold text-green-600 dark:text-green-400",
        ),
        TransactionKind::Expense => (
            format!("-{}", format_currency(transaction.amount)),
            "font-semibold text-red-600 dark:text-red-400",
        ),
    };

    html!(
        li
            class="transaction-item flex justify-between items-center
                bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-sm"
        {
            div
            {
                div class="font-medium mb-1"
                {
                    (emoji) " " (transaction.description)
                }

                div class="text-sm text-gray-600 dark:text-gray-400"
                {
                    span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                    span class="ml-3" { (transaction.date) }
                }
            }

            div class="flex items-center gap-3"
            {
                span class=(amount_style) { (amount_text) }

                button
                    hx-delete=(delete_url)
                    hx-target="#transactions-list"
                    hx-swap="outerHTML"
                    class=(BUTTON_DELETE_STYLE)
                    aria-label=(format!("Delete transaction {}", transaction.description))
                {
                    "🗑️"
                }
            }
        }
    )
}

/// Renders the empty state shown when no transactions have been recorded.
fn empty_state_view() -> Markup {
    html!(
        div class="text-center py-8"
        {
            div class="text-4xl mb-4" { "🏦" }

            h4 class="text-lg font-semibold mb-2" { "No transactions yet" }

            p class="text-gray-600 dark:text-gray-400"
            {
                "Add your first transaction to start tracking your finances!"
            }
        }
    )
}
