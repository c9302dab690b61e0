//! Card components for the dashboard summary and the income goal section.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, format_currency},
    ledger::{BalanceState, MonthKey, MonthlySummary, goal_progress},
};

/// Everything the summary cards need, precomputed by the handler.
pub(super) struct DashboardTotals {
    /// Total income minus total expenses over the whole ledger.
    pub balance: f64,
    /// Qualitative classification of the balance.
    pub balance_state: BalanceState,
    /// Sum over all income transactions.
    pub total_income: f64,
    /// Sum over all expense transactions.
    pub total_expenses: f64,
    /// Totals restricted to the current month.
    pub monthly: MonthlySummary,
    /// The month the monthly totals cover.
    pub month: MonthKey,
}

/// Renders the grid of summary cards.
pub(super) fn summary_cards_view(totals: &DashboardTotals) -> Markup {
    let (balance_hint, balance_hint_style) = match totals.balance_state {
        BalanceState::Empty => ("Start by adding transactions", "text-gray-600 dark:text-gray-400"),
        BalanceState::Positive => ("↗ Positive balance", "text-green-600 dark:text-green-400"),
        BalanceState::Negative => ("↘ Negative balance", "text-red-600 dark:text-red-400"),
        BalanceState::BreakEven => ("→ Breaking even", "text-gray-600 dark:text-gray-400"),
    };

    html!(
        section class="w-full mx-auto mb-8"
        {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4"
            {
                div class=(CARD_STYLE)
                {
                    h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1" { "Total Balance" }

                    div class="text-3xl font-bold mb-1" { (format_currency(totals.balance)) }

                    div class=(format!("text-sm {balance_hint_style}")) { (balance_hint) }
                }

                div class=(CARD_STYLE)
                {
                    h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1"
                    {
                        "Monthly Net (" (totals.month) ")"
                    }

                    div class="text-3xl font-bold mb-1" { (format_currency(totals.monthly.net)) }

                    div class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        (format_currency(totals.monthly.income))
                        " - "
                        (format_currency(totals.monthly.expenses))
                    }
                }

                div class=(CARD_STYLE)
                {
                    h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1" { "Total Income" }

                    div class="text-3xl font-bold text-green-600 dark:text-green-400"
                    {
                        (format_currency(totals.total_income))
                    }
                }

                div class=(CARD_STYLE)
                {
                    h4 class="text-sm text-gray-600 dark:text-gray-400 mb-1" { "Total Expenses" }

                    div class="text-3xl font-bold text-red-600 dark:text-red-400"
                    {
                        (format_currency(totals.total_expenses))
                    }
                }
            }
        }
    )
}

/// Renders the income goal section: the goal form and the progress bar.
///
/// This is also the partial returned by the set-goal endpoint so htmx can
/// swap the section in place.
pub(super) fn goal_section(goal: f64, monthly_income: f64) -> Markup {
    html!(
        section id="goal-section" class="w-full mx-auto mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Monthly Income Goal" }

            div class=(CARD_STYLE)
            {
                form
                    hx-post=(endpoints::INCOME_GOAL)
                    hx-target="#goal-section"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class="flex items-end gap-3 mb-4"
                {
                    div class="grow"
                    {
                        label for="goal" class=(FORM_LABEL_STYLE) { "Goal amount" }

                        input
                            type="number"
                            name="goal"
                            id="goal"
                            placeholder="e.g. 5000"
                            min="0"
                            step="0.01"
                            value=[(goal > 0.0).then(|| format!("{goal:.2}"))]
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button
                        type="submit"
                        class="px-4 py-2 bg-blue-500 dark:bg-blue-600 hover:bg-blue-600
                            hover:dark:bg-blue-700 text-white rounded whitespace-nowrap"
                    {
                        "Set Goal"
                    }
                }

                (goal_progress_view(goal, monthly_income))
            }
        }
    )
}

/// Renders the progress bar, or the prompt to set a goal.
fn goal_progress_view(goal: f64, monthly_income: f64) -> Markup {
    let Some(progress) = goal_progress(monthly_income, goal) else {
        return html!(
            p class="text-sm text-gray-600 dark:text-gray-400"
            {
                "Set your monthly income goal"
            }
        );
    };

    let clamped = progress.percent.clamp(0.0, 100.0);

    // Ensure minimum 3% width so rounded corners are visible
    let display_percentage = if clamped > 0.0 && clamped < 3.0 {
        3.0
    } else {
        clamped
    };

    html!(
        div
            class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5 mb-2"
            role="progressbar"
            aria-valuenow=(format!("{clamped:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0.0 {
                div
                    class="bg-blue-600 dark:bg-blue-500 h-2.5 rounded-full transition-all"
                    style=(format!("width: {:.1}%", display_percentage))
                {}
            }
        }

        p class="text-sm text-gray-600 dark:text-gray-400"
        {
            (format!("{:.1}", progress.percent)) "% complete • "
            (format_currency(progress.remaining)) " remaining"
        }
    )
}
