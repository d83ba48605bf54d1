//! Aggregate feedback insights: summary cards, per-conversation table, and
//! recent feedback.

use leptos::prelude::*;

use crate::net::types::{ConversationInsight, Insights, RecentFeedback};
use crate::state::insights::InsightsDisplay;
use crate::state::store::ChatStore;
use crate::util::format::{format_percent, title_or_untitled};
use crate::util::time::format_datetime;

#[component]
pub fn InsightsView() -> impl IntoView {
    let store = expect_context::<ChatStore>();
    let insights = Memo::new(move |_| store.state.with(|s| s.insights.clone()));

    move || {
        insights.with(|state| match state.display() {
            InsightsDisplay::Loading => {
                view! { <div class="insights__placeholder">"Loading insights..."</div> }.into_any()
            }
            InsightsDisplay::Failed(error) => {
                let text = format!("Failed to load insights: {error}");
                view! { <div class="insights__placeholder insights__placeholder--error">{text}</div> }.into_any()
            }
            InsightsDisplay::Empty => view! {
                <div class="insights__placeholder">
                    "No feedback submitted yet. Encourage users to rate AI responses to unlock insights."
                </div>
            }
            .into_any(),
            InsightsDisplay::Ready(data) => view! { <InsightsReport insights=data.clone()/> }.into_any(),
        })
    }
}

#[component]
fn InsightsReport(insights: Insights) -> impl IntoView {
    let Insights { total_feedback, helpful_count, not_helpful_count, helpful_rate, per_conversation, recent_feedback } =
        insights;

    let rows = if per_conversation.is_empty() {
        view! {
            <tr>
                <td colspan="6" class="insights__empty">"No conversation feedback yet."</td>
            </tr>
        }
        .into_any()
    } else {
        per_conversation.into_iter().map(conversation_row).collect::<Vec<_>>().into_any()
    };

    let recent = if recent_feedback.is_empty() {
        view! { <li class="insights__empty">"No recent feedback."</li> }.into_any()
    } else {
        recent_feedback.into_iter().map(recent_item).collect::<Vec<_>>().into_any()
    };

    let total = total_feedback.to_string();
    let helpful = helpful_count.to_string();
    let not_helpful = not_helpful_count.to_string();
    let rate = format_percent(helpful_rate);

    view! {
        <div class="insights">
            <section class="insights__cards">
                <SummaryCard label="Total Feedback" value=total/>
                <SummaryCard label="Helpful" value=helpful tone=Tone::Positive/>
                <SummaryCard label="Not Helpful" value=not_helpful tone=Tone::Negative/>
                <SummaryCard label="Helpful Rate" value=rate/>
            </section>
            <section class="insights__section">
                <h3>"Top Conversations"</h3>
                <table class="insights__table">
                    <thead>
                        <tr>
                            <th>"Conversation"</th>
                            <th>"Feedback"</th>
                            <th>"Helpful"</th>
                            <th>"Not Helpful"</th>
                            <th>"Helpful Rate"</th>
                            <th>"Last Feedback"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
            <section class="insights__section">
                <h3>"Recent Feedback"</h3>
                <ul class="insights__recent">{recent}</ul>
            </section>
        </div>
    }
}

/// Accent of a summary card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tone {
    #[default]
    Neutral,
    Positive,
    Negative,
}

#[component]
fn SummaryCard(label: &'static str, value: String, #[prop(optional)] tone: Tone) -> impl IntoView {
    let positive = tone == Tone::Positive;
    let negative = tone == Tone::Negative;
    view! {
        <div class="insights__card" class:insights__card--positive=positive class:insights__card--negative=negative>
            <div class="insights__card-label">{label}</div>
            <div class="insights__card-value">{value}</div>
        </div>
    }
}

fn conversation_row(row: ConversationInsight) -> impl IntoView {
    let title = title_or_untitled(row.title.as_deref()).to_owned();
    let rate = format_percent(row.helpful_rate);
    let last = format_datetime(&row.last_feedback_at);
    view! {
        <tr>
            <td>{title}</td>
            <td>{row.feedback_count}</td>
            <td>{row.helpful_count}</td>
            <td>{row.not_helpful_count}</td>
            <td>{rate}</td>
            <td>{last}</td>
        </tr>
    }
}

fn recent_item(item: RecentFeedback) -> impl IntoView {
    let title = item.title.unwrap_or_else(|| "Untitled conversation".to_owned());
    let when = format_datetime(&item.created_at);
    let helpful = item.is_helpful;
    let verdict = if helpful { "Helpful" } else { "Not helpful" };
    let preview = format!("Response: {}", item.message_preview);
    let comment = (!item.comment.is_empty()).then(|| format!("Comment: {}", item.comment));

    view! {
        <li class="insights__recent-item">
            <div class="insights__recent-meta">
                <span>{title}</span>
                <span>{when}</span>
            </div>
            <div class="insights__verdict" class:insights__verdict--positive=helpful>
                {verdict}
            </div>
            <div class="insights__preview">{preview}</div>
            {comment.map(|text| view! { <div class="insights__comment">{text}</div> })}
        </li>
    }
}
