//! Insights view toggle and cached aggregate.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use crate::net::types::Insights;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsightsState {
    /// Whether the insights view replaces the chat view.
    pub visible: bool,
    pub data: Option<Insights>,
    pub loading: bool,
    pub error: Option<String>,
}

/// What the insights view should show, in priority order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsightsDisplay<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a Insights),
}

impl InsightsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the fetched aggregate or the failure text. Clears `loading`
    /// either way.
    pub fn finish_load(&mut self, result: Result<Insights, String>) {
        match result {
            Ok(insights) => self.data = Some(insights),
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn display(&self) -> InsightsDisplay<'_> {
        if self.loading {
            return InsightsDisplay::Loading;
        }
        if let Some(error) = self.error.as_deref() {
            return InsightsDisplay::Failed(error);
        }
        match &self.data {
            Some(insights) if insights.total_feedback > 0 => InsightsDisplay::Ready(insights),
            _ => InsightsDisplay::Empty,
        }
    }
}
