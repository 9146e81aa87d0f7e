use crate::services::{FlowToken, WeatherServiceMessage};
use crate::view::ViewModel;

/// Owns the displayed view. Lives on the thread that renders.
///
/// Each lookup gets a fresh token from `begin_lookup`; messages from any
/// older lookup are dropped, so a slow earlier request can never overwrite
/// a newer result.
#[derive(Debug, Default)]
pub struct WeatherModel {
    latest: u64,
    view: ViewModel,
}

impl WeatherModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the display and issue the token for a new lookup
    pub fn begin_lookup(&mut self) -> FlowToken {
        self.latest += 1;
        self.view = ViewModel::cleared();
        tracing::debug!("Starting lookup #{}", self.latest);
        FlowToken(self.latest)
    }

    /// Apply a message from a running lookup.
    /// Returns false when the message belongs to a superseded lookup.
    pub fn handle(&mut self, message: WeatherServiceMessage) -> bool {
        let token = message.token();
        if self.latest == 0 || token.0 != self.latest {
            tracing::debug!(
                "Discarding result of lookup #{} (current is #{})",
                token.0,
                self.latest
            );
            return false;
        }

        self.view = match message {
            WeatherServiceMessage::Progress { view, .. } | WeatherServiceMessage::Done { view, .. } => view,
        };
        true
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }
}
