//! AppMessage enum for async communication within the application.

use crate::api::TriviaData;
use crate::error::TriviaResult;
use crate::state::LoadTicket;

/// Messages received from background tasks
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A load spawned by [`super::App::start_load`] settled
    LoadFinished {
        ticket: LoadTicket,
        result: TriviaResult<TriviaData>,
    },
}
