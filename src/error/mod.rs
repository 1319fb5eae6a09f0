//! Error handling for the trivia dashboard.
//!
//! - **Error Categories**: classification used for retry decisions and hints
//! - **FetchError**: failure of a single GET after retries
//! - **TriviaError**: failure of a whole load cycle
//!
//! | Category | Source | Retried |
//! |----------|--------|---------|
//! | TransientServerBusy | HTTP 429 / 503 | Yes, up to 3 times |
//! | RequestFailed | other non-2xx, exhausted retries, transport | No |
//! | ApiLogic | `response_code != 0` | No |
//! | Unknown | malformed body | No |

mod category;
mod fetch;
mod trivia;

pub use category::ErrorCategory;
pub use fetch::FetchError;
pub use trivia::{response_code_meaning, TriviaError, TriviaResult};
