//! Frontend bridge: events pushed to the UI and a line-delimited JSON
//! transport for invoking the bound operations over stdio.

mod events;
mod protocol;
mod serve;

pub use events::{EventSink, JsonLineSink, UPDATE_AVAILABLE_EVENT};
pub use protocol::{ErrorBody, Request, Response, dispatch};
pub use serve::serve;

#[cfg(test)]
pub use events::MockEventSink;
