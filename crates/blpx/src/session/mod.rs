//! The vendor transport seam.
//!
//! Session management, the event loop, and the wire protocol live in the
//! vendor SDK. This crate only depends on the capability modeled here:
//! submit a request, then lazily drain the response messages it produced.
//! Implementations bind the vendor SDK; tests substitute fakes.

use crate::errors::BlpError;
use crate::models::{Message, Request};

/// Response messages for one in-flight request, yielded lazily until the
/// response is complete. Finite, and consumed once.
pub type MessageStream<'a> = Box<dyn Iterator<Item = Result<Message, BlpError>> + 'a>;

/// An open vendor session.
///
/// Implement this to bind a real vendor session or a test fake. One call
/// to [`send_request`](Session::send_request) is one blocking round trip;
/// any timeout or recovery policy belongs to the implementation, not to
/// the adapter.
pub trait Session {
    /// Submit a request and return its response message stream.
    fn send_request(&mut self, request: &Request) -> Result<MessageStream<'_>, BlpError>;
}

/// Drain a response stream through a per-message extraction function,
/// concatenating whatever each message yields. Transport errors abort the
/// drain and propagate.
pub fn drain<T, F>(stream: MessageStream<'_>, mut extract: F) -> Result<Vec<T>, BlpError>
where
    F: FnMut(&Message) -> Vec<T>,
{
    let mut out = Vec::new();
    for message in stream {
        out.extend(extract(&message?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Element;

    fn message(marker: &str) -> Message {
        Message::new("TestResponse", Element::new().with("marker", marker))
    }

    #[test]
    fn test_drain_concatenates_in_message_order() {
        let stream: MessageStream<'_> =
            Box::new(vec![Ok(message("a")), Ok(message("b"))].into_iter());
        let out = drain(stream, |msg| vec![msg.root().get_as_string("marker")]).unwrap();
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn test_drain_propagates_transport_errors() {
        let stream: MessageStream<'_> = Box::new(
            vec![Ok(message("a")), Err(BlpError::session("session down"))].into_iter(),
        );
        let out = drain(stream, |msg| vec![msg.root().get_as_string("marker")]);
        assert!(out.is_err());
    }
}
