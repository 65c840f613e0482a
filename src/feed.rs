use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::StreamExt;
use serde::Deserialize;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::app::FeedEvent;

/// One message from the vision backend. Either field may be null or
/// absent; a quiet frame arrives as `{"frame": "...", "detection": null}`.
#[derive(Debug, Deserialize)]
pub struct FeedMessage {
    pub frame: Option<String>,
    pub detection: Option<String>,
}

/// Read the WebSocket feed until it closes, forwarding frames and
/// detections to the GTK main thread. Runs on the tokio runtime.
pub async fn run_feed(url: String, sender: async_channel::Sender<FeedEvent>) {
    let (stream, _response) = match connect_async(url.as_str()).await {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("WebSocket connect failed: {e}");
            let _ = sender.send(FeedEvent::Closed).await;
            return;
        }
    };

    log::info!("WebSocket connected");
    let _ = sender.send(FeedEvent::Connected).await;

    // The client never sends anything; the query string was the only
    // parameterization.
    let (_write, mut read) = stream.split();

    while let Some(message) = read.next().await {
        match message {
            Ok(Message::Text(text)) => handle_text(&text, &sender).await,
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("WebSocket error: {e}");
                break;
            }
        }
    }

    log::info!("WebSocket closed");
    let _ = sender.send(FeedEvent::Closed).await;
}

/// Parse one text message and forward its contents. Bad payloads are
/// logged and dropped; the feed keeps going.
async fn handle_text(text: &str, sender: &async_channel::Sender<FeedEvent>) {
    let message: FeedMessage = match serde_json::from_str(text) {
        Ok(message) => message,
        Err(e) => {
            log::error!("Failed to parse feed message: {e}");
            return;
        }
    };

    if let Some(frame) = message.frame {
        // Decode here so the main thread only ever sees raw JPEG bytes.
        match BASE64.decode(frame.as_bytes()) {
            Ok(jpeg) => {
                let _ = sender.send(FeedEvent::Frame(jpeg)).await;
            }
            Err(e) => log::warn!("Frame is not valid base64: {e}"),
        }
    }

    if let Some(label) = message.detection {
        let _ = sender.send(FeedEvent::Detection(label)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_message() {
        let msg: FeedMessage =
            serde_json::from_str(r#"{"frame": "aGVsbG8=", "detection": "bottle on left"}"#)
                .unwrap();
        assert_eq!(msg.frame.as_deref(), Some("aGVsbG8="));
        assert_eq!(msg.detection.as_deref(), Some("bottle on left"));
    }

    #[test]
    fn null_detection_is_none() {
        let msg: FeedMessage =
            serde_json::from_str(r#"{"frame": "aGVsbG8=", "detection": null}"#).unwrap();
        assert!(msg.frame.is_some());
        assert!(msg.detection.is_none());
    }

    #[test]
    fn absent_fields_are_none() {
        let msg: FeedMessage = serde_json::from_str("{}").unwrap();
        assert!(msg.frame.is_none());
        assert!(msg.detection.is_none());
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(serde_json::from_str::<FeedMessage>("\"not a frame\"").is_err());
    }
}
