//! Recordings endpoints against a mock ARI server.

use ari_client::{AriClient, AriConfig, AriError, EventError, RecordingState};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, AriClient) {
    let server = MockServer::start().await;
    let client = AriClient::new(AriConfig::new(format!("{}/ari", server.uri()))).unwrap();
    (server, client)
}

#[tokio::test]
async fn test_list_stored_recordings() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "greeting", "format": "wav"},
            {"name": "voicemail-1001", "format": "gsm"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let recordings = client.recordings().list_stored().await.unwrap();
    assert_eq!(recordings.len(), 2);
    assert_eq!(recordings[1].name, "voicemail-1001");
    assert_eq!(recordings[1].format, "gsm");
}

#[tokio::test]
async fn test_list_stored_recordings_single_entry_stays_a_list() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"name": "only", "format": "wav"}])),
        )
        .mount(&server)
        .await;

    let recordings = client.recordings().list_stored().await.unwrap();
    assert_eq!(recordings.len(), 1);
}

#[tokio::test]
async fn test_get_stored_recording() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored/greeting"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "greeting", "format": "wav"})),
        )
        .mount(&server)
        .await;

    let recording = client.recordings().get_stored("greeting").await.unwrap();
    assert_eq!(recording.name, "greeting");
}

#[tokio::test]
async fn test_get_stored_recording_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Recording not found"})),
        )
        .mount(&server)
        .await;

    let err = client.recordings().get_stored("missing").await.unwrap_err();
    match err {
        AriError::NotFound { path, message } => {
            assert_eq!(path, "/recordings/stored/missing");
            assert_eq!(message, "Recording not found");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_stored_recording() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/ari/recordings/stored/greeting"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.recordings().delete_stored("greeting").await.unwrap();
}

#[tokio::test]
async fn test_copy_stored_recording() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/ari/recordings/stored/greeting/copy"))
        .and(body_json(json!({"destinationRecordingName": "greeting-backup"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "greeting-backup", "format": "wav"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let copied = client
        .recordings()
        .copy_stored("greeting", "greeting-backup")
        .await
        .unwrap();
    assert_eq!(copied.name, "greeting-backup");
}

#[tokio::test]
async fn test_copy_onto_existing_name_conflicts() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/ari/recordings/stored/greeting/copy"))
        .respond_with(ResponseTemplate::new(409).set_body_json(
            json!({"message": "A recording with the same name already exists on the system"}),
        ))
        .mount(&server)
        .await;

    let err = client
        .recordings()
        .copy_stored("greeting", "taken")
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "expected Conflict, got {err:?}");
}

#[tokio::test]
async fn test_get_stored_file() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored/greeting/file"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"RIFF....WAVE".to_vec()))
        .mount(&server)
        .await;

    let bytes = client.recordings().get_stored_file("greeting").await.unwrap();
    assert_eq!(&bytes[..4], b"RIFF");
}

#[tokio::test]
async fn test_get_live_recording() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/live/call-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "call-1",
            "format": "wav",
            "state": "recording",
            "target_uri": "channel:1234.1"
        })))
        .mount(&server)
        .await;

    let recording = client.recordings().get_live("call-1").await.unwrap();
    assert_eq!(recording.state, Some(RecordingState::Recording));
    assert_eq!(recording.target_uri.as_deref(), Some("channel:1234.1"));
}

#[tokio::test]
async fn test_live_recording_wrapped_in_array_is_rejected() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/live/call-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"name": "call-2", "state": "queued"}])),
        )
        .mount(&server)
        .await;

    let err = client.recordings().get_live("call-2").await.unwrap_err();
    assert!(
        matches!(err, AriError::Payload(EventError::MalformedPayload { .. })),
        "got {err:?}"
    );
}

#[tokio::test]
async fn test_live_recording_controls_hit_expected_routes() {
    let (server, client) = setup().await;
    let routes = [
        ("POST", "/ari/recordings/live/call-1/stop"),
        ("DELETE", "/ari/recordings/live/call-1"),
        ("POST", "/ari/recordings/live/call-1/pause"),
        ("DELETE", "/ari/recordings/live/call-1/pause"),
        ("POST", "/ari/recordings/live/call-1/mute"),
        ("DELETE", "/ari/recordings/live/call-1/mute"),
    ];
    for (verb, route) in routes {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let recordings = client.recordings();
    recordings.stop_live("call-1").await.unwrap();
    recordings.cancel_live("call-1").await.unwrap();
    recordings.pause_live("call-1").await.unwrap();
    recordings.unpause_live("call-1").await.unwrap();
    recordings.mute_live("call-1").await.unwrap();
    recordings.unmute_live("call-1").await.unwrap();
}

#[tokio::test]
async fn test_pause_already_paused_conflicts() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/ari/recordings/live/call-1/pause"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Recording not in session"))
        .mount(&server)
        .await;

    let err = client.recordings().pause_live("call-1").await.unwrap_err();
    match err {
        AriError::Conflict { message, .. } => assert_eq!(message, "Recording not in session"),
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_snapshot_live_operations_use_client() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/live/call-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "call-3"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ari/recordings/live/call-3/mute"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let recording = client.recordings().get_live("call-3").await.unwrap();
    recording.mute(&client).await.unwrap();
}

#[tokio::test]
async fn test_other_statuses_propagate_as_http_errors() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/ari/recordings/live/call-1/stop"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.recordings().stop_live("call-1").await.unwrap_err();
    match err {
        AriError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(500)),
        other => panic!("expected Http, got {other:?}"),
    }
}

#[tokio::test]
async fn test_recording_names_are_path_encoded() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/ari/recordings/stored/voicemail%2F1001"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "voicemail/1001", "format": "wav"})),
        )
        .mount(&server)
        .await;

    let recording = client.recordings().get_stored("voicemail/1001").await.unwrap();
    assert_eq!(recording.name, "voicemail/1001");
}
