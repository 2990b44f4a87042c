// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the cloud API client using wiremock.

use std::time::{Duration, Instant};

use serde_json::{Value, json};
use switchbot_remote::command::{ClimateCommand, FanMode, HvacMode, TemperatureRange};
use switchbot_remote::protocol::{ClientConfig, Credentials};
use switchbot_remote::{DeviceClass, Error, ProtocolError, SwitchBot, classify};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn success(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 100,
        "message": "success",
        "body": body
    }))
}

fn remote_list() -> Value {
    json!({
        "deviceList": [],
        "infraredRemoteList": [
            {
                "deviceId": "A1",
                "deviceName": "Bedroom AC",
                "remoteType": "Air Conditioner",
                "hubDeviceId": "H1"
            },
            {
                "deviceId": "C1",
                "deviceName": "Living room curtain",
                "remoteType": "Smart Curtain 3.0",
                "hubDeviceId": "H1"
            },
            {
                "deviceId": "O1",
                "deviceName": "Projector screen",
                "remoteType": "Others",
                "hubDeviceId": "H1"
            }
        ]
    })
}

fn session(server: &MockServer, retry_delay: Duration) -> SwitchBot {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_retry_delay(retry_delay);
    SwitchBot::with_config(Credentials::with_nonce("token", "secret", "nonce"), config).unwrap()
}

async fn mount_remote_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(success(remote_list()))
        .mount(server)
        .await;
}

// ============================================================================
// Retry policy
// ============================================================================

mod retry {
    use super::*;

    #[tokio::test]
    async fn persistent_500_exhausts_the_budget() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(500))
            .expect(5)
            .mount(&server)
            .await;

        let result = session(&server, Duration::from_millis(5)).remotes().await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::RepeatedServerErrors { attempts: 5 }))
        ));
    }

    #[tokio::test]
    async fn recovers_after_one_500() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        mount_remote_list(&server).await;

        let remotes = session(&server, Duration::from_millis(5))
            .remotes()
            .await
            .unwrap();
        assert_eq!(remotes.len(), 3);
    }

    #[tokio::test]
    async fn custom_attempt_budget() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let config = ClientConfig::new()
            .with_base_url(server.uri())
            .with_max_attempts(2)
            .with_retry_delay(Duration::from_millis(5));
        let client = config
            .into_client(Credentials::with_nonce("token", "secret", "nonce"))
            .unwrap();

        let result = client.get("devices").await;
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::RepeatedServerErrors { attempts: 2 }))
        ));
    }

    #[tokio::test]
    async fn waits_between_attempts_but_not_after_the_last() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(500))
            .expect(3)
            .mount(&server)
            .await;

        let config = ClientConfig::new()
            .with_base_url(server.uri())
            .with_max_attempts(3)
            .with_retry_delay(Duration::from_millis(200));
        let client = config
            .into_client(Credentials::with_nonce("token", "secret", "nonce"))
            .unwrap();

        let start = Instant::now();
        let result = client.get("devices").await;
        let elapsed = start.elapsed();

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::RepeatedServerErrors { attempts: 3 }))
        ));
        // Two pauses of 200 ms; a third one would push this past 600 ms.
        assert!(elapsed >= Duration::from_millis(400), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(600), "elapsed {elapsed:?}");
    }

    #[tokio::test]
    async fn other_status_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let start = Instant::now();
        let result = session(&server, Duration::from_secs(2)).remotes().await;

        assert!(start.elapsed() < Duration::from_secs(2));
        match result {
            Err(Error::Protocol(ProtocolError::UnexpectedStatus { status })) => {
                assert_eq!(status, 404);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn api_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "statusCode": 190,
                "message": "Device internal error due to device states not synchronized with server",
                "body": {}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = session(&server, Duration::from_millis(5)).remotes().await;

        match result {
            Err(Error::Protocol(ProtocolError::Api {
                status_code,
                message,
            })) => {
                assert_eq!(status_code, 190);
                assert!(message.contains("not synchronized"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

// ============================================================================
// Request signing and body translation
// ============================================================================

mod wire {
    use super::*;

    #[tokio::test]
    async fn requests_carry_signature_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .and(header("Authorization", "token"))
            .and(header("nonce", "nonce"))
            .and(header_exists("t"))
            .and(header_exists("sign"))
            .respond_with(success(remote_list()))
            .expect(1)
            .mount(&server)
            .await;

        session(&server, Duration::from_millis(5))
            .remotes()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn turn_sends_builtin_verbs_in_camel_case() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        Mock::given(method("POST"))
            .and(path("/devices/A1/commands"))
            .and(body_json(json!({
                "command": "turnOn",
                "parameter": "default",
                "commandType": "command"
            })))
            .respond_with(success(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/devices/A1/commands"))
            .and(body_json(json!({
                "command": "turnOff",
                "parameter": "default",
                "commandType": "command"
            })))
            .respond_with(success(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let remote = session(&server, Duration::from_millis(5))
            .remote("A1")
            .await
            .unwrap();
        remote.turn("ON").await.unwrap();
        remote.turn("off").await.unwrap();
    }

    #[tokio::test]
    async fn invalid_power_state_sends_nothing() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        Mock::given(method("POST"))
            .respond_with(success(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let remote = session(&server, Duration::from_millis(5))
            .remote("A1")
            .await
            .unwrap();
        assert!(matches!(
            remote.turn("standby").await,
            Err(Error::Value(_))
        ));
    }

    #[tokio::test]
    async fn customized_command() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        Mock::given(method("POST"))
            .and(path("/devices/O1/commands"))
            .and(body_json(json!({
                "command": "SCREEN_DOWN",
                "parameter": "default",
                "commandType": "customize"
            })))
            .respond_with(success(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let remote = session(&server, Duration::from_millis(5))
            .remote("O1")
            .await
            .unwrap();
        assert!(remote.is_other());
        remote.command("SCREEN_DOWN", None, true).await.unwrap();
        assert!(matches!(
            remote.turn("on").await,
            Err(Error::CapabilityNotSupported { .. })
        ));
    }

    #[tokio::test]
    async fn climate_set_all() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        Mock::given(method("POST"))
            .and(path("/devices/A1/commands"))
            .and(body_json(json!({
                "command": "setAll",
                "parameter": "24,2,3,on",
                "commandType": "command"
            })))
            .respond_with(success(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let remote = session(&server, Duration::from_millis(5))
            .remote("A1")
            .await
            .unwrap();
        let range = TemperatureRange::default();
        let command = ClimateCommand::new(24.0, HvacMode::Cool, FanMode::Medium, &range).unwrap();
        remote.send(&command).await.unwrap();
    }
}

// ============================================================================
// Session facade
// ============================================================================

mod session_facade {
    use super::*;

    #[tokio::test]
    async fn lists_and_classifies_remotes() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        let switchbot = session(&server, Duration::from_millis(5));
        let remotes = switchbot.remotes().await.unwrap();

        let ids: Vec<_> = remotes.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, ["A1", "C1", "O1"]);

        assert_eq!(
            classify(remotes[0].remote_type()),
            Some(DeviceClass::AirConditioner)
        );
        assert_eq!(remotes[0].name(), "Bedroom AC");
        assert_eq!(remotes[0].hub_id(), "H1");
        assert!(remotes[0].as_generic().is_some());

        // Real device type, but not an IR appliance class.
        assert_eq!(classify(remotes[1].remote_type()), None);
        assert!(remotes[1].as_generic().is_some());

        assert_eq!(classify(remotes[2].remote_type()), Some(DeviceClass::Others));
        assert!(remotes[2].is_other());
    }

    #[tokio::test]
    async fn lookup_by_id() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        let switchbot = session(&server, Duration::from_millis(5));

        let curtain = switchbot.remote("C1").await.unwrap();
        assert_eq!(curtain.remote_type(), "Smart Curtain 3.0");

        match switchbot.remote("Z9").await {
            Err(Error::RemoteNotFound(id)) => assert_eq!(id, "Z9"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_lookup_refetches_the_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(success(remote_list()))
            .expect(2)
            .mount(&server)
            .await;

        let switchbot = session(&server, Duration::from_millis(5));
        switchbot.remote("A1").await.unwrap();
        switchbot.remote("A1").await.unwrap();
    }

    #[tokio::test]
    async fn validate_counts_remotes() {
        let server = MockServer::start().await;
        mount_remote_list(&server).await;

        let count = session(&server, Duration::from_millis(5))
            .validate()
            .await
            .unwrap();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn rejected_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Unauthorized"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = session(&server, Duration::from_millis(5)).validate().await;
        match result {
            Err(Error::Protocol(err)) => assert_eq!(err.http_status(), Some(401)),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_remote_list_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(success(json!({"deviceList": []})))
            .mount(&server)
            .await;

        let result = session(&server, Duration::from_millis(5)).remotes().await;
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn empty_remote_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(success(json!({"infraredRemoteList": []})))
            .mount(&server)
            .await;

        let remotes = session(&server, Duration::from_millis(5))
            .remotes()
            .await
            .unwrap();
        assert!(remotes.is_empty());
    }
}
