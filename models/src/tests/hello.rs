// Unit tests for the HelloMessage payload shape

use crate::HelloMessage;

#[test]
fn given_server_payload_when_deserializing_then_extracts_message() {
    let payload: HelloMessage = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();

    assert_eq!(payload, HelloMessage::new("hello"));
}

#[test]
fn given_hello_message_when_serializing_then_produces_message_field() {
    let json = serde_json::to_value(HelloMessage::new("Hello from imagegen")).unwrap();

    assert_eq!(json["message"], "Hello from imagegen");
}
