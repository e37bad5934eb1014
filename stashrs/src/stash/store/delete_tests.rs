use super::test_utils::*;
use test_case::test_case;

#[test_case(create_typed_server() ; "typed_backend")]
#[test_case(create_serialized_server() ; "serialized_backend")]
fn delete_should_remove_from_store(server: MockServer) {
    server.storage.set("foo", "bar", 0);
    assert!(server.storage.delete("foo"));
    assert!(server.storage.get("foo").is_none());
}

#[test_case(create_typed_server() ; "typed_backend")]
#[test_case(create_serialized_server() ; "serialized_backend")]
fn delete_of_missing_key_is_not_an_error(server: MockServer) {
    assert!(!server.storage.delete("FAKE_TEST_KEY"));
    assert!(server.storage.get("FAKE_TEST_KEY").is_none());
}

#[test_case(create_typed_server() ; "typed_backend")]
#[test_case(create_serialized_server() ; "serialized_backend")]
fn delete_should_only_remove_given_key(server: MockServer) {
    server.storage.set("foo", "bar", 0);
    server.storage.set("fred", "barney", 0);
    server.storage.delete("foo");
    assert_eq!(server.storage.get("fred").unwrap().value, text("barney"));
    assert_eq!(server.storage.len(), 1);
}

#[test_case(create_typed_server() ; "typed_backend")]
#[test_case(create_serialized_server() ; "serialized_backend")]
fn stale_token_should_not_match_recreated_key(server: MockServer) {
    let status = server.storage.set("foo", "bar", 0);
    server.storage.delete("foo");
    server.storage.set("foo", "baz", 0);
    let result = server.storage.cas("foo", "qux", 0, Some(status.cas));
    assert_eq!(result, Err(CacheError::KeyExists));
}
