use folio_storage::{KeyStore, StorageError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Draft {
    subject: String,
    attempts: u32,
}

#[test]
fn typed_values_round_trip() {
    let store = KeyStore::local("round-trip");
    let draft = Draft { subject: "Hello".to_owned(), attempts: 2 };

    store.set("draft", &draft).expect("write");
    let loaded: Option<Draft> = store.get("draft").expect("read");
    assert_eq!(loaded, Some(draft));

    store.remove("draft").expect("remove");
    let gone: Option<Draft> = store.get("draft").expect("read after remove");
    assert_eq!(gone, None);
}

#[test]
fn missing_keys_read_as_none() {
    let store = KeyStore::local("missing");
    let value: Option<String> = store.get("never-written").expect("read");
    assert_eq!(value, None);
}

#[test]
fn values_survive_a_new_handle() {
    // A fresh KeyStore stands in for a page reload; values must still be there.
    KeyStore::local("reload").set("theme", &"dark").expect("write");

    let reloaded = KeyStore::local("reload");
    let theme: Option<String> = reloaded.get("theme").expect("read");
    assert_eq!(theme.as_deref(), Some("dark"));
}

#[test]
fn prefixes_isolate_stores() {
    let header = KeyStore::local("header");
    let modal = KeyStore::local("modal");

    header.set("open", &true).expect("write header");
    modal.set("open", &false).expect("write modal");

    assert_eq!(header.get::<bool>("open").expect("read header"), Some(true));
    assert_eq!(modal.get::<bool>("open").expect("read modal"), Some(false));
}

#[test]
fn areas_are_isolated() {
    let local = KeyStore::local("area");
    let session = KeyStore::session("area");

    local.set("marker", &"local").expect("write local");
    assert_eq!(session.get::<String>("marker").expect("read session"), None);
}

#[test]
fn type_mismatch_surfaces_deserialize_error() {
    let store = KeyStore::local("mismatch");
    store.set("value", &"not-a-number").expect("write");

    let err = store.get::<u32>("value").expect_err("string cannot read as u32");
    assert!(matches!(err, StorageError::Deserialize(_)));
}
