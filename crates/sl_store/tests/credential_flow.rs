use sl_crypto::kdf::{KdfParams, DERIVED_KEY_LEN, SALT_LEN};
use sl_store::{
    CredentialRegistry, CredentialStore, LoginFailure, LoginOutcome, MemoryRegistry, StoreError,
};

// Cheap cost factors — production scrypt takes seconds per call in debug
// builds.
fn test_store() -> CredentialStore<MemoryRegistry> {
    CredentialStore::with_params(
        MemoryRegistry::new(),
        KdfParams {
            log_n: 6,
            r: 8,
            p: 1,
        },
    )
}

#[test]
fn signup_login_scenario() {
    let store = test_store();

    let record = store.signup("john@doe.com", "LePassword").unwrap();

    // salt_hex:key_hex — 32 hex chars, one delimiter, 128 hex chars.
    let (salt_hex, key_hex) = record.encoded.split_once(':').unwrap();
    assert_eq!(salt_hex.len(), SALT_LEN * 2);
    assert_eq!(key_hex.len(), DERIVED_KEY_LEN * 2);
    assert_eq!(record.encoded.matches(':').count(), 1);
    assert!(record
        .encoded
        .chars()
        .all(|c| c == ':' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    assert_eq!(
        store.login("john@doe.com", "notLePassword").unwrap(),
        LoginOutcome::Failure(LoginFailure::Mismatch)
    );
    assert_eq!(
        store.login("john@doe.com", "LePassword").unwrap(),
        LoginOutcome::Success
    );
    assert_eq!(
        store.login("jane@doe.com", "anything").unwrap(),
        LoginOutcome::Failure(LoginFailure::UnknownIdentity)
    );
}

#[test]
fn stored_key_is_not_the_plaintext() {
    let store = test_store();
    let record = store.signup("john@doe.com", "LePassword").unwrap();
    assert!(!record.encoded.contains("LePassword"));
    assert!(!record.encoded.contains(&hex::encode("LePassword")));
}

#[test]
fn same_password_gets_distinct_salts() {
    let store = test_store();
    let a = store.signup("john@doe.com", "LePassword").unwrap();
    let b = store.signup("jane@doe.com", "LePassword").unwrap();

    assert_ne!(a.encoded, b.encoded);
    let (salt_a, _) = a.encoded.split_once(':').unwrap();
    let (salt_b, _) = b.encoded.split_once(':').unwrap();
    assert_ne!(salt_a, salt_b);
}

#[test]
fn change_secret_rotates_salt_and_key() {
    let store = test_store();
    let before = store.signup("john@doe.com", "LePassword").unwrap();

    let after = store
        .change_secret("john@doe.com", "LePassword", "NewPassword")
        .unwrap();
    assert_ne!(before.encoded, after.encoded);
    let (salt_before, _) = before.encoded.split_once(':').unwrap();
    let (salt_after, _) = after.encoded.split_once(':').unwrap();
    assert_ne!(salt_before, salt_after);

    assert_eq!(
        store.login("john@doe.com", "LePassword").unwrap(),
        LoginOutcome::Failure(LoginFailure::Mismatch)
    );
    assert_eq!(
        store.login("john@doe.com", "NewPassword").unwrap(),
        LoginOutcome::Success
    );
}

#[test]
fn change_secret_requires_the_current_secret() {
    let store = test_store();
    let record = store.signup("john@doe.com", "LePassword").unwrap();

    let err = store
        .change_secret("john@doe.com", "wrong", "NewPassword")
        .unwrap_err();
    assert!(matches!(err, StoreError::IncorrectSecret));

    // Record untouched; old secret still logs in.
    assert_eq!(
        store.registry().get("john@doe.com").unwrap().encoded,
        record.encoded
    );
    assert_eq!(
        store.login("john@doe.com", "LePassword").unwrap(),
        LoginOutcome::Success
    );
}

#[test]
fn change_secret_for_unknown_identity_fails() {
    let store = test_store();
    let err = store
        .change_secret("jane@doe.com", "a", "b")
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownIdentity(_)));
}

#[test]
fn record_serializes_for_an_application_layer() {
    let store = test_store();
    let record = store.signup("john@doe.com", "LePassword").unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: sl_store::CredentialRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
