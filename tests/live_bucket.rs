//! Runs against a real bucket configured through `S3_*` variables (or `.env`).
//!
//! `cargo test --test live_bucket -- --ignored`

use databucket::{LegacyStorageClient, StorageClient};

#[tokio::test]
#[ignore = "requires S3 credentials and a writable bucket"]
async fn test_live_round_trip() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let client = StorageClient::from_env(None).expect("S3_* variables must be set");
    let dir = tempfile::tempdir().unwrap();
    let prefix = format!("databucket-live/{}/", uuid::Uuid::new_v4());

    let local = dir.path().join("hello.txt");
    std::fs::write(&local, b"hello from databucket").unwrap();

    let key = format!("{}hello.txt", prefix);
    let uploaded = client.upload(&local, Some(key.as_str())).await.unwrap();
    assert_eq!(uploaded.content_type, "text/plain");

    let target = dir.path().join("copy/hello.txt");
    let downloaded = client.download(&key, &target).await.unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), b"hello from databucket");
    assert!(downloaded
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/plain")));

    let folder = client.create_folder(&format!("{}sub", prefix)).await.unwrap();
    let mut keys = client.list(&prefix).await.unwrap();
    keys.sort();
    assert_eq!(keys, vec![key.clone(), folder.clone()]);

    let url = client.presigned_url(&key, 300).await.unwrap();
    assert!(url.contains("X-Amz-Signature="));

    let legacy = LegacyStorageClient::new(client.clone());
    assert!(legacy.delete(&key).await);
    assert!(legacy.delete(&folder).await);
    assert!(legacy.delete(&key).await);
    assert!(legacy.list(&prefix).await.is_empty());
}
