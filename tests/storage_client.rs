use std::sync::Arc;

use databucket::{ErrorKind, MemoryBackend, StorageClient, StorageConfig};
use fake::faker::lorem::en::Word;
use fake::{Fake, Faker};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup() -> (StorageClient, Arc<MemoryBackend>, TempDir) {
    init_tracing();
    let backend = Arc::new(MemoryBackend::new("integration-bucket"));
    let client = StorageClient::with_backend(backend.clone());
    let dir = tempfile::tempdir().expect("tempdir");
    (client, backend, dir)
}

#[tokio::test]
async fn test_report_pdf_scenario() {
    let (client, backend, dir) = setup();
    let local = dir.path().join("report.pdf");
    std::fs::write(&local, b"%PDF-1.7 fake report").unwrap();

    let uploaded = client.upload(&local, None).await.unwrap();
    assert_eq!(uploaded.key, "report.pdf");
    assert_eq!(uploaded.content_type, "application/pdf");

    let stored = backend.object("report.pdf").unwrap();
    assert_eq!(stored.content_type.as_deref(), Some("application/pdf"));

    assert_eq!(client.list("report").await.unwrap(), vec!["report.pdf"]);

    client.delete("report.pdf").await.unwrap();
    assert!(client.list("report").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_download_round_trip() {
    let (client, _backend, dir) = setup();
    let data: Vec<u8> = Faker.fake();
    let name: String = Word().fake();
    let local = dir.path().join(format!("{}.json", name));
    std::fs::write(&local, &data).unwrap();

    let key = format!("uploads/{}.json", name);
    let uploaded = client.upload(&local, Some(key.as_str())).await.unwrap();
    assert_eq!(uploaded.key, key);
    assert_eq!(uploaded.size, data.len() as u64);

    let target = dir.path().join("nested/deeper/copy.json");
    let downloaded = client.download(&key, &target).await.unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), data);
    assert_eq!(downloaded.path, target);
    assert_eq!(downloaded.content_type.as_deref(), Some("application/json"));
    assert_eq!(downloaded.content_type.as_deref(), Some(uploaded.content_type.as_str()));
}

#[tokio::test]
async fn test_upload_unknown_extension_is_binary() {
    let (client, _backend, dir) = setup();
    let local = dir.path().join("dump.zzzunknown");
    std::fs::write(&local, [0u8, 1, 2, 3]).unwrap();

    let uploaded = client.upload(&local, None).await.unwrap();
    assert_eq!(uploaded.content_type, "application/octet-stream");
}

#[tokio::test]
async fn test_download_overwrites_existing_file() {
    let (client, backend, dir) = setup();
    backend_put(&backend, "notes.txt", b"fresh").await;

    let target = dir.path().join("notes.txt");
    std::fs::write(&target, b"stale contents that are longer").unwrap();

    client.download("notes.txt", &target).await.unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), b"fresh");
}

#[tokio::test]
async fn test_download_missing_key_is_not_found() {
    let (client, _backend, dir) = setup();
    let err = client
        .download("missing.bin", dir.path().join("missing.bin"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_upload_missing_local_file_fails_loudly() {
    let (client, backend, dir) = setup();
    let err = client
        .upload(dir.path().join("ghost.pdf"), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LocalFileNotFound);
    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_list_matches_prefix_exactly() {
    let (client, backend, _dir) = setup();
    for key in ["img/a.png", "img/b.png", "imgx.png", "docs/a.pdf", "readme.md"] {
        backend_put(&backend, key, b"").await;
    }

    assert_eq!(
        client.list("img/").await.unwrap(),
        vec!["img/a.png", "img/b.png"]
    );
    assert_eq!(
        client.list("img").await.unwrap(),
        vec!["img/a.png", "img/b.png", "imgx.png"]
    );
    assert_eq!(client.list("").await.unwrap().len(), 5);
    assert!(client.list("nothing-here").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_all_crosses_page_boundary() {
    init_tracing();
    let backend = Arc::new(MemoryBackend::new("paged").with_page_size(1000));
    let client = StorageClient::with_backend(backend.clone());
    for i in 0..1005 {
        backend_put(&backend, &format!("data/{:05}", i), b"").await;
    }

    let first_page = client.list("data/").await.unwrap();
    assert_eq!(first_page.len(), 1000);

    let all = client.list_all("data/").await.unwrap();
    assert_eq!(all.len(), 1005);
    assert_eq!(all.last().map(String::as_str), Some("data/01004"));
}

#[tokio::test]
async fn test_delete_nonexistent_key_succeeds() {
    let (client, _backend, _dir) = setup();
    client.delete("never/uploaded.txt").await.unwrap();
}

#[tokio::test]
async fn test_create_folder_writes_empty_marker() {
    let (client, backend, _dir) = setup();

    let key = client.create_folder("a/b").await.unwrap();
    assert_eq!(key, "a/b/");

    let marker = backend.object("a/b/").unwrap();
    assert_eq!(marker.data.len(), 0);
    assert_eq!(client.list("a/").await.unwrap(), vec!["a/b/"]);
}

#[test]
fn test_construction_requires_both_credentials() {
    for (access, secret) in [("", "secret"), ("AKIA123", ""), ("", "")] {
        for bucket in ["reports", ""] {
            let err = StorageClient::new(StorageConfig::new(access, secret, bucket))
                .err()
                .expect("construction should fail");
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }
}

async fn backend_put(backend: &MemoryBackend, key: &str, data: &[u8]) {
    use databucket::ObjectBackend;
    backend
        .put_object(key, data, "application/octet-stream")
        .await
        .unwrap();
}
