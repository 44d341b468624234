//! Composite DBFS operations that sequence more than one API call.

use std::path::Path;

use anyhow::{bail, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;
use tracing::{debug, error, info};

use crate::databricks::client::ApiClient;
use crate::types::HttpMethod;

/// Upload chunk size for the streaming handle API.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Upload in-memory content to a DBFS path in one shot (base64 body).
pub async fn put_file(
    client: &ApiClient,
    dbfs_path: &str,
    content: &[u8],
    overwrite: bool,
) -> Result<Value> {
    info!("Uploading file to DBFS path: {dbfs_path}");
    let body = json!({
        "path": dbfs_path,
        "contents": STANDARD.encode(content),
        "overwrite": overwrite,
    });
    Ok(client
        .request(HttpMethod::Post, "/api/2.0/dbfs/put", Some(&body), None)
        .await?)
}

/// Import a local file to DBFS via the single-shot put endpoint.
pub async fn import_file(
    client: &ApiClient,
    source_path: &Path,
    target_path: &str,
    overwrite: bool,
) -> Result<Value> {
    if !source_path.exists() {
        bail!("Local file not found: {}", source_path.display());
    }
    let content = tokio::fs::read(source_path).await?;
    put_file(client, target_path, &content, overwrite).await
}

/// Upload a large local file to DBFS through the streaming handle API:
/// create a handle, append base64 blocks of `chunk_size` bytes, close.
///
/// On any failure after the handle is opened, exactly one best-effort
/// close call is issued to release the server-side handle, and the
/// original error is propagated. Partial uploads are never resumed.
pub async fn upload_large_file(
    client: &ApiClient,
    dbfs_path: &str,
    local_path: &Path,
    overwrite: bool,
    chunk_size: usize,
) -> Result<Value> {
    info!(
        "Uploading large file from {} to DBFS path: {dbfs_path}",
        local_path.display()
    );
    if !local_path.exists() {
        bail!("Local file not found: {}", local_path.display());
    }

    let create = client
        .request(
            HttpMethod::Post,
            "/api/2.0/dbfs/create",
            Some(&json!({"path": dbfs_path, "overwrite": overwrite})),
            None,
        )
        .await?;
    let handle = create.get("handle").cloned().unwrap_or(Value::Null);

    match stream_blocks(client, &handle, local_path, chunk_size).await {
        Ok(result) => Ok(result),
        Err(err) => {
            // Release the server-side handle; the upload itself is not retried.
            let _ = client
                .request(
                    HttpMethod::Post,
                    "/api/2.0/dbfs/close",
                    Some(&json!({"handle": handle})),
                    None,
                )
                .await;
            error!("Error uploading file: {err}");
            Err(err)
        }
    }
}

async fn stream_blocks(
    client: &ApiClient,
    handle: &Value,
    local_path: &Path,
    chunk_size: usize,
) -> Result<Value> {
    let mut file = tokio::fs::File::open(local_path).await?;
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut chunk_index = 0u64;

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        let body = json!({
            "handle": handle,
            "data": STANDARD.encode(&buffer[..read]),
        });
        client
            .request(HttpMethod::Post, "/api/2.0/dbfs/add-block", Some(&body), None)
            .await?;
        chunk_index += 1;
        debug!("Uploaded chunk {chunk_index}");
    }

    Ok(client
        .request(
            HttpMethod::Post,
            "/api/2.0/dbfs/close",
            Some(&json!({"handle": handle})),
            None,
        )
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::DatabricksConfig;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&DatabricksConfig {
            host: server.uri(),
            token: "test-token".into(),
            ..Default::default()
        })
        .unwrap()
    }

    fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[tokio::test]
    async fn chunked_upload_appends_blocks_then_closes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": 7})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/add-block"))
            .and(body_partial_json(json!({"handle": 7})))
            .respond_with(ResponseTemplate::new(200))
            .expect(3)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/close"))
            .and(body_partial_json(json!({"handle": 7})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let file = temp_file(&[1u8; 10]);
        let client = client_for(&server);
        upload_large_file(&client, "/target", file.path(), true, 4)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failed_add_block_closes_handle_once_and_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"handle": 9})))
            .expect(1)
            .mount(&server)
            .await;
        // First block lands, second one dies.
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/add-block"))
            .respond_with(ResponseTemplate::new(200))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/add-block"))
            .respond_with(ResponseTemplate::new(500).set_body_string("storage unavailable"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/close"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let file = temp_file(&[2u8; 8]);
        let client = client_for(&server);
        let err = upload_large_file(&client, "/target", file.path(), true, 4)
            .await
            .unwrap_err();
        let api_err = err
            .downcast_ref::<crate::databricks::error::ApiError>()
            .unwrap();
        assert_eq!(api_err.status_code, Some(500));
    }

    #[tokio::test]
    async fn missing_local_file_fails_before_any_call() {
        let server = MockServer::start().await;
        // No mocks mounted: any request would 404 the mock server's
        // verification, and expect(0) below makes the intent explicit.
        Mock::given(method("POST"))
            .and(path("/api/2.0/dbfs/create"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = upload_large_file(
            &client,
            "/target",
            Path::new("/definitely/not/here"),
            true,
            DEFAULT_CHUNK_SIZE,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Local file not found"));
    }
}
