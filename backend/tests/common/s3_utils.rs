use aws_sdk_s3::Client as S3Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};

/// Upload data to S3 using presigned URL
pub async fn upload_to_s3(
    presigned_url: &str,
    data: &[u8],
    content_type: &str,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from(data.len()));
    headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());

    let client = reqwest::Client::new();
    client
        .put(presigned_url)
        .headers(headers)
        .body(data.to_vec())
        .send()
        .await
}

/// Download data from a presigned view URL using HTTP
pub async fn download_from_url(url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    if response.status().is_success() {
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    } else {
        Err(format!("Failed to download from {}: HTTP {}", url, response.status()).into())
    }
}

/// Fetch the stored content type of an object directly from S3
pub async fn object_content_type(
    s3_client: &S3Client,
    bucket_name: &str,
    key: &str,
) -> Option<String> {
    s3_client
        .head_object()
        .bucket(bucket_name)
        .key(key)
        .send()
        .await
        .ok()
        .and_then(|output| output.content_type().map(ToString::to_string))
}

/// Creates a bucket with a unique name for a single test
pub async fn create_test_bucket(s3_client: &S3Client) -> String {
    let bucket_name = format!("test-images-{}", uuid::Uuid::new_v4());

    s3_client
        .create_bucket()
        .bucket(&bucket_name)
        .send()
        .await
        .expect("Failed to create test bucket");

    bucket_name
}
