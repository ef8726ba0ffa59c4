use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use catalog_storage::catalog::CatalogAttribute;
use uuid::Uuid;

/// Helper for creating and managing the catalog table in tests
pub struct DynamoDbTestSetup {
    client: Arc<DynamoDbClient>,
    pub catalog_table_name: String,
}

impl DynamoDbTestSetup {
    pub async fn new(client: Arc<DynamoDbClient>) -> Self {
        let catalog_table_name = Self::create_catalog_table(&client).await;

        Self {
            client,
            catalog_table_name,
        }
    }

    /// Creates a test catalog table with a unique name
    async fn create_catalog_table(client: &DynamoDbClient) -> String {
        let table_name = format!("test-image-catalog-{}", Uuid::new_v4());

        client
            .create_table()
            .table_name(&table_name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(CatalogAttribute::S3Key.to_string())
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(CatalogAttribute::S3Key.to_string())
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .expect("Failed to create test table");

        // Wait for table to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        table_name
    }

    /// Writes a catalog row the way the tagging pipeline does (labels as a string set)
    pub async fn put_entry(&self, s3_key: &str, labels: Option<&[&str]>) {
        let mut item = HashMap::new();
        item.insert(
            CatalogAttribute::S3Key.to_string(),
            AttributeValue::S(s3_key.to_string()),
        );
        if let Some(labels) = labels {
            item.insert(
                CatalogAttribute::Labels.to_string(),
                AttributeValue::Ss(labels.iter().map(ToString::to_string).collect()),
            );
        }

        self.client
            .put_item()
            .table_name(&self.catalog_table_name)
            .set_item(Some(item))
            .send()
            .await
            .expect("Failed to put catalog entry");
    }
}

impl Drop for DynamoDbTestSetup {
    fn drop(&mut self) {
        let client = self.client.clone();
        let catalog_table_name = self.catalog_table_name.clone();

        // Use tokio runtime to delete table
        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client
                    .delete_table()
                    .table_name(&catalog_table_name)
                    .send()
                    .await;
            });
        }
    }
}
