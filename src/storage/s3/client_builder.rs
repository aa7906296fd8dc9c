//! R2 client construction.
//!
//! Builds an `aws_sdk_s3::Client` bound to the account's R2 endpoint.
//! R2 speaks the S3 wire protocol with a fixed `"auto"` region token and
//! an account-scoped endpoint URL.

use aws_config::Region;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;

use crate::config::ClientConfig;

const R2_ENDPOINT_DOMAIN: &str = "r2.cloudflarestorage.com";
const R2_REGION: &str = "auto";
const CREDENTIALS_PROVIDER_NAME: &str = "r2sweep";

impl ClientConfig {
    /// Endpoint URL of the form `https://{account_id}.r2.cloudflarestorage.com`.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.{}", self.account_id, R2_ENDPOINT_DOMAIN)
    }

    /// Build an S3 client bound to this account's R2 endpoint.
    pub async fn create_client(&self) -> Client {
        let credentials = Credentials::new(
            &self.access_keys.access_key,
            &self.access_keys.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut builder = S3ConfigBuilder::new()
            .credentials_provider(credentials)
            .region(Region::new(R2_REGION))
            .endpoint_url(self.endpoint_url());

        if self.force_path_style {
            builder = builder.force_path_style(true);
        }

        Client::from_conf(builder.build())
    }
}
