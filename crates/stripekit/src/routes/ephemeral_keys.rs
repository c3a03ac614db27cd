use http::Method;

use super::route_group;
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::EphemeralKey;
use crate::params::Params;
use crate::request::{insert_header, STRIPE_VERSION};

route_group!(
    /// Creates and revokes ephemeral keys for mobile SDKs.
    EphemeralKeyRoutes
);

/// The object the key grants access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EphemeralKeyParams {
    Customer(String),
    IssuingCard(String),
}

impl EphemeralKeyParams {
    pub fn to_params(&self) -> Params {
        match self {
            EphemeralKeyParams::Customer(id) => Params::new().with("customer", id),
            EphemeralKeyParams::IssuingCard(id) => Params::new().with("issuing_card", id),
        }
    }
}

impl EphemeralKeyRoutes {
    /// Creates a key for `params`.
    ///
    /// The key is bound to the API version the mobile SDK was built against,
    /// so `api_version` replaces the client's pinned `Stripe-Version` for this
    /// call only.
    pub async fn create(
        &self,
        params: &EphemeralKeyParams,
        api_version: &str,
    ) -> Result<EphemeralKey, StripeError> {
        let mut headers = self.headers.clone();
        insert_header(&mut headers, STRIPE_VERSION.as_str(), api_version)?;
        self.client
            .request(
                Method::POST,
                &Endpoint::EphemeralKeys.path(),
                &params.to_params(),
                &headers,
            )
            .await
    }

    /// Invalidates a key before it expires.
    pub async fn delete(&self, id: &str) -> Result<EphemeralKey, StripeError> {
        self.client
            .request(
                Method::DELETE,
                &Endpoint::EphemeralKey(id).path(),
                &Params::new(),
                &self.headers,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_name_the_associated_object() {
        assert_eq!(
            EphemeralKeyParams::Customer("cus_1".to_string())
                .to_params()
                .encode()
                .unwrap(),
            "customer=cus_1"
        );
        assert_eq!(
            EphemeralKeyParams::IssuingCard("ic_1".to_string())
                .to_params()
                .encode()
                .unwrap(),
            "issuing_card=ic_1"
        );
    }
}
