use http::Method;
use std::collections::HashMap;

use super::{route_group, wire_name};
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::{Source, SourceFlow, SourceType, SourceUsage};
use crate::params::Params;

route_group!(
    /// Operations on `/v1/sources` and on the sources attached to a customer.
    SourceRoutes
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOwnerParams {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// `line1`, `city`, `postal_code`, `country` and so on.
    pub address: HashMap<String, String>,
}

impl SourceOwnerParams {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("email", self.email.clone())
            .with("name", self.name.clone())
            .with("phone", self.phone.clone())
            .with("address", self.address.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCreateParams {
    pub source_type: Option<SourceType>,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub customer: Option<String>,
    pub flow: Option<SourceFlow>,
    pub metadata: HashMap<String, String>,
    /// Source to share with a connected account.
    pub original_source: Option<String>,
    pub owner: Option<SourceOwnerParams>,
    /// Where the customer returns to after a redirect flow.
    pub redirect_return_url: Option<String>,
    pub statement_descriptor: Option<String>,
    pub token: Option<String>,
    pub usage: Option<SourceUsage>,
    /// Type-specific blocks such as `card` or `sepa_debit`.
    pub extra: Params,
}

impl SourceCreateParams {
    pub fn to_params(&self) -> Params {
        let redirect = self
            .redirect_return_url
            .as_ref()
            .map(|url| Params::new().with("return_url", url));
        let mut params = Params::new()
            .with("type", wire_name(self.source_type))
            .with("amount", self.amount)
            .with("currency", self.currency.clone())
            .with("customer", self.customer.clone())
            .with("flow", wire_name(self.flow))
            .with("metadata", self.metadata.clone())
            .with("original_source", self.original_source.clone())
            .with("owner", self.owner.as_ref().map(SourceOwnerParams::to_params))
            .with("redirect", redirect)
            .with("statement_descriptor", self.statement_descriptor.clone())
            .with("token", self.token.clone())
            .with("usage", wire_name(self.usage));
        params.merge(&self.extra);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceUpdateParams {
    pub amount: Option<i64>,
    pub metadata: HashMap<String, String>,
    pub owner: Option<SourceOwnerParams>,
    pub extra: Params,
}

impl SourceUpdateParams {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("metadata", self.metadata.clone())
            .with("owner", self.owner.as_ref().map(SourceOwnerParams::to_params));
        params.merge(&self.extra);
        params
    }
}

impl SourceRoutes {
    pub async fn create(&self, params: &SourceCreateParams) -> Result<Source, StripeError> {
        self.client
            .request(Method::POST, &Endpoint::Sources.path(), &params.to_params(), &self.headers)
            .await
    }

    /// `client_secret` is required when retrieving with a publishable key.
    pub async fn retrieve(&self, id: &str, client_secret: Option<&str>) -> Result<Source, StripeError> {
        let params = Params::new().with("client_secret", client_secret);
        self.client
            .request(Method::GET, &Endpoint::Source(id).path(), &params, &self.headers)
            .await
    }

    pub async fn update(&self, id: &str, params: &SourceUpdateParams) -> Result<Source, StripeError> {
        self.client
            .request(Method::POST, &Endpoint::Source(id).path(), &params.to_params(), &self.headers)
            .await
    }

    /// Attaches a chargeable source to a customer.
    pub async fn attach(&self, customer: &str, source: &str) -> Result<Source, StripeError> {
        let params = Params::new().with("source", source);
        self.client
            .request(
                Method::POST,
                &Endpoint::CustomerSources(customer).path(),
                &params,
                &self.headers,
            )
            .await
    }

    /// Detaches a source; the returned source has status `consumed`.
    pub async fn detach(&self, customer: &str, source: &str) -> Result<Source, StripeError> {
        self.client
            .request(
                Method::DELETE,
                &Endpoint::CustomerSource { customer, source }.path(),
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
    fn create_params_nest_owner_and_redirect() {
        let params = SourceCreateParams {
            source_type: Some(SourceType::Ideal),
            amount: Some(1099),
            currency: Some("eur".to_string()),
            owner: Some(SourceOwnerParams {
                name: Some("Jenny Rosen".to_string()),
                ..Default::default()
            }),
            redirect_return_url: Some("https://shop.example/return".to_string()),
            ..Default::default()
        };
        let pairs = params.to_params().to_pairs();
        assert!(pairs.contains(&("type".to_string(), "ideal".to_string())));
        assert!(pairs.contains(&("owner[name]".to_string(), "Jenny Rosen".to_string())));
        assert!(pairs.contains(&(
            "redirect[return_url]".to_string(),
            "https://shop.example/return".to_string()
        )));
        assert_eq!(pairs.len(), 5);
    }

    #[test]
    fn three_d_secure_type_name_matches_wire() {
        let params = SourceCreateParams {
            source_type: Some(SourceType::ThreeDSecure),
            ..Default::default()
        };
        assert_eq!(params.to_params().encode().unwrap(), "type=three_d_secure");
    }
}
