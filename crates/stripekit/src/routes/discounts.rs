use http::Method;

use super::route_group;
use crate::endpoint::Endpoint;
use crate::error::StripeError;
use crate::models::DeletedObject;
use crate::params::Params;

route_group!(
    /// Removes discounts from customers and subscriptions.
    DiscountRoutes
);

impl DiscountRoutes {
    pub async fn delete_customer_discount(&self, customer: &str) -> Result<DeletedObject, StripeError> {
        self.delete(&Endpoint::CustomerDiscount(customer)).await
    }

    pub async fn delete_subscription_discount(
        &self,
        subscription: &str,
    ) -> Result<DeletedObject, StripeError> {
        self.delete(&Endpoint::SubscriptionDiscount(subscription)).await
    }

    async fn delete(&self, endpoint: &Endpoint<'_>) -> Result<DeletedObject, StripeError> {
        self.client
            .request(Method::DELETE, &endpoint.path(), &Params::new(), &self.headers)
            .await
    }
}
