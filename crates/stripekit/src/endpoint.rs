//! Paths of every supported operation.

use std::fmt;

/// One remote operation, identified by its path template and the ids
/// interpolated into it. Ids are inserted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    InvoiceItems,
    InvoiceItem(&'a str),

    Invoices,
    Invoice(&'a str),
    InvoiceFinalize(&'a str),
    InvoicePay(&'a str),
    InvoiceSend(&'a str),
    InvoiceVoid(&'a str),
    InvoiceMarkUncollectible(&'a str),
    InvoiceLines(&'a str),
    UpcomingInvoice,

    PaymentIntents,
    PaymentIntent(&'a str),
    PaymentIntentConfirm(&'a str),
    PaymentIntentCapture(&'a str),
    PaymentIntentCancel(&'a str),

    Sources,
    Source(&'a str),
    CustomerSources(&'a str),
    CustomerSource { customer: &'a str, source: &'a str },

    CustomerDiscount(&'a str),
    SubscriptionDiscount(&'a str),

    EphemeralKeys,
    EphemeralKey(&'a str),
}

const API_PREFIX: &str = "/v1";

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::InvoiceItems => format!("{API_PREFIX}/invoiceitems"),
            Endpoint::InvoiceItem(id) => format!("{API_PREFIX}/invoiceitems/{id}"),

            Endpoint::Invoices => format!("{API_PREFIX}/invoices"),
            Endpoint::Invoice(id) => format!("{API_PREFIX}/invoices/{id}"),
            Endpoint::InvoiceFinalize(id) => format!("{API_PREFIX}/invoices/{id}/finalize"),
            Endpoint::InvoicePay(id) => format!("{API_PREFIX}/invoices/{id}/pay"),
            Endpoint::InvoiceSend(id) => format!("{API_PREFIX}/invoices/{id}/send"),
            Endpoint::InvoiceVoid(id) => format!("{API_PREFIX}/invoices/{id}/void"),
            Endpoint::InvoiceMarkUncollectible(id) => {
                format!("{API_PREFIX}/invoices/{id}/mark_uncollectible")
            }
            Endpoint::InvoiceLines(id) => format!("{API_PREFIX}/invoices/{id}/lines"),
            Endpoint::UpcomingInvoice => format!("{API_PREFIX}/invoices/upcoming"),

            Endpoint::PaymentIntents => format!("{API_PREFIX}/payment_intents"),
            Endpoint::PaymentIntent(id) => format!("{API_PREFIX}/payment_intents/{id}"),
            Endpoint::PaymentIntentConfirm(id) => {
                format!("{API_PREFIX}/payment_intents/{id}/confirm")
            }
            Endpoint::PaymentIntentCapture(id) => {
                format!("{API_PREFIX}/payment_intents/{id}/capture")
            }
            Endpoint::PaymentIntentCancel(id) => {
                format!("{API_PREFIX}/payment_intents/{id}/cancel")
            }

            Endpoint::Sources => format!("{API_PREFIX}/sources"),
            Endpoint::Source(id) => format!("{API_PREFIX}/sources/{id}"),
            Endpoint::CustomerSources(customer) => {
                format!("{API_PREFIX}/customers/{customer}/sources")
            }
            Endpoint::CustomerSource { customer, source } => {
                format!("{API_PREFIX}/customers/{customer}/sources/{source}")
            }

            Endpoint::CustomerDiscount(customer) => {
                format!("{API_PREFIX}/customers/{customer}/discount")
            }
            Endpoint::SubscriptionDiscount(subscription) => {
                format!("{API_PREFIX}/subscriptions/{subscription}/discount")
            }

            Endpoint::EphemeralKeys => format!("{API_PREFIX}/ephemeral_keys"),
            Endpoint::EphemeralKey(id) => format!("{API_PREFIX}/ephemeral_keys/{id}"),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_and_item_paths() {
        assert_eq!(Endpoint::InvoiceItems.path(), "/v1/invoiceitems");
        assert_eq!(Endpoint::InvoiceItem("ii_123").path(), "/v1/invoiceitems/ii_123");
        assert_eq!(Endpoint::UpcomingInvoice.path(), "/v1/invoices/upcoming");
    }

    #[test]
    fn action_paths_append_the_action() {
        assert_eq!(
            Endpoint::InvoiceMarkUncollectible("in_1").path(),
            "/v1/invoices/in_1/mark_uncollectible"
        );
        assert_eq!(
            Endpoint::PaymentIntentCapture("pi_1").path(),
            "/v1/payment_intents/pi_1/capture"
        );
    }

    #[test]
    fn nested_paths_interpolate_every_id() {
        let endpoint = Endpoint::CustomerSource {
            customer: "cus_1",
            source: "src_1",
        };
        assert_eq!(endpoint.to_string(), "/v1/customers/cus_1/sources/src_1");
        assert_eq!(
            Endpoint::SubscriptionDiscount("sub_1").path(),
            "/v1/subscriptions/sub_1/discount"
        );
    }
}
