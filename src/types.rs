use serde::Deserialize;

/// Merchant account record (`<merchant-account>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MerchantAccount {
    pub id: String,
    pub status: String,
    pub currency_iso_code: String,
    pub default: bool,
}

/// Transaction record (`<transaction>`)
///
/// Monetary amounts are kept as the gateway's decimal strings; converting
/// them to floats would lose precision.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Transaction {
    pub id: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub currency_iso_code: String,
    pub merchant_account_id: String,
    pub order_id: String,
    pub customer: Option<Customer>,
    pub credit_card: Option<CreditCard>,
}

/// Stored payment method record (`<credit-card>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CreditCard {
    pub token: String,
    pub customer_id: String,
    pub bin: String,
    #[serde(rename = "last-4")]
    pub last_four: String,
    pub card_type: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub cardholder_name: String,
}

/// Customer record (`<customer>`), with its stored payment methods nested
/// under a `<credit-cards>` container
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub credit_cards: Option<CreditCardList>,
}

/// Container element `<credit-cards>` nested inside a customer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreditCardList {
    #[serde(rename = "credit-card")]
    pub credit_cards: Vec<CreditCard>,
}

/// Subscription record (`<subscription>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Subscription {
    pub id: String,
    pub status: String,
    pub plan_id: String,
    pub payment_method_token: String,
    pub price: String,
    pub billing_day_of_month: Option<i32>,
    pub number_of_billing_cycles: Option<i32>,
    pub add_ons: Option<AddOnList>,
    pub discounts: Option<DiscountList>,
}

/// Settlement batch summary (`<settlement-batch-summary>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SettlementBatchSummary {
    pub records: SettlementRecordList,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SettlementRecordList {
    #[serde(rename = "record")]
    pub records: Vec<SettlementRecord>,
}

/// One card-type row of a settlement batch summary
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SettlementRecord {
    pub card_type: String,
    pub merchant_account_id: String,
    pub count: Option<i64>,
    pub amount_settled: String,
}

/// Address record (`<address>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Address {
    pub id: String,
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub extended_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country_code_alpha2: String,
}

/// Subscription add-on record (`<add-on>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: String,
    pub quantity: Option<i32>,
    pub number_of_billing_cycles: Option<i32>,
    pub never_expires: Option<bool>,
}

/// Container element `<add-ons>` returned by the add-on list endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddOnList {
    #[serde(rename = "add-on")]
    pub add_ons: Vec<AddOn>,
}

/// Subscription discount record (`<discount>`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Discount {
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: String,
    pub quantity: Option<i32>,
    pub number_of_billing_cycles: Option<i32>,
    pub never_expires: Option<bool>,
}

/// Container element `<discounts>` returned by the discount list endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscountList {
    #[serde(rename = "discount")]
    pub discounts: Vec<Discount>,
}

/// Structured error payload (`<api-error-response>`); the classifier
/// treats it as present only when the message is non-empty
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiErrorResponse {
    pub message: String,
}
