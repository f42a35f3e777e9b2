//! Unit tests for the search query builder and its XML serialization

use chrono::{FixedOffset, TimeZone, Utc};
use paygate::SearchQuery;

// =============================================================================
// BUILDER SERIALIZATION TESTS
// =============================================================================

#[test]
fn empty_query_serializes_to_bare_search_element() {
    let query = SearchQuery::new();
    assert_eq!(query.to_xml().unwrap(), "<search></search>");
}

#[test]
fn text_field_emits_only_the_predicates_that_were_set() {
    let mut query = SearchQuery::new();
    query.add_text_field("email").contains("example.com");

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><email><contains>example.com</contains></email></search>"
    );
}

#[test]
fn text_field_predicates_chain_in_place() {
    let mut query = SearchQuery::new();
    query
        .add_text_field("customer-id")
        .is("cust_1")
        .is_not("cust_2")
        .starts_with("cust")
        .ends_with("_1");

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><customer-id>\
         <is>cust_1</is>\
         <is-not>cust_2</is-not>\
         <starts-with>cust</starts-with>\
         <ends-with>_1</ends-with>\
         </customer-id></search>"
    );
}

#[test]
fn range_field_distinguishes_unset_from_zero() {
    let mut query = SearchQuery::new();
    query.add_range_field("amount").min(0.0);

    // no <is> and no <max>: unset bounds stay absent, zero is emitted
    assert_eq!(
        query.to_xml().unwrap(),
        "<search><amount><min>0</min></amount></search>"
    );
}

#[test]
fn range_field_allows_semantically_odd_combinations() {
    // both is and min set: the gateway, not the builder, judges validity
    let mut query = SearchQuery::new();
    query.add_range_field("amount").is(10.0).min(5.5);

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><amount><is>10</is><min>5.5</min></amount></search>"
    );
}

#[test]
fn multi_field_emits_typed_item_array() {
    let mut query = SearchQuery::new();
    query
        .add_multi_field("status")
        .add_item("authorized")
        .add_item("settled");

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><status type=\"array\">\
         <item>authorized</item><item>settled</item>\
         </status></search>"
    );
}

#[test]
fn fields_serialize_in_insertion_order() {
    let mut query = SearchQuery::new();
    query.add_text_field("email").contains("b");
    query.add_range_field("amount").max(9.0);
    query.add_multi_field("ids").add_item("x");

    let xml = query.to_xml().unwrap();
    let email = xml.find("<email>").unwrap();
    let amount = xml.find("<amount>").unwrap();
    let ids = xml.find("<ids ").unwrap();
    assert!(email < amount && amount < ids);
}

#[test]
fn text_values_are_xml_escaped() {
    let mut query = SearchQuery::new();
    query.add_text_field("company").is("Smith & Sons <Ltd>");

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><company><is>Smith &amp; Sons &lt;Ltd&gt;</is></company></search>"
    );
}

// =============================================================================
// TIMESTAMP FORMAT TESTS
// =============================================================================

#[test]
fn time_range_formats_offset_timestamps_without_colon() {
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let at = tz.with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();

    let mut query = SearchQuery::new();
    query
        .add_time_range_field("created-at")
        .set_min(&at)
        .set_max(&at);

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><created-at>\
         <min>2021-03-05T10:00:00-0500</min>\
         <max>2021-03-05T10:00:00-0500</max>\
         </created-at></search>"
    );
}

#[test]
fn time_range_accepts_utc_timestamps() {
    let at = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();

    let mut query = SearchQuery::new();
    query.add_time_range_field("settled-at").set_is(&at);

    assert_eq!(
        query.to_xml().unwrap(),
        "<search><settled-at><is>2021-12-31T23:59:59+0000</is></settled-at></search>"
    );
}
