//! Tests for GetProducts query construction

#[cfg(test)]
mod tests {
    use aws_sdk_pricing::types::FilterType;

    use crate::pricing::{ProductPage, ProductQuery, FORMAT_VERSION, SERVICE_CODE};

    #[test]
    fn query_constants_are_pinned() {
        assert_eq!(SERVICE_CODE, "AmazonEC2");
        assert_eq!(FORMAT_VERSION, "aws_v1");
    }

    #[test]
    fn filter_set_is_pinned_regardless_of_input() {
        let filters = ProductQuery::filters();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].field(), "ServiceCode");
        assert_eq!(filters[0].value(), "AmazonEC2");
        assert_eq!(filters[0].r#type(), &FilterType::TermMatch);
    }

    #[test]
    fn first_page_query_has_no_token() {
        let query = ProductQuery::new(None, 10);
        assert_eq!(query.next_token, None);
        assert_eq!(query.max_results, 10);
    }

    #[test]
    fn continuation_query_carries_the_token() {
        let query = ProductQuery::new(Some("abc".into()), 25);
        assert_eq!(query.next_token.as_deref(), Some("abc"));
        assert_eq!(query.max_results, 25);
    }

    #[test]
    fn product_page_round_trips_through_json() {
        let page = ProductPage {
            price_list: vec![serde_json::json!({
                "product": { "attributes": { "instanceType": "t2.micro" } },
                "terms": { "OnDemand": {} }
            })],
            next_token: Some("abc".into()),
        };

        let encoded = serde_json::to_string(&page).unwrap();
        let decoded: ProductPage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn last_page_is_detected_by_missing_token() {
        assert!(ProductPage::default().is_last());
        assert!(!ProductPage {
            price_list: vec![],
            next_token: Some("more".into()),
        }
        .is_last());
    }
}
