#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use reqwest::Client;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::nbp::get_rate_table;

    async fn mock_nbp(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/exchangerates/tables/a/"))
            .and(query_param("format", "json"))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    fn table_body() -> serde_json::Value {
        json!([{
            "table": "A",
            "no": "162/A/NBP/2026",
            "effectiveDate": "2026-08-21",
            "rates": [
                {"currency": "dolar amerykański", "code": "USD", "mid": 4.00},
                {"currency": "euro", "code": "EUR", "mid": 4.30}
            ]
        }])
    }

    #[tokio::test]
    async fn decodes_the_published_table() {
        let server = mock_nbp(ResponseTemplate::new(200).set_body_json(table_body())).await;

        let dto = get_rate_table(&Client::new(), &server.uri()).await.unwrap();

        assert_eq!(dto.table(), "A");
        assert_eq!(
            dto.effective_date(),
            &NaiveDate::from_ymd_opt(2026, 8, 21).unwrap()
        );
        assert_eq!(dto.rates().len(), 2);
        assert_eq!(dto.rates()[0].code(), "USD");
        assert_eq!(*dto.rates()[1].mid(), dec!(4.30));
    }

    #[tokio::test]
    async fn builds_a_rate_table_from_the_fetched_payload() {
        let server = mock_nbp(ResponseTemplate::new(200).set_body_json(table_body())).await;

        let dto = get_rate_table(&Client::new(), &server.uri()).await.unwrap();
        let table = dto.to_rate_table();

        assert_eq!(table.mid("EUR"), Some(dec!(4.30)));
        assert_eq!(table.mid("PLN"), Some(dec!(1)));
    }

    #[tokio::test]
    async fn uses_the_first_table_only() {
        let body = json!([
            {"table": "A", "no": "1/A/NBP/2026", "effectiveDate": "2026-08-20", "rates": []},
            {"table": "A", "no": "2/A/NBP/2026", "effectiveDate": "2026-08-21", "rates": []}
        ]);
        let server = mock_nbp(ResponseTemplate::new(200).set_body_json(body)).await;

        let dto = get_rate_table(&Client::new(), &server.uri()).await.unwrap();
        assert_eq!(dto.no(), "1/A/NBP/2026");
    }

    #[tokio::test]
    async fn reports_server_errors() {
        let server = mock_nbp(ResponseTemplate::new(500)).await;

        let result = get_rate_table(&Client::new(), &server.uri()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn reports_malformed_payloads() {
        let server = mock_nbp(ResponseTemplate::new(200).set_body_string("not a rate table")).await;

        let result = get_rate_table(&Client::new(), &server.uri()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn reports_an_empty_table_list() {
        let server = mock_nbp(ResponseTemplate::new(200).set_body_json(json!([]))).await;

        let result = get_rate_table(&Client::new(), &server.uri()).await;
        assert!(result.is_err());
    }
}
