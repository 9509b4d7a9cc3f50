//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use fx_types::{
        ConversionError, ConversionRequest, CurrencyCode, CurrencyNames, RateSource, UpstreamError,
    };

    use crate::ConversionService;

    /// Fixed-rate source that records every call it receives.
    pub struct MockSource {
        rates: HashMap<(String, String), f64>,
        names: CurrencyNames,
        calls: AtomicUsize,
        last_pair: Mutex<Option<(String, String)>>,
    }

    impl MockSource {
        pub fn new() -> Self {
            Self {
                rates: HashMap::new(),
                names: CurrencyNames::new(),
                calls: AtomicUsize::new(0),
                last_pair: Mutex::new(None),
            }
        }

        pub fn with_rate(mut self, base: &str, target: &str, rate: f64) -> Self {
            self.rates.insert((base.into(), target.into()), rate);
            self
        }

        pub fn with_currency(mut self, code: &str, name: &str) -> Self {
            self.names.insert(code.parse().unwrap(), name.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateSource for MockSource {
        async fn list_currencies(&self) -> Result<CurrencyNames, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.names.clone())
        }

        async fn get_rate(
            &self,
            base: &CurrencyCode,
            target: &CurrencyCode,
        ) -> Result<f64, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let pair = (base.to_string(), target.to_string());
            *self.last_pair.lock().unwrap() = Some(pair.clone());
            self.rates
                .get(&pair)
                .copied()
                .ok_or(UpstreamError::MissingRate {
                    base: pair.0,
                    target: pair.1,
                })
        }
    }

    #[tokio::test]
    async fn test_convert_success() {
        let service = ConversionService::new(MockSource::new().with_rate("USD", "EUR", 0.9));

        let res = service
            .convert(ConversionRequest::new("USD", "EUR", 100.0))
            .await
            .unwrap();

        assert_eq!(res.result, 90.0);
        assert_eq!(res.rate, 0.9);
        assert_eq!(res.from, "USD");
        assert_eq!(res.to, "EUR");
        assert_eq!(res.amount, 100.0);
    }

    #[tokio::test]
    async fn test_convert_result_is_exact_product() {
        let cases = [(0.01, 1.0 / 3.0), (12.345, 83.123456), (1e9, 0.0072), (7.0, 1.1)];
        for (amount, rate) in cases {
            let service = ConversionService::new(MockSource::new().with_rate("AAA", "BBB", rate));

            let res = service
                .convert(ConversionRequest::new("AAA", "BBB", amount))
                .await
                .unwrap();

            assert_eq!(res.result, amount * rate);
        }
    }

    #[tokio::test]
    async fn test_convert_normalizes_codes() {
        let service = ConversionService::new(MockSource::new().with_rate("USD", "EUR", 0.9));

        let res = service
            .convert(ConversionRequest::new(" usd", "eur ", 1.0))
            .await
            .unwrap();

        assert_eq!(res.from, "USD");
        assert_eq!(res.to, "EUR");
        assert_eq!(
            *service.source().last_pair.lock().unwrap(),
            Some(("USD".to_string(), "EUR".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_requests_make_no_calls() {
        let invalid = [
            ConversionRequest::new("USD", "EUR", 0.0),
            ConversionRequest::new("USD", "EUR", -5.0),
            ConversionRequest::new("USD", "EUR", f64::NAN),
            ConversionRequest::new("USD", "EUR", f64::INFINITY),
            ConversionRequest::new("", "EUR", 10.0),
            ConversionRequest::new("USD", "   ", 10.0),
        ];
        let service = ConversionService::new(MockSource::new().with_rate("USD", "EUR", 0.9));

        for req in invalid {
            let result = service.convert(req).await;
            assert!(matches!(result, Err(ConversionError::InvalidRequest(_))));
        }

        assert_eq!(service.source().calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_wrapped_as_conversion_failed() {
        let service = ConversionService::new(MockSource::new());

        let result = service.convert(ConversionRequest::new("USD", "XYZ", 1.0)).await;

        assert_eq!(
            result,
            Err(ConversionError::ConversionFailed(UpstreamError::MissingRate {
                base: "USD".into(),
                target: "XYZ".into(),
            }))
        );
        assert_eq!(service.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_overflowing_product_is_an_error() {
        let service = ConversionService::new(MockSource::new().with_rate("USD", "JPY", 150.0));

        let result = service.convert(ConversionRequest::new("USD", "JPY", 1e307)).await;

        assert_eq!(
            result,
            Err(ConversionError::ResultOutOfRange {
                amount: 1e307,
                rate: 150.0,
            })
        );
        assert_eq!(service.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_list_currencies_passes_through() {
        let service = ConversionService::new(
            MockSource::new()
                .with_currency("JPY", "Japanese Yen")
                .with_currency("EUR", "Euro"),
        );

        let names = service.list_currencies().await.unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(names.keys().next().unwrap(), "EUR");
    }
}
