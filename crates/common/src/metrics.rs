use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_histogram, register_int_counter, Encoder, Histogram, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static ADDRESSES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "address_book_addresses_created_total",
        "Total address entries created"
    )
    .expect("register addresses_created_total")
});

pub static ADDRESSES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "address_book_addresses_deleted_total",
        "Total address entries deleted"
    )
    .expect("register addresses_deleted_total")
});

pub static PROXIMITY_SEARCHES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "address_book_proximity_searches_total",
        "Total proximity searches served"
    )
    .expect("register proximity_searches_total")
});

pub static PROXIMITY_SEARCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "address_book_proximity_search_duration_seconds",
        "Proximity search duration in seconds",
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]
    )
    .expect("register proximity_search_duration")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_exposition() {
        PROXIMITY_SEARCHES_TOTAL.inc();
        PROXIMITY_SEARCH_DURATION.observe(0.002);
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("address_book_proximity_searches_total"));
        assert!(body.contains("address_book_proximity_search_duration_seconds_bucket"));
    }
}
