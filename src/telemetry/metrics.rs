use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> = LazyLock::new(|| global::meter("toxicity-shield-ml"));

pub static HTTP_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("http.server.requests")
        .with_description("Total HTTP requests handled")
        .with_unit("{request}")
        .build()
});

pub static HTTP_REQUEST_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("http.server.duration")
        .with_description("HTTP request latency in milliseconds")
        .with_unit("ms")
        .build()
});

pub static ANALYZE_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("analyze.requests")
        .with_description("Total analyze batches processed")
        .with_unit("{batch}")
        .build()
});

pub static TEXTS_ANALYZED_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("analyze.texts")
        .with_description("Total texts scored")
        .with_unit("{text}")
        .build()
});

pub static ANALYZE_BATCH_SIZE: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("analyze.batch_size")
        .with_description("Number of texts per analyze request")
        .with_unit("{text}")
        .build()
});
