use prometheus::Encoder;

lazy_static! {

    pub static ref OPERATION_SECS: prometheus::HistogramVec = register_histogram_vec!(
        "quietblog_operation_secs",
        "Seconds taken for each post store operation, partitioned by operation name",
        &["operation"],
        vec![0.05, 0.25, 1.0, 4.0, 16.0] // Prometheus buckets
    )
    .expect("couldn't make OPERATION_SECS");

    pub static ref OPERATIONS: prometheus::IntCounterVec = register_int_counter_vec!(
        "quietblog_operations",
        "How many Ok/Err results per post store operation",
        &["operation", "result"]
    )
    .expect("couldn't make OPERATIONS");
}

/// Everything registered in the default registry, in the Prometheus text format.
pub fn render() -> anyhow::Result<String> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = vec![];
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
