//! # Currency Converter Proxy
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging (and OTLP trace export when configured)
//! - Create the rate source adapter and conversion service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_rates::FreeCurrencyApi;
use fx_hex::{ConversionService, inbound::HttpServer};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing; endpoint comes from OTEL_EXPORTER_OTLP_ENDPOINT
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("fx-converter"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    let otel = if config.otlp_endpoint.is_some() {
        Some(init_tracer()?)
    } else {
        None
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,fx_app=debug,fx_hex=debug,exchange_rates=debug".into()
            }),
        )
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(tracing_subscriber::fmt::layer))
        .with(telemetry)
        .init();

    tracing::info!("Starting converter proxy on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.provider_base_url);
    if config.provider_api_key.is_none() {
        tracing::warn!("FX_API_KEY is not set; the rate provider will reject every request");
    }

    // Build the rate source adapter
    let source = FreeCurrencyApi::new(
        config.provider_base_url.as_str(),
        config.provider_api_key.clone().unwrap_or_default(),
    );

    // Create the conversion service
    let service = ConversionService::new(source);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
