use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "cloudbuild_gen=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    cloudbuild_gen::app::cli::run();
}
