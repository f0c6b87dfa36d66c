/// Initializes the tracing/logging infrastructure for the application.
///
/// This sets up structured logging using the `tracing` crate with:
/// - **Environment-based filtering**: Controlled via the `RUST_LOG` environment variable
/// - **Compact formatting**: Span hierarchy inline, no module paths
/// - **stderr output**: stdout carries only rover positions
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Plateau built / script complete milestones
/// - `RUST_LOG=debug` - Every rover placement and command
/// - `RUST_LOG=warn` - Only rejected placements and moves
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    // A subscriber may already be installed (e.g. when called twice from tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
