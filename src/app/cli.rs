use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::warn;

use super::config::log_level;
use super::error::AppError;

/// Output handles passed to the application's main function
pub struct Writers {
    /// Buffered stdout, bridged to `futures::io::AsyncWrite`
    pub stdout: Compat<BufWriter<Stdout>>,
}

impl Writers {
    fn new() -> Self {
        Self {
            stdout: BufWriter::new(tokio::io::stdout()).compat_write(),
        }
    }
}

/// Reusable CLI application runner that handles:
/// - Argument parsing via a caller-supplied parser
/// - Log subscriber setup (stderr, level from `STOCKMAX_LOG`)
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
///
/// The main function runs on a current-thread runtime as a single task.
pub struct CliApp<P = ()> {
    name: String,
    parse_args: P,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parse_args: (),
        }
    }

    /// Set the parser turning `std::env::args()` into the run configuration
    pub fn with_args<P, C>(self, parse_args: P) -> CliApp<P>
    where
        P: FnOnce(Vec<String>) -> Result<C, AppError>,
    {
        CliApp {
            name: self.name,
            parse_args,
        }
    }
}

impl<P> CliApp<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the CLI application with signal handling and exit codes
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<C, F, Fut>(self, main_fn: F) -> !
    where
        P: FnOnce(Vec<String>) -> Result<C, AppError>,
        F: FnOnce(Writers, C) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level())
            .with_target(false)
            .try_init();

        let config = match (self.parse_args)(std::env::args().collect()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", self.name, e);
                std::process::exit(1);
            }
        };

        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("{}: failed to start runtime: {}", self.name, e);
                std::process::exit(1);
            }
        };

        let code = runtime.block_on(async {
            tokio::select! {
                result = main_fn(Writers::new(), config) => {
                    match result {
                        Ok(()) => 0,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            1
                        }
                    }
                }
                signal_code = wait_for_signal() => signal_code,
            }
        });

        std::process::exit(code);
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let handlers = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        );
        let (mut sigterm, mut sigint, mut sighup) = match handlers {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            _ => {
                warn!("Signal handlers unavailable, running without them");
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Ctrl+C handler unavailable, running without it");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}
