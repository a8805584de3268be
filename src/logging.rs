//! Console subscriber shared by the binary and the log assertions in tests.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// One line per event, no timestamps. Colour only when `ansi` is set, so
/// redirected output stays plain text.
pub fn console_subscriber<W>(filter: EnvFilter, ansi: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .without_time()
        .finish()
}


#[cfg(test)]
mod tests {
    use super::capture::CapturedLogs;
    use super::*;

    fn emit(ansi: bool) -> String {
        let logs = CapturedLogs::default();
        let subscriber = console_subscriber(EnvFilter::new("guard=info"), ansi, logs.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "guard", "[PROXY] Reading property health");
        });
        logs.contents()
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = emit(false);
        assert!(!out.contains('\x1b'), "{out:?}");
        assert_eq!(out.trim(), "INFO guard: [PROXY] Reading property health");
    }

    #[test]
    fn test_ansi_output_is_coloured() {
        let out = emit(true);
        assert!(out.contains('\x1b'), "{out:?}");
        assert!(out.contains("[PROXY] Reading property health"));
    }

    #[test]
    fn test_filter_drops_other_targets() {
        let logs = CapturedLogs::default();
        let subscriber = console_subscriber(EnvFilter::new("guard=info"), false, logs.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "reflect", "get health");
            tracing::debug!(target: "guard", "too verbose");
        });
        assert!(logs.contents().is_empty());
    }
}
