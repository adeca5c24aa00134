use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;

use crate::error::FeatureError;
use crate::gate::FeatureGate;
use crate::traits::FeatureBackend;
use crate::traits::GateLogger;
use crate::types::Dispatch;

/// Exit code for `check` on an active feature (and for `list`).
pub const EXIT_ACTIVE: u8 = 0;
/// Exit code for `check` on a feature that exists but is disabled.
pub const EXIT_INACTIVE: u8 = 1;
/// Exit code for `check` on a name the backend does not know.
pub const EXIT_UNKNOWN: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print `active`, `inactive` or `unknown` for one feature.
    /// Exits 0, 1 or 2 respectively.
    Check { name: String },
    /// Print every known feature with its state.
    List,
}

/// What a command printed and the process exit code it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub code: u8,
}

impl Outcome {
    fn new(output: impl Into<String>, code: u8) -> Self {
        Self {
            output: output.into(),
            code,
        }
    }
}

/// Run one CLI command against `backend`.
pub fn run(
    command: &Command,
    backend: Arc<dyn FeatureBackend>,
    logger: Arc<dyn GateLogger>,
) -> Result<Outcome> {
    let gate = FeatureGate::new(backend.clone(), logger);

    match command {
        Command::Check { name } => match gate.feature::<(), ()>(name) {
            Ok(decorator) => match decorator.dispatch() {
                Dispatch::Active => Ok(Outcome::new("active", EXIT_ACTIVE)),
                Dispatch::InactiveWithDefault | Dispatch::InactiveNoDefault => {
                    Ok(Outcome::new("inactive", EXIT_INACTIVE))
                }
            },
            Err(FeatureError::UnknownFeature { .. }) => Ok(Outcome::new("unknown", EXIT_UNKNOWN)),
            Err(err) => Err(err.into()),
        },
        Command::List => {
            let lines: Vec<String> = backend
                .features()
                .into_iter()
                .map(|name| {
                    let state = if gate.is_active(&name) {
                        "active"
                    } else {
                        "inactive"
                    };
                    format!("{}\t{}", name, state)
                })
                .collect();
            Ok(Outcome::new(lines.join("\n"), EXIT_ACTIVE))
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;
    use crate::backend::MemoryBackend;
    use crate::backend::NoopBackend;
    use crate::logger::RecordingLogger;

    // ==================== TEST HELPERS ====================

    fn run_against(backend: MemoryBackend, command: Command) -> Result<Outcome> {
        run(
            &command,
            Arc::new(backend),
            Arc::new(RecordingLogger::default()),
        )
    }

    fn check(name: &str) -> Command {
        Command::Check {
            name: name.to_string(),
        }
    }

    // ==================== TESTS: check ====================

    #[test]
    fn test_check_active() -> Result<()> {
        let backend = MemoryBackend::with_features([("search", true)]);
        let outcome = run_against(backend, check("search"))?;
        assert_eq!(outcome, Outcome::new("active", 0));
        Ok(())
    }

    #[test]
    fn test_check_inactive() -> Result<()> {
        let backend = MemoryBackend::with_features([("search", false)]);
        let outcome = run_against(backend, check("search"))?;
        assert_eq!(outcome, Outcome::new("inactive", 1));
        Ok(())
    }

    #[test]
    fn test_check_unknown_logs_error() -> Result<()> {
        let logger = RecordingLogger::default();
        let outcome = run(
            &check("missing"),
            Arc::new(NoopBackend),
            Arc::new(logger.clone()),
        )?;

        assert_eq!(outcome, Outcome::new("unknown", 2));
        assert_eq!(
            logger.messages_at(Level::ERROR),
            vec!["An unknown feature was requested: missing"]
        );
        Ok(())
    }

    // ==================== TESTS: list ====================

    #[test]
    fn test_list_sorted_with_states() -> Result<()> {
        let backend =
            MemoryBackend::with_features([("zeta", false), ("alpha", true), ("mid", true)]);
        let outcome = run_against(backend, Command::List)?;

        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.output, "alpha\tactive\nmid\tactive\nzeta\tinactive");
        Ok(())
    }

    #[test]
    fn test_list_empty_backend() -> Result<()> {
        let outcome = run_against(MemoryBackend::new(), Command::List)?;
        assert_eq!(outcome, Outcome::new("", 0));
        Ok(())
    }
}
