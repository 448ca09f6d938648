//! Fatal error reporting

use tracing::error;

use crate::error::ChetError;

/// Exit status for a failed command
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ChetError>() {
        Some(ChetError::Config(_) | ChetError::ConfigFile { .. } | ChetError::Toml(_)) => 2,
        Some(ChetError::Resolve(_) | ChetError::NtpTimeout { .. } | ChetError::NtpResponse(_)) => 3,
        _ => 1,
    }
}

/// Print the error (with its cause chain when verbose) and exit
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = anyhow::Error::new(ChetError::Config("bad".to_string()));
        assert_eq!(exit_code(&config), 2);

        let network = anyhow::Error::new(ChetError::Resolve("nowhere".to_string()));
        assert_eq!(exit_code(&network), 3);

        assert_eq!(exit_code(&anyhow::anyhow!("plain")), 1);
    }
}
