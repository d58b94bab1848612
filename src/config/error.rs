//! Config loading errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config syntax in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("config include cycle: {}", CycleChain(chain))]
    Cycle { chain: Vec<PathBuf> },

    #[error("invalid config value: {message}")]
    Invalid { message: String },

    #[error("failed writing config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },
}

impl ConfigError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Parse { path: path.into(), message: message.to_string() }
    }
}

struct CycleChain<'a>(&'a [PathBuf]);

impl fmt::Display for CycleChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_chain() {
        let err = ConfigError::Cycle {
            chain: vec![PathBuf::from("/a.yml"), PathBuf::from("/b.yml"), PathBuf::from("/a.yml")],
        };
        assert_eq!(err.to_string(), "config include cycle: /a.yml -> /b.yml -> /a.yml");
    }
}
