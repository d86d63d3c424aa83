use miette::{Diagnostic, SourceSpan};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

#[derive(Debug, Diagnostic)]
pub enum TinctError {
    /// A numeric component fell outside its valid domain.
    #[diagnostic(code(tinct::range), url(docsrs))]
    Range {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A string did not match any recognized color grammar.
    #[diagnostic(code(tinct::format), url(docsrs))]
    Format {
        #[source_code]
        src: String,
        #[label("unrecognized here")]
        err_span: SourceSpan,
        msg: String,
    },

    #[diagnostic(code(tinct::io), url(docsrs))]
    Io { path: PathBuf, msg: String },

    /// A token document could not be decoded or failed validation.
    #[diagnostic(code(tinct::tokens), url(docsrs))]
    Tokens { path: PathBuf, msg: String },
}

pub type TinctResult<T> = miette::Result<T, TinctError>;

impl Display for TinctError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TinctError::Range {
                component,
                value,
                min,
                max,
            } => write!(
                f,
                "Invalid value for {}: {}. Must be between {} and {}.",
                component, value, min, max
            ),
            TinctError::Format { msg, src, .. } => {
                write!(f, "Invalid color string {:?}: {}", src, msg)
            }
            TinctError::Io { path, msg } => write!(f, "IO error at {}: {}", path.display(), msg),
            TinctError::Tokens { path, msg } => {
                write!(f, "Token document error at {}: {}", path.display(), msg)
            }
        }
    }
}

impl Error for TinctError {}

impl TinctError {
    pub fn range(component: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::Range {
            component,
            value,
            min,
            max,
        }
    }

    pub fn format(
        src: impl Into<String>,
        err_span: impl Into<SourceSpan>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Format {
            src: src.into(),
            err_span: err_span.into(),
            msg: msg.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            msg: msg.into(),
        }
    }

    pub fn tokens(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Tokens {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_error_creation() {
        let err = TinctError::range("saturation", 120.0, 0.0, 100.0);

        match err {
            TinctError::Range {
                component,
                value,
                min,
                max,
            } => {
                assert_eq!(component, "saturation");
                assert_eq!(value, 120.0);
                assert_eq!(min, 0.0);
                assert_eq!(max, 100.0);
            }
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_format_error_creation() {
        let err = TinctError::format("notacolor".to_string(), (0, 9), "no grammar matched");

        match err {
            TinctError::Format { src, err_span, msg } => {
                assert_eq!(src, "notacolor");
                assert_eq!(err_span, (0, 9).into());
                assert_eq!(msg, "no grammar matched");
            }
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_range_error_display() {
        let err = TinctError::range("alpha", 1.5, 0.0, 1.0);
        assert_eq!(
            err.to_string(),
            "Invalid value for alpha: 1.5. Must be between 0 and 1."
        );
    }
}
