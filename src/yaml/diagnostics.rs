//! YAML error types with source spans for miette

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] YamlSyntaxError),

    #[error("Failed to read {path}: {source}")]
    #[diagnostic(code(doorkit::yaml::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{file} is not valid UTF-8")]
    #[diagnostic(code(doorkit::yaml::encoding))]
    Encoding { file: String },
}

/// A YAML document that failed to parse or did not match the expected shape
#[derive(Debug, Error, Diagnostic)]
#[error("Invalid YAML in {file}: {message}")]
#[diagnostic(code(doorkit::yaml::syntax))]
pub struct YamlSyntaxError {
    pub file: String,
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: Option<SourceSpan>,

    /// 1-based line of the error, if known
    pub line: Option<usize>,
}

impl YamlSyntaxError {
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().map(|loc| {
            let offset = loc.index().min(content.len());
            SourceSpan::from((offset, 1usize.min(content.len() - offset)))
        });
        Self {
            file: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
            line: err.location().map(|loc| loc.line()),
        }
    }
}
