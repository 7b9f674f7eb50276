//! Error adapter for converting ArmatureError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When an [`ArmatureError::Validation`] carries multiple violations, each
//! violation is rendered independently.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use armature::ArmatureError;

/// Adapter for a single validation violation.
#[derive(Debug)]
pub struct ViolationAdapter {
    message: String,
}

impl ViolationAdapter {
    /// Create a new violation adapter.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ViolationAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ViolationAdapter {}

impl MietteDiagnostic for ViolationAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("armature::validation"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "blocking errors must be fixed before a layout can be computed",
        ))
    }
}

/// Adapter for non-validation [`ArmatureError`] variants.
pub struct ErrorAdapter<'a>(pub &'a ArmatureError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArmatureError::Io(_) => "armature::io",
            ArmatureError::Config(_) => "armature::config",
            ArmatureError::SchemeParse(_) => "armature::scheme_parse",
            ArmatureError::Validation(_) => "armature::validation",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single validation violation or a
/// non-validation error, providing a uniform interface for rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// One violation out of a failed validation.
    Violation(ViolationAdapter),
    /// An error without per-violation structure.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Violation(v) => fmt::Display::fmt(v, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Violation(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert an [`ArmatureError`] into a list of reportable errors.
///
/// For [`ArmatureError::Validation`], this returns one [`Reportable`] per
/// collected violation. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &ArmatureError) -> Vec<Reportable<'_>> {
    match err {
        ArmatureError::Validation(outcome) => outcome
            .errors()
            .iter()
            .map(|message| Reportable::Violation(ViolationAdapter::new(message)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
