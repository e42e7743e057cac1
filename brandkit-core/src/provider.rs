//! Ordered fallback chains.
//!
//! Filesystem probing and external tools are modelled as a list of
//! providers tried in order. The first success wins; soft failures are
//! logged and collected so an exhausted chain can report every attempt.

use crate::error::{Attempt, BrandError, Result};

pub trait Provider {
    type Output;

    fn name(&self) -> String;

    /// Produce the output or explain why this provider is unavailable.
    fn provide(&self) -> std::result::Result<Self::Output, String>;
}

/// Result of a successful chain run.
#[derive(Debug)]
pub struct Resolved<T> {
    pub provider: String,
    pub value: T,
    pub skipped: Vec<Attempt>,
}

pub fn first_available<P, I>(what: &'static str, providers: I) -> Result<Resolved<P::Output>>
where
    P: Provider,
    I: IntoIterator<Item = P>,
{
    let mut attempts = Vec::new();
    for provider in providers {
        let name = provider.name();
        match provider.provide() {
            Ok(value) => {
                log::debug!("{what}: using {name}");
                return Ok(Resolved { provider: name, value, skipped: attempts });
            }
            Err(reason) => {
                log::warn!("{what}: {name} unavailable ({reason})");
                attempts.push(Attempt { provider: name, reason });
            }
        }
    }
    Err(BrandError::Exhausted { what, attempts })
}

/// Adapter turning a closure into a provider.
pub struct FnProvider<F> {
    name: String,
    f: F,
}

impl<F> FnProvider<F> {
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self { name: name.into(), f }
    }
}

impl<T, F> Provider for FnProvider<F>
where
    F: Fn() -> std::result::Result<T, String>,
{
    type Output = T;

    fn name(&self) -> String {
        self.name.clone()
    }

    fn provide(&self) -> std::result::Result<T, String> {
        (self.f)()
    }
}
