//! Register Use Case
//!
//! Guarantees at most one compilation of a package at a time across every
//! process sharing the runtime directory. Readers never wait on a valid
//! record; only a miss takes the lock, and the record is re-read under the
//! lock so a compile finished by someone else is reused.

use std::collections::HashMap;
use std::time::Duration;

use crate::application::compile::RawUrls;
use crate::domain::entities::{CompiledRecord, PackageSet};
use crate::domain::ports::CompileLock;
use crate::domain::services::dependency_order;
use crate::error::{AssetPackError, AssetPackResult};

use super::policy::WaitPolicy;
use super::result::Registered;

/// Identifier of the single coordinator-wide compile lock
pub const LOCK_ID: &str = "_assetpack";

/// The pipeline operations the protocol drives
pub trait CompileBackend {
    fn packages(&self) -> &PackageSet;

    /// Validated record; `force_reload` bypasses in-memory state
    fn cached(&mut self, name: &str, force_reload: bool) -> AssetPackResult<Option<CompiledRecord>>;

    fn compile(&mut self, name: &str) -> AssetPackResult<bool>;

    fn raw(&self, name: &str) -> AssetPackResult<RawUrls>;
}

pub struct RegisterUseCase<L>
where
    L: CompileLock,
{
    lock: L,
    enabled: bool,
    policy: WaitPolicy,
    lock_timeout: Duration,
    /// Outcomes for the current request, in registration order
    registered: Vec<(String, Registered)>,
    index: HashMap<String, usize>,
}

impl<L> RegisterUseCase<L>
where
    L: CompileLock,
{
    pub fn new(lock: L, enabled: bool, policy: WaitPolicy, lock_timeout: Duration) -> Self {
        Self {
            lock,
            enabled,
            policy,
            lock_timeout,
            registered: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Packages registered so far in this request, dependencies first
    pub fn registered(&self) -> &[(String, Registered)] {
        &self.registered
    }

    /// Forget everything registered; the next call starts a new request
    pub fn begin_request(&mut self) {
        self.registered.clear();
        self.index.clear();
    }

    /// Forget one package so the next registration re-reads the store
    pub fn forget(&mut self, name: Option<&str>) {
        match name {
            Some(name) => {
                self.registered.retain(|(registered, _)| registered != name);
                self.index = self
                    .registered
                    .iter()
                    .enumerate()
                    .map(|(i, (name, _))| (name.clone(), i))
                    .collect();
            }
            None => self.begin_request(),
        }
    }

    /// Register `name` and its dependencies for the current request
    pub fn register<B>(&mut self, name: &str, backend: &mut B) -> AssetPackResult<Registered>
    where
        B: CompileBackend,
    {
        if let Some(&i) = self.index.get(name) {
            return Ok(self.registered[i].1.clone());
        }
        if !backend.packages().contains(name) {
            return Err(AssetPackError::UnknownPackage {
                name: name.to_string(),
            });
        }

        let order = dependency_order(backend.packages(), name)?;
        for dependency in order.iter().filter(|dep| dep.as_str() != name) {
            self.register(dependency, backend)?;
        }

        let outcome = self.resolve(name, backend)?;
        self.index.insert(name.to_string(), self.registered.len());
        self.registered.push((name.to_string(), outcome.clone()));
        Ok(outcome)
    }

    fn resolve<B>(&self, name: &str, backend: &mut B) -> AssetPackResult<Registered>
    where
        B: CompileBackend,
    {
        if !self.enabled {
            return Ok(Registered::Raw(backend.raw(name)?));
        }

        if let Some(record) = backend.cached(name, false)? {
            return Ok(Registered::Compiled(record));
        }

        loop {
            match self.lock.acquire(LOCK_ID, self.lock_timeout)? {
                Some(guard) => {
                    if let Some(record) = backend.cached(name, true)? {
                        tracing::debug!(package = name, "compiled by another process");
                        return Ok(Registered::Compiled(record));
                    }

                    let compiled = backend.compile(name);
                    drop(guard);
                    compiled?;

                    return match backend.cached(name, false)? {
                        Some(record) => Ok(Registered::Compiled(record)),
                        None => Ok(Registered::Raw(backend.raw(name)?)),
                    };
                }
                None => match self.policy {
                    WaitPolicy::Block { retry_interval } => {
                        tracing::info!(
                            package = name,
                            "compile lock busy, retrying in {:?}",
                            retry_interval
                        );
                        std::thread::sleep(retry_interval);
                    }
                    WaitPolicy::Bail => {
                        tracing::info!(package = name, "compile lock busy, serving raw sources");
                        return Ok(Registered::Raw(backend.raw(name)?));
                    }
                },
            }
        }
    }
}
