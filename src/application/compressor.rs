//! Package Compressor
//!
//! Public entry point tying the compile pipeline, the metadata store and
//! the request protocol together. One instance serves one request (or one
//! CLI invocation); concurrent requests use their own instances and meet
//! only through the lock file and the state file.

use std::thread;
use std::time::Duration;

use crate::domain::entities::{CompiledRecord, PackageSet};
use crate::domain::ports::{CompileLock, FileSystem, MetadataRepository, Minifier, Publisher};
use crate::error::AssetPackResult;

use super::compile::{CompileUseCase, RawUrls};
use super::metadata::{MetadataStore, ResetTarget};
use super::register::{
    CompileBackend, RegisterUseCase, Registered, WaitPolicy, DEFAULT_RETRY_INTERVAL, LOCK_ID,
};

pub struct PackageCompressor<MR, FS, P, M, L>
where
    MR: MetadataRepository,
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
    L: CompileLock,
{
    compiler: CompileUseCase<FS, P, M>,
    store: MetadataStore<MR, FS>,
    register: RegisterUseCase<L>,
    lock: L,
    retry_interval: Duration,
    lock_timeout: Duration,
}

/// Borrowed compiler + store, driven by the request protocol
struct Pipeline<'a, MR, FS, P, M>
where
    MR: MetadataRepository,
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
{
    compiler: &'a CompileUseCase<FS, P, M>,
    store: &'a mut MetadataStore<MR, FS>,
}

impl<MR, FS, P, M> CompileBackend for Pipeline<'_, MR, FS, P, M>
where
    MR: MetadataRepository,
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
{
    fn packages(&self) -> &PackageSet {
        self.compiler.packages()
    }

    fn cached(&mut self, name: &str, force_reload: bool) -> AssetPackResult<Option<CompiledRecord>> {
        self.store.get(name, force_reload)
    }

    fn compile(&mut self, name: &str) -> AssetPackResult<bool> {
        self.compiler.compile(name, &mut *self.store)
    }

    fn raw(&self, name: &str) -> AssetPackResult<RawUrls> {
        self.compiler.raw_urls(name)
    }
}

impl<MR, FS, P, M, L> PackageCompressor<MR, FS, P, M, L>
where
    MR: MetadataRepository,
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
    L: CompileLock + Clone,
{
    pub fn new(
        compiler: CompileUseCase<FS, P, M>,
        store: MetadataStore<MR, FS>,
        lock: L,
        enabled: bool,
        policy: WaitPolicy,
        lock_timeout: Duration,
    ) -> Self {
        // `compile` always waits, even when requests bail
        let retry_interval = match policy {
            WaitPolicy::Block { retry_interval } => retry_interval,
            WaitPolicy::Bail => DEFAULT_RETRY_INTERVAL,
        };
        Self {
            compiler,
            store,
            register: RegisterUseCase::new(lock.clone(), enabled, policy, lock_timeout),
            lock,
            retry_interval,
            lock_timeout,
        }
    }

    /// Serve `name` (and its dependencies) for the current request
    pub fn register_package(&mut self, name: &str) -> AssetPackResult<Registered> {
        let mut pipeline = Pipeline {
            compiler: &self.compiler,
            store: &mut self.store,
        };
        self.register.register(name, &mut pipeline)
    }

    /// Everything registered in the current request, dependencies first
    pub fn registrations(&self) -> &[(String, Registered)] {
        self.register.registered()
    }

    /// Start a new request: registrations are forgotten
    pub fn begin_request(&mut self) {
        self.register.begin_request();
    }

    /// Compile `name` now, waiting for the compile lock as long as needed
    ///
    /// `false` when the package is unknown or produced nothing.
    pub fn compile(&mut self, name: &str) -> AssetPackResult<bool> {
        let guard = loop {
            if let Some(guard) = self.lock.acquire(LOCK_ID, self.lock_timeout)? {
                break guard;
            }
            tracing::info!(package = name, "compile lock busy, waiting");
            thread::sleep(self.retry_interval);
        };

        let compiled = self
            .store
            .reload()
            .and_then(|()| self.compiler.compile(name, &mut self.store));
        drop(guard);
        self.register.forget(Some(name));
        compiled
    }

    /// Validated record for `name`
    pub fn compiled_info(
        &mut self,
        name: &str,
        force_reload: bool,
    ) -> AssetPackResult<Option<CompiledRecord>> {
        self.store.get(name, force_reload)
    }

    /// Names of all packages with a stored record, sorted
    pub fn compiled_names(&mut self) -> AssetPackResult<Vec<String>> {
        self.store.names()
    }

    /// Delete artifacts and records; `false` when there was nothing to reset
    pub fn reset(&mut self, target: ResetTarget) -> AssetPackResult<bool> {
        let name = match &target {
            ResetTarget::One(name) => Some(name.clone()),
            ResetTarget::All => None,
        };
        let reset = self.store.invalidate(target)?;
        self.register.forget(name.as_deref());
        Ok(reset)
    }

    /// Declared package names, sorted
    pub fn package_names(&self) -> Vec<String> {
        self.compiler.packages().names().map(str::to_string).collect()
    }
}
