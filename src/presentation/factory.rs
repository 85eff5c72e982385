//! Use Case Factory
//!
//! Creates the compressor with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    CompileOptions, CompileUseCase, MetadataStore, PackageCompressor, WaitPolicy,
};
use crate::config::Config;
use crate::infrastructure::{
    AssetDirPublisher, CommandMinifier, FileCompileLock, JsonMetadataRepository, LocalFs,
};

/// Type alias for the concrete PackageCompressor with all dependencies
pub type ConcretePackageCompressor = PackageCompressor<
    JsonMetadataRepository,
    LocalFs,
    AssetDirPublisher,
    CommandMinifier,
    FileCompileLock,
>;

/// Type alias for the concrete CompileUseCase
pub type ConcreteCompileUseCase = CompileUseCase<LocalFs, AssetDirPublisher, CommandMinifier>;

/// Create a compile use case from configuration
pub fn create_compile_use_case(config: &Config) -> ConcreteCompileUseCase {
    let options = CompileOptions::new(&config.app.web_root, &config.app.runtime_dir)
        .with_css_image_fingerprinting(config.compression.css_image_fingerprinting);

    CompileUseCase::new(
        LocalFs::new(),
        AssetDirPublisher::new(config.assets_dir(), config.publish.assets_url.clone()),
        CommandMinifier::new(config.minifier.command.clone()),
        config.packages(),
        options,
    )
}

/// Create the metadata store for the configured application
pub fn create_metadata_store(config: &Config) -> MetadataStore<JsonMetadataRepository, LocalFs> {
    MetadataStore::new(
        JsonMetadataRepository::new(&config.app.runtime_dir, &config.app.id),
        LocalFs::new(),
    )
}

/// Create a compressor with all dependencies wired up
///
/// This is the main entry point for embedding applications and the CLI.
pub fn create_compressor(config: &Config) -> ConcretePackageCompressor {
    let compression = &config.compression;
    let policy = WaitPolicy::from_blocking(
        compression.block_during_compression,
        compression.retry_interval(),
    );

    PackageCompressor::new(
        create_compile_use_case(config),
        create_metadata_store(config),
        FileCompileLock::new(&config.app.runtime_dir),
        compression.enabled,
        policy,
        compression.lock_timeout(),
    )
}
