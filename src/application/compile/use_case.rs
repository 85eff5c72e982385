//! Compile Use Case
//!
//! Orchestrates one package compilation:
//! 1. Compile dependencies that have no valid record
//! 2. Resolve the package's own references
//! 3. Per kind: combine → minify, or pass external URLs through
//! 4. Publish every minified part, withdrawing them all if one fails
//! 5. Unpublish a raw copy of the package's `base_path`
//! 6. Persist the record
//!
//! Callers hold the compile lock (or are the only writer, like the CLI).

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{AssetRecord, CompiledRecord, Package, PackageSet, Placement};
use crate::domain::ports::{FileSystem, MetadataRepository, Minifier, Publisher};
use crate::domain::services::{dependency_order, CssFingerprinter, RegistrationContext};
use crate::domain::value_objects::AssetKind;
use crate::error::AssetPackResult;
use crate::infrastructure::minify::CopyMinifier;

use super::options::CompileOptions;
use crate::application::combine::ArtifactWriter;
use crate::application::metadata::MetadataStore;

/// URLs serving a package's uncompiled sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawUrls {
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl RawUrls {
    pub fn urls(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Script => &self.scripts,
            AssetKind::Style => &self.styles,
        }
    }
}

/// One part of a package between minification and placement
enum Pending {
    Artifact {
        kind: AssetKind,
        output: PathBuf,
        files: Vec<PathBuf>,
        urls: Vec<String>,
    },
    External {
        kind: AssetKind,
        urls: Vec<String>,
    },
}

pub struct CompileUseCase<FS, P, M>
where
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
{
    fs: FS,
    publisher: P,
    minifier: M,
    packages: PackageSet,
    options: CompileOptions,
    fingerprinter: CssFingerprinter,
}

impl<FS, P, M> CompileUseCase<FS, P, M>
where
    FS: FileSystem,
    P: Publisher,
    M: Minifier,
{
    pub fn new(
        fs: FS,
        publisher: P,
        minifier: M,
        packages: PackageSet,
        options: CompileOptions,
    ) -> Self {
        let fingerprinter = CssFingerprinter::new(options.web_root.clone());
        Self {
            fs,
            publisher,
            minifier,
            packages,
            options,
            fingerprinter,
        }
    }

    pub fn packages(&self) -> &PackageSet {
        &self.packages
    }

    /// Compile `name`; `false` for unknown packages and packages that
    /// produced nothing
    pub fn compile<MR, SFS>(
        &self,
        name: &str,
        store: &mut MetadataStore<MR, SFS>,
    ) -> AssetPackResult<bool>
    where
        MR: MetadataRepository,
        SFS: FileSystem,
    {
        let Some(package) = self.packages.get(name) else {
            tracing::debug!(package = name, "not a declared package, nothing to compile");
            return Ok(false);
        };

        let order = dependency_order(&self.packages, name)?;
        for dependency in order.iter().filter(|dep| dep.as_str() != name) {
            if store.get(dependency, false)?.is_none() {
                tracing::debug!(package = name, dependency = %dependency, "compiling dependency");
                self.compile(dependency, store)?;
            }
        }

        tracing::info!(package = name, "compiling package");
        let context = RegistrationContext::for_package(package, &self.options.web_root);
        let mut record = CompiledRecord::new();

        // Every part is minified before anything is published, so a failing
        // part leaves no artifact behind.
        let mut pending = Vec::new();
        for kind in AssetKind::ALL {
            let (files, urls) = context.partition(kind);
            if !files.is_empty() {
                match self.minify(package, kind, &files) {
                    Ok(output) => pending.push(Pending::Artifact {
                        kind,
                        output,
                        files,
                        urls,
                    }),
                    Err(e) => {
                        self.discard_outputs(&pending);
                        return Err(e);
                    }
                }
            } else if !urls.is_empty() {
                pending.push(Pending::External { kind, urls });
            }
        }

        let placed = self.place_all(package, &pending);
        self.discard_outputs(&pending);
        for (kind, part) in placed? {
            let media = match kind {
                AssetKind::Style => package.media().map(str::to_string),
                AssetKind::Script => None,
            };
            record.set_part(kind, part.with_media(media));
        }

        if let Some(base_path) = package.base_path() {
            if self.publisher.unpublish(base_path)? {
                tracing::debug!(package = name, path = %base_path.display(), "removed raw published copy");
            }
        }

        if record.is_empty() {
            tracing::info!(package = name, "package has no assets");
            return Ok(false);
        }

        store.set(name, Some(record))?;
        tracing::info!(package = name, "package compiled");
        Ok(true)
    }

    /// Combine and minify one kind into `runtime_dir/<name>_<key>.<ext>`
    fn minify(
        &self,
        package: &Package,
        kind: AssetKind,
        files: &[PathBuf],
    ) -> AssetPackResult<PathBuf> {
        let fingerprinter = self
            .options
            .css_image_fingerprinting
            .then_some(&self.fingerprinter);
        let combined = ArtifactWriter::new(&self.fs, &self.options.runtime_dir, fingerprinter)
            .combine(package.name(), kind, files)?;

        let hash = self.fs.hash(combined.path())?;
        let output = self.options.runtime_dir.join(format!(
            "{}_{}.{}",
            package.name(),
            hash.artifact_key(),
            kind.extension()
        ));

        let minifier: &dyn Minifier = if package.compress() {
            &self.minifier
        } else {
            &CopyMinifier
        };
        tracing::debug!(
            package = package.name(),
            %kind,
            minifier = minifier.name(),
            output = %output.display(),
            "minifying"
        );
        if let Err(e) = minifier.minify(combined.path(), &output, kind) {
            self.discard(&output);
            return Err(e.into());
        }
        Ok(output)
    }

    /// Place every minified part; on failure, withdraw the ones already placed
    fn place_all(
        &self,
        package: &Package,
        pending: &[Pending],
    ) -> AssetPackResult<Vec<(AssetKind, AssetRecord)>> {
        let mut parts = Vec::with_capacity(pending.len());
        let mut placed: Vec<(&Path, PathBuf, Placement)> = Vec::new();

        for item in pending {
            match item {
                Pending::External { kind, urls } => {
                    parts.push((*kind, AssetRecord::external(urls.clone())));
                }
                Pending::Artifact {
                    kind,
                    output,
                    files,
                    urls,
                } => match self.place(package, *kind, output) {
                    Ok((file, url, placement)) => {
                        placed.push((output.as_path(), file.clone(), placement));
                        let mut urls = urls.clone();
                        urls.push(url);
                        let part = AssetRecord::compiled(file, files.clone(), urls)
                            .with_placement(placement);
                        parts.push((*kind, part));
                    }
                    Err(e) => {
                        for (output, file, placement) in &placed {
                            self.withdraw(output, file, *placement);
                        }
                        return Err(e);
                    }
                },
            }
        }
        Ok(parts)
    }

    fn withdraw(&self, output: &Path, file: &Path, placement: Placement) {
        let result: AssetPackResult<()> = match placement {
            Placement::Published => self.publisher.unpublish(output).map(drop).map_err(Into::into),
            Placement::BaseUrlCopy => self.fs.remove(file).map_err(Into::into),
        };
        if let Err(e) = result {
            tracing::warn!(file = %file.display(), "failed to withdraw placed artifact: {e}");
        }
    }

    /// Move the minified file to where it is served from
    fn place(
        &self,
        package: &Package,
        kind: AssetKind,
        output: &Path,
    ) -> AssetPackResult<(PathBuf, String, Placement)> {
        let base_url = package.trimmed_base_url().filter(|url| !url.is_empty());
        if let (AssetKind::Style, Some(base_url)) = (kind, base_url) {
            let file_name = output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let dest = self.options.web_root.join(base_url).join(&file_name);
            self.fs.copy(output, &dest)?;
            return Ok((dest, format!("/{base_url}/{file_name}"), Placement::BaseUrlCopy));
        }

        let published = self.publisher.publish(output)?;
        Ok((published.path, published.url, Placement::Published))
    }

    fn discard_outputs(&self, pending: &[Pending]) {
        for item in pending {
            if let Pending::Artifact { output, .. } = item {
                self.discard(output);
            }
        }
    }

    fn discard(&self, path: &Path) {
        if self.fs.exists(path) {
            if let Err(e) = self.fs.remove(path) {
                tracing::warn!(path = %path.display(), "failed to remove intermediate file: {e}");
            }
        }
    }

    /// URLs that serve `name`'s sources without compilation
    ///
    /// Local entries are served from the published `base_path` directory,
    /// else from `/<base_url>`, else from the web root.
    pub fn raw_urls(&self, name: &str) -> AssetPackResult<RawUrls> {
        let Some(package) = self.packages.get(name) else {
            return Ok(RawUrls::default());
        };

        let public_base = match (package.base_path(), package.trimmed_base_url()) {
            (Some(base_path), _) => self.publisher.publish(base_path)?.url,
            (None, Some(url)) if !url.is_empty() => format!("/{url}"),
            _ => String::new(),
        };

        let context = RegistrationContext::for_package(package, &self.options.web_root);
        Ok(RawUrls {
            scripts: context.raw_urls(AssetKind::Script, &public_base),
            styles: context.raw_urls(AssetKind::Style, &public_base),
            media: package.media().map(str::to_string),
        })
    }
}
