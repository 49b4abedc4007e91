//! Resource pack archive: the transliterated language file plus the pack
//! descriptor and icon, copied through unchanged.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use latynka_core::settings::PackSettings;
use latynka_core::{DocumentError, TranslationDocument};

/// Pack descriptor used when `pack.metadata_file` is unset.
pub const DEFAULT_METADATA: &[u8] = include_bytes!("../resources/pack.mcmeta");
/// Pack icon used when `pack.icon_file` is unset.
pub const DEFAULT_ICON: &[u8] = include_bytes!("../resources/pack.png");

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read {}: {source}", path.display())]
    Asset { path: PathBuf, source: io::Error },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("serialization error: {0}")]
    Document(#[from] DocumentError),
}

/// The file at `path` when configured, otherwise the embedded bytes.
fn read_asset(
    path: Option<&Path>,
    embedded: &'static [u8],
) -> Result<Cow<'static, [u8]>, PackError> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(embedded));
    };
    fs::read(path)
        .map(Cow::Owned)
        .map_err(|source| PackError::Asset {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the pack archive into `writer` and return it once finalized.
pub fn write_pack<W: Write + Seek>(
    writer: W,
    document: &TranslationDocument,
    pack: &PackSettings,
) -> Result<W, PackError> {
    let json = document.to_pretty_json()?;
    let metadata = read_asset(pack.metadata_file.as_deref(), DEFAULT_METADATA)?;
    let icon = read_asset(pack.icon_file.as_deref(), DEFAULT_ICON)?;

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);
    for (name, bytes) in [
        (pack.language_entry.as_str(), json.as_bytes()),
        (pack.metadata_entry.as_str(), &*metadata),
        (pack.icon_entry.as_str(), &*icon),
    ] {
        debug!(name, bytes = bytes.len(), "adding archive entry");
        zip.start_file(name, options)?;
        zip.write_all(bytes)?;
    }
    Ok(zip.finish()?)
}

/// Create the archive at `pack.output`, replacing any existing one.
///
/// The archive is built in a temporary file next to the output and renamed
/// over it only once complete, so a failure leaves the previous file intact.
pub fn create_pack(document: &TranslationDocument, pack: &PackSettings) -> Result<(), PackError> {
    let dir = match pack.output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let file: &mut File = tmp.as_file_mut();
        let mut writer = write_pack(BufWriter::new(file), document, pack)?;
        writer.flush()?;
    }
    tmp.persist(&pack.output).map_err(|e| PackError::Io(e.error))?;
    Ok(())
}
