use std::path::Path;

use leadmerge_resolve::ChangeEntry;
use tracing::{debug, warn};

use crate::change_log::render_change_log;
use crate::config::IoConfig;
use crate::document::LeadsDocument;
use crate::error::{IoError, IoResult};

fn write_file(path: &Path, contents: &str) -> IoResult<()> {
    std::fs::write(path, contents).map_err(|source| IoError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// `document` as JSON indented by two spaces, with a trailing newline.
pub fn render_document(document: &LeadsDocument) -> IoResult<String> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the change log and then the lead document.
///
/// Both artifacts are rendered before either file is touched. If the
/// document cannot be written, the change log written just before it is
/// removed again so a failed run leaves neither file behind.
pub fn write_artifacts(
    config: &IoConfig,
    entries: &[ChangeEntry],
    document: &LeadsDocument,
) -> IoResult<()> {
    let log = render_change_log(entries, config.log_format)?;
    let output = render_document(document)?;

    write_file(&config.log_path, &log)?;
    debug!(path = %config.log_path.display(), entries = entries.len(), "wrote change log");

    if let Err(err) = write_file(&config.output_path, &output) {
        if let Err(cleanup) = std::fs::remove_file(&config.log_path) {
            warn!(
                path = %config.log_path.display(),
                error = %cleanup,
                "could not remove change log after failed output write"
            );
        }
        return Err(err);
    }
    debug!(path = %config.output_path.display(), leads = document.len(), "wrote lead document");
    Ok(())
}
