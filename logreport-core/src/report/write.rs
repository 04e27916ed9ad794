use crate::analyze::ReportRow;
use crate::report::error::RenderError;
use crate::report::template::render_template;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Render `rows` into the template at `template_path` and write the result to
/// `report_path`, creating the report directory when needed.
///
/// The report is written to a temporary file beside the target and renamed
/// into place, so a failed run never leaves a partial report behind.
pub fn write_report(
    template_path: &Path,
    report_path: &Path,
    rows: &[ReportRow],
) -> Result<(), RenderError> {
    let template = fs::read_to_string(template_path).map_err(|e| RenderError::ReadTemplate {
        path: template_path.to_path_buf(),
        source: e,
    })?;

    let table_json = serde_json::to_string(rows)?;
    let html = render_template(&template, &table_json);

    let report_dir = match report_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(report_dir).map_err(|e| RenderError::CreateDir {
        path: report_dir.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: std::io::Error| RenderError::Write {
        path: report_path.to_path_buf(),
        source: e,
    };

    let mut tmp = report_tempfile(report_dir).map_err(write_err)?;
    tmp.write_all(html.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(report_path).map_err(|e| write_err(e.error))?;

    tracing::info!(report = %report_path.display(), rows = rows.len(), "report written");
    Ok(())
}

/// Temp file for the report, created with the mode a plain `File::create`
/// would get (0o666 less the umask) so the persisted report stays readable.
#[cfg(unix)]
fn report_tempfile(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .prefix(".report")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn report_tempfile(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".report").tempfile_in(dir)
}
