//! Inline preview of a locally selected image

use crate::platform;
use crate::state::PostForm;
use std::path::Path;

/// Read the file at `path` as a data URL. Read failures are logged and
/// produce no preview. File size is not limited.
pub async fn read_preview(path: &Path) -> Option<String> {
    match platform::read_data_url(path).await {
        Ok(data_url) => Some(data_url),
        Err(err) => {
            tracing::error!("Failed to read image {}: {err}", path.display());
            None
        }
    }
}

/// Show a finished preview of `path`. Dropped when the form no longer
/// names that file.
pub fn apply_preview(form: &mut PostForm, path: &Path, data_url: String) -> bool {
    if selected_file(form) != Some(path) {
        tracing::debug!("Discarding stale preview of {}", path.display());
        return false;
    }
    form.preview.show(data_url);
    true
}

/// The file selected in the form's image field, if any
pub fn selected_file(form: &PostForm) -> Option<&Path> {
    let path = form.image.as_text().trim();
    if path.is_empty() {
        None
    } else {
        Some(Path::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Read the form's selected file and show it as the preview
    async fn preview_selected(form: &mut PostForm) -> bool {
        let Some(path) = selected_file(form).map(Path::to_path_buf) else {
            return false;
        };
        match read_preview(&path).await {
            Some(data_url) => apply_preview(form, &path, data_url),
            None => false,
        }
    }

    fn create_test_form() -> PostForm {
        PostForm::new(Vec::new(), Vec::new(), Vec::new(), "")
    }

    #[tokio::test]
    async fn test_preview_selected_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        let mut form = create_test_form();
        form.image.set_text(path.to_string_lossy().into_owned());

        assert!(preview_selected(&mut form).await);
        assert!(form.preview.visible);
        assert_eq!(form.preview.src.as_deref(), Some("data:image/png;base64,AQID"));
    }

    #[tokio::test]
    async fn test_no_file_selected_is_noop() {
        let mut form = create_test_form();
        assert!(!preview_selected(&mut form).await);
        assert!(!form.preview.visible);
    }

    #[tokio::test]
    async fn test_unreadable_file_shows_nothing() {
        let mut form = create_test_form();
        form.image.set_text("/nonexistent/photo.png");
        assert!(!preview_selected(&mut form).await);
        assert!(form.preview.src.is_none());
    }

    #[test]
    fn test_preview_for_replaced_file_is_dropped() {
        let mut form = create_test_form();
        form.image.set_text("/tmp/b.png");
        let applied = apply_preview(
            &mut form,
            Path::new("/tmp/a.png"),
            "data:image/png;base64,AQID".to_string(),
        );
        assert!(!applied);
        assert!(!form.preview.visible);
    }

    #[test]
    fn test_selected_file_trims_path() {
        let mut form = create_test_form();
        form.image.set_text("  /tmp/a.png ");
        assert_eq!(selected_file(&form), Some(Path::new("/tmp/a.png")));
    }
}
