use std::path::Path;

use path_absolutize::Absolutize;

/// Path to display for `path`: relative to the working directory when it is
/// inside of it, absolute otherwise.
pub fn relativize_path(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    let absolute = match path.absolutize() {
        Ok(absolute) => absolute.into_owned(),
        Err(_) => return path.to_string_lossy().into_owned(),
    };

    let Ok(cwd) = std::env::current_dir() else {
        return absolute.to_string_lossy().into_owned();
    };

    match absolute.strip_prefix(&cwd) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => absolute.to_string_lossy().into_owned(),
    }
}

pub fn has_cs_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cs"))
}
