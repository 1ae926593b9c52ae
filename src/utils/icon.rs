use std::sync::OnceLock;

/// Path to the bundled application icon, materialized on first use.
///
/// Backends hand sessions an `icon_path` pointing at an image file; until
/// per-process icon extraction exists they all share this placeholder. The
/// file is written to the temp dir once per run and the path is cached, so
/// repeated polls don't touch the filesystem.
pub fn placeholder_icon_path() -> Option<String> {
    static PATH: OnceLock<Option<String>> = OnceLock::new();
    PATH.get_or_init(|| {
        let path = std::env::temp_dir().join("voldock-app-icon.png");
        std::fs::write(&path, include_bytes!("../../res/placeholder.png")).ok()?;
        Some(path.to_string_lossy().into_owned())
    })
    .clone()
}
