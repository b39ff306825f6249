use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds the `ignore::Walk` used by the scanner.
///
/// Every file under the root is visible: ignore files and hidden-file rules
/// are disabled, symbolic links are not followed, and entries are yielded in
/// file-name order so scans are deterministic.
pub(super) fn build_walker(root: &Path) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!(
        "Configuring WalkBuilder for {}: standard_filters disabled, sorted by file name.",
        root.display()
    );
    walker_builder.build()
}
