/// User actions, one variant per button/menu entry. Each dispatch maps
/// to a single history operation followed by a display refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick a new image and append it to the history.
    Upload,

    /// Pick a new image and overwrite the current history entry.
    Replace,

    /// Remove the current history entry.
    Delete,

    /// Step the cursor back one image.
    Previous,

    /// Step the cursor forward one image.
    Next,
}
