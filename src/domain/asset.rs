//! Asset directory entries: display metadata keyed by asset id.

/// Display metadata for one asset, as supplied by the asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    pub symbol: String,
    pub name: String,
}
