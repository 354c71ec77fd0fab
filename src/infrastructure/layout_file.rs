use crate::domain::Layout;
use std::fs;
use std::path::Path;

/// Loads and saves layout tables as JSON so alternate grids can be
/// swapped in without recompiling.
pub struct LayoutRepository;

impl LayoutRepository {
    pub fn save(layout: &Layout, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(layout)
            .map_err(|e| format!("Serialization failed: {}", e))?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Loads and validates a layout; malformed tables are rejected here
    /// rather than surfacing mid-session.
    pub fn load(path: impl AsRef<Path>) -> Result<Layout, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let layout: Layout =
            serde_json::from_str(&content).map_err(|e| format!("Invalid layout file - {}", e))?;
        layout.validate().map_err(|e| e.to_string())?;
        Ok(layout)
    }
}
