// PlantSafe - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PlantSafe";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PlantSafe";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Plant source files
// =============================================================================

/// File holding plants that are toxic to cats. Every record read from it
/// is marked toxic.
pub const TOXIC_FILE_NAME: &str = "plants_toxic_to_cats.txt";

/// File holding plants that are safe for cats.
pub const NONTOXIC_FILE_NAME: &str = "plants_nontoxic_to_cats.txt";

/// Field separator within a record line.
pub const FIELD_DELIMITER: char = '|';

/// Number of fields a record line must split into: name, other names,
/// scientific name, family. Any other count is a malformed line.
pub const RECORD_FIELD_COUNT: usize = 4;

// =============================================================================
// Images
// =============================================================================

/// Default directory probed for plant images (relative to the data dir).
pub const DEFAULT_IMAGES_DIR_NAME: &str = "images";

/// Image extensions probed in priority order. First match wins.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

// =============================================================================
// Display labels
// =============================================================================

/// Table column label for toxic plants.
pub const LABEL_TOXIC: &str = "Toxic";

/// Table column label for safe plants.
pub const LABEL_SAFE: &str = "Safe";

/// Detail view description for toxic plants.
pub const DESCRIPTION_TOXIC: &str = "Toxic to cats";

/// Detail view description for safe plants.
pub const DESCRIPTION_SAFE: &str = "Non-toxic to cats";

/// Placeholder shown in the detail view for an empty "other names" field.
pub const EMPTY_FIELD_PLACEHOLDER: &str = "-";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a source line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of plants that can be exported in a single operation.
pub const MAX_EXPORT_ENTRIES: usize = 1_000_000;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
