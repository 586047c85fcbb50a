//! Project-wide constants used across multiple modules.
//!
//! This module centralizes constant definitions to avoid duplication and ensure
//! consistency between the renderers, the decoder and the CLI.

/// Terminal width used when the real terminal cannot be queried
pub const DEFAULT_COLUMNS: u16 = 80;

/// Terminal height used when the real terminal cannot be queried
pub const DEFAULT_ROWS: u16 = 24;

/// Empty braille pattern (U+2800); dot bitmasks are added to this codepoint
pub const BRAILLE_BASE: u32 = 0x2800;

/// Glyph used by block mode for a filled bar cell
pub const BLOCK_GLYPH: char = '█';

/// Glyph used by block mode to mark a near-silent column
pub const SILENCE_GLYPH: char = '·';

/// Glyph for cells with nothing in them
pub const BLANK_GLYPH: char = ' ';

/// Supported audio file extensions
pub const AUDIO_EXTENSIONS: &[&str] = &["wav"];

/// Render mode used when neither the command line nor the config names one
pub const DEFAULT_MODE: &str = "braille";
