//! Cached image shader prim.
//!
//! An image shader is a screen-space shader configuration: an enable flag,
//! an ordering priority, the path of the shader's image or source file,
//! and a dictionary of constant overrides. The authored values live in the
//! scene source; this object caches them render-side and refreshes stale
//! ones through the [`Sprim`] sync protocol.

use ember_core::{PrimPath, Value, ValueDict};

use crate::{tokens, DirtyBits, SceneSource, Sprim};

/// Render-side cache of one image shader's parameters.
///
/// Accessors never reach back to the source and never fail; before the
/// first full sync they return the default-constructed value of each
/// attribute. A render backend must sync with
/// [`initial_dirty_bits`](Sprim::initial_dirty_bits) (or a superset)
/// before accessor results are meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageShader {
    path: PrimPath,
    enabled: bool,
    priority: i32,
    file_path: String,
    constants: ValueDict,
}

impl ImageShader {
    /// Create a shader cache with default-initialized attributes.
    pub fn new(path: PrimPath) -> Self {
        Self {
            path,
            enabled: false,
            priority: 0,
            file_path: String::new(),
            constants: ValueDict::new(),
        }
    }

    /// Whether the shader is active, as of the last sync.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Ordering key among image shaders, as of the last sync.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Resource locator of the shader's file, as of the last sync.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Constant overrides keyed by parameter name, as of the last sync.
    pub fn constants(&self) -> &ValueDict {
        &self.constants
    }
}

impl Sprim for ImageShader {
    fn path(&self) -> &PrimPath {
        &self.path
    }

    fn sync(&mut self, source: &dyn SceneSource, dirty_bits: &mut DirtyBits) {
        if dirty_bits.contains(DirtyBits::ENABLED) {
            if let Some(enabled) = fetch(source, &self.path, tokens::ENABLED, |v| v.as_bool()) {
                self.enabled = enabled;
                dirty_bits.remove(DirtyBits::ENABLED);
            }
        }

        if dirty_bits.contains(DirtyBits::PRIORITY) {
            if let Some(priority) = fetch(source, &self.path, tokens::PRIORITY, |v| v.as_int()) {
                self.priority = priority;
                dirty_bits.remove(DirtyBits::PRIORITY);
            }
        }

        if dirty_bits.contains(DirtyBits::FILE_PATH) {
            if let Some(file_path) =
                fetch(source, &self.path, tokens::FILE_PATH, Value::into_string)
            {
                self.file_path = file_path;
                dirty_bits.remove(DirtyBits::FILE_PATH);
            }
        }

        if dirty_bits.contains(DirtyBits::CONSTANTS) {
            if let Some(constants) =
                fetch(source, &self.path, tokens::CONSTANTS, Value::into_dict)
            {
                self.constants = constants;
                dirty_bits.remove(DirtyBits::CONSTANTS);
            }
        }
    }

    fn initial_dirty_bits(&self) -> DirtyBits {
        DirtyBits::all()
    }
}

/// Fetch one attribute from the source and convert it to its cached type.
///
/// `None` leaves the caller's dirty bit set: either the source missed
/// (debug, retried routinely) or the authored value has the wrong type
/// (warn, the content needs fixing).
fn fetch<T>(
    source: &dyn SceneSource,
    path: &PrimPath,
    attribute: &str,
    convert: impl FnOnce(Value) -> Option<T>,
) -> Option<T> {
    match source.get(path, attribute) {
        Some(value) => {
            let converted = convert(value);
            if converted.is_none() {
                log::warn!("{}: authored '{}' has an unexpected type", path, attribute);
            }
            converted
        }
        None => {
            log::debug!("{}: no value for '{}', will retry next sync", path, attribute);
            None
        }
    }
}
