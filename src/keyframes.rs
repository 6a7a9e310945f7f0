//! Keyframes registration.
//!
//! Animation rules reference keyframes by name. [`KeyframesRegistry`] turns a
//! keyframe definition into a stable name derived from its content, storing
//! each distinct definition once no matter how often it is registered.
//!
//! The engine writes to a process-wide registry (see [`global`]) that lives
//! for the whole process. Hosts that reinitialize their styling runtime (for
//! example on hot reload) may call [`KeyframesRegistry::clear`]; the engine
//! itself never does.

use std::fmt::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tracing::{trace, warn};

use crate::declarations::Declarations;

const NAME_PREFIX: &str = "animation-";
const HASH_LEN: usize = 8;
/// Digest prefix lengths tried in turn when a shorter name is already taken
/// by a different definition.
const NAME_LENGTHS: [usize; 3] = [HASH_LEN, 16, 40];

static KEYFRAMES: Lazy<KeyframesRegistry> = Lazy::new(KeyframesRegistry::new);

/// The process-wide keyframes registry used by [`crate::StyleEngine::new`].
pub fn global() -> &'static KeyframesRegistry {
    &KEYFRAMES
}

/// Registers `keyframes` with the process-wide registry and returns its name.
///
/// # Example
///
/// ```rust
/// use tincture::{keyframes, Declarations};
///
/// let fade = Declarations::new()
///     .with("from", Declarations::new().with("opacity", 0))
///     .with("to", Declarations::new().with("opacity", 1));
///
/// let name = keyframes::register(&fade);
/// assert!(name.starts_with("animation-"));
/// assert_eq!(keyframes::register(&fade), name);
/// ```
pub fn register(keyframes: &Declarations) -> String {
    KEYFRAMES.register(keyframes)
}

/// Write-once table of keyframe definitions keyed by generated name.
#[derive(Debug, Default)]
pub struct KeyframesRegistry {
    entries: Mutex<IndexMap<String, Declarations>>,
}

impl KeyframesRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, returning its stable name.
    ///
    /// Equal definitions produce the same name and are stored once.
    pub fn register(&self, keyframes: &Declarations) -> String {
        self.register_digest(keyframes, &digest(keyframes))
    }

    fn register_digest(&self, keyframes: &Declarations, digest: &str) -> String {
        let mut entries = self.lock();
        let mut name = String::new();

        for len in NAME_LENGTHS {
            name = format!("{}{}", NAME_PREFIX, &digest[..len.min(digest.len())]);
            match entries.get(&name) {
                Some(existing) if existing == keyframes => return name,
                Some(_) => warn!(name = %name, "keyframes name collision, lengthening name"),
                None => {
                    trace!(name = %name, "registering keyframes");
                    entries.insert(name.clone(), keyframes.clone());
                    return name;
                }
            }
        }

        warn!(name = %name, "keyframes digest collision, keeping the first definition");
        name
    }

    /// Returns the definition registered under `name`.
    pub fn get(&self, name: &str) -> Option<Declarations> {
        self.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every registration.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Renders every registered definition as an `@keyframes` rule.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_css(&mut out);
        out
    }

    /// Writes the rules produced by [`to_css`](Self::to_css) into `dest`.
    pub fn write_css<W: Write>(&self, dest: &mut W) -> fmt::Result {
        for (name, keyframes) in self.lock().iter() {
            keyframes.write_keyframes(name, dest)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Declarations>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Hex SHA-1 of the serialized definition, which is deterministic because
/// declarations keep insertion order.
fn digest(keyframes: &Declarations) -> String {
    let content = serde_json::to_string(keyframes).unwrap_or_default();
    sha1_smol::Sha1::from(content).digest().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn fade() -> Declarations {
        Declarations::new()
            .with("from", Declarations::new().with("opacity", 0))
            .with("to", Declarations::new().with("opacity", 1))
    }

    fn spin() -> Declarations {
        Declarations::new()
            .with("from", Declarations::new().with("transform", "rotate(0deg)"))
            .with("to", Declarations::new().with("transform", "rotate(360deg)"))
    }

    #[test]
    fn test_register_is_idempotent() {
        let registry = KeyframesRegistry::new();
        let first = registry.register(&fade());
        for _ in 0..10 {
            assert_eq!(registry.register(&fade()), first);
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&first), Some(fade()));
    }

    #[test]
    fn test_distinct_definitions_get_distinct_names() {
        let registry = KeyframesRegistry::new();
        let a = registry.register(&fade());
        let b = registry.register(&spin());
        assert_ne!(a, b);
        assert_eq!(registry.names(), vec![a, b]);
    }

    #[test]
    fn test_name_shape() {
        let name = KeyframesRegistry::new().register(&fade());
        assert!(name.starts_with(NAME_PREFIX));
        assert_eq!(name.len(), NAME_PREFIX.len() + HASH_LEN);
        assert!(digest(&fade()).starts_with(&name[NAME_PREFIX.len()..]));
    }

    #[test]
    fn test_short_name_collision_lengthens_name() {
        let registry = KeyframesRegistry::new();
        let shared = "0123456789abcdef0123456789abcdef01234567";
        let spin_digest = "0123456789abcdefffffffffffffffffffffffff";

        let first = registry.register_digest(&fade(), shared);
        let second = registry.register_digest(&spin(), spin_digest);

        assert_eq!(first, "animation-01234567");
        assert_eq!(second, "animation-0123456789abcdef");
        assert_eq!(registry.get(&first), Some(fade()));
        assert_eq!(registry.get(&second), Some(spin()));

        // Re-registering either definition finds its own entry.
        assert_eq!(registry.register_digest(&spin(), spin_digest), second);
        assert_eq!(registry.register_digest(&fade(), shared), first);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_full_digest_collision_keeps_earlier_definitions() {
        let registry = KeyframesRegistry::new();
        let shared = "0123456789abcdef0123456789abcdef01234567";
        let pulse = Declarations::new()
            .with("50%", Declarations::new().with("opacity", 0.5));
        let blink = Declarations::new()
            .with("50%", Declarations::new().with("visibility", "hidden"));

        registry.register_digest(&fade(), shared);
        registry.register_digest(&spin(), shared);
        let full = registry.register_digest(&pulse, shared);
        assert_eq!(full, format!("{}{}", NAME_PREFIX, shared));

        assert_eq!(registry.register_digest(&blink, shared), full);
        assert_eq!(registry.get(&full), Some(pulse));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_to_css() {
        let registry = KeyframesRegistry::new();
        let name = registry.register(&fade());
        assert_eq!(
            registry.to_css(),
            format!("@keyframes {}{{from{{opacity:0;}}to{{opacity:1;}}}}", name)
        );
    }

    #[test]
    fn test_clear() {
        let registry = KeyframesRegistry::new();
        registry.register(&fade());
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    #[serial]
    fn test_global_registry_dedupes() {
        let before = global().len();
        let name = register(&spin());
        let after_first = global().len();
        register(&spin());
        assert!(global().contains(&name));
        assert_eq!(global().len(), after_first);
        assert!(after_first <= before + 1);
    }
}
