use std::collections::BTreeMap;

/// Environment that loaded keys are merged into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetEnv {
    /// The current process environment, through `std::env`.
    Process,
    /// An isolated in-memory map.
    Memory(BTreeMap<String, String>),
}

impl Default for TargetEnv {
    fn default() -> Self {
        TargetEnv::Memory(BTreeMap::new())
    }
}

impl TargetEnv {
    pub fn as_memory(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            TargetEnv::Memory(map) => Some(map),
            TargetEnv::Process => None,
        }
    }

    /// True when `key` is set at all, even to an empty value.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            TargetEnv::Process => std::env::var_os(key).is_some(),
            TargetEnv::Memory(map) => map.contains_key(key),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            TargetEnv::Process => {
                std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
            }
            TargetEnv::Memory(map) => map.get(key).cloned(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self {
            TargetEnv::Process => std::env::set_var(key, value),
            TargetEnv::Memory(map) => {
                map.insert(key.to_string(), value.to_string());
            }
        }
    }
}
