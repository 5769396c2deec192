//! Request options
//!
//! Every call travels with one flat key-value map assembled fresh per
//! request: provider defaults first, deployment-level configuration on top,
//! per-call overrides last. Values are plain JSON so provider-specific
//! extras (Gemini's nested `generationConfig`, DeepL's form fields) ride in
//! the same structure as the common parameters.
//!
//! Keys are camelCase (`apiKey`, `maxTokens`, `topP`, ...) except for DeepL,
//! whose options double as its snake_case form fields. Adapters own the
//! renaming to each wire format.

use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

use crate::utils::masking::mask_api_key;

/// Flat per-request options map with typed accessors
#[derive(Clone, Default)]
pub struct RequestOptions(Map<String, Value>);

impl RequestOptions {
    /// Assemble the effective options for one call: `defaults` ⊕ `layers`,
    /// later layers winning. Maps merge key-wise; scalars and arrays replace
    /// wholesale. A flat override key that only exists inside the default
    /// `generationConfig` sub-map is routed into that sub-map, so callers
    /// can say `{"temperature": 0.2}` without knowing where a provider
    /// nests it.
    pub fn merged(defaults: Value, layers: &[&Value]) -> Self {
        let mut base = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for layer in layers {
            if let Value::Object(overlay) = layer {
                apply_layer(&mut base, overlay);
            }
        }
        Self(base)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value at `key` unless it is "empty" in the loose sense the wire
    /// builders use for optional fields: null, `""`, `[]`, `{}`, `0`, `0.0`
    /// or `false` all count as absent.
    pub fn non_empty(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !is_empty_value(v))
    }

    pub fn str_opt(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn f64_opt(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn u64_opt(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn bool_opt(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn model(&self) -> &str {
        self.str_opt("model").unwrap_or_default()
    }

    pub fn set_model(&mut self, model: &str) {
        self.0
            .insert("model".to_string(), Value::String(model.to_string()));
    }

    pub fn api_key(&self) -> &str {
        self.str_opt("apiKey").unwrap_or_default()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.str_opt("baseUrl")
    }

    /// Fragment size for providers that fake streaming by re-chunking
    pub fn chunk_size(&self) -> usize {
        self.u64_opt("chunkSize").map(|v| v as usize).unwrap_or(50)
    }

    /// Retry/fallback budget for one logical request
    pub fn max_retries(&self) -> u32 {
        self.u64_opt("maxRetries").map(|v| v as u32).unwrap_or(5)
    }

    /// Comma-separated fallback model list, raw
    pub fn fallback_models(&self) -> &str {
        self.str_opt("fallbackModels").unwrap_or_default()
    }

    /// Per-request timeout in seconds, when configured
    pub fn timeout(&self) -> Option<Duration> {
        self.u64_opt("timeout").map(Duration::from_secs)
    }

    /// Logging copy with the API key masked. Every structured log entry
    /// that carries options must use this, never the raw map.
    pub fn masked(&self) -> Value {
        let mut map = self.0.clone();
        if let Some(Value::String(key)) = map.get("apiKey") {
            let masked = mask_api_key(key);
            map.insert("apiKey".to_string(), Value::String(masked));
        }
        Value::Object(map)
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug output may end up in logs; show the masked form only.
        write!(f, "RequestOptions({})", self.masked())
    }
}

fn apply_layer(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match base.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                // Route flat keys into a nested generationConfig default
                // before falling back to a top-level insert.
                let nested = base
                    .get_mut("generationConfig")
                    .and_then(Value::as_object_mut)
                    .filter(|cfg| cfg.contains_key(key));
                if let Some(cfg) = nested {
                    cfg.insert(key.clone(), value.clone());
                } else {
                    base.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}
