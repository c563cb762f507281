use liquid::model::Value as LiquidValue;
use serde_yaml::{Mapping, Value as YamlValue};

use crate::front_matter::metadata::scalar_to_string;

/// Convert YAML value to Liquid value
pub fn yaml_to_liquid(yaml: YamlValue) -> LiquidValue {
    match yaml {
        YamlValue::Null => LiquidValue::Nil,
        YamlValue::Bool(b) => LiquidValue::scalar(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                LiquidValue::scalar(i)
            } else if let Some(f) = n.as_f64() {
                LiquidValue::scalar(f)
            } else {
                // u64 beyond i64, keep the digits
                LiquidValue::scalar(n.to_string())
            }
        }
        YamlValue::String(s) => LiquidValue::scalar(s),
        YamlValue::Sequence(seq) => {
            LiquidValue::Array(seq.into_iter().map(yaml_to_liquid).collect())
        }
        YamlValue::Mapping(map) => LiquidValue::Object(mapping_to_liquid(map)),
        YamlValue::Tagged(tagged) => yaml_to_liquid(tagged.value),
    }
}

/// Convert a YAML mapping to a Liquid object.
///
/// Scalar keys use their string form; other keys use their debug form.
pub fn mapping_to_liquid(map: Mapping) -> liquid::Object {
    let mut obj = liquid::Object::new();
    for (k, v) in map {
        let key = scalar_to_string(&k).unwrap_or_else(|| format!("{:?}", k));
        obj.insert(key.into(), yaml_to_liquid(v));
    }
    obj
}
