use serde::Serialize;
use serde_json::{Map, Value, json};

/// Converts a schemars root schema into the shape Gemini strict mode accepts:
/// every `$ref` inlined from `definitions`, metadata keywords stripped.
pub fn clean_schema<T: Serialize>(root: T) -> serde_json::Result<Value> {
    let mut root_val = serde_json::to_value(root)?;

    let definitions = root_val
        .get("definitions")
        .or_else(|| root_val.get("$defs"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    inline_node(&mut root_val, &definitions, 0);

    if let Value::Object(map) = &mut root_val {
        map.remove("$schema");
        map.remove("title");
        map.remove("definitions");
        map.remove("$defs");
    }

    Ok(root_val)
}

fn inline_node(node: &mut Value, definitions: &Map<String, Value>, depth: usize) {
    // Recursion guard for pathological schemas.
    if depth > 20 {
        *node = json!({ "type": "object" });
        return;
    }

    // Resolve $ref first; a definition may itself be another ref.
    let mut hops = 0;
    while let Some(target) = node
        .as_object()
        .and_then(|m| m.get("$ref"))
        .and_then(Value::as_str)
        .map(str::to_owned)
    {
        hops += 1;
        if hops > 10 {
            break;
        }
        let def_name = target.rsplit('/').next().unwrap_or_default();
        match definitions.get(def_name) {
            Some(def) => *node = def.clone(),
            None => {
                *node = json!({ "type": "object", "description": "Unresolvable reference" });
                break;
            }
        }
    }

    if let Value::Object(map) = node {
        // Strict mode rejects these keywords.
        map.remove("$ref");
        map.remove("$schema");
        map.remove("title");
        map.remove("additionalProperties");
        map.remove("default");
        map.remove("examples");

        if let Some(Value::Object(props)) = map.get_mut("properties") {
            for val in props.values_mut() {
                inline_node(val, definitions, depth + 1);
            }
        }

        if let Some(items) = map.get_mut("items") {
            inline_node(items, definitions, depth + 1);
        }
    }
}
