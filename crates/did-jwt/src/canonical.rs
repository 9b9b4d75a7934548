use serde_json::Value;

/// Serialize a JSON value to its canonical byte form.
///
/// Signature integrity depends on byte-exact reproducibility, so two
/// value-equal objects must serialize identically regardless of the order
/// their keys were inserted in. Object keys are sorted by unicode codepoint
/// at every nesting level, arrays keep their order, and no whitespace is
/// emitted. The sort is done explicitly rather than relying on
/// `serde_json::Map` ordering, which flips with the `preserve_order`
/// feature.
pub fn canonicalize(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => {
            out.push(b'{');
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by_key(|(key, _)| *key);
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_string(key, out);
                out.push(b':');
                write_value(item, out);
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        Value::String(s) => write_string(s, out),
        // Numbers, booleans and null have a single serde_json rendering.
        other => out.extend_from_slice(other.to_string().as_bytes()),
    }
}

fn write_string(s: &str, out: &mut Vec<u8>) {
    // serde_json's escaping rules are the standard JSON ones; writing a
    // bare string to a Vec cannot fail.
    let _ = serde_json::to_writer(&mut *out, s);
}
