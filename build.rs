use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // Every batch entry needs both ends of the conversion
    if let Some(toml::Value::Array(documents)) = table.get("documents") {
        for (i, doc) in documents.iter().enumerate() {
            for key in ["input", "output"] {
                if doc.get(key).and_then(toml::Value::as_str).is_none() {
                    panic!("default_config.toml: documents[{}] is missing `{}`", i, key);
                }
            }
        }
    }
}
