use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";

/// Keys every section of the bundled config must define as strings.
const REQUIRED: &[(&str, &[&str])] = &[
    ("paths", &["input", "output"]),
    ("markup", &["heading", "back_to_top", "image_style"]),
];

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_PATH);

    let content = fs::read_to_string(CONFIG_PATH)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", CONFIG_PATH, e));
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("{} is not valid TOML: {}", CONFIG_PATH, e));

    for (section, keys) in REQUIRED {
        let Some(section_table) = table.get(*section).and_then(|v| v.as_table()) else {
            panic!("{} is missing the [{}] table", CONFIG_PATH, section);
        };
        for key in *keys {
            match section_table.get(*key).and_then(|v| v.as_str()) {
                Some(value) if !value.is_empty() => {}
                _ => panic!("{}: [{}] {} must be a non-empty string", CONFIG_PATH, section, key),
            }
        }
    }
}
