use provgen_core::ProvDocument;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(ProvDocument);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
