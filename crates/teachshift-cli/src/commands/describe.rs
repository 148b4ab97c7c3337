use teachshift_core::{DescriptionParser, PositionalParser};

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = PositionalParser.parse(text);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}
