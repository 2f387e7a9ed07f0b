use anyhow::{bail, Context, Result};
use std::io::Read;
use tracing::{info, Level};

use dynamodb_attr_codec::{deserialize_value, logging, serialize_value, Value};

/// Reads a JSON document from stdin and converts it across the attribute
/// value wire format.
///
/// - `encode`: treat the document as a native value and print its tagged
///   wire form.
/// - `decode`: treat the document as wire data (tagged, partially tagged,
///   or plain) and print the decoded native value as JSON.
fn main() -> Result<()> {
    logging::init_logging(Level::DEBUG)?;

    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "encode".to_owned());

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    let document: serde_json::Value =
        serde_json::from_str(&input).context("parsing input as JSON")?;
    let value = Value::from(document);

    let output = match mode.as_str() {
        "encode" => {
            let encoded = serialize_value(value);
            info!("encoded one value as tag '{}'", encoded.tag());
            serde_json::to_value(&encoded).context("rendering wire form")?
        }
        "decode" => {
            let decoded = deserialize_value(value)?;
            info!("decoded one value to kind '{}'", decoded.kind());
            serde_json::Value::from(decoded)
        }
        other => bail!("unknown mode '{other}', expected 'encode' or 'decode'"),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
