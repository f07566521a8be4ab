//! Standalone demo: reformats each argument in every dialect.
//!
//! ```text
//! RUST_LOG=picker_core=trace cargo run --example basic -- '#3b82f6' 'hsl(360,100%,50%)' nope
//! ```

use picker_core::{format, parse, text_tone, Dialect, PickerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = PickerConfig::default();
    for arg in std::env::args().skip(1) {
        match parse(&arg) {
            Ok(color) => {
                let forms: Vec<String> = [Dialect::Hex, Dialect::Rgb, Dialect::Hsl]
                    .into_iter()
                    .map(|d| format(color, d))
                    .collect();
                println!("{arg}: {} (text: {:?})", forms.join("  "), text_tone(color));
            }
            Err(err) => println!("{arg}: {err}, using {}", config.reformat(&arg)),
        }
    }
}
