/// Example program to print the loaded configuration
///
/// Run with: cargo run -p segue-config --example print_config

fn main() {
    // Load configuration from segue.toml
    let config = segue_config::SegueConfig::load();

    println!("=== Segue Configuration ===\n");

    println!("Transition Settings:");
    println!("  Enabled: {}", config.transitions.enabled);
    println!("  Speed: {}", config.transitions.speed);
    println!();

    println!("Diagnostics Settings:");
    println!("  Log Transitions: {}", config.diagnostics.log_transitions);
    println!();

    // Try to serialize to TOML for verification
    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
