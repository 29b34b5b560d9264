//! `relnotes sections` — Show the changelog sections in effect.

use std::path::Path;

use relnotes_config::AppConfig;

use super::load_config;

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let registry = config.registry();

    let source = if registry.is_default() {
        "built-in defaults"
    } else {
        "custom"
    };
    println!("Changelog sections ({}, {source}):\n", registry.len());
    for (i, section) in registry.iter().enumerate() {
        let labels: Vec<&str> = section.labels.iter().map(String::as_str).collect();
        if labels.is_empty() {
            println!("  {}. {} (no labels, never matches)", i + 1, section.title);
        } else {
            println!("  {}. {} [{}]", i + 1, section.title, labels.join(", "));
        }
    }

    if registry.is_default() {
        println!("\nOverride in relnotes.toml:\n");
        for line in AppConfig::sample_toml().lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
