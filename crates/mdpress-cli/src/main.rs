use anyhow::Result;
use mdpress_config::{CONFIG_FILE_NAME, Config};
use mdpress_engine::io;
use mdpress_engine::site;
use std::{env, path::Path, process};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Project config with conventional defaults; CLI argument overrides
    // the base path (useful for repo-subpath hosting).
    let mut config = match Config::load(Path::new(".")) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: failed to load {CONFIG_FILE_NAME}: {e}");
            process::exit(1);
        }
    };

    match args.len() {
        1 => {}
        2 => config.base_path = args[1].clone(),
        _ => {
            eprintln!("Usage: {} [base-path]", args[0]);
            process::exit(1);
        }
    }

    println!("Using base path: {}", config.base_path);

    if let Err(e) = io::validate_dir(&config.content_dir) {
        eprintln!(
            "Error: content directory '{}' is invalid: {e}",
            config.content_dir.display()
        );
        process::exit(1);
    }

    println!(
        "Copying static files from {} to {}...",
        config.static_dir.display(),
        config.output_dir.display()
    );
    io::copy_dir_contents(&config.static_dir, &config.output_dir)?;

    let generated = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )?;

    for page in &generated {
        println!("Generated: {}", page.to_path(&config.output_dir).display());
    }
    println!("Site generation complete: {} pages", generated.len());

    Ok(())
}
