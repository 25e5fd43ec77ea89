use std::io::{self, Write};

use anyhow::Context;
use log::info;

use cursed_fractal::{ColorScheme, RenderConfig, generate, show};

fn read_input() -> anyhow::Result<String> {
    print!("Enter your Jujutsu Kaisen inspired input (name or number): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input from stdin")?;

    // Only the line terminator is dropped; surrounding spaces are part of the input.
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = read_input()?;
    let generation = generate(&input, &RenderConfig::default(), &ColorScheme::default());
    info!("palette: {:?}", generation.palette_source);

    show(&generation)
}
