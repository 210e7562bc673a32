use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::{icon_gen, ComposerSettings, Design, Style};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Generate PWA icons with custom styles"
)]
struct Args {
    /// Text to display
    #[clap(short, long, default_value = "M")]
    text: String,

    /// Color style
    #[clap(short, long, value_enum, default_value_t = Style::Gradient)]
    style: Style,

    /// Icon design
    #[clap(short, long, value_enum, default_value_t = Design::Circular)]
    design: Design,

    /// Icon sizes to generate
    #[clap(
        long,
        num_args = 1..,
        value_name = "SIZE",
        default_values_t = [192, 512],
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./public")]
    output: PathBuf,

    /// Gradient start color, overriding the style (CSS color format)
    #[clap(long, value_name = "COLOR")]
    start: Option<String>,

    /// Gradient end color, overriding the style (CSS color format)
    #[clap(long, value_name = "COLOR")]
    end: Option<String>,

    /// Font file to try before the built-in candidate list
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// JSON file overriding composer settings
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let palette = args
        .style
        .palette()
        .with_overrides(args.start.as_deref(), args.end.as_deref())?;
    let settings = match &args.config {
        Some(path) => ComposerSettings::from_file(path)?,
        None => ComposerSettings::default(),
    };

    println!(
        "Generating {} icons with {} style...",
        args.design, args.style
    );
    println!("{}", "-".repeat(50));

    icon_gen::generate_icons(icon_gen::Args {
        text: args.text,
        palette,
        design: args.design,
        sizes: args.sizes,
        output: args.output,
        font: args.font,
        settings,
    })?;

    println!("{}", "-".repeat(50));
    println!("✓ All icons generated successfully!");

    println!("\nTips:");
    println!("  - Try different styles: --style green|red|orange|pink|dark");
    println!("  - Try different designs: --design rounded|minimal|radial");
    println!("  - Change text: --text 'Your Text'");
    println!("  - Add more sizes: --sizes 72 96 128 144 192 512");
    Ok(())
}
