use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brandkit_core::config::{self, BrandConfig};
use brandkit_core::convert::{self, ConvertOptions, Converter};
use brandkit_core::mobius::{self, Theme};
use brandkit_core::raster::banner::{HeaderBanner, WideBanner};
use brandkit_core::raster::favicon::{self, FaviconOptions};
use brandkit_core::raster::fonts::{self, FontFamily};
use brandkit_core::raster::{canvas, Background};
use brandkit_core::{BrandError, VERSION};
use clap::{Parser, Subcommand};
use image::DynamicImage;

#[derive(Parser, Debug)]
#[command(name = "brandkit", version = VERSION, about = "Brand image generators for the site")]
struct Cli {
    /// YAML file with defaults for every command
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug detail
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the Möbius strip icon as SVG
    Mobius {
        /// Rotation around the X axis in degrees
        #[arg(long, allow_negative_numbers = true)]
        rot_x: Option<f64>,
        /// Rotation around the Y axis in degrees
        #[arg(long, allow_negative_numbers = true)]
        rot_y: Option<f64>,
        /// Rotation around the Z axis in degrees
        #[arg(long, allow_negative_numbers = true)]
        rot_z: Option<f64>,
        /// Camera distance; larger draws a smaller strip
        #[arg(long)]
        distance: Option<f64>,
        /// dark or light
        #[arg(long, value_parser = parse_theme)]
        theme: Option<Theme>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rasterize the SVG icon into the logo PNG on black
    Logo {
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Convert an SVG to PNG with an external converter
    SvgToPng {
        #[arg(long)]
        svg: Option<PathBuf>,
        #[arg(long)]
        png: Option<PathBuf>,
        #[arg(long)]
        size: Option<u32>,
        /// black, white or transparent
        #[arg(long, value_parser = parse_background)]
        background: Option<Background>,
    },
    /// Square favicon on black from the logo PNG
    Favicon {
        #[arg(long)]
        logo: Option<PathBuf>,
        /// Header banner to crop from if the logo cannot be decoded
        #[arg(long)]
        banner: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Header banner: logo and wordmark on black
    Banner {
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        logo_size: Option<u32>,
        #[arg(long)]
        scale: Option<u32>,
        #[arg(long)]
        font: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
    },
    /// 4:1 banner: darkened logo and monospace wordmark on white
    WideBanner {
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
        /// Banner width in pixels; height is width / 4
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        scale: Option<u32>,
        #[arg(long)]
        font: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Load a config file and print the resolved settings
    Inspect {
        path: PathBuf,
        /// Print the whole config as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| e.to_string())
}

fn parse_background(s: &str) -> Result<Background, String> {
    s.parse::<Background>().map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn save_png(path: &Path, img: DynamicImage) -> Result<()> {
    let (w, h) = (img.width(), img.height());
    canvas::write_png(path, &img).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}x{} image to {}", w, h, path.display());
    Ok(())
}

fn run_convert(svg: &Path, png: &Path, opts: &ConvertOptions) -> Result<()> {
    match convert::convert(svg, png, opts) {
        Ok(used) => {
            println!("Converted {} to {} using {}", svg.display(), png.display(), used.program());
            Ok(())
        }
        Err(err @ BrandError::Exhausted { .. }) => {
            eprintln!("No SVG converter could be run. Install one of:");
            for c in Converter::chain() {
                eprintln!("  - {}", c.install_hint());
            }
            eprintln!("Or convert {} to {} by hand ({}x{}, {} background).", svg.display(), png.display(), opts.size, opts.size, opts.background);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_summary(cfg: &BrandConfig) {
    println!("  brand: {} ({})", cfg.brand.text, cfg.brand.title);
    let m = &cfg.mobius;
    println!(
        "  mobius: rot=({:.1}, {:.1}, {:.1}) distance={:.2} theme={} grid={}x{}",
        m.rot_x, m.rot_y, m.rot_z, m.distance, m.theme, m.u_steps, m.v_steps
    );
    println!("  banner: logo={}px scale={}x", cfg.banner.logo_size, cfg.banner.scale);
    println!("  wide banner: width={}px scale={}x", cfg.wide_banner.width, cfg.wide_banner.scale);
    println!("  favicon: {}px", cfg.favicon.size);
    println!("  convert: {}px on {}", cfg.convert.size, cfg.convert.background);
    println!("  logo svg: {}", cfg.paths.logo_svg.display());
    println!("  logo png: {}", cfg.paths.logo_png.display());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cfg = config::load_or_default(cli.config.as_deref())?;
    match &cli.config {
        Some(path) => log::debug!("config loaded from {}", path.display()),
        None => log::debug!("no config file, using defaults"),
    }

    match cli.cmd {
        Command::Mobius { rot_x, rot_y, rot_z, distance, theme, output } => {
            let mut params = cfg.mobius.clone();
            params.rot_x = rot_x.unwrap_or(params.rot_x);
            params.rot_y = rot_y.unwrap_or(params.rot_y);
            params.rot_z = rot_z.unwrap_or(params.rot_z);
            params.distance = distance.unwrap_or(params.distance);
            params.theme = theme.unwrap_or(params.theme);
            let out = output.unwrap_or(cfg.paths.logo_svg.clone());
            println!(
                "Generating Möbius strip: X={}°, Y={}°, Z={}°, distance={}, theme={}",
                params.rot_x, params.rot_y, params.rot_z, params.distance, params.theme
            );
            mobius::write_svg(&out, &params, &cfg.brand.labels())?;
            println!("Wrote {}", out.display());
        }
        Command::Logo { svg, output, size } => {
            let svg = svg.unwrap_or(cfg.paths.logo_svg.clone());
            let png = output.unwrap_or(cfg.paths.logo_png.clone());
            let opts = ConvertOptions { size: size.unwrap_or(cfg.convert.size), background: Background::Black };
            run_convert(&svg, &png, &opts)?;
        }
        Command::SvgToPng { svg, png, size, background } => {
            let svg = svg.unwrap_or(cfg.paths.logo_svg.clone());
            let png = png.unwrap_or(cfg.paths.logo_png.clone());
            let opts = ConvertOptions {
                size: size.unwrap_or(cfg.convert.size),
                background: background.unwrap_or(cfg.convert.background),
            };
            run_convert(&svg, &png, &opts)?;
        }
        Command::Favicon { logo, banner, output, size } => {
            let logo = logo.unwrap_or(cfg.paths.logo_png.clone());
            let banner = banner.unwrap_or(cfg.paths.banner.clone());
            let out = output.unwrap_or(cfg.paths.favicon.clone());
            let opts = FaviconOptions { size: size.unwrap_or(cfg.favicon.size) };
            let made = favicon::generate(&logo, Some(&banner), &opts)?;
            println!("Favicon source: {}", made.provider);
            save_png(&out, DynamicImage::ImageRgb8(made.value))?;
        }
        Command::Banner { logo, output, logo_size, scale, font, text } => {
            let logo_path = logo.unwrap_or(cfg.paths.logo_png.clone());
            let out = output.unwrap_or(cfg.paths.banner.clone());
            let text = text.unwrap_or(cfg.brand.text.clone());
            let mut opts: HeaderBanner = cfg.banner.clone();
            opts.logo_size = logo_size.unwrap_or(opts.logo_size);
            opts.scale = scale.unwrap_or(opts.scale);
            opts.font = font.or(opts.font.take());

            let logo = canvas::load_image(&logo_path, "logo PNG")?;
            let typeface = fonts::resolve(FontFamily::Sans, opts.font.as_deref());
            let img = opts.render(&logo, &text, &typeface)?;
            save_png(&out, DynamicImage::ImageRgb8(img))?;
        }
        Command::WideBanner { logo, output, width, scale, font, text } => {
            let logo_path = logo.unwrap_or(cfg.paths.logo_png.clone());
            let out = output.unwrap_or(cfg.paths.wide_banner.clone());
            let text = text.unwrap_or(cfg.brand.text.clone());
            let mut opts: WideBanner = cfg.wide_banner.clone();
            opts.width = width.unwrap_or(opts.width);
            opts.scale = scale.unwrap_or(opts.scale);
            opts.font = font.or(opts.font.take());

            let logo = canvas::load_image(&logo_path, "logo PNG")?;
            let typeface = fonts::resolve(FontFamily::Mono, opts.font.as_deref());
            let img = opts.render(&logo, &text, &typeface)?;
            save_png(&out, DynamicImage::ImageRgb8(img))?;
        }
        Command::Inspect { path, json } => {
            let loaded = config::load_from_path(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&loaded)?);
            } else {
                println!("Loaded config: {}", path.display());
                print_summary(&loaded);
            }
        }
    }
    Ok(())
}
