use clap::Parser;
use ink_app::{Color, InkAppBuilder, StrokeStyle, SurfaceKind};

#[derive(Parser, Debug)]
#[command(about = "Draw freehand ink with the mouse or several fingers", long_about = None)]
struct Args {
    /// Drawing surface: `pen` follows one pointer, `multi-touch` one stroke per finger
    #[arg(long, short, default_value = "multi-touch")]
    surface: SurfaceKind,
    /// Stroke width in logical pixels
    #[arg(long, short = 'w', default_value_t = StrokeStyle::DEFAULT_WIDTH)]
    stroke_width: f32,
    /// Stroke color as `RRGGBB`
    #[arg(long, default_value = "1a237e", value_parser = parse_hex_color)]
    color: Color,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let hex = value.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("`{value}` is not a RRGGBB color"));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| format!("`{value}`: {err}"))
    };
    Ok(Color::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("=== Ink Desktop Example ===");
    println!("Draw with the left mouse button or touch input.");
    println!("  C / Backspace  clear the surface");
    println!("  P / M          switch to pen / multi-touch surface");
    println!("  D              dump surface state to the log (RUST_LOG=info)");
    println!();

    let result = InkAppBuilder::new()
        .title(format!("Ink ({})", args.surface))
        .size(args.width, args.height)
        .surface(args.surface)
        .stroke(StrokeStyle::new(args.color, args.stroke_width))
        .run();
    if let Err(err) = result {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            parse_hex_color("#ff0080"),
            Ok(Color::from_rgb_u8(255, 0, 128))
        );
        assert!(parse_hex_color("fff").is_err());
        assert!(parse_hex_color("gg0000").is_err());
    }

    #[test]
    fn surface_flag_accepts_variant_names() {
        let args = Args::parse_from(["ink-desktop-demo", "--surface", "pen", "-w", "2.5"]);
        assert_eq!(args.surface, SurfaceKind::Pen);
        assert_eq!(args.stroke_width, 2.5);
        assert_eq!(args.width, 800);
    }
}
