//! carden CLI entry point.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use carden::{
    Align, BorderStyle, BoxRenderer, CustomGlyphs, FixedColumns, Float, RegionOverride,
    RenderConfig, Renderer, Spacing, border_styles,
};

/// Draw a header and a content block in one bordered box.
#[derive(Parser, Debug)]
#[command(name = "carden", version = env!("CARDEN_VERSION"), about)]
struct Cli {
    /// Header text (a literal `\n` starts a new line)
    #[arg(required_unless_present = "list_styles")]
    header: Option<String>,

    /// Content text (reads from stdin if not provided)
    content: Option<String>,

    /// Padding inside the border: `n` or `top,right,bottom,left`
    #[arg(short = 'p', long)]
    padding: Option<Spacing>,

    /// Margin outside the border: `n` or `top,right,bottom,left`
    #[arg(short = 'm', long)]
    margin: Option<Spacing>,

    /// Border style: a preset name, `none` or `blank`
    #[arg(short = 'b', long)]
    border_style: Option<BorderStyle>,

    /// Custom border glyphs: `topLeft=+,topRight=+,bottomLeft=+,bottomRight=+,horizontal=-,vertical=|`
    #[arg(long, conflicts_with = "border_style")]
    border_glyphs: Option<CustomGlyphs>,

    /// Border color: a color name or `#rgb` / `#rrggbb`
    #[arg(long)]
    border_color: Option<String>,

    /// Background color: a color name or `#rgb` / `#rrggbb`
    #[arg(long)]
    background_color: Option<String>,

    /// Dim the border: `--dim-border` or `--dim-border=false`
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    dim_border: Option<bool>,

    /// Text alignment: left, center, right
    #[arg(short = 'a', long)]
    align: Option<Align>,

    /// Box placement: left, center, right
    #[arg(short = 'f', long, default_value = "left")]
    float: Float,

    #[arg(long)]
    header_border_style: Option<BorderStyle>,
    #[arg(long)]
    header_border_color: Option<String>,
    #[arg(long)]
    header_background_color: Option<String>,
    #[arg(long)]
    header_padding: Option<Spacing>,
    #[arg(long)]
    header_align: Option<Align>,
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    header_dim_border: Option<bool>,

    #[arg(long)]
    content_border_style: Option<BorderStyle>,
    #[arg(long)]
    content_border_color: Option<String>,
    #[arg(long)]
    content_background_color: Option<String>,
    #[arg(long)]
    content_padding: Option<Spacing>,
    #[arg(long)]
    content_align: Option<Align>,
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    content_dim_border: Option<bool>,

    /// Terminal width to place the box against (detected if not provided)
    #[arg(long)]
    columns: Option<usize>,

    /// List the named border styles and exit
    #[arg(long)]
    list_styles: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Log layout decisions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RenderConfig {
        let border_style = match &self.border_glyphs {
            Some(glyphs) => Some(BorderStyle::Custom(glyphs.clone())),
            None => self.border_style.clone(),
        };
        RenderConfig {
            padding: self.padding,
            margin: self.margin,
            border_style,
            border_color: self.border_color.clone(),
            background_color: self.background_color.clone(),
            dim_border: self.dim_border,
            align: self.align,
            float: self.float,
            header: region(
                &self.header_border_style,
                &self.header_border_color,
                &self.header_background_color,
                self.header_padding,
                self.header_align,
                self.header_dim_border,
            ),
            content: region(
                &self.content_border_style,
                &self.content_border_color,
                &self.content_background_color,
                self.content_padding,
                self.content_align,
                self.content_dim_border,
            ),
        }
    }
}

fn region(
    border_style: &Option<BorderStyle>,
    border_color: &Option<String>,
    background_color: &Option<String>,
    padding: Option<Spacing>,
    align: Option<Align>,
    dim_border: Option<bool>,
) -> Option<RegionOverride> {
    let overrides = RegionOverride {
        border_style: border_style.clone(),
        padding,
        align,
        border_color: border_color.clone(),
        background_color: background_color.clone(),
        dim_border,
    };
    (overrides != RegionOverride::default()).then_some(overrides)
}

/// Turn literal `\n` sequences typed on the command line into line breaks.
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn init_logging(verbose: bool) {
    let default = if verbose { "carden=debug" } else { "carden=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn list_styles() -> String {
    border_styles()
        .into_iter()
        .map(|(name, g)| {
            format!(
                "{:<14}{}{}{}{}{}{}",
                name,
                g.top_left,
                g.horizontal,
                g.top_right,
                g.vertical,
                g.bottom_left,
                g.bottom_right
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rendered = if cli.list_styles {
        list_styles()
    } else {
        let header = unescape(cli.header.as_deref().unwrap_or_default());

        // Read content from the argument or stdin
        let content = if let Some(ref text) = cli.content {
            unescape(text)
        } else if io::stdin().is_terminal() {
            String::new()
        } else {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            buf.trim_end_matches('\n').to_string()
        };

        let config = cli.config();
        let result = match cli.columns {
            Some(cols) => {
                BoxRenderer::with_terminal(FixedColumns(cols)).render(&header, &content, &config)
            }
            None => BoxRenderer::new().render(&header, &content, &config),
        };
        match result {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, format!("{}\n", rendered)) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
