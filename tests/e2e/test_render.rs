//! End-to-end tests for the public rendering API.
//!
//! Every render uses a fixed 80-column terminal so placement is reproducible.

use carden::renderers::color::dim;
use carden::renderers::text::visible_width;
use carden::{
    Align, BorderGlyphs, BoxRenderer, CardenError, CustomGlyphs, FixedColumns, Float,
    RegionOverride, RenderConfig, Renderer, Spacing, border_styles,
};
use proptest::prelude::*;

const COLUMNS: usize = 80;

fn render(header: &str, content: &str, config: &RenderConfig) -> String {
    try_render(header, content, config).expect("render failed")
}

fn try_render(header: &str, content: &str, config: &RenderConfig) -> carden::Result<String> {
    BoxRenderer::with_terminal(FixedColumns(COLUMNS)).render(header, content, config)
}

fn lines(rows: &[&str]) -> String {
    rows.join("\n")
}

fn beautiful() -> String {
    "\x1b[35mB E A U T I F U L\x1b[39m".to_string()
}

fn boxes_are() -> String {
    format!("Boxes are\n{}\nand beneficial too!", beautiful())
}

// ─── Layout ─────────────────────────────────────────────────────────────────

#[test]
fn test_creates_a_box() {
    assert_eq!(
        render("foo", "foo", &RenderConfig::default()),
        lines(&["┌───┐", "│foo│", "│foo│", "└───┘"])
    );
}

#[test]
fn test_top_level_render_matches_injected_terminal_for_left_float() {
    let out = carden::render("foo", "foo", &RenderConfig::default()).unwrap();
    assert_eq!(out, render("foo", "foo", &RenderConfig::default()));
}

#[test]
fn test_padding_scalar() {
    let expected = lines(&[
        "┌───────────────┐",
        "│               │",
        "│               │",
        "│      foo      │",
        "│               │",
        "│               │",
        "│               │",
        "│               │",
        "│      foo      │",
        "│               │",
        "│               │",
        "└───────────────┘",
    ]);
    assert_eq!(render("foo", "foo", &RenderConfig::new().padding(2)), expected);
}

#[test]
fn test_padding_record() {
    let padding = Spacing {
        top: 0,
        bottom: 2,
        left: 5,
        right: 10,
    };
    let expected = lines(&[
        "┌──────────────────┐",
        "│     foo          │",
        "│                  │",
        "│                  │",
        "│     foo          │",
        "│                  │",
        "│                  │",
        "└──────────────────┘",
    ]);
    assert_eq!(
        render("foo", "foo", &RenderConfig::new().padding(padding)),
        expected
    );
}

#[test]
fn test_margin_scalar() {
    let m = "      ";
    let expected = format!(
        "\n\n{m}┌───────────────┐\n\
         {m}│               │\n\
         {m}│               │\n\
         {m}│      foo      │\n\
         {m}│               │\n\
         {m}│               │\n\
         {m}│               │\n\
         {m}│               │\n\
         {m}│      foo      │\n\
         {m}│               │\n\
         {m}│               │\n\
         {m}└───────────────┘\n\n"
    );
    assert_eq!(
        render("foo", "foo", &RenderConfig::new().padding(2).margin(2)),
        expected
    );
}

// ─── Float ──────────────────────────────────────────────────────────────────

fn offset_box(offset: usize) -> String {
    let pad = " ".repeat(offset);
    ["┌───┐", "│foo│", "│foo│", "└───┘"]
        .iter()
        .map(|row| format!("{pad}{row}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_float_left() {
    let config = RenderConfig::new().float(Float::Left);
    assert_eq!(render("foo", "foo", &config), offset_box(0));
}

#[test]
fn test_float_center() {
    let config = RenderConfig::new().float(Float::Center);
    assert_eq!(render("foo", "foo", &config), offset_box(38));
}

#[test]
fn test_float_right() {
    let config = RenderConfig::new().float(Float::Right);
    assert_eq!(render("foo", "foo", &config), offset_box(75));
}

#[test]
fn test_float_right_with_scalar_margin() {
    let config = RenderConfig::new().float(Float::Right).margin(2);
    let expected = format!("\n\n{}\n\n", offset_box(69));
    assert_eq!(render("foo", "foo", &config), expected);
}

#[test]
fn test_float_right_with_margin_right() {
    let margin = Spacing {
        right: 2,
        ..Spacing::default()
    };
    let config = RenderConfig::new().float(Float::Right).margin(margin);
    assert_eq!(render("foo", "foo", &config), offset_box(73));
}

#[test]
fn test_float_ignored_when_content_wider_than_terminal() {
    let long = "ab".repeat(COLUMNS);
    let left = render("foo", &long, &RenderConfig::new().float(Float::Left));
    let center = render("foo", &long, &RenderConfig::new().float(Float::Center));
    let right = render("foo", &long, &RenderConfig::new().float(Float::Right));
    assert_eq!(center, left);
    assert_eq!(right, left);
}

// ─── Border styles ──────────────────────────────────────────────────────────

#[test]
fn test_border_style_presets() {
    let cases = [
        ("double", ["╔═══╗", "║foo║", "║foo║", "╚═══╝"]),
        ("round", ["╭───╮", "│foo│", "│foo│", "╰───╯"]),
        ("singleDouble", ["╓───╖", "║foo║", "║foo║", "╙───╜"]),
        ("doubleSingle", ["╒═══╕", "│foo│", "│foo│", "╘═══╛"]),
        ("classic", ["+---+", "|foo|", "|foo|", "+---+"]),
    ];
    for (name, rows) in cases {
        let config = RenderConfig::new().border_style(name);
        assert_eq!(render("foo", "foo", &config), lines(&rows), "style {name}");
    }
}

#[test]
fn test_border_style_custom() {
    let glyphs = BorderGlyphs::new("1", "2", "3", "4", "-", "|");
    let config = RenderConfig::new().border_style(glyphs);
    assert_eq!(
        render("foo", "foo", &config),
        lines(&["1---2", "|foo|", "|foo|", "3---4"])
    );
}

#[test]
fn test_unknown_border_style_name() {
    let err = try_render("foo", "foo", &RenderConfig::new().border_style("shaken-snake"))
        .unwrap_err();
    assert_eq!(err, CardenError::UnknownBorderStyle("shaken-snake".into()));
    assert!(err.to_string().contains("border style"));
}

#[test]
fn test_custom_border_style_missing_bottom_right() {
    let custom = CustomGlyphs {
        top_left: Some("1".into()),
        top_right: Some("2".into()),
        bottom_left: Some("3".into()),
        bottom_right: None,
        horizontal: Some("-".into()),
        vertical: Some("|".into()),
    };
    let err = try_render("foo", "foo", &RenderConfig::new().border_style(custom)).unwrap_err();
    assert_eq!(err, CardenError::InvalidBorderStyle("bottomRight"));
    assert!(err.to_string().contains("bottomRight"));
}

#[test]
fn test_custom_border_style_with_no_known_keys() {
    let err = try_render(
        "foo",
        "foo",
        &RenderConfig::new().border_style(CustomGlyphs::default()),
    )
    .unwrap_err();
    assert!(err.to_string().contains("border style"));
}

#[test]
fn test_border_style_none() {
    let config = RenderConfig::new().border_style("none");
    assert_eq!(render("foo", "foo", &config), "foo\nfoo");
}

#[test]
fn test_border_style_blank() {
    let config = RenderConfig::new().border_style("blank");
    assert_eq!(render("foo", "foo", &config).trim(), "foo \n foo");
}

#[test]
fn test_border_styles_registry() {
    let styles = border_styles();
    assert_eq!(styles.len(), 6);
    let (_, single) = styles.iter().find(|(n, _)| *n == "single").unwrap();
    assert_eq!(single.top_left, "┌");
}

// ─── Colors ─────────────────────────────────────────────────────────────────

#[test]
fn test_border_color_named() {
    let out = render("foo", "foo", &RenderConfig::new().border_color("yellow"));
    assert!(out.contains("\x1b[33m"));
    assert!(out.contains("\x1b[39m"));
}

#[test]
fn test_border_color_hex() {
    let out = render("foo", "foo", &RenderConfig::new().border_color("#FF0000"));
    assert!(out.contains("\x1b[38;2;255;0;0m"));
    assert!(out.contains("\x1b[39m"));
}

#[test]
fn test_invalid_border_color() {
    let err = try_render("foo", "foo", &RenderConfig::new().border_color("greasy-white"))
        .unwrap_err();
    assert_eq!(
        err,
        CardenError::InvalidColor {
            field: "borderColor",
            value: "greasy-white".into()
        }
    );
    assert!(err.to_string().contains("borderColor"));
}

#[test]
fn test_background_color_named() {
    let out = render("foo", "foo", &RenderConfig::new().background_color("red"));
    assert!(out.contains("\x1b[41m"));
    assert!(out.contains("\x1b[49m"));
}

#[test]
fn test_background_color_hex() {
    let out = render("foo", "foo", &RenderConfig::new().background_color("#FF0000"));
    assert!(out.contains("\x1b[48;2;255;0;0mfoo\x1b[49m"));
}

#[test]
fn test_invalid_background_color() {
    let err = try_render("foo", "foo", &RenderConfig::new().background_color("dark-yellow"))
        .unwrap_err();
    assert!(err.to_string().contains("backgroundColor"));
}

#[test]
fn test_region_colors() {
    for (region, open, close) in [
        (RegionOverride::new().border_color("yellow"), "\x1b[33m", "\x1b[39m"),
        (RegionOverride::new().border_color("#FF0000"), "\x1b[38;2;255;0;0m", "\x1b[39m"),
        (RegionOverride::new().background_color("red"), "\x1b[41m", "\x1b[49m"),
        (RegionOverride::new().background_color("#FF0000"), "\x1b[48;2;255;0;0m", "\x1b[49m"),
    ] {
        for config in [
            RenderConfig::new().header(region.clone()),
            RenderConfig::new().content(region.clone()),
        ] {
            let out = render("foo", "foo", &config);
            assert!(out.contains(open), "{out:?}");
            assert!(out.contains(close), "{out:?}");
        }
    }
}

#[test]
fn test_content_border_color_leaves_header_plain() {
    let config = RenderConfig::new().content(RegionOverride::new().border_color("yellow"));
    let out = render("foo", "foo", &config);
    let rows: Vec<&str> = out.split('\n').collect();
    assert_eq!(rows[0], "┌───┐");
    assert_eq!(rows[1], "│foo│");
    assert_eq!(rows[2], "\x1b[33m│\x1b[39mfoo\x1b[33m│\x1b[39m");
    assert_eq!(rows[3], "\x1b[33m└───┘\x1b[39m");
}

#[test]
fn test_invalid_region_colors() {
    let cases = [
        (
            RenderConfig::new().header(RegionOverride::new().border_color("greasy-white")),
            "header.borderColor",
        ),
        (
            RenderConfig::new().header(RegionOverride::new().background_color("dark-yellow")),
            "header.backgroundColor",
        ),
        (
            RenderConfig::new().content(RegionOverride::new().border_color("greasy-white")),
            "content.borderColor",
        ),
        (
            RenderConfig::new().content(RegionOverride::new().background_color("dark-yellow")),
            "content.backgroundColor",
        ),
    ];
    for (config, field) in cases {
        let err = try_render("foo", "foo", &config).unwrap_err();
        assert!(
            matches!(err, CardenError::InvalidColor { field: f, .. } if f == field),
            "{err}"
        );
    }
}

// ─── Dim ────────────────────────────────────────────────────────────────────

#[test]
fn test_dim_border() {
    let side = dim("│");
    let expected = format!(
        "{}\n{side}foo{side}\n{side}foo{side}\n{}",
        dim("┌───┐"),
        dim("└───┘")
    );
    assert_eq!(
        render("foo", "foo", &RenderConfig::new().dim_border(true)),
        expected
    );
}

#[test]
fn test_header_dim_border() {
    let side = dim("│");
    let expected = format!("{}\n{side}foo{side}\n│foo│\n└───┘", dim("┌───┐"));
    let config = RenderConfig::new().header(RegionOverride::new().dim_border(true));
    assert_eq!(render("foo", "foo", &config), expected);
}

#[test]
fn test_content_dim_border() {
    let side = dim("│");
    let expected = format!("┌───┐\n│foo│\n{side}foo{side}\n{}", dim("└───┘"));
    let config = RenderConfig::new().content(RegionOverride::new().dim_border(true));
    assert_eq!(render("foo", "foo", &config), expected);
}

// ─── Alignment ──────────────────────────────────────────────────────────────

#[test]
fn test_align_center() {
    let b = beautiful();
    let expected = lines(&[
        "┌─────────────────────────┐",
        "│                         │",
        "│   foo                   │",
        "│                         │",
        "│                         │",
        "│        Boxes are        │",
        &format!("│    {b}    │"),
        "│   and beneficial too!   │",
        "│                         │",
        "└─────────────────────────┘",
    ]);
    let config = RenderConfig::new().align(Align::Center).padding(1);
    assert_eq!(render("foo", &boxes_are(), &config), expected);
}

#[test]
fn test_align_right() {
    let b = beautiful();
    let expected = lines(&[
        "┌───────────────────┐",
        "│foo                │",
        "│          Boxes are│",
        &format!("│  {b}│"),
        "│and beneficial too!│",
        "└───────────────────┘",
    ]);
    let config = RenderConfig::new().align(Align::Right);
    assert_eq!(render("foo", &boxes_are(), &config), expected);
}

#[test]
fn test_align_left() {
    let b = beautiful();
    let expected = lines(&[
        "┌───────────────────┐",
        "│foo                │",
        "│Boxes are          │",
        &format!("│{b}  │"),
        "│and beneficial too!│",
        "└───────────────────┘",
    ]);
    let config = RenderConfig::new().align(Align::Left);
    assert_eq!(render("foo", &boxes_are(), &config), expected);
}

#[test]
fn test_header_align_center() {
    let b = beautiful();
    let expected = lines(&[
        "┌─────────────────────────┐",
        "│                         │",
        "│    foo                  │",
        "│   monkey                │",
        "│                         │",
        "│                         │",
        "│   Boxes are             │",
        &format!("│   {b}     │"),
        "│   and beneficial too!   │",
        "│                         │",
        "└─────────────────────────┘",
    ]);
    let config = RenderConfig::new()
        .header(RegionOverride::new().align(Align::Center))
        .padding(1);
    assert_eq!(render("foo\nmonkey", &boxes_are(), &config), expected);
}

#[test]
fn test_header_align_right() {
    let b = beautiful();
    let expected = lines(&[
        "┌───────────────────┐",
        "│   foo             │",
        "│monkey             │",
        "│Boxes are          │",
        &format!("│{b}  │"),
        "│and beneficial too!│",
        "└───────────────────┘",
    ]);
    let config = RenderConfig::new().header(RegionOverride::new().align(Align::Right));
    assert_eq!(render("foo\nmonkey", &boxes_are(), &config), expected);
}

#[test]
fn test_content_align_right() {
    let b = beautiful();
    let expected = lines(&[
        "┌───────────────────┐",
        "│foo                │",
        "│monkey             │",
        "│          Boxes are│",
        &format!("│  {b}│"),
        "│and beneficial too!│",
        "└───────────────────┘",
    ]);
    let config = RenderConfig::new().content(RegionOverride::new().align(Align::Right));
    assert_eq!(render("foo\nmonkey", &boxes_are(), &config), expected);
}

#[test]
fn test_header_wider_than_content() {
    let b = beautiful();
    let expected = lines(&[
        "┌───────────────────┐",
        "│          Boxes are│",
        &format!("│  {b}│"),
        "│and beneficial too!│",
        "│   foo             │",
        "│monkey             │",
        "└───────────────────┘",
    ]);
    let config = RenderConfig::new().align(Align::Right);
    assert_eq!(render(&boxes_are(), "foo\nmonkey", &config), expected);
}

#[test]
fn test_wide_characters() {
    assert_eq!(
        render("漢字", "ab", &RenderConfig::default()),
        lines(&["┌────┐", "│漢字│", "│ab  │", "└────┘"])
    );
}

// ─── Properties ─────────────────────────────────────────────────────────────

fn style_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "single",
        "double",
        "round",
        "singleDouble",
        "doubleSingle",
        "classic",
        "blank",
    ])
}

proptest! {
    #[test]
    fn prop_body_lines_share_width(
        header in "[a-z ]{0,12}(\n[a-z ]{0,12}){0,3}",
        content in "[a-z ]{0,20}(\n[a-z ]{0,20}){0,3}",
        padding in 0usize..3,
        style in style_strategy(),
        align in prop::sample::select(vec![Align::Left, Align::Center, Align::Right]),
    ) {
        let config = RenderConfig::new().padding(padding).border_style(style).align(align);
        let out = render(&header, &content, &config);
        let rows: Vec<&str> = out.split('\n').collect();
        let width = visible_width(rows[0]);
        for row in &rows {
            prop_assert_eq!(visible_width(row), width);
        }
        let expected_rows = header.split('\n').count() + content.split('\n').count() + 4 * padding + 2;
        prop_assert_eq!(rows.len(), expected_rows);
    }

    #[test]
    fn prop_borderless_body_width_is_box_width(
        header in "[a-z]{0,10}",
        content in "[a-z]{1,10}",
    ) {
        let config = RenderConfig::new().border_style("none");
        let out = render(&header, &content, &config);
        let box_width = header.len().max(content.len());
        for row in out.split('\n') {
            prop_assert_eq!(visible_width(row), box_width);
        }
    }

    #[test]
    fn prop_render_is_deterministic(
        content in "[a-zA-Z0-9 ]{0,40}",
        float in prop::sample::select(vec![Float::Left, Float::Center, Float::Right]),
    ) {
        let config = RenderConfig::new().float(float).border_color("cyan").padding(1);
        prop_assert_eq!(render("h", &content, &config), render("h", &content, &config));
    }
}
