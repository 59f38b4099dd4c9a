use anyhow::Context;
use ribbon_engine::logging::{LoggingConfig, init_logging};
use ribbon_ui::prelude::*;

/// Demo harness: wires a three-segment control into a scene, reports every
/// selection through the listener, and drives a short scripted input session.
///
/// Pass a `.ttf`/`.otf` path as the first argument to get real label metrics;
/// without one the control renders backgrounds only.
fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ribbon studio — segmented control demo");
    println!();

    let mut scene = UiScene::new();

    let font = match std::env::args().nth(1) {
        Some(path) => {
            let bytes = std::fs::read(&path).with_context(|| format!("reading font {path}"))?;
            Some(scene.load_font(&bytes).context("parsing font")?)
        }
        None => None,
    };

    let mut control = SegmentedControl::new()
        .segment("Daily", "daily")
        .segment("Weekly", "weekly")
        .segment("Monthly", "monthly")
        .selected("daily")
        .theme(&Theme::default())
        .on_change(|value| log::info!("selected segment: {value}"));
    if let Some(font) = font {
        control = control.font(font);
    }
    control.configure();

    // Programmatic selection runs the same pipeline as a tap and also
    // notifies the listener.
    control.select("weekly", false);

    let viewport = Vec2::new(480.0, 120.0);
    let backdrop = LinearGradient::new(
        Vec2::zero(),
        Vec2::new(0.0, viewport.y),
        vec![
            ColorStop::new(0.0, Color::from_straight(0.10, 0.11, 0.16, 1.0)),
            ColorStop::new(1.0, Color::from_straight(0.05, 0.06, 0.09, 1.0)),
        ],
        SpreadMode::Pad,
    );
    let mut root = Element::new(
        Container::new()
            .padding_all(24.0)
            .background(Paint::LinearGradient(backdrop))
            .child(control),
    );

    // A short scripted session: hover, tap each outer segment, tap one twice.
    let frames = [
        ("hover", UiInput { mouse_pos: Vec2::new(100.0, 60.0), ..Default::default() }),
        ("tap Monthly", UiInput {
            mouse_pos: Vec2::new(400.0, 60.0),
            mouse_clicked: true,
            ..Default::default()
        }),
        ("tap Daily", UiInput {
            mouse_pos: Vec2::new(80.0, 60.0),
            mouse_clicked: true,
            ..Default::default()
        }),
        ("tap Daily again", UiInput {
            mouse_pos: Vec2::new(80.0, 60.0),
            mouse_clicked: true,
            ..Default::default()
        }),
    ];
    for (label, input) in frames {
        let frame = scene.frame_ref(&mut root, viewport, &input);
        log::info!("{label}: {} draw commands", frame.items().len());
    }

    Ok(())
}
