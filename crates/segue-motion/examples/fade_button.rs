/// Example demonstrating a transition driven frame by frame.
///
/// Run with: cargo run -p segue-motion --example fade_button

use segue_css::parse_shorthand;
use segue_motion::{MemorySink, PaintRole, StyleMap, StyleSink, TransitionEngine};

const FRAME: f32 = 1.0 / 60.0;

fn main() {
    let declarations = parse_shorthand("background-color 0.25s ease-out, opacity 0.15s");
    println!("=== Parsed Declarations ===");
    for declaration in &declarations {
        println!(
            "  {} {}s {} {}s",
            declaration.property,
            declaration.duration,
            declaration.timing.keyword(),
            declaration.delay
        );
    }

    let mut engine = TransitionEngine::new();
    let mut sink = MemorySink::new();
    sink.insert_node("button");
    sink.set_alpha("button", 0.0);

    let mut hidden = StyleMap::new();
    hidden.set("opacity", 0.0);
    hidden.set("background-color", "#222222");

    let mut shown = StyleMap::new();
    shown.set("opacity", 1.0);
    shown.set("background-color", "#3388ff");

    println!();
    println!("=== Fade In ===");
    engine.apply_transition(&mut sink, "button", &hidden, &shown, &declarations);

    let mut frame = 0;
    while engine.has_active_transitions() {
        engine.tick(&mut sink, FRAME);
        frame += 1;
        if frame % 3 == 0 {
            let fill = sink
                .paint("button", PaintRole::Fill)
                .map(|p| p.color)
                .unwrap_or([0.0; 4]);
            println!(
                "  frame {frame:>2}: alpha {:.3}  fill [{:.2} {:.2} {:.2}]",
                sink.alpha("button"),
                fill[0],
                fill[1],
                fill[2]
            );
        }

        // Interrupt partway through and fade back out.
        if frame == 5 {
            println!("  -- pointer left, reversing --");
            engine.apply_transition(&mut sink, "button", &shown, &hidden, &declarations);
        }
    }

    println!();
    println!("=== Settled ===");
    println!("  alpha {:.3}", sink.alpha("button"));
    if let Some(paint) = sink.paint("button", PaintRole::Fill) {
        println!(
            "  fill [{:.2} {:.2} {:.2}]",
            paint.color[0], paint.color[1], paint.color[2]
        );
    }

    println!();
    println!("=== Events ===");
    for event in engine.drain_events() {
        let kind = if event.is_started() {
            "started"
        } else if event.is_finished() {
            "finished"
        } else {
            "killed"
        };
        println!("  {:<8} {} / {}", kind, event.node(), event.property());
    }
}
