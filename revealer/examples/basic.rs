// Example: a simulated page scroll driving the dispatcher.
use revealer::{Animatable, Effect, PageMetrics, Revealer, RevealerOptions};

fn main() {
    let mut engine = Revealer::new(RevealerOptions::new().with_parallax_count(3));

    // Document layout: element key -> top offset in document pixels.
    let doc_tops = [400u64, 1200, 2600];
    engine.register(Animatable::new(0u64).with_threshold_fraction(0.8));
    engine.register(Animatable::new(1u64).with_apply_delay_ms(200));
    engine.register(Animatable::new(2u64).with_threshold_fraction(0.8));

    for step in 0..6u64 {
        let metrics = PageMetrics::new(step * 400, 800, 3200);
        let ran = engine.on_scroll(metrics, step * 20, |key| {
            Some(metrics.viewport_box(doc_tops[*key as usize], 300))
        }, |effect| match effect {
            Effect::Reveal { key, delay_ms } => {
                println!("  reveal element {key} (after {delay_ms}ms)")
            }
            Effect::Progress { percent } => println!("  progress {percent:.1}%"),
            Effect::NavbarSolid(solid) => println!("  navbar solid: {solid}"),
            Effect::Parallax { index, y_px } => println!("  card {index} -> {y_px:.1}px"),
        });
        println!("scroll {} dispatched={ran}", step * 400);
    }
}
