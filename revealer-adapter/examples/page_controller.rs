// Example: a controller-driven page session (scroll, deferred reveal,
// keyboard glide).
use revealer::{Animatable, PageMetrics, RevealerOptions};
use revealer_adapter::{Key, PageController};

fn main() {
    let mut page = PageController::new(RevealerOptions::new().with_parallax_count(2));
    page.engine_mut()
        .register(Animatable::new(0u64).with_apply_delay_ms(200));
    page.engine_mut()
        .register(Animatable::new(1u64).with_threshold_fraction(0.8));

    let doc_tops = [500u64, 1400];
    let sections = [0u64, 900, 1800];

    // The user scrolls a bit; element 0 comes into view.
    let metrics = PageMetrics::new(300, 800, 2600);
    page.on_scroll(metrics, 0, |key| {
        Some(metrics.viewport_box(doc_tops[*key as usize], 200))
    }, |effect| println!("effect: {effect:?}"));
    println!("deferred reveals pending: {}", page.pending_deferred());

    // 200ms later the deferred skill-bar fill comes due.
    page.drain_deferred(200, |_| true, |key| println!("apply reveal: {key}"));

    // PageDown glides to the next section.
    if let Some(target) = page.on_key(Key::PageDown, &sections, 220) {
        println!("gliding to {target}");
        for now in [220u64, 420, 620] {
            if let Some(offset) = page.tick(now) {
                println!("  t={now} offset={offset}");
            }
        }
    }
}
