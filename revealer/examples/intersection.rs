// Example: intersection-style enter/exit notifications instead of polling.
use revealer::{Animatable, Revealer, RevealerOptions};

fn main() {
    let mut engine = Revealer::new(RevealerOptions::new());
    engine.register(Animatable::new("stats").with_threshold_fraction(0.5));
    engine.register(Animatable::new("skills").with_apply_delay_ms(200));

    // An observer pushes enter/exit events; only the first enter per element
    // fires.
    for (key, entered) in [
        ("stats", true),
        ("stats", false),
        ("stats", true),
        ("skills", true),
    ] {
        let fired = engine.on_intersection(&key, entered, |effect| {
            println!("fired: {effect:?}");
        });
        println!("{key} entered={entered} -> fired={fired}");
    }
}
