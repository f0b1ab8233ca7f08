use carousel::{CarouselOptions, Pending};
use carousel_adapter::{RecordingSurface, Slider};

fn main() {
    // Example: a host loop driving an autoplaying slider with simulated time.
    //
    // The host:
    // - calls tick(now_ms) on every frame (autoplay)
    // - answers the "next frame" continuation on the following frame
    // - fires on_transition_end once an animated hop has run for `speed` ms
    // - clicks "prev" a few times in a burst to show queueing
    let options = CarouselOptions::new()
        .with_loop(true)
        .with_autoplay(true)
        .with_duration(700)
        .with_speed(400)
        .with_num_of_items(3);
    let speed = options.speed;
    let mut s = Slider::new(options, 900.0, 0..5u32, RecordingSurface::new(), 0)
        .expect("valid configuration");

    let mut transition_started_at: Option<u64> = None;
    let mut now_ms = 0u64;
    while now_ms <= 6_000 {
        now_ms += 16;

        if let Some(outcome) = s.tick(now_ms) {
            println!("t={now_ms} autoplay -> {outcome:?}");
        }

        if (3_000..3_016).contains(&now_ms) {
            for _ in 0..5 {
                println!("t={now_ms} click prev -> {:?}", s.prev());
            }
        }

        match s.controller().pending() {
            Some(Pending::Frame) => {
                s.on_frame();
                if s.controller().pending() == Some(Pending::TransitionEnd) {
                    transition_started_at = Some(now_ms);
                }
            }
            Some(Pending::TransitionEnd) => {
                if transition_started_at.is_some_and(|t| now_ms >= t + speed) {
                    transition_started_at = None;
                    s.on_transition_end();
                }
            }
            None => {}
        }

        if !s.is_animating() && now_ms % 480 == 0 {
            println!(
                "t={now_ms} index={} displayed={} style={:?}",
                s.index(),
                s.displayed(),
                s.surface().style()
            );
        }
    }
}
