// Example: minimal host surface and a full wrap around five slides.
use carousel::{
    CarouselOptions, ItemLayout, Pending, Slide, Surface, TrackStyle, TransitionController,
};

struct PrintSurface;

impl Surface<&'static str> for PrintSurface {
    fn replace_items(&mut self, slides: &[Slide<&'static str>], layout: ItemLayout) {
        let labels: Vec<String> = slides
            .iter()
            .map(|s| {
                if s.item.is_clone {
                    format!("({})", s.content)
                } else {
                    s.content.to_string()
                }
            })
            .collect();
        println!("track: [{}] layout={layout:?}", labels.join(" "));
    }

    fn apply_style(&mut self, style: TrackStyle) {
        println!("  style offset={} transition={:?}", style.offset, style.transition);
    }

    fn flush_layout(&mut self) {
        println!("  flush");
    }
}

fn main() {
    let options = CarouselOptions::new()
        .with_loop(true)
        .with_speed(300)
        .with_margin(8.0);
    let mut c = TransitionController::new(
        options,
        320.0,
        ["a", "b", "c", "d", "e"],
        PrintSurface,
    )
    .expect("valid configuration");

    for _ in 0..9 {
        c.next();
        // A real host answers these from requestAnimationFrame / transitionend.
        while let Some(pending) = c.pending() {
            match pending {
                Pending::Frame => c.on_frame(),
                Pending::TransitionEnd => c.on_transition_end(),
            };
        }
        println!("index={} displayed={}", c.index(), c.displayed());
    }
}
