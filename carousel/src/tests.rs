use crate::*;

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Items(Vec<SlideItem>, ItemLayout),
    Style(TrackStyle),
    Flush,
    Controls(Controls),
}

#[derive(Clone, Debug, Default)]
struct Log {
    ops: Vec<Op>,
}

impl<T> Surface<T> for Log {
    fn replace_items(&mut self, slides: &[Slide<T>], layout: ItemLayout) {
        self.ops
            .push(Op::Items(slides.iter().map(|s| s.item).collect(), layout));
    }

    fn apply_style(&mut self, style: TrackStyle) {
        self.ops.push(Op::Style(style));
    }

    fn flush_layout(&mut self) {
        self.ops.push(Op::Flush);
    }

    fn set_controls(&mut self, controls: Controls) {
        self.ops.push(Op::Controls(controls));
    }
}

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_direction(&mut self) -> Direction {
        if (self.next_u64() >> 33) & 1 == 1 {
            Direction::Next
        } else {
            Direction::Prev
        }
    }
}

fn looping(speed: u64) -> CarouselOptions {
    CarouselOptions::new().with_loop(true).with_speed(speed)
}

fn controller(options: CarouselOptions, count: usize) -> TransitionController<usize, Log> {
    let width = 100.0 * options.num_of_items as f32;
    TransitionController::new(options, width, 0..count, Log::default()).unwrap()
}

/// Delivers whichever callback the controller waits on until it is idle.
fn run_to_idle<T, S: Surface<T>>(c: &mut TransitionController<T, S>) -> usize {
    let mut events = 0;
    while let Some(pending) = c.pending() {
        let settle = match pending {
            Pending::Frame => c.on_frame(),
            Pending::TransitionEnd => c.on_transition_end(),
        };
        assert_ne!(settle, Settle::Ignored);
        events += 1;
        assert!(events < 1000, "controller never settled");
    }
    events
}

fn styles(log: &Log) -> Vec<TrackStyle> {
    log.ops
        .iter()
        .filter_map(|op| match op {
            Op::Style(style) => Some(*style),
            _ => None,
        })
        .collect()
}

#[test]
fn odd_count_doubles_the_clone_pool() {
    let model = SlideModel::build(0..5usize, 100.0, 10.0).unwrap();
    assert_eq!(model.len(), 15);
    assert_eq!(model.clone_count(), 10);
    assert_eq!(model.initial_index(), 5);
    assert_eq!(model.first_original(), 5);
    assert_eq!(model.last_original(), 9);

    for (i, slide) in model.slides().iter().enumerate() {
        assert_eq!(slide.item.logical_index, i);
        assert_eq!(slide.item.source, i % 5);
        assert_eq!(slide.content, i % 5);
        assert_eq!(slide.item.original_index, 5 + i % 5);
        assert_eq!(slide.item.is_clone, !(5..10).contains(&i));
    }
}

#[test]
fn even_count_puts_the_tail_half_in_front() {
    let model = SlideModel::build(['a', 'b', 'c', 'd'], 50.0, 0.0).unwrap();
    assert_eq!(model.len(), 8);
    assert_eq!(model.initial_index(), 2);

    let sources: Vec<usize> = model.slides().iter().map(|s| s.item.source).collect();
    assert_eq!(sources, vec![2, 3, 0, 1, 2, 3, 0, 1]);

    // One step before the first original shows the last one, and vice versa.
    assert_eq!(model.get(1).unwrap().original_index, model.last_original());
    assert_eq!(model.get(6).unwrap().original_index, model.first_original());
    assert!(model.get(1).unwrap().is_clone);
    assert!(model.get(6).unwrap().is_clone);
}

#[test]
fn single_item_is_padded_on_both_sides() {
    let model = SlideModel::build(["only"], 80.0, 0.0).unwrap();
    assert_eq!(model.len(), 3);
    assert_eq!(model.initial_index(), 1);
    assert!(model.get(0).unwrap().is_clone);
    assert!(!model.get(1).unwrap().is_clone);
    assert!(model.get(2).unwrap().is_clone);
}

#[test]
fn build_rejects_empty_and_degenerate_geometry() {
    assert!(matches!(
        SlideModel::build(Vec::<u8>::new(), 100.0, 0.0),
        Err(Error::InvalidConfiguration(_))
    ));
    assert!(SlideModel::build([1], 0.0, 0.0).is_err());
    assert!(SlideModel::build([1], f32::NAN, 0.0).is_err());
    assert!(SlideModel::build([1], 100.0, -1.0).is_err());
}

#[test]
fn item_layout_subtracts_both_margins() {
    let options = CarouselOptions::new().with_num_of_items(3).with_margin(10.0);
    let c = TransitionController::new(options, 900.0, 0..4usize, Log::default()).unwrap();
    assert_eq!(c.model().item_width(), 300.0);
    assert_eq!(
        c.model().layout(),
        ItemLayout {
            margin: 10.0,
            width: 280.0
        }
    );

    let narrow = CarouselOptions::new().with_margin(80.0);
    let c = TransitionController::new(narrow, 100.0, 0..2usize, Log::default()).unwrap();
    assert_eq!(c.model().layout().width, 0.0);
}

#[test]
fn construction_renders_at_rest_on_the_first_original() {
    let c = controller(looping(300), 5);
    assert_eq!(c.index(), 5);
    assert_eq!(c.track().offset, -500.0);
    assert!(!c.is_animating());
    assert_eq!(c.displayed(), 0);

    let ops = &c.surface().ops;
    assert_eq!(ops.len(), 3);
    match &ops[0] {
        Op::Items(items, _) => assert_eq!(items.len(), 15),
        other => panic!("expected items, got {other:?}"),
    }
    assert_eq!(
        ops[1],
        Op::Style(TrackStyle {
            offset: -500.0,
            transition: Transition::None
        })
    );
    assert_eq!(ops[2], Op::Flush);
}

#[test]
fn invalid_configuration_leaves_the_surface_untouched() {
    let mut log = Log::default();

    let cases = [
        (CarouselOptions::new().with_num_of_items(0), 300.0, 3usize),
        (CarouselOptions::new(), 0.0, 3),
        (CarouselOptions::new(), -10.0, 3),
        (CarouselOptions::new(), f32::INFINITY, 3),
        (CarouselOptions::new().with_speed(0), 300.0, 3),
        (
            CarouselOptions::new().with_autoplay(true).with_duration(0),
            300.0,
            3,
        ),
        (CarouselOptions::new().with_margin(-2.0), 300.0, 3),
        (CarouselOptions::new(), 300.0, 0),
    ];
    for (options, width, count) in cases {
        let res = TransitionController::new(options, width, 0..count, &mut log);
        assert!(
            matches!(res, Err(Error::InvalidConfiguration(_))),
            "{options:?} width={width} count={count}"
        );
    }
    assert!(log.ops.is_empty());
}

#[test]
fn no_requests_means_no_change() {
    let mut c = controller(looping(300), 5);
    let before = c.surface().ops.clone();

    for _ in 0..10 {
        assert_eq!(c.on_frame(), Settle::Ignored);
        assert_eq!(c.on_transition_end(), Settle::Ignored);
    }
    assert_eq!(c.index(), 5);
    assert_eq!(c.track().offset, -500.0);
    assert_eq!(c.surface().ops, before);
}

#[test]
fn five_nexts_over_five_items_complete_a_cycle() {
    let mut c = controller(looping(300), 5);
    assert_eq!(c.model().len(), 15);
    assert_eq!(c.model().clone_count() / 2, 5);

    let mut displayed = Vec::new();
    let mut indices = Vec::new();
    for _ in 0..5 {
        assert_eq!(c.next(), Advance::Started);
        run_to_idle(&mut c);
        displayed.push(c.displayed());
        indices.push(c.index());
    }
    assert_eq!(displayed, vec![1, 2, 3, 4, 0]);
    assert_eq!(indices, vec![6, 7, 8, 9, 10]);

    // Index 10 is an interior clone: reached by a plain move, shows original 0.
    let item = c.model().get(10).unwrap();
    assert!(item.is_clone);
    assert_eq!(item.original_index, 5);
    assert_eq!(c.track().offset, -1000.0);
}

#[test]
fn simple_move_settles_on_the_next_frame() {
    let mut c = controller(looping(250), 5);
    let base = c.surface().ops.len();

    assert_eq!(c.next(), Advance::Started);
    assert_eq!(c.current_move(), Some((Direction::Next, MoveKind::Simple)));
    assert_eq!(c.pending(), Some(Pending::Frame));
    assert_eq!(
        c.surface().ops[base..],
        [Op::Style(TrackStyle {
            offset: -600.0,
            transition: Transition::Millis(250)
        })]
    );

    // A transition-end signal is not what a simple move waits for.
    assert_eq!(c.on_transition_end(), Settle::Ignored);
    assert!(c.is_animating());

    assert_eq!(c.on_frame(), Settle::Settled);
    assert!(!c.is_animating());
    assert_eq!(c.index(), 6);
}

#[test]
fn tail_seam_jumps_instantly_then_hops_onto_the_twin() {
    let mut c = controller(looping(400), 5);
    for _ in 0..7 {
        c.next();
        run_to_idle(&mut c);
    }
    assert_eq!(c.index(), 12);
    let base = c.surface().ops.len();

    // Candidate 13 is the clone of original 3 (logical 8) at the tail seam.
    assert_eq!(c.next(), Advance::Started);
    assert_eq!(c.current_move(), Some((Direction::Next, MoveKind::Reanchor)));
    assert_eq!(c.index(), 8);
    assert_eq!(
        c.surface().ops[base..],
        [
            Op::Style(TrackStyle {
                offset: -700.0,
                transition: Transition::None
            }),
            Op::Flush,
        ]
    );
    assert_eq!(c.pending(), Some(Pending::Frame));

    assert_eq!(c.on_transition_end(), Settle::Ignored);
    assert_eq!(c.on_frame(), Settle::Continued);
    assert_eq!(
        c.surface().ops.last(),
        Some(&Op::Style(TrackStyle {
            offset: -800.0,
            transition: Transition::Millis(400)
        }))
    );
    assert_eq!(c.pending(), Some(Pending::TransitionEnd));
    assert_eq!(c.on_frame(), Settle::Ignored);

    assert_eq!(c.on_transition_end(), Settle::Settled);
    assert!(!c.is_animating());
    assert_eq!(c.index(), 8);
    assert_eq!(c.track().offset, -800.0);
    assert_eq!(c.displayed(), 3);
}

#[test]
fn head_seam_reanchors_onto_the_twin() {
    let mut c = controller(looping(400), 5);
    for expected in [4, 3, 2, 1] {
        assert_eq!(c.prev(), Advance::Started);
        run_to_idle(&mut c);
        assert_eq!(c.index(), expected);
    }
    assert_eq!(c.displayed(), 1);
    let base = c.surface().ops.len();

    assert_eq!(c.prev(), Advance::Started);
    assert_eq!(c.current_move(), Some((Direction::Prev, MoveKind::Reanchor)));
    assert_eq!(run_to_idle(&mut c), 2);
    assert_eq!(
        styles(&Log {
            ops: c.surface().ops[base..].to_vec()
        }),
        vec![
            TrackStyle {
                offset: -600.0,
                transition: Transition::None
            },
            TrackStyle {
                offset: -500.0,
                transition: Transition::Millis(400)
            },
        ]
    );
    assert_eq!(c.index(), 5);
    assert_eq!(c.displayed(), 0);
}

#[test]
fn looping_is_a_cyclic_walk_for_any_request_sequence() {
    for count in 1..=8usize {
        let mut rng = Lcg(0x5eed + count as u64);
        let mut c = controller(looping(120), count);
        let mut expected = 0usize;

        for _ in 0..200 {
            let direction = rng.gen_direction();
            assert_eq!(c.request_advance(direction), Advance::Started);
            run_to_idle(&mut c);

            expected = match direction {
                Direction::Next => (expected + 1) % count,
                Direction::Prev => (expected + count - 1) % count,
            };
            assert_eq!(c.displayed(), expected, "count={count}");
            assert!(c.index() < c.model().len());
            assert_eq!(c.track().offset, c.model().offset_of(c.index()));
        }
    }
}

#[test]
fn at_most_three_requests_wait_and_replay_in_order() {
    let mut c = controller(looping(100), 5);

    assert_eq!(c.next(), Advance::Started);
    assert_eq!(c.prev(), Advance::Queued);
    assert_eq!(c.next(), Advance::Queued);
    assert_eq!(c.next(), Advance::Queued);
    assert_eq!(c.prev(), Advance::Dropped);
    assert_eq!(c.prev(), Advance::Dropped);
    assert_eq!(
        c.queued().iter().collect::<Vec<_>>(),
        vec![Direction::Prev, Direction::Next, Direction::Next]
    );

    let mut settled = Vec::new();
    let mut directions = Vec::new();
    while c.is_animating() {
        if let Some((direction, _)) = c.current_move() {
            if directions.len() == settled.len() {
                directions.push(direction);
            }
        }
        let index = c.index();
        if c.on_frame() == Settle::Settled {
            settled.push(index);
        }
    }
    assert_eq!(
        directions,
        vec![
            Direction::Next,
            Direction::Prev,
            Direction::Next,
            Direction::Next
        ]
    );
    assert_eq!(settled, vec![6, 5, 6, 7]);
    assert!(c.queued().is_empty());
}

#[test]
fn animating_is_never_reentered() {
    let mut rng = Lcg(7);
    let mut c = controller(looping(100), 3);

    for _ in 0..500 {
        let was_animating = c.is_animating();
        let outcome = c.request_advance(rng.gen_direction());
        if was_animating {
            assert_ne!(outcome, Advance::Started);
        } else {
            assert_eq!(outcome, Advance::Started);
        }
        assert!(c.queued().len() <= QUEUE_CAPACITY);

        if rng.next_u64() % 3 == 0 {
            match c.pending() {
                Some(Pending::Frame) => {
                    c.on_frame();
                }
                Some(Pending::TransitionEnd) => {
                    c.on_transition_end();
                }
                None => {}
            }
        }
    }
    run_to_idle(&mut c);
    assert!(c.queued().is_empty());
}

#[test]
fn stalled_transition_end_keeps_the_controller_busy() {
    let mut c = controller(looping(100), 5);
    for _ in 0..7 {
        c.next();
        run_to_idle(&mut c);
    }
    c.next();
    c.on_frame();
    assert_eq!(c.pending(), Some(Pending::TransitionEnd));

    for _ in 0..3 {
        assert_eq!(c.next(), Advance::Queued);
    }
    assert_eq!(c.next(), Advance::Dropped);
    for _ in 0..5 {
        assert_eq!(c.on_frame(), Settle::Ignored);
    }
    assert!(c.is_animating());
}

#[test]
fn non_looping_gate_blocks_at_the_true_ends() {
    let mut c = controller(CarouselOptions::new().with_speed(100), 3);
    assert_eq!(c.index(), 3);
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: false,
            next_enabled: true
        }
    );
    assert_eq!(c.surface().ops.last(), Some(&Op::Controls(c.controls())));

    let writes = c.surface().ops.len();
    assert_eq!(c.prev(), Advance::Blocked);
    assert!(!c.is_animating());
    assert!(c.queued().is_empty());
    assert_eq!(c.surface().ops.len(), writes);

    c.next();
    run_to_idle(&mut c);
    assert_eq!(c.controls(), Controls::ENABLED);

    c.next();
    run_to_idle(&mut c);
    assert_eq!(c.index(), 5);
    assert_eq!(
        c.controls(),
        Controls {
            prev_enabled: true,
            next_enabled: false
        }
    );
    assert_eq!(c.next(), Advance::Blocked);
    assert_eq!(c.index(), 5);
}

#[test]
fn non_looping_queue_respects_the_projected_position() {
    let mut c = controller(CarouselOptions::new().with_speed(100), 3);

    assert_eq!(c.next(), Advance::Started);
    assert_eq!(c.prev(), Advance::Queued);
    // After the queued prev the track would be back on the first item.
    assert_eq!(c.prev(), Advance::Blocked);
    assert_eq!(c.next(), Advance::Queued);
    assert_eq!(c.next(), Advance::Queued);
    // Projected onto the last item: blocked before capacity is even considered.
    assert_eq!(c.next(), Advance::Blocked);
    assert_eq!(c.queued().len(), 3);

    run_to_idle(&mut c);
    assert_eq!(c.index(), 5);
    assert!(c.queued().is_empty());
}

#[test]
fn non_looping_never_steps_onto_clones() {
    let mut rng = Lcg(42);
    let mut c = controller(CarouselOptions::new().with_speed(100), 4);
    for _ in 0..100 {
        c.request_advance(rng.gen_direction());
        run_to_idle(&mut c);
        let item = c.model().get(c.index()).unwrap();
        assert!(!item.is_clone);
        assert_eq!(c.current_move(), None);
    }
    assert!(
        styles(c.surface())
            .iter()
            .skip(1)
            .all(|s| s.transition == Transition::Millis(100))
    );
}

#[test]
fn single_original_loops_in_place() {
    let mut c = controller(looping(100), 1);
    for direction in [Direction::Next, Direction::Next, Direction::Prev] {
        assert_eq!(c.request_advance(direction), Advance::Started);
        assert_eq!(c.current_move().map(|(_, kind)| kind), Some(MoveKind::Reanchor));
        run_to_idle(&mut c);
        assert_eq!(c.index(), 1);
        assert_eq!(c.displayed(), 0);
    }

    let mut c = controller(CarouselOptions::new(), 1);
    assert_eq!(c.next(), Advance::Blocked);
    assert_eq!(c.prev(), Advance::Blocked);
}

#[test]
fn advance_queue_drops_beyond_capacity() {
    let mut q = AdvanceQueue::new();
    assert!(q.push(Direction::Next));
    assert!(q.push(Direction::Next));
    assert!(q.push(Direction::Prev));
    assert!(q.is_full());
    assert!(!q.push(Direction::Next));
    assert_eq!(q.len(), 3);
    assert_eq!(q.net_displacement(), 1);

    assert_eq!(q.drain_one(), Some(Direction::Next));
    assert_eq!(q.drain_one(), Some(Direction::Next));
    assert_eq!(q.drain_one(), Some(Direction::Prev));
    assert_eq!(q.drain_one(), None);
}

#[test]
fn navigation_gate_is_open_when_looping() {
    let gate = NavigationGate::new(true, 5, 9);
    assert_eq!(gate.controls_at(5), Controls::ENABLED);
    assert_eq!(gate.controls_at(9), Controls::ENABLED);

    let gate = NavigationGate::new(false, 5, 9);
    assert!(!gate.controls_at(5).allows(Direction::Prev));
    assert!(gate.controls_at(5).allows(Direction::Next));
    assert!(!gate.controls_at(9).allows(Direction::Next));
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_from_slider_config_keys() {
    let options: CarouselOptions = serde_json::from_str(
        r#"{"autoplay":true,"duration":2000,"loop":true,"speed":1500,"margin":10,"numOfItems":3}"#,
    )
    .unwrap();
    assert_eq!(
        options,
        CarouselOptions::new()
            .with_autoplay(true)
            .with_duration(2000)
            .with_loop(true)
            .with_speed(1500)
            .with_margin(10.0)
            .with_num_of_items(3)
    );

    let defaults: CarouselOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, CarouselOptions::default());
}

#[cfg(feature = "serde")]
#[test]
fn slides_serialize_with_their_metadata() {
    let model = SlideModel::build(["a", "b", "c"], 100.0, 0.0).unwrap();
    let front = serde_json::to_value(&model.slides()[0]).unwrap();
    assert_eq!(front["content"], "a");
    assert_eq!(front["item"]["is_clone"], true);
    assert_eq!(front["item"]["original_index"], 3);

    let back: Slide<String> = serde_json::from_value(front).unwrap();
    assert_eq!(back.item, model.slides()[0].item);
}
