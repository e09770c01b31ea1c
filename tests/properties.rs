//! Property tests for slot selection and the controller's start handshake.

use moleboard::core::selector::{allowed, choose_next, excluded};
use moleboard::{Board, Controller, GameConfig, Level, Phase, Slot, TextChannel};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand_core::SeedableRng;
use std::collections::VecDeque;
use std::time::Instant;

fn any_slot() -> impl Strategy<Value = Slot> {
    (0u8..4).prop_map(|i| Slot::try_from(i).unwrap())
}

#[derive(Default)]
struct Console {
    inbound: VecDeque<u8>,
    out: Vec<String>,
    lamps: [Level; 4],
}

impl Board for Console {
    fn set_indicator(&mut self, slot: Slot, level: Level) {
        self.lamps[slot.index()] = level;
    }

    fn read_sensor(&mut self, _slot: Slot) -> Level {
        Level::Low
    }

    fn read_entropy(&mut self) -> u16 {
        1
    }
}

impl TextChannel for Console {
    fn read_byte(&mut self) -> Option<u8> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.out.push(line.to_string());
    }
}

proptest! {
    #[test]
    fn next_slot_is_never_excluded(current in any_slot(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = choose_next(current, &mut rng);
        prop_assert!(!excluded(current)[next.index()]);
        prop_assert_ne!(next, current);
        prop_assert!(allowed(current).contains(&next));
    }

    #[test]
    fn one_never_goes_to_zero(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let one = Slot::try_from(1).unwrap();
        for _ in 0..32 {
            prop_assert_ne!(choose_next(one, &mut rng).index(), 0);
        }
    }

    #[test]
    fn transition_chain_respects_rules(seed in any::<u64>(), steps in 1usize..60) {
        let now = Instant::now();
        let mut host = Console::default();
        let cfg = GameConfig { seed: Some(seed), ..GameConfig::default() };
        let mut ctl = Controller::boot(cfg, &mut host, now);
        host.inbound.extend(b"s\n");
        ctl.step(&mut host, now);

        let mut previous = ctl.active();
        for _ in 0..steps {
            let t = ctl.step(&mut host, now).unwrap();
            ctl.activate(&mut host, &t);
            prop_assert_eq!(t.from, previous);
            prop_assert_ne!(t.to, previous);
            prop_assert!(!(previous.index() == 1 && t.to.index() == 0));
            prop_assert_eq!(host.lamps.iter().filter(|l| l.is_high()).count(), 1);
            previous = t.to;
        }
        prop_assert_eq!(host.out.len(), steps);
    }

    #[test]
    fn only_trimmed_s_starts(text in "[ \\tsSa-z]{0,6}") {
        let now = Instant::now();
        let mut host = Console::default();
        let cfg = GameConfig { seed: Some(0), ..GameConfig::default() };
        let mut ctl = Controller::boot(cfg, &mut host, now);
        host.inbound.extend(text.bytes());
        host.inbound.push_back(b'\n');
        ctl.step(&mut host, now);

        let expected = if text.trim() == "s" { Phase::Running } else { Phase::WaitingForStart };
        prop_assert_eq!(ctl.phase(), expected);
        prop_assert!(host.out.is_empty());
    }
}
