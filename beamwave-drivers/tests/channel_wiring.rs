//! Both channels wired to the real drivers over simulated GPIO

use std::cell::Cell;
use std::rc::Rc;

use beamwave_core::config::GestureTiming;
use beamwave_core::controller::Controller;
use beamwave_core::gesture::Action;
use beamwave_core::traits::MotorDrive;
use beamwave_drivers::actuator::{FanActuator, LampActuator};
use beamwave_drivers::motor::HBridge;
use beamwave_drivers::output::GpioSwitch;
use beamwave_drivers::sensor::IrBeamSensor;
use beamwave_hal::{InputPin, OutputPin};
use embedded_hal::delay::DelayNs;

/// Input whose level the test controls from outside
#[derive(Clone, Default)]
struct SharedInput(Rc<Cell<bool>>);

impl InputPin for SharedInput {
    fn is_high(&mut self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
struct Pin {
    high: bool,
}

impl OutputPin for Pin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Default)]
struct VirtualClock {
    now_ms: u64,
}

impl DelayNs for VirtualClock {
    fn delay_ns(&mut self, ns: u32) {
        self.now_ms += u64::from(ns) / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now_ms += u64::from(ms);
    }
}

type Lamp = LampActuator<Pin, Pin>;
type Fan = FanActuator<Pin, Pin, Pin>;
type Board =
    Controller<IrBeamSensor<SharedInput>, Lamp, IrBeamSensor<SharedInput>, Fan, VirtualClock>;

fn board(beam_one: &SharedInput, beam_two: &SharedInput) -> Board {
    beam_one.0.set(true);
    beam_two.0.set(true);

    Controller::new(
        GestureTiming::default(),
        (
            IrBeamSensor::new_idle_high(beam_one.clone()),
            LampActuator::new(
                GpioSwitch::new_active_high(Pin::default()),
                GpioSwitch::new_active_high(Pin::default()),
            ),
        ),
        (
            IrBeamSensor::new_idle_high(beam_two.clone()),
            FanActuator::new(
                GpioSwitch::new_active_high(Pin::default()),
                HBridge::new(Pin::default(), Pin::default()),
            ),
        ),
        VirtualClock::default(),
    )
}

/// Run one tick with the given beam levels
fn step(
    board: &mut Board,
    beams: (&SharedInput, &SharedInput),
    levels: (bool, bool),
) -> (Option<Action>, Option<Action>) {
    let (a, b) = beams;
    a.0.set(levels.0);
    b.0.set(levels.1);
    let report = board.tick();
    (report.one, report.two)
}

#[test]
fn single_wave_switches_lamp_on() {
    let (one, two) = (SharedInput::default(), SharedInput::default());
    let mut board = board(&one, &two);

    let script = [true, false, true, true, true, true];
    let mut fired = Vec::new();
    for level in script {
        fired.push(step(&mut board, (&one, &two), (level, true)).0);
    }

    assert_eq!(fired, vec![None, None, None, None, None, Some(Action::Single)]);

    let lamp = board.lane_one().channel().actuator();
    assert!(lamp.relay().is_on());
    assert!(!lamp.indicator().is_on());

    // Six ticks plus one post-wave pad
    assert_eq!(board.delay().now_ms, 1400);
}

#[test]
fn double_wave_drives_fan_forward() {
    let (one, two) = (SharedInput::default(), SharedInput::default());
    let mut board = board(&one, &two);

    let script = [false, true, false, true, true, true, true, true];
    let mut last = None;
    for level in script {
        last = last.or(step(&mut board, (&one, &two), (true, level)).1);
    }

    assert_eq!(last, Some(Action::Double));

    let fan = board.lane_two().channel().actuator();
    assert!(!fan.relay().is_on());
    assert_eq!(fan.motor().current(), MotorDrive::Forward);

    // The lamp channel never saw a wave
    let lamp = board.lane_one().channel().actuator();
    assert!(!lamp.relay().is_on());
    assert!(!lamp.indicator().is_on());
}

#[test]
fn outputs_start_released() {
    let (one, two) = (SharedInput::default(), SharedInput::default());
    let board = board(&one, &two);

    let fan = board.lane_two().channel().actuator();
    assert!(!fan.relay().is_on());
    assert_eq!(fan.motor().current(), MotorDrive::Coast);
    assert!(board.lane_one().channel().is_idle());
}
