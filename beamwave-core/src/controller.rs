//! Two-channel polling controller
//!
//! The controller owns both gesture channels together with their sensors
//! and runs the fixed-cadence sampling loop. It holds no gesture logic of
//! its own. Each tick:
//!
//! 1. Sample lane one, advance its channel, pause if a wave was registered
//! 2. Same for lane two
//! 3. Sleep for one debounce period
//!
//! Both channels advance by the same `dt` every tick. Everything runs on one
//! execution context; the blocking delay is the only suspension point.

use embedded_hal::delay::DelayNs;

use crate::config::GestureTiming;
use crate::gesture::{Action, ChannelId, Edge, GestureChannel};
use crate::traits::{BeamSensor, GestureActuator};

/// A gesture channel paired with the sensor that feeds it
pub struct Lane<S, A> {
    sensor: S,
    channel: GestureChannel<A>,
}

impl<S: BeamSensor, A: GestureActuator> Lane<S, A> {
    /// Create a lane with an idle channel
    pub fn new(id: ChannelId, timing: &GestureTiming, sensor: S, actuator: A) -> Self {
        Self {
            sensor,
            channel: GestureChannel::new(id, timing, actuator),
        }
    }

    /// Sample the sensor and advance the channel by one tick
    fn service<D: DelayNs>(&mut self, timing: &GestureTiming, delay: &mut D) -> Option<Action> {
        let sample = self.sensor.is_intact();
        let action = self.channel.advance(sample, timing.debounce_ms);

        if self.channel.last_edge() == Edge::Break {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "{}: wave {}",
                self.channel.id(),
                self.channel.wave_count()
            );
            delay.delay_ms(timing.edge_pad_ms);
        }

        #[cfg(feature = "defmt")]
        match action {
            Some(Action::Ambiguous) => {
                defmt::warn!("{}: ambiguous gesture ignored", self.channel.id())
            }
            Some(action) => defmt::info!("{}: {}", self.channel.id(), action),
            None => {}
        }

        action
    }

    /// Access the channel
    pub fn channel(&self) -> &GestureChannel<A> {
        &self.channel
    }
}

/// Actions fired by one controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Action fired by lane one
    pub one: Option<Action>,
    /// Action fired by lane two
    pub two: Option<Action>,
}

impl TickReport {
    /// Action fired by the given channel
    pub fn action(&self, id: ChannelId) -> Option<Action> {
        match id {
            ChannelId::One => self.one,
            ChannelId::Two => self.two,
        }
    }
}

/// Polling controller for two gesture lanes
pub struct Controller<S1, A1, S2, A2, D> {
    timing: GestureTiming,
    one: Lane<S1, A1>,
    two: Lane<S2, A2>,
    delay: D,
}

impl<S1, A1, S2, A2, D> Controller<S1, A1, S2, A2, D>
where
    S1: BeamSensor,
    A1: GestureActuator,
    S2: BeamSensor,
    A2: GestureActuator,
    D: DelayNs,
{
    /// Create a controller; both channels start idle with released outputs
    pub fn new(timing: GestureTiming, one: (S1, A1), two: (S2, A2), delay: D) -> Self {
        Self {
            one: Lane::new(ChannelId::One, &timing, one.0, one.1),
            two: Lane::new(ChannelId::Two, &timing, two.0, two.1),
            timing,
            delay,
        }
    }

    /// Run one polling iteration over both lanes
    pub fn tick(&mut self) -> TickReport {
        let one = self.one.service(&self.timing, &mut self.delay);
        let two = self.two.service(&self.timing, &mut self.delay);

        self.delay.delay_ms(self.timing.debounce_ms);

        TickReport { one, two }
    }

    /// Poll forever
    pub fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Polling every {}ms, window {}ms",
            self.timing.debounce_ms,
            self.timing.window_timeout_ms
        );

        loop {
            self.tick();
        }
    }

    /// Lane one
    pub fn lane_one(&self) -> &Lane<S1, A1> {
        &self.one
    }

    /// Lane two
    pub fn lane_two(&self) -> &Lane<S2, A2> {
        &self.two
    }

    /// Access the delay provider
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
