//! Pipeline orchestrator: the per-tick control loop.
//!
//! Each tick walks `Idle → Sampling → Mapping → Actuating → Idle`:
//!
//! 1. read one [`RawSample`] from the acquisition source,
//! 2. map it to an [`Intensity`],
//! 3. drive the dimmer, the tone channel and the light bar (the strip flush is
//!    awaited before the tick ends).
//!
//! [`Pipeline::run`] paces ticks with an [`embassy_time::Ticker`] and, between
//! ticks, reacts to accepted button edges by re-rendering the status display
//! and re-driving the tone channel with the new volume.
//!
//! Device errors are logged and dropped: a tick always completes.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Ticker};
use platform::{
    AcquisitionSource, DimmerChannel, DutyCycle, Intensity, LedStrip, RawSample, StatusDisplay,
    ToneChannel, ToneCommand,
};

use crate::balance::BalanceSnapshot;
use crate::config::ValidatedConfig;
use crate::drivers::{dimmer_level, LightBar, LightBarFrame, ToneShaper};
use crate::mapper::IntensityMapper;
use crate::shared::BalanceCell;
use crate::status;

/// Where the orchestrator is within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Between ticks.
    Idle,
    /// Reading the acquisition source.
    Sampling,
    /// Converting the sample to an intensity.
    Mapping,
    /// Driving the three channels.
    Actuating,
}

/// Everything one tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuationFrame {
    /// Sample read this tick
    pub sample: RawSample,
    /// Mapped intensity
    pub intensity: Intensity,
    /// Dimmer level applied
    pub dimmer: DutyCycle,
    /// Tone command applied
    pub tone: ToneCommand,
    /// Light-bar frame flushed
    pub light_bar: LightBarFrame,
    /// Balance the tone was scaled with
    pub balance: BalanceSnapshot,
}

/// The devices a pipeline drives.
pub struct Devices<S, D, T, L, P> {
    /// Analog input
    pub source: S,
    /// Indicator LED
    pub dimmer: D,
    /// Buzzer
    pub tone: T,
    /// Light bar
    pub strip: L,
    /// Status display
    pub display: P,
}

/// The control loop, generic over every device it touches.
pub struct Pipeline<'a, M, S, D, T, L, P>
where
    M: RawMutex,
{
    balance: &'a BalanceCell<M>,
    mapper: IntensityMapper,
    tone_shaper: ToneShaper,
    light_bar: LightBar,
    tick_period: Duration,
    devices: Devices<S, D, T, L, P>,
    phase: Phase,
    last_intensity: Intensity,
    ticks: u32,
}

impl<'a, M, S, D, T, L, P> Pipeline<'a, M, S, D, T, L, P>
where
    M: RawMutex,
    S: AcquisitionSource,
    D: DimmerChannel,
    T: ToneChannel,
    L: LedStrip,
    P: StatusDisplay,
{
    /// Wire a pipeline. `balance` must outlive the pipeline; on hardware it
    /// is a `'static` shared with the button tasks.
    pub fn new(
        config: &ValidatedConfig,
        balance: &'a BalanceCell<M>,
        devices: Devices<S, D, T, L, P>,
    ) -> Self {
        let cfg = config.get();
        info!(
            "pipeline: floor={} ceiling={} tick={}ms debounce={}ms",
            cfg.noise_floor,
            cfg.sample_ceiling,
            cfg.tick_period_ms,
            cfg.debounce_ms
        );
        Self {
            balance,
            mapper: IntensityMapper::new(config),
            tone_shaper: ToneShaper::new(config),
            light_bar: LightBar::new(config),
            tick_period: Duration::from_millis(cfg.tick_period_ms),
            devices,
            phase: Phase::Idle,
            last_intensity: Intensity::ZERO,
            ticks: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed ticks (wraps).
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Intensity produced by the most recent tick.
    pub fn last_intensity(&self) -> Intensity {
        self.last_intensity
    }

    /// Borrow the devices (tests and diagnostics).
    pub fn devices(&self) -> &Devices<S, D, T, L, P> {
        &self.devices
    }

    /// Run one acquisition → actuation pass.
    pub async fn tick(&mut self) -> ActuationFrame {
        self.phase = Phase::Sampling;
        let sample = self.devices.source.read();

        self.phase = Phase::Mapping;
        let intensity = self.mapper.map(sample);
        self.last_intensity = intensity;

        self.phase = Phase::Actuating;
        let balance = self.balance.snapshot();
        let dimmer = dimmer_level(intensity);
        if self.devices.dimmer.set_level(dimmer).is_err() {
            warn!("dimmer write failed");
        }
        let tone = self.drive_tone(intensity, balance);
        let light_bar = self.light_bar.frame(intensity);
        if light_bar.write_to(&mut self.devices.strip).await.is_err() {
            warn!("light bar flush failed");
        }

        self.phase = Phase::Idle;
        self.ticks = self.ticks.wrapping_add(1);
        trace!(
            "tick {}: raw={} intensity={} duty={} tone={}Hz/{}",
            self.ticks,
            sample.get(),
            intensity.get(),
            dimmer.get(),
            tone.frequency_hz,
            tone.amplitude
        );

        ActuationFrame {
            sample,
            intensity,
            dimmer,
            tone,
            light_bar,
            balance,
        }
    }

    /// Push a balance change to the display and the tone channel.
    ///
    /// The tone is re-driven with the last tick's intensity so the new volume
    /// is audible before the next sample is taken.
    pub async fn refresh_balance(&mut self, snapshot: BalanceSnapshot) {
        info!(
            "balance {}:{}",
            snapshot.balance.a(),
            snapshot.balance.b()
        );
        let lines = status::present(snapshot.balance);
        if self.devices.display.render(&lines).await.is_err() {
            warn!("status render failed");
        }
        self.drive_tone(self.last_intensity, snapshot);
    }

    /// Render the current balance, then tick forever.
    pub async fn run(&mut self) -> ! {
        let balance = self.balance;
        self.refresh_balance(balance.snapshot()).await;

        let mut ticker = Ticker::every(self.tick_period);
        loop {
            // Balance first: a press must be on screen before the next tick.
            match select(balance.wait_changed(), ticker.next()).await {
                Either::First(snapshot) => self.refresh_balance(snapshot).await,
                Either::Second(()) => {
                    self.scheduled_tick().await;
                }
            }
        }
    }

    /// A tick that first applies a balance change that raced the ticker.
    async fn scheduled_tick(&mut self) -> ActuationFrame {
        if let Some(snapshot) = self.balance.take_changed() {
            self.refresh_balance(snapshot).await;
        }
        self.tick().await
    }

    fn drive_tone(&mut self, intensity: Intensity, balance: BalanceSnapshot) -> ToneCommand {
        let tone = self.tone_shaper.shape(intensity, balance.volume);
        if self.devices.tone.set_tone(tone).is_err() {
            warn!("tone write failed");
        }
        tone
    }
}
