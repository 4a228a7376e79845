//! Signal Bar Controller - Main Entry Point
//!
//! Hardware-only entry point for STM32H743ZI.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::adc::Adc;
use embassy_stm32::bind_interrupts;
use embassy_stm32::dma::NoDma;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{AnyPin, Input, OutputType, Pull};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::peripherals;
use embassy_stm32::spi::{Config as SpiConfig, Spi};
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::timer::{Channel, CountingMode};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;
use static_cell::StaticCell;

use firmware::board::{AdcSource, TimerChannel, DIMMER_PWM_HZ, LED_SPI_HZ, OLED_I2C_HZ};
use firmware::display::{Ssd1306, TextDisplay};
use firmware::hal::{PwmDimmer, PwmTone};
use firmware::input::hardware::{spawn_button_tasks, ExtiButton};
use firmware::led::SpiLedStrip;
use pipeline::config::TONE_MIN_HZ;
use pipeline::{BalanceCell, Devices, Pipeline};
use platform::Button;

// Panic handler + RTT transport
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    I2C1_EV => i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

/// Shared between the button tasks (writers) and the pipeline (reader).
static BALANCE: StaticCell<BalanceCell<CriticalSectionRawMutex>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    defmt::info!("{=str}", platform::config::app_title());

    // Step 1: clocks
    let p = embassy_stm32::init(firmware::boot::build_embassy_config());

    // Step 2: configuration. Nothing is driven until this passes.
    let config = match firmware::boot::board_config() {
        Ok(config) => config,
        Err(err) => firmware::boot::halt(err).await,
    };
    let balance: &'static BalanceCell<CriticalSectionRawMutex> =
        BALANCE.init(BalanceCell::from_config(&config));

    // Step 3: peripherals
    let source = AdcSource::new(Adc::new(p.ADC1, &mut Delay), p.PC0);

    let dimmer_pwm = SimplePwm::new(
        p.TIM3,
        Some(PwmPin::new_ch1(p.PA6, OutputType::PushPull)),
        None,
        None,
        None,
        Hertz(DIMMER_PWM_HZ),
        CountingMode::EdgeAlignedUp,
    );
    let dimmer = PwmDimmer::new(TimerChannel::new(dimmer_pwm, Channel::Ch1));

    let buzzer_pwm = SimplePwm::new(
        p.TIM4,
        Some(PwmPin::new_ch1(p.PD12, OutputType::PushPull)),
        None,
        None,
        None,
        Hertz(u32::from(TONE_MIN_HZ)),
        CountingMode::EdgeAlignedUp,
    );
    let tone = PwmTone::new(TimerChannel::new(buzzer_pwm, Channel::Ch1));

    let mut spi_config = SpiConfig::default();
    spi_config.frequency = Hertz(LED_SPI_HZ);
    let strip = SpiLedStrip::new(Spi::new_txonly(
        p.SPI2, p.PB10, // SCK (not connected)
        p.PB15, // MOSI → DIN of the first pixel
        NoDma, NoDma, spi_config,
    ));

    let i2c = I2c::new(
        p.I2C1,
        p.PB8,
        p.PB9,
        Irqs,
        NoDma,
        NoDma,
        Hertz(OLED_I2C_HZ),
        i2c::Config::default(),
    );

    // Step 4: OLED
    let mut oled = Ssd1306::new(i2c);
    if let Err(e) = oled.init() {
        // The pipeline keeps running; renders will keep failing and be logged.
        defmt::error!("OLED init failed: {}", e);
    }
    let display = TextDisplay::new(oled);

    // Step 5: buttons
    let button_a: ExtiInput<'static, AnyPin> =
        ExtiInput::new(Input::new(p.PD3, Pull::Up).degrade(), p.EXTI3.degrade());
    let button_b: ExtiInput<'static, AnyPin> =
        ExtiInput::new(Input::new(p.PD4, Pull::Up).degrade(), p.EXTI4.degrade());
    if let Err(e) = spawn_button_tasks(
        &spawner,
        [
            ExtiButton::new(button_a, Button::A),
            ExtiButton::new(button_b, Button::B),
        ],
        balance,
    ) {
        defmt::error!("button task spawn failed: {}", e);
    }

    // Step 6: pipeline
    let mut pipeline = Pipeline::new(
        &config,
        balance,
        Devices {
            source,
            dimmer,
            tone,
            strip,
            display,
        },
    );
    defmt::info!("entering tick loop");
    pipeline.run().await
}
