//! STM32H743ZI wiring for the signal bar controller.
//!
//! | Device          | Peripheral      | Pins             |
//! |-----------------|-----------------|------------------|
//! | Analog sensor   | ADC1 INP10      | PC0              |
//! | Indicator LED   | TIM3 CH1 PWM    | PA6              |
//! | Buzzer          | TIM4 CH1 PWM    | PD12             |
//! | Light bar       | SPI2 MOSI       | PB15 (SCK PB10 unused) |
//! | OLED (SSD1306)  | I2C1            | PB8 SCL, PB9 SDA |
//! | Button A / B    | EXTI3 / EXTI4   | PD3 / PD4        |
//!
//! The adapters here bridge Embassy's concrete peripheral types to the
//! `embedded-hal` and `platform` traits the rest of the crate is written
//! against.

use core::convert::Infallible;

use embassy_stm32::adc::{Adc, AdcPin, Resolution};
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;
use embassy_stm32::timer::{CaptureCompare16bitInstance, Channel};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use platform::{AcquisitionSource, RawSample};

use crate::hal::ToneFrequency;

/// Dimmer PWM carrier frequency.
pub const DIMMER_PWM_HZ: u32 = 1_000;

/// I2C clock for the OLED.
pub const OLED_I2C_HZ: u32 = 400_000;

/// SPI clock for the light bar (3 SPI bits per WS2812 bit).
pub const LED_SPI_HZ: u32 = 2_500_000;

/// One-shot ADC conversions on a single pin.
pub struct AdcSource<'d, P> {
    adc: Adc<'d, ADC1>,
    pin: P,
}

impl<'d, P: AdcPin<ADC1>> AdcSource<'d, P> {
    /// Configure `adc` for 12-bit conversions of `pin`.
    pub fn new(mut adc: Adc<'d, ADC1>, pin: P) -> Self {
        adc.set_resolution(Resolution::TwelveBit);
        Self { adc, pin }
    }
}

impl<P: AdcPin<ADC1>> AcquisitionSource for AdcSource<'_, P> {
    fn read(&mut self) -> RawSample {
        RawSample::new(self.adc.read(&mut self.pin))
    }
}

/// One channel of a [`SimplePwm`] timer, exposed through `embedded-hal`.
pub struct TimerChannel<'d, T: CaptureCompare16bitInstance> {
    pwm: SimplePwm<'d, T>,
    channel: Channel,
}

impl<'d, T: CaptureCompare16bitInstance> TimerChannel<'d, T> {
    /// Take the timer and enable `channel` at zero duty.
    pub fn new(mut pwm: SimplePwm<'d, T>, channel: Channel) -> Self {
        pwm.set_duty(channel, 0);
        pwm.enable(channel);
        Self { pwm, channel }
    }
}

impl<T: CaptureCompare16bitInstance> ErrorType for TimerChannel<'_, T> {
    type Error = Infallible;
}

impl<T: CaptureCompare16bitInstance> SetDutyCycle for TimerChannel<'_, T> {
    fn max_duty_cycle(&self) -> u16 {
        self.pwm.get_max_duty()
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.pwm.set_duty(self.channel, duty);
        Ok(())
    }
}

impl<T: CaptureCompare16bitInstance> ToneFrequency for TimerChannel<'_, T> {
    type Error = Infallible;

    fn set_frequency_hz(&mut self, hz: u16) -> Result<(), Infallible> {
        self.pwm.set_frequency(Hertz(u32::from(hz)));
        Ok(())
    }
}
