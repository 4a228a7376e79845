//! Board bring-up for the signal bar controller.
//!
//! Initialization order (MUST be respected):
//!   1. Clocks (PLL1 for the core and SPI2, PLL2 for the ADC kernel clock)
//!   2. Validate the pipeline configuration; halt on error
//!   3. Peripherals: ADC, PWM timers, SPI2 (light bar), I2C1 (OLED)
//!   4. OLED init
//!   5. Button tasks
//!   6. Pipeline: first status render, then the tick loop

use pipeline::{ConfigError, PipelineConfig, ValidatedConfig};

/// Ordered list of boot steps, for documentation and testing.
///
/// The configuration must be validated before any peripheral is driven, and
/// the button tasks must be running before the first status render so that
/// no press is lost between the two.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. RCC: PLL1 400 MHz core + 80 MHz SPI kernel, PLL2_P 50 MHz ADC kernel",
    "2. Config: validate PipelineConfig, halt on ConfigError",
    "3. Peripherals: ADC1, TIM3/TIM4 PWM, SPI2 MOSI, I2C1",
    "4. OLED: SSD1306 init sequence",
    "5. Buttons: spawn one EXTI task per button",
    "6. Pipeline: render status, then tick every TICK_PERIOD_MS",
];

/// The configuration this board runs with.
pub const BOARD_CONFIG: PipelineConfig = PipelineConfig::default_config();

/// Validate [`BOARD_CONFIG`].
pub fn board_config() -> Result<ValidatedConfig, ConfigError> {
    BOARD_CONFIG.validate()
}

/// Build the Embassy RCC configuration for the STM32H743ZI.
///
/// # Clock Tree (HSI → 400 MHz core)
///
/// HSI (64 MHz) → PLL1 (prediv=4, mul=50) → VCO 800 MHz
///   PLL1_P: DIV2  → 400 MHz (sys)
///   PLL1_Q: DIV10 → 80 MHz  (SPI1/2/3 kernel clock; /32 = 2.5 MHz WS2812 bit clock)
/// PLL2: source=HSI, prediv=8, mul=100 → VCO 800 MHz
///   PLL2_P: DIV16 → 50 MHz (ADC kernel clock, the ADC maximum)
/// AHB prescaler: DIV2 → 200 MHz
/// APB1/2/3/4:    DIV2 → 100 MHz
#[cfg(feature = "hardware")]
pub fn build_embassy_config() -> embassy_stm32::Config {
    use embassy_stm32::rcc::*;

    let mut config = embassy_stm32::Config::default();

    // ── Oscillators ─────────────────────────────────────────────────────────
    config.rcc.hsi = Some(HSIPrescaler::DIV1);
    // CSI: required for some analog peripherals on H7
    config.rcc.csi = true;

    // ── PLL1: system clock + SPI kernel clock ────────────────────────────────
    config.rcc.pll1 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV4,
        mul: PllMul::MUL50,
        divp: Some(PllDiv::DIV2),  // 400 MHz, system clock
        divq: Some(PllDiv::DIV10), // 80 MHz, SPI123SEL default mux
        divr: None,
    });

    // ── PLL2: ADC kernel clock ───────────────────────────────────────────────
    config.rcc.pll2 = Some(Pll {
        source: PllSource::HSI,
        prediv: PllPreDiv::DIV8,
        mul: PllMul::MUL100,
        divp: Some(PllDiv::DIV16), // 50 MHz, ADCSEL default mux
        divq: None,
        divr: None,
    });
    config.rcc.mux.adcsel = mux::Adcsel::PLL2_P;

    // ── System clock + bus prescalers ────────────────────────────────────────
    config.rcc.sys = Sysclk::PLL1_P; // 400 MHz
    config.rcc.ahb_pre = AHBPrescaler::DIV2; // 200 MHz
    config.rcc.apb1_pre = APBPrescaler::DIV2; // 100 MHz
    config.rcc.apb2_pre = APBPrescaler::DIV2; // 100 MHz
    config.rcc.apb3_pre = APBPrescaler::DIV2; // 100 MHz
    config.rcc.apb4_pre = APBPrescaler::DIV2; // 100 MHz
    config.rcc.voltage_scale = VoltageScale::Scale1;

    config
}

/// Park forever after a fatal startup error. The tick loop never starts.
#[cfg(feature = "hardware")]
pub async fn halt(err: ConfigError) -> ! {
    defmt::error!("invalid configuration: {}", err);
    loop {
        embassy_time::Timer::after_secs(1).await;
    }
}
