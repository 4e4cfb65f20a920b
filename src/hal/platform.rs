//! Platform bring-up
//!
//! Clocks the STM32G474 from its internal oscillator and configures the
//! serial lines and inputs. Outputs are created at their idle levels so no
//! line floats between reset and the first transaction.

use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_time::Delay;

use super::gpio::ConfigSwitch;
use super::lines::PinLines;

/// Serial lines as wired on the board
pub type BoardLines = PinLines<Output<'static>, Output<'static>, Output<'static>, Output<'static>>;

/// Everything the control loop needs from the board
pub struct Platform {
    /// DATA, CLK, LE, CS
    pub lines: BoardLines,
    /// Configuration switch
    pub config_switch: ConfigSwitch<'static>,
    /// Spare pulled-up input, held so the pin stays configured
    pub aux_input: Input<'static>,
    /// Blocking delay
    pub delay: Delay,
}

/// Bring up clocks and GPIO
#[must_use]
pub fn initialize_platform() -> Platform {
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    let data = Output::new(p.PA0, Level::Low, Speed::VeryHigh);
    let clock = Output::new(p.PA1, Level::Low, Speed::VeryHigh);
    let latch_enable = Output::new(p.PA2, Level::Low, Speed::VeryHigh);
    let chip_select = Output::new(p.PA4, Level::High, Speed::VeryHigh);

    let aux_input = Input::new(p.PA3, Pull::Up);
    let config_switch = ConfigSwitch::new(Input::new(p.PA5, Pull::Up));

    info!("platform up: lines idle, inputs pulled up");

    Platform {
        lines: PinLines::new(data, clock, latch_enable, chip_select),
        config_switch,
        aux_input,
        delay: Delay,
    }
}
