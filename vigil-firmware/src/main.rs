//! Vigil - Seven-Segment Alarm Clock Firmware
//!
//! Main firmware binary for RP2040 boards driving an HT16K33 4-digit
//! backpack. Shows the time of day, and blinks the display when the alarm
//! minute arrives. Holding the arm button while pressing increment or
//! decrement moves the alarm by one minute.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vigil_core::config::{parse_config, ClockConfig};
use vigil_core::input::ButtonPins;
use vigil_core::traits::SegmentDisplay;
use vigil_drivers::display::Ht16k33;
use vigil_hal::I2cConfig;
use vigil_hal_rp2040::{Button, DisplayBus, I2cBusError, RtcClock};

mod channels;
mod tasks;

/// Clock configuration, validated and embedded by the build script
const CLOCK_CONFIG: &str = include_str!(concat!(env!("OUT_DIR"), "/clock.toml"));

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vigil firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    // Wall clock
    let clock = match RtcClock::new(p.RTC) {
        Ok(clock) => clock,
        Err(e) => {
            error!("RTC start failed: {:?}", e);
            panic!("RTC start failed");
        }
    };

    // Display bus
    // Pin assignments: I2C0 SDA=GPIO4 SCL=GPIO5, I2C1 SDA=GPIO6 SCL=GPIO7
    let bus = if config.display.dry_run {
        info!("Dry run: display writes are logged only");
        DisplayBus::dry()
    } else {
        match config.display.i2c_bus {
            0 => DisplayBus::i2c0(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::STANDARD),
            1 => DisplayBus::i2c1(p.I2C1, p.PIN_7, p.PIN_6, I2cConfig::STANDARD),
            n => {
                error!("Unsupported I2C bus {}", n);
                panic!("unsupported I2C bus");
            }
        }
    };

    let mut display = Ht16k33::new(bus, config.display.i2c_address);
    if let Err(e) = init_display(&mut display) {
        error!("Display init failed at {=u8:#x}: {:?}", display.address(), e);
        panic!("display init failed");
    }
    info!("Display initialized at {=u8:#x}", display.address());

    // Buttons (active low, internal pull-ups)
    let pins = ButtonPins {
        increment: Button::new(p.PIN_18),
        decrement: Button::new(p.PIN_19),
        arm: Button::new(p.PIN_20),
    };

    // Console on UART0 (GPIO0 TX, GPIO1 RX)
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);

    info!("UART initialized for console");

    // Spawn tasks
    spawner.spawn(unwrap!(tasks::display_writer_task(display)));
    spawner.spawn(unwrap!(tasks::blink_task(config.alarm.blink_ms)));
    spawner.spawn(unwrap!(tasks::button_task(pins, config.input)));
    spawner.spawn(unwrap!(tasks::coordinator_task(config.alarm.time, clock)));
    spawner.spawn(unwrap!(tasks::console_task(uart)));

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration
///
/// The build script has already validated the file, so a failure here
/// means the runtime parser and the build check disagree.
fn load_config() -> ClockConfig {
    match parse_config(CLOCK_CONFIG) {
        Ok(config) => {
            info!(
                "Configuration loaded: bus {}, address {=u8:#x}, dry run {}",
                config.display.i2c_bus, config.display.i2c_address, config.display.dry_run
            );
            config
        }
        Err(e) => {
            error!("Failed to parse clock configuration: {:?}", e);
            panic!("invalid clock configuration");
        }
    }
}

/// Bring the display up blank with the colon lit
fn init_display(display: &mut Ht16k33<DisplayBus>) -> Result<(), I2cBusError> {
    display.initialize()?;
    display.clear()?;
    display.set_colon(true)
}
