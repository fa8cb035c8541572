//! Board entry point: bring the peripherals up, seed the animation RNG,
//! and park in the dispatch loop forever.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use embedded_hal::PwmPin;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use led_tower_firmware::animation::Catalog;
    use led_tower_firmware::config::{POWER_ON_BRIGHTNESS, RNG_SEED};
    use led_tower_firmware::console::Console;
    use led_tower_firmware::display::Transmitter;
    use led_tower_firmware::hal::{gpio, CycleDelay, Dimmer, DisplayBus, TickTimer};
    use led_tower_firmware::scheduler::isr;
    use led_tower_firmware::tower::{LedTower, Tower, Unwind};

    let mut console = Console::new();
    console.write_line("LED tower firmware v0.1.0");

    let latch = gpio::board::LatchStrobe::new().into_output();
    let link = Transmitter::new(DisplayBus::new(), latch, CycleDelay);

    let mut dimmer = Dimmer::new();
    dimmer.enable();

    let mut tower = LedTower::new(
        link,
        CycleDelay,
        dimmer,
        SmallRng::seed_from_u64(RNG_SEED),
        isr::SharedRotation,
    );
    tower.set_brightness(POWER_ON_BRIGHTNESS);

    let _tick = TickTimer::start();
    // Safety: the only interrupt in the system is the Timer0 tick, and its
    // handler touches nothing but the rotation state.
    unsafe { avr_device::interrupt::enable() };
    console.write_line("Ready...");

    let mut catalog = Catalog::new();
    let mut last_index = Catalog::LEN;

    // The dispatch checkpoint. Animations come back here when they finish
    // on their own or when a rotation unwinds them.
    loop {
        let index = isr::begin_pass();
        if index != last_index {
            last_index = index;
            ufmt::uwriteln!(&mut console, "animation {}", index).ok();
        }

        match catalog.run(index, &mut tower) {
            Ok(()) => {}
            Err(Unwind::Rotation) => {}
            Err(Unwind::Fault(fault)) => {
                ufmt::uwriteln!(&mut console, "display fault: {:?}", fault).ok();
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    // The firmware image only means something on the tower's AVR board;
    // host builds exist for the library and its tests.
}
