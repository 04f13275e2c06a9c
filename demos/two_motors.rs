//! Two-motor example.
//!
//! Builds a pool from a TOML configuration, then drives one motor to a
//! target in normal mode and lets the other oscillate between two targets.
//!
//! Registers are plain `Cell<u8>` values, so this runs without hardware.

use core::cell::Cell;

use stepper_pool::{parse_config, Direction, Port, PortMap, StepperPool};

const CONFIG: &str = r#"
[motors.turntable]
name = "Turntable"
speed = 40
direction = { port = "PORTB", bit = 0 }
enable = { port = "PORTB", bit = 1 }
step = { port = "PORTB", bit = 2 }
resolution_select = [
    { port = "PORTD", bit = 4 },
    { port = "PORTD", bit = 5 },
    { port = "PORTD", bit = 6 },
]
resolution = "sixteenth"

[motors.wiper]
name = "Wiper"
speed = 10
direction = { port = "PORTC", bit = 0 }
enable = { port = "PORTC", bit = 1 }
step = { port = "PORTC", bit = 2 }
mode = "oscillate"
"#;

fn main() -> Result<(), stepper_pool::Error> {
    println!("=== Two Motor Example ===\n");

    let portb: Port<Cell<u8>> = Port::default();
    let portc: Port<Cell<u8>> = Port::default();
    let portd: Port<Cell<u8>> = Port::default();

    let ports = PortMap::new()
        .with("PORTB", &portb)?
        .with("PORTC", &portc)?
        .with("PORTD", &portd)?;

    let config = parse_config(CONFIG)?;
    let mut pool: StepperPool<'_, Cell<u8>> = StepperPool::new();

    let turntable = pool.construct_named(&config, "turntable", &ports)?;
    let wiper = pool.construct_named(&config, "wiper", &ports)?;
    println!("Constructed {} of {} motors", pool.active_count(), pool.capacity());
    println!(
        "PORTB out={:#010b} ddr={:#010b}",
        portb.output.get(),
        portb.data_direction.get()
    );

    // Turntable: quarter turn forward.
    pool.enable(turntable)?;
    pool.set_direction(turntable, Direction::Forward)?;
    pool.set_position(turntable, 50, 0)?;

    let mut pulses = 0;
    while pool.step_engage(turntable)? {
        pool.step_release(turntable)?;
        pulses += 1;
    }
    println!(
        "Turntable at {} after {} pulses (speed {}, {:?})",
        pool.position(turntable)?.value(),
        pulses,
        pool.speed(turntable)?.value(),
        pool.resolution(turntable)?,
    );

    // Wiper: sweep between 0 and 5 a few times.
    pool.enable(wiper)?;
    pool.set_position(wiper, 5, 0)?;
    for _ in 0..20 {
        pool.step_engage(wiper)?;
        pool.step_release(wiper)?;
        let targets = pool.targets(wiper)?;
        println!(
            "Wiper at {:3} heading {:?} toward {}",
            pool.position(wiper)?.value(),
            pool.direction(wiper)?,
            targets.primary.value()
        );
    }

    pool.disable(turntable)?;
    pool.disable(wiper)?;
    pool.destruct(turntable)?;
    pool.destruct(wiper)?;
    println!("\nAll motors released; {} active", pool.active_count());

    Ok(())
}
