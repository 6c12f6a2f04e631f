use gps_point::{Format, Point, Unit};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <coordinates> [<other coordinates>]", args[0]);
        std::process::exit(1);
    }

    let point: Point = args[1].parse()?;

    println!("=== Point ===");
    println!("Decimal degrees:         {}", point.get(Format::DecimalDegrees));
    println!("Decimal minutes:         {}", point.get(Format::DecimalMinutes));
    println!(
        "Degrees minutes seconds: {}",
        point.get(Format::DegreesMinutesSeconds)
    );

    if let Some(other) = args.get(2) {
        let other: Point = other.parse()?;

        println!("\n=== Distance to {} ===", other);
        println!("{} km", point.distance_to(&other, Unit::Kilometers));
        println!("{} m", point.distance_to(&other, Unit::Meters));
    }

    Ok(())
}
